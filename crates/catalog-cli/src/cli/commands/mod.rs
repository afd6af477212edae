//! CLI command handlers, one file per command.

mod metadata;
mod raw;
mod resolve;
mod url;

pub use metadata::run_metadata;
pub use raw::run_raw;
pub use resolve::run_resolve;
pub use url::run_url;
