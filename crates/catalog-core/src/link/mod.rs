//! `PA:GET_FROM_URL("url")` link directives embedded in catalog resources.
//!
//! A directive is replaced by the content fetched from its URL. Both the plain
//! double-quoted form and the HTML-escaped `&quot;` form (as found in XML
//! workflows) are recognized.

mod resolve;
mod token;

pub use resolve::resolve_links;
pub use token::{extract_url_from_token, GET_FROM_URL, TOKEN_PATTERN};
