pub mod config;
pub mod logging;

pub mod catalog_url;
pub mod link;
pub mod model;
pub mod service;
pub mod transport;
