//! `catalog url <bucket-id> <name> [--raw]` – print a resource URL.

use catalog_core::service::CatalogObjectService;
use catalog_core::transport::Transport;

use crate::cli::Endpoint;

pub fn run_url<T: Transport>(
    service: &CatalogObjectService<T>,
    endpoint: &Endpoint,
    bucket_id: i64,
    name: &str,
    raw: bool,
) {
    println!("{}", service.get_url(&endpoint.catalog_url, bucket_id, name, raw));
}
