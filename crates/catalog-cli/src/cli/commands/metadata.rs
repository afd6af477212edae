//! `catalog metadata <bucket-id> <name>` – print the metadata record as JSON.

use anyhow::{Context, Result};
use catalog_core::service::CatalogObjectService;
use catalog_core::transport::Transport;

use crate::cli::Endpoint;

pub fn run_metadata<T: Transport>(
    service: &CatalogObjectService<T>,
    endpoint: &Endpoint,
    bucket_id: i64,
    name: &str,
) -> Result<()> {
    let obj = service
        .get_catalog_object_metadata(&endpoint.catalog_url, bucket_id, name, &endpoint.session_id)
        .with_context(|| format!("metadata of {} in bucket {}", name, bucket_id))?;
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
