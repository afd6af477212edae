//! `catalog raw <bucket-id> <name>` – print resource content as stored.

use anyhow::{Context, Result};
use catalog_core::service::CatalogObjectService;
use catalog_core::transport::Transport;

use crate::cli::Endpoint;

pub fn run_raw<T: Transport>(
    service: &CatalogObjectService<T>,
    endpoint: &Endpoint,
    bucket_id: i64,
    name: &str,
) -> Result<()> {
    let content = service
        .get_raw_catalog_object(&endpoint.catalog_url, bucket_id, name, &endpoint.session_id)
        .with_context(|| format!("content of {} in bucket {}", name, bucket_id))?;
    print!("{}", content);
    Ok(())
}
