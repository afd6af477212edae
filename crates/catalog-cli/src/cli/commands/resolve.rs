//! `catalog resolve <bucket-id> <name>` – print content with links substituted.

use anyhow::{Context, Result};
use catalog_core::service::CatalogObjectService;
use catalog_core::transport::Transport;

use crate::cli::Endpoint;

pub fn run_resolve<T: Transport>(
    service: &CatalogObjectService<T>,
    endpoint: &Endpoint,
    bucket_id: i64,
    name: &str,
    resolve_links: bool,
) -> Result<()> {
    let content = service
        .get_resolved_catalog_object(
            &endpoint.catalog_url,
            bucket_id,
            name,
            resolve_links,
            &endpoint.session_id,
        )
        .with_context(|| format!("resolve {} in bucket {}", name, bucket_id))?;
    print!("{}", content);
    Ok(())
}
