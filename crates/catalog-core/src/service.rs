//! Catalog object queries: metadata, raw content, and link-resolved content.

use crate::catalog_url::resource_url;
use crate::link;
use crate::model::CatalogObject;
use crate::transport::{Transport, TransportError};

/// Queries the catalog through an injected [`Transport`].
///
/// Holds no state besides the transport; errors from it are returned unchanged.
#[derive(Debug, Clone)]
pub struct CatalogObjectService<T> {
    transport: T,
}

impl<T: Transport> CatalogObjectService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the metadata record of `name` in bucket `bucket_id`.
    pub fn get_catalog_object_metadata(
        &self,
        catalog_url: &str,
        bucket_id: i64,
        name: &str,
        session_id: &str,
    ) -> Result<CatalogObject, TransportError> {
        let url = self.get_url(catalog_url, bucket_id, name, false);
        self.transport.fetch_typed(&url, session_id)
    }

    /// Fetches the content of `name` in bucket `bucket_id` as text.
    pub fn get_raw_catalog_object(
        &self,
        catalog_url: &str,
        bucket_id: i64,
        name: &str,
        session_id: &str,
    ) -> Result<String, TransportError> {
        let url = self.get_url(catalog_url, bucket_id, name, true);
        self.transport.fetch_text(&url, session_id)
    }

    /// Fetches the content of `resource_id` and, when `resolve_links` is set,
    /// replaces every `PA:GET_FROM_URL(...)` directive with the content of its URL.
    pub fn get_resolved_catalog_object(
        &self,
        catalog_url: &str,
        bucket_id: i64,
        resource_id: &str,
        resolve_links: bool,
        session_id: &str,
    ) -> Result<String, TransportError> {
        let resource = self.get_raw_catalog_object(catalog_url, bucket_id, resource_id, session_id)?;
        if !resolve_links {
            return Ok(resource);
        }
        link::resolve_links(resource, |url| self.transport.fetch_text(url, session_id))
    }

    /// URL of a catalog resource: metadata when `raw` is false, content otherwise.
    pub fn get_url(&self, catalog_url: &str, bucket_id: i64, name: &str, raw: bool) -> String {
        let url = resource_url(catalog_url, bucket_id, name, raw);
        tracing::debug!("catalog url for bucket {} resource {}: {}", bucket_id, name, url);
        url
    }
}
