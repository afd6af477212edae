//! Catalog resource URL convention.
//!
//! `{catalog_url}[/]buckets/{bucket_id}/resources/{name}[/raw]`: the plain form
//! addresses the metadata record, the `/raw` form the resource content.

const BUCKETS_PATH: &str = "buckets/";
const RESOURCES_PATH: &str = "/resources/";
const RAW_PATH: &str = "/raw";

/// Builds the URL of a catalog resource.
///
/// A `/` is inserted after `catalog_url` only when it does not already end
/// with one. `raw` selects the content (`/raw`) instead of the metadata.
///
/// # Examples
///
/// - `resource_url("http://host/catalog", 1, "wf", false)` → `"http://host/catalog/buckets/1/resources/wf"`
/// - `resource_url("http://host/catalog/", 1, "wf", true)` → `"http://host/catalog/buckets/1/resources/wf/raw"`
pub fn resource_url(catalog_url: &str, bucket_id: i64, name: &str, raw: bool) -> String {
    let separator = if catalog_url.ends_with('/') { "" } else { "/" };
    let suffix = if raw { RAW_PATH } else { "" };
    format!(
        "{}{}{}{}{}{}{}",
        catalog_url, separator, BUCKETS_PATH, bucket_id, RESOURCES_PATH, name, suffix
    )
}
