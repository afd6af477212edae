//! Catalog object metadata record.

use serde::{Deserialize, Serialize};

/// One key/value entry attached to a catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueMetadata {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    /// Grouping label (e.g. `job_information`, `General`).
    #[serde(default)]
    pub label: Option<String>,
}

/// Metadata the catalog returns for a resource.
///
/// Only the commonly used fields are typed. Everything else the server sends
/// is kept verbatim in `extra`, so the record survives schema additions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogObject {
    #[serde(default, alias = "bucket_id")]
    pub bucket_id: Option<i64>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, alias = "content_type")]
    pub content_type: Option<String>,
    #[serde(default, alias = "commit_message")]
    pub commit_message: Option<String>,
    #[serde(default, alias = "commit_time")]
    pub commit_time: Option<String>,
    #[serde(default, alias = "object_key_values")]
    pub metadata: Vec<KeyValueMetadata>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogObject {
    /// Value of the first metadata entry named `key`.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .and_then(|m| m.value.as_deref())
    }
}
