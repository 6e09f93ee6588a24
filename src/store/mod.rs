//! Document store abstraction
//!
//! The catalog loader talks to persistence through the [`DocumentStore`]
//! trait: schemaless JSON documents grouped in named collections, addressed
//! by an opaque store-assigned identity carried in the `_id` field. The
//! store handle is constructed by the caller and injected into the loader;
//! no global connection exists.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::error::AppResult;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque identity of a persisted record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identity
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Generic create/query/update interface over a document database
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document under a fresh identity
    async fn insert(&self, collection: &str, document: Value) -> AppResult<RecordId>;

    /// Find one document whose field at `path` (dotted, e.g. `nombre.es`)
    /// equals `value`
    async fn find_one(&self, collection: &str, path: &str, value: &str)
        -> AppResult<Option<Value>>;

    /// Insert-or-replace by the identity carried in the document's `_id`
    /// field; a document without an identity gets a fresh one
    async fn save(&self, collection: &str, document: Value) -> AppResult<RecordId>;

    /// Number of documents in a collection
    async fn count(&self, collection: &str) -> AppResult<u64>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<S> {
    async fn insert(&self, collection: &str, document: Value) -> AppResult<RecordId> {
        (**self).insert(collection, document).await
    }

    async fn find_one(
        &self,
        collection: &str,
        path: &str,
        value: &str,
    ) -> AppResult<Option<Value>> {
        (**self).find_one(collection, path, value).await
    }

    async fn save(&self, collection: &str, document: Value) -> AppResult<RecordId> {
        (**self).save(collection, document).await
    }

    async fn count(&self, collection: &str) -> AppResult<u64> {
        (**self).count(collection).await
    }
}

/// Resolve a dotted field path inside a document
pub(crate) fn field_at_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Identity recorded in a document, when present
pub(crate) fn document_id(document: &Value) -> Option<RecordId> {
    document
        .get("_id")
        .and_then(Value::as_str)
        .map(RecordId::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_at_path() {
        let doc = json!({"nombre": {"es": "Química", "en": "Chemistry"}});
        assert_eq!(
            field_at_path(&doc, "nombre.es"),
            Some(&json!("Química"))
        );
        assert_eq!(field_at_path(&doc, "nombre.fr"), None);
        assert_eq!(field_at_path(&doc, "alpha2"), None);
    }

    #[test]
    fn test_document_id() {
        assert_eq!(
            document_id(&json!({"_id": "abc", "nombre": {}})),
            Some(RecordId::from("abc"))
        );
        assert_eq!(document_id(&json!({"nombre": {}})), None);
    }
}
