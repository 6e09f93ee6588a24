//! In-memory document store
//!
//! Backs tests and ephemeral runs. Collections are insertion-ordered maps
//! from identity to document, so listing and counting stay deterministic.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{document_id, field_at_path, DocumentStore, RecordId};
use crate::error::{AppError, AppResult};

type Collections = HashMap<String, IndexMap<String, Value>>;

/// Ephemeral store keeping all collections in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| AppError::Store("memory store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Value) -> AppResult<RecordId> {
        let id = RecordId::generate();
        document["_id"] = Value::String(id.to_string());
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        path: &str,
        value: &str,
    ) -> AppResult<Option<Value>> {
        let collections = self.lock()?;
        let found = collections.get(collection).and_then(|docs| {
            docs.values()
                .find(|doc| field_at_path(doc, path).and_then(Value::as_str) == Some(value))
                .cloned()
        });
        Ok(found)
    }

    async fn save(&self, collection: &str, mut document: Value) -> AppResult<RecordId> {
        let id = document_id(&document).unwrap_or_else(RecordId::generate);
        document["_id"] = Value::String(id.to_string());
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(id)
    }

    async fn count(&self, collection: &str) -> AppResult<u64> {
        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_identity() {
        let store = MemoryStore::new();
        let id = store
            .insert("pais", json!({"nombre": {"es": "México"}}))
            .await
            .unwrap();

        let found = store
            .find_one("pais", "nombre.es", "México")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["_id"], json!(id.as_str()));
        assert_eq!(store.count("pais").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_by_identity() {
        let store = MemoryStore::new();
        let id = store
            .insert("disciplina", json!({"nombre": {"es": "Química"}}))
            .await
            .unwrap();

        let saved = store
            .save(
                "disciplina",
                json!({"_id": id.as_str(), "nombre": {"es": "Química", "en": "Chemistry"}}),
            )
            .await
            .unwrap();

        assert_eq!(saved, id);
        assert_eq!(store.count("disciplina").await.unwrap(), 1);
        let found = store
            .find_one("disciplina", "nombre.en", "Chemistry")
            .await
            .unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_save_without_identity_inserts() {
        let store = MemoryStore::new();
        store
            .save("idioma", json!({"nombre": {"es": "Español"}}))
            .await
            .unwrap();
        assert_eq!(store.count("idioma").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_one_missing() {
        let store = MemoryStore::new();
        assert!(store
            .find_one("pais", "nombre.es", "Atlántida")
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.count("pais").await.unwrap(), 0);
    }
}
