//! File-backed document store
//!
//! One JSON array file per collection under a base directory. Collections
//! are loaded once at open and written back after every mutation, which is
//! adequate for a one-shot administrative load.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{document_id, field_at_path, DocumentStore, RecordId};
use crate::error::{AppError, AppResult};

type Collections = HashMap<String, IndexMap<String, Value>>;

/// Store persisting each collection as `<dir>/<collection>.json`
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    collections: Mutex<Collections>,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed and
    /// loading any existing collection files
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let mut collections = Collections::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let documents: Vec<Value> = serde_json::from_str(&fs::read_to_string(&path)?)?;
            let mut docs = IndexMap::new();
            for document in documents {
                let id = document_id(&document).unwrap_or_else(RecordId::generate);
                docs.insert(id.to_string(), document);
            }
            collections.insert(name.to_string(), docs);
        }

        Ok(Self {
            dir,
            collections: Mutex::new(collections),
        })
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| AppError::Store("file store mutex poisoned".to_string()))
    }

    fn flush(&self, collection: &str, docs: &IndexMap<String, Value>) -> AppResult<()> {
        let documents: Vec<&Value> = docs.values().collect();
        let path = self.dir.join(format!("{collection}.json"));
        fs::write(path, serde_json::to_string_pretty(&documents)?)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn insert(&self, collection: &str, mut document: Value) -> AppResult<RecordId> {
        let id = RecordId::generate();
        document["_id"] = Value::String(id.to_string());
        let mut collections = self.lock()?;
        let docs = collections.entry(collection.to_string()).or_default();
        docs.insert(id.to_string(), document);
        self.flush(collection, docs)?;
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
        let mut collections = self.lock()?;
        let docs = collections.entry(collection.to_string()).or_default();
        docs.insert(id.to_string(), document);
        self.flush(collection, docs)?;
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

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "biblat-store-{name}-{}",
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_round_trip_across_reopen() {
        let dir = temp_dir("reopen");

        let id = {
            let store = FileStore::open(&dir).unwrap();
            store
                .insert("pais", json!({"nombre": {"es": "México"}, "alpha2": "MX"}))
                .await
                .unwrap()
        };

        let store = FileStore::open(&dir).unwrap();
        let found = store
            .find_one("pais", "alpha2", "MX")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["_id"], json!(id.as_str()));
        assert_eq!(store.count("pais").await.unwrap(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_save_preserves_identity_on_disk() {
        let dir = temp_dir("save");
        let store = FileStore::open(&dir).unwrap();

        let id = store
            .insert("disciplina", json!({"nombre": {"es": "Física"}}))
            .await
            .unwrap();
        store
            .save(
                "disciplina",
                json!({"_id": id.as_str(), "nombre": {"es": "Física", "en": "Physics"}}),
            )
            .await
            .unwrap();

        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.count("disciplina").await.unwrap(), 1);
        let found = store
            .find_one("disciplina", "nombre.en", "Physics")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["_id"], json!(id.as_str()));

        fs::remove_dir_all(&dir).unwrap();
    }
}
