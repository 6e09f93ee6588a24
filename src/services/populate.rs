//! Catalog population service
//!
//! Reads catalog definition files from the data directory and upserts their
//! entries into the document store. Keyed catalogs reuse the identity of an
//! existing record with the same natural key, so a reload updates in place
//! instead of duplicating. Per-entry failures are logged with the offending
//! entry and counted; they never abort the batch.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{
    error::AppResult,
    models::{
        catalogs::{
            CatalogKind, CatalogRecord, Disciplina, EnfoqueDocumento, Idioma, LicenciaCC, Pais,
            SherpaRomeo, SubDisciplina, TipoDocumento,
        },
        load_report::LoadReport,
    },
    store::{document_id, DocumentStore},
};

/// Natural-key field used to detect an existing catalog entry
const NATURAL_KEY: &str = "nombre.es";

/// Catalog loader over an injected document store
pub struct PopulateCatalog<S: DocumentStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DocumentStore> PopulateCatalog<S> {
    pub fn new(store: S, data_dir: impl AsRef<Path>) -> Self {
        Self {
            store,
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// The underlying store handle
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load one catalog kind.
    ///
    /// Subdiscipline entries resolve their parent discipline by name, so
    /// when the discipline collection is still empty the discipline catalog
    /// is loaded first.
    pub async fn load(&self, kind: CatalogKind) -> AppResult<LoadReport> {
        match kind {
            CatalogKind::Pais => self.load_simple::<Pais>(kind).await,
            CatalogKind::Idioma => self.load_simple::<Idioma>(kind).await,
            CatalogKind::LicenciaCc => self.load_simple::<LicenciaCC>(kind).await,
            CatalogKind::SherpaRomeo => self.load_simple::<SherpaRomeo>(kind).await,
            CatalogKind::TipoDocumento => self.load_keyed::<TipoDocumento>().await,
            CatalogKind::EnfoqueDocumento => self.load_keyed::<EnfoqueDocumento>().await,
            CatalogKind::Disciplina => self.load_keyed::<Disciplina>().await,
            CatalogKind::SubDisciplina => {
                if self
                    .store
                    .count(CatalogKind::Disciplina.collection())
                    .await?
                    == 0
                {
                    let parents = self.load_keyed::<Disciplina>().await?;
                    tracing::info!(
                        "discipline catalog was empty, loaded it first: {} loaded, {} failed",
                        parents.loaded,
                        parents.failed
                    );
                }
                self.load_subdisciplina().await
            }
        }
    }

    /// Load every catalog kind in dependency order
    pub async fn load_all(&self) -> AppResult<Vec<LoadReport>> {
        let kinds = [
            CatalogKind::Pais,
            CatalogKind::Idioma,
            CatalogKind::TipoDocumento,
            CatalogKind::EnfoqueDocumento,
            CatalogKind::Disciplina,
            CatalogKind::SubDisciplina,
            CatalogKind::LicenciaCc,
            CatalogKind::SherpaRomeo,
        ];
        let mut reports = Vec::with_capacity(kinds.len());
        for kind in kinds {
            reports.push(self.load(kind).await?);
        }
        Ok(reports)
    }

    /// Read a catalog file as raw entries. Entries are validated one by one
    /// later, so a single malformed entry fails alone rather than taking the
    /// whole file down.
    async fn read_entries(&self, kind: CatalogKind) -> AppResult<Vec<Value>> {
        let path = self.data_dir.join(kind.file_name());
        let content = tokio::fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load a catalog with no natural-key deduplication: every entry is
    /// inserted unconditionally.
    async fn load_simple<T>(&self, kind: CatalogKind) -> AppResult<LoadReport>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut report = LoadReport::new(kind);
        for entry in self.read_entries(kind).await? {
            match self.insert_entry::<T>(kind, &entry).await {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    tracing::error!("failed to process {} entry {}: {}", kind, entry, e);
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    async fn insert_entry<T>(&self, kind: CatalogKind, entry: &Value) -> AppResult<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let parsed: T = serde_json::from_value(entry.clone())?;
        self.store
            .insert(kind.collection(), serde_json::to_value(&parsed)?)
            .await?;
        Ok(())
    }

    /// Load a catalog whose entries preserve identity across reloads: an
    /// entry whose natural key already exists in the store adopts that
    /// record's identity before being saved, so the save replaces in place.
    async fn load_keyed<T: CatalogRecord>(&self) -> AppResult<LoadReport> {
        let mut report = LoadReport::new(T::KIND);
        for entry in self.read_entries(T::KIND).await? {
            match self.upsert_entry::<T>(&entry).await {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    tracing::error!("failed to process {} entry {}: {}", T::KIND, entry, e);
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    async fn upsert_entry<T: CatalogRecord>(&self, entry: &Value) -> AppResult<()> {
        let parsed = self.adopt_existing_identity::<T>(entry).await?;
        self.store
            .save(T::KIND.collection(), serde_json::to_value(&parsed)?)
            .await?;
        Ok(())
    }

    /// Parse an entry and, when a record with the same natural key already
    /// exists in its collection, copy that record's identity into it.
    async fn adopt_existing_identity<T: CatalogRecord>(&self, entry: &Value) -> AppResult<T> {
        let mut parsed: T = serde_json::from_value(entry.clone())?;
        let existing = self
            .store
            .find_one(T::KIND.collection(), NATURAL_KEY, parsed.natural_key())
            .await?;
        if let Some(id) = existing.as_ref().and_then(document_id) {
            parsed.set_id(id);
        }
        Ok(parsed)
    }

    /// Keyed load of the subdiscipline catalog with parent resolution: the
    /// textual parent name is replaced by the resolved discipline identity.
    async fn load_subdisciplina(&self) -> AppResult<LoadReport> {
        let mut report = LoadReport::new(CatalogKind::SubDisciplina);
        for entry in self.read_entries(CatalogKind::SubDisciplina).await? {
            match self.upsert_subdisciplina(&entry).await {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    tracing::error!(
                        "failed to process {} entry {}: {}",
                        CatalogKind::SubDisciplina,
                        entry,
                        e
                    );
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    async fn upsert_subdisciplina(&self, entry: &Value) -> AppResult<()> {
        let parsed = self.adopt_existing_identity::<SubDisciplina>(entry).await?;

        // An unmatched parent name stores a null reference rather than
        // failing the entry; disciplines must be loaded beforehand.
        let parent = self
            .store
            .find_one(
                CatalogKind::Disciplina.collection(),
                NATURAL_KEY,
                &parsed.disciplina,
            )
            .await?
            .as_ref()
            .and_then(document_id);

        let mut document = serde_json::to_value(&parsed)?;
        document["disciplina"] = match parent {
            Some(id) => Value::String(id.to_string()),
            None => Value::Null,
        };
        self.store
            .save(CatalogKind::SubDisciplina.collection(), document)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::store::{MockDocumentStore, RecordId};
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;

    fn write_data_dir(name: &str, file: &str, content: &Value) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "biblat-populate-{name}-{}",
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), serde_json::to_string_pretty(content).unwrap()).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_store_rejection_is_isolated_per_entry() {
        let dir = write_data_dir(
            "rejection",
            "Pais.json",
            &json!([
                {"nombre": {"es": "México"}, "alpha2": "MX"},
                {"nombre": {"es": "Atlántida"}, "alpha2": "XX"},
                {"nombre": {"es": "Chile"}, "alpha2": "CL"}
            ]),
        );

        let mut store = MockDocumentStore::new();
        store
            .expect_insert()
            .times(3)
            .returning(|_, document| {
                if document["alpha2"] == json!("XX") {
                    Err(AppError::Store("rejected by store".to_string()))
                } else {
                    Ok(RecordId::generate())
                }
            });

        let populate = PopulateCatalog::new(store, &dir);
        let report = populate.load(CatalogKind::Pais).await.unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.failed, 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_keyed_load_queries_own_collection() {
        // The document-focus path must run its lookup against its own
        // collection, never a neighboring one.
        let dir = write_data_dir(
            "enfoque",
            "EnfoqueDocumento.json",
            &json!([{"nombre": {"es": "Analítico"}}]),
        );

        let mut store = MockDocumentStore::new();
        store
            .expect_find_one()
            .withf(|collection, path, value| {
                collection == "enfoque_documento" && path == "nombre.es" && value == "Analítico"
            })
            .times(1)
            .returning(|_, _, _| Ok(None));
        store
            .expect_save()
            .withf(|collection, _| collection == "enfoque_documento")
            .times(1)
            .returning(|_, _| Ok(RecordId::generate()));

        let populate = PopulateCatalog::new(store, &dir);
        let report = populate.load(CatalogKind::EnfoqueDocumento).await.unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.failed, 0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_catalog_file_is_fatal_for_that_load() {
        let dir = std::env::temp_dir().join(format!("biblat-populate-missing-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();

        let populate = PopulateCatalog::new(MockDocumentStore::new(), &dir);
        assert!(matches!(
            populate.load(CatalogKind::Pais).await,
            Err(AppError::Io(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
