//! Controlled-vocabulary catalog models
//!
//! One type per catalog file under the data directory. Every persisted
//! entry carries its store-assigned identity in `_id`; keyed catalogs are
//! deduplicated across reloads by their Spanish name, the natural key.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

use crate::store::RecordId;

/// The catalog kinds the loader knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Pais,
    Idioma,
    TipoDocumento,
    EnfoqueDocumento,
    Disciplina,
    SubDisciplina,
    LicenciaCc,
    SherpaRomeo,
}

impl CatalogKind {
    /// Store collection name
    pub fn collection(&self) -> &'static str {
        match self {
            CatalogKind::Pais => "pais",
            CatalogKind::Idioma => "idioma",
            CatalogKind::TipoDocumento => "tipo_documento",
            CatalogKind::EnfoqueDocumento => "enfoque_documento",
            CatalogKind::Disciplina => "disciplina",
            CatalogKind::SubDisciplina => "subdisciplina",
            CatalogKind::LicenciaCc => "licencia_cc",
            CatalogKind::SherpaRomeo => "sherpa_romeo",
        }
    }

    /// Source file name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            CatalogKind::Pais => "Pais.json",
            CatalogKind::Idioma => "Idioma.json",
            CatalogKind::TipoDocumento => "TipoDocumento.json",
            CatalogKind::EnfoqueDocumento => "EnfoqueDocumento.json",
            CatalogKind::Disciplina => "Disciplina.json",
            CatalogKind::SubDisciplina => "SubDisciplina.json",
            CatalogKind::LicenciaCc => "LicenciaCC.json",
            CatalogKind::SherpaRomeo => "SherpaRomeo.json",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Localized display name; the Spanish form is the natural key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nombre {
    pub es: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

/// Catalog entry deduplicated across reloads by its natural key
pub trait CatalogRecord: Serialize + DeserializeOwned {
    const KIND: CatalogKind;

    /// Natural key: the Spanish name
    fn natural_key(&self) -> &str;

    /// Adopt an existing record's identity before saving
    fn set_id(&mut self, id: RecordId);
}

macro_rules! keyed_catalog {
    ($type:ty, $kind:expr) => {
        impl CatalogRecord for $type {
            const KIND: CatalogKind = $kind;

            fn natural_key(&self) -> &str {
                &self.nombre.es
            }

            fn set_id(&mut self, id: RecordId) {
                self.id = Some(id);
            }
        }
    };
}

/// Country entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pais {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: Nombre,
    pub alpha2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha3: Option<String>,
}

/// Language entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idioma {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: Nombre,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_639_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_639_3: Option<String>,
}

/// Document type entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipoDocumento {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: Nombre,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Document focus entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnfoqueDocumento {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: Nombre,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Discipline entry, the parent level of the discipline hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disciplina {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: Nombre,
}

/// Subdiscipline entry as read from the catalog file.
///
/// `disciplina` is the parent discipline's natural-key name; the loader
/// replaces it with the resolved discipline identity (or null when no such
/// discipline exists) before the entry is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDisciplina {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: Nombre,
    pub disciplina: String,
}

/// Creative Commons license entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenciaCC {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Sherpa Romeo open-access policy color entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SherpaRomeo {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

keyed_catalog!(TipoDocumento, CatalogKind::TipoDocumento);
keyed_catalog!(EnfoqueDocumento, CatalogKind::EnfoqueDocumento);
keyed_catalog!(Disciplina, CatalogKind::Disciplina);
keyed_catalog!(SubDisciplina, CatalogKind::SubDisciplina);
