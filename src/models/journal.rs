//! Journal model produced by the record mapping engine

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One discipline/keyword pair from a repeatable discipline field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineKeyword {
    /// Language of the discipline heading
    pub idioma: Option<String>,
    /// Keyword text
    pub palabra_clave: Option<String>,
}

/// Flat journal attribute set derived from one bibliographic record.
///
/// Attributes are independent; every optional attribute degrades to `None`
/// when its source tag or subfield is absent. Only the two timestamps are
/// required, so construction goes through the translator, which fails when
/// they cannot be derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub base_datos: Option<String>,
    pub titulo_revista: Option<String>,
    pub titulo_abr_revista: Option<String>,
    pub issn: Option<String>,
    pub pais: Option<String>,
    pub disciplina: Option<Vec<DisciplineKeyword>>,
    pub licencia_cc: Option<String>,
    pub sherpa_romeo: Option<String>,
    pub idioma: Option<String>,
    pub periodicidad: Option<String>,
    pub logo: Option<String>,
    pub portada: Option<String>,
    pub fecha_creacion: NaiveDateTime,
    pub fecha_actualizacion: NaiveDateTime,
}

impl Journal {
    /// The full attribute set as an ordered mapping suitable for
    /// serialization. Ordering follows the declared attribute order above,
    /// not any reflective or alphabetical discovery.
    pub fn to_map(&self) -> IndexMap<String, Value> {
        let mut map = IndexMap::new();
        map.insert("base_datos".to_string(), json!(self.base_datos));
        map.insert("titulo_revista".to_string(), json!(self.titulo_revista));
        map.insert(
            "titulo_abr_revista".to_string(),
            json!(self.titulo_abr_revista),
        );
        map.insert("issn".to_string(), json!(self.issn));
        map.insert("pais".to_string(), json!(self.pais));
        map.insert("disciplina".to_string(), json!(self.disciplina));
        map.insert("licencia_cc".to_string(), json!(self.licencia_cc));
        map.insert("sherpa_romeo".to_string(), json!(self.sherpa_romeo));
        map.insert("idioma".to_string(), json!(self.idioma));
        map.insert("periodicidad".to_string(), json!(self.periodicidad));
        map.insert("logo".to_string(), json!(self.logo));
        map.insert("portada".to_string(), json!(self.portada));
        map.insert("fecha_creacion".to_string(), json!(self.fecha_creacion));
        map.insert(
            "fecha_actualizacion".to_string(),
            json!(self.fecha_actualizacion),
        );
        map
    }
}
