//! MARC to journal translator
//!
//! Translates a MARC-style record into the flat journal attribute set.
//! The translator is a pure function of the record: no I/O, no logging.

use chrono::NaiveDateTime;

use super::record::MarcRecord;
use super::vocabulary;
use crate::error::MapError;
use crate::models::journal::{DisciplineKeyword, Journal};

// Tag/subfield mappings. Several of these are provisional assignments that
// still need confirmation against the Biblat data dictionary; keep this
// table easy to revise.
// TODO: confirm the database-of-origin tag in the data dictionary
const TAG_BASE_DATOS: &str = "";
const TAG_TITULO_REVISTA: &str = "222";
const TAG_TITULO_ABR: &str = "245"; // provisional
const TAG_ISSN: &str = "022"; // provisional
const TAG_PAIS: &str = "008"; // provisional, $e
const TAG_DISCIPLINA: &str = "650";
const TAG_LICENCIA_CC: &str = "245"; // provisional
const TAG_SHERPA_ROMEO: &str = "245"; // provisional
const TAG_IDIOMA: &str = "041";
const TAG_PERIODICIDAD: &str = "245"; // provisional
const TAG_LOGO: &str = "245"; // provisional
const TAG_PORTADA: &str = "245"; // provisional
const TAG_HISTORIA: &str = "CAT";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Journal record translator
pub struct JournalTranslator;

impl JournalTranslator {
    /// Create a new translator
    pub fn new() -> Self {
        Self
    }

    /// Translate a record into the journal attribute set.
    ///
    /// Optional attributes degrade to `None` when their tag or subfield is
    /// absent. The two history timestamps are required; an unrecognized
    /// country or language code is a typed error naming the attribute.
    pub fn translate(&self, record: &MarcRecord) -> Result<Journal, MapError> {
        Ok(Journal {
            base_datos: text(record, TAG_BASE_DATOS, "a"),
            titulo_revista: text(record, TAG_TITULO_REVISTA, "a"),
            titulo_abr_revista: text(record, TAG_TITULO_ABR, "a"),
            issn: text(record, TAG_ISSN, "a"),
            pais: resolve_vocabulary(record, TAG_PAIS, "e", "pais", vocabulary::country_name)?,
            disciplina: disciplines(record),
            licencia_cc: text(record, TAG_LICENCIA_CC, "a"),
            sherpa_romeo: text(record, TAG_SHERPA_ROMEO, "a"),
            idioma: resolve_vocabulary(record, TAG_IDIOMA, "a", "idioma", vocabulary::language_name)?,
            periodicidad: text(record, TAG_PERIODICIDAD, "a"),
            logo: text(record, TAG_LOGO, "a"),
            portada: text(record, TAG_PORTADA, "a"),
            fecha_creacion: history_timestamp(record, HistoryEnd::First)?,
            fecha_actualizacion: history_timestamp(record, HistoryEnd::Last)?,
        })
    }
}

impl Default for JournalTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain text attribute from the first occurrence of a tag
fn text(record: &MarcRecord, tag: &str, code: &str) -> Option<String> {
    record.subfield(tag, code).map(String::from)
}

/// Controlled-vocabulary attribute: extract the raw code, look it up, and
/// return the resolved name. An absent code is `None`; a resolved empty name
/// is also `None`; a present but unrecognized code is an error.
fn resolve_vocabulary(
    record: &MarcRecord,
    tag: &str,
    code: &str,
    attribute: &'static str,
    lookup: fn(&str) -> Option<&'static str>,
) -> Result<Option<String>, MapError> {
    let Some(raw) = record.subfield(tag, code) else {
        return Ok(None);
    };
    match lookup(raw) {
        Some(name) if !name.is_empty() => Ok(Some(name.to_string())),
        Some(_) => Ok(None),
        None => Err(MapError::UnknownCode {
            attribute,
            code: raw.to_string(),
        }),
    }
}

/// Discipline/keyword pairs, one per occurrence of the discipline tag.
/// Zero occurrences yields `None` rather than an empty list.
fn disciplines(record: &MarcRecord) -> Option<Vec<DisciplineKeyword>> {
    let pairs: Vec<DisciplineKeyword> = record
        .occurrences(TAG_DISCIPLINA)
        .iter()
        .map(|occ| DisciplineKeyword {
            idioma: occ.get("spa").map(String::from),
            palabra_clave: occ.get("a").map(String::from),
        })
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

enum HistoryEnd {
    First,
    Last,
}

/// Timestamp from the cataloging-history tag: date subfield `c` concatenated
/// with time subfield `h`, parsed as `YYYYMMDDHHMM`. The first occurrence is
/// the creation timestamp, the last the most recent update.
fn history_timestamp(record: &MarcRecord, end: HistoryEnd) -> Result<NaiveDateTime, MapError> {
    let (attribute, occurrence) = match end {
        HistoryEnd::First => ("fecha_creacion", record.first(TAG_HISTORIA)),
        HistoryEnd::Last => ("fecha_actualizacion", record.last(TAG_HISTORIA)),
    };
    let occurrence = occurrence.ok_or(MapError::MissingTag {
        attribute,
        tag: TAG_HISTORIA,
    })?;

    let mut raw = String::new();
    raw.push_str(occurrence.get("c").unwrap_or(""));
    raw.push_str(occurrence.get("h").unwrap_or(""));

    if raw.len() != 12 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MapError::Timestamp { attribute, raw });
    }

    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map_err(|_| MapError::Timestamp { attribute, raw })
}
