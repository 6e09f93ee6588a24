//! MARC record representation and journal translation
//!
//! This module holds the record shape produced by the ingestion pipeline and
//! the translator that derives the flat journal attribute set from it.

pub mod record;
pub mod translator;
pub mod vocabulary;

pub use record::{FieldOccurrence, MarcRecord};
pub use translator::JournalTranslator;
