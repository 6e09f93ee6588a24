//! Biblat catalog tools
//!
//! Two independent components for the Biblat bibliographic database:
//! a mapping engine deriving journal attribute sets from MARC-style
//! records, and a loader that populates controlled-vocabulary catalogs
//! into a document store while preserving record identities across
//! reloads.

pub mod config;
pub mod error;
pub mod marc;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult, MapError};
