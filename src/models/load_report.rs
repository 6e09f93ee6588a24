//! Load report for catalog batches.

use serde::{Deserialize, Serialize};

use super::catalogs::CatalogKind;

/// Outcome of loading one catalog file: how many entries made it into the
/// store and how many failed. Failures are logged where they occur and
/// never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub catalog: CatalogKind,
    pub loaded: usize,
    pub failed: usize,
}

impl LoadReport {
    pub fn new(catalog: CatalogKind) -> Self {
        Self {
            catalog,
            loaded: 0,
            failed: 0,
        }
    }
}
