//! Domain models

pub mod catalogs;
pub mod journal;
pub mod load_report;

pub use catalogs::{
    CatalogKind, CatalogRecord, Disciplina, EnfoqueDocumento, Idioma, LicenciaCC, Nombre, Pais,
    SherpaRomeo, SubDisciplina, TipoDocumento,
};
pub use journal::{DisciplineKeyword, Journal};
pub use load_report::LoadReport;
