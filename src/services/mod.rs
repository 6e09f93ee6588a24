//! Business logic services

pub mod populate;

pub use populate::PopulateCatalog;
