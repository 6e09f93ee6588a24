//! Controlled vocabularies for record mapping
//!
//! Code-to-name tables used to normalize raw record codes into Spanish
//! display names. Loaded once per process, read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Country code to Spanish country name
pub static COUNTRIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AR", "Argentina"),
        ("BO", "Bolivia"),
        ("BR", "Brasil"),
        ("CA", "Canadá"),
        ("CL", "Chile"),
        ("CO", "Colombia"),
        ("CR", "Costa Rica"),
        ("CU", "Cuba"),
        ("DE", "Alemania"),
        ("DO", "República Dominicana"),
        ("EC", "Ecuador"),
        ("ES", "España"),
        ("FR", "Francia"),
        ("GB", "Reino Unido"),
        ("GT", "Guatemala"),
        ("HN", "Honduras"),
        ("HT", "Haití"),
        ("IT", "Italia"),
        ("JM", "Jamaica"),
        ("MX", "México"),
        ("NI", "Nicaragua"),
        ("PA", "Panamá"),
        ("PE", "Perú"),
        ("PR", "Puerto Rico"),
        ("PT", "Portugal"),
        ("PY", "Paraguay"),
        ("SV", "El Salvador"),
        ("US", "Estados Unidos"),
        ("UY", "Uruguay"),
        ("VE", "Venezuela"),
    ])
});

/// Language code to Spanish language name
pub static LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("cat", "Catalán"),
        ("deu", "Alemán"),
        ("eng", "Inglés"),
        ("fra", "Francés"),
        ("glg", "Gallego"),
        ("grn", "Guaraní"),
        ("ita", "Italiano"),
        ("lat", "Latín"),
        ("nah", "Náhuatl"),
        ("nld", "Neerlandés"),
        ("por", "Portugués"),
        ("que", "Quechua"),
        ("rus", "Ruso"),
        ("spa", "Español"),
        ("zxx", ""),
    ])
});

/// Resolve a country code to its Spanish name
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES.get(code).copied()
}

/// Resolve a language code to its Spanish name
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES.get(code).copied()
}
