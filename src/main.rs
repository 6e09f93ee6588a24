//! Biblat catalog loader
//!
//! One-shot administrative tool that loads the controlled-vocabulary
//! catalogs (country, language, document type, document focus, discipline
//! hierarchy, licenses) into the document store.

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblat_catalog::{
    config::AppConfig,
    models::CatalogKind,
    services::PopulateCatalog,
    store::FileStore,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog to load
    #[arg(short, long, value_enum, default_value_t = CatalogArg::All)]
    catalog: CatalogArg,

    /// Logging level override (trace, debug, info, warn, error)
    #[arg(short, long)]
    logging_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CatalogArg {
    Pais,
    Idioma,
    TipoDocumento,
    EnfoqueDocumento,
    Disciplina,
    Subdisciplina,
    LicenciaCc,
    SherpaRomeo,
    All,
}

impl CatalogArg {
    fn kind(self) -> Option<CatalogKind> {
        match self {
            CatalogArg::Pais => Some(CatalogKind::Pais),
            CatalogArg::Idioma => Some(CatalogKind::Idioma),
            CatalogArg::TipoDocumento => Some(CatalogKind::TipoDocumento),
            CatalogArg::EnfoqueDocumento => Some(CatalogKind::EnfoqueDocumento),
            CatalogArg::Disciplina => Some(CatalogKind::Disciplina),
            CatalogArg::Subdisciplina => Some(CatalogKind::SubDisciplina),
            CatalogArg::LicenciaCc => Some(CatalogKind::LicenciaCc),
            CatalogArg::SherpaRomeo => Some(CatalogKind::SherpaRomeo),
            CatalogArg::All => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let level = cli
        .logging_level
        .as_deref()
        .unwrap_or(&config.logging.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblat_catalog={level}").into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Biblat catalog loader v{}", env!("CARGO_PKG_VERSION"));

    // Open the store once for the whole run
    let store = FileStore::open(&config.store.path)?;
    tracing::info!("Opened store at {}", config.store.path);

    let populate = PopulateCatalog::new(store, &config.data.dir);

    let reports = match cli.catalog.kind() {
        Some(kind) => vec![populate.load(kind).await?],
        None => populate.load_all().await?,
    };

    let mut failures = 0;
    for report in &reports {
        tracing::info!(
            "catalog {}: {} loaded, {} failed",
            report.catalog,
            report.loaded,
            report.failed
        );
        failures += report.failed;
    }
    if failures > 0 {
        tracing::warn!("{failures} entries failed to load; see errors above");
    }

    Ok(())
}
