//! End-to-end export run
//!
//! Locates the data tables, extracts and decodes the decks from the log,
//! builds the catalog and writes every deck.

use crate::config::ExportConfig;
use crate::export::export_all;
use crate::loader::{decode, player_log, Catalog};
use crate::Result;
use std::path::PathBuf;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub export_dir: PathBuf,
    /// One path per written file
    pub files: Vec<PathBuf>,
}

/// Runs after every file has been written (e.g. "press a key to exit")
pub type PostExportHook = Box<dyn FnOnce(&ExportSummary) -> Result<()> + Send>;

/// Export every deck described by `config`
///
/// The hook only runs when the whole export succeeded.
pub async fn run(config: &ExportConfig, post_hook: Option<PostExportHook>) -> Result<ExportSummary> {
    let cards_path = config.cards_path()?;
    let loc_path = config.loc_path()?;
    log::debug!("Card table: {}", cards_path.display());
    log::debug!("Localization table: {}", loc_path.display());

    log::info!("Reading decks from {}", config.log_path.display());
    let raw_decks = player_log::extract_from_file(&config.log_path)?;
    let decks = raw_decks.iter().map(decode).collect::<Result<Vec<_>>>()?;
    log::info!("Found {} decks", decks.len());

    let catalog = Catalog::load_from_files(&cards_path, &loc_path, &config.language)?;
    log::info!("Loaded {} cards ({})", catalog.len(), config.language);

    let files = export_all(&decks, &catalog, &config.export_dir).await?;
    log::info!(
        "Exported {} decks to {}",
        files.len(),
        config.export_dir.display()
    );

    let summary = ExportSummary {
        export_dir: config.export_dir.clone(),
        files,
    };

    if let Some(hook) = post_hook {
        hook(&summary)?;
    }

    Ok(summary)
}
