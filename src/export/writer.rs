//! Concurrent deck file writer

use crate::core::NormalizedDeck;
use crate::export::render::render;
use crate::loader::Catalog;
use crate::Result;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Render every deck and write each one to `<base_dir>/<name>.txt`
///
/// All decks are rendered before anything touches the disk, so a deck
/// with an unresolvable card never leaves a file behind. Writes then run
/// as independent tasks; the first failure is returned once every task
/// up to it has been awaited.
///
/// Two decks whose names sanitize to the same file name share one output
/// file. The later deck in `decks` wins.
///
/// Returns the paths written, in the order of first appearance.
pub async fn export_all(
    decks: &[NormalizedDeck],
    catalog: &Catalog,
    base_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let rendered = render_unique(decks, catalog)?;

    tokio::fs::create_dir_all(base_dir).await?;

    let mut tasks = Vec::with_capacity(rendered.len());
    for (file_name, text) in rendered {
        let path = base_dir.join(&file_name);
        tasks.push(tokio::spawn(async move {
            tokio::fs::write(&path, text).await?;
            log::info!("Saved {file_name}");
            Ok::<_, crate::ExportError>(path)
        }));
    }

    // Wait for all to complete - fail on the first error
    let mut written = Vec::with_capacity(tasks.len());
    for task in tasks {
        written.push(task.await??);
    }

    Ok(written)
}

/// Render each deck, collapsing file name collisions to the last deck
fn render_unique(decks: &[NormalizedDeck], catalog: &Catalog) -> Result<Vec<(String, String)>> {
    let mut rendered: Vec<(String, String)> = Vec::with_capacity(decks.len());
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for deck in decks {
        let file_name = deck.file_name();
        let text = render(deck, catalog)?;
        log::debug!(
            "Rendered '{}': {} main, {} sideboard",
            deck.name,
            deck.total_cards(),
            deck.sideboard_size()
        );

        match index.get(&file_name) {
            Some(&i) => {
                log::warn!("Multiple decks export to {file_name}; keeping the last one");
                rendered[i].1 = text;
            }
            None => {
                index.insert(file_name.clone(), rendered.len());
                rendered.push((file_name, text));
            }
        }
    }

    Ok(rendered)
}
