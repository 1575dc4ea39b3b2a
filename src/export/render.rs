//! Deck list text rendering
//!
//! Produces the layout the client's own import dialog accepts:
//!
//! ```text
//! Companion
//! 1 Lurrus of the Dream-Den (IKO) 226
//!
//! Deck
//! 4 Lightning Bolt (M10) 146
//!
//! Sideboard
//! 2 Abrade (HOU) 83
//! ```
//!
//! The companion section only appears when the deck has one.

use crate::core::{DeckEntry, NormalizedDeck};
use crate::loader::Catalog;
use crate::Result;

/// Render one deck, resolving every card through the catalog
pub fn render(deck: &NormalizedDeck, catalog: &Catalog) -> Result<String> {
    let mut out = String::new();

    if let Some(companion) = &deck.companion {
        out.push_str("Companion\n");
        push_entry(&mut out, companion, catalog)?;
        out.push('\n');
    }

    out.push_str("Deck\n");
    for entry in &deck.main_deck {
        push_entry(&mut out, entry, catalog)?;
    }

    out.push_str("\nSideboard\n");
    for entry in &deck.sideboard {
        push_entry(&mut out, entry, catalog)?;
    }

    Ok(out)
}

fn push_entry(out: &mut String, entry: &DeckEntry, catalog: &Catalog) -> Result<()> {
    let card = catalog.resolve(entry.card)?;
    out.push_str(&card.deck_line(entry.quantity));
    Ok(())
}
