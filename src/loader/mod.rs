//! Loaders for the client's log and data tables
//!
//! Turns `Player.log`, `data_cards*.mtga` and `data_loc*.mtga` into a
//! card catalog and decoded decks.

pub mod catalog;
pub mod deck;
pub mod player_log;

pub use catalog::Catalog;
pub use deck::{decode, decode_pairs, sanitize_name, RawDeckPayload};
pub use player_log::{extract, extract_with, LineMatch, DEFAULT_LINE_MATCH};
