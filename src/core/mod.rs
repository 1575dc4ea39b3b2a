//! Core card and deck types

pub mod card;
pub mod deck;

pub use card::{CardId, CardRecord};
pub use deck::{DeckEntry, NormalizedDeck};
