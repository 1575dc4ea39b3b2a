//! Decoded deck lists

use crate::core::CardId;

/// Represents a deck entry (quantity and card id)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckEntry {
    pub quantity: u32,
    pub card: CardId,
}

impl DeckEntry {
    pub fn new(quantity: u32, card: CardId) -> Self {
        DeckEntry { quantity, card }
    }
}

/// A deck ready for rendering
///
/// Entries keep the order the client stored them in; nothing is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDeck {
    /// Deck name, already safe to use as a file stem
    pub name: String,
    pub main_deck: Vec<DeckEntry>,
    pub sideboard: Vec<DeckEntry>,
    pub companion: Option<DeckEntry>,
}

impl NormalizedDeck {
    /// Output file name for this deck
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }

    pub fn has_companion(&self) -> bool {
        self.companion.is_some()
    }

    /// Total cards in main deck
    pub fn total_cards(&self) -> usize {
        self.main_deck.iter().map(|e| e.quantity as usize).sum()
    }

    /// Total cards in sideboard
    pub fn sideboard_size(&self) -> usize {
        self.sideboard.iter().map(|e| e.quantity as usize).sum()
    }
}
