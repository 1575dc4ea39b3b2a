//! Card identifiers and resolved card records

use std::fmt;

/// Arena card identifier (the client's `grpid`)
///
/// Every printing of a card has its own id, so the id alone determines
/// set code and collector number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        CardId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        CardId(id)
    }
}

/// A card from the catalog with its display name already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub id: CardId,

    /// Localized card name (e.g., "Lightning Bolt")
    pub name: String,

    /// Set code as the client spells it (e.g., "M10")
    pub set: String,

    /// Collector number within the set; not always numeric
    pub collector_number: String,
}

impl CardRecord {
    /// Format one deck list line: `<qty> <name> (<set>) <number>`
    pub fn deck_line(&self, quantity: u32) -> String {
        format!(
            "{quantity} {} ({}) {}\n",
            self.name, self.set, self.collector_number
        )
    }
}
