//! Card catalog built from the client's data tables
//!
//! Joins the card table (`data_cards*.mtga`) with one language of the
//! localization table (`data_loc*.mtga`) so every card id resolves to a
//! display name, set code and collector number.

use crate::core::{CardId, CardRecord};
use crate::{ExportError, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One row of the card table. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CardRow {
    grpid: u32,
    #[serde(rename = "titleId")]
    title_id: u32,
    set: String,
    #[serde(rename = "collectorNumber")]
    collector_number: CollectorNumber,
}

/// Collector numbers are usually strings ("146", "23a") but older
/// tables store plain numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectorNumber {
    Text(String),
    Number(u64),
}

impl From<CollectorNumber> for String {
    fn from(number: CollectorNumber) -> Self {
        match number {
            CollectorNumber::Text(s) => s,
            CollectorNumber::Number(n) => n.to_string(),
        }
    }
}

/// All localized strings for one language
#[derive(Debug, Deserialize)]
struct LocalizationSet {
    #[serde(rename = "isoCode")]
    iso_code: String,
    keys: Vec<LocalizationEntry>,
}

/// Text id to localized string
#[derive(Debug, Deserialize)]
pub struct LocalizationEntry {
    pub id: u32,
    pub text: String,
}

/// Read-only index from card id to resolved card
#[derive(Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, CardRecord>,
    /// Cards whose title id has no text in the chosen language
    untitled: FxHashMap<CardId, u32>,
}

impl Catalog {
    /// Read both tables from disk and build the catalog
    pub fn load_from_files(cards_path: &Path, loc_path: &Path, language: &str) -> Result<Self> {
        let cards_json = fs::read_to_string(cards_path).map_err(ExportError::IoError)?;
        let loc_json = fs::read_to_string(loc_path).map_err(ExportError::IoError)?;
        Self::load(&cards_json, &loc_json, language)
    }

    /// Build the catalog from the JSON text of both tables
    pub fn load(cards_json: &str, loc_json: &str, language: &str) -> Result<Self> {
        let rows: Vec<CardRow> = serde_json::from_str(cards_json)
            .map_err(|e| ExportError::ParseError(format!("card table: {e}")))?;
        let sets: Vec<LocalizationSet> = serde_json::from_str(loc_json)
            .map_err(|e| ExportError::ParseError(format!("localization table: {e}")))?;

        let titles = select_language(sets, language)?;

        let mut catalog = Catalog::default();
        for row in rows {
            let id = CardId::new(row.grpid);
            // First row wins, like the client's own lookup
            if catalog.cards.contains_key(&id) || catalog.untitled.contains_key(&id) {
                continue;
            }

            match titles.get(&row.title_id) {
                Some(name) => {
                    catalog.cards.insert(
                        id,
                        CardRecord {
                            id,
                            name: name.clone(),
                            set: row.set,
                            collector_number: row.collector_number.into(),
                        },
                    );
                }
                None => {
                    catalog.untitled.insert(id, row.title_id);
                }
            }
        }

        log::debug!(
            "Loaded {} cards ({} without a '{language}' title)",
            catalog.cards.len(),
            catalog.untitled.len()
        );

        Ok(catalog)
    }

    /// Look up a card by id
    pub fn resolve(&self, id: CardId) -> Result<&CardRecord> {
        if let Some(card) = self.cards.get(&id) {
            return Ok(card);
        }

        match self.untitled.get(&id) {
            Some(&title_id) => Err(ExportError::TitleNotFound {
                card_id: id.as_u32(),
                title_id,
            }),
            None => Err(ExportError::CardNotFound(id.as_u32())),
        }
    }

    /// Check if a card resolves to a name
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of resolvable cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Pick the single localization set for `language` and index it by text id
fn select_language(sets: Vec<LocalizationSet>, language: &str) -> Result<FxHashMap<u32, String>> {
    let mut matching = sets.into_iter().filter(|set| set.iso_code == language);

    let set = matching
        .next()
        .ok_or_else(|| ExportError::LanguageNotFound(language.to_string()))?;
    if matching.next().is_some() {
        return Err(ExportError::Config(format!(
            "localization table has more than one '{language}' entry"
        )));
    }

    let mut titles = FxHashMap::default();
    for entry in set.keys {
        titles.entry(entry.id).or_insert(entry.text);
    }
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = r#"[
        {"grpid": 1001, "titleId": 5, "set": "M10", "collectorNumber": "146", "rarity": 1},
        {"grpid": 1002, "titleId": 6, "set": "ZNR", "collectorNumber": 266},
        {"grpid": 1003, "titleId": 99, "set": "ZNR", "collectorNumber": "1"},
        {"grpid": 1001, "titleId": 6, "set": "XXX", "collectorNumber": "0"}
    ]"#;

    const LOC: &str = r#"[
        {"isoCode": "de-DE", "keys": [{"id": 5, "text": "Blitzschlag"}]},
        {"isoCode": "en-US", "keys": [
            {"id": 5, "text": "Lightning Bolt"},
            {"id": 6, "text": "Forest"},
            {"id": 6, "text": "Shadowed Forest"}
        ]}
    ]"#;

    #[test]
    fn test_resolve_joins_titles() {
        let catalog = Catalog::load(CARDS, LOC, "en-US").unwrap();

        let bolt = catalog.resolve(CardId::new(1001)).unwrap();
        assert_eq!(bolt.name, "Lightning Bolt");
        assert_eq!(bolt.set, "M10");
        assert_eq!(bolt.collector_number, "146");

        // Numeric collector number and first duplicate title
        let forest = catalog.resolve(CardId::new(1002)).unwrap();
        assert_eq!(forest.name, "Forest");
        assert_eq!(forest.collector_number, "266");

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_language_is_selected() {
        let catalog = Catalog::load(CARDS, LOC, "de-DE").unwrap();
        assert_eq!(catalog.resolve(CardId::new(1001)).unwrap().name, "Blitzschlag");
        assert!(!catalog.contains(CardId::new(1002)));
    }

    #[test]
    fn test_unknown_card() {
        let catalog = Catalog::load(CARDS, LOC, "en-US").unwrap();
        let err = catalog.resolve(CardId::new(4242)).unwrap_err();
        assert!(matches!(err, ExportError::CardNotFound(4242)));
    }

    #[test]
    fn test_missing_title() {
        let catalog = Catalog::load(CARDS, LOC, "en-US").unwrap();
        let err = catalog.resolve(CardId::new(1003)).unwrap_err();
        assert!(matches!(
            err,
            ExportError::TitleNotFound {
                card_id: 1003,
                title_id: 99
            }
        ));
    }

    #[test]
    fn test_missing_language() {
        let err = Catalog::load(CARDS, LOC, "fr-FR").unwrap_err();
        assert!(matches!(err, ExportError::LanguageNotFound(ref l) if l == "fr-FR"));
    }

    #[test]
    fn test_duplicate_language() {
        let loc = r#"[
            {"isoCode": "en-US", "keys": []},
            {"isoCode": "en-US", "keys": []}
        ]"#;
        let err = Catalog::load(CARDS, loc, "en-US").unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let cards = r#"[{"grpid": 1001, "set": "M10", "collectorNumber": "146"}]"#;
        let err = Catalog::load(cards, LOC, "en-US").unwrap_err();
        match err {
            ExportError::ParseError(msg) => {
                assert!(msg.contains("card table"), "{msg}");
                assert!(msg.contains("titleId"), "{msg}");
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_localization() {
        let err = Catalog::load(CARDS, "{not json", "en-US").unwrap_err();
        assert!(matches!(err, ExportError::ParseError(ref m) if m.contains("localization table")));
    }
}
