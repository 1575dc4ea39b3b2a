//! Deck decoder for the client's deck list payload
//!
//! The client stores card lists as flat arrays of interleaved
//! `id, quantity` values.

use crate::core::{CardId, DeckEntry, NormalizedDeck};
use crate::{ExportError, Result};
use serde::Deserialize;

/// Characters that are not allowed in file names on Windows or POSIX
pub const UNSAFE_NAME_CHARS: [char; 7] = ['/', '\\', '?', '*', '<', '>', '|'];

/// One saved deck as it appears in the log payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDeckPayload {
    pub name: String,
    #[serde(rename = "mainDeck")]
    pub main_deck: Vec<u32>,
    pub sideboard: Vec<u32>,
    #[serde(rename = "isCompanionValid", default)]
    pub is_companion_valid: bool,
    #[serde(rename = "companionGRPId", default)]
    pub companion_grp_id: Option<u32>,
}

/// Replace every file-name-unsafe character with `_`
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_NAME_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Split an interleaved `[id, qty, id, qty, ...]` array into entries
///
/// Pair `i` becomes `(quantity = values[2i+1], card = values[2i])`.
pub fn decode_pairs(values: &[u32]) -> Result<Vec<DeckEntry>> {
    if values.len() % 2 == 1 {
        return Err(ExportError::MalformedArray { len: values.len() });
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| DeckEntry::new(pair[1], CardId::new(pair[0])))
        .collect())
}

/// Decode one raw deck into its normalized form
pub fn decode(raw: &RawDeckPayload) -> Result<NormalizedDeck> {
    let name = sanitize_name(&raw.name);
    let main_deck = decode_pairs(&raw.main_deck)?;
    let sideboard = decode_pairs(&raw.sideboard)?;

    let companion = if raw.is_companion_valid {
        let id = raw.companion_grp_id.ok_or_else(|| {
            ExportError::MalformedPayload(format!(
                "deck '{}' has a valid companion but no companionGRPId",
                raw.name
            ))
        })?;
        Some(DeckEntry::new(1, CardId::new(id)))
    } else {
        None
    };

    Ok(NormalizedDeck {
        name,
        main_deck,
        sideboard,
        companion,
    })
}
