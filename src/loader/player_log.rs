//! Deck list extraction from the client log (`Player.log`)
//!
//! The client logs every API response it receives. When the decks screen
//! loads, one line starting with [`DECK_LIST_SENTINEL`] carries a JSON
//! object whose `payload` field holds every saved deck.

use crate::loader::deck::RawDeckPayload;
use crate::{ExportError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Prefix of the log line carrying the deck lists
pub const DECK_LIST_SENTINEL: &str = "[UnityCrossThreadLogger]<== Deck.GetDeckListsV3 ";

/// Which sentinel line to use when the log holds several
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    /// First matching line in file order
    First,
    /// Last matching line in file order
    Last,
}

/// Tie-break used by [`extract`]
pub const DEFAULT_LINE_MATCH: LineMatch = LineMatch::First;

#[derive(Debug, Deserialize)]
struct DeckListEvent {
    payload: Value,
}

/// Read the log file and extract its deck lists
pub fn extract_from_file(path: &Path) -> Result<Vec<RawDeckPayload>> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExportError::LogFileNotFound(path.to_path_buf()),
        _ => ExportError::IoError(e),
    })?;
    // The log is UTF-8 but may be cut mid-character while the client writes
    let text = String::from_utf8_lossy(&bytes);
    extract(&text)
}

/// Extract the deck lists using [`DEFAULT_LINE_MATCH`]
pub fn extract(log_text: &str) -> Result<Vec<RawDeckPayload>> {
    extract_with(log_text, DEFAULT_LINE_MATCH)
}

/// Extract the deck lists from the sentinel line chosen by `line_match`
pub fn extract_with(log_text: &str, line_match: LineMatch) -> Result<Vec<RawDeckPayload>> {
    let mut selected = None;
    for line in log_text.lines() {
        if let Some(body) = line.strip_prefix(DECK_LIST_SENTINEL) {
            selected = Some(body);
            if line_match == LineMatch::First {
                break;
            }
        }
    }

    let body = selected.ok_or(ExportError::LogEventNotFound)?;
    parse_event(body)
}

/// Parse the JSON body following the sentinel
fn parse_event(body: &str) -> Result<Vec<RawDeckPayload>> {
    let event: DeckListEvent = serde_json::from_str(body)
        .map_err(|e| ExportError::MalformedPayload(format!("event: {e}")))?;

    // Newer clients send the payload as a JSON string, older ones inline it
    let decks = match event.payload {
        Value::String(inner) => serde_json::from_str(&inner),
        other => serde_json::from_value(other),
    };
    decks.map_err(|e| ExportError::MalformedPayload(format!("deck list: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_line(deck_name: &str) -> String {
        let payload = format!(
            r#"[{{"name":"{deck_name}","mainDeck":[1001,4],"sideboard":[],"isCompanionValid":false}}]"#
        );
        let event = serde_json::json!({ "id": 7, "payload": payload });
        format!("{DECK_LIST_SENTINEL}{event}")
    }

    #[test]
    fn test_extract_string_payload() {
        let log = format!(
            "[UnityCrossThreadLogger]==> Deck.GetDeckListsV3 {{}}\n{}\nsome trailing noise\n",
            deck_line("Burn")
        );

        let decks = extract(&log).unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "Burn");
        assert_eq!(decks[0].main_deck, vec![1001, 4]);
        assert!(decks[0].sideboard.is_empty());
        assert!(!decks[0].is_companion_valid);
    }

    #[test]
    fn test_extract_inline_payload() {
        let log = format!(
            r#"{DECK_LIST_SENTINEL}{{"payload":[{{"name":"Inline","mainDeck":[],"sideboard":[2,1],"isCompanionValid":true,"companionGRPId":77}}]}}"#
        );

        let decks = extract(&log).unwrap();
        assert_eq!(decks[0].name, "Inline");
        assert_eq!(decks[0].sideboard, vec![2, 1]);
        assert_eq!(decks[0].companion_grp_id, Some(77));
    }

    #[test]
    fn test_line_match_policy() {
        let log = format!("{}\n{}\n", deck_line("Older"), deck_line("Newer"));

        assert_eq!(DEFAULT_LINE_MATCH, LineMatch::First);
        assert_eq!(extract(&log).unwrap()[0].name, "Older");
        assert_eq!(extract_with(&log, LineMatch::First).unwrap()[0].name, "Older");
        assert_eq!(extract_with(&log, LineMatch::Last).unwrap()[0].name, "Newer");
    }

    #[test]
    fn test_windows_line_endings() {
        let log = format!("noise\r\n{}\r\nmore\r\n", deck_line("Crlf"));
        assert_eq!(extract(&log).unwrap()[0].name, "Crlf");
    }

    #[test]
    fn test_sentinel_must_start_line() {
        let log = format!("prefix {}\n", deck_line("Hidden"));
        assert!(matches!(extract(&log), Err(ExportError::LogEventNotFound)));
    }

    #[test]
    fn test_no_deck_event() {
        let err = extract("[UnityCrossThreadLogger]Client.SceneChange\n").unwrap_err();
        assert!(matches!(err, ExportError::LogEventNotFound));
    }

    #[test]
    fn test_malformed_event() {
        let log = format!("{DECK_LIST_SENTINEL}{{\"payload\": \n");
        assert!(matches!(extract(&log), Err(ExportError::MalformedPayload(_))));
    }

    #[test]
    fn test_malformed_inner_payload() {
        let log = format!(r#"{DECK_LIST_SENTINEL}{{"payload":"[{{\"name\":1}}]"}}"#);
        assert!(matches!(extract(&log), Err(ExportError::MalformedPayload(_))));
    }

    #[test]
    fn test_missing_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Player.log");
        let err = extract_from_file(&path).unwrap_err();
        assert!(matches!(err, ExportError::LogFileNotFound(p) if p == path));
    }
}
