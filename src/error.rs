//! Error types for MTGA deck export

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported platform: {0} (pass --log-path and --data-dir explicitly)")]
    UnsupportedPlatform(String),

    #[error("Log file not found: {}", .0.display())]
    LogFileNotFound(PathBuf),

    #[error("{prefix} file not found in {}", .dir.display())]
    DataFileNotFound { prefix: String, dir: PathBuf },

    #[error("Localization for language '{0}' not found")]
    LanguageNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Malformed deck list payload: {0}")]
    MalformedPayload(String),

    #[error("Array is not in the correct format: odd length {len}")]
    MalformedArray { len: usize },

    #[error("Card not found: {0}")]
    CardNotFound(u32),

    #[error("Title {title_id} for card {card_id} not found in localization")]
    TitleNotFound { card_id: u32, title_id: u32 },

    #[error("Deck list event not found in log (open the decks screen in the client first)")]
    LogEventNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
