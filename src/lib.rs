//! MTGA Deck Export
//!
//! Reads the MTG Arena client log and its downloaded card data, then writes
//! every saved deck as a plain-text deck list.

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;

pub use error::{ExportError, Result};
