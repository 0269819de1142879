//! Deck import.
//!
//! Only full-format files (arrays of card records) can become a deck.
//! Simple-format files are recognised by their `front_image_url` field and
//! rejected with a dedicated error, since card data can't be rebuilt from
//! image URLs.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::cards::Card;
use crate::core::DeckFileError;

use super::export::{ExportFormat, SimpleCardImage};

/// Guess which export shape a parsed document has.
///
/// Returns `None` for anything that isn't an array. Empty arrays count as
/// full format.
#[must_use]
pub fn detect_format(value: &Value) -> Option<ExportFormat> {
    let items = value.as_array()?;
    if items.iter().any(|v| v.get("front_image_url").is_some()) {
        Some(ExportFormat::Simple)
    } else {
        Some(ExportFormat::Full)
    }
}

/// Parse a full-format deck document.
pub fn parse_deck_json(raw: &str) -> Result<Vec<Card>, DeckFileError> {
    let value: Value = serde_json::from_str(raw).map_err(DeckFileError::InvalidJson)?;
    match detect_format(&value) {
        None => Err(DeckFileError::NotAnArray),
        Some(ExportFormat::Simple) => Err(DeckFileError::SimpleFormatUnsupported {
            entries: value.as_array().map_or(0, Vec::len),
        }),
        Some(ExportFormat::Full) => {
            serde_json::from_value(value).map_err(DeckFileError::InvalidJson)
        }
    }
}

/// Parse a simple-format document into its image pairs.
pub fn parse_simple_json(raw: &str) -> Result<Vec<SimpleCardImage>, DeckFileError> {
    let value: Value = serde_json::from_str(raw).map_err(DeckFileError::InvalidJson)?;
    if !value.is_array() {
        return Err(DeckFileError::NotAnArray);
    }
    serde_json::from_value(value).map_err(DeckFileError::InvalidJson)
}

/// Read and parse a full-format deck file.
pub fn import_from_file(path: impl AsRef<Path>) -> Result<Vec<Card>, DeckFileError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DeckFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse_deck_json(&raw)?;
    info!(path = %path.display(), cards = cards.len(), "deck: imported");
    Ok(cards)
}
