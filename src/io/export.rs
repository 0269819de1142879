//! Deck export.
//!
//! Two JSON shapes:
//! - `Full`: array of card records, re-importable.
//! - `Simple`: array of `{front_image_url, back_image_url}` for tabletop
//!   simulators. Not re-importable.
//!
//! Output is pretty-printed with two-space indentation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::core::DeckFileError;
use crate::deck::DeckState;

/// Export shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Full,
    Simple,
}

/// One entry of a simple-format export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCardImage {
    pub front_image_url: String,
    pub back_image_url: String,
}

impl SimpleCardImage {
    /// Image pair for a card. Cards without images show the card back.
    #[must_use]
    pub fn for_card(card: &Card, card_back_url: &str) -> Self {
        Self {
            front_image_url: card.large_image_or(card_back_url).to_string(),
            back_image_url: card_back_url.to_string(),
        }
    }
}

/// Serialize the deck, in deck order with every copy.
pub fn export_json(
    deck: &DeckState,
    format: ExportFormat,
    card_back_url: &str,
) -> Result<String, DeckFileError> {
    let json = match format {
        ExportFormat::Full => {
            let cards: Vec<&Card> = deck.iter().map(|c| &**c).collect();
            serde_json::to_string_pretty(&cards)
        }
        ExportFormat::Simple => {
            let images: Vec<SimpleCardImage> = deck
                .iter()
                .map(|c| SimpleCardImage::for_card(c, card_back_url))
                .collect();
            serde_json::to_string_pretty(&images)
        }
    };
    json.map_err(DeckFileError::Encode)
}

/// Write an export into `dir` under `file_name`. Returns the written path.
pub fn export_to_file(
    deck: &DeckState,
    format: ExportFormat,
    card_back_url: &str,
    dir: impl AsRef<Path>,
    file_name: &str,
) -> Result<PathBuf, DeckFileError> {
    let json = export_json(deck, format, card_back_url)?;
    let path = dir.as_ref().join(file_name);
    std::fs::write(&path, json).map_err(|source| DeckFileError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), cards = deck.len(), ?format, "deck: exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn deck() -> DeckState {
        let pika = Arc::new(
            Card::new("base1-58", "Pikachu", "base1", "58").with_small_image("https://img/58.png"),
        );
        DeckState::from_cards(vec![
            pika.clone(),
            pika,
            Arc::new(Card::new("x-1", "Imageless", "x", "1")),
        ])
    }

    #[test]
    fn test_full_export_keeps_copies() {
        let json = export_json(&deck(), ExportFormat::Full, "back.png").unwrap();
        let parsed: Vec<Card> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], parsed[1]);
        assert!(json.starts_with("[\n  {"));
    }

    #[test]
    fn test_simple_export() {
        let json = export_json(&deck(), ExportFormat::Simple, "back.png").unwrap();
        let parsed: Vec<SimpleCardImage> = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed[0],
            SimpleCardImage {
                front_image_url: "https://img/58.png".to_string(),
                back_image_url: "back.png".to_string(),
            }
        );
        assert_eq!(parsed[2].front_image_url, "back.png");
    }

    #[test]
    fn test_empty_deck() {
        let json = export_json(&DeckState::new(), ExportFormat::Full, "back.png").unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&ExportFormat::Simple).unwrap(), "\"simple\"");
    }
}
