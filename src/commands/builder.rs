//! The deck builder state object.
//!
//! `DeckBuilder` owns the deck and the configuration and is the only place
//! deck mutations go through. Every UI action becomes a `DeckCommand`
//! passed to `apply`; the resulting `DeckEvent` says what happened and
//! `view()` gives the presentation layer everything it renders.

use std::sync::Arc;

use tracing::debug;

use crate::cards::CardRef;
use crate::core::{BuilderConfig, DeckFileError, DeckRng};
use crate::deck::{DeckEntry, DeckState, DeckStats};
use crate::io::{export_json, parse_deck_json, ExportFormat};
use crate::simulation::{shuffle_and_deal, DealSpec};

use super::command::{DeckCommand, DeckEvent, IgnoreReason};

/// Everything the deck panel renders.
#[derive(Clone, Debug)]
pub struct DeckView {
    pub entries: Vec<DeckEntry>,
    pub stats: DeckStats,
    pub can_undo: bool,
    pub can_simulate: bool,
}

/// Deck plus configuration, driven by commands.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use tcg_deckbuilder::cards::Card;
/// use tcg_deckbuilder::commands::{DeckBuilder, DeckCommand};
/// use tcg_deckbuilder::core::BuilderConfig;
///
/// let mut builder = DeckBuilder::new(BuilderConfig::default());
/// let card = Arc::new(Card::new("base1-58", "Pikachu", "base1", "58"));
///
/// builder.apply(DeckCommand::Add(card));
/// builder.apply(DeckCommand::Clear);
/// builder.apply(DeckCommand::Undo);
///
/// let view = builder.view();
/// assert_eq!(view.stats.total, 1);
/// assert!(!view.can_simulate);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    deck: DeckState,
    config: BuilderConfig,
}

impl DeckBuilder {
    /// Create a builder with an empty deck.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            deck: DeckState::new(),
            config,
        }
    }

    /// Create a builder around an existing deck.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckState) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Check if the deck is large enough to deal from.
    #[must_use]
    pub fn can_simulate(&self) -> bool {
        self.deck.len() >= self.config.simulation_threshold
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.deck.can_undo()
    }

    /// Grouped entries, stats and affordances.
    #[must_use]
    pub fn view(&self) -> DeckView {
        DeckView {
            entries: self.deck.grouped_view(),
            stats: self.deck.aggregate(),
            can_undo: self.can_undo(),
            can_simulate: self.can_simulate(),
        }
    }

    /// Apply one command.
    pub fn apply(&mut self, command: DeckCommand) -> DeckEvent {
        let event = match command {
            DeckCommand::Add(card) => {
                self.deck.add(card);
                DeckEvent::Added {
                    len: self.deck.len(),
                }
            }
            DeckCommand::RemoveAt(index) => match self.deck.remove_at(index) {
                Some(card) => self.removed(card),
                None => DeckEvent::Ignored(IgnoreReason::IndexOutOfRange {
                    index,
                    len: self.deck.len(),
                }),
            },
            DeckCommand::RemoveLast(identity) => match self.deck.remove_last(&identity) {
                Some(card) => self.removed(card),
                None => DeckEvent::Ignored(IgnoreReason::NotInDeck),
            },
            DeckCommand::Undo => match self.deck.undo() {
                0 => DeckEvent::Ignored(IgnoreReason::NothingToUndo),
                count => DeckEvent::Restored {
                    count,
                    len: self.deck.len(),
                },
            },
            DeckCommand::Clear => match self.deck.clear() {
                0 => DeckEvent::Ignored(IgnoreReason::EmptyDeck),
                count => DeckEvent::Cleared { count },
            },
            DeckCommand::Sort => {
                if self.deck.is_empty() {
                    DeckEvent::Ignored(IgnoreReason::EmptyDeck)
                } else {
                    self.deck.sort_in_place();
                    DeckEvent::Sorted
                }
            }
            DeckCommand::Import(cards) => {
                let count = cards.len();
                self.deck.replace(cards.into_iter().map(Arc::new));
                DeckEvent::Imported { count }
            }
            DeckCommand::Simulate { seed } => self.simulate(seed),
        };

        if let DeckEvent::Ignored(reason) = &event {
            debug!(?reason, "builder: command ignored");
        }
        event
    }

    /// Parse a deck document and import it.
    ///
    /// On error the deck is left untouched.
    pub fn import_json(&mut self, raw: &str) -> Result<DeckEvent, DeckFileError> {
        let cards = parse_deck_json(raw)?;
        Ok(self.apply(DeckCommand::Import(cards)))
    }

    /// Serialize the current deck.
    pub fn export_json(&self, format: ExportFormat, card_back_url: &str) -> Result<String, DeckFileError> {
        export_json(&self.deck, format, card_back_url)
    }

    fn removed(&self, card: CardRef) -> DeckEvent {
        DeckEvent::Removed {
            card,
            len: self.deck.len(),
        }
    }

    fn simulate(&mut self, seed: Option<u64>) -> DeckEvent {
        if !self.can_simulate() {
            return DeckEvent::Ignored(IgnoreReason::BelowSimulationThreshold {
                len: self.deck.len(),
                threshold: self.config.simulation_threshold,
            });
        }

        let mut rng = seed.map_or_else(DeckRng::from_entropy, DeckRng::new);
        let spec = DealSpec {
            hand_size: self.config.hand_size,
            prize_count: self.config.prize_count,
        };
        DeckEvent::Dealt(Box::new(shuffle_and_deal(&mut self.deck, spec, &mut rng)))
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}
