//! Commands and the events they produce.
//!
//! A `DeckCommand` is what the presentation layer asks for ("add this
//! card", "undo"); a `DeckEvent` is what actually happened. Commands that
//! can't apply are not errors: they come back as `DeckEvent::Ignored` with
//! the reason.

use crate::cards::{Card, CardIdentity, CardRef};
use crate::simulation::Deal;

/// A request to change the deck.
#[derive(Clone, Debug)]
pub enum DeckCommand {
    /// Append one copy of a card.
    Add(CardRef),
    /// Remove the card at a deck position.
    RemoveAt(usize),
    /// Remove the last copy of a card (grouped view "minus").
    RemoveLast(CardIdentity),
    /// Restore the most recent removal.
    Undo,
    /// Empty the deck.
    Clear,
    /// Reorder by supertype, type and name.
    Sort,
    /// Replace the deck with imported cards.
    Import(Vec<Card>),
    /// Shuffle and deal an opening hand. `None` seeds from entropy.
    Simulate { seed: Option<u64> },
}

/// Why a command changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    IndexOutOfRange { index: usize, len: usize },
    NotInDeck,
    NothingToUndo,
    EmptyDeck,
    BelowSimulationThreshold { len: usize, threshold: usize },
}

/// Outcome of applying a command.
#[derive(Clone, Debug)]
pub enum DeckEvent {
    Added { len: usize },
    Removed { card: CardRef, len: usize },
    Restored { count: usize, len: usize },
    Cleared { count: usize },
    Sorted,
    Imported { count: usize },
    Dealt(Box<Deal>),
    Ignored(IgnoreReason),
}

impl DeckEvent {
    /// Check if the deck contents or order changed.
    #[must_use]
    pub fn changed_deck(&self) -> bool {
        !matches!(self, DeckEvent::Ignored(_))
    }
}
