//! Command dispatch for the deck panel.
//!
//! ## Key Types
//!
//! - `DeckCommand`: A requested deck change
//! - `DeckEvent` / `IgnoreReason`: What the command did
//! - `DeckBuilder`: Deck + config, the single owner of deck state
//! - `DeckView`: Grouped entries, stats and affordances for rendering

pub mod builder;
pub mod command;

pub use builder::{DeckBuilder, DeckView};
pub use command::{DeckCommand, DeckEvent, IgnoreReason};
