//! Deck state manager.
//!
//! ## Key Types
//!
//! - `DeckState`: Ordered card list with undo
//! - `RemovalLog` / `Removal`: Undo stack
//! - `DeckEntry`: Grouped view row (card + count)
//! - `DeckStats`: Supertype counters and price total

pub mod history;
pub mod manager;
pub mod sort;
pub mod view;

pub use history::{Removal, RemovalLog};
pub use manager::DeckState;
pub use sort::{compare_cards, locale_compare};
pub use view::{group_cards, DeckEntry, DeckStats};
