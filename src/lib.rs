//! # tcg-deckbuilder
//!
//! A deck builder for the Pokémon Trading Card Game: search the public card
//! catalog, assemble a deck, review it, and move it in and out of JSON files.
//!
//! ## Design Principles
//!
//! 1. **Flat Deck**: The deck is an ordered list of shared card handles.
//!    Quantities and counters are derived, never stored.
//!
//! 2. **Single Owner**: All deck changes go through `DeckBuilder::apply`,
//!    all paging state through `SearchSession`. Invalid operations are
//!    no-ops reported as ignored events, not errors.
//!
//! 3. **Seam at the Catalog**: Catalog access is the async `CatalogClient`
//!    trait, so sessions can run against HTTP or an in-memory fake.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The deck and undo log use `im-rs`
//!   vectors, so snapshots and cleared decks are cheap to keep.
//!
//! - **Stale Response Guard**: Each search bumps a generation counter and
//!   responses from older generations are dropped.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, seeded RNG
//! - `cards`: Card records, identity, prices, detail sections
//! - `deck`: Deck state, undo, grouping, aggregates, sort
//! - `catalog`: Query grammar, catalog client, pagination, sets
//! - `io`: Deck export and import
//! - `commands`: Command dispatch over the deck
//! - `simulation`: Shuffle, deal and hand layout

pub mod core;
pub mod cards;
pub mod deck;
pub mod catalog;
pub mod io;
pub mod commands;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    BuilderConfig, DeckRng,
    Error, Result, ConfigError, CatalogError, DeckFileError,
};

pub use crate::cards::{
    Card, CardRef, CardIdentity, CardSet, CardDetails,
    Supertype, ElementalType, Prices, TcgPlayer,
};

pub use crate::deck::{DeckState, DeckEntry, DeckStats, RemovalLog};

pub use crate::catalog::{
    build_query, Filter, RarityTag,
    CatalogClient, HttpCatalogClient, SearchPage,
    SearchSession, PageOutcome, PageRequest,
};

pub use crate::io::{ExportFormat, SimpleCardImage};

pub use crate::commands::{DeckBuilder, DeckCommand, DeckEvent, DeckView, IgnoreReason};

pub use crate::simulation::{Deal, DealLayout, CardPlacement, FanLayout};
