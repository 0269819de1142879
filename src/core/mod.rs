//! Core building blocks: RNG, configuration and errors.
//!
//! These are shared by every other module and hold no deck semantics.

pub mod config;
pub mod error;
pub mod rng;

pub use config::BuilderConfig;
pub use error::{CatalogError, ConfigError, DeckFileError, Error, Result};
pub use rng::DeckRng;
