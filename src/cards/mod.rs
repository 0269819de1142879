//! Card records: catalog data, identity, prices and details.
//!
//! ## Key Types
//!
//! - `Card`: Catalog card record with typed optional fields
//! - `CardRef`: Shared handle stored in the deck
//! - `CardIdentity`: (name, number, set id) triple used for grouping
//! - `Supertype` / `ElementalType`: Sort and count buckets
//! - `Prices`: TCGplayer price categories
//! - `CardDetails`: Detail panel sections

pub mod definition;
pub mod details;
pub mod pricing;
pub mod supertype;

pub use definition::{Ability, Attack, Card, CardIdentity, CardImages, CardRef, CardSet};
pub use details::{CardDetails, DetailItem, DetailSection};
pub use pricing::{PriceCategory, Prices, TcgPlayer};
pub use supertype::{ElementalType, Supertype};
