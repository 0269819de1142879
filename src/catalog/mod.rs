//! Catalog access: query building, the client seam, pagination and sets.
//!
//! ## Key Types
//!
//! - `Filter` / `build_query`: Prefix grammar to catalog filter
//! - `CatalogClient`: Async trait for catalog sources
//! - `HttpCatalogClient`: reqwest implementation
//! - `SearchSession`: Paging, loading flag and stale-response guard

pub mod client;
pub mod query;
pub mod session;
pub mod sets;

pub use client::{card_back_url, CatalogClient, HttpCatalogClient, SearchPage};
pub use query::{build_query, Filter, RarityTag};
pub use session::{PageOutcome, PageRequest, SearchSession};
pub use sets::{sets_to_csv, sort_newest_first};
