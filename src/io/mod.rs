//! Deck files: JSON export and import.

pub mod export;
pub mod import;

pub use export::{export_json, export_to_file, ExportFormat, SimpleCardImage};
pub use import::{detect_format, import_from_file, parse_deck_json, parse_simple_json};
