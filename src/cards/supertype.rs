//! Supertype buckets and elemental types.
//!
//! Both enums derive `Ord` in display order, so the deck sort can compare
//! them directly.

use serde::{Deserialize, Serialize};

/// Card supertype bucket.
///
/// Anything the catalog reports outside the three known supertypes falls
/// into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Supertype {
    Pokemon,
    Trainer,
    Energy,
    Other,
}

impl Supertype {
    /// Parse a catalog supertype, case-insensitively.
    ///
    /// Accepts both `Pokémon` and `Pokemon`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pokémon" | "pokemon" => Supertype::Pokemon,
            "trainer" => Supertype::Trainer,
            "energy" => Supertype::Energy,
            _ => Supertype::Other,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Supertype::Pokemon => "Pokémon",
            Supertype::Trainer => "Trainer",
            Supertype::Energy => "Energy",
            Supertype::Other => "Other",
        }
    }
}

impl std::fmt::Display for Supertype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pokémon elemental type, in deck sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementalType {
    Grass,
    Fire,
    Water,
    Lightning,
    Psychic,
    Fighting,
    Darkness,
    Metal,
    Fairy,
    Dragon,
    Colorless,
    Unknown,
}

impl ElementalType {
    /// Parse a catalog type name, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "grass" => ElementalType::Grass,
            "fire" => ElementalType::Fire,
            "water" => ElementalType::Water,
            "lightning" => ElementalType::Lightning,
            "psychic" => ElementalType::Psychic,
            "fighting" => ElementalType::Fighting,
            "darkness" => ElementalType::Darkness,
            "metal" => ElementalType::Metal,
            "fairy" => ElementalType::Fairy,
            "dragon" => ElementalType::Dragon,
            "colorless" => ElementalType::Colorless,
            _ => ElementalType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supertype_parse() {
        assert_eq!(Supertype::parse("Pokémon"), Supertype::Pokemon);
        assert_eq!(Supertype::parse("POKEMON"), Supertype::Pokemon);
        assert_eq!(Supertype::parse("Trainer"), Supertype::Trainer);
        assert_eq!(Supertype::parse(" energy "), Supertype::Energy);
        assert_eq!(Supertype::parse("Stadium"), Supertype::Other);
        assert_eq!(Supertype::parse(""), Supertype::Other);
    }

    #[test]
    fn test_supertype_order() {
        assert!(Supertype::Pokemon < Supertype::Trainer);
        assert!(Supertype::Trainer < Supertype::Energy);
        assert!(Supertype::Energy < Supertype::Other);
    }

    #[test]
    fn test_elemental_order() {
        assert!(ElementalType::Grass < ElementalType::Fire);
        assert!(ElementalType::Dragon < ElementalType::Colorless);
        assert!(ElementalType::Colorless < ElementalType::Unknown);
        assert_eq!(ElementalType::parse("PSYCHIC"), ElementalType::Psychic);
        assert_eq!(ElementalType::parse("Shadow"), ElementalType::Unknown);
    }

    #[test]
    fn test_label() {
        assert_eq!(Supertype::Pokemon.to_string(), "Pokémon");
    }
}
