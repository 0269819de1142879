//! Card records as returned by the catalog.
//!
//! `Card` is an explicit optional-field record: everything the deck builder
//! reads has a typed field with a default, and everything else the catalog
//! sends is kept in `extra` so exporting an imported card loses nothing.
//!
//! Cards are immutable once fetched. The deck shares them as `CardRef`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use super::pricing::TcgPlayer;
use super::supertype::{ElementalType, Supertype};

/// Shared, immutable handle to a catalog card.
pub type CardRef = Arc<Card>;

/// The key that decides whether two records are "the same card".
///
/// Built from name, collector number and set id. Two cards with the same
/// identity are grouped together in the deck view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIdentity {
    pub name: String,
    pub number: String,
    pub set_id: String,
}

impl CardIdentity {
    /// Create a new identity triple.
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>, set_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            set_id: set_id.into(),
        }
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.set_id, self.number)
    }
}

/// The set (expansion) a card was printed in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub series: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Card image URLs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

/// A Pokémon ability.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A Pokémon attack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attack {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cost: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_energy_cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A catalog card record.
///
/// ## Example
///
/// ```
/// use tcg_deckbuilder::cards::{Card, Supertype};
///
/// let card = Card::new("base1-4", "Charizard", "base1", "4").with_supertype("Pokémon");
/// assert_eq!(card.supertype_bucket(), Supertype::Pokemon);
/// assert_eq!(card.identity().set_id, "base1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertype: Option<String>,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub subtypes: SmallVec<[String; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<String>,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub types: SmallVec<[String; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolves_from: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub abilities: Vec<Ability>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attacks: Vec<Attack>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    pub set: CardSet,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    pub images: CardImages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<TcgPlayer>,

    /// Catalog fields the builder doesn't interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Create a minimal card. Mostly useful for tests and fixtures.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        set_id: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
            set: CardSet {
                id: set_id.into(),
                ..CardSet::default()
            },
            ..Self::default()
        }
    }

    /// Set the supertype (builder pattern).
    #[must_use]
    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    /// Add an elemental type (builder pattern).
    #[must_use]
    pub fn with_type(mut self, elemental: impl Into<String>) -> Self {
        self.types.push(elemental.into());
        self
    }

    /// Add a subtype (builder pattern).
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtypes.push(subtype.into());
        self
    }

    /// Set the small image URL (builder pattern).
    #[must_use]
    pub fn with_small_image(mut self, url: impl Into<String>) -> Self {
        self.images.small = Some(url.into());
        self
    }

    /// Set vendor prices (builder pattern).
    #[must_use]
    pub fn with_tcgplayer(mut self, tcgplayer: TcgPlayer) -> Self {
        self.tcgplayer = Some(tcgplayer);
        self
    }

    /// The identity triple of this card.
    #[must_use]
    pub fn identity(&self) -> CardIdentity {
        CardIdentity::new(&self.name, &self.number, &self.set.id)
    }

    /// Borrowed identity, for grouping without allocation.
    #[must_use]
    pub fn identity_key(&self) -> (&str, &str, &str) {
        (&self.name, &self.number, &self.set.id)
    }

    /// Check identity without building a `CardIdentity`.
    #[must_use]
    pub fn matches(&self, identity: &CardIdentity) -> bool {
        self.name == identity.name
            && self.number == identity.number
            && self.set.id == identity.set_id
    }

    /// A card needs at least a name to be shown or grouped.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Supertype bucket used for counting and sorting.
    #[must_use]
    pub fn supertype_bucket(&self) -> Supertype {
        self.supertype
            .as_deref()
            .map_or(Supertype::Other, Supertype::parse)
    }

    /// Elemental type of the first listed type.
    #[must_use]
    pub fn primary_type(&self) -> ElementalType {
        self.types
            .first()
            .map_or(ElementalType::Unknown, |t| ElementalType::parse(t))
    }

    /// Unit price used for deck totals. Missing prices count as zero.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.tcgplayer
            .as_ref()
            .and_then(|t| t.prices.first_category())
            .and_then(|c| c.preferred())
            .unwrap_or(0.0)
    }

    /// Small image, or the given placeholder.
    #[must_use]
    pub fn small_image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.images.small.as_deref().unwrap_or(placeholder)
    }

    /// Large image, falling back to the small image, then the placeholder.
    #[must_use]
    pub fn large_image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.images
            .large
            .as_deref()
            .or(self.images.small.as_deref())
            .unwrap_or(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::pricing::{PriceCategory, Prices};

    const RAW: &str = r#"{
        "id": "swsh4-44",
        "name": "Pikachu VMAX",
        "supertype": "Pokémon",
        "subtypes": ["VMAX"],
        "hp": "310",
        "types": ["Lightning"],
        "evolvesFrom": "Pikachu V",
        "attacks": [{"name": "G-Max Volt Tackle", "cost": ["Lightning", "Lightning", "Lightning"], "damage": "120+", "text": "You may discard all Energy."}],
        "rules": ["VMAX rule: When your Pokémon VMAX is Knocked Out, your opponent takes 3 Prize cards."],
        "set": {"id": "swsh4", "name": "Vivid Voltage", "series": "Sword & Shield", "releaseDate": "2020/11/13", "printedTotal": 185},
        "number": "44",
        "rarity": "Rare Holo VMAX",
        "images": {"small": "https://images.pokemontcg.io/swsh4/44.png", "large": "https://images.pokemontcg.io/swsh4/44_hires.png"},
        "tcgplayer": {"url": "https://prices.pokemontcg.io/tcgplayer/swsh4-44", "prices": {"holofoil": {"low": 9.5, "mid": 12.0, "market": 11.25}}},
        "artist": "aky CG Works",
        "nationalPokedexNumbers": [25]
    }"#;

    #[test]
    fn test_parse_catalog_record() {
        let card: Card = serde_json::from_str(RAW).unwrap();

        assert_eq!(card.name, "Pikachu VMAX");
        assert_eq!(card.supertype_bucket(), Supertype::Pokemon);
        assert_eq!(card.primary_type(), ElementalType::Lightning);
        assert_eq!(card.subtypes.as_slice(), &["VMAX".to_string()]);
        assert_eq!(card.set.release_date.as_deref(), Some("2020/11/13"));
        assert_eq!(card.identity(), CardIdentity::new("Pikachu VMAX", "44", "swsh4"));
        assert!((card.price() - 11.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let card: Card = serde_json::from_str(RAW).unwrap();
        assert_eq!(card.extra.get("artist"), Some(&Value::from("aky CG Works")));
        assert_eq!(card.set.extra.get("printedTotal"), Some(&Value::from(185)));

        let json = serde_json::to_string(&card).unwrap();
        let again: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, again);
    }

    #[test]
    fn test_missing_fields_default() {
        let card: Card = serde_json::from_str(r#"{"name": "Mystery"}"#).unwrap();

        assert!(card.is_valid());
        assert_eq!(card.supertype_bucket(), Supertype::Other);
        assert_eq!(card.primary_type(), ElementalType::Unknown);
        assert_eq!(card.price(), 0.0);
        assert_eq!(card.small_image_or("back.png"), "back.png");
        assert_eq!(card.large_image_or("back.png"), "back.png");
    }

    #[test]
    fn test_large_image_falls_back_to_small() {
        let card = Card::new("x-1", "X", "x", "1").with_small_image("small.png");
        assert_eq!(card.large_image_or("back.png"), "small.png");
    }

    #[test]
    fn test_matches_identity() {
        let card = Card::new("base1-4", "Charizard", "base1", "4");
        assert!(card.matches(&CardIdentity::new("Charizard", "4", "base1")));
        assert!(!card.matches(&CardIdentity::new("Charizard", "4", "base2")));
        assert_eq!(card.identity_key(), ("Charizard", "4", "base1"));
    }

    #[test]
    fn test_price_from_builder() {
        let card = Card::new("a", "A", "s", "1").with_tcgplayer(TcgPlayer {
            prices: Prices {
                normal: Some(PriceCategory {
                    mid: Some(0.5),
                    ..PriceCategory::default()
                }),
                ..Prices::default()
            },
            ..TcgPlayer::default()
        });
        assert!((card.price() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identity_display() {
        let id = CardIdentity::new("Charizard", "4", "base1");
        assert_eq!(id.to_string(), "Charizard (base1-4)");
    }
}
