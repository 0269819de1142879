//! Vendor price data attached to catalog cards.
//!
//! The catalog reports TCGplayer prices grouped by printing category
//! (normal, holofoil, ...). A card's unit price is taken from the first
//! category present, preferring the market price, then mid, then low.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// TCGplayer block of a card record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TcgPlayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub prices: Prices,
}

/// Prices for one printing category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_low: Option<f64>,
}

impl PriceCategory {
    /// Market, else mid, else low.
    #[must_use]
    pub fn preferred(&self) -> Option<f64> {
        self.market.or(self.mid).or(self.low)
    }
}

/// Price categories keyed by printing.
///
/// Known categories are fields so lookup order is fixed; anything else the
/// catalog adds lands in `other` and is consulted last, alphabetically.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<PriceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holofoil: Option<PriceCategory>,
    #[serde(rename = "reverseHolofoil", skip_serializing_if = "Option::is_none")]
    pub reverse_holofoil: Option<PriceCategory>,
    #[serde(rename = "1stEditionNormal", skip_serializing_if = "Option::is_none")]
    pub first_edition_normal: Option<PriceCategory>,
    #[serde(rename = "1stEditionHolofoil", skip_serializing_if = "Option::is_none")]
    pub first_edition_holofoil: Option<PriceCategory>,
    #[serde(rename = "unlimitedHolofoil", skip_serializing_if = "Option::is_none")]
    pub unlimited_holofoil: Option<PriceCategory>,
    #[serde(flatten)]
    pub other: BTreeMap<String, PriceCategory>,
}

impl Prices {
    /// First category present, in lookup order.
    #[must_use]
    pub fn first_category(&self) -> Option<&PriceCategory> {
        [
            &self.normal,
            &self.holofoil,
            &self.reverse_holofoil,
            &self.first_edition_normal,
            &self.first_edition_holofoil,
            &self.unlimited_holofoil,
        ]
        .into_iter()
        .find_map(Option::as_ref)
        .or_else(|| self.other.values().next())
    }

    /// Check if no category is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_category().is_none()
    }
}
