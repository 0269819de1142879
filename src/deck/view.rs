//! Derived deck data: grouped entries and aggregate counters.
//!
//! Nothing here is stored. Both are recomputed from the flat deck on demand,
//! so they can never drift from it.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cards::{CardRef, Supertype};

/// One row of the grouped view: a distinct card and how many copies.
#[derive(Clone, Debug)]
pub struct DeckEntry {
    pub card: CardRef,
    pub count: usize,
}

impl DeckEntry {
    /// Price of all copies in this row.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.card.price() * self.count as f64
    }
}

/// Collapse cards to one entry per identity triple, in first occurrence order.
pub fn group_cards<'a, I>(cards: I) -> Vec<DeckEntry>
where
    I: IntoIterator<Item = &'a CardRef>,
{
    let mut index: FxHashMap<(&'a str, &'a str, &'a str), usize> = FxHashMap::default();
    let mut entries: Vec<DeckEntry> = Vec::new();

    for card in cards {
        match index.get(&card.identity_key()) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(card.identity_key(), entries.len());
                entries.push(DeckEntry {
                    card: CardRef::clone(card),
                    count: 1,
                });
            }
        }
    }

    entries
}

/// Counters shown next to the deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeckStats {
    pub total: usize,
    pub pokemon: usize,
    pub trainer: usize,
    pub energy: usize,
    pub other: usize,
    /// Sum of unit prices over every card (copies included).
    pub total_price: f64,
}

impl DeckStats {
    /// Aggregate over a sequence of cards.
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a CardRef>,
    {
        cards.into_iter().fold(Self::default(), |mut stats, card| {
            stats.total += 1;
            match card.supertype_bucket() {
                Supertype::Pokemon => stats.pokemon += 1,
                Supertype::Trainer => stats.trainer += 1,
                Supertype::Energy => stats.energy += 1,
                Supertype::Other => stats.other += 1,
            }
            stats.total_price += card.price();
            stats
        })
    }

    /// Count for one bucket.
    #[must_use]
    pub fn count(&self, bucket: Supertype) -> usize {
        match bucket {
            Supertype::Pokemon => self.pokemon,
            Supertype::Trainer => self.trainer,
            Supertype::Energy => self.energy,
            Supertype::Other => self.other,
        }
    }

    /// Total price formatted as dollars.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.total_price)
    }
}
