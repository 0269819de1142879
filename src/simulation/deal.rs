//! Shuffle and deal an opening hand.
//!
//! The deck itself is shuffled (its order changes, like a real deck), then
//! the top cards go to the hand and the next ones to the prizes. Short decks
//! deal whatever they have.

use serde::Serialize;
use tracing::info;

use crate::cards::CardRef;
use crate::core::DeckRng;
use crate::deck::DeckState;

use super::layout::{prize_placements, CardPlacement, FanLayout, SHUFFLE_MS};

/// Result of a deal.
#[derive(Clone, Debug)]
pub struct Deal {
    /// Seed the shuffle used, so the deal can be replayed.
    pub seed: u64,
    pub hand: Vec<CardRef>,
    pub prizes: Vec<CardRef>,
    pub layout: DealLayout,
}

/// Placement data handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DealLayout {
    /// Shuffle animation played before the first card moves.
    pub shuffle_ms: u64,
    pub hand: Vec<CardPlacement>,
    pub prizes: Vec<CardPlacement>,
}

/// Deal sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealSpec {
    pub hand_size: usize,
    pub prize_count: usize,
}

impl Default for DealSpec {
    fn default() -> Self {
        Self {
            hand_size: 7,
            prize_count: 6,
        }
    }
}

/// Shuffle `deck` in place and deal from the top.
pub fn shuffle_and_deal(deck: &mut DeckState, spec: DealSpec, rng: &mut DeckRng) -> Deal {
    deck.shuffle(rng);

    let mut cards = deck.iter().cloned();
    let hand: Vec<CardRef> = cards.by_ref().take(spec.hand_size).collect();
    let prizes: Vec<CardRef> = cards.take(spec.prize_count).collect();

    let layout = DealLayout {
        shuffle_ms: SHUFFLE_MS,
        hand: FanLayout::default().hand(hand.len()),
        prizes: prize_placements(spec.hand_size, prizes.len()),
    };

    info!(
        seed = rng.seed(),
        hand = hand.len(),
        prizes = prizes.len(),
        "simulation: dealt"
    );

    Deal {
        seed: rng.seed(),
        hand,
        prizes,
        layout,
    }
}
