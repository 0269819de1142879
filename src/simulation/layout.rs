//! Where and when dealt cards land.
//!
//! The hand is fanned along a flattened arc; each card is dealt one step
//! after the previous one and flipped face up a fixed time after landing.
//! Prizes continue the same deal cadence after the hand.

use serde::Serialize;

/// Delay between consecutive dealt cards.
pub const DEAL_STEP_MS: u64 = 200;

/// Delay between a card landing and flipping face up.
pub const FLIP_DELAY_MS: u64 = 600;

/// Shuffle animation length before the first card is dealt.
pub const SHUFFLE_MS: u64 = 500;

/// Geometry of the hand fan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FanLayout {
    /// Total angle covered by the fan, in degrees.
    pub spread_degrees: f64,
    /// Arc radius in pixels.
    pub radius: f64,
    /// Vertical flattening of the arc.
    pub vertical_scale: f64,
}

impl Default for FanLayout {
    fn default() -> Self {
        Self {
            spread_degrees: 45.0,
            radius: 750.0,
            vertical_scale: 0.15,
        }
    }
}

/// Final position and timing of one dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CardPlacement {
    pub angle_degrees: f64,
    pub x: f64,
    pub y: f64,
    /// When the card starts moving, from the end of the shuffle.
    pub deal_at_ms: u64,
    /// When the card turns face up.
    pub flip_at_ms: u64,
}

impl FanLayout {
    /// Placements for a hand of `count` cards, left to right.
    #[must_use]
    pub fn hand(&self, count: usize) -> Vec<CardPlacement> {
        let start = -self.spread_degrees / 2.0;
        let step = if count > 1 {
            self.spread_degrees / (count - 1) as f64
        } else {
            0.0
        };

        (0..count)
            .map(|i| {
                let angle = if count > 1 { start + i as f64 * step } else { 0.0 };
                let radian = angle.to_radians();
                let deal_at_ms = i as u64 * DEAL_STEP_MS;
                CardPlacement {
                    angle_degrees: angle,
                    x: radian.sin() * self.radius,
                    y: -radian.cos() * self.radius * self.vertical_scale,
                    deal_at_ms,
                    flip_at_ms: deal_at_ms + FLIP_DELAY_MS,
                }
            })
            .collect()
    }
}

/// Placements for prize cards, dealt after `hand_size` hand cards.
///
/// Prizes sit in a grid owned by the presentation layer, so only timing is
/// meaningful here.
#[must_use]
pub fn prize_placements(hand_size: usize, count: usize) -> Vec<CardPlacement> {
    (0..count)
        .map(|j| {
            let deal_at_ms = (j + hand_size) as u64 * DEAL_STEP_MS;
            CardPlacement {
                angle_degrees: 0.0,
                x: 0.0,
                y: 0.0,
                deal_at_ms,
                flip_at_ms: deal_at_ms + FLIP_DELAY_MS,
            }
        })
        .collect()
}
