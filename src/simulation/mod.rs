//! Deal simulation: shuffle, opening hand, prizes and their layout.

pub mod deal;
pub mod layout;

pub use deal::{shuffle_and_deal, Deal, DealLayout, DealSpec};
pub use layout::{prize_placements, CardPlacement, FanLayout, DEAL_STEP_MS, FLIP_DELAY_MS, SHUFFLE_MS};
