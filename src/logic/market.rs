//! Cosmetic market figures shown beside a recommendation.
//!
//! These are random draws, not forecasts. They are attached after ranking
//! and must never feed back into a score.

use crate::models::{CropRecommendation, MarketSnapshot};
use rand::Rng;
use std::ops::Range;

/// tonnes per hectare
pub const YIELD_RANGE: Range<f64> = 2.0..5.0;
/// rupees per kg
pub const PRICE_RANGE: Range<u32> = 25..55;

pub fn estimate<R: Rng>(rng: &mut R) -> MarketSnapshot {
    MarketSnapshot {
        expected_yield: rng.gen_range(YIELD_RANGE),
        market_price: rng.gen_range(PRICE_RANGE),
    }
}

pub fn attach_estimates<R: Rng>(
    recommendations: Vec<CropRecommendation>,
    rng: &mut R,
) -> Vec<CropRecommendation> {
    recommendations
        .into_iter()
        .map(|rec| rec.with_market(estimate(rng)))
        .collect()
}
