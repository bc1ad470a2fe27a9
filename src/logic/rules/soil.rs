use super::{FactorRule, ScoringContext};
use crate::logic::policy::ScoringPolicy;
use crate::models::{CropProfile, Factor, SoilMatch};

/// Full soil weight for the crop's ideal soil, a fraction of it for soils the
/// crop tolerates, nothing otherwise.
pub struct SoilRule;

impl FactorRule for SoilRule {
    fn factor(&self) -> Factor {
        Factor::Soil
    }

    fn max_points(&self, policy: &ScoringPolicy) -> f64 {
        policy.weights.soil
    }

    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64 {
        let weight = ctx.policy.weights.soil;
        match crop.soil_match(ctx.input.soil_type) {
            SoilMatch::Ideal => weight,
            SoilMatch::Compatible => weight * ctx.policy.compatible_soil_fraction,
            SoilMatch::Mismatch | SoilMatch::Unknown => 0.0,
        }
    }
}
