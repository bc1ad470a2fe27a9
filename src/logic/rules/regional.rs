use super::{FactorRule, ScoringContext};
use crate::logic::policy::ScoringPolicy;
use crate::models::{CropProfile, Factor};

/// Bonus for crops the farmer's region traditionally grows.
///
/// Earns `weight x preference`, where the preference (0-1) comes from the
/// regional table. No region, an unknown region, or a crop the region does
/// not list earns nothing; there is never a penalty.
pub struct RegionalRule;

impl FactorRule for RegionalRule {
    fn factor(&self) -> Factor {
        Factor::Region
    }

    fn max_points(&self, policy: &ScoringPolicy) -> f64 {
        policy.weights.region
    }

    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64 {
        let Some(region) = ctx.input.region() else {
            return 0.0;
        };
        ctx.regions
            .weight(region, &crop.name)
            .map_or(0.0, |w| w.clamp(0.0, 1.0) * ctx.policy.weights.region)
    }
}
