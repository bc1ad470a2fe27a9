pub mod nutrients;
pub mod ranges;
pub mod regional;
pub mod soil;

pub use nutrients::NutrientRule;
pub use ranges::{PhRule, RainfallRule, TemperatureRule};
pub use regional::RegionalRule;
pub use soil::SoilRule;

use super::policy::ScoringPolicy;
use crate::models::{CropProfile, Factor, FactorScore, FarmInput, RegionalPreferenceTable};

/// Everything a factor rule may look at besides the crop itself.
pub struct ScoringContext<'a> {
    pub input: &'a FarmInput,
    pub regions: &'a RegionalPreferenceTable,
    pub policy: &'a ScoringPolicy,
}

/// One additive term of the suitability score
pub trait FactorRule: Send + Sync {
    fn factor(&self) -> Factor;

    /// Most points this rule can award under `policy`
    fn max_points(&self, policy: &ScoringPolicy) -> f64;

    /// Points earned by `crop`, always within `0..=max_points`
    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64;

    fn score(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> FactorScore {
        FactorScore::new(
            self.factor(),
            self.evaluate(crop, ctx),
            self.max_points(ctx.policy),
        )
    }
}
