use super::{FactorRule, ScoringContext};
use crate::logic::policy::{band_points, ScoringPolicy};
use crate::models::{CropProfile, Factor, Nutrient};

/// N, P and K scored separately against their bands and summed.
pub struct NutrientRule;

impl NutrientRule {
    pub fn nutrient_points(
        &self,
        nutrient: Nutrient,
        crop: &CropProfile,
        ctx: &ScoringContext<'_>,
    ) -> f64 {
        band_points(
            ctx.input.nutrient(nutrient),
            crop.nutrient_band(nutrient),
            ctx.policy.weights.nutrient(nutrient),
            ctx.policy.tolerances.nutrient(nutrient),
        )
    }
}

impl FactorRule for NutrientRule {
    fn factor(&self) -> Factor {
        Factor::Nutrients
    }

    fn max_points(&self, policy: &ScoringPolicy) -> f64 {
        policy.weights.nutrients()
    }

    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64 {
        Nutrient::ALL
            .iter()
            .map(|n| self.nutrient_points(*n, crop, ctx))
            .sum()
    }
}
