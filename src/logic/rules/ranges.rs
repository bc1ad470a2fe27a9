use super::{FactorRule, ScoringContext};
use crate::logic::policy::{band_points, ScoringPolicy};
use crate::models::{CropProfile, Factor};

pub struct PhRule;

impl FactorRule for PhRule {
    fn factor(&self) -> Factor {
        Factor::Ph
    }

    fn max_points(&self, policy: &ScoringPolicy) -> f64 {
        policy.weights.ph
    }

    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64 {
        band_points(
            ctx.input.ph,
            crop.ph,
            ctx.policy.weights.ph,
            ctx.policy.tolerances.ph,
        )
    }
}

pub struct TemperatureRule;

impl FactorRule for TemperatureRule {
    fn factor(&self) -> Factor {
        Factor::Temperature
    }

    fn max_points(&self, policy: &ScoringPolicy) -> f64 {
        policy.weights.temperature
    }

    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64 {
        band_points(
            ctx.input.temperature,
            crop.temperature,
            ctx.policy.weights.temperature,
            ctx.policy.tolerances.temperature,
        )
    }
}

pub struct RainfallRule;

impl FactorRule for RainfallRule {
    fn factor(&self) -> Factor {
        Factor::Rainfall
    }

    fn max_points(&self, policy: &ScoringPolicy) -> f64 {
        policy.weights.rainfall
    }

    fn evaluate(&self, crop: &CropProfile, ctx: &ScoringContext<'_>) -> f64 {
        band_points(
            ctx.input.rainfall,
            crop.rainfall,
            ctx.policy.weights.rainfall,
            ctx.policy.tolerances.rainfall,
        )
    }
}
