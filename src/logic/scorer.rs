use super::analysis;
use super::policy::ScoringPolicy;
use super::rules::{
    FactorRule, NutrientRule, PhRule, RainfallRule, RegionalRule, ScoringContext, SoilRule,
    TemperatureRule,
};
use crate::models::{
    CropProfile, CropRecommendation, Factor, FactorScore, FarmInput, RegionalPreferenceTable,
};
use std::collections::HashSet;

/// Weighted additive crop suitability scorer.
///
/// Each crop's points are the sum of its factor rules. Ranking uses the raw
/// points; the reported score is the same value as a share of the maximum,
/// so the two orderings always agree.
pub struct SuitabilityScorer {
    rules: Vec<Box<dyn FactorRule>>,
    policy: ScoringPolicy,
}

impl SuitabilityScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        let rules: Vec<Box<dyn FactorRule>> = vec![
            Box::new(RegionalRule),
            Box::new(SoilRule),
            Box::new(PhRule),
            Box::new(TemperatureRule),
            Box::new(RainfallRule),
            Box::new(NutrientRule),
        ];

        Self { rules, policy }
    }

    pub fn factors(&self) -> Vec<Factor> {
        self.rules.iter().map(|r| r.factor()).collect()
    }

    pub fn max_points(&self) -> f64 {
        self.rules
            .iter()
            .map(|r| r.max_points(&self.policy))
            .sum()
    }

    pub fn breakdown(
        &self,
        crop: &CropProfile,
        input: &FarmInput,
        regions: &RegionalPreferenceTable,
    ) -> Vec<FactorScore> {
        let ctx = ScoringContext {
            input,
            regions,
            policy: &self.policy,
        };
        self.rules.iter().map(|r| r.score(crop, &ctx)).collect()
    }

    /// Score one crop and attach its reasons, analysis and advice.
    pub fn evaluate(
        &self,
        crop: &CropProfile,
        input: &FarmInput,
        regions: &RegionalPreferenceTable,
    ) -> CropRecommendation {
        let breakdown = self.breakdown(crop, input, regions);
        let reasons = analysis::factor_reasons(&breakdown);

        CropRecommendation::new(crop.name.clone(), breakdown)
            .with_reasons(reasons)
            .with_analysis(analysis::detailed_analysis(crop, input, regions))
            .with_advice(crop.advice.clone())
    }

    /// Every crop, best first. Ties keep the order of `crops`, and a crop
    /// name that repeats is scored only once.
    pub fn score_crops(
        &self,
        input: &FarmInput,
        crops: &[CropProfile],
        regions: &RegionalPreferenceTable,
    ) -> Vec<CropRecommendation> {
        let mut seen = HashSet::new();
        let mut results: Vec<CropRecommendation> = crops
            .iter()
            .filter(|crop| {
                let fresh = seen.insert(crop.name.to_lowercase());
                if !fresh {
                    tracing::warn!("Skipping duplicate crop profile {}", crop.name);
                }
                fresh
            })
            .map(|crop| {
                let rec = self.evaluate(crop, input, regions);
                tracing::debug!(
                    crop = %rec.crop,
                    points = rec.points,
                    score = rec.score,
                    "scored crop"
                );
                rec
            })
            .collect();

        // stable: equal points keep declaration order
        results.sort_by(|a, b| b.points.total_cmp(&a.points));
        results
    }

    /// The `top_n` best crops.
    pub fn recommend(
        &self,
        input: &FarmInput,
        crops: &[CropProfile],
        regions: &RegionalPreferenceTable,
        top_n: usize,
    ) -> Vec<CropRecommendation> {
        let mut results = self.score_crops(input, crops, regions);
        results.truncate(top_n);
        results
    }
}

impl Default for SuitabilityScorer {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::SoilType;

    fn rice_conditions() -> FarmInput {
        FarmInput {
            soil_type: Some(SoilType::Clay),
            ph: 6.0,
            nitrogen: 70.0,
            phosphorus: 50.0,
            potassium: 60.0,
            temperature: 28.0,
            rainfall: 1400.0,
            humidity: 70.0,
            region: Some("Punjab".into()),
        }
    }

    fn wheat_midpoints(catalog: &Catalog) -> FarmInput {
        let wheat = catalog.crop("Wheat").unwrap();
        FarmInput {
            soil_type: Some(SoilType::Loam),
            ph: wheat.ph.midpoint(),
            nitrogen: wheat.nitrogen.midpoint(),
            phosphorus: wheat.phosphorus.midpoint(),
            potassium: wheat.potassium.midpoint(),
            temperature: wheat.temperature.midpoint(),
            rainfall: wheat.rainfall.midpoint(),
            humidity: wheat.humidity.unwrap().midpoint(),
            region: Some("Punjab".into()),
        }
    }

    fn factor_points(
        scorer: &SuitabilityScorer,
        crop: &CropProfile,
        input: &FarmInput,
        regions: &RegionalPreferenceTable,
        factor: Factor,
    ) -> f64 {
        scorer
            .breakdown(crop, input, regions)
            .into_iter()
            .find(|f| f.factor == factor)
            .map(|f| f.points)
            .unwrap()
    }

    #[test]
    fn scoring_is_deterministic() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let input = rice_conditions();
        for crop in &catalog.crops {
            let first = scorer.evaluate(crop, &input, &catalog.regions).points;
            let second = scorer.evaluate(crop, &input, &catalog.regions).points;
            assert_eq!(first, second, "{} scored differently", crop.name);
        }
    }

    #[test]
    fn regional_bonus_raises_first_listed_crop() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();

        for region in catalog.regions.regions() {
            let first = &region.crops[0].crop;
            let Some(crop) = catalog.crop(first) else {
                continue;
            };
            let with_region = FarmInput {
                region: Some(region.region.clone()),
                ..rice_conditions()
            };
            let without_region = FarmInput {
                region: None,
                ..rice_conditions()
            };
            let with = scorer.evaluate(crop, &with_region, &catalog.regions);
            let without = scorer.evaluate(crop, &without_region, &catalog.regions);
            assert!(
                with.points > without.points,
                "{} in {} did not gain",
                crop.name,
                region.region
            );
            assert!(with.score > without.score);
        }
    }

    #[test]
    fn placeholder_region_earns_no_bonus() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let wheat = catalog.crop("Wheat").unwrap();
        let input = FarmInput {
            region: Some("Select".into()),
            ..rice_conditions()
        };
        assert_eq!(
            factor_points(&scorer, wheat, &input, &catalog.regions, Factor::Region),
            0.0
        );

        let unknown = FarmInput {
            region: Some("Atlantis".into()),
            ..rice_conditions()
        };
        assert_eq!(
            factor_points(&scorer, wheat, &unknown, &catalog.regions, Factor::Region),
            0.0
        );
    }

    #[test]
    fn regional_bonus_scales_with_weight() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let input = rice_conditions();
        let wheat = catalog.crop("Wheat").unwrap();
        let sugarcane = catalog.crop("Sugarcane").unwrap();
        assert!(
            (factor_points(&scorer, wheat, &input, &catalog.regions, Factor::Region) - 27.0).abs()
                < 0.001
        );
        assert!(
            (factor_points(&scorer, sugarcane, &input, &catalog.regions, Factor::Region) - 15.0)
                .abs()
                < 0.001
        );
    }

    #[test]
    fn exact_soil_match_earns_maximum() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();

        for crop in &catalog.crops {
            let exact = FarmInput {
                soil_type: Some(crop.soil_type),
                ..rice_conditions()
            };
            let best = factor_points(&scorer, crop, &exact, &catalog.regions, Factor::Soil);
            assert_eq!(best, 25.0);

            for soil in SoilType::ALL.into_iter().filter(|s| *s != crop.soil_type) {
                let other = FarmInput {
                    soil_type: Some(soil),
                    ..rice_conditions()
                };
                let points = factor_points(&scorer, crop, &other, &catalog.regions, Factor::Soil);
                assert!(points < best, "{} on {} scored {}", crop.name, soil, points);
            }

            let missing = FarmInput {
                soil_type: None,
                ..rice_conditions()
            };
            assert_eq!(
                factor_points(&scorer, crop, &missing, &catalog.regions, Factor::Soil),
                0.0
            );
        }
    }

    #[test]
    fn compatible_soil_earns_partial_credit() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let wheat = catalog.crop("Wheat").unwrap();
        let input = FarmInput {
            soil_type: Some(SoilType::ClayLoam),
            ..rice_conditions()
        };
        assert!(
            (factor_points(&scorer, wheat, &input, &catalog.regions, Factor::Soil) - 10.0).abs()
                < 0.001
        );
    }

    #[test]
    fn compatible_soil_stays_below_ideal_for_any_valid_fraction() {
        let catalog = Catalog::builtin();
        let wheat = catalog.crop("Wheat").unwrap();
        let ideal = FarmInput {
            soil_type: Some(SoilType::Loam),
            ..rice_conditions()
        };
        let compatible = FarmInput {
            soil_type: Some(SoilType::ClayLoam),
            ..rice_conditions()
        };

        for fraction in [0.0, 0.4, 0.99] {
            let mut policy = ScoringPolicy::default();
            policy.compatible_soil_fraction = fraction;
            assert!(policy.validate().is_ok());
            let scorer = SuitabilityScorer::new(policy);
            let best = factor_points(&scorer, wheat, &ideal, &catalog.regions, Factor::Soil);
            let partial =
                factor_points(&scorer, wheat, &compatible, &catalog.regions, Factor::Soil);
            assert!(partial < best, "fraction {}: {} vs {}", fraction, partial, best);
        }

        let mut policy = ScoringPolicy::default();
        policy.compatible_soil_fraction = 1.0;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn ph_peaks_at_midpoint_and_never_rises_moving_away() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();

        for crop in &catalog.crops {
            let mid = crop.ph.midpoint();
            let at = |ph: f64| {
                let input = FarmInput {
                    ph,
                    ..rice_conditions()
                };
                factor_points(&scorer, crop, &input, &catalog.regions, Factor::Ph)
            };

            assert_eq!(at(mid), 15.0);

            for direction in [-1.0, 1.0] {
                let mut previous = at(mid);
                for step in 1..=60 {
                    let ph = mid + direction * step as f64 * 0.1;
                    let current = at(ph);
                    assert!(
                        current <= previous,
                        "{} pH {} rose from {} to {}",
                        crop.name,
                        ph,
                        previous,
                        current
                    );
                    assert!(current >= 0.0);
                    previous = current;
                }
                assert!(previous < 15.0);
            }
        }
    }

    #[test]
    fn rice_beats_cotton_on_wet_clay() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let input = rice_conditions();
        let rice = scorer.evaluate(catalog.crop("Rice").unwrap(), &input, &catalog.regions).points;
        let cotton = scorer.evaluate(catalog.crop("Cotton").unwrap(), &input, &catalog.regions).points;
        assert!(rice > cotton, "rice {} vs cotton {}", rice, cotton);
        // every factor matches for rice
        assert!((rice - 109.0).abs() < 0.001);
    }

    #[test]
    fn wheat_wins_at_its_own_midpoints() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let input = wheat_midpoints(&catalog);
        let ranked = scorer.score_crops(&input, &catalog.crops, &catalog.regions);
        assert_eq!(ranked[0].crop, "Wheat");
        assert!(ranked[0].points > ranked[1].points);
    }

    #[test]
    fn results_sorted_without_duplicates() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let ranked = scorer.score_crops(&rice_conditions(), &catalog.crops, &catalog.regions);

        assert_eq!(ranked.len(), catalog.crops.len());
        assert!(ranked.windows(2).all(|w| w[0].points >= w[1].points));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        let names: HashSet<&str> = ranked.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(names.len(), ranked.len());
    }

    #[test]
    fn scores_stay_within_zero_and_hundred() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let extreme = FarmInput {
            soil_type: None,
            ph: 0.0,
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            temperature: -30.0,
            rainfall: 0.0,
            humidity: 0.0,
            region: None,
        };
        for input in [extreme, rice_conditions(), wheat_midpoints(&catalog)] {
            for rec in scorer.score_crops(&input, &catalog.crops, &catalog.regions) {
                assert!((0.0..=100.0).contains(&rec.score), "{}: {}", rec.crop, rec.score);
                assert!(rec.points >= 0.0);
                assert!(rec.points <= scorer.max_points());
            }
        }
    }

    #[test]
    fn recommend_takes_top_n() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let input = rice_conditions();
        let all = scorer.score_crops(&input, &catalog.crops, &catalog.regions);

        let top3 = scorer.recommend(&input, &catalog.crops, &catalog.regions, 3);
        assert_eq!(top3.len(), 3);
        for (a, b) in top3.iter().zip(&all) {
            assert_eq!(a.crop, b.crop);
        }

        let top1 = scorer.recommend(&input, &catalog.crops, &catalog.regions, 1);
        assert_eq!(top1.len(), 1);
        assert_eq!(top1[0].crop, "Rice");

        assert!(scorer
            .recommend(&input, &catalog.crops, &catalog.regions, 0)
            .is_empty());
        assert_eq!(
            scorer
                .recommend(&input, &catalog.crops, &catalog.regions, 50)
                .len(),
            catalog.crops.len()
        );
    }

    #[test]
    fn ties_keep_declaration_order() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let wheat = catalog.crop("Wheat").unwrap().clone();
        let mut twin = wheat.clone();
        twin.name = "Emmer".into();
        let crops = vec![twin, wheat];

        let input = FarmInput {
            region: None,
            ..wheat_midpoints(&catalog)
        };
        let ranked = scorer.score_crops(&input, &crops, &catalog.regions);
        assert_eq!(ranked[0].points, ranked[1].points);
        assert_eq!(ranked[0].crop, "Emmer");
        assert_eq!(ranked[1].crop, "Wheat");
    }

    #[test]
    fn duplicate_crop_names_scored_once() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let mut crops = catalog.crops.clone();
        crops.push(catalog.crop("Rice").unwrap().clone());
        let ranked = scorer.score_crops(&rice_conditions(), &crops, &catalog.regions);
        assert_eq!(ranked.len(), catalog.crops.len());
    }

    #[test]
    fn breakdown_covers_every_factor() {
        let catalog = Catalog::builtin();
        let scorer = SuitabilityScorer::default();
        let rec = scorer.evaluate(
            catalog.crop("Maize").unwrap(),
            &rice_conditions(),
            &catalog.regions,
        );
        assert_eq!(
            rec.breakdown.iter().map(|f| f.factor).collect::<Vec<_>>(),
            scorer.factors()
        );
        assert_eq!(rec.reasons.len(), scorer.factors().len());
        assert!(!rec.analysis.is_empty());
        assert!((rec.max_points - 115.0).abs() < 0.001);
        assert_eq!(rec.advice.demand_trend, catalog.crop("Maize").unwrap().advice.demand_trend);
        assert!(rec.market.is_none());
    }

    #[test]
    fn custom_weights_change_the_ranking_inputs() {
        let catalog = Catalog::builtin();
        let mut policy = ScoringPolicy::default();
        policy.weights.region = 0.0;
        let scorer = SuitabilityScorer::new(policy);
        let input = rice_conditions();
        let wheat = catalog.crop("Wheat").unwrap();
        assert_eq!(
            factor_points(&scorer, wheat, &input, &catalog.regions, Factor::Region),
            0.0
        );
        assert!((scorer.max_points() - 85.0).abs() < 0.001);
    }
}
