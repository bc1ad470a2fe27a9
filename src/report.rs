//! Plain-text and JSON rendering of recommendation results.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::logic::analysis;
use crate::models::{CropRecommendation, FactorScore, FarmInput, SoilType};
use chrono::Month;
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Everything one `recommend` run produced.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub farm: &'a str,
    pub input: &'a FarmInput,
    pub summary: Option<String>,
    pub recommendations: &'a [CropRecommendation],
}

impl<'a> Report<'a> {
    pub fn new(
        farm: &'a str,
        input: &'a FarmInput,
        recommendations: &'a [CropRecommendation],
        catalog: &Catalog,
    ) -> Self {
        let summary = recommendations
            .first()
            .and_then(|top| catalog.crop(&top.crop))
            .map(|crop| analysis::summary(crop, input));

        Self {
            farm,
            input,
            summary,
            recommendations,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Text cards, best first. `month` drives the "in season" marker.
    pub fn to_text(&self, month: Month) -> String {
        let mut out = String::new();
        let input = self.input;

        let _ = writeln!(out, "Crop recommendations for {}", self.farm);
        let _ = writeln!(
            out,
            "  Soil: {}   Region: {}",
            input
                .soil_type
                .map_or("not specified".to_string(), |s| s.to_string()),
            input.region().unwrap_or("not specified")
        );
        let _ = writeln!(
            out,
            "  pH {:.1}  N {}  P {}  K {}  |  {}°C  {} mm  {}% RH",
            input.ph,
            input.nitrogen,
            input.phosphorus,
            input.potassium,
            input.temperature,
            input.rainfall,
            input.humidity
        );
        let _ = writeln!(out);

        if self.recommendations.is_empty() {
            let _ = writeln!(out, "No crops to recommend.");
            return out;
        }

        if let Some(summary) = &self.summary {
            let _ = writeln!(out, "{}", summary);
            let _ = writeln!(out);
        }

        for (rank, rec) in self.recommendations.iter().enumerate() {
            render_card(&mut out, rank + 1, rec, month);
        }

        out
    }
}

fn render_card(out: &mut String, rank: usize, rec: &CropRecommendation, month: Month) {
    let _ = writeln!(
        out,
        "#{} {}  {:.1}/100  ({:.1} of {:.0} pts)",
        rank, rec.crop, rec.score, rec.points, rec.max_points
    );

    for factor in &rec.breakdown {
        let _ = writeln!(out, "    {}", factor_line(factor));
    }

    let advice = &rec.advice;
    let season = match advice.in_planting_season(month) {
        Some(true) => " (in season now)",
        _ => "",
    };
    let _ = writeln!(out, "  Planting:   {}{}", advice.planting_text(), season);
    let _ = writeln!(out, "  Harvest:    {}", advice.harvest_text());
    let _ = writeln!(out, "  Water:      {}", advice.water_text());
    let _ = writeln!(out, "  Fertilizer: {}", advice.fertilizer_text());
    let _ = writeln!(out, "  Demand:     {}", advice.demand_trend);
    if let Some(market) = &rec.market {
        let _ = writeln!(
            out,
            "  Market:     ~{} at {} (indicative)",
            market.yield_text(),
            market.price_text()
        );
    }

    for note in &rec.analysis {
        let _ = writeln!(out, "  - {}", note);
    }
    let _ = writeln!(out);
}

/// `Soil type    [##########----------]  12.5/25`
pub fn factor_line(factor: &FactorScore) -> String {
    format!(
        "{:<12} [{}] {:>5.1}/{}",
        factor.factor.as_str(),
        bar(factor.fraction(), BAR_WIDTH),
        factor.points,
        factor.max_points
    )
}

pub fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn crops_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<22} {:<8} {:<8} {:<10} {:<8} {:<8} {:<8}",
        "Crop", "Soils", "pH", "Temp °C", "Rain mm", "N", "P", "K"
    );
    for crop in &catalog.crops {
        let soils: Vec<String> = crop.soils().iter().map(|s| s.to_string()).collect();
        let _ = writeln!(
            out,
            "{:<10} {:<22} {:<8} {:<8} {:<10} {:<8} {:<8} {:<8}",
            crop.name,
            soils.join(", "),
            crop.ph.to_string(),
            crop.temperature.to_string(),
            crop.rainfall.to_string(),
            crop.nitrogen.to_string(),
            crop.phosphorus.to_string(),
            crop.potassium.to_string()
        );
    }
    out
}

pub fn regions_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    for region in catalog.regions.regions() {
        let prefs: Vec<String> = region
            .crops
            .iter()
            .map(|p| format!("{} {:.1}", p.crop, p.weight))
            .collect();
        let _ = writeln!(out, "{:<16} {}", region.region, prefs.join(", "));
    }
    out
}

pub fn soils_table() -> String {
    let mut out = String::new();
    for soil in SoilType::ALL {
        let _ = writeln!(out, "{}", soil);
        let _ = writeln!(out, "  {}", soil.description());
        let _ = writeln!(
            out,
            "  Water retention: {}   Nutrient retention: {}",
            soil.water_retention(),
            soil.nutrient_retention()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::SuitabilityScorer;
    use crate::models::{Factor, MarketSnapshot};

    fn ranked(catalog: &Catalog, input: &FarmInput) -> Vec<CropRecommendation> {
        SuitabilityScorer::default().recommend(input, &catalog.crops, &catalog.regions, 3)
    }

    fn clay_input() -> FarmInput {
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

    #[test]
    fn bar_rendering() {
        assert_eq!(bar(0.0, 4), "----");
        assert_eq!(bar(0.5, 4), "##--");
        assert_eq!(bar(1.0, 4), "####");
        assert_eq!(bar(3.0, 4), "####");
        assert_eq!(bar(-1.0, 4), "----");
    }

    #[test]
    fn factor_line_shows_points() {
        let line = factor_line(&FactorScore::new(Factor::Soil, 25.0, 25.0));
        assert!(line.starts_with("Soil type"));
        assert!(line.contains(&"#".repeat(BAR_WIDTH)));
        assert!(line.ends_with(" 25.0/25"));
    }

    #[test]
    fn text_report_lists_ranked_cards() {
        let catalog = Catalog::builtin();
        let input = clay_input();
        let mut recs = ranked(&catalog, &input);
        recs[0] = recs[0].clone().with_market(MarketSnapshot {
            expected_yield: 3.0,
            market_price: 40,
        });
        let report = Report::new("Test Farm", &input, &recs, &catalog);
        let text = report.to_text(Month::June);

        assert!(text.starts_with("Crop recommendations for Test Farm"));
        assert!(text.contains("#1 Rice"));
        assert!(text.contains("#3 "));
        assert!(text.contains("Planting:   June-July (in season now)"));
        assert!(text.contains("Market:     ~3.0 t/ha at ₹40/kg"));
        assert!(text.contains("Rice is recommended because"));
    }

    #[test]
    fn text_report_without_results() {
        let catalog = Catalog::builtin();
        let input = FarmInput::default();
        let report = Report::new("Empty", &input, &[], &catalog);
        assert!(report.summary.is_none());
        assert!(report.to_text(Month::January).contains("No crops to recommend."));
    }

    #[test]
    fn json_report_shape() {
        let catalog = Catalog::builtin();
        let input = clay_input();
        let recs = ranked(&catalog, &input);
        let report = Report::new("Test Farm", &input, &recs, &catalog);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["farm"], "Test Farm");
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(json["recommendations"][0]["crop"], "Rice");
        assert_eq!(
            json["recommendations"][0]["advice"]["planting_time"],
            "June-July"
        );
        assert_eq!(json["input"]["soil_type"], "Clay");
    }

    #[test]
    fn reference_tables_mention_everything() {
        let catalog = Catalog::builtin();
        let crops = crops_table(&catalog);
        for crop in &catalog.crops {
            assert!(crops.contains(&crop.name));
        }
        assert!(regions_table(&catalog).contains("Punjab"));
        assert!(soils_table().contains("Sandy Loam"));
    }
}
