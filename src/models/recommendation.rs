use super::crop_profile::CropAdvice;
use serde::{Deserialize, Serialize};

/// Input dimension that contributes to a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    Region,
    Soil,
    Ph,
    Temperature,
    Rainfall,
    Nutrients,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Region => "Regional",
            Factor::Soil => "Soil type",
            Factor::Ph => "pH",
            Factor::Temperature => "Temperature",
            Factor::Rainfall => "Rainfall",
            Factor::Nutrients => "Nutrient",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Points one factor earned, out of what it could earn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub points: f64,
    pub max_points: f64,
}

impl FactorScore {
    pub fn new(factor: Factor, points: f64, max_points: f64) -> Self {
        Self {
            factor,
            points,
            max_points,
        }
    }

    pub fn fraction(&self) -> f64 {
        if self.max_points > 0.0 {
            (self.points / self.max_points).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Cosmetic market figures. Randomly drawn, never used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// tonnes per hectare
    pub expected_yield: f64,
    /// rupees per kg
    pub market_price: u32,
}

impl MarketSnapshot {
    pub fn yield_text(&self) -> String {
        format!("{:.1} t/ha", self.expected_yield)
    }

    pub fn price_text(&self) -> String {
        format!("₹{}/kg", self.market_price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: String,
    /// Share of the maximum attainable points, 0-100
    pub score: f64,
    pub points: f64,
    pub max_points: f64,
    pub breakdown: Vec<FactorScore>,
    pub reasons: Vec<String>,
    pub analysis: Vec<String>,
    pub advice: CropAdvice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketSnapshot>,
}

impl CropRecommendation {
    pub fn new(crop: impl Into<String>, breakdown: Vec<FactorScore>) -> Self {
        let points: f64 = breakdown.iter().map(|f| f.points).sum();
        let max_points: f64 = breakdown.iter().map(|f| f.max_points).sum();
        let score = if max_points > 0.0 {
            (points / max_points * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            crop: crop.into(),
            score,
            points,
            max_points,
            breakdown,
            reasons: Vec::new(),
            analysis: Vec::new(),
            advice: CropAdvice::default(),
            market: None,
        }
    }

    pub fn with_reasons(mut self, reasons: Vec<String>) -> Self {
        self.reasons = reasons;
        self
    }

    pub fn with_analysis(mut self, analysis: Vec<String>) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn with_advice(mut self, advice: CropAdvice) -> Self {
        self.advice = advice;
        self
    }

    pub fn with_market(mut self, market: MarketSnapshot) -> Self {
        self.market = Some(market);
        self
    }
}
