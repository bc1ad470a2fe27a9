use crate::error::{CropwiseError, Result};
use crate::models::{Band, Nutrient};
use serde::{Deserialize, Serialize};

/// Maximum points each factor can contribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub region: f64,
    pub soil: f64,
    pub ph: f64,
    pub temperature: f64,
    pub rainfall: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl ScoringWeights {
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    pub fn nutrients(&self) -> f64 {
        self.nitrogen + self.phosphorus + self.potassium
    }

    pub fn total(&self) -> f64 {
        self.region + self.soil + self.ph + self.temperature + self.rainfall + self.nutrients()
    }

    fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("region", self.region),
            ("soil", self.soil),
            ("ph", self.ph),
            ("temperature", self.temperature),
            ("rainfall", self.rainfall),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            region: 30.0,
            soil: 25.0,
            ph: 15.0,
            temperature: 10.0,
            rainfall: 10.0,
            nitrogen: 8.0,
            phosphorus: 8.0,
            potassium: 9.0,
        }
    }
}

/// Distance from a band's midpoint at which a factor earns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub ph: f64,
    /// °C
    pub temperature: f64,
    /// mm
    pub rainfall: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Tolerances {
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("ph", self.ph),
            ("temperature", self.temperature),
            ("rainfall", self.rainfall),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
        ]
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            ph: 3.0,
            temperature: 20.0,
            rainfall: 1000.0,
            nitrogen: 60.0,
            phosphorus: 50.0,
            potassium: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub weights: ScoringWeights,
    pub tolerances: Tolerances,
    /// Share of the soil weight earned by a tolerated (not ideal) soil
    pub compatible_soil_fraction: f64,
}

pub const DEFAULT_COMPATIBLE_SOIL_FRACTION: f64 = 0.4;

impl ScoringPolicy {
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights.fields() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(CropwiseError::Config(format!(
                    "scoring weight '{}' must be a non-negative number (got {})",
                    name, weight
                )));
            }
        }
        if self.weights.total() <= 0.0 {
            return Err(CropwiseError::Config(
                "scoring weights must not all be zero".into(),
            ));
        }

        for (name, tolerance) in self.tolerances.fields() {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(CropwiseError::Config(format!(
                    "tolerance '{}' must be positive (got {})",
                    name, tolerance
                )));
            }
        }

        // a compatible soil must score below the ideal one
        if !(0.0..1.0).contains(&self.compatible_soil_fraction) {
            return Err(CropwiseError::Config(format!(
                "compatible_soil_fraction {} must be at least 0 and below 1",
                self.compatible_soil_fraction
            )));
        }

        Ok(())
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            tolerances: Tolerances::default(),
            compatible_soil_fraction: DEFAULT_COMPATIBLE_SOIL_FRACTION,
        }
    }
}

/// Full credit inside the band; outside it, credit falls linearly with
/// distance from the band midpoint and is floored at zero.
pub fn band_points(value: f64, band: Band, max_points: f64, tolerance: f64) -> f64 {
    if band.contains(value) {
        return max_points;
    }
    if tolerance <= 0.0 {
        return 0.0;
    }
    let deviation = (value - band.midpoint()).abs();
    (max_points - max_points / tolerance * deviation).max(0.0)
}
