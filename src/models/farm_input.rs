use super::crop_profile::Nutrient;
use super::soil::SoilType;
use crate::error::{CropwiseError, Result};
use serde::{Deserialize, Serialize};

/// Value a select widget shows before the farmer picks anything.
pub const PLACEHOLDER: &str = "Select";

/// Treat blank entries and the form placeholder as "not given".
pub fn normalize_choice(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(PLACEHOLDER) {
        None
    } else {
        Some(value)
    }
}

/// Farmer-supplied conditions for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmInput {
    pub soil_type: Option<SoilType>,
    pub ph: f64,
    /// kg/ha
    pub nitrogen: f64,
    /// kg/ha
    pub phosphorus: f64,
    /// kg/ha
    pub potassium: f64,
    /// °C
    pub temperature: f64,
    /// mm per season
    pub rainfall: f64,
    /// relative humidity, %
    pub humidity: f64,
    pub region: Option<String>,
}

impl FarmInput {
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Region name with placeholders stripped.
    pub fn region(&self) -> Option<&str> {
        normalize_choice(self.region.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("ph", self.ph),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("temperature", self.temperature),
            ("rainfall", self.rainfall),
            ("humidity", self.humidity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CropwiseError::InvalidData(format!(
                    "{} must be a finite number",
                    name
                )));
            }
        }

        if !(0.0..=14.0).contains(&self.ph) {
            return Err(CropwiseError::InvalidData(format!(
                "pH {} is outside 0-14",
                self.ph
            )));
        }

        for (name, value) in [
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("rainfall", self.rainfall),
        ] {
            if value < 0.0 {
                return Err(CropwiseError::InvalidData(format!(
                    "{} cannot be negative (got {})",
                    name, value
                )));
            }
        }

        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(CropwiseError::InvalidData(format!(
                "humidity {}% is outside 0-100",
                self.humidity
            )));
        }

        Ok(())
    }
}

impl Default for FarmInput {
    /// Mid-season values a fresh form starts from.
    fn default() -> Self {
        Self {
            soil_type: None,
            ph: 6.5,
            nitrogen: 50.0,
            phosphorus: 40.0,
            potassium: 40.0,
            temperature: 25.0,
            rainfall: 800.0,
            humidity: 60.0,
            region: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_choice_strips_placeholders() {
        assert_eq!(normalize_choice(Some("Punjab")), Some("Punjab"));
        assert_eq!(normalize_choice(Some("  Bihar ")), Some("Bihar"));
        assert_eq!(normalize_choice(Some("Select")), None);
        assert_eq!(normalize_choice(Some("select")), None);
        assert_eq!(normalize_choice(Some("   ")), None);
        assert_eq!(normalize_choice(None), None);
    }

    #[test]
    fn region_accessor_ignores_placeholder() {
        let mut input = FarmInput {
            region: Some("Select".into()),
            ..FarmInput::default()
        };
        assert_eq!(input.region(), None);
        input.region = Some("Gujarat".into());
        assert_eq!(input.region(), Some("Gujarat"));
    }

    #[test]
    fn default_input_is_valid() {
        assert!(FarmInput::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_ph = FarmInput {
            ph: 15.0,
            ..FarmInput::default()
        };
        assert!(bad_ph.validate().is_err());

        let negative_rain = FarmInput {
            rainfall: -1.0,
            ..FarmInput::default()
        };
        assert!(negative_rain.validate().is_err());

        let nan_nitrogen = FarmInput {
            nitrogen: f64::NAN,
            ..FarmInput::default()
        };
        assert!(nan_nitrogen.validate().is_err());

        let humid = FarmInput {
            humidity: 120.0,
            ..FarmInput::default()
        };
        assert!(humid.validate().is_err());
    }

    #[test]
    fn validate_allows_sub_zero_temperature() {
        let frost = FarmInput {
            temperature: -5.0,
            ..FarmInput::default()
        };
        assert!(frost.validate().is_ok());
    }

    #[test]
    fn nutrient_lookup() {
        let input = FarmInput {
            nitrogen: 70.0,
            phosphorus: 50.0,
            potassium: 60.0,
            ..FarmInput::default()
        };
        assert_eq!(input.nutrient(Nutrient::Nitrogen), 70.0);
        assert_eq!(input.nutrient(Nutrient::Phosphorus), 50.0);
        assert_eq!(input.nutrient(Nutrient::Potassium), 60.0);
    }
}
