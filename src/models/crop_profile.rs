use super::soil::SoilType;
use chrono::Month;
use serde::{Deserialize, Serialize};

/// Format a measurement without a trailing `.0` for whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Closed range of ideal values for one growing condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            format_quantity(self.min),
            format_quantity(self.max)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Span of calendar months, e.g. `October-November`. May wrap past December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthWindow {
    pub start: Month,
    pub end: Month,
}

impl MonthWindow {
    pub const fn new(start: Month, end: Month) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, month: Month) -> bool {
        let start = self.start.number_from_month();
        let end = self.end.number_from_month();
        let m = month.number_from_month();
        if start <= end {
            (start..=end).contains(&m)
        } else {
            m >= start || m <= end
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (start.trim(), end.trim()),
            None => (s.trim(), s.trim()),
        };
        Some(Self {
            start: start.parse().ok()?,
            end: end.parse().ok()?,
        })
    }
}

impl std::fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start.name())
        } else {
            write!(f, "{}-{}", self.start.name(), self.end.name())
        }
    }
}

impl TryFrom<String> for MonthWindow {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid month window '{}'", value))
    }
}

impl From<MonthWindow> for String {
    fn from(window: MonthWindow) -> Self {
        window.to_string()
    }
}

/// Fertilizer dose in kg/ha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpkRatio {
    pub n: u32,
    pub p: u32,
    pub k: u32,
}

impl NpkRatio {
    pub const fn new(n: u32, p: u32, k: u32) -> Self {
        Self { n, p, k }
    }
}

impl std::fmt::Display for NpkRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N:P:K = {}:{}:{} kg/ha", self.n, self.p, self.k)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTrend {
    High,
    Increasing,
    Moderate,
    #[default]
    Stable,
}

impl DemandTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandTrend::High => "High",
            DemandTrend::Increasing => "Increasing",
            DemandTrend::Moderate => "Moderate",
            DemandTrend::Stable => "Stable",
        }
    }
}

impl std::fmt::Display for DemandTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const VARIES_BY_REGION: &str = "Varies by region";
const DEFAULT_WATER_REQUIREMENT: &str = "Moderate";
const DEFAULT_FERTILIZER: NpkRatio = NpkRatio::new(50, 50, 50);

/// Static agronomic advice attached to a crop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropAdvice {
    pub planting_time: Option<MonthWindow>,
    pub harvest_time: Option<MonthWindow>,
    pub water_req: Option<String>,
    pub fertilizer: Option<NpkRatio>,
    pub demand_trend: DemandTrend,
}

impl CropAdvice {
    pub fn planting_text(&self) -> String {
        self.planting_time
            .map(|w| w.to_string())
            .unwrap_or_else(|| VARIES_BY_REGION.to_string())
    }

    pub fn harvest_text(&self) -> String {
        self.harvest_time
            .map(|w| w.to_string())
            .unwrap_or_else(|| VARIES_BY_REGION.to_string())
    }

    pub fn water_text(&self) -> &str {
        self.water_req.as_deref().unwrap_or(DEFAULT_WATER_REQUIREMENT)
    }

    pub fn fertilizer_text(&self) -> String {
        self.fertilizer.unwrap_or(DEFAULT_FERTILIZER).to_string()
    }

    /// `None` when the crop has no known planting window.
    pub fn in_planting_season(&self, month: Month) -> Option<bool> {
        self.planting_time.map(|w| w.contains(month))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilMatch {
    Ideal,
    Compatible,
    Mismatch,
    Unknown,
}

/// Ideal growing conditions for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub soil_type: SoilType,
    #[serde(default)]
    pub compatible_soils: Vec<SoilType>,
    pub ph: Band,
    pub temperature: Band,
    pub rainfall: Band,
    pub nitrogen: Band,
    pub phosphorus: Band,
    pub potassium: Band,
    #[serde(default)]
    pub humidity: Option<Band>,
    #[serde(default)]
    pub advice: CropAdvice,
}

impl CropProfile {
    pub fn soil_match(&self, soil: Option<SoilType>) -> SoilMatch {
        match soil {
            None => SoilMatch::Unknown,
            Some(s) if s == self.soil_type => SoilMatch::Ideal,
            Some(s) if self.compatible_soils.contains(&s) => SoilMatch::Compatible,
            Some(_) => SoilMatch::Mismatch,
        }
    }

    pub fn nutrient_band(&self, nutrient: Nutrient) -> Band {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Ideal soil first, then the tolerated ones.
    pub fn soils(&self) -> Vec<SoilType> {
        let mut soils = vec![self.soil_type];
        soils.extend(
            self.compatible_soils
                .iter()
                .copied()
                .filter(|s| *s != self.soil_type),
        );
        soils
    }

    /// Every named band, for validation.
    pub fn bands(&self) -> Vec<(&'static str, Band)> {
        let mut bands = vec![
            ("ph", self.ph),
            ("temperature", self.temperature),
            ("rainfall", self.rainfall),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
        ];
        if let Some(humidity) = self.humidity {
            bands.push(("humidity", humidity));
        }
        bands
    }
}
