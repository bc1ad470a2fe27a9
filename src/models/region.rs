use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPreference {
    pub crop: String,
    /// 0.0-1.0, how strongly the region favors this crop
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPreferences {
    pub region: String,
    pub crops: Vec<CropPreference>,
}

impl RegionPreferences {
    pub fn new(region: impl Into<String>, crops: &[(&str, f64)]) -> Self {
        Self {
            region: region.into(),
            crops: crops
                .iter()
                .map(|(crop, weight)| CropPreference {
                    crop: (*crop).to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }

    pub fn weight(&self, crop: &str) -> Option<f64> {
        self.crops
            .iter()
            .find(|p| p.crop.eq_ignore_ascii_case(crop))
            .map(|p| p.weight)
    }
}

/// Region name to the crops it traditionally favors, in preference order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionalPreferenceTable {
    regions: Vec<RegionPreferences>,
}

impl RegionalPreferenceTable {
    pub fn new(regions: Vec<RegionPreferences>) -> Self {
        Self { regions }
    }

    pub fn find(&self, region: &str) -> Option<&RegionPreferences> {
        let region = region.trim();
        self.regions
            .iter()
            .find(|r| r.region.eq_ignore_ascii_case(region))
    }

    /// Preference weight of `crop` in `region`, if the region lists it.
    pub fn weight(&self, region: &str, crop: &str) -> Option<f64> {
        self.find(region).and_then(|r| r.weight(crop))
    }

    pub fn regions(&self) -> &[RegionPreferences] {
        &self.regions
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.region.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
