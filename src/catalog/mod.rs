pub mod crops;
pub mod regions;

pub use crops::builtin_crops;
pub use regions::builtin_regions;

use crate::config::CatalogConfig;
use crate::error::{CropwiseError, Result};
use crate::models::{CropProfile, RegionalPreferenceTable};
use std::collections::HashSet;
use std::path::Path;

/// Crop profiles and regional preferences the scorer runs against.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub crops: Vec<CropProfile>,
    pub regions: RegionalPreferenceTable,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            crops: builtin_crops(),
            regions: builtin_regions(),
        }
    }

    /// Built-in tables, each replaced by its YAML file when one is configured.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let crops = match &config.crops_file {
            Some(path) => {
                let crops: Vec<CropProfile> = read_yaml(path)?;
                tracing::info!("Loaded {} crop profiles from {}", crops.len(), path.display());
                crops
            }
            None => builtin_crops(),
        };

        let regions = match &config.regions_file {
            Some(path) => {
                let regions: RegionalPreferenceTable = read_yaml(path)?;
                tracing::info!("Loaded {} regions from {}", regions.len(), path.display());
                regions
            }
            None => builtin_regions(),
        };

        let catalog = Self { crops, regions };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.crops.is_empty() {
            return Err(CropwiseError::InvalidData("crop table is empty".into()));
        }

        let mut seen = HashSet::new();
        for crop in &self.crops {
            if crop.name.trim().is_empty() {
                return Err(CropwiseError::InvalidData("crop with empty name".into()));
            }
            if !seen.insert(crop.name.to_lowercase()) {
                return Err(CropwiseError::InvalidData(format!(
                    "duplicate crop '{}'",
                    crop.name
                )));
            }
            for (label, band) in crop.bands() {
                if !band.is_well_formed() {
                    return Err(CropwiseError::InvalidData(format!(
                        "{}: {} range {}..{} is not well-formed",
                        crop.name, label, band.min, band.max
                    )));
                }
            }
        }

        if self.regions.is_empty() {
            tracing::warn!("Regional table is empty, no regional bonus will apply");
        }
        for region in self.regions.regions() {
            for pref in &region.crops {
                // a listed crop must always earn some bonus
                if !(pref.weight > 0.0 && pref.weight <= 1.0) {
                    return Err(CropwiseError::InvalidData(format!(
                        "{}: weight {} for {} must be above 0 and at most 1",
                        region.region, pref.weight, pref.crop
                    )));
                }
            }
        }

        for name in self.unknown_regional_crops() {
            tracing::debug!("Regional table mentions {} which has no crop profile", name);
        }

        Ok(())
    }

    pub fn crop(&self, name: &str) -> Option<&CropProfile> {
        let name = name.trim();
        self.crops.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn crop_or_err(&self, name: &str) -> Result<&CropProfile> {
        self.crop(name)
            .ok_or_else(|| CropwiseError::NotFound(format!("crop '{}'", name)))
    }

    /// Crops named in the regional table that have no profile to score.
    pub fn unknown_regional_crops(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .regions
            .regions()
            .iter()
            .flat_map(|r| r.crops.iter().map(|p| p.crop.as_str()))
            .filter(|name| self.crop(name).is_none())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CropwiseError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(serde_yaml::from_str(&text)?)
}
