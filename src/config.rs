use crate::catalog::builtin_regions;
use crate::error::{CropwiseError, Result};
use crate::logic::policy::{ScoringPolicy, ScoringWeights, Tolerances, DEFAULT_COMPATIBLE_SOIL_FRACTION};
use crate::models::{normalize_choice, SoilType, PLACEHOLDER};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "CROPWISE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub farm: FarmConfig,
    pub scoring: ScoringConfig,
    pub catalog: CatalogConfig,
}

/// Defaults used when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FarmConfig {
    pub name: String,
    pub region: Option<String>,
    pub soil_type: Option<String>,
}

impl FarmConfig {
    pub fn region(&self) -> Option<&str> {
        normalize_choice(self.region.as_deref())
    }

    pub fn soil_type(&self) -> Option<SoilType> {
        normalize_choice(self.soil_type.as_deref()).and_then(SoilType::from_str)
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            name: "My Farm".into(),
            region: None,
            soil_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// How many crops to recommend
    pub top_n: usize,
    /// Attach random yield/price figures to each recommendation
    pub market_estimates: bool,
    pub compatible_soil_fraction: f64,
    pub weights: ScoringWeights,
    pub tolerances: Tolerances,
}

impl ScoringConfig {
    pub fn policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            weights: self.weights,
            tolerances: self.tolerances,
            compatible_soil_fraction: self.compatible_soil_fraction,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            market_estimates: true,
            compatible_soil_fraction: DEFAULT_COMPATIBLE_SOIL_FRACTION,
            weights: ScoringWeights::default(),
            tolerances: Tolerances::default(),
        }
    }
}

/// Optional YAML files replacing the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub crops_file: Option<PathBuf>,
    pub regions_file: Option<PathBuf>,
}

impl Config {
    /// Load config.yaml (if any), then apply `CROPWISE__SECTION__KEY`
    /// environment overrides. A missing file is not an error.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(CropwiseError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_path().filter(|p| p.exists()),
        };

        let yaml = match &config_path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                let text = std::fs::read_to_string(path)
                    .map_err(|e| CropwiseError::Config(format!("Failed to read config: {}", e)))?;
                Some(Self::substitute_env_vars(&text))
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                None
            }
        };

        let config = Self::from_sources(yaml.as_deref(), true)?;
        config.validate()?;
        Ok(config)
    }

    /// Layer YAML text and (optionally) the process environment.
    fn from_sources(yaml: Option<&str>, with_env: bool) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(yaml) = yaml {
            builder = builder.add_source(config::File::from_str(yaml, config::FileFormat::Yaml));
        }
        if with_env {
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        builder
            .build()
            .and_then(|c| c.try_deserialize::<Config>())
            .map_err(|e| CropwiseError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.policy().validate()?;

        if let Some(soil) = normalize_choice(self.farm.soil_type.as_deref()) {
            if SoilType::from_str(soil).is_none() {
                return Err(CropwiseError::Config(format!(
                    "farm.soil_type '{}' is not a known soil type",
                    soil
                )));
            }
        }

        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir().map(|dir| dir.join("cropwise").join("config.yaml"))
    }

    /// Default path for writing new config files (~/.config/cropwise/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropwiseError::Config("Cannot determine config directory".into()))?
            .join("cropwise");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(target: Option<&Path>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up cropwise!");
        println!();

        println!("Farm");
        let name: String = Input::new()
            .with_prompt("  Farm name")
            .default("My Farm".into())
            .interact_text()
            .map_err(|e| CropwiseError::Config(format!("Input error: {}", e)))?;

        let regions = builtin_regions();
        let mut region_items = vec![PLACEHOLDER];
        region_items.extend(regions.region_names());
        let region_idx = Select::new()
            .with_prompt("  Default region")
            .items(&region_items)
            .default(0)
            .interact()
            .map_err(|e| CropwiseError::Config(format!("Input error: {}", e)))?;

        let mut soil_items = vec![PLACEHOLDER];
        soil_items.extend(SoilType::ALL.iter().map(|s| s.as_str()));
        let soil_idx = Select::new()
            .with_prompt("  Default soil type")
            .items(&soil_items)
            .default(0)
            .interact()
            .map_err(|e| CropwiseError::Config(format!("Input error: {}", e)))?;

        println!();
        println!("Scoring");
        let top_n: usize = Input::new()
            .with_prompt("  Crops to recommend")
            .default(3)
            .interact_text()
            .map_err(|e| CropwiseError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name,
                region: normalize_choice(Some(region_items[region_idx])).map(String::from),
                soil_type: normalize_choice(Some(soil_items[soil_idx])).map(String::from),
            },
            scoring: ScoringConfig {
                top_n,
                ..ScoringConfig::default()
            },
            catalog: CatalogConfig::default(),
        };

        let config_path = match target {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| CropwiseError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# cropwise configuration\n# Generated by `cropwise init`\n# Environment variable substitution (${{VAR}}) is supported.\n# Any key can be overridden with CROPWISE__SECTION__KEY.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Env substitution disabled: {}", e);
                return result;
            }
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
