use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop recommendations from soil, weather and region"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank crops for the given farm conditions
    Recommend(RecommendArgs),
    /// List the crop table
    Crops,
    /// List regions and their preferred crops
    Regions,
    /// Describe the supported soil types
    Soils,
    /// Run interactive setup and write config.yaml
    Init,
    /// Validate config and catalog
    Check,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Soil type (Clay, Loam, Sandy, Silt, "Clay Loam", "Sandy Loam", "Silt Loam")
    #[arg(long)]
    pub soil: Option<String>,

    /// Soil pH
    #[arg(long, default_value_t = 6.5)]
    pub ph: f64,

    /// Available nitrogen, kg/ha
    #[arg(short = 'n', long, default_value_t = 50.0)]
    pub nitrogen: f64,

    /// Available phosphorus, kg/ha
    #[arg(short = 'p', long, default_value_t = 40.0)]
    pub phosphorus: f64,

    /// Available potassium, kg/ha
    #[arg(short = 'k', long, default_value_t = 40.0)]
    pub potassium: f64,

    /// Average temperature, °C
    #[arg(long, default_value_t = 25.0, allow_hyphen_values = true)]
    pub temperature: f64,

    /// Annual rainfall, mm
    #[arg(long, default_value_t = 800.0)]
    pub rainfall: f64,

    /// Relative humidity, %
    #[arg(long, default_value_t = 60.0)]
    pub humidity: f64,

    /// Region or state; overrides farm.region from config
    #[arg(short, long)]
    pub region: Option<String>,

    /// Score a single crop instead of ranking the whole catalog
    #[arg(long)]
    pub crop: Option<String>,

    /// Number of crops to show; overrides scoring.top_n
    #[arg(short, long)]
    pub top: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the indicative yield and price figures
    #[arg(long)]
    pub no_market: bool,

    /// Prompt for every field instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
