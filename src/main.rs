mod catalog;
mod cli;
mod config;
mod error;
mod form;
mod logic;
mod models;
mod report;

use anyhow::Context;
use catalog::Catalog;
use chrono::{Datelike, Local, Month};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat, RecommendArgs};
use config::Config;
use error::CropwiseError;
use logic::{market, SuitabilityScorer};
use models::{normalize_choice, FarmInput, SoilType};
use report::Report;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init => {
            Config::setup_interactive(config_path)?;
        }
        Commands::Check => {
            let config = Config::load(config_path).context("Configuration error")?;
            println!("Config: OK");
            let catalog = Catalog::load(&config.catalog).context("Catalog error")?;
            println!(
                "Catalog: OK ({} crops, {} regions)",
                catalog.crops.len(),
                catalog.regions.len()
            );
            let scorer = SuitabilityScorer::new(config.scoring.policy());
            let factors: Vec<&str> = scorer.factors().iter().map(|f| f.as_str()).collect();
            println!(
                "Scoring: OK ({}; {} points max)",
                factors.join(", "),
                scorer.max_points()
            );
            let unknown = catalog.unknown_regional_crops();
            if !unknown.is_empty() {
                println!(
                    "Note: regional preferences mention crops with no profile: {}",
                    unknown.join(", ")
                );
            }
        }
        Commands::Crops => {
            let config = Config::load(config_path).context("Configuration error")?;
            let catalog = Catalog::load(&config.catalog)?;
            print!("{}", report::crops_table(&catalog));
        }
        Commands::Regions => {
            let config = Config::load(config_path).context("Configuration error")?;
            let catalog = Catalog::load(&config.catalog)?;
            print!("{}", report::regions_table(&catalog));
        }
        Commands::Soils => {
            print!("{}", report::soils_table());
        }
        Commands::Recommend(args) => {
            let config = Config::load(config_path).context("Configuration error")?;
            run_recommend(&config, &args)?;
        }
    }

    Ok(())
}

fn run_recommend(config: &Config, args: &RecommendArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog)?;

    let mut input = farm_input(config, args)?;
    if args.interactive {
        input = form::prompt_farm_input(&input, &catalog.regions)?;
    }
    if let Some(region) = input.region() {
        if catalog.regions.find(region).is_none() {
            tracing::warn!("Unknown region '{}', no regional bonus applies", region);
        }
    }
    input.validate().context("Invalid farm input")?;

    let scorer = SuitabilityScorer::new(config.scoring.policy());
    let mut recommendations = match &args.crop {
        Some(name) => {
            let crop = catalog.crop_or_err(name)?;
            vec![scorer.evaluate(crop, &input, &catalog.regions)]
        }
        None => {
            let top_n = args.top.unwrap_or(config.scoring.top_n);
            scorer.recommend(&input, &catalog.crops, &catalog.regions, top_n)
        }
    };

    if config.scoring.market_estimates && !args.no_market {
        recommendations = market::attach_estimates(recommendations, &mut rand::thread_rng());
    }

    tracing::info!(
        crops = catalog.crops.len(),
        shown = recommendations.len(),
        top = recommendations.first().map(|r| r.crop.as_str()).unwrap_or("-"),
        "recommendation complete"
    );

    let report = Report::new(&config.farm.name, &input, &recommendations, &catalog);
    match args.format {
        OutputFormat::Text => {
            let month = Month::try_from(Local::now().month() as u8).unwrap_or(Month::January);
            print!("{}", report.to_text(month));
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Flags first, then the farm defaults from config.
fn farm_input(config: &Config, args: &RecommendArgs) -> error::Result<FarmInput> {
    let soil_type = match normalize_choice(args.soil.as_deref()) {
        Some(name) => Some(SoilType::from_str(name).ok_or_else(|| {
            CropwiseError::InvalidData(format!("unknown soil type '{}'", name))
        })?),
        None => config.farm.soil_type(),
    };

    let region = normalize_choice(args.region.as_deref())
        .or_else(|| config.farm.region())
        .map(String::from);

    Ok(FarmInput {
        soil_type,
        ph: args.ph,
        nitrogen: args.nitrogen,
        phosphorus: args.phosphorus,
        potassium: args.potassium,
        temperature: args.temperature,
        rainfall: args.rainfall,
        humidity: args.humidity,
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> RecommendArgs {
        let mut argv = vec!["cropwise", "recommend"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Recommend(args) => args,
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn flags_override_farm_defaults() {
        let mut config = Config::default();
        config.farm.region = Some("Punjab".into());
        config.farm.soil_type = Some("Loam".into());

        let input = farm_input(&config, &args(&["--soil", "clay", "--region", "Bihar"])).unwrap();
        assert_eq!(input.soil_type, Some(SoilType::Clay));
        assert_eq!(input.region(), Some("Bihar"));

        let input = farm_input(&config, &args(&[])).unwrap();
        assert_eq!(input.soil_type, Some(SoilType::Loam));
        assert_eq!(input.region(), Some("Punjab"));
    }

    #[test]
    fn placeholder_flags_fall_back_to_config() {
        let mut config = Config::default();
        config.farm.region = Some("Kerala".into());
        let input = farm_input(&config, &args(&["--region", "Select", "--soil", "Select"])).unwrap();
        assert_eq!(input.region(), Some("Kerala"));
        assert_eq!(input.soil_type, None);
    }

    #[test]
    fn unknown_soil_is_rejected() {
        let err = farm_input(&Config::default(), &args(&["--soil", "Peat"])).unwrap_err();
        assert!(matches!(err, CropwiseError::InvalidData(_)));
    }
}
