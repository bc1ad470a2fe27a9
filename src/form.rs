//! Interactive prompts for farm conditions.

use crate::error::{CropwiseError, Result};
use crate::models::{normalize_choice, FarmInput, RegionalPreferenceTable, SoilType, PLACEHOLDER};
use dialoguer::{Input, Select};

fn prompt_error(e: dialoguer::Error) -> CropwiseError {
    CropwiseError::InvalidData(format!("Input error: {}", e))
}

fn number(prompt: &str, default: f64) -> Result<f64> {
    Input::<f64>::new()
        .with_prompt(format!("  {}", prompt))
        .default(default)
        .validate_with(|v: &f64| {
            if v.is_finite() {
                Ok(())
            } else {
                Err("must be a number")
            }
        })
        .interact_text()
        .map_err(prompt_error)
}

/// Position of `current` in `items`, falling back to the placeholder.
fn preselect(items: &[&str], current: Option<&str>) -> usize {
    current
        .and_then(|c| items.iter().position(|i| i.eq_ignore_ascii_case(c)))
        .unwrap_or(0)
}

/// Ask for every field, pre-filled from `seed`.
pub fn prompt_farm_input(
    seed: &FarmInput,
    regions: &RegionalPreferenceTable,
) -> Result<FarmInput> {
    println!();
    println!("Soil");

    let mut soil_items = vec![PLACEHOLDER];
    soil_items.extend(SoilType::ALL.iter().map(|s| s.as_str()));
    let soil_idx = Select::new()
        .with_prompt("  Soil type")
        .items(&soil_items)
        .default(preselect(&soil_items, seed.soil_type.map(|s| s.as_str())))
        .interact()
        .map_err(prompt_error)?;

    let ph = number("pH", seed.ph)?;
    let nitrogen = number("Nitrogen (kg/ha)", seed.nitrogen)?;
    let phosphorus = number("Phosphorus (kg/ha)", seed.phosphorus)?;
    let potassium = number("Potassium (kg/ha)", seed.potassium)?;

    println!();
    println!("Climate");
    let temperature = number("Temperature (°C)", seed.temperature)?;
    let rainfall = number("Rainfall (mm)", seed.rainfall)?;
    let humidity = number("Humidity (%)", seed.humidity)?;

    let mut region_items = vec![PLACEHOLDER];
    region_items.extend(regions.region_names());
    let region_idx = Select::new()
        .with_prompt("  Region")
        .items(&region_items)
        .default(preselect(&region_items, seed.region()))
        .interact()
        .map_err(prompt_error)?;
    println!();

    Ok(FarmInput {
        soil_type: normalize_choice(Some(soil_items[soil_idx])).and_then(SoilType::from_str),
        ph,
        nitrogen,
        phosphorus,
        potassium,
        temperature,
        rainfall,
        humidity,
        region: normalize_choice(Some(region_items[region_idx])).map(String::from),
    })
}
