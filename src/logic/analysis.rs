//! Human-readable explanations of a crop's score.

use crate::models::{
    format_quantity, CropProfile, FactorScore, FarmInput, Nutrient, RegionalPreferenceTable,
    SoilMatch,
};

const HIGH_PREFERENCE: f64 = 0.7;
const MODERATE_PREFERENCE: f64 = 0.4;

/// One line per factor: its points as a share of what it could earn.
pub fn factor_reasons(breakdown: &[FactorScore]) -> Vec<String> {
    breakdown
        .iter()
        .map(|f| format!("{} suitability: {:.1}%", f.factor, f.percent()))
        .collect()
}

/// Detailed notes comparing the farm against one crop's ideal conditions.
pub fn detailed_analysis(
    crop: &CropProfile,
    input: &FarmInput,
    regions: &RegionalPreferenceTable,
) -> Vec<String> {
    let mut notes = Vec::new();
    let name = &crop.name;

    if let Some(region) = input.region() {
        let preference = regions.weight(region, name).unwrap_or(0.0);
        notes.push(if preference >= HIGH_PREFERENCE {
            format!("{} is highly preferred in {} region.", name, region)
        } else if preference >= MODERATE_PREFERENCE {
            format!("{} is moderately suitable for {} region.", name, region)
        } else {
            format!(
                "{} is not typically grown in {} but may still be viable.",
                name, region
            )
        });
    }

    notes.push(match (crop.soil_match(input.soil_type), input.soil_type) {
        (SoilMatch::Ideal, Some(soil)) => {
            format!("Ideal soil type: {} is perfect for {}.", soil, name)
        }
        (SoilMatch::Compatible, Some(soil)) => format!(
            "Soil type: {} is workable for {}, though {} is ideal.",
            soil, name, crop.soil_type
        ),
        (_, Some(soil)) => format!("Soil type: {} is not ideal but {} can adapt.", soil, name),
        (_, None) => {
            let soils: Vec<String> = crop.soils().iter().map(|s| s.to_string()).collect();
            format!("{} grows best in {} soils.", name, soils.join(", "))
        }
    });

    if crop.ph.contains(input.ph) {
        notes.push(format!("Soil pH ({:.1}) is ideal for {}.", input.ph, name));
    } else {
        notes.push(format!(
            "Soil pH ({:.1}) is outside the optimal range ({:.1}-{:.1}) for {}.",
            input.ph, crop.ph.min, crop.ph.max, name
        ));
    }

    let temperature = format_quantity(input.temperature);
    if crop.temperature.contains(input.temperature) {
        notes.push(format!(
            "Temperature ({}°C) is ideal for {}.",
            temperature, name
        ));
    } else {
        notes.push(format!(
            "Temperature ({}°C) is outside the optimal range ({}°C) for {}.",
            temperature, crop.temperature, name
        ));
    }

    let rainfall = format_quantity(input.rainfall);
    if crop.rainfall.contains(input.rainfall) {
        notes.push(format!("Rainfall ({}mm) is sufficient for {}.", rainfall, name));
    } else {
        notes.push(format!(
            "Rainfall ({}mm) is outside the optimal range ({}mm) for {}.",
            rainfall, crop.rainfall, name
        ));
    }

    if let Some(band) = crop.humidity {
        let humidity = format_quantity(input.humidity);
        if band.contains(input.humidity) {
            notes.push(format!("Humidity ({}%) suits {}.", humidity, name));
        } else {
            notes.push(format!(
                "Humidity ({}%) is outside the usual range ({}%) for {}.",
                humidity, band, name
            ));
        }
    }

    notes.push(format!(
        "Nutrient status: {}.",
        nutrient_status(crop, input).join(", ")
    ));

    notes
}

/// Per-nutrient verdict with a top-up amount when the soil is short.
pub fn nutrient_status(crop: &CropProfile, input: &FarmInput) -> Vec<String> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let band = crop.nutrient_band(nutrient);
            let level = input.nutrient(nutrient);
            if band.contains(level) {
                format!("{} levels are optimal", nutrient)
            } else if level < band.min {
                format!(
                    "Add {} kg/ha {}",
                    format_quantity(band.min - level),
                    nutrient
                )
            } else {
                format!("Reduce {} application", nutrient)
            }
        })
        .collect()
}

/// Headline sentence for the top pick.
pub fn summary(crop: &CropProfile, input: &FarmInput) -> String {
    let mut reasons = Vec::new();

    if let Some(soil) = input.soil_type {
        match crop.soil_match(Some(soil)) {
            SoilMatch::Ideal => reasons.push(format!("ideal for {} soil", soil)),
            _ => reasons.push(format!("adaptable to {} soil", soil)),
        }
    }
    if crop.ph.contains(input.ph) {
        reasons.push("optimal pH level".to_string());
    }
    if crop.temperature.contains(input.temperature) {
        reasons.push("suitable temperature range".to_string());
    }
    if crop.rainfall.contains(input.rainfall) {
        reasons.push("adequate rainfall".to_string());
    }
    for (nutrient, phrase) in [
        (Nutrient::Nitrogen, "sufficient nitrogen"),
        (Nutrient::Phosphorus, "adequate phosphorus"),
        (Nutrient::Potassium, "proper potassium levels"),
    ] {
        if crop.nutrient_band(nutrient).contains(input.nutrient(nutrient)) {
            reasons.push(phrase.to_string());
        }
    }

    if reasons.is_empty() {
        format!(
            "{} is the closest match for the conditions provided.",
            crop.name
        )
    } else {
        format!(
            "{} is recommended because it's {}.",
            crop.name,
            reasons.join(", ")
        )
    }
}
