use crate::models::{
    Band, CropAdvice, CropProfile, DemandTrend, MonthWindow, NpkRatio, SoilType,
};
use chrono::Month;

struct Ranges {
    ph: (f64, f64),
    temperature: (f64, f64),
    rainfall: (f64, f64),
    nitrogen: (f64, f64),
    phosphorus: (f64, f64),
    potassium: (f64, f64),
    humidity: (f64, f64),
}

fn crop(
    name: &str,
    soil_type: SoilType,
    compatible: &[SoilType],
    r: Ranges,
    advice: CropAdvice,
) -> CropProfile {
    let band = |(min, max): (f64, f64)| Band::new(min, max);
    CropProfile {
        name: name.to_string(),
        soil_type,
        compatible_soils: compatible.to_vec(),
        ph: band(r.ph),
        temperature: band(r.temperature),
        rainfall: band(r.rainfall),
        nitrogen: band(r.nitrogen),
        phosphorus: band(r.phosphorus),
        potassium: band(r.potassium),
        humidity: Some(band(r.humidity)),
        advice,
    }
}

fn advice(
    planting: (Month, Month),
    harvest: (Month, Month),
    water: &str,
    fertilizer: (u32, u32, u32),
    demand_trend: DemandTrend,
) -> CropAdvice {
    CropAdvice {
        planting_time: Some(MonthWindow::new(planting.0, planting.1)),
        harvest_time: Some(MonthWindow::new(harvest.0, harvest.1)),
        water_req: Some(water.to_string()),
        fertilizer: Some(NpkRatio::new(fertilizer.0, fertilizer.1, fertilizer.2)),
        demand_trend,
    }
}

/// Crop table shipped with the binary, in declaration (tie-break) order.
pub fn builtin_crops() -> Vec<CropProfile> {
    use Month::*;
    use SoilType::*;

    vec![
        crop(
            "Wheat",
            Loam,
            &[ClayLoam],
            Ranges {
                ph: (6.0, 7.5),
                temperature: (10.0, 25.0),
                rainfall: (500.0, 1000.0),
                nitrogen: (50.0, 80.0),
                phosphorus: (30.0, 60.0),
                potassium: (40.0, 70.0),
                humidity: (40.0, 80.0),
            },
            advice(
                (October, November),
                (March, April),
                "Moderate (600-800 mm)",
                (60, 40, 40),
                DemandTrend::High,
            ),
        ),
        crop(
            "Rice",
            Clay,
            &[ClayLoam],
            Ranges {
                ph: (5.0, 6.5),
                temperature: (20.0, 35.0),
                rainfall: (1000.0, 2000.0),
                nitrogen: (60.0, 90.0),
                phosphorus: (40.0, 70.0),
                potassium: (50.0, 80.0),
                humidity: (60.0, 100.0),
            },
            advice(
                (June, July),
                (October, November),
                "High (1000-1500 mm)",
                (80, 40, 40),
                DemandTrend::High,
            ),
        ),
        crop(
            "Maize",
            Loam,
            &[SandyLoam],
            Ranges {
                ph: (5.5, 7.0),
                temperature: (15.0, 30.0),
                rainfall: (600.0, 1200.0),
                nitrogen: (70.0, 100.0),
                phosphorus: (50.0, 80.0),
                potassium: (60.0, 90.0),
                humidity: (50.0, 80.0),
            },
            advice(
                (April, May),
                (August, September),
                "Moderate (600-800 mm)",
                (100, 50, 50),
                DemandTrend::Increasing,
            ),
        ),
        crop(
            "Cotton",
            Sandy,
            &[SandyLoam],
            Ranges {
                ph: (5.5, 7.5),
                temperature: (20.0, 35.0),
                rainfall: (500.0, 800.0),
                nitrogen: (40.0, 70.0),
                phosphorus: (30.0, 60.0),
                potassium: (50.0, 80.0),
                humidity: (40.0, 70.0),
            },
            advice(
                (May, June),
                (October, December),
                "Low (400-600 mm)",
                (50, 25, 25),
                DemandTrend::Moderate,
            ),
        ),
        crop(
            "Soybean",
            Silt,
            &[SiltLoam],
            Ranges {
                ph: (6.0, 7.0),
                temperature: (15.0, 30.0),
                rainfall: (600.0, 1000.0),
                nitrogen: (30.0, 60.0),
                phosphorus: (40.0, 70.0),
                potassium: (50.0, 80.0),
                humidity: (50.0, 85.0),
            },
            advice(
                (June, July),
                (September, October),
                "Moderate (500-700 mm)",
                (40, 60, 40),
                DemandTrend::Stable,
            ),
        ),
        crop(
            "Pulses",
            Loam,
            &[SandyLoam],
            Ranges {
                ph: (6.0, 7.5),
                temperature: (15.0, 30.0),
                rainfall: (500.0, 800.0),
                nitrogen: (20.0, 50.0),
                phosphorus: (30.0, 60.0),
                potassium: (40.0, 70.0),
                humidity: (40.0, 70.0),
            },
            advice(
                (October, November),
                (February, March),
                "Low to Moderate (400-600 mm)",
                (20, 50, 40),
                DemandTrend::Stable,
            ),
        ),
        crop(
            "Sugarcane",
            Loam,
            &[ClayLoam],
            Ranges {
                ph: (6.0, 7.5),
                temperature: (20.0, 35.0),
                rainfall: (1000.0, 1500.0),
                nitrogen: (100.0, 150.0),
                phosphorus: (50.0, 80.0),
                potassium: (80.0, 120.0),
                humidity: (60.0, 85.0),
            },
            advice(
                (February, March),
                (February, March),
                "High (1200-1800 mm)",
                (150, 60, 100),
                DemandTrend::Stable,
            ),
        ),
        crop(
            "Groundnut",
            Sandy,
            &[SandyLoam],
            Ranges {
                ph: (5.5, 7.0),
                temperature: (20.0, 35.0),
                rainfall: (500.0, 1000.0),
                nitrogen: (20.0, 40.0),
                phosphorus: (30.0, 50.0),
                potassium: (40.0, 60.0),
                humidity: (50.0, 80.0),
            },
            advice(
                (June, July),
                (September, October),
                "Moderate (500-800 mm)",
                (20, 50, 40),
                DemandTrend::Stable,
            ),
        ),
    ]
}
