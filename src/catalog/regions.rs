use crate::models::{RegionPreferences, RegionalPreferenceTable};

pub fn builtin_regions() -> RegionalPreferenceTable {
    RegionalPreferenceTable::new(vec![
        RegionPreferences::new(
            "Punjab",
            &[("Wheat", 0.9), ("Rice", 0.8), ("Cotton", 0.7), ("Maize", 0.6), ("Sugarcane", 0.5)],
        ),
        RegionPreferences::new(
            "Haryana",
            &[("Wheat", 0.9), ("Rice", 0.8), ("Cotton", 0.7), ("Mustard", 0.6), ("Bajra", 0.5)],
        ),
        RegionPreferences::new(
            "Uttar Pradesh",
            &[("Wheat", 0.9), ("Rice", 0.8), ("Sugarcane", 0.8), ("Potato", 0.7), ("Pulses", 0.6)],
        ),
        RegionPreferences::new(
            "Maharashtra",
            &[("Cotton", 0.9), ("Soybean", 0.8), ("Pulses", 0.7), ("Sugarcane", 0.7), ("Groundnut", 0.6)],
        ),
        RegionPreferences::new(
            "Karnataka",
            &[("Rice", 0.8), ("Coffee", 0.8), ("Cotton", 0.7), ("Pulses", 0.7), ("Sugarcane", 0.6)],
        ),
        RegionPreferences::new(
            "Tamil Nadu",
            &[("Rice", 0.9), ("Sugarcane", 0.8), ("Coconut", 0.8), ("Cotton", 0.7), ("Groundnut", 0.7)],
        ),
        RegionPreferences::new(
            "Andhra Pradesh",
            &[("Rice", 0.9), ("Cotton", 0.8), ("Chilli", 0.7), ("Groundnut", 0.7), ("Tobacco", 0.6)],
        ),
        RegionPreferences::new(
            "Gujarat",
            &[("Cotton", 0.9), ("Groundnut", 0.8), ("Wheat", 0.7), ("Pulses", 0.6), ("Castor", 0.5)],
        ),
        RegionPreferences::new(
            "Odisha",
            &[("Rice", 0.9), ("Pulses", 0.7), ("Oilseeds", 0.6), ("Millets", 0.6), ("Jute", 0.5)],
        ),
        RegionPreferences::new(
            "Jharkhand",
            &[("Rice", 0.9), ("Pulses", 0.7), ("Oilseeds", 0.6), ("Maize", 0.6), ("Wheat", 0.5)],
        ),
        RegionPreferences::new(
            "West Bengal",
            &[("Rice", 0.9), ("Jute", 0.8), ("Tea", 0.7), ("Potato", 0.6), ("Wheat", 0.5)],
        ),
        RegionPreferences::new(
            "Bihar",
            &[("Rice", 0.9), ("Wheat", 0.8), ("Maize", 0.7), ("Pulses", 0.6), ("Sugarcane", 0.5)],
        ),
    ])
}
