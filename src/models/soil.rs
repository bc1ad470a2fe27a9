use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    Silt,
    #[serde(rename = "Clay Loam", alias = "ClayLoam")]
    ClayLoam,
    #[serde(rename = "Sandy Loam", alias = "SandyLoam")]
    SandyLoam,
    #[serde(rename = "Silt Loam", alias = "SiltLoam")]
    SiltLoam,
}

impl SoilType {
    pub const ALL: [SoilType; 7] = [
        SoilType::Clay,
        SoilType::Loam,
        SoilType::Sandy,
        SoilType::Silt,
        SoilType::ClayLoam,
        SoilType::SandyLoam,
        SoilType::SiltLoam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Loam => "Loam",
            SoilType::Sandy => "Sandy",
            SoilType::Silt => "Silt",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::SiltLoam => "Silt Loam",
        }
    }

    /// Case-insensitive parse. Form placeholders such as "Select" are not soils.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Some(SoilType::Clay),
            "loam" => Some(SoilType::Loam),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "silt" => Some(SoilType::Silt),
            "clayloam" | "clay loam" | "clay-loam" => Some(SoilType::ClayLoam),
            "sandyloam" | "sandy loam" | "sandy-loam" => Some(SoilType::SandyLoam),
            "siltloam" | "silt loam" | "silt-loam" => Some(SoilType::SiltLoam),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoilType::Clay => "Heavy soil with poor drainage but high nutrient content",
            SoilType::Loam => "Well-balanced soil with good drainage and nutrient retention",
            SoilType::Sandy => "Light soil with excellent drainage but low nutrient retention",
            SoilType::Silt => "Smooth soil with moderate drainage and good fertility",
            SoilType::ClayLoam => "Loam with a heavy clay fraction; holds water and nutrients well",
            SoilType::SandyLoam => "Loam with a sandy fraction; drains quickly and warms early",
            SoilType::SiltLoam => "Loam rich in silt; fertile and easy to work when moist",
        }
    }

    pub fn water_retention(&self) -> Retention {
        match self {
            SoilType::Clay | SoilType::ClayLoam => Retention::High,
            SoilType::Loam | SoilType::Silt | SoilType::SiltLoam => Retention::Medium,
            SoilType::Sandy | SoilType::SandyLoam => Retention::Low,
        }
    }

    pub fn nutrient_retention(&self) -> Retention {
        match self {
            SoilType::Clay | SoilType::Loam | SoilType::ClayLoam => Retention::High,
            SoilType::Silt | SoilType::SiltLoam | SoilType::SandyLoam => Retention::Medium,
            SoilType::Sandy => Retention::Low,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retention {
    Low,
    Medium,
    High,
}

impl Retention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Retention::Low => "Low",
            Retention::Medium => "Medium",
            Retention::High => "High",
        }
    }
}

impl std::fmt::Display for Retention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_from_str_valid() {
        assert_eq!(SoilType::from_str("clay"), Some(SoilType::Clay));
        assert_eq!(SoilType::from_str("Loam"), Some(SoilType::Loam));
        assert_eq!(SoilType::from_str("SANDY"), Some(SoilType::Sandy));
        assert_eq!(SoilType::from_str("silt loam"), Some(SoilType::SiltLoam));
        assert_eq!(SoilType::from_str("ClayLoam"), Some(SoilType::ClayLoam));
        assert_eq!(SoilType::from_str("  Sandy Loam "), Some(SoilType::SandyLoam));
    }

    #[test]
    fn soil_type_from_str_invalid() {
        assert_eq!(SoilType::from_str("Select"), None);
        assert_eq!(SoilType::from_str("dirt"), None);
        assert_eq!(SoilType::from_str(""), None);
    }

    #[test]
    fn soil_type_round_trip() {
        for soil in SoilType::ALL {
            assert_eq!(SoilType::from_str(soil.as_str()), Some(soil));
            let debug_str = format!("{:?}", soil);
            assert_eq!(SoilType::from_str(&debug_str), Some(soil));
        }
    }

    #[test]
    fn soil_type_yaml_names() {
        let soils: Vec<SoilType> = serde_yaml::from_str("[Clay, Clay Loam, SandyLoam]").unwrap();
        assert_eq!(
            soils,
            vec![SoilType::Clay, SoilType::ClayLoam, SoilType::SandyLoam]
        );
        assert_eq!(
            serde_yaml::to_string(&SoilType::SiltLoam).unwrap().trim(),
            "Silt Loam"
        );
    }

    #[test]
    fn soil_retention() {
        assert_eq!(SoilType::Clay.water_retention(), Retention::High);
        assert_eq!(SoilType::Sandy.water_retention(), Retention::Low);
        assert_eq!(SoilType::Sandy.nutrient_retention(), Retention::Low);
        assert_eq!(SoilType::Loam.nutrient_retention(), Retention::High);
    }
}
