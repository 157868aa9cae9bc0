//! Building type selected for an evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The kind of building being evaluated; selects the tip set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildingType {
    #[default]
    Home,
    Office,
    School,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [BuildingType::Home, BuildingType::Office, BuildingType::School];

    pub fn label(&self) -> &'static str {
        match self {
            BuildingType::Home => "Home",
            BuildingType::Office => "Office",
            BuildingType::School => "School",
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuildingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(BuildingType::Home),
            "office" => Ok(BuildingType::Office),
            "school" => Ok(BuildingType::School),
            _ => Err(ValidationError::invalid_format(
                "building_type",
                "expected Home, Office or School",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("office".parse::<BuildingType>().unwrap(), BuildingType::Office);
        assert_eq!(" School ".parse::<BuildingType>().unwrap(), BuildingType::School);
    }

    #[test]
    fn rejects_unknown_building() {
        assert!("Warehouse".parse::<BuildingType>().is_err());
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(BuildingType::default(), BuildingType::Home);
    }
}
