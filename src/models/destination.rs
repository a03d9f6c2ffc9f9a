use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Continent {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "continent",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum DestinationType {
    Beach,
    Mountain,
    City,
    Cultural,
    Historical,
    Adventure,
}

impl DestinationType {
    pub const ALL: [DestinationType; 6] = [
        DestinationType::Beach,
        DestinationType::Mountain,
        DestinationType::City,
        DestinationType::Cultural,
        DestinationType::Historical,
        DestinationType::Adventure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::Beach => "Beach",
            DestinationType::Mountain => "Mountain",
            DestinationType::City => "City",
            DestinationType::Cultural => "Cultural",
            DestinationType::Historical => "Historical",
            DestinationType::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DestinationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DestinationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "destination type",
                value: s.to_string(),
            })
    }
}

/// Read-only catalog entry. Not linked to any trip.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub continent: Continent,
    #[serde(rename = "type")]
    pub kind: DestinationType,
    pub image: &'static str,
    /// 0.0 to 5.0
    pub rating: f32,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continent_parses_display_names() {
        assert_eq!(
            "North America".parse::<Continent>(),
            Ok(Continent::NorthAmerica)
        );
        assert!("north america".parse::<Continent>().is_err());
        for continent in Continent::ALL {
            assert_eq!(continent.to_string().parse::<Continent>(), Ok(continent));
        }
    }

    #[test]
    fn destination_type_rejects_unknown() {
        let err = "Desert".parse::<DestinationType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown destination type: Desert");
    }
}
