use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_with::{serde_as, NoneAsEmptyString};

use crate::models::{Continent, Destination, DestinationType, Trip};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A typed query-string filter. Blank means no filter; a value that does not
/// parse matches nothing and is kept so the page can echo it back.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion<T> {
    Any,
    Is(T),
    Unrecognized(String),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::Any
    }
}

impl<T> Criterion<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Criterion::Is(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Criterion::Any)
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Criterion::Unrecognized(_))
    }

    pub fn matches(&self, test: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Is(value) => test(value),
            Criterion::Unrecognized(_) => false,
        }
    }
}

impl<T: fmt::Display> Criterion<T> {
    /// What to put back into the form field.
    pub fn input_value(&self) -> String {
        match self {
            Criterion::Any => String::new(),
            Criterion::Is(value) => value.to_string(),
            Criterion::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl<T: FromStr> Criterion<T> {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Criterion::Any;
        }
        raw.parse()
            .map(Criterion::Is)
            .unwrap_or_else(|_| Criterion::Unrecognized(raw.to_string()))
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Criterion<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Criterion::parse(&raw))
    }
}

/// Search state of the trips page.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TripFilter {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub date: Criterion<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub destination: Option<String>,
}

impl TripFilter {
    pub fn matches(&self, trip: &Trip) -> bool {
        let matches_search = contains_ignore_case(&trip.title, &self.q)
            || contains_ignore_case(&trip.destination, &self.q);
        let matches_date = self.date.matches(|date| trip.contains_date(*date));
        let matches_destination = self
            .destination
            .as_deref()
            .map_or(true, |d| contains_ignore_case(&trip.destination, d));

        matches_search && matches_date && matches_destination
    }

    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        trips.iter().filter(|t| self.matches(t)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DestinationFilter {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub continent: Criterion<Continent>,
    #[serde(default, rename = "type")]
    pub kind: Criterion<DestinationType>,
}

impl DestinationFilter {
    pub fn matches(&self, destination: &Destination) -> bool {
        let matches_search = contains_ignore_case(destination.name, &self.q)
            || contains_ignore_case(destination.country, &self.q);
        let matches_continent = self.continent.matches(|c| destination.continent == *c);
        let matches_type = self.kind.matches(|k| destination.kind == *k);

        matches_search && matches_continent && matches_type
    }

    pub fn apply<'a>(&self, destinations: &'a [Destination]) -> Vec<&'a Destination> {
        destinations.iter().filter(|d| self.matches(d)).collect()
    }

    pub fn has_unrecognized(&self) -> bool {
        self.continent.is_unrecognized() || self.kind.is_unrecognized()
    }
}
