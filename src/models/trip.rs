use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{accommodation::Accommodation, activity::Activity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub cover_image: String,
    pub description: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
}

impl Trip {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Inclusive on both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn has_valid_dates(&self) -> bool {
        self.start_date <= self.end_date
    }

    pub fn activities_cost(&self) -> f64 {
        self.activities.iter().map(|a| a.cost).sum()
    }

    pub fn accommodations_cost(&self) -> f64 {
        self.accommodations.iter().map(|a| a.price).sum()
    }

    pub fn planned_cost(&self) -> f64 {
        self.activities_cost() + self.accommodations_cost()
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.planned_cost()
    }

    pub fn activity(&self, activity_id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == activity_id)
    }

    pub fn accommodation(&self, accommodation_id: &str) -> Option<&Accommodation> {
        self.accommodations
            .iter()
            .find(|a| a.id == accommodation_id)
    }
}

/// Everything needed to create a trip; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrip {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub cover_image: String,
    pub description: String,
}

impl NewTrip {
    pub fn into_trip(self) -> Trip {
        Trip {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            cover_image: self.cover_image,
            description: self.description,
            activities: Vec::new(),
            accommodations: Vec::new(),
        }
    }
}

/// Shallow merge: only the fields that are `Some` overwrite the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPatch {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
}

impl TripPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, trip: &mut Trip) {
        if let Some(title) = self.title {
            trip.title = title;
        }
        if let Some(destination) = self.destination {
            trip.destination = destination;
        }
        if let Some(start_date) = self.start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            trip.end_date = end_date;
        }
        if let Some(budget) = self.budget {
            trip.budget = budget;
        }
        if let Some(cover_image) = self.cover_image {
            trip.cover_image = cover_image;
        }
        if let Some(description) = self.description {
            trip.description = description;
        }
    }
}

impl From<NewTrip> for TripPatch {
    fn from(value: NewTrip) -> Self {
        Self {
            title: Some(value.title),
            destination: Some(value.destination),
            start_date: Some(value.start_date),
            end_date: Some(value.end_date),
            budget: Some(value.budget),
            cover_image: Some(value.cover_image),
            description: Some(value.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample() -> Trip {
        NewTrip {
            title: "Lisbon long weekend".into(),
            destination: "Lisbon, Portugal".into(),
            start_date: date(2024, 4, 4),
            end_date: date(2024, 4, 8),
            budget: 900.0,
            cover_image: "https://example.com/lisbon.jpg".into(),
            description: String::new(),
        }
        .into_trip()
    }

    #[test]
    fn new_trip_starts_without_children() {
        let trip = sample();
        assert!(trip.activities.is_empty());
        assert!(trip.accommodations.is_empty());
        assert!(Uuid::parse_str(&trip.id).is_ok());
    }

    #[test]
    fn date_helpers() {
        let trip = sample();
        assert_eq!(trip.duration_days(), 4);
        assert!(trip.contains_date(date(2024, 4, 4)));
        assert!(trip.contains_date(date(2024, 4, 8)));
        assert!(!trip.contains_date(date(2024, 4, 9)));
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut trip = sample();
        let before = trip.clone();
        TripPatch {
            budget: Some(1200.0),
            ..TripPatch::default()
        }
        .apply_to(&mut trip);
        assert_eq!(trip.budget, 1200.0);
        assert_eq!(trip.title, before.title);
        assert_eq!(trip.start_date, before.start_date);
        assert!(TripPatch::default().is_empty());
    }
}
