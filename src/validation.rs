//! Form parsing for the trip, activity and accommodation editors.
//!
//! Each form keeps the raw strings the browser sent so that a rejected
//! submission can be rendered again as typed. `validate` either yields the
//! domain input or a [`FieldErrors`] map keyed by form field name.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Accommodation, Activity, NewAccommodation, NewActivity, NewTrip, Trip};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Empty string when the field is fine, for templates.
    pub fn message(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn normalize_optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<String> {
    let value = normalize_optional(value);
    if value.is_none() {
        errors.insert(field, message);
    }
    value
}

fn required_date(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{label} is required"));
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, format!("{label} is not a valid date"));
            None
        }
    }
}

/// Blank counts as zero; anything else must be a non-negative number.
fn optional_amount(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
        Ok(_) => {
            errors.insert(field, format!("{label} cannot be negative"));
            None
        }
        Err(_) => {
            errors.insert(field, format!("{label} must be a number"));
            None
        }
    }
}

fn date_value(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub description: String,
}

impl TripForm {
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            title: trip.title.clone(),
            destination: trip.destination.clone(),
            start_date: date_value(trip.start_date),
            end_date: date_value(trip.end_date),
            budget: trip.budget.to_string(),
            cover_image: trip.cover_image.clone(),
            description: trip.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewTrip, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, "title", &self.title, "Title is required");
        let destination = required_text(
            &mut errors,
            "destination",
            &self.destination,
            "Destination is required",
        );
        let start_date = required_date(&mut errors, "start_date", "Start date", &self.start_date);
        let mut end_date = required_date(&mut errors, "end_date", "End date", &self.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.insert("end_date", "End date must be after start date");
                end_date = None;
            }
        }

        let budget = match self.budget.trim() {
            "" => {
                errors.insert("budget", "Budget is required");
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
                Ok(_) => {
                    errors.insert("budget", "Budget must be greater than 0");
                    None
                }
                Err(_) => {
                    errors.insert("budget", "Budget must be a number");
                    None
                }
            },
        };

        let cover_image = required_text(
            &mut errors,
            "cover_image",
            &self.cover_image,
            "Cover image URL is required",
        );

        match (title, destination, start_date, end_date, budget, cover_image) {
            (
                Some(title),
                Some(destination),
                Some(start_date),
                Some(end_date),
                Some(budget),
                Some(cover_image),
            ) if errors.is_empty() => {
                Ok(NewTrip {
                    title,
                    destination,
                    start_date,
                    end_date,
                    budget,
                    cover_image,
                    description: self.description.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub cost: String,
}

impl ActivityForm {
    /// Blank activity on the trip's first day at 10:00.
    pub fn for_trip(trip: &Trip) -> Self {
        Self {
            date: date_value(trip.start_date),
            time: "10:00".into(),
            cost: "0".into(),
            ..Self::default()
        }
    }

    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            date: date_value(activity.date),
            time: activity.time.format(TIME_FORMAT).to_string(),
            location: activity.location.clone(),
            notes: activity.notes.clone(),
            cost: activity.cost.to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewActivity, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, "title", &self.title, "Title is required");
        let date = required_date(&mut errors, "date", "Date", &self.date);
        let time = match self.time.trim() {
            "" => {
                errors.insert("time", "Time is required");
                None
            }
            raw => match NaiveTime::parse_from_str(raw, TIME_FORMAT) {
                Ok(time) => Some(time),
                Err(_) => {
                    errors.insert("time", "Time must look like 14:30");
                    None
                }
            },
        };
        let cost = optional_amount(&mut errors, "cost", "Cost", &self.cost);

        errors.into_result(|| NewActivity {
            title: title.unwrap_or_default(),
            date: date.unwrap_or_default(),
            time: time.unwrap_or_default(),
            location: self.location.trim().to_string(),
            notes: self.notes.trim().to_string(),
            cost: cost.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub booking_confirmation: String,
}

impl AccommodationForm {
    /// Blank booking spanning the whole trip.
    pub fn for_trip(trip: &Trip) -> Self {
        Self {
            check_in: date_value(trip.start_date),
            check_out: date_value(trip.end_date),
            price: "0".into(),
            ..Self::default()
        }
    }

    pub fn from_accommodation(accommodation: &Accommodation) -> Self {
        Self {
            name: accommodation.name.clone(),
            address: accommodation.address.clone(),
            check_in: date_value(accommodation.check_in),
            check_out: date_value(accommodation.check_out),
            price: accommodation.price.to_string(),
            booking_confirmation: accommodation
                .booking_confirmation
                .clone()
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<NewAccommodation, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "name", &self.name, "Name is required");
        let check_in = required_date(&mut errors, "check_in", "Check-in date", &self.check_in);
        let check_out = required_date(&mut errors, "check_out", "Check-out date", &self.check_out);
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out < check_in {
                errors.insert("check_out", "Check-out must be after check-in");
            }
        }
        let price = optional_amount(&mut errors, "price", "Price", &self.price);

        errors.into_result(|| NewAccommodation {
            name: name.unwrap_or_default(),
            address: self.address.trim().to_string(),
            check_in: check_in.unwrap_or_default(),
            check_out: check_out.unwrap_or_default(),
            price: price.unwrap_or_default(),
            booking_confirmation: normalize_optional(&self.booking_confirmation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_trips;

    fn valid_trip_form() -> TripForm {
        TripForm {
            title: "Summer in Paris".into(),
            destination: "Paris, France".into(),
            start_date: "2023-06-15".into(),
            end_date: "2023-06-25".into(),
            budget: "3000".into(),
            cover_image: "https://example.com/paris.jpg".into(),
            description: "  Museums  ".into(),
        }
    }

    #[test]
    fn valid_trip_form_produces_new_trip() {
        let trip = valid_trip_form().validate().expect("valid");
        assert_eq!(trip.budget, 3000.0);
        assert_eq!(trip.description, "Museums");
        assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2023, 6, 15).expect("date"));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let form = TripForm {
            start_date: "2023-06-15".into(),
            end_date: "2023-06-10".into(),
            ..valid_trip_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("end_date"), Some("End date must be after start date"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn same_day_trip_is_fine() {
        let form = TripForm {
            end_date: "2023-06-15".into(),
            ..valid_trip_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn budget_must_be_positive() {
        let zero = TripForm {
            budget: "0".into(),
            ..valid_trip_form()
        };
        assert_eq!(
            zero.validate().unwrap_err().get("budget"),
            Some("Budget must be greater than 0")
        );

        let text = TripForm {
            budget: "lots".into(),
            ..valid_trip_form()
        };
        assert_eq!(
            text.validate().unwrap_err().get("budget"),
            Some("Budget must be a number")
        );

        let hundred = TripForm {
            budget: "100".into(),
            ..valid_trip_form()
        };
        assert_eq!(hundred.validate().expect("valid").budget, 100.0);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = TripForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec!["budget", "cover_image", "destination", "end_date", "start_date", "title"]
        );
        assert_eq!(errors.message("title"), "Title is required");
        assert_eq!(errors.message("description"), "");
    }

    #[test]
    fn trip_form_round_trips_an_existing_trip() {
        let trip = &sample_trips()[0];
        let parsed = TripForm::from_trip(trip).validate().expect("seed is valid");
        assert_eq!(parsed.title, trip.title);
        assert_eq!(parsed.end_date, trip.end_date);
        assert_eq!(parsed.budget, trip.budget);
    }

    #[test]
    fn activity_form_defaults_and_checks() {
        let trip = &sample_trips()[1];
        let mut form = ActivityForm::for_trip(trip);
        assert_eq!(form.date, "2023-09-10");
        assert_eq!(form.time, "10:00");

        let errors = form.validate().unwrap_err();
        assert!(errors.has("title"));

        form.title = "Ramen crawl".into();
        form.cost = "".into();
        let activity = form.validate().expect("valid");
        assert_eq!(activity.cost, 0.0);
        assert_eq!(activity.time, NaiveTime::from_hms_opt(10, 0, 0).expect("time"));

        form.time = "25:99".into();
        form.cost = "-5".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.has("time"));
        assert_eq!(errors.message("cost"), "Cost cannot be negative");
    }

    #[test]
    fn accommodation_form_checks_stay_dates() {
        let trip = &sample_trips()[0];
        let mut form = AccommodationForm::for_trip(trip);
        form.name = "Le Petit Hotel".into();
        form.booking_confirmation = "   ".into();
        let booking = form.validate().expect("valid");
        assert_eq!(booking.booking_confirmation, None);
        assert_eq!(booking.check_out, trip.end_date);

        form.check_out = "2023-06-01".into();
        assert_eq!(
            form.validate().unwrap_err().message("check_out"),
            "Check-out must be after check-in"
        );
    }

    #[test]
    fn accommodation_form_prefills_from_record() {
        let trip = &sample_trips()[0];
        let form = AccommodationForm::from_accommodation(&trip.accommodations[0]);
        assert_eq!(form.booking_confirmation, "PARIS123456");
        assert_eq!(form.validate().expect("valid").price, 1200.0);
    }
}
