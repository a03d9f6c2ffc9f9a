//! Display-ready cards handed to the templates. Formatting happens here so
//! the templates stay free of logic.

use chrono::NaiveDate;

use crate::{
    catalog,
    models::{Accommodation, Activity, Destination, Trip},
};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${amount:.2}")
    }
}

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[derive(Clone)]
pub struct TripCard {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub dates: String,
    pub budget: String,
    pub cover_image: String,
}

impl From<&Trip> for TripCard {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.clone(),
            title: trip.title.clone(),
            destination: trip.destination.clone(),
            dates: format!(
                "{} - {}",
                format_date(trip.start_date),
                format_date(trip.end_date)
            ),
            budget: format_money(trip.budget),
            cover_image: trip.cover_image.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ActivityCard {
    pub id: String,
    pub title: String,
    pub when: String,
    pub location: String,
    pub notes: String,
    pub has_notes: bool,
    pub cost: String,
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            when: format!(
                "{} at {}",
                format_date(activity.date),
                activity.time.format("%H:%M")
            ),
            location: activity.location.clone(),
            notes: activity.notes.clone(),
            has_notes: activity.has_notes(),
            cost: if activity.cost == 0.0 {
                "Free".into()
            } else {
                format_money(activity.cost)
            },
        }
    }
}

#[derive(Clone)]
pub struct AccommodationCard {
    pub id: String,
    pub name: String,
    pub address: String,
    pub stay: String,
    pub nights: String,
    pub price: String,
    pub confirmation: String,
}

impl From<&Accommodation> for AccommodationCard {
    fn from(accommodation: &Accommodation) -> Self {
        Self {
            id: accommodation.id.clone(),
            name: accommodation.name.clone(),
            address: accommodation.address.clone(),
            stay: format!(
                "{} - {}",
                format_date(accommodation.check_in),
                format_date(accommodation.check_out)
            ),
            nights: plural(accommodation.nights(), "night", "nights"),
            price: format_money(accommodation.price),
            confirmation: accommodation.booking_confirmation_text().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct DestinationCard {
    pub id: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub kind: String,
    pub image: String,
    pub rating: String,
    pub description: String,
}

impl From<&Destination> for DestinationCard {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id.to_string(),
            name: destination.name.to_string(),
            country: destination.country.to_string(),
            continent: destination.continent.to_string(),
            kind: destination.kind.to_string(),
            image: catalog::image_url(destination),
            rating: format!("{:.1}", destination.rating),
            description: destination.description.to_string(),
        }
    }
}

/// Everything the trip details page shows.
pub struct TripDetail {
    pub card: TripCard,
    pub description: String,
    pub duration: String,
    pub planned_cost: String,
    pub remaining_budget: String,
    pub over_budget: bool,
    pub activities: Vec<ActivityCard>,
    pub accommodations: Vec<AccommodationCard>,
}

impl From<&Trip> for TripDetail {
    fn from(trip: &Trip) -> Self {
        let remaining = trip.remaining_budget();
        Self {
            card: TripCard::from(trip),
            description: trip.description.clone(),
            duration: plural(trip.duration_days(), "day", "days"),
            planned_cost: format_money(trip.planned_cost()),
            remaining_budget: format_money(remaining),
            over_budget: remaining < 0.0,
            activities: trip.activities.iter().map(ActivityCard::from).collect(),
            accommodations: trip
                .accommodations
                .iter()
                .map(AccommodationCard::from)
                .collect(),
        }
    }
}

/// One `<option>` of a filter dropdown.
#[derive(Clone)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn list<T: ToString + PartialEq>(all: &[T], current: Option<&T>) -> Vec<Self> {
        all.iter()
            .map(|item| SelectOption {
                value: item.to_string(),
                selected: current == Some(item),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Continent, seed::sample_trips};

    #[test]
    fn trip_card_formats_dates_and_money() {
        let trips = sample_trips();
        let card = TripCard::from(&trips[0]);
        assert_eq!(card.dates, "Jun 15, 2023 - Jun 25, 2023");
        assert_eq!(card.budget, "$3000.00");
    }

    #[test]
    fn detail_sums_planned_costs() {
        let trips = sample_trips();
        let detail = TripDetail::from(&trips[0]);
        assert_eq!(detail.duration, "10 days");
        assert_eq!(detail.planned_cost, "$1240.00");
        assert_eq!(detail.remaining_budget, "$1760.00");
        assert!(!detail.over_budget);
        assert_eq!(detail.activities[0].when, "Jun 16, 2023 at 10:00");
        assert_eq!(detail.accommodations[0].nights, "10 nights");
    }

    #[test]
    fn free_activities_say_so() {
        let trips = sample_trips();
        assert_eq!(ActivityCard::from(&trips[1].activities[0]).cost, "Free");
    }

    #[test]
    fn select_marks_current_value() {
        let options = SelectOption::list(&Continent::ALL, Some(&Continent::Asia));
        let selected: Vec<_> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["Asia"]);
        assert_eq!(format_money(-12.5), "-$12.50");
    }
}
