use std::{fmt, sync::Arc};

use tokio::sync::watch;
use tracing::debug;

use crate::{
    error::StoreError,
    models::{
        Accommodation, AccommodationPatch, Activity, ActivityPatch, NewAccommodation,
        NewActivity, NewTrip, Trip, TripPatch,
    },
};

/// Immutable view of the trip collection at one revision.
///
/// Every successful mutation publishes a new `Arc`, so holders of an older
/// snapshot keep seeing exactly what they read.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub revision: u64,
    pub trips: Arc<[Trip]>,
}

impl Snapshot {
    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }
}

/// Owned container for all trip data.
///
/// Mutations replace the whole collection and notify subscribers. Operations
/// against an unknown id are no-ops: nothing is published and `None` comes
/// back.
#[derive(Clone)]
pub struct TripStore {
    tx: Arc<watch::Sender<Snapshot>>,
}

impl TripStore {
    pub fn new(trips: Vec<Trip>) -> Self {
        let (tx, _rx) = watch::channel(Snapshot {
            revision: 0,
            trips: trips.into(),
        });
        Self { tx: Arc::new(tx) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    pub fn trips(&self) -> Arc<[Trip]> {
        self.tx.borrow().trips.clone()
    }

    pub fn trip(&self, id: &str) -> Option<Trip> {
        self.tx.borrow().trip(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn revision(&self) -> u64 {
        self.tx.borrow().revision
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn add_trip(&self, new_trip: NewTrip) -> Result<Trip, StoreError> {
        let trip = new_trip.into_trip();
        check_trip(&trip)?;
        self.tx.send_modify(|current| {
            let mut next = current.trips.to_vec();
            next.push(trip.clone());
            current.trips = next.into();
            current.revision += 1;
        });
        debug!(trip_id = %trip.id, title = %trip.title, "trip added");
        Ok(trip)
    }

    /// An empty patch publishes nothing and returns the trip as it is.
    pub fn update_trip(&self, id: &str, patch: TripPatch) -> Result<Option<Trip>, StoreError> {
        if patch.is_empty() {
            return Ok(self.trip(id));
        }
        let updated = self.commit(|trips| {
            let Some(index) = trips.iter().position(|t| t.id == id) else {
                return Ok(None);
            };
            let mut trip = trips[index].clone();
            patch.apply_to(&mut trip);
            check_trip(&trip)?;
            let mut next = trips.to_vec();
            next[index] = trip.clone();
            Ok(Some((next, trip)))
        })?;
        if updated.is_some() {
            debug!(trip_id = %id, "trip updated");
        }
        Ok(updated)
    }

    pub fn delete_trip(&self, id: &str) -> Option<Trip> {
        let removed = self.commit_infallible(|trips| {
            let index = trips.iter().position(|t| t.id == id)?;
            let mut next = trips.to_vec();
            let removed = next.remove(index);
            Some((next, removed))
        });
        if let Some(trip) = &removed {
            debug!(
                trip_id = %id,
                activities = trip.activities.len(),
                accommodations = trip.accommodations.len(),
                "trip deleted"
            );
        }
        removed
    }

    pub fn add_activity(&self, trip_id: &str, new_activity: NewActivity) -> Option<Activity> {
        let activity = new_activity.into_activity();
        let added = self.modify_trip(trip_id, |trip| {
            trip.activities.push(activity.clone());
            Some(activity)
        });
        if let Some(activity) = &added {
            debug!(trip_id, activity_id = %activity.id, "activity added");
        }
        added
    }

    pub fn update_activity(
        &self,
        trip_id: &str,
        activity_id: &str,
        patch: ActivityPatch,
    ) -> Option<Activity> {
        let updated = self.modify_trip(trip_id, |trip| {
            let activity = trip.activities.iter_mut().find(|a| a.id == activity_id)?;
            patch.apply_to(activity);
            Some(activity.clone())
        });
        if updated.is_some() {
            debug!(trip_id, activity_id, "activity updated");
        }
        updated
    }

    pub fn delete_activity(&self, trip_id: &str, activity_id: &str) -> Option<Activity> {
        let removed = self.modify_trip(trip_id, |trip| {
            let index = trip.activities.iter().position(|a| a.id == activity_id)?;
            Some(trip.activities.remove(index))
        });
        if removed.is_some() {
            debug!(trip_id, activity_id, "activity deleted");
        }
        removed
    }

    pub fn add_accommodation(
        &self,
        trip_id: &str,
        new_accommodation: NewAccommodation,
    ) -> Option<Accommodation> {
        let accommodation = new_accommodation.into_accommodation();
        let added = self.modify_trip(trip_id, |trip| {
            trip.accommodations.push(accommodation.clone());
            Some(accommodation)
        });
        if let Some(accommodation) = &added {
            debug!(trip_id, accommodation_id = %accommodation.id, "accommodation added");
        }
        added
    }

    pub fn update_accommodation(
        &self,
        trip_id: &str,
        accommodation_id: &str,
        patch: AccommodationPatch,
    ) -> Option<Accommodation> {
        let updated = self.modify_trip(trip_id, |trip| {
            let accommodation = trip
                .accommodations
                .iter_mut()
                .find(|a| a.id == accommodation_id)?;
            patch.apply_to(accommodation);
            Some(accommodation.clone())
        });
        if updated.is_some() {
            debug!(trip_id, accommodation_id, "accommodation updated");
        }
        updated
    }

    pub fn delete_accommodation(
        &self,
        trip_id: &str,
        accommodation_id: &str,
    ) -> Option<Accommodation> {
        let removed = self.modify_trip(trip_id, |trip| {
            let index = trip
                .accommodations
                .iter()
                .position(|a| a.id == accommodation_id)?;
            Some(trip.accommodations.remove(index))
        });
        if removed.is_some() {
            debug!(trip_id, accommodation_id, "accommodation deleted");
        }
        removed
    }

    /// Runs `edit` against a copy of one trip and publishes a new collection
    /// when it returns `Some`.
    fn modify_trip<T>(
        &self,
        trip_id: &str,
        edit: impl FnOnce(&mut Trip) -> Option<T>,
    ) -> Option<T> {
        self.commit_infallible(|trips| {
            let index = trips.iter().position(|t| t.id == trip_id)?;
            let mut trip = trips[index].clone();
            let value = edit(&mut trip)?;
            let mut next = trips.to_vec();
            next[index] = trip;
            Some((next, value))
        })
    }

    fn commit_infallible<T>(
        &self,
        op: impl FnOnce(&[Trip]) -> Option<(Vec<Trip>, T)>,
    ) -> Option<T> {
        self.commit(|trips| Ok(op(trips))).ok().flatten()
    }

    /// Atomic read-modify-replace under the channel lock. `Ok(None)` and
    /// `Err` leave the current snapshot untouched and wake no one.
    fn commit<T>(
        &self,
        op: impl FnOnce(&[Trip]) -> Result<Option<(Vec<Trip>, T)>, StoreError>,
    ) -> Result<Option<T>, StoreError> {
        let mut outcome = Ok(None);
        self.tx.send_if_modified(|current| match op(&current.trips[..]) {
            Ok(Some((next, value))) => {
                current.revision += 1;
                current.trips = next.into();
                outcome = Ok(Some(value));
                true
            }
            Ok(None) => false,
            Err(err) => {
                outcome = Err(err);
                false
            }
        });
        outcome
    }
}

impl fmt::Debug for TripStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.tx.borrow();
        f.debug_struct("TripStore")
            .field("revision", &snapshot.revision)
            .field("trips", &snapshot.trips.len())
            .finish()
    }
}

impl Default for TripStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn check_trip(trip: &Trip) -> Result<(), StoreError> {
    if !trip.has_valid_dates() {
        return Err(StoreError::InvalidDateRange {
            start: trip.start_date,
            end: trip.end_date,
        });
    }
    if trip.budget < 0.0 || trip.budget.is_nan() {
        return Err(StoreError::NegativeBudget(trip.budget));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::seed::sample_trips;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn new_trip(title: &str) -> NewTrip {
        NewTrip {
            title: title.into(),
            destination: "Rome, Italy".into(),
            start_date: date(2024, 5, 1),
            end_date: date(2024, 5, 7),
            budget: 1500.0,
            cover_image: "https://example.com/rome.jpg".into(),
            description: "Pasta and ruins".into(),
        }
    }

    fn new_activity() -> NewActivity {
        NewActivity {
            title: "Colosseum".into(),
            date: date(2024, 5, 2),
            time: NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"),
            location: "Piazza del Colosseo".into(),
            notes: String::new(),
            cost: 18.0,
        }
    }

    fn new_accommodation() -> NewAccommodation {
        NewAccommodation {
            name: "Hotel Roma".into(),
            address: "Via Nazionale 1".into(),
            check_in: date(2024, 5, 1),
            check_out: date(2024, 5, 7),
            price: 720.0,
            booking_confirmation: None,
        }
    }

    #[test]
    fn add_trip_appends_one_with_empty_children() {
        let store = TripStore::new(sample_trips());
        let before = store.len();
        let trip = store.add_trip(new_trip("Roman holiday")).expect("add");
        assert_eq!(store.len(), before + 1);
        assert!(trip.activities.is_empty());
        assert!(trip.accommodations.is_empty());
        assert_eq!(store.trips().last().map(|t| t.id.clone()), Some(trip.id));
    }

    #[test]
    fn ids_stay_unique_under_rapid_creation() {
        let store = TripStore::empty();
        let ids: HashSet<String> = (0..200)
            .map(|i| store.add_trip(new_trip(&format!("trip {i}"))).expect("add").id)
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn delete_trip_removes_it() {
        let store = TripStore::new(sample_trips());
        let removed = store.delete_trip("1").expect("seed trip exists");
        assert_eq!(removed.title, "Summer in Paris");
        assert!(store.trip("1").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_changes_only_the_given_field() {
        let store = TripStore::new(sample_trips());
        let before = store.trips();
        let updated = store
            .update_trip(
                "1",
                TripPatch {
                    title: Some("Autumn in Paris".into()),
                    ..TripPatch::default()
                },
            )
            .expect("valid update")
            .expect("trip exists");

        let mut expected = before[0].clone();
        expected.title = "Autumn in Paris".into();
        assert_eq!(updated, expected);
        assert_eq!(store.trip("2").as_ref(), Some(&before[1]));
    }

    #[test]
    fn mutations_publish_a_fresh_collection() {
        let store = TripStore::new(sample_trips());
        let old = store.snapshot();
        store.delete_trip("2");
        let new = store.snapshot();
        assert!(!Arc::ptr_eq(&old.trips, &new.trips));
        assert_eq!(old.trips.len(), 2);
        assert_eq!(new.revision, old.revision + 1);
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let store = TripStore::new(sample_trips());
        let revision = store.revision();

        assert!(store.delete_trip("missing").is_none());
        assert!(store
            .update_trip("missing", TripPatch::default())
            .expect("no error")
            .is_none());
        assert!(store.add_activity("missing", new_activity()).is_none());
        assert!(store
            .update_activity("1", "missing", ActivityPatch::default())
            .is_none());
        assert!(store.delete_activity("1", "missing").is_none());
        assert!(store
            .add_accommodation("missing", new_accommodation())
            .is_none());
        assert!(store.delete_accommodation("2", "missing").is_none());

        assert_eq!(store.revision(), revision);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn activity_round_trip_restores_the_list() {
        let store = TripStore::new(sample_trips());
        let before = store.trip("1").expect("seed").activities;

        let added = store.add_activity("1", new_activity()).expect("trip exists");
        store
            .update_activity(
                "1",
                &added.id,
                ActivityPatch {
                    cost: Some(0.0),
                    ..ActivityPatch::default()
                },
            )
            .expect("activity exists");
        store.delete_activity("1", &added.id).expect("activity exists");

        assert_eq!(store.trip("1").expect("seed").activities, before);
    }

    #[test]
    fn accommodation_crud_is_scoped_to_one_trip() {
        let store = TripStore::new(sample_trips());
        let added = store
            .add_accommodation("2", new_accommodation())
            .expect("trip exists");

        let updated = store
            .update_accommodation(
                "2",
                &added.id,
                AccommodationPatch {
                    booking_confirmation: Some(Some("ROMA42".into())),
                    ..AccommodationPatch::default()
                },
            )
            .expect("accommodation exists");
        assert_eq!(updated.booking_confirmation.as_deref(), Some("ROMA42"));
        assert_eq!(updated.name, "Hotel Roma");

        assert!(store
            .update_accommodation("1", &added.id, AccommodationPatch::default())
            .is_none());
        assert_eq!(store.trip("2").expect("seed").accommodations.len(), 2);
        assert_eq!(store.trip("1").expect("seed").accommodations.len(), 1);

        store.delete_accommodation("2", &added.id).expect("exists");
        assert_eq!(store.trip("2").expect("seed").accommodations.len(), 1);
    }

    #[test]
    fn store_rejects_inverted_date_range() {
        let store = TripStore::new(sample_trips());
        let revision = store.revision();
        let err = store
            .update_trip(
                "1",
                TripPatch {
                    end_date: Some(date(2023, 6, 10)),
                    ..TripPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidDateRange { .. }));
        assert_eq!(store.trip("1").expect("seed").end_date, date(2023, 6, 25));
        assert_eq!(store.revision(), revision);

        let mut inverted = new_trip("backwards");
        inverted.end_date = date(2024, 4, 1);
        assert!(store.add_trip(inverted).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_rejects_negative_budget() {
        let store = TripStore::empty();
        let mut trip = new_trip("broke");
        trip.budget = -1.0;
        assert!(matches!(
            store.add_trip(trip),
            Err(StoreError::NegativeBudget(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_trip_patch_publishes_nothing() {
        let store = TripStore::new(sample_trips());
        let revision = store.revision();
        let trip = store
            .update_trip("1", TripPatch::default())
            .expect("valid")
            .expect("seed trip");
        assert_eq!(trip.title, "Summer in Paris");
        assert_eq!(store.revision(), revision);
        assert_eq!(store.update_trip("missing", TripPatch::default()), Ok(None));
    }

    #[test]
    fn child_dates_are_not_policed() {
        let store = TripStore::new(sample_trips());
        let updated = store
            .update_accommodation(
                "1",
                "acc1",
                AccommodationPatch {
                    check_out: Some(date(2023, 6, 13)),
                    ..AccommodationPatch::default()
                },
            )
            .expect("seed accommodation");
        assert_eq!(updated.nights(), -2);
        assert_eq!(store.trip("1").expect("seed").accommodations[0].nights(), -2);
    }

    #[tokio::test]
    async fn subscribers_see_each_new_revision() {
        let store = TripStore::new(sample_trips());
        let mut rx = store.subscribe();

        store.add_trip(new_trip("watched")).expect("add");
        rx.changed().await.expect("store alive");
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.revision, 1);
        assert_eq!(seen.trips.len(), 3);

        store.delete_trip("missing");
        assert!(!rx.has_changed().expect("store alive"));
    }
}
