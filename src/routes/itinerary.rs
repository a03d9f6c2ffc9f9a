use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    models::{AccommodationPatch, ActivityPatch, Trip},
    state::AppState,
    validation::{AccommodationForm, ActivityForm, FieldErrors},
};

use super::{confirm_page, invalid_form};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/trips/:trip_id/activities/new",
            get(activity_new_form).post(activity_new_submit),
        )
        .route(
            "/trips/:trip_id/activities/:item_id/edit",
            get(activity_edit_form).post(activity_edit_submit),
        )
        .route(
            "/trips/:trip_id/activities/:item_id/delete",
            get(activity_delete_confirm).post(activity_delete),
        )
        .route(
            "/trips/:trip_id/accommodations/new",
            get(accommodation_new_form).post(accommodation_new_submit),
        )
        .route(
            "/trips/:trip_id/accommodations/:item_id/edit",
            get(accommodation_edit_form).post(accommodation_edit_submit),
        )
        .route(
            "/trips/:trip_id/accommodations/:item_id/delete",
            get(accommodation_delete_confirm).post(accommodation_delete),
        )
}

fn find_trip(state: &AppState, trip_id: &str) -> Result<Trip, AppError> {
    state.store.trip(trip_id).ok_or(AppError::NotFound)
}

fn back_to_trip(trip_id: &str) -> Redirect {
    Redirect::to(&format!("/trips/{trip_id}"))
}

/// Where to land after a mutation: the trip page, or the list when the trip
/// is gone.
fn after_mutation(applied: bool, trip_id: &str, what: &str) -> Redirect {
    if applied {
        back_to_trip(trip_id)
    } else {
        warn!(%trip_id, what, "mutation for unknown trip or item ignored");
        Redirect::to("/trips")
    }
}

#[derive(Template)]
#[template(path = "itinerary/activity_form.html")]
struct ActivityFormTemplate {
    trip_id: String,
    trip_title: String,
    heading: String,
    action: String,
    submit_label: String,
    form: ActivityForm,
    errors: FieldErrors,
}

impl ActivityFormTemplate {
    fn respond(self) -> Response {
        if self.errors.is_empty() {
            AskamaTemplateResponse::into_response(self)
        } else {
            invalid_form(AskamaTemplateResponse::into_response(self))
        }
    }
}

fn activity_form_page(
    trip: &Trip,
    activity_id: Option<&str>,
    form: ActivityForm,
    errors: FieldErrors,
) -> Response {
    let (heading, action, submit_label) = match activity_id {
        None => (
            "Add New Activity".to_string(),
            format!("/trips/{}/activities/new", trip.id),
            "Add Activity".to_string(),
        ),
        Some(id) => (
            "Edit Activity".to_string(),
            format!("/trips/{}/activities/{id}/edit", trip.id),
            "Update Activity".to_string(),
        ),
    };
    ActivityFormTemplate {
        trip_id: trip.id.clone(),
        trip_title: trip.title.clone(),
        heading,
        action,
        submit_label,
        form,
        errors,
    }
    .respond()
}

async fn activity_new_form(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Response, AppError> {
    let trip = find_trip(&state, &trip_id)?;
    Ok(activity_form_page(
        &trip,
        None,
        ActivityForm::for_trip(&trip),
        FieldErrors::new(),
    ))
}

async fn activity_new_submit(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Form(form): Form<ActivityForm>,
) -> Result<Response, AppError> {
    let new_activity = match form.validate() {
        Ok(value) => value,
        Err(errors) => {
            let trip = find_trip(&state, &trip_id)?;
            return Ok(activity_form_page(&trip, None, form, errors));
        }
    };
    let added = state.store.add_activity(&trip_id, new_activity);
    if let Some(activity) = &added {
        info!(%trip_id, activity_id = %activity.id, "activity added");
    }
    Ok(after_mutation(added.is_some(), &trip_id, "add activity").into_response())
}

async fn activity_edit_form(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let trip = find_trip(&state, &trip_id)?;
    let activity = trip.activity(&item_id).ok_or(AppError::NotFound)?;
    let form = ActivityForm::from_activity(activity);
    Ok(activity_form_page(&trip, Some(&item_id), form, FieldErrors::new()))
}

async fn activity_edit_submit(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
    Form(form): Form<ActivityForm>,
) -> Result<Response, AppError> {
    let new_activity = match form.validate() {
        Ok(value) => value,
        Err(errors) => {
            let trip = find_trip(&state, &trip_id)?;
            return Ok(activity_form_page(&trip, Some(&item_id), form, errors));
        }
    };
    let updated = state
        .store
        .update_activity(&trip_id, &item_id, ActivityPatch::from(new_activity));
    Ok(after_mutation(updated.is_some(), &trip_id, "update activity").into_response())
}

async fn activity_delete_confirm(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let trip = find_trip(&state, &trip_id)?;
    let activity = trip.activity(&item_id).ok_or(AppError::NotFound)?;
    Ok(confirm_page(
        format!("Delete \"{}\"?", activity.title),
        "Are you sure you want to delete this activity?",
        format!("/trips/{trip_id}/activities/{item_id}/delete"),
        format!("/trips/{trip_id}"),
    ))
}

async fn activity_delete(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
) -> Redirect {
    let removed = state.store.delete_activity(&trip_id, &item_id);
    after_mutation(removed.is_some(), &trip_id, "delete activity")
}

#[derive(Template)]
#[template(path = "itinerary/accommodation_form.html")]
struct AccommodationFormTemplate {
    trip_id: String,
    trip_title: String,
    heading: String,
    action: String,
    submit_label: String,
    form: AccommodationForm,
    errors: FieldErrors,
}

impl AccommodationFormTemplate {
    fn respond(self) -> Response {
        if self.errors.is_empty() {
            AskamaTemplateResponse::into_response(self)
        } else {
            invalid_form(AskamaTemplateResponse::into_response(self))
        }
    }
}

fn accommodation_form_page(
    trip: &Trip,
    accommodation_id: Option<&str>,
    form: AccommodationForm,
    errors: FieldErrors,
) -> Response {
    let (heading, action, submit_label) = match accommodation_id {
        None => (
            "Add New Accommodation".to_string(),
            format!("/trips/{}/accommodations/new", trip.id),
            "Add Accommodation".to_string(),
        ),
        Some(id) => (
            "Edit Accommodation".to_string(),
            format!("/trips/{}/accommodations/{id}/edit", trip.id),
            "Update Accommodation".to_string(),
        ),
    };
    AccommodationFormTemplate {
        trip_id: trip.id.clone(),
        trip_title: trip.title.clone(),
        heading,
        action,
        submit_label,
        form,
        errors,
    }
    .respond()
}

async fn accommodation_new_form(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Response, AppError> {
    let trip = find_trip(&state, &trip_id)?;
    Ok(accommodation_form_page(
        &trip,
        None,
        AccommodationForm::for_trip(&trip),
        FieldErrors::new(),
    ))
}

async fn accommodation_new_submit(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Form(form): Form<AccommodationForm>,
) -> Result<Response, AppError> {
    let new_accommodation = match form.validate() {
        Ok(value) => value,
        Err(errors) => {
            let trip = find_trip(&state, &trip_id)?;
            return Ok(accommodation_form_page(&trip, None, form, errors));
        }
    };
    let added = state.store.add_accommodation(&trip_id, new_accommodation);
    if let Some(accommodation) = &added {
        info!(%trip_id, accommodation_id = %accommodation.id, "accommodation added");
    }
    Ok(after_mutation(added.is_some(), &trip_id, "add accommodation").into_response())
}

async fn accommodation_edit_form(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let trip = find_trip(&state, &trip_id)?;
    let accommodation = trip.accommodation(&item_id).ok_or(AppError::NotFound)?;
    let form = AccommodationForm::from_accommodation(accommodation);
    Ok(accommodation_form_page(
        &trip,
        Some(&item_id),
        form,
        FieldErrors::new(),
    ))
}

async fn accommodation_edit_submit(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
    Form(form): Form<AccommodationForm>,
) -> Result<Response, AppError> {
    let new_accommodation = match form.validate() {
        Ok(value) => value,
        Err(errors) => {
            let trip = find_trip(&state, &trip_id)?;
            return Ok(accommodation_form_page(&trip, Some(&item_id), form, errors));
        }
    };
    let updated = state.store.update_accommodation(
        &trip_id,
        &item_id,
        AccommodationPatch::from(new_accommodation),
    );
    Ok(after_mutation(updated.is_some(), &trip_id, "update accommodation").into_response())
}

async fn accommodation_delete_confirm(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let trip = find_trip(&state, &trip_id)?;
    let accommodation = trip.accommodation(&item_id).ok_or(AppError::NotFound)?;
    Ok(confirm_page(
        format!("Delete \"{}\"?", accommodation.name),
        "Are you sure you want to delete this accommodation?",
        format!("/trips/{trip_id}/accommodations/{item_id}/delete"),
        format!("/trips/{trip_id}"),
    ))
}

async fn accommodation_delete(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(String, String)>,
) -> Redirect {
    let removed = state.store.delete_accommodation(&trip_id, &item_id);
    after_mutation(removed.is_some(), &trip_id, "delete accommodation")
}
