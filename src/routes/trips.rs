use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    filters::TripFilter,
    models::TripPatch,
    seed::SAMPLE_COVER_IMAGES,
    state::AppState,
    validation::{FieldErrors, TripForm},
    views::{TripCard, TripDetail},
};

use super::{confirm_page, invalid_form};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", get(trips_list))
        .route("/trips/new", get(trip_new_form).post(trip_new_submit))
        .route("/trips/:trip_id", get(trip_detail))
        .route(
            "/trips/:trip_id/edit",
            get(trip_edit_form).post(trip_edit_submit),
        )
        .route(
            "/trips/:trip_id/delete",
            get(trip_delete_confirm).post(trip_delete),
        )
}

#[derive(Template)]
#[template(path = "trips/list.html")]
struct TripsListTemplate {
    q: String,
    date: String,
    destination: String,
    filters_open: bool,
    date_unrecognized: bool,
    has_any_trips: bool,
    trips: Vec<TripCard>,
}

async fn trips_list(
    State(state): State<AppState>,
    Query(filter): Query<TripFilter>,
) -> impl IntoResponse {
    let all = state.store.trips();
    let trips = filter.apply(&all).into_iter().map(TripCard::from).collect();

    AskamaTemplateResponse::into_response(TripsListTemplate {
        filters_open: filter.date.is_set() || filter.destination.is_some(),
        date_unrecognized: filter.date.is_unrecognized(),
        date: filter.date.input_value(),
        destination: filter.destination.unwrap_or_default(),
        q: filter.q,
        has_any_trips: !all.is_empty(),
        trips,
    })
}

#[derive(Clone)]
struct CoverChoice {
    url: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "trips/form.html")]
struct TripFormTemplate {
    heading: String,
    action: String,
    cancel_url: String,
    submit_label: String,
    form: TripForm,
    errors: FieldErrors,
    covers: Vec<CoverChoice>,
}

enum TripFormMode<'a> {
    Create,
    Edit(&'a str),
}

fn render_trip_form(mode: TripFormMode<'_>, form: TripForm, errors: FieldErrors) -> Response {
    let (heading, action, cancel_url, submit_label) = match mode {
        TripFormMode::Create => (
            "Create New Trip".to_string(),
            "/trips/new".to_string(),
            "/trips".to_string(),
            "Create Trip".to_string(),
        ),
        TripFormMode::Edit(id) => (
            "Edit Trip".to_string(),
            format!("/trips/{id}/edit"),
            format!("/trips/{id}"),
            "Save Changes".to_string(),
        ),
    };
    let covers = SAMPLE_COVER_IMAGES
        .iter()
        .map(|url| CoverChoice {
            url: url.to_string(),
            selected: form.cover_image == *url,
        })
        .collect();
    let has_errors = !errors.is_empty();
    let page = AskamaTemplateResponse::into_response(TripFormTemplate {
        heading,
        action,
        cancel_url,
        submit_label,
        form,
        errors,
        covers,
    });
    if has_errors {
        invalid_form(page)
    } else {
        page
    }
}

async fn trip_new_form() -> Response {
    render_trip_form(TripFormMode::Create, TripForm::default(), FieldErrors::new())
}

async fn trip_new_submit(
    State(state): State<AppState>,
    Form(form): Form<TripForm>,
) -> Result<Response, AppError> {
    match form.validate() {
        Ok(new_trip) => {
            let trip = state.store.add_trip(new_trip)?;
            info!(trip_id = %trip.id, "trip created");
            Ok(Redirect::to("/trips").into_response())
        }
        Err(errors) => Ok(render_trip_form(TripFormMode::Create, form, errors)),
    }
}

#[derive(Template)]
#[template(path = "trips/detail.html")]
struct TripDetailTemplate {
    id: String,
    trip: TripDetail,
    raw_json: String,
}

async fn trip_detail(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trip = state.store.trip(&trip_id).ok_or(AppError::NotFound)?;
    let raw_json =
        serde_json::to_string_pretty(&trip).map_err(|err| AppError::Other(err.into()))?;
    Ok(AskamaTemplateResponse::into_response(TripDetailTemplate {
        id: trip.id.clone(),
        trip: TripDetail::from(&trip),
        raw_json,
    }))
}

async fn trip_edit_form(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Response, AppError> {
    let trip = state.store.trip(&trip_id).ok_or(AppError::NotFound)?;
    Ok(render_trip_form(
        TripFormMode::Edit(&trip.id),
        TripForm::from_trip(&trip),
        FieldErrors::new(),
    ))
}

async fn trip_edit_submit(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Form(form): Form<TripForm>,
) -> Result<Response, AppError> {
    let new_trip = match form.validate() {
        Ok(new_trip) => new_trip,
        Err(errors) => {
            let trip = state.store.trip(&trip_id).ok_or(AppError::NotFound)?;
            return Ok(render_trip_form(TripFormMode::Edit(&trip.id), form, errors));
        }
    };

    match state.store.update_trip(&trip_id, TripPatch::from(new_trip))? {
        Some(_) => Ok(Redirect::to(&format!("/trips/{trip_id}")).into_response()),
        None => {
            warn!(%trip_id, "edit for unknown trip ignored");
            Ok(Redirect::to("/trips").into_response())
        }
    }
}

async fn trip_delete_confirm(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Response, AppError> {
    let trip = state.store.trip(&trip_id).ok_or(AppError::NotFound)?;
    Ok(confirm_page(
        format!("Delete \"{}\"?", trip.title),
        "Are you sure you want to delete this trip? This action cannot be undone.",
        format!("/trips/{trip_id}/delete"),
        format!("/trips/{trip_id}"),
    ))
}

async fn trip_delete(State(state): State<AppState>, Path(trip_id): Path<String>) -> Redirect {
    match state.store.delete_trip(&trip_id) {
        Some(trip) => info!(%trip_id, title = %trip.title, "trip deleted"),
        None => warn!(%trip_id, "delete for unknown trip ignored"),
    }
    Redirect::to("/trips")
}
