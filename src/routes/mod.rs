pub mod home;
pub mod itinerary;
pub mod trips;

use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    Router::new()
        .merge(home::router())
        .merge(trips::router())
        .merge(itinerary::router())
        .nest_service("/static", static_files)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Interstitial shown before anything gets deleted.
#[derive(Template)]
#[template(path = "confirm.html")]
struct ConfirmTemplate {
    heading: String,
    message: String,
    action: String,
    cancel_url: String,
}

pub(crate) fn confirm_page(
    heading: impl Into<String>,
    message: impl Into<String>,
    action: String,
    cancel_url: String,
) -> Response {
    AskamaTemplateResponse::into_response(ConfirmTemplate {
        heading: heading.into(),
        message: message.into(),
        action,
        cancel_url,
    })
}

/// Re-rendered form with inline field errors.
pub(crate) fn invalid_form(page: impl IntoResponse) -> Response {
    (StatusCode::BAD_REQUEST, page).into_response()
}
