use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{
    catalog,
    filters::DestinationFilter,
    models::{Continent, DestinationType},
    state::AppState,
    views::{DestinationCard, SelectOption, TripCard},
};

const FEATURED_TRIPS: usize = 3;
const POPULAR_DESTINATIONS: usize = 4;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/explore", get(explore))
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    featured: Vec<TripCard>,
    popular: Vec<DestinationCard>,
}

async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let trips = state.store.trips();
    AskamaTemplateResponse::into_response(HomeTemplate {
        featured: trips.iter().take(FEATURED_TRIPS).map(TripCard::from).collect(),
        popular: catalog::popular(POPULAR_DESTINATIONS)
            .iter()
            .map(DestinationCard::from)
            .collect(),
    })
}

#[derive(Template)]
#[template(path = "explore.html")]
struct ExploreTemplate {
    q: String,
    continents: Vec<SelectOption>,
    types: Vec<SelectOption>,
    filters_open: bool,
    unrecognized: bool,
    found_label: String,
    destinations: Vec<DestinationCard>,
}

async fn explore(Query(filter): Query<DestinationFilter>) -> impl IntoResponse {
    let destinations: Vec<DestinationCard> = filter
        .apply(catalog::destinations())
        .into_iter()
        .map(DestinationCard::from)
        .collect();
    let found_label = match destinations.len() {
        1 => "1 Destination Found".to_string(),
        n => format!("{n} Destinations Found"),
    };

    AskamaTemplateResponse::into_response(ExploreTemplate {
        continents: SelectOption::list(&Continent::ALL, filter.continent.value()),
        types: SelectOption::list(&DestinationType::ALL, filter.kind.value()),
        filters_open: filter.continent.is_set() || filter.kind.is_set(),
        unrecognized: filter.has_unrecognized(),
        q: filter.q,
        found_label,
        destinations,
    })
}
