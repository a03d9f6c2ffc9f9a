use tracing::info;

use crate::{config::AppConfig, seed::sample_trips, store::TripStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: TripStore,
}

impl AppState {
    pub fn new(config: AppConfig, store: TripStore) -> Self {
        Self { config, store }
    }

    /// Builds the store the config asks for: the sample trips or nothing.
    pub fn from_config(config: AppConfig) -> Self {
        let store = if config.seed_sample_data {
            TripStore::new(sample_trips())
        } else {
            TripStore::empty()
        };
        info!(trips = store.len(), "trip store ready");
        Self::new(config, store)
    }
}
