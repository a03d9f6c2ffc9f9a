use tokio::net::TcpListener;
use tracing::{debug, info};
use voyage::config::AppConfig;
use voyage::error::AppError;
use voyage::routes::create_router;
use voyage::state::AppState;
use voyage::store::TripStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(config.clone());
    spawn_change_logger(&state.store);

    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,voyage=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Logs every published revision of the trip collection.
fn spawn_change_logger(store: &TripStore) {
    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let snapshot = changes.borrow_and_update().clone();
            debug!(
                revision = snapshot.revision,
                trips = snapshot.trips.len(),
                "trip collection changed"
            );
        }
    });
}
