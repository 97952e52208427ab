mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    error::AppError,
    service::{events::TracingSink, fees::FlatRateTax},
    state::AppState,
    util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let clock: Arc<dyn util::clock::TimeSource> = Arc::new(SystemClock);
    let tax: Arc<dyn service::fees::TaxPolicy> =
        Arc::new(FlatRateTax::new(config.fees.tax_rate_percent));
    let events: Arc<dyn service::events::EventSink> = Arc::new(TracingSink);

    scheduler::auction_sweep::start_scheduler(
        db.clone(),
        config.fees.clone(),
        clock.clone(),
        tax.clone(),
        events.clone(),
    )
    .await?;

    let app = router::router()?.with_state(AppState::new(
        db,
        config.rules.clone(),
        config.fees.clone(),
        clock,
        tax,
        events,
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    // Ctrl-C or SIGTERM from the process supervisor
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down");
}
