mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::booking_sweep,
    service::booking::BookingService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    // Catch up on bookings that expired while the server was down
    if let Err(e) = BookingService::new(&db).sweep_expired().await {
        tracing::error!("Startup booking sweep failed: {}", e);
    }

    booking_sweep::start_scheduler(db.clone(), &config.sweep_schedule).await?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.frontend_base_url.clone(),
        ))
        .merge(router::docs())
        .layer(session)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
