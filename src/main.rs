//! NVR Console
//!
//! Main entry point for the operator console.

use std::sync::Arc;

use nvr_console::{
    backend_client::BackendClient,
    camera_service::CameraService,
    state::{AppConfig, AppState},
    web,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nvr_console=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NVR Console v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::default();
    config.validate()?;
    tracing::info!(
        backend_url = %config.backend_url,
        host = %config.host,
        port = config.port,
        request_timeout_sec = config.request_timeout_sec,
        "Configuration loaded"
    );

    // Initialize components
    let backend = Arc::new(BackendClient::new(&config));
    let cameras = Arc::new(CameraService::new(backend.clone()));
    let templates = Arc::new(web::build_templates()?);

    let state = AppState {
        config,
        backend,
        cameras,
        templates,
    };

    let app = web::create_router(state.clone()).layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
