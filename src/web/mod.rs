//! Web - Console Routes and Pages
//!
//! ## Responsibilities
//!
//! - Routing table (pages, health, assets, wildcard redirect)
//! - Page handlers and view models
//! - Embedded tera templates

pub mod detail;
mod pages;
mod routes;
mod templates;

pub use routes::create_router;
pub use templates::build_templates;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::models::HealthResponse;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let backend_ok = state.backend.health_check().await.unwrap_or(false);

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend_connected: backend_ok,
    };

    Json(response)
}
