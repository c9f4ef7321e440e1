//! Console routes

use axum::{routing::get, Router};

use crate::state::AppState;

use super::pages;

/// Create the console router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(super::health_check))
        // Pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/cameras", get(pages::camera_grid))
        .route("/manage-cameras", get(pages::manage_cameras))
        .route("/manage-cameras/:id", get(pages::edit_camera))
        // Assets
        .route("/assets/console.css", get(pages::stylesheet))
        // Everything else goes home
        .fallback(pages::redirect_home)
        .with_state(state)
}
