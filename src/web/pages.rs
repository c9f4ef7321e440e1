//! Page handlers
//!
//! Each page performs at most one recorder fetch, builds a view model, and
//! renders a template. A recorder failure never turns into an error
//! response here: the page renders with empty data and a visible notice,
//! and the cause goes to the log.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect};
use serde::Serialize;
use tera::Context;

use crate::camera_service::{Camera, FieldSelection};
use crate::error::Result;
use crate::state::AppState;

use super::detail::{load_detail, NEW_RECORD_ID};
use super::templates::render;

/// Columns fetched for the manage-cameras table.
const MANAGE_FIELDS: [&str; 6] = [
    "id",
    "name",
    "host",
    "port",
    "motion_trigger_recorder",
    "object_enabled",
];

/// One tile on the camera grid.
#[derive(Debug, Serialize)]
struct CameraTile {
    name: String,
    host: String,
    stream_url: Option<String>,
    stream_width: Option<u32>,
    stream_height: Option<u32>,
}

/// One row of the manage-cameras table.
#[derive(Debug, Serialize)]
struct ManageRow {
    id: Option<i64>,
    name: String,
    source: String,
    recording_enabled: String,
    detection_enabled: String,
}

/// Form values for the edit-camera page.
#[derive(Debug, Default, Serialize)]
struct CameraForm {
    name: String,
    host: String,
    port: String,
    width: String,
    height: String,
    motion_trigger_recorder: bool,
    object_enabled: bool,
}

/// Landing page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state.templates, "home.html", &Context::new())
}

/// About page
pub async fn about(State(state): State<AppState>) -> Result<Html<String>> {
    let mut context = Context::new();
    context.insert("version", env!("CARGO_PKG_VERSION"));
    context.insert("backend_url", state.backend.backend_url());
    render(&state.templates, "about.html", &context)
}

/// Camera grid: one tile per camera with its derived display stream.
pub async fn camera_grid(State(state): State<AppState>) -> Result<Html<String>> {
    let (cameras, backend_error) = match state.cameras.list_cameras(None).await {
        Ok(cameras) => (cameras, false),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch camera list");
            (Vec::new(), true)
        }
    };

    let tiles = grid_tiles(state.backend.backend_url(), &cameras);

    let mut context = Context::new();
    context.insert("tiles", &tiles);
    context.insert("backend_error", &backend_error);
    render(&state.templates, "cameras.html", &context)
}

/// Manage-cameras table over a fixed field projection.
pub async fn manage_cameras(State(state): State<AppState>) -> Result<Html<String>> {
    let selection = FieldSelection::columns(MANAGE_FIELDS);
    let (cameras, backend_error) = match state.cameras.list_cameras(Some(&selection)).await {
        Ok(cameras) => (cameras, false),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch camera list");
            (Vec::new(), true)
        }
    };

    let rows = manage_rows(&cameras);

    let mut context = Context::new();
    context.insert("rows", &rows);
    context.insert("backend_error", &backend_error);
    render(&state.templates, "manage_cameras.html", &context)
}

/// Edit-camera page: id 0 is the blank new-camera form, any other id is
/// fetched once with the full projection.
pub async fn edit_camera(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let cameras = state.cameras.clone();
    let fetched = load_detail(id, |camera_id| async move {
        cameras
            .get_camera(camera_id, Some(&FieldSelection::All))
            .await
    })
    .await;

    let (camera, backend_error) = match fetched {
        Ok(camera) => (camera, false),
        Err(e) => {
            tracing::error!(error = %e, camera_id = id, "Failed to fetch camera");
            (None, true)
        }
    };

    let is_new = id == NEW_RECORD_ID;
    let show_form = is_new || camera.is_some();
    let form = camera.as_ref().map(camera_form).unwrap_or_default();

    let mut context = Context::new();
    context.insert("is_new", &is_new);
    context.insert("show_form", &show_form);
    context.insert("form", &form);
    context.insert("backend_error", &backend_error);
    render(&state.templates, "edit_camera.html", &context)
}

/// Embedded stylesheet
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../assets/console.css"),
    )
}

/// Wildcard fallback: everything unknown goes back to the landing page.
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

fn grid_tiles(backend_url: &str, cameras: &[Camera]) -> Vec<CameraTile> {
    cameras
        .iter()
        .map(|camera| {
            let (stream_url, stream_width, stream_height) =
                match camera.display_stream(backend_url) {
                    Some(stream) => (Some(stream.url), stream.width, stream.height),
                    None => (None, None, None),
                };
            CameraTile {
                name: camera.name.clone().unwrap_or_default(),
                host: camera.host.clone().unwrap_or_default(),
                stream_url,
                stream_width,
                stream_height,
            }
        })
        .collect()
}

fn manage_rows(cameras: &[Camera]) -> Vec<ManageRow> {
    cameras
        .iter()
        .map(|camera| ManageRow {
            id: camera.id,
            name: camera.name.clone().unwrap_or_default(),
            source: camera_source(camera),
            recording_enabled: toggle_label(camera.motion_trigger_recorder),
            detection_enabled: toggle_label(camera.object_enabled),
        })
        .collect()
}

fn camera_source(camera: &Camera) -> String {
    match (&camera.host, camera.port) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.clone(),
        _ => String::new(),
    }
}

fn toggle_label(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "",
    }
    .to_string()
}

fn camera_form(camera: &Camera) -> CameraForm {
    CameraForm {
        name: camera.name.clone().unwrap_or_default(),
        host: camera.host.clone().unwrap_or_default(),
        port: camera.port.map(|p| p.to_string()).unwrap_or_default(),
        width: camera.width.map(|w| w.to_string()).unwrap_or_default(),
        height: camera.height.map(|h| h.to_string()).unwrap_or_default(),
        motion_trigger_recorder: camera.motion_trigger_recorder.unwrap_or(false),
        object_enabled: camera.object_enabled.unwrap_or(false),
    }
}
