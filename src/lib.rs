//! NVR Console Library
//!
//! Operator console for a camera recorder: lists cameras, renders live
//! MJPEG streams, and shows per-camera configuration. All data comes from
//! the recorder's REST API over JSON/HTTP; the console holds no state of
//! its own beyond the lifetime of a request.
//!
//! ## Components
//!
//! 1. BackendClient - recorder HTTP adapter (GET + typed JSON decode)
//! 2. CameraService - camera list/get-by-id with field projection
//! 3. Web - routing table, page handlers, embedded templates

pub mod backend_client;
pub mod camera_service;
pub mod error;
pub mod models;
pub mod state;
pub mod web;

pub use error::{Error, Result};
pub use state::AppState;
