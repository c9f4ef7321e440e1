//! CameraService - Camera Data Access
//!
//! ## Responsibilities
//!
//! - Typed list/get-by-id over the recorder's camera collection
//! - Field projection pass-through
//! - Display stream derivation for the grid page

mod stream;
mod types;

pub use stream::{DisplayStream, MAX_DISPLAY_WIDTH};
pub use types::{Camera, FieldSelection, ListResponse};

use std::sync::Arc;

use crate::backend_client::BackendClient;
use crate::error::Result;

/// Camera data-access service.
///
/// Every call is a single GET against the recorder; nothing is cached or
/// deduplicated between requests.
pub struct CameraService {
    backend: Arc<BackendClient>,
}

impl CameraService {
    /// Create a service over the given recorder client.
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    /// List cameras, optionally projected to selected fields.
    pub async fn list_cameras(&self, fields: Option<&FieldSelection>) -> Result<Vec<Camera>> {
        let response: ListResponse<Camera> = self
            .backend
            .get_json("camera", &field_query(fields))
            .await?;
        Ok(response.results)
    }

    /// Fetch one camera by id, optionally projected to selected fields.
    pub async fn get_camera(&self, id: i64, fields: Option<&FieldSelection>) -> Result<Camera> {
        self.backend
            .get_json(&format!("camera/{}", id), &field_query(fields))
            .await
    }
}

fn field_query(fields: Option<&FieldSelection>) -> Vec<(String, String)> {
    match fields {
        Some(selection) => vec![("fields".to_string(), selection.as_query_value())],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_projection_sends_no_query() {
        assert!(field_query(None).is_empty());
    }

    #[test]
    fn test_projection_renders_single_fields_pair() {
        let selection = FieldSelection::columns(["id", "name"]);
        let query = field_query(Some(&selection));
        assert_eq!(query, vec![("fields".to_string(), "id,name".to_string())]);
    }

    #[test]
    fn test_full_projection_renders_wildcard_pair() {
        let query = field_query(Some(&FieldSelection::All));
        assert_eq!(query, vec![("fields".to_string(), "*".to_string())]);
    }
}
