//! Camera resource types

use serde::{Deserialize, Serialize};

/// List envelope the recorder wraps collection responses in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
}

/// Camera record as served by the recorder.
///
/// Every attribute is optional because field projection returns partial
/// records. Unknown attributes are ignored on decode; the recorder is the
/// sole authority on what a camera is, so nothing is validated or
/// normalized here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Camera {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_slug: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Native stream width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Native stream height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub motion_trigger_recorder: Option<bool>,
    #[serde(default)]
    pub object_enabled: Option<bool>,
}

/// Field projection for camera requests.
///
/// Renders to the recorder's `fields` query parameter: `*` selects every
/// attribute, otherwise a comma-joined column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    All,
    Columns(Vec<String>),
}

impl FieldSelection {
    /// Select the given columns.
    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Columns(columns.into_iter().map(Into::into).collect())
    }

    /// Value for the `fields` query parameter.
    pub fn as_query_value(&self) -> String {
        match self {
            Self::All => "*".to_string(),
            Self::Columns(columns) => columns.join(","),
        }
    }
}
