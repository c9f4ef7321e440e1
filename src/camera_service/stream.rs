//! Display stream derivation
//!
//! The recorder serves an MJPEG stream per camera at
//! `<origin>/<name_slug>/mjpeg-stream`. Streams wider than a grid tile are
//! downscaled by an integer factor through stream query parameters;
//! everything else plays at its native size.

use serde::Serialize;

use super::types::Camera;

/// Widest stream the camera grid shows without downscaling.
pub const MAX_DISPLAY_WIDTH: u32 = 800;

/// A camera's stream as shown on the grid page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayStream {
    pub url: String,
    /// Display width in pixels, when the native width is known
    pub width: Option<u32>,
    /// Display height in pixels, when the native height is known
    pub height: Option<u32>,
}

impl Camera {
    /// Derive the grid display stream for this camera.
    ///
    /// When the native width exceeds [`MAX_DISPLAY_WIDTH`] and both
    /// dimensions are known, the stream URL carries
    /// `?width=<w>&height=<h>` with `w = width / factor` and
    /// `h = height / factor` for `factor = width / MAX_DISPLAY_WIDTH`
    /// (integer division). Otherwise the URL is unparameterized and the
    /// display dimensions are the native ones. Cameras without a name slug
    /// have no stream endpoint.
    pub fn display_stream(&self, backend_url: &str) -> Option<DisplayStream> {
        let slug = self.name_slug.as_deref()?;
        let base = format!("{}/{}/mjpeg-stream", backend_url, slug);

        match (self.width, self.height) {
            (Some(width), Some(height)) if width > MAX_DISPLAY_WIDTH => {
                let factor = width / MAX_DISPLAY_WIDTH;
                let display_width = width / factor;
                let display_height = height / factor;
                Some(DisplayStream {
                    url: format!(
                        "{}?width={}&height={}",
                        base, display_width, display_height
                    ),
                    width: Some(display_width),
                    height: Some(display_height),
                })
            }
            (width, height) => Some(DisplayStream {
                url: base,
                width,
                height,
            }),
        }
    }
}
