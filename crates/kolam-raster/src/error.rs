//! Error types for rendering.

use thiserror::Error;

/// Errors from the rasterization stage.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The path set has no paths and dot markers are disabled, so there is
    /// nothing to draw. Treated as a caller error rather than silently
    /// producing a blank canvas.
    #[error("nothing to render: empty path set and dot markers disabled")]
    EmptyPathSet,

    /// The output destination could not be written.
    #[error("render target {target} is unwritable: {source}")]
    TargetUnwritable {
        target: String,
        #[source]
        source: image::ImageError,
    },
}
