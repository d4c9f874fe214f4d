//! # kolam-raster - Rasterization
//!
//! Consumes a [`PathSet`](kolam_core::PathSet) plus the flat dot list and
//! produces a PNG image.
//!
//! Rendering is a pure function of `(paths, dots, style)`: paths are flattened
//! at a fixed angular step and stroked with exact pixel-coverage tests (no
//! anti-aliasing), so identical inputs produce byte-identical output. Dot
//! markers are drawn after all strokes and are never occluded by them.

mod canvas;
mod error;
mod render;
mod style;

pub use error::RenderError;
pub use render::{render_image, render_to_png, render_to_writer};
pub use style::{Style, StyleError};
