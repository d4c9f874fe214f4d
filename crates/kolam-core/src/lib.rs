//! # kolam-core - Geometric types for the kolam engine
//!
//! Leaf crate with no workspace dependencies. Provides:
//!
//! - **Points, rects, colors**: plain `f32` geometry (`Point`, `Rect`, `Color`)
//! - **Paths**: a segment-descriptor model (`Path`, `PathCmd`) with
//!   incrementally tracked bounds
//! - **Path sets**: the value object a generation rule produces and the
//!   rasterizer consumes (`PathSet`)
//!
//! Everything here is an immutable snapshot once handed downstream; stages
//! exchange values, never shared mutable buffers.

mod path;
mod types;

pub use path::{Path, PathCmd, PathSet};
pub use types::{Color, ColorParseError, Point, Rect};
