//! Render style configuration.

use std::path::Path;

use kolam_core::Color;
use serde::Deserialize;
use thiserror::Error;

/// Errors loading or validating a style file.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse style file: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error("invalid style: {field} = {value} ({constraint})")]
    Invalid {
        field: &'static str,
        value: f32,
        constraint: &'static str,
    },
}

/// Visual parameters for rasterization.
///
/// Loadable from TOML; every field has a default, so a style file only names
/// what it overrides:
///
/// ```toml
/// line_width = 4.0
/// dot_radius = 6.0
/// background = "#fdf6e3"
/// stroke = "#20204a"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    /// Stroke thickness in pixels.
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Dot marker radius in pixels; 0 disables markers regardless of the
    /// show-dots flag.
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f32,

    /// Canvas background color.
    #[serde(default = "default_background")]
    pub background: Color,

    /// Color for strokes and dot markers.
    #[serde(default = "default_stroke")]
    pub stroke: Color,

    /// Fraction of the content extent reserved as border on each side.
    #[serde(default = "default_margin_fraction")]
    pub margin_fraction: f32,

    /// Scale from lattice units to pixels.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
}

fn default_line_width() -> f32 { 3.0 }
fn default_dot_radius() -> f32 { 5.0 }
fn default_background() -> Color { Color::WHITE }
fn default_stroke() -> Color { Color::rgb(0x20, 0x20, 0x4A) }
fn default_margin_fraction() -> f32 { 0.08 }
fn default_pixels_per_unit() -> f32 { 64.0 }

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            dot_radius: default_dot_radius(),
            background: default_background(),
            stroke: default_stroke(),
            margin_fraction: default_margin_fraction(),
            pixels_per_unit: default_pixels_per_unit(),
        }
    }
}

impl Style {
    /// Load a style from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path).map_err(|e| StyleError::Io {
            path: path.to_owned(),
            source: e,
        })?;
        Self::from_str(&content)
    }

    /// Parse a style from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, StyleError> {
        let style: Style = toml::from_str(content)?;
        style.validate()?;
        Ok(style)
    }

    /// Check field constraints.
    pub fn validate(&self) -> Result<(), StyleError> {
        let invalid = |field, value, constraint| StyleError::Invalid { field, value, constraint };
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(invalid("line_width", self.line_width, "must be positive"));
        }
        if !(self.dot_radius.is_finite() && self.dot_radius >= 0.0) {
            return Err(invalid("dot_radius", self.dot_radius, "must be non-negative"));
        }
        if !(self.margin_fraction.is_finite()
            && (0.0..0.5).contains(&self.margin_fraction))
        {
            return Err(invalid(
                "margin_fraction",
                self.margin_fraction,
                "must be in [0, 0.5)",
            ));
        }
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(invalid(
                "pixels_per_unit",
                self.pixels_per_unit,
                "must be positive",
            ));
        }
        Ok(())
    }
}
