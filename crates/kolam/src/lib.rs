//! # kolam - Dot-grid pattern generation
//!
//! Facade over the three pipeline stages:
//!
//! 1. [`Lattice::build`] — the dot grid
//! 2. [`generate_paths`] — rule-driven path synthesis via the process-wide
//!    [`rulebook`]
//! 3. [`render_to_png`] — deterministic rasterization
//!
//! Each stage is a pure function over its inputs; the rulebook is the only
//! process-wide state and is read-only after first use, so generation
//! requests can run fully in parallel. A failed stage aborts the request —
//! generation is deterministic, so there is nothing to gain from retries.
//!
//! ```no_run
//! use kolam::{generate_to_file, Style};
//!
//! let style = Style::default();
//! generate_to_file(9, 9, 1.0, "sikku_like", "kolam.png".as_ref(), true, &style)?;
//! # Ok::<(), kolam::Error>(())
//! ```

use std::path::Path;
use std::sync::OnceLock;

use thiserror::Error;

pub use kolam_core::{Color, Path as KolamPath, PathCmd, PathSet, Point, Rect};
pub use kolam_lattice::{Lattice, LatticeError};
pub use kolam_raster::{
    render_image, render_to_png, render_to_writer, RenderError, Style, StyleError,
};
pub use kolam_rules::{Rule, RuleError, Rulebook};

/// Any pipeline-stage failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The process-wide rulebook. Populated on first use, never mutated after.
pub fn rulebook() -> &'static Rulebook {
    static RULEBOOK: OnceLock<Rulebook> = OnceLock::new();
    RULEBOOK.get_or_init(Rulebook::standard)
}

/// Registered rule names, in listing order.
pub fn list_rule_names() -> Vec<&'static str> {
    rulebook().names().collect()
}

/// Synthesize the path set for `lattice` under the named rule.
pub fn generate_paths(rule: &str, lattice: &Lattice) -> Result<PathSet, RuleError> {
    rulebook().generate(rule, lattice)
}

/// Run the full pipeline: build a lattice, generate paths under `rule`, and
/// write a PNG to `dest`.
pub fn generate_to_file(
    rows: u32,
    cols: u32,
    spacing: f32,
    rule: &str,
    dest: &Path,
    show_dots: bool,
    style: &Style,
) -> Result<(), Error> {
    let lattice = Lattice::build(rows, cols, spacing)?;
    let paths = generate_paths(rule, &lattice)?;
    render_to_png(&paths, lattice.points(), dest, show_dots, style)?;
    Ok(())
}
