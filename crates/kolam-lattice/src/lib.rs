//! # kolam-lattice - The dot grid
//!
//! A [`Lattice`] is an immutable R×C grid of evenly spaced dots: the canvas a
//! kolam is drawn over. Dot `(i, j)` sits at `(j*spacing, i*spacing)` with y
//! growing downward, so the grid reads the way the finished image does.
//!
//! Construction is a pure function of `(rows, cols, spacing)`; identical
//! inputs yield bit-identical coordinates. One lattice is built per generation
//! request and discarded afterwards.

use kolam_core::Point;
use thiserror::Error;

/// Errors from lattice construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// Rows or columns outside `1..`.
    #[error("invalid lattice dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidDimension { rows: u32, cols: u32 },

    /// Spacing not a positive finite number.
    #[error("invalid dot spacing {spacing}: must be positive and finite")]
    InvalidSpacing { spacing: f32 },
}

/// An immutable grid of dot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    rows: u32,
    cols: u32,
    spacing: f32,
    /// Row-major flat point list.
    points: Vec<Point>,
}

impl Lattice {
    /// Build a lattice of `rows` × `cols` dots separated by `spacing`.
    ///
    /// Range limits beyond positivity (e.g. upper bounds on grid size) are the
    /// caller's responsibility.
    pub fn build(rows: u32, cols: u32, spacing: f32) -> Result<Self, LatticeError> {
        if rows == 0 || cols == 0 {
            return Err(LatticeError::InvalidDimension { rows, cols });
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(LatticeError::InvalidSpacing { spacing });
        }

        let mut points = Vec::with_capacity(rows as usize * cols as usize);
        for i in 0..rows {
            for j in 0..cols {
                points.push(Point::new(j as f32 * spacing, i as f32 * spacing));
            }
        }

        Ok(Self { rows, cols, spacing, points })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Distance between adjacent dots.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Total number of dots.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the lattice holds no dots (never true for a built lattice).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The dot at grid position `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    pub fn point(&self, row: u32, col: u32) -> Point {
        assert!(row < self.rows && col < self.cols, "dot index out of range");
        self.points[(row * self.cols + col) as usize]
    }

    /// All dots as a flat row-major slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of undirected edges in the implicit 4-neighbour grid graph.
    pub fn edge_count(&self) -> usize {
        let r = self.rows as usize;
        let c = self.cols as usize;
        r * (c - 1) + c * (r - 1)
    }
}
