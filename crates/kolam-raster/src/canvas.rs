//! World → pixel mapping.

use kolam_core::{Point, Rect};

use crate::style::Style;

/// Pixel dimensions and the affine world-to-pixel map for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Canvas {
    pub width: u32,
    pub height: u32,
    origin: Point,
    scale: f32,
    margin: f32,
}

impl Canvas {
    /// Fit a canvas around `bounds`: scale by the style's pixels-per-unit and
    /// reserve a margin on each side proportional to the larger content extent.
    pub fn fit(bounds: Rect, style: &Style) -> Self {
        // A degenerate bounds (single dot, or the EMPTY sentinel for a
        // dot-free render) still yields a 1x1 canvas.
        let (origin, w, h) = if bounds.is_empty() {
            (Point::ZERO, 0.0, 0.0)
        } else {
            (Point::new(bounds.x, bounds.y), bounds.w, bounds.h)
        };

        let content_w = w * style.pixels_per_unit;
        let content_h = h * style.pixels_per_unit;
        let margin = style.margin_fraction * content_w.max(content_h);

        let width = (content_w + 2.0 * margin).ceil().max(1.0) as u32;
        let height = (content_h + 2.0 * margin).ceil().max(1.0) as u32;

        Self {
            width,
            height,
            origin,
            scale: style.pixels_per_unit,
            margin,
        }
    }

    /// Map a world point to pixel coordinates.
    #[inline]
    pub fn map(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) * self.scale + self.margin,
            (p.y - self.origin.y) * self.scale + self.margin,
        )
    }
}
