//! Path representation and commands.

use crate::types::{Point, Rect};

/// A path segment descriptor.
///
/// Arcs are circular, described by center, radius, and a start/sweep angle
/// pair. A positive sweep runs clockwise on screen (y down); a negative sweep
/// counterclockwise.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move to a point (starts the path).
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Circular arc.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
    },
    /// Close the path back to its starting point.
    Close,
}

/// A single traced curve: an ordered sequence of segment descriptors.
///
/// A closed path ends with [`PathCmd::Close`] and its endpoint coincides with
/// its start point. Bounds are tracked incrementally as segments are added;
/// arc bounds are conservative (the full circle).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
    bounds: Rect,
    current: Point,
    start: Point,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            cmds: Vec::new(),
            bounds: Rect::EMPTY,
            current: Point::ZERO,
            start: Point::ZERO,
        }
    }

    /// Get the segment descriptors.
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Get the bounding box of the path.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Check if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// The point the next segment would continue from.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Whether the path ends with a `Close` command.
    pub fn is_closed(&self) -> bool {
        matches!(self.cmds.last(), Some(PathCmd::Close))
    }

    /// Move to a point (starts the path).
    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
        self.bounds.include_point(p);
        self.current = p;
        self.start = p;
    }

    /// Straight line to a point.
    pub fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo(p));
        self.bounds.include_point(p);
        self.current = p;
    }

    /// Circular arc around `center`, starting at `start_angle` and sweeping
    /// `sweep_angle` radians (positive = clockwise on screen).
    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, sweep_angle: f32) {
        self.cmds.push(PathCmd::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
        // Conservative bounds: use full circle bounds
        self.bounds.include_point(Point::new(center.x - radius, center.y - radius));
        self.bounds.include_point(Point::new(center.x + radius, center.y + radius));
        let end_angle = start_angle + sweep_angle;
        self.current = Point::new(
            center.x + radius * end_angle.cos(),
            center.y + radius * end_angle.sin(),
        );
    }

    /// Close the path back to its starting point.
    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
        self.current = self.start;
    }
}

/// The complete collection of paths produced by one rule for one lattice.
///
/// Paths were generated in a deterministic order and are stored in it, but the
/// set carries no semantic ordering; downstream consumers must not rely on
/// enumeration order beyond reproducibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// Create an empty path set.
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Add a path to the set.
    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// The paths in the set.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of paths in the set.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the set has no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Union of the bounding boxes of all paths.
    pub fn bounds(&self) -> Rect {
        self.paths
            .iter()
            .fold(Rect::EMPTY, |acc, p| acc.union(p.bounds()))
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn path_bounds() {
        let mut path = Path::new();
        path.move_to(Point::new(10.0, 20.0));
        path.line_to(Point::new(30.0, 40.0));

        let b = path.bounds();
        assert_eq!(b.x, 10.0);
        assert_eq!(b.y, 20.0);
        assert_eq!(b.w, 20.0);
        assert_eq!(b.h, 20.0);
    }

    #[test]
    fn arc_bounds_cover_full_circle() {
        let mut path = Path::new();
        path.move_to(Point::new(55.0, 50.0));
        path.arc(Point::new(50.0, 50.0), 5.0, 0.0, PI / 2.0);

        let b = path.bounds();
        assert_eq!(b.x, 45.0);
        assert_eq!(b.y, 45.0);
        assert_eq!(b.w, 10.0);
        assert_eq!(b.h, 10.0);
    }

    #[test]
    fn arc_updates_current_point() {
        let mut path = Path::new();
        path.move_to(Point::new(55.0, 50.0));
        path.arc(Point::new(50.0, 50.0), 5.0, 0.0, PI / 2.0);

        // Quarter turn clockwise on screen ends directly below the center.
        let p = path.current();
        assert!((p.x - 50.0).abs() < 1e-5);
        assert!((p.y - 55.0).abs() < 1e-5);
    }

    #[test]
    fn close_returns_to_start() {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 2.0));
        path.line_to(Point::new(3.0, 4.0));
        path.close();

        assert!(path.is_closed());
        assert_eq!(path.current(), Point::new(1.0, 2.0));
    }

    #[test]
    fn path_set_bounds_union() {
        let mut a = Path::new();
        a.move_to(Point::new(0.0, 0.0));
        a.line_to(Point::new(1.0, 1.0));

        let mut b = Path::new();
        b.move_to(Point::new(5.0, 5.0));
        b.line_to(Point::new(6.0, 7.0));

        let mut set = PathSet::new();
        set.push(a);
        set.push(b);

        let bounds = set.bounds();
        assert_eq!(bounds.x, 0.0);
        assert_eq!(bounds.y, 0.0);
        assert_eq!(bounds.w, 6.0);
        assert_eq!(bounds.h, 7.0);
    }

    #[test]
    fn empty_set_has_empty_bounds() {
        assert!(PathSet::new().bounds().is_empty());
    }
}
