//! Grid headings and rotation orders.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use kolam_core::Point;

/// One of the four grid directions.
///
/// Screen coordinates: y grows downward, so `North` points toward smaller row
/// indices and `Cw` rotation (N → E → S → W) is clockwise as drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in the dart enumeration order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Dense index, matching the position in [`Heading::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// The reverse heading.
    #[inline]
    pub fn opposite(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// Grid step as `(row delta, col delta)`.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    /// Unit direction vector in drawing coordinates.
    #[inline]
    pub fn dir(self) -> Point {
        match self {
            Heading::North => Point::new(0.0, -1.0),
            Heading::East => Point::new(1.0, 0.0),
            Heading::South => Point::new(0.0, 1.0),
            Heading::West => Point::new(-1.0, 0.0),
        }
    }

    /// Angle of the direction vector, in `[0, 2π)`.
    #[inline]
    pub fn angle(self) -> f32 {
        match self {
            Heading::East => 0.0,
            Heading::South => FRAC_PI_2,
            Heading::West => PI,
            Heading::North => PI + FRAC_PI_2,
        }
    }
}

/// A rotation order over the four headings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// N → E → S → W, clockwise as drawn.
    Cw,
    /// N → W → S → E, counterclockwise as drawn.
    Ccw,
}

impl Rotation {
    /// The next heading in this rotation order.
    #[inline]
    pub fn next(self, h: Heading) -> Heading {
        match self {
            Rotation::Cw => match h {
                Heading::North => Heading::East,
                Heading::East => Heading::South,
                Heading::South => Heading::West,
                Heading::West => Heading::North,
            },
            Rotation::Ccw => match h {
                Heading::North => Heading::West,
                Heading::West => Heading::South,
                Heading::South => Heading::East,
                Heading::East => Heading::North,
            },
        }
    }

    /// Signed arc sweep from `start` to `end` going in this rotation
    /// direction, normalized so a zero angular difference becomes a full
    /// turn (a reversal draws a complete loop around the dot).
    #[inline]
    pub fn sweep(self, start: f32, end: f32) -> f32 {
        match self {
            Rotation::Cw => {
                let d = (end - start).rem_euclid(TAU);
                if d == 0.0 { TAU } else { d }
            }
            Rotation::Ccw => {
                let d = (start - end).rem_euclid(TAU);
                if d == 0.0 { -TAU } else { -d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites() {
        for h in Heading::ALL {
            assert_eq!(h.opposite().opposite(), h);
            let (dr, dc) = h.delta();
            let (or, oc) = h.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn rotations_are_four_cycles() {
        for rot in [Rotation::Cw, Rotation::Ccw] {
            for h in Heading::ALL {
                let back = rot.next(rot.next(rot.next(rot.next(h))));
                assert_eq!(back, h);
            }
        }
        // The two orders are inverses.
        for h in Heading::ALL {
            assert_eq!(Rotation::Ccw.next(Rotation::Cw.next(h)), h);
        }
    }

    #[test]
    fn angle_matches_dir() {
        for h in Heading::ALL {
            let a = h.angle();
            let d = h.dir();
            assert!((a.cos() - d.x).abs() < 1e-6);
            assert!((a.sin() - d.y).abs() < 1e-6);
        }
    }

    #[test]
    fn sweep_quarter_turn() {
        let s = Rotation::Cw.sweep(Heading::West.angle(), Heading::North.angle());
        assert!((s - FRAC_PI_2).abs() < 1e-5);
        let s = Rotation::Ccw.sweep(Heading::North.angle(), Heading::West.angle());
        assert!((s + FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn sweep_reversal_is_full_turn() {
        let a = Heading::East.angle();
        assert!((Rotation::Cw.sweep(a, a) - TAU).abs() < 1e-6);
        assert!((Rotation::Ccw.sweep(a, a) + TAU).abs() < 1e-6);
    }
}
