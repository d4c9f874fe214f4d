//! Core geometric types.

use std::fmt;
use std::str::FromStr;

/// A point in 2D space.
///
/// The y axis grows downward, matching raster coordinates, so lattice row
/// indices map directly onto y.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const EMPTY: Rect = Rect { x: f32::INFINITY, y: f32::INFINITY, w: 0.0, h: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn min_x(self) -> f32 { self.x }
    #[inline]
    pub fn min_y(self) -> f32 { self.y }
    #[inline]
    pub fn max_x(self) -> f32 { self.x + self.w }
    #[inline]
    pub fn max_y(self) -> f32 { self.y + self.h }

    /// Check if the rect is the EMPTY sentinel (used for bounding box computation).
    #[inline]
    pub fn is_empty(self) -> bool {
        // Only the sentinel is considered empty, not zero-area rects at valid positions
        self.x.is_infinite()
    }

    /// Expand rect to include a point.
    #[inline]
    pub fn include_point(&mut self, p: Point) {
        if self.is_empty() {
            self.x = p.x;
            self.y = p.y;
            self.w = 0.0;
            self.h = 0.0;
        } else {
            let min_x = self.x.min(p.x);
            let min_y = self.y.min(p.y);
            let max_x = self.max_x().max(p.x);
            let max_y = self.max_y().max(p.y);
            self.x = min_x;
            self.y = min_y;
            self.w = max_x - min_x;
            self.h = max_y - min_y;
        }
    }

    /// Union of two rects.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        if self.is_empty() { return other; }
        if other.is_empty() { return self; }
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// RGBA color with 8-bit components.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack from 0xRRGGBBAA format.
    #[inline]
    pub const fn from_packed(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Pack to 0xRRGGBBAA format.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 24)
            | ((self.g as u32) << 16)
            | ((self.b as u32) << 8)
            | (self.a as u32)
    }
}

/// Error parsing a `#RRGGBB` / `#RRGGBBAA` color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': expected #RRGGBB or #RRGGBBAA", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let digits =
            u32::from_str_radix(hex, 16).map_err(|_| ColorParseError(s.to_string()))?;
        match hex.len() {
            6 => Ok(Color::from_packed((digits << 8) | 0xFF)),
            8 => Ok(Color::from_packed(digits)),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn rect_include_point() {
        let mut r = Rect::EMPTY;
        r.include_point(Point::new(10.0, 20.0));
        r.include_point(Point::new(30.0, 40.0));
        assert_eq!(r.x, 10.0);
        assert_eq!(r.y, 20.0);
        assert_eq!(r.w, 20.0);
        assert_eq!(r.h, 20.0);
    }

    #[test]
    fn rect_union_with_empty() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Rect::EMPTY.union(r), r);
        assert_eq!(r.union(Rect::EMPTY), r);
    }

    #[test]
    fn color_pack_unpack() {
        let c = Color::new(0xAA, 0xBB, 0xCC, 0xDD);
        assert_eq!(c.to_packed(), 0xAABBCCDD);
        assert_eq!(Color::from_packed(0xAABBCCDD), c);
    }

    #[test]
    fn color_from_hex() {
        assert_eq!("#ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#000000ff".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!(
            "#AABBCCDD".parse::<Color>().unwrap(),
            Color::new(0xAA, 0xBB, 0xCC, 0xDD)
        );
        assert!("ffffff".parse::<Color>().is_err());
        assert!("#ggg".parse::<Color>().is_err());
        assert!("#fff".parse::<Color>().is_err());
    }
}
