//! Drawing surfaces
//!
//! Integer geometry shared by all canvases, the [`Surface`] trait that
//! receives finished glyphs, and the per-cell styling applied to them.
//!
//! Two canvases live here:
//! - [`cell::CellCanvas`]: one character per terminal cell
//! - [`braille::BrailleCanvas`]: 2x4 addressable dots per cell

pub mod braille;
pub mod cell;

use std::fmt;

use thiserror::Error;

pub use braille::BrailleCanvas;
pub use cell::{CellAttrs, CellCanvas, Color};

/// A point on a grid (cells or pixels depending on the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Half-open rectangle: `min` is inclusive, `max` is exclusive.
///
/// Any `i32` corners are accepted. Sizes saturate at `i32::MAX` when the
/// corners are further apart than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Zero rectangle
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    /// Create rectangle from corner coordinates (normalized so min <= max)
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Create rectangle from origin and size, clipped at `i32::MAX`
    pub const fn with_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Width
    #[inline]
    pub const fn dx(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Height
    #[inline]
    pub const fn dy(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Number of points, None when it doesn't fit in an `i32`
    #[inline]
    pub const fn area_len(&self) -> Option<i32> {
        self.dx().checked_mul(self.dy())
    }

    /// True when the rectangle covers no points
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Check if the point lies inside the rectangle
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Check if `other` lies entirely inside this rectangle
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Check if the two rectangles share at least one point
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Iterate over all points, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let r = *self;
        (r.min.y..r.max.y).flat_map(move |y| (r.min.x..r.max.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Styling applied to every cell a glyph touches
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub attrs: CellAttrs,
}

impl CellStyle {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Failures reported by canvases and rasterizers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Area has zero width or height
    #[error("area {0} is empty")]
    EmptyArea(Rect),

    /// Point falls outside the canvas
    #[error("point {point} falls outside of area {area}")]
    OutOfBounds { point: Point, area: Rect },

    /// Area holds more cells than a canvas can index
    #[error("area {0} is too large")]
    TooLarge(Rect),

    /// Region does not fit inside the canvas
    #[error("region {region} doesn't fit inside area {area}")]
    RegionOutside { region: Rect, area: Rect },

    /// Diagonal width outside of 1..=shorter side of its region
    #[error("invalid width {width} for region {region}, must be in range 1..={max}")]
    InvalidWidth { width: i32, region: Rect, max: i32 },
}

/// A character-cell surface a finished glyph gets committed onto
pub trait Surface {
    /// Cell area covered by the surface
    fn area(&self) -> Rect;

    /// Replace a single cell
    fn set_cell(&mut self, p: Point, ch: char, style: &CellStyle) -> Result<(), CanvasError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalizes_corners() {
        let r = Rect::new(5, 7, 1, 2);
        assert_eq!(r.min, Point::new(1, 2));
        assert_eq!(r.max, Point::new(5, 7));
        assert_eq!((r.dx(), r.dy()), (4, 5));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 2, 2);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(1, 1)));
        assert!(!r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(1, 2)));
    }

    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        assert!(a.overlaps(&Rect::new(3, 3, 5, 5)));
        // Touching edges do not overlap
        assert!(!a.overlaps(&Rect::new(4, 0, 6, 4)));
        assert!(!a.overlaps(&Rect::ZERO));
    }

    #[test]
    fn test_rect_points_row_major() {
        let pts: Vec<Point> = Rect::new(1, 1, 3, 2).points().collect();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(2, 1)]);
        assert_eq!(Rect::ZERO.points().count(), 0);
    }

    #[test]
    fn test_rect_extreme_corners_saturate() {
        let r = Rect::new(i32::MIN, 0, i32::MAX, 10);
        assert_eq!(r.dx(), i32::MAX);
        assert_eq!(r.dy(), 10);
        assert_eq!(r.area_len(), None);
        assert_eq!(Rect::with_size(i32::MAX - 1, 0, 5, 5).max.x, i32::MAX);
        assert_eq!(Rect::new(0, 0, 6, 5).area_len(), Some(30));
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(Rect::new(0, 0, 6, 5).to_string(), "(0,0)-(6,5)");
    }
}
