//! Segment placement
//!
//! Partitions an aspect-adjusted pixel area into the 16 segment regions.
//! Three columns of vertical bars (left, mid, right) and three rows of
//! horizontal bars (top, mid, bottom) frame four quadrant boxes that hold
//! the diagonals:
//!
//! ```text
//!     s  short  s  short  s
//!    +--+------+--+------+--+
//!    |  |  A1  |  |  A2  |  |  s
//!    +--+------+--+------+--+
//!    |F |  H   |J |  K   |B |  long
//!    +--+------+--+------+--+
//!    |  |  G1  |  |  G2  |  |  s'
//!    +--+------+--+------+--+
//!    |E |  N   |M |  L   |C |  long
//!    +--+------+--+------+--+
//!    |  |  D1  |  |  D2  |  |  s
//!    +--+------+--+------+--+
//!     s  short  s' short  s
//! ```
//!
//! The corner and crossing squares stay empty; the sloped ends of the bars
//! point into them. Each diagonal fills its whole quadrant box, so its ends
//! touch the bars at both corners. The middle column and row (`s'`) take
//! the odd pixel left over when the area doesn't split evenly.

use super::Segment;
use crate::canvas::{Point, Rect};
use crate::constants::SEGMENT_WIDTH_PERC;

/// Width of a vertical or height of a horizontal segment for the area.
///
/// Odd sizes are preferred above 3 pixels, since the slope peaks can only
/// be centered on an odd number of lines.
pub fn segment_size(area: Rect) -> i32 {
    let s = (f64::from(area.dx()) * f64::from(SEGMENT_WIDTH_PERC) / 100.0).round() as i32;
    let s = s.max(1);
    if s > 3 && s % 2 == 0 {
        s - 1
    } else {
        s
    }
}

/// Placement attributes for one pixel area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    /// Top-left corner of the area
    origin: Point,
    /// Thickness of every segment
    seg_size: i32,
    /// Width of the mid column, `seg_size` plus any remainder
    mid_w: i32,
    /// Height of the mid row, `seg_size` plus any remainder
    mid_h: i32,
    /// Length of the horizontal bars
    short_len: i32,
    /// Length of the vertical bars
    long_len: i32,
    /// X offset of the mid column (J, M)
    mid_x: i32,
    /// X offset of the right column (B, C)
    right_x: i32,
    /// Y offset of the mid row (G1, G2)
    mid_y: i32,
    /// Y offset of the bottom row (D1, D2)
    bottom_y: i32,
}

impl Attributes {
    /// Calculate placement for the aspect-adjusted pixel area
    pub fn new(area: Rect) -> Self {
        let seg_size = segment_size(area);

        let short_len = (area.dx() - 3 * seg_size) / 2;
        let long_len = (area.dy() - 3 * seg_size) / 2;
        let mid_w = area.dx() - 2 * (seg_size + short_len);
        let mid_h = area.dy() - 2 * (seg_size + long_len);

        let mid_x = seg_size + short_len;
        let mid_y = seg_size + long_len;

        Self {
            origin: area.min,
            seg_size,
            mid_w,
            mid_h,
            short_len,
            long_len,
            mid_x,
            right_x: mid_x + mid_w + short_len,
            mid_y,
            bottom_y: mid_y + mid_h + long_len,
        }
    }

    /// Thickness of every segment, also the width of the diagonals
    #[inline]
    pub fn seg_size(&self) -> i32 {
        self.seg_size
    }

    /// Rectangle relative to the area origin
    #[inline]
    fn rect(&self, x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect::with_size(self.origin.x + x, self.origin.y + y, width, height)
    }

    /// Left edge of the left (`false`) or right (`true`) half
    #[inline]
    fn half_x(&self, right: bool) -> i32 {
        if right {
            self.mid_x + self.mid_w
        } else {
            self.seg_size
        }
    }

    /// Top edge of the upper (`false`) or lower (`true`) half
    #[inline]
    fn half_y(&self, lower: bool) -> i32 {
        if lower {
            self.mid_y + self.mid_h
        } else {
            self.seg_size
        }
    }

    /// Horizontal bar of `height` in the left or right half at row `y`
    fn horizontal(&self, right: bool, y: i32, height: i32) -> Rect {
        self.rect(self.half_x(right), y, self.short_len, height)
    }

    /// Vertical bar of `width` at column `x` in the upper or lower half
    fn vertical(&self, x: i32, width: i32, lower: bool) -> Rect {
        self.rect(x, self.half_y(lower), width, self.long_len)
    }

    /// Whole quadrant box between the bars
    fn diagonal(&self, right: bool, lower: bool) -> Rect {
        self.rect(
            self.half_x(right),
            self.half_y(lower),
            self.short_len,
            self.long_len,
        )
    }

    /// Region of the segment
    pub fn segment_area(&self, s: Segment) -> Rect {
        match s {
            Segment::A1 => self.horizontal(false, 0, self.seg_size),
            Segment::A2 => self.horizontal(true, 0, self.seg_size),
            Segment::G1 => self.horizontal(false, self.mid_y, self.mid_h),
            Segment::G2 => self.horizontal(true, self.mid_y, self.mid_h),
            Segment::D1 => self.horizontal(false, self.bottom_y, self.seg_size),
            Segment::D2 => self.horizontal(true, self.bottom_y, self.seg_size),

            Segment::F => self.vertical(0, self.seg_size, false),
            Segment::J => self.vertical(self.mid_x, self.mid_w, false),
            Segment::B => self.vertical(self.right_x, self.seg_size, false),
            Segment::E => self.vertical(0, self.seg_size, true),
            Segment::M => self.vertical(self.mid_x, self.mid_w, true),
            Segment::C => self.vertical(self.right_x, self.seg_size, true),

            Segment::H => self.diagonal(false, false),
            Segment::K => self.diagonal(true, false),
            Segment::N => self.diagonal(false, true),
            Segment::L => self.diagonal(true, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ASPECT_RATIO;

    /// Aspect-adjusted areas for glyph scale factors 4 (the minimum) to 40
    fn areas() -> impl Iterator<Item = Rect> {
        (4..=40).map(|f| Rect::with_size(0, 0, ASPECT_RATIO.0 * f, ASPECT_RATIO.1 * f))
    }

    #[test]
    fn test_segment_size() {
        assert_eq!(segment_size(Rect::new(0, 0, 12, 20)), 1);
        assert_eq!(segment_size(Rect::new(0, 0, 30, 50)), 3);
        // 45 * 9% = 4.05 -> 4, even sizes above 3 drop to odd
        assert_eq!(segment_size(Rect::new(0, 0, 45, 75)), 3);
        assert_eq!(segment_size(Rect::new(0, 0, 60, 100)), 5);
    }

    #[test]
    fn test_minimum_area_layout() {
        let attr = Attributes::new(Rect::new(0, 0, 12, 20));
        assert_eq!(attr.segment_area(Segment::A1), Rect::new(1, 0, 5, 1));
        assert_eq!(attr.segment_area(Segment::A2), Rect::new(7, 0, 11, 1));
        assert_eq!(attr.segment_area(Segment::F), Rect::new(0, 1, 1, 9));
        // Mid column and row absorb the odd pixel
        assert_eq!(attr.segment_area(Segment::J), Rect::new(5, 1, 7, 9));
        assert_eq!(attr.segment_area(Segment::B), Rect::new(11, 1, 12, 9));
        assert_eq!(attr.segment_area(Segment::G1), Rect::new(1, 9, 5, 11));
        assert_eq!(attr.segment_area(Segment::E), Rect::new(0, 11, 1, 19));
        assert_eq!(attr.segment_area(Segment::D2), Rect::new(7, 19, 11, 20));
        assert_eq!(attr.segment_area(Segment::H), Rect::new(1, 1, 5, 9));
        assert_eq!(attr.segment_area(Segment::L), Rect::new(7, 11, 11, 19));
    }

    #[test]
    fn test_glyph_spans_whole_area() {
        for area in areas() {
            let attr = Attributes::new(area);
            let regions: Vec<Rect> = Segment::ALL.iter().map(|s| attr.segment_area(*s)).collect();
            let max_x = regions.iter().map(|r| r.max.x).max();
            let max_y = regions.iter().map(|r| r.max.y).max();
            assert_eq!(max_x, Some(area.max.x), "right edge unused in {}", area);
            assert_eq!(max_y, Some(area.max.y), "bottom edge unused in {}", area);
            assert!((0..=1).contains(&(attr.mid_w - attr.seg_size)));
            assert!((0..=1).contains(&(attr.mid_h - attr.seg_size)));
        }
    }

    #[test]
    fn test_regions_inside_area_and_non_empty() {
        for area in areas() {
            let attr = Attributes::new(area);
            for s in Segment::ALL {
                let r = attr.segment_area(s);
                assert!(!r.is_empty(), "{} empty in {}", s, area);
                assert!(area.contains_rect(&r), "{} at {} outside {}", s, r, area);
            }
        }
    }

    #[test]
    fn test_regions_disjoint() {
        for area in areas() {
            let attr = Attributes::new(area);
            for (i, a) in Segment::ALL.iter().enumerate() {
                for b in &Segment::ALL[i + 1..] {
                    let (ra, rb) = (attr.segment_area(*a), attr.segment_area(*b));
                    assert!(!ra.overlaps(&rb), "{} {} overlaps {} {} in {}", a, ra, b, rb, area);
                }
            }
        }
    }

    #[test]
    fn test_diagonals_fit_their_width() {
        for area in areas() {
            let attr = Attributes::new(area);
            for s in [Segment::H, Segment::K, Segment::N, Segment::L] {
                let r = attr.segment_area(s);
                assert!(r.dx().min(r.dy()) >= attr.seg_size(), "{} too narrow in {}", s, area);
            }
        }
    }

    #[test]
    fn test_layout_is_mirror_symmetric() {
        for area in areas() {
            let attr = Attributes::new(area);
            let a1 = attr.segment_area(Segment::A1);
            let a2 = attr.segment_area(Segment::A2);
            let j = attr.segment_area(Segment::J);
            assert_eq!(a1.dx(), a2.dx());
            // Gap between a bar and the mid column is the same on both sides
            assert_eq!(j.min.x - a1.max.x, a2.min.x - j.max.x);
        }
    }

    #[test]
    fn test_origin_offset() {
        let base = Attributes::new(Rect::new(0, 0, 30, 50));
        let moved = Attributes::new(Rect::new(4, 8, 34, 58));
        for s in Segment::ALL {
            let (a, b) = (base.segment_area(s), moved.segment_area(s));
            assert_eq!((b.min.x - a.min.x, b.min.y - a.min.y), (4, 8));
            assert_eq!((a.dx(), a.dy()), (b.dx(), b.dy()));
        }
    }
}
