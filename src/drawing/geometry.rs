//! Geometric primitives for segment rendering
//!
//! Area fitting and distance helpers used when placing and
//! rasterizing display segments.

use crate::canvas::Rect;

/// Greatest common divisor (Euclid)
#[inline]
fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Largest sub-rectangle of `area` with the `width:height` ratio.
///
/// The result keeps the origin of `area`. The ratio is reduced first, so
/// `(6, 10)` behaves the same as `(3, 5)`.
///
/// # Returns
/// * Zero rectangle when either ratio component is not positive
/// * Otherwise `(ratio.0 * k) x (ratio.1 * k)` for the largest `k` that fits
pub fn with_ratio(area: Rect, ratio: (i32, i32)) -> Rect {
    let (rx, ry) = ratio;
    if rx <= 0 || ry <= 0 {
        return Rect::ZERO;
    }
    let g = gcd(rx, ry);
    let (rx, ry) = (rx / g, ry / g);

    let fact = (area.dx() / rx).min(area.dy() / ry);
    Rect::with_size(area.min.x, area.min.y, rx * fact, ry * fact)
}

/// Distance from pixel centre `p` to the line segment between `a` and `b`.
///
/// The projection of `p` onto the line through `a` and `b` is clamped to
/// the segment, so points past either end measure to that end.
/// A degenerate segment (`a == b`) measures to `a`.
pub fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (vx, vy) = (b.0 - a.0, b.1 - a.1);
    let (wx, wy) = (p.0 - a.0, p.1 - a.1);
    let len_sq = vx * vx + vy * vy;
    let t = if len_sq > 0.0 {
        ((vx * wx + vy * wy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (wx - t * vx).hypot(wy - t * vy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_ratio_shrinks_longer_axis() {
        assert_eq!(with_ratio(Rect::new(0, 0, 12, 40), (3, 5)), Rect::new(0, 0, 12, 20));
        assert_eq!(with_ratio(Rect::new(0, 0, 30, 20), (3, 5)), Rect::new(0, 0, 12, 20));
    }

    #[test]
    fn test_with_ratio_keeps_origin() {
        assert_eq!(with_ratio(Rect::new(4, 8, 20, 28), (3, 5)), Rect::new(4, 8, 16, 28));
    }

    #[test]
    fn test_with_ratio_reduces_ratio() {
        let area = Rect::new(0, 0, 13, 21);
        assert_eq!(with_ratio(area, (6, 10)), with_ratio(area, (3, 5)));
    }

    #[test]
    fn test_with_ratio_degenerate() {
        assert_eq!(with_ratio(Rect::new(0, 0, 10, 10), (0, 5)), Rect::ZERO);
        assert!(with_ratio(Rect::new(0, 0, 2, 4), (3, 5)).is_empty());
    }

    #[test]
    fn test_distance_to_segment() {
        let (a, b) = ((0.0, 0.0), (4.0, 0.0));
        assert!(distance_to_segment((2.0, 0.0), a, b).abs() < 1e-6);
        assert!((distance_to_segment((1.0, 3.0), a, b) - 3.0).abs() < 1e-6);
        // Past the end measures to the end point
        assert!((distance_to_segment((7.0, 4.0), a, b) - 5.0).abs() < 1e-6);
        assert!((distance_to_segment((-3.0, 0.0), a, b) - 3.0).abs() < 1e-6);
        // Degenerate segment
        assert!((distance_to_segment((3.0, 4.0), a, a) - 5.0).abs() < 1e-6);
    }
}
