//! Segment rasterizers
//!
//! Plots the two shapes a segment display is made of onto a
//! [`BrailleCanvas`]:
//!
//! ```text
//!   horizontal            vertical      diagonal (LeftToRight)
//!
//!     ________              /\           \\
//!    /        \            |  |           \\
//!    \________/            |  |            \\
//!                           \/              \\
//! ```
//!
//! Straight segments get 45 degree slopes on both ends so that adjoining
//! segments meet along a diagonal seam.

use log::trace;

use super::geometry::distance_to_segment;
use crate::canvas::{BrailleCanvas, CanvasError, CellStyle, Point, Rect};

/// Pixels this close to the diagonal's half width still count as inside
const DIAGONAL_TOLERANCE: f32 = 0.01;

/// Orientation of a straight segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    Horizontal,
    Vertical,
}

/// Direction of a diagonal segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalType {
    /// Top-left corner to bottom-right corner
    LeftToRight,
    /// Top-right corner to bottom-left corner
    RightToLeft,
}

/// Options for straight segments
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HvOptions {
    /// Style of every cell the segment touches
    pub cell_style: CellStyle,
    /// Draw a plain bar when the thickness is less than or equal to this
    pub skip_slopes_lte: i32,
    /// Put the slope peak on the second centre line for even thickness
    pub reverse_slopes: bool,
}

/// Options for diagonal segments
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagonalOptions {
    /// Style of every cell the segment touches
    pub cell_style: CellStyle,
}

/// Plots individual segments onto a braille canvas
pub trait Rasterizer {
    /// Draw a horizontal or vertical segment filling `region`
    fn hv(
        &mut self,
        bc: &mut BrailleCanvas,
        region: Rect,
        kind: SegmentType,
        opts: &HvOptions,
    ) -> Result<(), CanvasError>;

    /// Draw a diagonal segment of `width` pixels across `region`
    fn diagonal(
        &mut self,
        bc: &mut BrailleCanvas,
        region: Rect,
        width: i32,
        kind: DiagonalType,
        opts: &DiagonalOptions,
    ) -> Result<(), CanvasError>;
}

/// Default rasterizer
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentRasterizer;

/// Region must be non-empty and inside the canvas
fn validate_region(bc: &BrailleCanvas, region: Rect) -> Result<(), CanvasError> {
    if region.is_empty() {
        return Err(CanvasError::EmptyArea(region));
    }
    let area = bc.area();
    if !area.contains_rect(&region) {
        return Err(CanvasError::RegionOutside { region, area });
    }
    Ok(())
}

/// Amount a line is shortened at each end
///
/// Lines get shorter the further they are from the peak line, which yields
/// the 45 degree slopes. `lines` is the segment thickness.
#[inline]
fn line_shrink(line: i32, lines: i32, opts: &HvOptions) -> i32 {
    if lines <= opts.skip_slopes_lte {
        return 0;
    }
    // Same for odd thickness, differs by one for even thickness
    let peak = if opts.reverse_slopes { lines / 2 } else { (lines - 1) / 2 };
    (line - peak).abs()
}

impl Rasterizer for SegmentRasterizer {
    fn hv(
        &mut self,
        bc: &mut BrailleCanvas,
        region: Rect,
        kind: SegmentType,
        opts: &HvOptions,
    ) -> Result<(), CanvasError> {
        validate_region(bc, region)?;
        trace!("hv {:?} segment in {}", kind, region);

        let (lines, length) = match kind {
            SegmentType::Horizontal => (region.dy(), region.dx()),
            SegmentType::Vertical => (region.dx(), region.dy()),
        };

        for line in 0..lines {
            let shrink = line_shrink(line, lines, opts);
            for pos in shrink..length - shrink {
                let p = match kind {
                    SegmentType::Horizontal => Point::new(region.min.x + pos, region.min.y + line),
                    SegmentType::Vertical => Point::new(region.min.x + line, region.min.y + pos),
                };
                bc.set_pixel(p, &opts.cell_style)?;
            }
        }
        Ok(())
    }

    fn diagonal(
        &mut self,
        bc: &mut BrailleCanvas,
        region: Rect,
        width: i32,
        kind: DiagonalType,
        opts: &DiagonalOptions,
    ) -> Result<(), CanvasError> {
        validate_region(bc, region)?;
        let max = region.dx().min(region.dy());
        if width < 1 || width > max {
            return Err(CanvasError::InvalidWidth { width, region, max });
        }
        trace!("{:?} diagonal of width {} in {}", kind, width, region);

        // Centre line runs between the centres of two opposite corner pixels
        let left = region.min.x as f32 + 0.5;
        let right = region.max.x as f32 - 0.5;
        let top = region.min.y as f32 + 0.5;
        let bottom = region.max.y as f32 - 0.5;
        let (a, b) = match kind {
            DiagonalType::LeftToRight => ((left, top), (right, bottom)),
            DiagonalType::RightToLeft => ((right, top), (left, bottom)),
        };

        let half = width as f32 / 2.0 + DIAGONAL_TOLERANCE;
        for p in region.points() {
            let centre = (p.x as f32 + 0.5, p.y as f32 + 0.5);
            if distance_to_segment(centre, a, b) <= half {
                bc.set_pixel(p, &opts.cell_style)?;
            }
        }
        Ok(())
    }
}
