//! Braille sub-resolution canvas
//!
//! Every terminal cell is split into a 2x4 grid of dots that map onto the
//! Unicode Braille Patterns block (U+2800 - U+28FF):
//!
//! ```text
//!   col 0  col 1
//!   0x01   0x08    row 0
//!   0x02   0x10    row 1
//!   0x04   0x20    row 2
//!   0x40   0x80    row 3
//! ```
//!
//! Pixel coordinates are zero-based and relative to the canvas, so a canvas
//! built from a `cols x rows` cell area has `cols*2 x rows*4` pixels.

use log::trace;

use super::{CanvasError, CellStyle, Point, Rect, Surface};
use crate::constants::{BRAILLE_COL_MULT, BRAILLE_RANGE_START, BRAILLE_ROW_MULT};

/// Dot bits indexed by [row][col] inside one cell
const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Canvas addressable at braille dot resolution
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    /// Cell area this canvas gets copied onto
    cell_area: Rect,
    /// Dot bits per cell, row-major
    dots: Vec<u8>,
    /// Style of the last pixel set in each cell
    styles: Vec<CellStyle>,
}

impl BrailleCanvas {
    /// Create blank canvas for the provided cell area
    pub fn new(cell_area: Rect) -> Result<Self, CanvasError> {
        if cell_area.is_empty() {
            return Err(CanvasError::EmptyArea(cell_area));
        }
        // Pixel coordinates must stay addressable as well
        let len = cell_area
            .dx()
            .checked_mul(BRAILLE_COL_MULT)
            .and(cell_area.dy().checked_mul(BRAILLE_ROW_MULT))
            .and(cell_area.area_len())
            .ok_or(CanvasError::TooLarge(cell_area))? as usize;
        Ok(Self {
            cell_area,
            dots: vec![0; len],
            styles: vec![CellStyle::default(); len],
        })
    }

    /// Pixel area, always starting at (0,0)
    pub fn area(&self) -> Rect {
        Rect::with_size(
            0,
            0,
            self.cell_area.dx() * BRAILLE_COL_MULT,
            self.cell_area.dy() * BRAILLE_ROW_MULT,
        )
    }

    /// Cell area the canvas was created for
    pub fn cell_area(&self) -> Rect {
        self.cell_area
    }

    /// Cell index and dot bit of a pixel
    #[inline]
    fn locate(&self, p: Point) -> Result<(usize, u8), CanvasError> {
        let area = self.area();
        if !area.contains(p) {
            return Err(CanvasError::OutOfBounds { point: p, area });
        }
        let col = p.x / BRAILLE_COL_MULT;
        let row = p.y / BRAILLE_ROW_MULT;
        let idx = (row * self.cell_area.dx() + col) as usize;
        let bit = DOT_BITS[(p.y % BRAILLE_ROW_MULT) as usize][(p.x % BRAILLE_COL_MULT) as usize];
        Ok((idx, bit))
    }

    /// Turn a pixel on, styling the cell that contains it
    pub fn set_pixel(&mut self, p: Point, style: &CellStyle) -> Result<(), CanvasError> {
        let (idx, bit) = self.locate(p)?;
        self.dots[idx] |= bit;
        self.styles[idx] = *style;
        Ok(())
    }

    /// Turn a pixel off
    pub fn clear_pixel(&mut self, p: Point) -> Result<(), CanvasError> {
        let (idx, bit) = self.locate(p)?;
        self.dots[idx] &= !bit;
        Ok(())
    }

    /// Check whether a pixel is on
    pub fn is_set(&self, p: Point) -> Result<bool, CanvasError> {
        let (idx, bit) = self.locate(p)?;
        Ok(self.dots[idx] & bit != 0)
    }

    /// Number of pixels that are on
    pub fn count_set(&self) -> u32 {
        self.dots.iter().map(|d| d.count_ones()).sum()
    }

    /// Character for a cell: braille pattern when any dot is on, blank otherwise
    #[inline]
    fn cell_char(bits: u8) -> char {
        if bits == 0 {
            return ' ';
        }
        // 0x2800 + u8 is always a valid braille code point
        char::from_u32(BRAILLE_RANGE_START + bits as u32).unwrap_or(' ')
    }

    /// Copy every cell of the canvas onto the surface.
    ///
    /// Cells without dots are written as blanks with default style, so the
    /// target area never keeps stale content. Nothing is written unless the
    /// whole cell area fits the surface.
    pub fn copy_to<S: Surface + ?Sized>(&self, dst: &mut S) -> Result<(), CanvasError> {
        let dst_area = dst.area();
        if !dst_area.contains_rect(&self.cell_area) {
            return Err(CanvasError::RegionOutside {
                region: self.cell_area,
                area: dst_area,
            });
        }
        trace!("copy braille canvas {} onto surface {}", self.cell_area, dst_area);

        let blank = CellStyle::default();
        for (i, p) in self.cell_area.points().enumerate() {
            let bits = self.dots[i];
            let style = if bits == 0 { &blank } else { &self.styles[i] };
            dst.set_cell(p, Self::cell_char(bits), style)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CellCanvas;
    use crate::constants::is_braille;

    #[test]
    fn test_pixel_area_uses_multipliers() {
        let bc = BrailleCanvas::new(Rect::new(3, 2, 9, 7)).unwrap();
        assert_eq!(bc.area(), Rect::new(0, 0, 12, 20));
    }

    #[test]
    fn test_dot_bits_follow_unicode_layout() {
        let mut bc = BrailleCanvas::new(Rect::new(0, 0, 1, 1)).unwrap();
        let style = CellStyle::default();
        bc.set_pixel(Point::new(0, 0), &style).unwrap();
        bc.set_pixel(Point::new(1, 3), &style).unwrap();
        let mut cvs = CellCanvas::new(Rect::new(0, 0, 1, 1)).unwrap();
        bc.copy_to(&mut cvs).unwrap();
        let ch = cvs.cell(Point::new(0, 0)).unwrap().ch;
        assert!(is_braille(ch as u32));
        assert_eq!(ch, '\u{2881}');
    }

    #[test]
    fn test_set_clear_pixel() {
        let mut bc = BrailleCanvas::new(Rect::new(0, 0, 2, 2)).unwrap();
        let p = Point::new(3, 5);
        bc.set_pixel(p, &CellStyle::default()).unwrap();
        assert!(bc.is_set(p).unwrap());
        assert_eq!(bc.count_set(), 1);
        bc.clear_pixel(p).unwrap();
        assert!(!bc.is_set(p).unwrap());
        assert_eq!(bc.count_set(), 0);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let mut bc = BrailleCanvas::new(Rect::new(0, 0, 1, 1)).unwrap();
        assert!(matches!(
            bc.set_pixel(Point::new(2, 0), &CellStyle::default()),
            Err(CanvasError::OutOfBounds { .. })
        ));
        assert!(bc.is_set(Point::new(-1, 0)).is_err());
    }

    #[test]
    fn test_new_rejects_unaddressable_pixels() {
        // One row of cells, but too wide for the pixel coordinates
        let area = Rect::new(0, 0, i32::MAX / 2 + 1, 1);
        assert!(matches!(BrailleCanvas::new(area), Err(CanvasError::TooLarge(a)) if a == area));
    }

    #[test]
    fn test_copy_to_overwrites_stale_cells() {
        let mut cvs = CellCanvas::new(Rect::new(0, 0, 2, 1)).unwrap();
        cvs.set_cell(Point::new(1, 0), 'z', &CellStyle::default()).unwrap();
        let bc = BrailleCanvas::new(Rect::new(0, 0, 2, 1)).unwrap();
        bc.copy_to(&mut cvs).unwrap();
        assert_eq!(cvs.lines(), vec!["  ".to_string()]);
    }

    #[test]
    fn test_copy_to_rejects_smaller_surface() {
        let mut cvs = CellCanvas::new(Rect::new(0, 0, 2, 2)).unwrap();
        cvs.set_cell(Point::new(0, 0), 'z', &CellStyle::default()).unwrap();
        let bc = BrailleCanvas::new(Rect::new(0, 0, 3, 2)).unwrap();
        assert!(matches!(
            bc.copy_to(&mut cvs),
            Err(CanvasError::RegionOutside { .. })
        ));
        // Untouched
        assert_eq!(cvs.cell(Point::new(0, 0)).unwrap().ch, 'z');
    }
}
