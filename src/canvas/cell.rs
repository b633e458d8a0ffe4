//! Character cell canvas
//!
//! 2D cell array that receives rendered glyphs.
//! Provides cell access plus plain-text and ANSI output.

use std::fmt::{self, Write as _};

use bitflags::bitflags;
use log::trace;

use super::{CanvasError, CellStyle, Point, Rect, Surface};

/// Text color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal default color
    #[default]
    Default,
    /// 256-color palette index
    Indexed(u8),
    /// True Color (24bit RGB)
    Rgb(u8, u8, u8),
}

impl Color {
    /// Append the SGR parameters selecting this color
    fn write_sgr(&self, out: &mut String, is_foreground: bool) {
        let base = if is_foreground { 38 } else { 48 };
        // Writing into a String cannot fail
        let _ = match self {
            Color::Default => write!(out, ";{}", base + 1),
            Color::Indexed(idx) => write!(out, ";{};5;{}", base, idx),
            Color::Rgb(r, g, b) => write!(out, ";{};2;{};{};{}", base, r, g, b),
        };
    }
}

bitflags! {
    /// Cell character attributes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellAttrs: u16 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const BLINK     = 0b0001_0000;
        const INVERSE   = 0b0010_0000;
    }
}

impl CellAttrs {
    /// SGR codes for the set attributes, in bit order
    fn sgr_codes(&self) -> impl Iterator<Item = u8> + '_ {
        [
            (CellAttrs::BOLD, 1),
            (CellAttrs::DIM, 2),
            (CellAttrs::ITALIC, 3),
            (CellAttrs::UNDERLINE, 4),
            (CellAttrs::BLINK, 5),
            (CellAttrs::INVERSE, 7),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

/// Data for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Rectangular grid of cells
#[derive(Debug, Clone)]
pub struct CellCanvas {
    area: Rect,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Create blank canvas covering `area`
    pub fn new(area: Rect) -> Result<Self, CanvasError> {
        if area.is_empty() {
            return Err(CanvasError::EmptyArea(area));
        }
        let len = area.area_len().ok_or(CanvasError::TooLarge(area))? as usize;
        Ok(Self {
            area,
            cells: vec![Cell::default(); len],
        })
    }

    /// Linear index of a point, None when outside
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.area.contains(p) {
            return None;
        }
        let col = p.x - self.area.min.x;
        let row = p.y - self.area.min.y;
        Some((row * self.area.dx() + col) as usize)
    }

    /// Cell at the point
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Reset all cells to blanks
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Row contents as strings, top to bottom
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.area.dx() as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }

    /// Render with SGR escape sequences, one line per row
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(self.area.dx() as usize) {
            let mut current: Option<CellStyle> = None;
            for cell in row {
                if current != Some(cell.style) {
                    push_sgr(&mut out, &cell.style);
                    current = Some(cell.style);
                }
                out.push(cell.ch);
            }
            out.push_str("\x1b[0m\n");
        }
        out
    }
}

/// Append a full SGR sequence (reset + attributes + colors)
fn push_sgr(out: &mut String, style: &CellStyle) {
    out.push_str("\x1b[0");
    for code in style.attrs.sgr_codes() {
        let _ = write!(out, ";{}", code);
    }
    style.fg.write_sgr(out, true);
    style.bg.write_sgr(out, false);
    out.push('m');
}

impl Surface for CellCanvas {
    fn area(&self) -> Rect {
        self.area
    }

    fn set_cell(&mut self, p: Point, ch: char, style: &CellStyle) -> Result<(), CanvasError> {
        let idx = self.index(p).ok_or(CanvasError::OutOfBounds {
            point: p,
            area: self.area,
        })?;
        trace!("set_cell {} {:?}", p, ch);
        self.cells[idx] = Cell { ch, style: *style };
        Ok(())
    }
}

impl fmt::Display for CellCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
