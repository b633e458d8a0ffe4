//! 16-segment display
//!
//! Simulates a 16-segment display drawn on a braille canvas. Determines the
//! placement and size of the individual segments and exposes API that turns
//! individual segments on and off or displays ASCII characters.
//!
//! ```text
//!        A1      A2
//!      ------- -------
//!     | \     |     / |
//!     |  \    |    /  |
//!   F |   H   J   K   | B
//!     |    \  |  /    |
//!     |     \ | /     |
//!      -G1---- ----G2-
//!     |     / | \     |
//!     |    /  |  \    |
//!   E |   N   M   L   | C
//!     |  /    |    \  |
//!     | /     |     \ |
//!      ------- -------
//!        D1      D2
//! ```

mod attributes;
mod chars;

use std::fmt;

use log::{debug, trace};

use crate::canvas::{BrailleCanvas, CellStyle, Rect, Surface};
use crate::constants::{
    ASPECT_RATIO, BRAILLE_COL_MULT, BRAILLE_ROW_MULT, MIN_COLS, MIN_ROWS, SKIP_SLOPES_THRESHOLD,
};
use crate::drawing::{
    with_ratio, DiagonalOptions, DiagonalType, HvOptions, Rasterizer, SegmentRasterizer,
    SegmentType,
};
use crate::error::{Error, Result};

pub use attributes::{segment_size, Attributes};
pub use chars::{character_segments, is_supported, sanitize, supports_chars};

/// A single segment of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Segment {
    A1 = 1,
    A2,
    B,
    C,
    D1,
    D2,
    E,
    F,
    G1,
    G2,
    H,
    J,
    K,
    L,
    M,
    N,
}

impl Segment {
    /// Number of segments
    pub const COUNT: usize = 16;

    /// All segments in declaration order
    pub const ALL: [Segment; Segment::COUNT] = [
        Segment::A1,
        Segment::A2,
        Segment::B,
        Segment::C,
        Segment::D1,
        Segment::D2,
        Segment::E,
        Segment::F,
        Segment::G1,
        Segment::G2,
        Segment::H,
        Segment::J,
        Segment::K,
        Segment::L,
        Segment::M,
        Segment::N,
    ];

    /// Canonical name, e.g. "A1"
    pub const fn name(self) -> &'static str {
        match self {
            Segment::A1 => "A1",
            Segment::A2 => "A2",
            Segment::B => "B",
            Segment::C => "C",
            Segment::D1 => "D1",
            Segment::D2 => "D2",
            Segment::E => "E",
            Segment::F => "F",
            Segment::G1 => "G1",
            Segment::G2 => "G2",
            Segment::H => "H",
            Segment::J => "J",
            Segment::K => "K",
            Segment::L => "L",
            Segment::M => "M",
            Segment::N => "N",
        }
    }

    /// Position in [`Segment::ALL`]
    #[inline]
    const fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Segment {
    type Error = Error;

    /// Valid raw values are 1..=16, matching the declaration order
    fn try_from(raw: u8) -> Result<Self> {
        raw.checked_sub(1)
            .and_then(|i| Segment::ALL.get(i as usize))
            .copied()
            .ok_or(Error::InvalidSegment(raw))
    }
}

/// Name of a raw segment value, "SegmentUnknown" when out of range
pub fn segment_name(raw: u8) -> &'static str {
    Segment::try_from(raw).map_or("SegmentUnknown", Segment::name)
}

/// All 16 segments
pub fn all_segments() -> Vec<Segment> {
    Segment::ALL.to_vec()
}

// ============================================================================
// Draw tables
// ============================================================================

/// How one straight segment is drawn
#[derive(Debug, Clone, Copy)]
struct HvDraw {
    segment: Segment,
    kind: SegmentType,
    skip_slopes_lte: i32,
    reverse_slopes: bool,
}

impl HvDraw {
    const fn plain(segment: Segment, kind: SegmentType) -> Self {
        Self {
            segment,
            kind,
            skip_slopes_lte: 0,
            reverse_slopes: false,
        }
    }

    /// Inner segments lose their slopes when thin, a lone peak pixel looks like a stray dot
    const fn skip_thin(segment: Segment, kind: SegmentType) -> Self {
        Self {
            skip_slopes_lte: SKIP_SLOPES_THRESHOLD,
            ..Self::plain(segment, kind)
        }
    }

    /// Segments right of or below the crossing mirror their slopes
    const fn reversed(segment: Segment, kind: SegmentType) -> Self {
        Self {
            reverse_slopes: true,
            ..Self::plain(segment, kind)
        }
    }
}

/// Straight segments in drawing order
const HV_SEGMENTS: [HvDraw; 12] = [
    HvDraw::plain(Segment::A1, SegmentType::Horizontal),
    HvDraw::plain(Segment::A2, SegmentType::Horizontal),
    HvDraw::plain(Segment::F, SegmentType::Vertical),
    HvDraw::skip_thin(Segment::J, SegmentType::Vertical),
    HvDraw::reversed(Segment::B, SegmentType::Vertical),
    HvDraw::skip_thin(Segment::G1, SegmentType::Horizontal),
    HvDraw::skip_thin(Segment::G2, SegmentType::Horizontal),
    HvDraw::plain(Segment::E, SegmentType::Vertical),
    HvDraw::skip_thin(Segment::M, SegmentType::Vertical),
    HvDraw::reversed(Segment::C, SegmentType::Vertical),
    HvDraw::reversed(Segment::D1, SegmentType::Horizontal),
    HvDraw::reversed(Segment::D2, SegmentType::Horizontal),
];

/// Diagonal segments in drawing order
const DIAGONAL_SEGMENTS: [(Segment, DiagonalType); 4] = [
    (Segment::H, DiagonalType::LeftToRight),
    (Segment::K, DiagonalType::RightToLeft),
    (Segment::N, DiagonalType::RightToLeft),
    (Segment::L, DiagonalType::LeftToRight),
];

// ============================================================================
// Sizing
// ============================================================================

/// Smallest cell area that holds one display inside `cell_area`.
///
/// Returns the same area or a smaller one with the same origin when the
/// provided area doesn't have the required aspect ratio.
/// Fails with [`Error::AreaTooSmall`] below [`MIN_COLS`] x [`MIN_ROWS`] cells.
pub fn required(cell_area: Rect) -> Result<Rect> {
    let (cols, rows) = (cell_area.dx(), cell_area.dy());
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(Error::AreaTooSmall {
            area: cell_area,
            cols,
            rows,
        });
    }

    // Beyond these the pixel size no longer fits; the ratio fit only shrinks it
    let px_cols = cols.min(i32::MAX / BRAILLE_COL_MULT) * BRAILLE_COL_MULT;
    let px_rows = rows.min(i32::MAX / BRAILLE_ROW_MULT) * BRAILLE_ROW_MULT;
    let pixels = Rect::with_size(0, 0, px_cols, px_rows);
    let adjusted = with_ratio(pixels, ASPECT_RATIO);

    // Round up to whole cells
    let need_cols = (adjusted.dx() + BRAILLE_COL_MULT - 1) / BRAILLE_COL_MULT;
    let need_rows = (adjusted.dy() + BRAILLE_ROW_MULT - 1) / BRAILLE_ROW_MULT;
    let need = Rect::with_size(cell_area.min.x, cell_area.min.y, need_cols, need_rows);
    debug!("required: {} -> {} ({}x{} pixels)", cell_area, need, adjusted.dx(), adjusted.dy());
    Ok(need)
}

/// Braille canvas for the surface area and its aspect-adjusted pixel area
fn to_braille(cell_area: Rect) -> Result<(BrailleCanvas, Rect)> {
    let area = required(cell_area)?;
    let bc = BrailleCanvas::new(area)?;
    let pixels = with_ratio(bc.area(), ASPECT_RATIO);
    Ok((bc, pixels))
}

// ============================================================================
// Display
// ============================================================================

/// Options applied on construction, [`Display::clear`] and [`Display::draw`].
///
/// Unset fields keep the current value, so later options override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayOptions {
    /// Style of the cells that contain the display
    pub cell_style: Option<CellStyle>,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell style
    pub fn cell_style(mut self, style: CellStyle) -> Self {
        self.cell_style = Some(style);
        self
    }
}

/// State of one 16-segment display.
///
/// Not synchronized; share it across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct Display {
    /// Lit flag per segment, indexed by [`Segment::index`]
    segments: [bool; Segment::COUNT],
    cell_style: CellStyle,
}

impl Display {
    /// Create display with all segments off
    pub fn new(opts: DisplayOptions) -> Self {
        let mut d = Self::default();
        d.apply(opts);
        d
    }

    fn apply(&mut self, opts: DisplayOptions) {
        if let Some(style) = opts.cell_style {
            self.cell_style = style;
        }
    }

    /// Current cell style
    pub fn style(&self) -> CellStyle {
        self.cell_style
    }

    /// Apply options, then turn every segment off
    pub fn clear(&mut self, opts: DisplayOptions) {
        self.apply(opts);
        self.segments = [false; Segment::COUNT];
    }

    /// Turn the segment on. Idempotent.
    ///
    /// Accepts a [`Segment`] or a raw `u8`; raw values outside 1..=16 fail
    /// with [`Error::InvalidSegment`].
    pub fn set_segment<S>(&mut self, s: S) -> Result<()>
    where
        S: TryInto<Segment>,
        Error: From<S::Error>,
    {
        let s = s.try_into()?;
        self.segments[s.index()] = true;
        Ok(())
    }

    /// Turn the segment off. Idempotent.
    pub fn clear_segment<S>(&mut self, s: S) -> Result<()>
    where
        S: TryInto<Segment>,
        Error: From<S::Error>,
    {
        let s = s.try_into()?;
        self.segments[s.index()] = false;
        Ok(())
    }

    /// Flip the segment between on and off
    pub fn toggle_segment<S>(&mut self, s: S) -> Result<()>
    where
        S: TryInto<Segment>,
        Error: From<S::Error>,
    {
        let s = s.try_into()?;
        self.segments[s.index()] = !self.segments[s.index()];
        Ok(())
    }

    /// Check if the segment is on
    #[inline]
    pub fn is_lit(&self, s: Segment) -> bool {
        self.segments[s.index()]
    }

    /// Segments that are on, in declaration order
    pub fn lit_segments(&self) -> Vec<Segment> {
        Segment::ALL.into_iter().filter(|s| self.is_lit(*s)).collect()
    }

    /// Turn on all segments needed to display the character.
    ///
    /// Segments that are already on stay on; call [`Display::clear`] first
    /// for a fresh glyph. Use [`supports_chars`] or [`sanitize`] to make sure
    /// the character is supported.
    pub fn set_character(&mut self, c: char) -> Result<()> {
        let segs = character_segments(c).ok_or_else(|| Error::unsupported_character(c))?;
        for s in segs {
            self.set_segment(*s)?;
        }
        Ok(())
    }

    /// Draw the display onto the surface.
    ///
    /// The surface must be at least [`MIN_COLS`] x [`MIN_ROWS`] cells. Options
    /// override the ones given earlier and stay in effect for later calls.
    pub fn draw<S>(&mut self, surface: &mut S, opts: DisplayOptions) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        self.draw_with(surface, &mut SegmentRasterizer, opts)
    }

    /// Draw the display using the provided rasterizer.
    ///
    /// Segments are rendered onto a private braille canvas first. The surface
    /// is only written in the final copy, so any failure before it leaves the
    /// surface unchanged.
    pub fn draw_with<S, R>(
        &mut self,
        surface: &mut S,
        rasterizer: &mut R,
        opts: DisplayOptions,
    ) -> Result<()>
    where
        S: Surface + ?Sized,
        R: Rasterizer + ?Sized,
    {
        self.apply(opts);

        let (mut bc, pixels) = to_braille(surface.area())?;
        let attr = Attributes::new(pixels);
        let cell_style = self.cell_style;

        for hv in HV_SEGMENTS.iter().filter(|hv| self.is_lit(hv.segment)) {
            let region = attr.segment_area(hv.segment);
            trace!("draw {} in {}", hv.segment, region);
            let hv_opts = HvOptions {
                cell_style,
                skip_slopes_lte: hv.skip_slopes_lte,
                reverse_slopes: hv.reverse_slopes,
            };
            rasterizer
                .hv(&mut bc, region, hv.kind, &hv_opts)
                .map_err(|source| Error::Rasterization {
                    segment: hv.segment,
                    source,
                })?;
        }

        let dia_opts = DiagonalOptions { cell_style };
        for &(segment, kind) in DIAGONAL_SEGMENTS.iter().filter(|(s, _)| self.is_lit(*s)) {
            let region = attr.segment_area(segment);
            trace!("draw {} in {}", segment, region);
            rasterizer
                .diagonal(&mut bc, region, attr.seg_size(), kind, &dia_opts)
                .map_err(|source| Error::Rasterization { segment, source })?;
        }

        bc.copy_to(surface)?;
        Ok(())
    }
}
