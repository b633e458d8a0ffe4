//! Typed error types for segdisp.
//!
//! Callers can match on the variant to tell apart bad input (segment,
//! character, area) from failures reported by the canvas collaborators.

use std::convert::Infallible;

use thiserror::Error;

use crate::canvas::{CanvasError, Rect};
use crate::constants::{MIN_COLS, MIN_ROWS};
use crate::sixteen::Segment;

/// Top-level error type for the segment display.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw segment value outside of the 16 known segments.
    #[error("unknown segment SegmentUnknown({0})")]
    InvalidSegment(u8),

    /// Character has no entry in the character table.
    #[error("display doesn't support character {ch:?} rune({code})")]
    UnsupportedCharacter {
        /// The rejected character.
        ch: char,
        /// Its code point.
        code: u32,
    },

    /// Cell area smaller than the minimum display size.
    #[error(
        "cell area {area} is too small to draw the segment display, has {cols}x{rows} cells, need at least {}x{} cells",
        MIN_COLS,
        MIN_ROWS
    )]
    AreaTooSmall {
        /// The rejected area.
        area: Rect,
        /// Columns it has.
        cols: i32,
        /// Rows it has.
        rows: i32,
    },

    /// A rasterizer failed while drawing one segment.
    #[error("failed to draw segment {segment}: {source}")]
    Rasterization {
        /// Segment being drawn.
        segment: Segment,
        /// Underlying canvas error.
        #[source]
        source: CanvasError,
    },

    /// Canvas creation or the final copy onto the surface failed.
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

impl Error {
    pub(crate) fn unsupported_character(ch: char) -> Self {
        Error::UnsupportedCharacter {
            ch,
            code: ch as u32,
        }
    }
}

// Lets `Segment` itself satisfy the `TryInto<Segment>` bounds on the mutators
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
