//! Global constants for segdisp
//!
//! Consolidates sizing, geometry, and Unicode range constants
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Display Size Constants
// ============================================================================

/// Smallest valid amount of columns in a cell area
pub const MIN_COLS: i32 = 6;

/// Smallest valid amount of rows in a cell area
pub const MIN_ROWS: i32 = 5;

/// Desired width:height ratio of a single segment display
pub const ASPECT_RATIO: (i32, i32) = (3, 5);

// ============================================================================
// Braille Constants
// ============================================================================

/// Braille pixel columns per cell
pub const BRAILLE_COL_MULT: i32 = 2;

/// Braille pixel rows per cell
pub const BRAILLE_ROW_MULT: i32 = 4;

/// Braille patterns range (U+2800 - U+28FF)
pub const BRAILLE_RANGE_START: u32 = 0x2800;
pub const BRAILLE_RANGE_END: u32 = 0x28FF;

// ============================================================================
// Segment Geometry Constants
// ============================================================================

/// Segment thickness relative to the display width, in percent
pub const SEGMENT_WIDTH_PERC: i32 = 9;

/// Segments of this thickness or less are drawn without slopes when requested
pub const SKIP_SLOPES_THRESHOLD: i32 = 2;

// ============================================================================
// Helper Functions for Unicode Range Checks
// ============================================================================

/// Check if a code point is a Braille pattern
#[inline]
pub const fn is_braille(cp: u32) -> bool {
    cp >= BRAILLE_RANGE_START && cp <= BRAILLE_RANGE_END
}
