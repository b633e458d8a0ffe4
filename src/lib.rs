//! segdisp - 16-segment display glyphs for terminal canvases
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   Display (segment state + options)      │
//! ├──────────────────────────────────────────┤
//! │   required() → Attributes (placement)    │
//! │                     ↓                    │
//! │   Rasterizer → BrailleCanvas (2x4 dots)  │
//! │                     ↓                    │
//! │   copy_to → Surface (CellCanvas, ...)    │
//! └──────────────────────────────────────────┘
//! ```

pub mod canvas;
pub mod config;
pub mod constants;
pub mod drawing;
pub mod error;
pub mod sixteen;
pub mod utils;

pub use canvas::{CellAttrs, CellCanvas, CellStyle, Color, Point, Rect, Surface};
pub use constants::{ASPECT_RATIO, MIN_COLS, MIN_ROWS};
pub use error::{Error, Result};
pub use sixteen::{
    all_segments, required, sanitize, segment_name, supports_chars, Display, DisplayOptions,
    Segment,
};
