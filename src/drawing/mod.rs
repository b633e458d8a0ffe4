//! Geometric drawing of display segments
//!
//! This module provides pixel-exact rendering of:
//! - Horizontal and vertical segments with sloped ends
//! - Diagonal segments between two opposite corners of a region
//!
//! Segments are plotted procedurally onto a braille canvas so that
//! adjoining segments form clean diagonal seams at any display size.

pub mod geometry;
pub mod segment;

// Re-export commonly used items
pub use geometry::{distance_to_segment, with_ratio};
pub use segment::{
    DiagonalOptions, DiagonalType, HvOptions, Rasterizer, SegmentRasterizer, SegmentType,
};
