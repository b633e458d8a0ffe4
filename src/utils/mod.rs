//! Utility functions shared across segdisp
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{parse_color, parse_hex_color};
