//! Shared test utilities for the asciiartify test suite.

use crate::imaging::{Dimensions, LumaGrid};

/// Shorthand for a `Dimensions` literal.
pub fn dims(width: u32, height: u32) -> Dimensions {
    Dimensions { width, height }
}

/// A grid where every sample has the same luminance.
pub fn solid_grid(width: u32, height: u32, fill: u8) -> LumaGrid {
    LumaGrid::new(width, height, vec![fill; (width as usize) * (height as usize)])
}
