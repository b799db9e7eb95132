//! Pure calculation functions for output dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Empirical correction for monospace glyph cells being taller than wide.
///
/// A naive pixel-to-character mapping renders vertically stretched; scaling
/// the row count by this factor restores the source aspect ratio in a
/// terminal or text editor.
pub const CHAR_ASPECT_CORRECTION: f64 = 0.55;

/// Calculate the resize target for a requested output width.
///
/// Height is `floor(src_h / src_w * width * 0.55)`, clamped to at least one
/// row so extremely wide sources still render a line. The source width must
/// be positive — the decoder rejects zero-dimension images at open time.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height) in pixels
/// * `width` - Requested output width in characters
///
/// # Returns
/// * `(width, height)` - Resize target in characters
pub fn target_dimensions(source: (u32, u32), width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    debug_assert!(src_w > 0, "decoder must reject zero-width images");

    let aspect = src_h as f64 / src_w as f64;
    let height = (aspect * width as f64 * CHAR_ASPECT_CORRECTION).floor() as u32;
    (width, height.max(1))
}
