//! Pure Rust decoding backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (PNG, JPEG, BMP, GIF, TIFF) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Grayscale | `image::DynamicImage::to_luma8` |

use super::backend::{BackendError, Dimensions, ImageBackend, LumaGrid};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::Decode(format!("Failed to decode {}: {}", path.display(), e))
        })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::Decode(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn read_luma(&self, path: &Path, target: Dimensions) -> Result<LumaGrid, BackendError> {
        let image = load_image(path)?;
        let resized = image.resize_exact(target.width, target.height, FilterType::Lanczos3);
        let luma = resized.to_luma8();
        Ok(LumaGrid::new(target.width, target.height, luma.into_raw()))
    }
}
