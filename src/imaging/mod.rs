//! Image decoding and dimension math.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode** | `image` crate (pure Rust decoders) |
//! | **Resize** | `resize_exact` + Lanczos3 |
//! | **Grayscale** | `DynamicImage::to_luma8` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Backend**: [`ImageBackend`] trait + shared types
//! - **RustBackend**: the `image`-crate implementation

pub mod backend;
pub mod calculations;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, LumaGrid};
pub use rust_backend::RustBackend;
