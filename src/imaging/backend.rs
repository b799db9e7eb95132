//! Image decoding backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the converter needs
//! from a decoder: identify (dimensions without a full decode) and read_luma
//! (decode → resize → grayscale → raw samples).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked, built on the `image` crate.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Single-channel luminance samples in row-major order.
///
/// Invariant: `samples.len() == width * height`, so the grid always splits
/// into exactly `height` rows of `width` samples — line reassembly never
/// truncates or pads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaGrid {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl LumaGrid {
    /// Wrap raw samples. The sample count must match `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Self {
        debug_assert!(width > 0, "luma grid width must be positive");
        debug_assert_eq!(samples.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Iterate rows top to bottom, each exactly `width` samples long.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.samples.chunks_exact(self.width as usize)
    }
}

/// Trait for image decoding backends.
///
/// Both operations take a path rather than an open handle so the decoded
/// image lives entirely inside the call — nothing leaks across failure
/// paths. `Sync` because batch mode fans conversions out with rayon.
pub trait ImageBackend: Sync {
    /// Get source image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode, resize to exactly `target`, convert to single-channel
    /// luminance, and return the raw row-major samples.
    fn read_luma(&self, path: &Path, target: Dimensions) -> Result<LumaGrid, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Mock backend that synthesizes solid-color grids instead of decoding.
    /// Records operations behind a Mutex (not RefCell) so it is Sync and
    /// works with rayon's par_iter.
    pub struct MockBackend {
        pub dimensions: Dimensions,
        pub luma_fill: u8,
        pub fail_paths: Vec<PathBuf>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        ReadLuma {
            source: String,
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        /// Every file identifies as `dimensions` and decodes to a solid
        /// grid of `luma_fill`.
        pub fn solid(dimensions: Dimensions, luma_fill: u8) -> Self {
            Self {
                dimensions,
                luma_fill,
                fail_paths: Vec::new(),
                operations: Mutex::new(Vec::new()),
            }
        }

        /// Make decoding fail for `path`.
        pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
            self.fail_paths.push(path.into());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn fails(&self, path: &Path) -> bool {
            self.fail_paths.iter().any(|p| p == path)
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            if self.fails(path) {
                return Err(BackendError::Decode(format!(
                    "mock decode failure for {}",
                    path.display()
                )));
            }
            Ok(self.dimensions)
        }

        fn read_luma(&self, path: &Path, target: Dimensions) -> Result<LumaGrid, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::ReadLuma {
                source: path.to_string_lossy().to_string(),
                width: target.width,
                height: target.height,
            });

            if self.fails(path) {
                return Err(BackendError::Decode(format!(
                    "mock decode failure for {}",
                    path.display()
                )));
            }
            let len = (target.width as usize) * (target.height as usize);
            Ok(LumaGrid::new(
                target.width,
                target.height,
                vec![self.luma_fill; len],
            ))
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::solid(
            Dimensions {
                width: 800,
                height: 600,
            },
            0,
        );

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_synthesizes_solid_grid_at_target_size() {
        let backend = MockBackend::solid(
            Dimensions {
                width: 100,
                height: 100,
            },
            200,
        );

        let grid = backend
            .read_luma(
                Path::new("/test/image.png"),
                Dimensions {
                    width: 8,
                    height: 3,
                },
            )
            .unwrap();

        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.samples().len(), 24);
        assert!(grid.samples().iter().all(|&s| s == 200));
    }

    #[test]
    fn mock_fails_for_registered_path() {
        let backend = MockBackend::solid(
            Dimensions {
                width: 10,
                height: 10,
            },
            0,
        )
        .failing_on("/bad.png");

        let err = backend.identify(Path::new("/bad.png")).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn luma_grid_rows_split_exactly() {
        let grid = LumaGrid::new(3, 2, vec![1, 2, 3, 4, 5, 6]);
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2, 3][..], &[4u8, 5, 6][..]]);
    }
}
