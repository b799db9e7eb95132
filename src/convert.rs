//! Single-file conversion: decode → resize → grayscale → glyph mapping → sink.
//!
//! The pipeline is backend-generic so tests can drive it with a mock decoder.
//! Errors are explicit [`ConvertError`] kinds caught at this boundary by
//! batch mode, which records them and moves on to the next file.

use crate::imaging::{BackendError, Dimensions, ImageBackend, calculations};
use crate::palette::BucketWidth;
use crate::render::{self, AsciiArt};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output width when neither the CLI nor a config file sets one.
pub const DEFAULT_WIDTH: u32 = 100;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Knobs for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub width: u32,
    pub bucket: BucketWidth,
}

impl ConvertOptions {
    /// Width is clamped to at least one column.
    pub fn new(width: u32, bucket: BucketWidth) -> Self {
        Self {
            width: width.max(1),
            bucket,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            bucket: BucketWidth::default(),
        }
    }
}

/// Successful conversion summary: the art's size in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converted {
    pub size: Dimensions,
}

/// Convert one image and write the result to `output`, or to stdout when
/// `output` is `None`. An existing output file is overwritten.
pub fn convert_image(
    backend: &impl ImageBackend,
    input: &Path,
    output: Option<&Path>,
    options: ConvertOptions,
) -> Result<Converted, ConvertError> {
    let art = render_file(backend, input, options)?;
    match output {
        Some(path) => write_art(&art, path)?,
        None => print_art(&art)?,
    }
    Ok(Converted {
        size: Dimensions {
            width: options.width,
            height: art.line_count() as u32,
        },
    })
}

/// Decode and render without touching any sink.
///
/// The decoded image lives entirely inside the backend calls, so the handle
/// is released on success and failure alike.
pub fn render_file(
    backend: &impl ImageBackend,
    input: &Path,
    options: ConvertOptions,
) -> Result<AsciiArt, ConvertError> {
    let source = backend.identify(input).map_err(|source| ConvertError::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    let (width, height) =
        calculations::target_dimensions((source.width, source.height), options.width);
    let grid = backend
        .read_luma(input, Dimensions { width, height })
        .map_err(|source| ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        })?;
    Ok(render::render(&grid, options.bucket))
}

fn write_art(art: &AsciiArt, path: &Path) -> Result<(), ConvertError> {
    std::fs::write(path, art.to_text()).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn print_art(art: &AsciiArt) -> Result<(), ConvertError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", art.to_text()).map_err(|source| ConvertError::Write {
        path: PathBuf::from("-"),
        source,
    })
}
