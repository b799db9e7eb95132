//! Directory conversion: enumerate, classify, convert each file independently.
//!
//! ## Enumeration
//!
//! One level deep, regular files only, sorted by name so runs and reports
//! are deterministic regardless of filesystem listing order. Every entry is
//! classified exactly once at the listing boundary into a
//! [`SupportedFormat`] tag or an informational skip.
//!
//! ## Isolation
//!
//! Each file converts independently: a decode or write failure is recorded
//! in the [`BatchReport`] and never aborts sibling files. Files are fanned
//! out with [rayon](https://docs.rs/rayon); outcomes are assembled back in
//! listing order.

use crate::convert::{self, ConvertError, ConvertOptions};
use crate::imaging::{Dimensions, ImageBackend};
use crate::runlog::RunLog;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output directory when batch mode is invoked without `-o`.
pub const DEFAULT_OUTPUT_DIR: &str = "output_ascii";

/// Raster formats the converter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
}

impl SupportedFormat {
    /// Classify a file extension, ASCII case-insensitively. `jpg` and
    /// `jpeg` are the same format; anything else is unsupported.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("cannot read input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-file result of a batch run.
#[derive(Debug)]
pub enum FileOutcome {
    Converted {
        input: PathBuf,
        output: PathBuf,
        size: Dimensions,
    },
    /// Extension outside the supported set — informational, not an error.
    Skipped { input: PathBuf },
    Failed {
        input: PathBuf,
        error: ConvertError,
    },
}

/// Outcomes in listing order, plus summary counts.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Converted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Convert every supported image in `input_dir` into `output_dir`, which is
/// created if absent. Returns the per-file report; only enumeration and
/// output-directory failures abort the run.
pub fn convert_directory(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    options: ConvertOptions,
    log: &RunLog,
) -> Result<BatchReport, BatchError> {
    let files = list_files(input_dir)?;

    std::fs::create_dir_all(output_dir).map_err(|source| BatchError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let outcomes = files
        .par_iter()
        .map(|path| convert_entry(backend, path, output_dir, options, log))
        .collect();

    Ok(BatchReport { outcomes })
}

/// Regular files in `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = std::fs::read_dir(dir).map_err(|source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Derived output path: the input filename with its extension replaced by
/// `.txt`, inside the output directory.
fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".txt");
    output_dir.join(name)
}

fn convert_entry(
    backend: &impl ImageBackend,
    input: &Path,
    output_dir: &Path,
    options: ConvertOptions,
    log: &RunLog,
) -> FileOutcome {
    if SupportedFormat::from_path(input).is_none() {
        log.warning(&format!("skipping unsupported file {}", input.display()));
        return FileOutcome::Skipped {
            input: input.to_path_buf(),
        };
    }

    let output = output_path(input, output_dir);
    match convert::convert_image(backend, input, Some(&output), options) {
        Ok(converted) => {
            log.info(&format!(
                "converted {} -> {}",
                input.display(),
                output.display()
            ));
            FileOutcome::Converted {
                input: input.to_path_buf(),
                output,
                size: converted.size,
            }
        }
        Err(error) => {
            log.error(&format!("failed to convert {}: {error}", input.display()));
            FileOutcome::Failed {
                input: input.to_path_buf(),
                error,
            }
        }
    }
}
