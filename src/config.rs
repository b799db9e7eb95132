//! Optional TOML configuration for converter defaults.
//!
//! Resolution order, highest first: CLI flags, config file, built-in
//! defaults (width 100, bucket width 25). An explicit `--config` path must
//! exist and parse; with no explicit path, an `asciiartify.toml` in the
//! working directory is used when present and silently skipped otherwise.
//!
//! ```toml
//! # asciiartify.toml
//! width = 120
//! bucket_width = 25
//! ```

use crate::convert::{ConvertOptions, DEFAULT_WIDTH};
use crate::palette::BucketWidth;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = "asciiartify.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default output width in characters.
    pub width: Option<u32>,
    /// Default luminance bucket width.
    pub bucket_width: Option<u8>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration from `explicit`, or from the default working-directory
/// file, or fall back to an empty config.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    match explicit {
        Some(path) => read_file(path),
        None => {
            let default = Path::new(CONFIG_FILE_NAME);
            if default.exists() {
                read_file(default)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge CLI flags over file values over built-in defaults.
pub fn resolve_options(file: &FileConfig, cli_width: Option<u32>) -> ConvertOptions {
    let width = cli_width.or(file.width).unwrap_or(DEFAULT_WIDTH);
    let bucket = file.bucket_width.map(BucketWidth::new).unwrap_or_default();
    ConvertOptions::new(width, bucket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("asciiartify.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn parses_both_fields() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "width = 80\nbucket_width = 32\n");

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.width, Some(80));
        assert_eq!(config.bucket_width, Some(32));
    }

    #[test]
    fn fields_are_optional() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "width = 80\n");

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.width, Some(80));
        assert_eq!(config.bucket_width, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "widht = 80\n");

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_path_is_a_read_error() {
        let err = load(Some(Path::new("/no/such/asciiartify.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn cli_flag_beats_file_value() {
        let file = FileConfig {
            width: Some(80),
            bucket_width: None,
        };
        let options = resolve_options(&file, Some(42));
        assert_eq!(options.width, 42);
    }

    #[test]
    fn file_value_beats_built_in_default() {
        let file = FileConfig {
            width: Some(80),
            bucket_width: Some(10),
        };
        let options = resolve_options(&file, None);
        assert_eq!(options.width, 80);
        assert_eq!(options.bucket.value(), 10);
    }

    #[test]
    fn built_in_defaults_apply_last() {
        let options = resolve_options(&FileConfig::default(), None);
        assert_eq!(options.width, 100);
        assert_eq!(options.bucket.value(), 25);
    }

    #[test]
    fn zero_bucket_width_in_file_is_clamped() {
        let file = FileConfig {
            width: None,
            bucket_width: Some(0),
        };
        let options = resolve_options(&file, None);
        assert_eq!(options.bucket.value(), 1);
    }
}
