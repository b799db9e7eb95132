//! # asciiartify
//!
//! Convert raster images to ASCII art. A single image becomes a text file
//! (or stdout); a directory of images becomes a directory of `.txt` files.
//!
//! # Architecture: Three-Step Pipeline
//!
//! Every conversion is the same three pure steps, wrapped around the `image`
//! crate's decoding:
//!
//! ```text
//! 1. Resize     source pixels → width columns, aspect-corrected rows
//! 2. Grayscale  resized image → luminance samples in [0, 255]
//! 3. Map        each sample → one of 10 glyphs, reassembled into lines
//! ```
//!
//! The resize height is `floor(h/w * width * 0.55)` — the 0.55 compensates
//! for monospace glyph cells being taller than wide, so the art keeps the
//! source's apparent aspect ratio.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Decoder seam: [`imaging::ImageBackend`] trait, dimension math, `image`-crate backend |
//! | [`palette`] | The 10-glyph dark-to-light palette and bucket mapping |
//! | [`render`] | Row-major glyph mapping and line reassembly |
//! | [`convert`] | Single-file conversion and sink writing |
//! | [`batch`] | Directory enumeration, format allow-list, per-file isolation |
//! | [`config`] | Optional TOML defaults, CLI-over-file-over-default resolution |
//! | [`runlog`] | Injected append-only `asciiartify.log` writer |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Decoder Behind a Trait
//!
//! All pixel work — decoding, resampling, RGB-to-luminance weights — is the
//! `image` crate's concern, reached through the [`imaging::ImageBackend`]
//! trait. The pipeline logic is backend-agnostic, so unit tests drive it
//! with a mock that synthesizes luminance grids instead of decoding files.
//!
//! ## Clamped Bucket Mapping
//!
//! With the default bucket width of 25, a pure-white sample (255) computes
//! palette index 10 against a 10-entry palette. The index is clamped to the
//! last glyph — see [`palette::glyph_for`].
//!
//! ## Per-File Isolation in Batch Mode
//!
//! A file that fails to decode or write is recorded in the batch report and
//! logged; sibling files always continue. Only an unreadable input directory
//! or an uncreatable output directory aborts a batch run.
//!
//! ## Injected Run Log
//!
//! Batch mode appends `timestamp - LEVEL - message` lines to
//! `asciiartify.log` through a [`runlog::RunLog`] handle passed down the
//! call tree — there is no process-global logger to configure.

pub mod batch;
pub mod config;
pub mod convert;
pub mod imaging;
pub mod output;
pub mod palette;
pub mod render;
pub mod runlog;

#[cfg(test)]
pub(crate) mod test_helpers;
