//! CLI output formatting.
//!
//! Each surface has a `format_*` function (returns strings) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.
//!
//! ```text
//! a.png -> out/a.txt (100x55)
//! b.txt: skipped (unsupported extension)
//! c.jpg: cannot decode c.jpg: Decode failed: ...
//! Converted 1, skipped 1, failed 1
//! ```

use crate::batch::{BatchReport, FileOutcome};
use crate::convert::Converted;
use std::path::Path;

/// Display a path by its final component; fall back to the whole path.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Success notice for a single-file conversion to a file sink.
pub fn format_converted(output: &Path, converted: &Converted) -> String {
    format!(
        "ASCII art written to {} ({}x{})",
        output.display(),
        converted.size.width,
        converted.size.height
    )
}

pub fn print_converted(output: &Path, converted: &Converted) {
    println!("{}", format_converted(output, converted));
}

/// One line per file in listing order, then a summary line.
pub fn format_batch_report(report: &BatchReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .outcomes
        .iter()
        .map(|outcome| match outcome {
            FileOutcome::Converted {
                input,
                output,
                size,
            } => format!(
                "{} -> {} ({}x{})",
                file_name(input),
                output.display(),
                size.width,
                size.height
            ),
            FileOutcome::Skipped { input } => {
                format!("{}: skipped (unsupported extension)", file_name(input))
            }
            FileOutcome::Failed { input, error } => {
                format!("{}: {error}", file_name(input))
            }
        })
        .collect();

    lines.push(format!(
        "Converted {}, skipped {}, failed {}",
        report.converted(),
        report.skipped(),
        report.failed()
    ));
    lines
}

pub fn print_batch_report(report: &BatchReport) {
    for line in format_batch_report(report) {
        println!("{line}");
    }
}
