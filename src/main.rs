use asciiartify::imaging::RustBackend;
use asciiartify::{batch, config, convert, output, runlog};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "asciiartify")]
#[command(about = "Convert images to ASCII art")]
#[command(long_about = "\
Convert images to ASCII art

Pixel brightness maps to a fixed 10-glyph palette, dark to light:
@ % # * + = - : . and space. Output width is set in characters; height
follows the source aspect ratio, corrected for monospace glyph cells.

Modes:

  asciiartify photo.png                 # print to stdout
  asciiartify photo.png -o photo.txt    # write a text file
  asciiartify photos/ -o art/           # convert a whole directory

Batch mode converts every supported image (png, jpg, jpeg, bmp, gif,
tiff) into <name>.txt files in the output directory (default:
output_ascii), skips other files, and appends a run log to
asciiartify.log. A failing file never aborts its siblings.

Defaults can be set in an asciiartify.toml (see --config); command-line
flags take precedence.")]
#[command(version)]
struct Cli {
    /// Image file, or directory of images, to convert
    input: PathBuf,

    /// Output text file (single image) or directory (batch).
    /// Defaults to stdout for a file, `output_ascii` for a directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width of the ASCII art in characters [default: 100]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// TOML config file with default width and bucket settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file_config = match config::load(cli.config.as_deref()) {
        Ok(file_config) => file_config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let options = config::resolve_options(&file_config, cli.width);
    let backend = RustBackend::new();

    if cli.input.is_file() {
        convert_single(&backend, &cli.input, cli.output.as_deref(), options)
    } else if cli.input.is_dir() {
        let output_dir = cli
            .output
            .unwrap_or_else(|| PathBuf::from(batch::DEFAULT_OUTPUT_DIR));
        convert_batch(&backend, &cli.input, &output_dir, options)
    } else {
        eprintln!(
            "Input path '{}' is neither a file nor a directory.",
            cli.input.display()
        );
        ExitCode::FAILURE
    }
}

/// Single-file mode. Conversion errors are reported but leave the exit
/// status at zero — only path validation is fatal.
fn convert_single(
    backend: &RustBackend,
    input: &Path,
    output: Option<&Path>,
    options: convert::ConvertOptions,
) -> ExitCode {
    match convert::convert_image(backend, input, output, options) {
        Ok(converted) => {
            if let Some(path) = output {
                output::print_converted(path, &converted);
            }
        }
        Err(error) => eprintln!("{error}"),
    }
    ExitCode::SUCCESS
}

/// Batch mode. Per-file failures land in the report; only an unusable
/// input or output directory fails the run.
fn convert_batch(
    backend: &RustBackend,
    input_dir: &Path,
    output_dir: &Path,
    options: convert::ConvertOptions,
) -> ExitCode {
    let log = runlog::RunLog::to_file(Path::new(runlog::LOG_FILE_NAME))
        .unwrap_or_else(|_| runlog::RunLog::disabled());

    match batch::convert_directory(backend, input_dir, output_dir, options, &log) {
        Ok(report) => {
            output::print_batch_report(&report);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
