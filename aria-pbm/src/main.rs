//! aria-pbm - convert an ARIA line map into a plain PBM bitmap
//!
//! ```bash
//! aria-pbm office.map office.pbm
//! ```
//!
//! User-facing messages go to stdout. Diagnostics go through `log` to
//! stderr; set `RUST_LOG=debug` to see bounds, image size and timings.

use aria_pbm::{ConvertConfig, Error, Result, convert_file};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Rasterize the LINES section of an ARIA map into a P1 bitmap
#[derive(Parser, Debug)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// ARIA map file to read
    #[arg(allow_hyphen_values = true)]
    map: PathBuf,

    /// Bitmap file to write
    #[arg(allow_hyphen_values = true)]
    image: PathBuf,
}

/// Parse argv, treating `-h`/`--help` anywhere as a usage request.
///
/// Exactly two operands are accepted. They are always file names, even when
/// they start with `-` or are a bare `--`.
fn parse_args(argv: &[OsString]) -> Result<Args> {
    let program = argv
        .first()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let help_requested = argv.iter().skip(1).any(|a| a == "-h" || a == "--help");
    if help_requested {
        return Err(Error::Usage { program });
    }

    if argv.len() != 3 {
        return Err(Error::Usage { program });
    }

    // Operands go after an explicit separator so clap never reads them as flags
    let operands = [
        argv[0].clone(),
        OsString::from("--"),
        argv[1].clone(),
        argv[2].clone(),
    ];
    Args::try_parse_from(operands).map_err(|e| {
        log::debug!("Argument error: {}", e);
        Error::Usage { program }
    })
}

fn run(argv: &[OsString]) -> Result<()> {
    let args = parse_args(argv)?;
    let config = ConvertConfig::default();

    let summary = convert_file(&args.map, &args.image, &config)?;
    if summary.malformed > 0 {
        log::warn!(
            "{} of {} line records were malformed",
            summary.malformed,
            summary.segments
        );
    }
    log::info!(
        "{} segments -> {}x{} image, {} pixels set",
        summary.segments,
        summary.width,
        summary.height,
        summary.pixels_on
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let argv: Vec<OsString> = std::env::args_os().collect();
    match run(&argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
