//! smd_converter - Sega Genesis/Mega Drive ROM conversion utility
//!
//! Converts interleaved SMD cartridge dumps into the linear BIN format that
//! emulators expect, or shows the cartridge header embedded in a dump.
//!
//! ```bash
//! # Convert dumps into the current directory
//! smd_converter sonic.smd ghouls.smd
//!
//! # Convert into a target directory, overwriting existing output
//! smd_converter -o roms/ -f warn *.smd
//!
//! # Show cartridge headers without converting
//! smd_converter --info sonic.smd
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{error, warn};

use smd_converter::{
    show_info, Converter, FileCheckAction, FormatValidator, PolicyDecision, RomFormat,
};

/// Sega Genesis ROM conversion utility
#[derive(Parser)]
#[command(name = "smd_converter")]
#[command(about = "Sega Genesis ROM conversion utility")]
#[command(version)]
struct Cli {
    /// (SMD) Files to convert. Output file names will have the .bin
    /// extension (replacing the .smd extension, if it exists).
    #[arg(value_name = "files", required = true)]
    files: Vec<PathBuf>,

    /// Show information about the file(s) instead of doing conversion(s).
    #[arg(short, long)]
    info: bool,

    /// Performing checks of the ROM formats. "stop" [default] will stop the
    /// program if any ROM format check fails, whereas "warn" will simply
    /// issue a warning and attempt to continue. "skip" will skip performing
    /// any checks at all.
    #[arg(short, long, value_name = "checkOpt", default_value = "stop")]
    checks: String,

    /// Action to perform if an output file already exists. "stop" will stop
    /// the program when an output file name is found to already exist.
    /// "warn" will issue a warning and overwrite the file. "skip" [default]
    /// will issue a warning and skip writing the output file.
    #[arg(short, long, value_name = "fileAction", default_value = "skip")]
    file_collision: String,

    /// Specifies the output directory. Default is current working directory.
    /// This option is ignored if --info is specified.
    #[arg(short, long, value_name = "outdir", default_value = ".")]
    outdir: PathBuf,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Bad or missing arguments exit 1; --help and --version exit 0
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    run(cli)
}

/// Resolve a policy flag value, showing full help for unrecognized strings
fn parse_action(value: &str, flag: &str) -> Option<FileCheckAction> {
    match FileCheckAction::parse(value) {
        FileCheckAction::Unset => {
            error!("unrecognized {} action: {}", flag, value);
            Cli::command().print_long_help().ok();
            None
        }
        action => Some(action),
    }
}

fn run(cli: Cli) -> ExitCode {
    let checks = match parse_action(&cli.checks, "checks") {
        Some(action) => action,
        None => return ExitCode::from(1),
    };
    let on_collision = match parse_action(&cli.file_collision, "file-collision") {
        Some(action) => action,
        None => return ExitCode::from(1),
    };

    // SMD format checks run before either action, info included
    if checks == FileCheckAction::Skip {
        println!("Skipping SMD format checks...");
    } else {
        let validator = FormatValidator::new(RomFormat::Smd);
        if !validator.check_files(&cli.files) {
            match checks.decide() {
                PolicyDecision::Abort => {
                    println!("Stopping due to failed SMD format check on one or more files");
                    return ExitCode::from(2);
                }
                PolicyDecision::Continue => {
                    warn!("one or more files failed SMD format check; continuing...");
                }
                // Skip bypassed the checks above and never reaches here
                PolicyDecision::SkipFile => {}
            }
        }
    }

    if cli.info {
        show_info(&cli.files);
    } else {
        let converter = Converter::new(cli.outdir.clone(), on_collision);
        if let Err(e) = converter.convert_files(&cli.files) {
            error!("{}", e);
            println!("Stopping due to error writing an output file");
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}
