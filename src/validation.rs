use std::path::{Path, PathBuf};

use tracing::error;

use crate::errors::{RomError, RomResult};
use crate::format::{detect_format, is_bin, is_smd, RomFormat, HEADER_SIZE};
use crate::io;

/// Batch format checker
///
/// Probes the 512-byte header of each file in a batch against a target
/// format and aggregates the per-file outcomes.
pub struct FormatValidator {
    target: RomFormat,
}

impl FormatValidator {
    pub fn new(target: RomFormat) -> Self {
        Self { target }
    }

    /// Check one file against the target format
    ///
    /// For the SMD check, the "SEGA" magic disqualifies a file even when the
    /// 0xAA/0xBB marker bytes are present, since a BIN image can carry those
    /// by coincidence.
    pub fn check_file(&self, path: &Path) -> RomResult<()> {
        let mut header = [0u8; HEADER_SIZE];
        let mut file = io::open_rom(path)?;
        io::read_exact_buf(&mut file, &mut header, path)?;

        let mismatch = |found| {
            Err(RomError::FormatMismatch {
                path: path.display().to_string(),
                expected: self.target,
                found,
            })
        };

        match self.target {
            RomFormat::Bin => {
                if is_bin(&header) {
                    Ok(())
                } else {
                    mismatch(detect_format(&header))
                }
            }
            RomFormat::Smd => {
                if is_bin(&header) {
                    mismatch(RomFormat::Bin)
                } else if is_smd(&header) {
                    Ok(())
                } else {
                    mismatch(RomFormat::Unknown)
                }
            }
            RomFormat::Unknown => Err(RomError::UnsupportedCheck {
                format: self.target,
            }),
        }
    }

    /// Check every file in the batch, printing a status line per file
    ///
    /// Scans the whole list even after failures and returns true only if all
    /// files passed. An open or read failure counts against that file but
    /// does not stop the scan.
    pub fn check_files(&self, paths: &[PathBuf]) -> bool {
        if self.target == RomFormat::Unknown {
            error!("no format check implemented for {} files", self.target);
            return false;
        }

        let mut all_good = true;
        for path in paths {
            println!(
                "Checking file for {} format: {}",
                self.target,
                path.display()
            );

            match self.check_file(path) {
                Ok(()) => println!("  ...GOOD!"),
                Err(RomError::FormatMismatch {
                    found: RomFormat::Bin,
                    ..
                }) if self.target == RomFormat::Smd => {
                    println!("  ...FAILED! (appears to be BIN format)");
                    all_good = false;
                }
                Err(RomError::FormatMismatch { .. }) => {
                    println!("  ...FAILED!");
                    all_good = false;
                }
                Err(e) => {
                    error!("{}", e);
                    all_good = false;
                }
            }
        }

        all_good
    }
}
