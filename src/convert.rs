use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::codec::{decode_block, SMD_BLOCK_SIZE};
use crate::errors::{RomError, RomResult};
use crate::format::HEADER_SIZE;
use crate::io;
use crate::policy::{FileCheckAction, PolicyDecision};

/// Derive the output file name for an input path
///
/// A case-insensitive "smd" extension is replaced with "bin"; any other name
/// keeps its full spelling and gains a ".bin" suffix. The stem keeps its
/// original case either way.
pub fn output_file_name(input: &Path) -> OsString {
    let name = input.file_name().unwrap_or_else(|| OsStr::new(""));
    match input.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("smd") => {
            let mut out = Path::new(name)
                .file_stem()
                .unwrap_or_else(|| OsStr::new(""))
                .to_os_string();
            out.push(".bin");
            out
        }
        _ => {
            let mut out = name.to_os_string();
            out.push(".bin");
            out
        }
    }
}

/// Batch SMD to BIN converter
///
/// Walks a list of input files in order, converting each into the configured
/// output directory. The first fatal condition ends the whole batch; only
/// Skip-policy collisions move on to the next file.
pub struct Converter {
    outdir: PathBuf,
    on_collision: FileCheckAction,
}

impl Converter {
    pub fn new(outdir: PathBuf, on_collision: FileCheckAction) -> Self {
        Self {
            outdir,
            on_collision,
        }
    }

    /// Destination path for one input file
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.outdir.join(output_file_name(input))
    }

    /// Convert every input in order, stopping at the first fatal error
    ///
    /// Output already written for earlier files stays on disk when a later
    /// file aborts the batch.
    pub fn convert_files(&self, inputs: &[PathBuf]) -> RomResult<()> {
        for input in inputs {
            let output = self.output_path(input);
            println!("Converting {}", input.display());
            println!("        to {}", output.display());

            if output.exists() {
                warn!("output file already exists: {}", output.display());
                match self.on_collision.decide() {
                    PolicyDecision::Abort => {
                        return Err(RomError::OutputExists {
                            path: output.display().to_string(),
                        });
                    }
                    PolicyDecision::SkipFile => {
                        println!("  ...skipping!");
                        continue;
                    }
                    PolicyDecision::Continue => {}
                }
            }

            self.convert_one(input, &output)?;
            println!("  Conversion complete!");
        }

        Ok(())
    }

    /// Convert a single file; any error here is fatal to the batch
    fn convert_one(&self, input: &Path, output: &Path) -> RomResult<()> {
        let size = fs::metadata(input)
            .map_err(|e| RomError::FileOpen {
                path: input.display().to_string(),
                reason: e.to_string(),
            })?
            .len();

        if size < (HEADER_SIZE + SMD_BLOCK_SIZE) as u64 {
            return Err(RomError::FileTooSmall {
                path: input.display().to_string(),
                size,
            });
        }

        let payload = size - HEADER_SIZE as u64;
        let num_blocks = payload / SMD_BLOCK_SIZE as u64;
        if payload % SMD_BLOCK_SIZE as u64 != 0 {
            return Err(RomError::NotBlockAligned {
                path: input.display().to_string(),
                size,
            });
        }

        let mut smd_file = io::open_rom(input)?;
        let mut bin_file = io::create_output(output)?;
        io::seek_past_header(&mut smd_file, input)?;

        for _ in 0..num_blocks {
            let mut smd_block = [0u8; SMD_BLOCK_SIZE];
            let mut bin_block = [0u8; SMD_BLOCK_SIZE];

            io::read_exact_buf(&mut smd_file, &mut smd_block, input)?;
            decode_block(&mut bin_block, &smd_block);
            io::write_all_buf(&mut bin_file, &bin_block, output)?;
        }

        Ok(())
    }
}
