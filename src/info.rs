use std::path::{Path, PathBuf};

use tracing::error;

use crate::codec::SMD_BLOCK_SIZE;
use crate::errors::{RomError, RomResult};
use crate::format::{detect_format, RomFormat, HEADER_SIZE};
use crate::header::CartridgeHeader;
use crate::io;

/// Load the cartridge header out of a ROM dump in either format
///
/// BIN files carry the header in their leading bytes; SMD files need the
/// first full block read and deinterleaved to reach it.
pub fn load_cartridge_header(path: &Path) -> RomResult<CartridgeHeader> {
    let mut file = io::open_rom(path)?;
    let mut header = [0u8; HEADER_SIZE];
    io::read_exact_buf(&mut file, &mut header, path)?;

    match detect_format(&header) {
        RomFormat::Bin => Ok(CartridgeHeader::from_bin_header(&header)),
        RomFormat::Smd => {
            let mut block = [0u8; SMD_BLOCK_SIZE];
            io::read_exact_buf(&mut file, &mut block, path)?;
            Ok(CartridgeHeader::from_smd_block(&block))
        }
        RomFormat::Unknown => Err(RomError::UnrecognizedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Print the cartridge header report for every file
///
/// A file that cannot be read or recognized is skipped with a notice; the
/// loop always continues to the next file. Never writes anything to disk.
pub fn show_info(paths: &[PathBuf]) {
    for path in paths {
        println!("Showing info from ROM data for file: {}", path.display());
        match load_cartridge_header(path) {
            Ok(header) => print!("{}", header),
            Err(e) => {
                error!("{}", e);
                println!("  ... skipping.");
            }
        }
    }
}
