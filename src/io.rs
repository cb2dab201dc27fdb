use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::errors::{RomError, RomResult};
use crate::format::HEADER_SIZE;

/// Open an existing ROM file for reading
pub fn open_rom(path: &Path) -> RomResult<File> {
    File::open(path).map_err(|e| RomError::FileOpen {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Create (or truncate) an output file for writing
pub fn create_output(path: &Path) -> RomResult<File> {
    File::create(path).map_err(|e| RomError::FileCreate {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Fill a fixed-size buffer, reporting a short file as an incomplete read
pub fn read_exact_buf(file: &mut File, buf: &mut [u8], path: &Path) -> RomResult<()> {
    file.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => RomError::IncompleteRead {
            path: path.display().to_string(),
            expected: buf.len(),
        },
        _ => RomError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })
}

/// Write a full buffer, reporting a short write distinctly
pub fn write_all_buf(file: &mut File, buf: &[u8], path: &Path) -> RomResult<()> {
    file.write_all(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::WriteZero => RomError::IncompleteWrite {
            path: path.display().to_string(),
            expected: buf.len(),
        },
        _ => RomError::FileWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })
}

/// Position a file just past its 512-byte transfer header
pub fn seek_past_header(file: &mut File, path: &Path) -> RomResult<()> {
    file.seek(SeekFrom::Start(HEADER_SIZE as u64))
        .map(|_| ())
        .map_err(|e| RomError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}
