use thiserror::Error;

use crate::format::RomFormat;

/// Error type for ROM conversion and inspection operations
///
/// Each error carries the path of the file it occurred on plus any underlying
/// OS error text, so callers can report a failure without extra lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RomError {
    // ========== I/O ERRORS ==========
    /// Error opening an input file
    #[error("Failed to open file {path}: {reason}")]
    FileOpen { path: String, reason: String },

    /// Error creating an output file
    #[error("Failed to create output file {path}: {reason}")]
    FileCreate { path: String, reason: String },

    /// Error reading file contents
    #[error("Failed to read file {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// Error writing file contents
    #[error("Failed to write file {path}: {reason}")]
    FileWrite { path: String, reason: String },

    /// File ended before a full header or block could be read
    #[error("Incomplete read from {path}: expected {expected} bytes")]
    IncompleteRead { path: String, expected: usize },

    /// Output file accepted fewer bytes than a full block
    #[error("Incomplete write to {path}: expected {expected} bytes")]
    IncompleteWrite { path: String, expected: usize },

    // ========== FORMAT ERRORS ==========
    /// File cannot hold a transfer header plus at least one block
    #[error("Input file is too small: {path} (only {size} bytes)")]
    FileTooSmall { path: String, size: u64 },

    /// SMD payload is not a whole number of blocks
    #[error("Input file does not end on 16KB block boundary (possible data corruption): {path} ({size} bytes)")]
    NotBlockAligned { path: String, size: u64 },

    /// File failed the check for the requested format
    #[error("{path} failed the {expected} format check (detected {found})")]
    FormatMismatch {
        path: String,
        expected: RomFormat,
        found: RomFormat,
    },

    /// Header bytes match no format this tool understands
    #[error("Unrecognized file format: {path}")]
    UnrecognizedFormat { path: String },

    /// No checking procedure exists for the requested format
    #[error("No format check implemented for {format} files")]
    UnsupportedCheck { format: RomFormat },

    // ========== OUTPUT POLICY ERRORS ==========
    /// Destination file already exists and the collision policy forbids overwriting
    #[error("Output file already exists: {path}")]
    OutputExists { path: String },
}

/// Result type alias for ROM operations
pub type RomResult<T> = Result<T, RomError>;
