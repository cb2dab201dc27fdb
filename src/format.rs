use std::fmt;

/// Number of bytes in the SMD transfer header (also the probed header window)
pub const HEADER_SIZE: usize = 512;

/// BIN magic bytes, found at [`SEGA_MAGIC_OFFSET`] in a decoded ROM image
pub const SEGA_MAGIC: [u8; 4] = [0x53, 0x45, 0x47, 0x41]; // "SEGA"

/// Absolute offset of the BIN magic bytes
pub const SEGA_MAGIC_OFFSET: usize = 0x100;

/// SMD marker bytes, found at [`SMD_MARKER_OFFSET`] in the transfer header
pub const SMD_MARKER: [u8; 2] = [0xAA, 0xBB];

/// Offset of the SMD marker within the transfer header
pub const SMD_MARKER_OFFSET: usize = 8;

/// ROM dump format, derived from header bytes and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomFormat {
    Unknown,
    Smd,
    Bin,
}

impl fmt::Display for RomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Smd => write!(f, "SMD"),
            Self::Bin => write!(f, "BIN"),
        }
    }
}

/// Detect if data is a BIN image by checking magic bytes
pub fn is_bin(data: &[u8]) -> bool {
    data.len() >= SEGA_MAGIC_OFFSET + SEGA_MAGIC.len()
        && data[SEGA_MAGIC_OFFSET..SEGA_MAGIC_OFFSET + SEGA_MAGIC.len()] == SEGA_MAGIC
}

/// Detect if data starts with an SMD transfer header by checking marker bytes
pub fn is_smd(data: &[u8]) -> bool {
    data.len() >= SMD_MARKER_OFFSET + SMD_MARKER.len()
        && data[SMD_MARKER_OFFSET..SMD_MARKER_OFFSET + SMD_MARKER.len()] == SMD_MARKER
}

/// Classify a header buffer as BIN, SMD, or unknown
///
/// BIN detection wins when both markers happen to be present, since a BIN
/// image can carry the SMD marker bytes by coincidence.
pub fn detect_format(data: &[u8]) -> RomFormat {
    if is_bin(data) {
        RomFormat::Bin
    } else if is_smd(data) {
        RomFormat::Smd
    } else {
        RomFormat::Unknown
    }
}
