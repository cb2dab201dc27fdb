use bytes::Buf;
use phf::phf_map;
use std::fmt;

use crate::codec::{decode_block, SMD_BLOCK_SIZE};
use crate::format::HEADER_SIZE;

/// How a cartridge header field is decoded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Raw bytes shown verbatim at full field length
    Text,
    /// Two-character code mapped through the software type table
    SoftwareType,
    /// Big-endian word shown as 4 uppercase hex digits
    HexWord,
    /// Big-endian longword shown as 8 uppercase hex digits
    HexLong,
}

/// One fixed-offset field of the cartridge header
#[derive(Debug, Clone, Copy)]
pub struct HeaderField {
    pub label: &'static str,
    pub offset: usize,
    pub len: usize,
    pub kind: FieldKind,
}

/// Cartridge header layout, absolute offsets within the decoded 512-byte view
///
/// Published references disagree on a few boundaries (the modem data length,
/// the product code vs. version split); the lengths here follow what licensed
/// dumps actually carry.
pub const HEADER_FIELDS: [HeaderField; 13] = [
    HeaderField { label: "System", offset: 0x100, len: 16, kind: FieldKind::Text },
    HeaderField { label: "Copyright", offset: 0x110, len: 16, kind: FieldKind::Text },
    HeaderField { label: "Game name (domestic)", offset: 0x120, len: 48, kind: FieldKind::Text },
    HeaderField { label: "Game name (overseas)", offset: 0x150, len: 48, kind: FieldKind::Text },
    HeaderField { label: "Software type", offset: 0x180, len: 2, kind: FieldKind::SoftwareType },
    HeaderField { label: "Product code and version", offset: 0x183, len: 11, kind: FieldKind::Text },
    HeaderField { label: "Checksum", offset: 0x18e, len: 2, kind: FieldKind::HexWord },
    HeaderField { label: "I/O support", offset: 0x190, len: 16, kind: FieldKind::Text },
    HeaderField { label: "ROM start address", offset: 0x1a0, len: 4, kind: FieldKind::HexLong },
    HeaderField { label: "ROM end address", offset: 0x1a4, len: 4, kind: FieldKind::HexLong },
    HeaderField { label: "Modem data", offset: 0x1bc, len: 20, kind: FieldKind::Text },
    HeaderField { label: "Memo", offset: 0x1c8, len: 40, kind: FieldKind::Text },
    HeaderField { label: "Countries", offset: 0x1f0, len: 3, kind: FieldKind::Text },
];

/// Software type codes seen in licensed releases
static SOFTWARE_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "GM" => "Game",
    "Al" => "Educational",
};

/// Read-only view of the first 512 bytes of a decoded ROM image
///
/// Holds the region the cartridge header lives in (0x100..0x1f3). Built
/// either directly from a BIN file's leading bytes or by deinterleaving the
/// first block of an SMD file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeHeader {
    raw: [u8; HEADER_SIZE],
}

impl CartridgeHeader {
    /// Build the view from a BIN file's leading bytes
    pub fn from_bin_header(header: &[u8; HEADER_SIZE]) -> Self {
        Self { raw: *header }
    }

    /// Build the view by deinterleaving the first SMD block
    pub fn from_smd_block(block: &[u8; SMD_BLOCK_SIZE]) -> Self {
        let mut decoded = [0u8; SMD_BLOCK_SIZE];
        decode_block(&mut decoded, block);

        let mut raw = [0u8; HEADER_SIZE];
        raw.copy_from_slice(&decoded[..HEADER_SIZE]);
        Self { raw }
    }

    /// Raw bytes of one field
    pub fn field_bytes(&self, field: &HeaderField) -> &[u8] {
        &self.raw[field.offset..field.offset + field.len]
    }

    /// ROM checksum word
    pub fn checksum(&self) -> u16 {
        self.read_u16(0x18e)
    }

    /// First mapped ROM address
    pub fn rom_start(&self) -> u32 {
        self.read_u32(0x1a0)
    }

    /// Last mapped ROM address
    pub fn rom_end(&self) -> u32 {
        self.read_u32(0x1a4)
    }

    /// Software type, mapped through the known code table
    ///
    /// Unknown codes come back as their raw two characters; plenty of dumps
    /// carry nonstandard values here.
    pub fn software_type(&self) -> String {
        let code = &self.raw[0x180..0x182];
        match std::str::from_utf8(code).ok().and_then(|c| SOFTWARE_TYPES.get(c)) {
            Some(name) => (*name).to_string(),
            None => String::from_utf8_lossy(code).into_owned(),
        }
    }

    fn read_u16(&self, offset: usize) -> u16 {
        let mut buf = &self.raw[offset..];
        buf.get_u16()
    }

    fn read_u32(&self, offset: usize) -> u32 {
        let mut buf = &self.raw[offset..];
        buf.get_u32()
    }

    fn render_field(&self, field: &HeaderField) -> String {
        match field.kind {
            FieldKind::Text => String::from_utf8_lossy(self.field_bytes(field)).into_owned(),
            FieldKind::SoftwareType => self.software_type(),
            FieldKind::HexWord => format!("0x{:04X}", self.read_u16(field.offset)),
            FieldKind::HexLong => format!("0x{:08X}", self.read_u32(field.offset)),
        }
    }
}

impl fmt::Display for CartridgeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &HEADER_FIELDS {
            writeln!(f, "{:>26}: {}", field.label, self.render_field(field))?;
        }
        Ok(())
    }
}
