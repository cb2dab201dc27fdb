/// Number of bytes in one interleaved SMD block
pub const SMD_BLOCK_SIZE: usize = 16 * 1024;

/// Number of bytes in each of the two half-planes of an SMD block
pub const SMD_HALF_BLOCK: usize = SMD_BLOCK_SIZE / 2;

/// Deinterleave one SMD block into its BIN equivalent
///
/// An SMD block stores a ROM's odd-indexed bytes contiguously in the first
/// half-plane and its even-indexed bytes contiguously in the second, per
/// 16 KB block. Decoding restores natural byte order. The transform is
/// bijective on the 16384-byte space.
pub fn decode_block(bin_block: &mut [u8; SMD_BLOCK_SIZE], smd_block: &[u8; SMD_BLOCK_SIZE]) {
    let (odd_bytes, even_bytes) = smd_block.split_at(SMD_HALF_BLOCK);
    for i in 0..SMD_HALF_BLOCK {
        bin_block[2 * i + 1] = odd_bytes[i];
        bin_block[2 * i] = even_bytes[i];
    }
}
