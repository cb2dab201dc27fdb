//! Integration tests running full conversion batches over real files
//!
//! Fixtures are written to a temporary directory and read back to verify
//! output contents and collision handling.

use std::path::Path;

use smd_converter::{
    decode_block, Converter, FileCheckAction, FormatValidator, RomError, RomFormat, HEADER_SIZE,
    SMD_BLOCK_SIZE,
};
use tempfile::tempdir;

/// Deterministic pseudo-random block contents (xorshift32)
fn random_block(mut seed: u32) -> [u8; SMD_BLOCK_SIZE] {
    let mut block = [0u8; SMD_BLOCK_SIZE];
    for byte in block.iter_mut() {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        *byte = seed as u8;
    }
    block
}

/// Write an SMD dump: 512-byte transfer header plus the given raw blocks
fn write_smd_dump(path: &Path, blocks: &[[u8; SMD_BLOCK_SIZE]]) {
    let mut contents = vec![0u8; HEADER_SIZE];
    contents[8] = 0xAA;
    contents[9] = 0xBB;
    for block in blocks {
        contents.extend_from_slice(block);
    }
    std::fs::write(path, contents).unwrap();
}

/// Expected BIN image for a list of raw SMD blocks
fn decoded_image(blocks: &[[u8; SMD_BLOCK_SIZE]]) -> Vec<u8> {
    let mut image = Vec::with_capacity(blocks.len() * SMD_BLOCK_SIZE);
    for block in blocks {
        let mut bin_block = [0u8; SMD_BLOCK_SIZE];
        decode_block(&mut bin_block, block);
        image.extend_from_slice(&bin_block);
    }
    image
}

#[test]
fn test_convert_produces_linear_image() {
    let dir = tempdir().unwrap();
    let outdir = dir.path().join("out");
    std::fs::create_dir(&outdir).unwrap();

    let blocks = [random_block(1), random_block(2), random_block(3)];
    let input = dir.path().join("game.smd");
    write_smd_dump(&input, &blocks);

    let converter = Converter::new(outdir.clone(), FileCheckAction::Skip);
    converter.convert_files(&[input]).unwrap();

    // Every output block is the decoded counterpart of its input block
    let output = outdir.join("game.bin");
    let image = std::fs::read(&output).unwrap();
    assert_eq!(image.len(), 3 * SMD_BLOCK_SIZE);
    assert_eq!(image, decoded_image(&blocks));
}

#[test]
fn test_convert_rejects_undersized_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tiny.smd");
    let mut contents = vec![0u8; HEADER_SIZE + SMD_BLOCK_SIZE - 1];
    contents[8] = 0xAA;
    contents[9] = 0xBB;
    std::fs::write(&input, contents).unwrap();

    let converter = Converter::new(dir.path().to_path_buf(), FileCheckAction::Skip);
    let err = converter.convert_files(&[input]).unwrap_err();
    assert!(matches!(err, RomError::FileTooSmall { .. }));
    assert!(!dir.path().join("tiny.bin").exists());
}

#[test]
fn test_convert_rejects_misaligned_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("corrupt.smd");
    let mut contents = vec![0u8; HEADER_SIZE + SMD_BLOCK_SIZE + 16383];
    contents[8] = 0xAA;
    contents[9] = 0xBB;
    std::fs::write(&input, contents).unwrap();

    let converter = Converter::new(dir.path().to_path_buf(), FileCheckAction::Skip);
    let err = converter.convert_files(&[input]).unwrap_err();
    assert!(matches!(err, RomError::NotBlockAligned { .. }));

    // Validation happens before the output file is created
    assert!(!dir.path().join("corrupt.bin").exists());
}

#[test]
fn test_collision_skip_preserves_existing_output() {
    let dir = tempdir().unwrap();
    let outdir = dir.path().join("out");
    std::fs::create_dir(&outdir).unwrap();

    let first_blocks = [random_block(10)];
    let second_blocks = [random_block(20)];
    let first = dir.path().join("one.smd");
    let second = dir.path().join("two.smd");
    write_smd_dump(&first, &first_blocks);
    write_smd_dump(&second, &second_blocks);

    // Pre-existing destination for the first input
    let sentinel = b"do not touch".to_vec();
    std::fs::write(outdir.join("one.bin"), &sentinel).unwrap();

    let converter = Converter::new(outdir.clone(), FileCheckAction::Skip);
    converter.convert_files(&[first, second]).unwrap();

    // First destination untouched, second converted normally
    assert_eq!(std::fs::read(outdir.join("one.bin")).unwrap(), sentinel);
    assert_eq!(
        std::fs::read(outdir.join("two.bin")).unwrap(),
        decoded_image(&second_blocks)
    );
}

#[test]
fn test_collision_stop_aborts_batch() {
    let dir = tempdir().unwrap();
    let outdir = dir.path().join("out");
    std::fs::create_dir(&outdir).unwrap();

    let first = dir.path().join("one.smd");
    let second = dir.path().join("two.smd");
    write_smd_dump(&first, &[random_block(10)]);
    write_smd_dump(&second, &[random_block(20)]);

    let sentinel = b"do not touch".to_vec();
    std::fs::write(outdir.join("one.bin"), &sentinel).unwrap();

    let converter = Converter::new(outdir.clone(), FileCheckAction::Stop);
    let err = converter.convert_files(&[first, second]).unwrap_err();
    assert!(matches!(err, RomError::OutputExists { .. }));

    // Nothing was written: the sentinel survives and later files were
    // never reached
    assert_eq!(std::fs::read(outdir.join("one.bin")).unwrap(), sentinel);
    assert!(!outdir.join("two.bin").exists());
}

#[test]
fn test_collision_warn_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let outdir = dir.path().join("out");
    std::fs::create_dir(&outdir).unwrap();

    let blocks = [random_block(30)];
    let input = dir.path().join("game.smd");
    write_smd_dump(&input, &blocks);
    std::fs::write(outdir.join("game.bin"), b"stale").unwrap();

    let converter = Converter::new(outdir.clone(), FileCheckAction::Warn);
    converter.convert_files(&[input]).unwrap();

    assert_eq!(
        std::fs::read(outdir.join("game.bin")).unwrap(),
        decoded_image(&blocks)
    );
}

#[test]
fn test_batch_stops_at_first_fatal_error() {
    // First file passes the format check and converts; the second carries
    // the SMD marker but a misaligned payload, ending the batch
    let dir = tempdir().unwrap();
    let outdir = dir.path().join("out");
    std::fs::create_dir(&outdir).unwrap();

    let good_blocks = [random_block(40), random_block(41)];
    let good = dir.path().join("good.smd");
    write_smd_dump(&good, &good_blocks);

    let bad = dir.path().join("bad.smd");
    let mut contents = vec![0u8; HEADER_SIZE + SMD_BLOCK_SIZE + 100];
    contents[8] = 0xAA;
    contents[9] = 0xBB;
    std::fs::write(&bad, contents).unwrap();

    let never = dir.path().join("never.smd");
    write_smd_dump(&never, &[random_block(42)]);

    let inputs = vec![good, bad, never];

    // Size is not part of the format check, so the whole batch sniffs as SMD
    let validator = FormatValidator::new(RomFormat::Smd);
    assert!(validator.check_files(&inputs));

    let converter = Converter::new(outdir.clone(), FileCheckAction::Stop);
    let err = converter.convert_files(&inputs).unwrap_err();
    assert!(matches!(err, RomError::NotBlockAligned { .. }));

    // Earlier output stays on disk, later files were never converted
    assert_eq!(
        std::fs::read(outdir.join("good.bin")).unwrap(),
        decoded_image(&good_blocks)
    );
    assert!(!outdir.join("bad.bin").exists());
    assert!(!outdir.join("never.bin").exists());
}
