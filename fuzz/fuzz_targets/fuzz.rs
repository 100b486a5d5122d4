#![no_main]

use libfuzzer_sys::fuzz_target;
use thdecode::{LzssParams, decompress, decompress_with, decrypt_block, decrypt_legacy};

/// Verifies that the decompressor safely handles arbitrary, potentially malformed input.
///
/// # Invariant
/// The decompressor must return either `Ok(_)` or `Err(_)` for the default
/// parameters and for a small alternative layout. It must **never** panic.
fn verify_decompression_robustness(data: &[u8]) {
    let _ = decompress(data);
    let _ = decompress_with(data, &LzssParams::new(8, 3, 2, 1));
}

/// Verifies that both ciphers keep the buffer length and never panic.
///
/// The first bytes of the input select the cipher parameters; the rest is the
/// buffer to decrypt.
fn verify_decryption_robustness(data: &[u8]) {
    let [key, base, add, size, rest @ ..] = data else {
        return;
    };

    let mut buffer = rest.to_vec();
    decrypt_legacy(&mut buffer, *key, usize::from(*size));
    assert_eq!(buffer.len(), rest.len());

    let block_size = usize::from(*size).max(1) * 4;
    if let Err(e) = decrypt_block(&mut buffer, block_size, *base, *add) {
        panic!("Block decryption failed with a valid block size: {e:?}");
    }
    assert_eq!(buffer.len(), rest.len());
}

fuzz_target!(|data: &[u8]| {
    verify_decompression_robustness(data);
    verify_decryption_robustness(data);
});
