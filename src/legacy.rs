use tracing::trace;

/// Amount added to the rolling key after every byte.
const KEY_STEP: u8 = 7;

/// Decrypts a buffer protected with the rolling-key cipher of the earliest
/// replay format.
///
/// Every byte from `start` onwards has the current key subtracted from it,
/// after which the key advances by 7 (both modulo 256). Bytes before `start`
/// are left alone, which lets callers skip a plain-text header.
///
/// A `start` past the end of the buffer is treated as an empty range.
///
/// Returns the number of bytes that were decrypted.
pub fn decrypt_legacy(buffer: &mut [u8], mut key: u8, start: usize) -> usize {
    let len = buffer.len();
    let Some(encrypted) = buffer.get_mut(start..) else {
        trace!(start, len, "legacy decryption start past end of buffer");
        return 0;
    };

    for byte in encrypted.iter_mut() {
        *byte = byte.wrapping_sub(key);
        key = key.wrapping_add(KEY_STEP);
    }

    encrypted.len()
}
