use crate::error::DecodeError;
use alloc::vec::Vec;
use tracing::trace;

type Result<T> = core::result::Result<T, DecodeError>;

/// Returns how many leading bytes of a `len`-byte buffer are interleaved when
/// it is split into blocks of `block_size`.
///
/// A trailing partial block shorter than a quarter of `block_size` is stored
/// as-is, and so is the final byte of an odd-length buffer. Everything past
/// the returned length is plain XOR-free data.
pub const fn interleaved_len(len: usize, block_size: usize) -> usize {
    if block_size == 0 {
        return 0;
    }

    let mut left = len;
    let remainder = left % block_size;
    if remainder < block_size / 4 {
        left -= remainder;
    }

    if left > 0 && len % 2 == 1 {
        left -= 1;
    }

    left
}

/// Decrypts a buffer protected with the block-interleaved cipher of the later
/// replay formats.
///
/// Each block was stored as its odd-from-the-end bytes followed by its
/// even-from-the-end bytes, every byte XORed with a key that starts at `base`
/// and grows by `add` for each byte of the buffer (the key is not reset
/// between blocks). This routine restores the original layout in place.
///
/// # Errors
///
/// * [`DecodeError::InvalidBlockSize`] if `block_size` is zero. The buffer is
///   not modified.
/// * [`DecodeError::OutOfMemory`] if the scratch copy cannot be allocated. The
///   buffer is not modified.
/// * [`DecodeError::OutOfRange`] if a computed index leaves the buffer. The
///   bytes written before the failure stay written, so the buffer may be left
///   partially decrypted.
pub fn decrypt_block(buffer: &mut [u8], block_size: usize, mut base: u8, add: u8) -> Result<()> {
    if block_size == 0 {
        return Err(DecodeError::InvalidBlockSize);
    }

    let len = buffer.len();
    let mut source = Vec::new();
    source
        .try_reserve_exact(len)
        .map_err(|_| DecodeError::OutOfMemory { requested: len })?;
    source.extend_from_slice(buffer);

    let left = interleaved_len(len, block_size);
    let mut src_pos = 0;

    for chunk_start in (0..left).step_by(block_size) {
        let chunk_end = (chunk_start + block_size).min(left);

        let odd = (chunk_start..chunk_end).rev().step_by(2);
        let even = (chunk_start..chunk_end - 1).rev().step_by(2);

        for dest in odd.chain(even) {
            let byte = *source.get(src_pos).ok_or(DecodeError::OutOfRange {
                index: src_pos,
                len,
            })?;
            let slot = buffer
                .get_mut(dest)
                .ok_or(DecodeError::OutOfRange { index: dest, len })?;

            *slot = byte ^ base;
            base = base.wrapping_add(add);
            src_pos += 1;
        }
    }

    trace!(len, left, block_size, "decrypted interleaved buffer");
    Ok(())
}
