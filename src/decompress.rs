use crate::bits::BitReader;
use crate::error::DecodeError;
use crate::params::LzssParams;
use alloc::vec::Vec;
use tracing::{debug, trace};

type Result<T> = core::result::Result<T, DecodeError>;

/// Back-reference index that marks the end of the stream.
const END_OF_STREAM: usize = 0;

/// Width in bits of a literal token's payload.
const LITERAL_BITS: u32 = 8;

/// Decompresses an LZSS stream using the default [`LzssParams::ZUN`] layout.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    decompress_with(input, &LzssParams::ZUN)
}

/// Decompresses an LZSS stream laid out according to `params`.
pub fn decompress_with(input: &[u8], params: &LzssParams) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress_into(input, params, &mut output)?;
    Ok(output)
}

/// Decompresses an LZSS stream, appending the result to `output`.
///
/// On failure `output` is truncated back to its original length, so no
/// partially decoded data is ever observed.
///
/// # Errors
///
/// * [`DecodeError::InvalidParams`] if `params` fails validation.
/// * [`DecodeError::OutOfMemory`] if the history window or the output cannot
///   grow.
/// * [`DecodeError::InvalidStream`] if the terminator is not followed exactly
///   by the end of `input`. This covers truncated data, trailing garbage, and
///   data produced with different parameters.
pub fn decompress_into(input: &[u8], params: &LzssParams, output: &mut Vec<u8>) -> Result<()> {
    let start_len = output.len();
    let result = decompress_stream(input, params, output);
    if result.is_err() {
        output.truncate(start_len);
    }
    result
}

fn decompress_stream(input: &[u8], params: &LzssParams, output: &mut Vec<u8>) -> Result<()> {
    params.validate()?;

    // Heuristic capacity reservation to reduce allocation churn.
    reserve(output, input.len())?;

    let mut window = HistoryWindow::new(params)?;
    let mut reader = BitReader::new(input);
    let start_len = output.len();

    loop {
        if reader.read_bit() {
            let byte = reader.read_bits(LITERAL_BITS) as u8;
            reserve(output, 1)?;
            output.push(byte);
            window.push(byte);
            continue;
        }

        let read_from = reader.read_bits(params.index_size) as usize;
        if read_from == END_OF_STREAM {
            break;
        }

        let count = (reader.read_bits(params.length_size) as usize).saturating_add(params.min_length);
        copy_match(&mut window, output, read_from, count)?;
    }

    let consumed = reader.position();
    let total = reader.total_bits();
    if consumed != total {
        debug!(consumed, total, ?params, "LZSS stream did not end on the terminator");
        return Err(DecodeError::InvalidStream { consumed, total });
    }

    trace!(
        input_len = input.len(),
        output_len = output.len() - start_len,
        "decompressed LZSS stream"
    );
    Ok(())
}

/// Replays `count` bytes of history starting at the absolute window index
/// `read_from`.
///
/// Source and destination may overlap; every copied byte becomes readable
/// history as soon as it is written.
#[inline]
fn copy_match(
    window: &mut HistoryWindow,
    output: &mut Vec<u8>,
    mut read_from: usize,
    count: usize,
) -> Result<()> {
    reserve(output, count)?;

    for _ in 0..count {
        let byte = window.get(read_from);
        output.push(byte);
        window.push(byte);
        read_from = window.wrap(read_from + 1);
    }

    Ok(())
}

#[inline]
fn reserve(output: &mut Vec<u8>, additional: usize) -> Result<()> {
    output
        .try_reserve(additional)
        .map_err(|_| DecodeError::OutOfMemory {
            requested: additional,
        })
}

/// Circular buffer holding the most recent `2^index_size` output bytes.
struct HistoryWindow {
    bytes: Vec<u8>,
    mask: usize,
    write_index: usize,
}

impl HistoryWindow {
    fn new(params: &LzssParams) -> Result<Self> {
        let size = params.window_size();
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| DecodeError::OutOfMemory { requested: size })?;
        bytes.resize(size, 0);

        Ok(Self {
            bytes,
            mask: size - 1,
            write_index: params.initial_write_index,
        })
    }

    #[inline]
    const fn wrap(&self, index: usize) -> usize {
        index & self.mask
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.bytes[self.wrap(index)]
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        let index = self.write_index;
        self.bytes[index] = byte;
        self.write_index = self.wrap(index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::{decompress, decompress_into, decompress_with};
    use crate::error::DecodeError;
    use crate::params::LzssParams;
    use alloc::vec;
    use alloc::vec::Vec;

    /// `1,'A',1,'B',0,<13 zero bits>`
    const AB_STREAM: [u8; 4] = [0xA0, 0xD0, 0x80, 0x00];

    #[test]
    fn test_two_literals() {
        assert_eq!(decompress(&AB_STREAM).unwrap(), b"AB");
    }

    #[test]
    fn test_terminator_only() {
        // 1 control bit + 7 index bits fill exactly one byte.
        let params = LzssParams::new(7, 4, 3, 1);
        assert_eq!(decompress_with(&[0x00], &params).unwrap(), b"");
    }

    #[test]
    fn test_empty_input_is_truncated() {
        assert_eq!(
            decompress(&[]),
            Err(DecodeError::InvalidStream {
                consumed: 14,
                total: 0
            })
        );
    }

    #[test]
    fn test_trailing_byte_rejected() {
        let mut data = AB_STREAM.to_vec();
        data.push(0x00);
        assert_eq!(
            decompress(&data),
            Err(DecodeError::InvalidStream {
                consumed: 32,
                total: 40
            })
        );
    }

    #[test]
    fn test_into_appends_and_restores_on_error() {
        let mut output = vec![b'x'];
        decompress_into(&AB_STREAM, &LzssParams::ZUN, &mut output).unwrap();
        assert_eq!(output, b"xAB");

        assert!(decompress_into(&AB_STREAM[..3], &LzssParams::ZUN, &mut output).is_err());
        assert_eq!(output, b"xAB");
    }

    #[test]
    fn test_invalid_params_rejected_before_decoding() {
        let params = LzssParams::new(30, 4, 3, 1);
        let result: Result<Vec<u8>, _> = decompress_with(&AB_STREAM, &params);
        assert!(matches!(result, Err(DecodeError::InvalidParams(_))));
    }
}
