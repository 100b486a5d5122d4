/// Forward-only reader over the bits of a byte slice, most significant bit
/// first.
///
/// Reads past the end of the data yield zero bits. They still advance the
/// position, so a caller can tell an overrun apart from an exact fit by
/// comparing [`position`](Self::position) with [`total_bits`](Self::total_bits).
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of bits consumed so far, including zero-padding past the end.
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn total_bits(&self) -> usize {
        self.data.len().saturating_mul(8)
    }

    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.total_bits()
    }

    #[inline]
    pub fn read_bit(&mut self) -> bool {
        let bit = self
            .data
            .get(self.position / 8)
            .is_some_and(|&byte| (byte >> (7 - self.position % 8)) & 1 != 0);
        self.position = self.position.saturating_add(1);
        bit
    }

    /// Reads `count` bits as a big-endian integer.
    ///
    /// `count` must not exceed 32.
    #[inline]
    pub fn read_bits(&mut self, count: u32) -> u32 {
        debug_assert!(count <= u32::BITS, "cannot read {count} bits into a u32");

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | u32::from(self.read_bit());
        }
        value
    }
}
