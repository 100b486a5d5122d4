use crate::error::DecodeError;
use tracing::debug;

type Result<T> = core::result::Result<T, DecodeError>;

/// Largest supported history index width (a 16 MiB window).
pub const MAX_INDEX_BITS: u32 = 24;

/// Largest supported match length width.
pub const MAX_LENGTH_BITS: u32 = 24;

/// Bit layout of an LZSS stream.
///
/// Games in the series share a single layout, available as [`LzssParams::ZUN`]
/// (also the [`Default`]). Other values describe related formats decoded by the
/// same algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LzssParams {
    /// Width in bits of a back-reference's window index.
    pub index_size: u32,
    /// Width in bits of a back-reference's length field.
    pub length_size: u32,
    /// Added to every decoded length field.
    pub min_length: usize,
    /// Window position the first output byte is written to.
    pub initial_write_index: usize,
}

impl LzssParams {
    /// 8 KiB window, 4-bit lengths, matches of at least 3 bytes.
    pub const ZUN: Self = Self::new(13, 4, 3, 1);

    pub const fn new(
        index_size: u32,
        length_size: u32,
        min_length: usize,
        initial_write_index: usize,
    ) -> Self {
        Self {
            index_size,
            length_size,
            min_length,
            initial_write_index,
        }
    }

    /// Size of the circular history window in bytes.
    ///
    /// Only meaningful for parameters that pass [`validate`](Self::validate).
    pub const fn window_size(&self) -> usize {
        1 << self.index_size
    }

    /// Checks that the parameters describe a window this crate can allocate
    /// and a bit layout it can read.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.index_size > MAX_INDEX_BITS {
            "index_size is too large"
        } else if self.length_size > MAX_LENGTH_BITS {
            "length_size is too large"
        } else if self.initial_write_index >= self.window_size() {
            "initial_write_index is outside the history window"
        } else {
            return Ok(());
        };

        debug!(params = ?self, reason, "rejected LZSS parameters");
        Err(DecodeError::InvalidParams(reason))
    }
}

impl Default for LzssParams {
    fn default() -> Self {
        Self::ZUN
    }
}

#[cfg(test)]
mod tests {
    use super::LzssParams;
    use crate::error::DecodeError;

    #[test]
    fn test_default_is_zun() {
        let params = LzssParams::default();
        assert_eq!(params, LzssParams::ZUN);
        assert_eq!(params.window_size(), 8192);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_widths() {
        assert_eq!(
            LzssParams::new(25, 4, 3, 1).validate(),
            Err(DecodeError::InvalidParams("index_size is too large"))
        );
        assert_eq!(
            LzssParams::new(13, 25, 3, 1).validate(),
            Err(DecodeError::InvalidParams("length_size is too large"))
        );
    }

    #[test]
    fn test_rejects_write_index_outside_window() {
        assert!(LzssParams::new(4, 4, 3, 15).validate().is_ok());
        assert!(matches!(
            LzssParams::new(4, 4, 3, 16).validate(),
            Err(DecodeError::InvalidParams(_))
        ));
    }
}
