use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Block size must be non-zero")]
    InvalidBlockSize,

    #[error("Failed to allocate {requested} bytes")]
    OutOfMemory { requested: usize },

    /// The bit cursor did not end exactly on the last input bit.
    #[error(
        "LZSS data is invalid or the LZSS parameters are wrong ({consumed} of {total} bits consumed)"
    )]
    InvalidStream { consumed: usize, total: usize },

    #[error("Invalid LZSS parameters: {0}")]
    InvalidParams(&'static str),
}
