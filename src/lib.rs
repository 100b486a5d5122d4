//! # Touhou Replay Decoding
//!
//! `thdecode` is a safe, pure-Rust implementation of the routines needed to
//! unpack replay files of the Touhou Project games:
//!
//! * [`decrypt_legacy`]: the rolling-key cipher of the earliest format.
//! * [`decrypt_block`]: the block-interleaved XOR cipher of the later formats.
//! * [`decompress`]: the bit-packed LZSS variant used after decryption.
//!
//! All routines work on whole in-memory buffers. Reading the replay file and
//! locating the encrypted or compressed regions is up to the caller.
//!
//! ## Example
//!
//! ```rust
//! use thdecode::{LzssParams, decompress, decompress_with};
//!
//! // Literal 'A', literal 'B', end-of-stream marker:
//! // 1 01000001 | 1 01000010 | 0 0000000000000
//! let compressed = [0xA0, 0xD0, 0x80, 0x00];
//! assert_eq!(decompress(&compressed).expect("Decompression failed"), b"AB");
//!
//! // Same stream, explicit parameters.
//! let params = LzssParams::new(13, 4, 3, 1);
//! assert_eq!(decompress_with(&compressed, &params).unwrap(), b"AB");
//! ```
//!
//! Decryption happens in place:
//!
//! ```rust
//! use thdecode::{decrypt_block, decrypt_legacy};
//!
//! let mut replay = [0x10, 0x20, 0x30];
//! decrypt_legacy(&mut replay, 0x05, 0);
//! assert_eq!(replay, [0x0B, 0x14, 0x1D]);
//!
//! let mut blocks = [0, 1, 2, 3, 4, 5];
//! decrypt_block(&mut blocks, 6, 0, 0).unwrap();
//! assert_eq!(blocks, [5, 2, 4, 1, 3, 0]);
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
pub mod decompress;
pub mod error;
pub mod interleave;
pub mod legacy;
pub mod params;

pub use bits::BitReader;
pub use decompress::{decompress, decompress_into, decompress_with};
pub use error::DecodeError;
pub use interleave::{decrypt_block, interleaved_len};
pub use legacy::decrypt_legacy;
pub use params::LzssParams;
