//! # OxiPack-RLE: Pure Rust Run-Length Coding
//!
//! Byte-oriented run-length compression in a minimal `RLE` container: the
//! three-byte magic followed by `(count, value)` pairs with `count` in 1-255.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_rle::{compress, decompress};
//!
//! let compressed = compress(&[1, 1, 1, 2, 2, 3]).unwrap();
//! assert_eq!(compressed, b"RLE\x03\x01\x02\x02\x01\x03");
//! assert_eq!(decompress(&compressed).unwrap(), vec![1, 1, 1, 2, 2, 3]);
//! ```
//!
//! Runs longer than 255 bytes are split: 300 copies of a byte become the
//! pairs `(255, v)` and `(45, v)`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod container;
mod decode;
mod encode;

pub use config::{MAX_RUN, RleConfig};
pub use container::ContainerInfo;
pub use decode::decompress;
pub use encode::{compress, compress_with_config};

use oxipack_core::{Algorithm, Codec, Result};

/// Run-length codec implementing the shared [`Codec`] contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct RleCodec {
    config: RleConfig,
}

impl RleCodec {
    /// Create a codec with the given encoder configuration.
    pub fn new(config: RleConfig) -> Self {
        Self { config }
    }
}

impl Codec for RleCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rle
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress_with_config(input, self.config)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"aaaabbbcccd\x00\x00\x00\x00\x00";
        let compressed = compress(original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_codec_trait() {
        let codec = RleCodec::new(RleConfig::new(2));
        assert_eq!(codec.algorithm(), Algorithm::Rle);

        let compressed = codec.compress(b"zzzzz").unwrap();
        assert_eq!(&compressed[3..], &[2, b'z', 2, b'z', 1, b'z']);
        assert_eq!(codec.decompress(&compressed).unwrap(), b"zzzzz");
    }
}
