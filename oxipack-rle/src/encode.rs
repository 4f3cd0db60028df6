//! Run-length compression.

use crate::config::RleConfig;
use oxipack_core::error::Result;
use oxipack_core::{RLE_MAGIC, ensure_non_empty};

/// Compress `input` into an RLE container with full-width runs.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_with_config(input, RleConfig::DEFAULT)
}

/// Compress `input` into an RLE container.
///
/// Each maximal run of identical bytes becomes `(count, value)` pairs with
/// `count` in `1..=config.max_run`; a longer run is split into full pairs
/// followed by the remainder.
pub fn compress_with_config(input: &[u8], config: RleConfig) -> Result<Vec<u8>> {
    ensure_non_empty(input)?;

    let max_run = config.max_run.max(1) as usize;
    let mut output = Vec::with_capacity(RLE_MAGIC.len() + input.len() / 2);
    output.extend_from_slice(&RLE_MAGIC);

    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        let mut run_len = 1;

        // Count consecutive identical bytes
        while i + run_len < input.len() && input[i + run_len] == byte && run_len < max_run {
            run_len += 1;
        }

        output.push(run_len as u8);
        output.push(byte);
        i += run_len;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::OxiPackError;

    #[test]
    fn test_compress_vector() {
        let compressed = compress(&[1, 1, 1, 2, 2, 3]).unwrap();
        assert_eq!(compressed, b"RLE\x03\x01\x02\x02\x01\x03");
    }

    #[test]
    fn test_run_cap() {
        let compressed = compress(&[9u8; 300]).unwrap();
        assert_eq!(&compressed[3..], &[255, 9, 45, 9]);
    }

    #[test]
    fn test_exact_cap() {
        let compressed = compress(&[4u8; 510]).unwrap();
        assert_eq!(&compressed[3..], &[255, 4, 255, 4]);
    }

    #[test]
    fn test_custom_max_run() {
        let compressed = compress_with_config(&[5u8; 10], RleConfig::new(4)).unwrap();
        assert_eq!(&compressed[3..], &[4, 5, 4, 5, 2, 5]);
    }

    #[test]
    fn test_no_runs() {
        let compressed = compress(b"abc").unwrap();
        assert_eq!(&compressed[3..], &[1, b'a', 1, b'b', 1, b'c']);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(compress(&[]), Err(OxiPackError::EmptyInput)));
    }
}
