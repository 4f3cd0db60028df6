//! Run-length decompression.

use oxipack_core::error::{OxiPackError, Result};
use oxipack_core::{RLE_MAGIC, ensure_non_empty};

/// Check the magic and return the pair payload.
pub(crate) fn payload(input: &[u8]) -> Result<&[u8]> {
    if !input.starts_with(&RLE_MAGIC) {
        return Err(OxiPackError::invalid_container(
            RLE_MAGIC.to_vec(),
            &input[..input.len().min(RLE_MAGIC.len())],
        ));
    }

    let payload = &input[RLE_MAGIC.len()..];
    if payload.len() % 2 != 0 {
        return Err(OxiPackError::OddRunPayload {
            length: payload.len(),
        });
    }

    Ok(payload)
}

/// Decompress an RLE container.
///
/// # Errors
///
/// - [`OxiPackError::EmptyInput`] for a zero-length buffer
/// - [`OxiPackError::InvalidContainer`] if the magic is not `RLE`
/// - [`OxiPackError::OddRunPayload`] if a count byte has no value byte
/// - [`OxiPackError::ZeroLengthRun`] for a pair with count 0
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    ensure_non_empty(input)?;
    let payload = payload(input)?;

    let mut output = Vec::with_capacity(payload.len() * 2);
    for (index, pair) in payload.chunks_exact(2).enumerate() {
        let (count, value) = (pair[0], pair[1]);
        if count == 0 {
            return Err(OxiPackError::ZeroLengthRun {
                offset: RLE_MAGIC.len() + index * 2,
            });
        }
        output.resize(output.len() + count as usize, value);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompress_vector() {
        let output = decompress(b"RLE\x03\x01\x02\x02\x01\x03").unwrap();
        assert_eq!(output, vec![1, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_header_only() {
        assert_eq!(decompress(b"RLE").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_invalid_magic() {
        let err = decompress(b"XYZ\x01\x02").unwrap_err();
        assert!(matches!(err, OxiPackError::InvalidContainer { .. }));
        assert!(matches!(
            decompress(b"RL"),
            Err(OxiPackError::InvalidContainer { .. })
        ));
    }

    #[test]
    fn test_odd_payload() {
        let err = decompress(b"RLE\x03\x01\x02").unwrap_err();
        assert!(matches!(err, OxiPackError::OddRunPayload { length: 3 }));
    }

    #[test]
    fn test_zero_length_run() {
        let err = decompress(b"RLE\x02\x01\x00\x07").unwrap_err();
        assert!(matches!(err, OxiPackError::ZeroLengthRun { offset: 5 }));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(decompress(&[]), Err(OxiPackError::EmptyInput)));
    }
}
