//! Batch compression of independent buffers.
//!
//! Every input gets its own codec call and therefore its own tree; results
//! come back in input order. With the `parallel` feature the inputs are
//! processed on the rayon thread pool.

use crate::{CodecOptions, require_detect};
use oxipack_core::Algorithm;
use oxipack_core::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compress each input independently with default options.
pub fn compress_batch<T: AsRef<[u8]> + Sync>(
    inputs: &[T],
    algorithm: Algorithm,
) -> Vec<Result<Vec<u8>>> {
    compress_batch_with(inputs, algorithm, CodecOptions::default())
}

/// Compress each input independently.
pub fn compress_batch_with<T: AsRef<[u8]> + Sync>(
    inputs: &[T],
    algorithm: Algorithm,
    options: CodecOptions,
) -> Vec<Result<Vec<u8>>> {
    map_inputs(inputs, |data| {
        oxipack_core::ensure_non_empty(data)?;
        options.codec(algorithm).compress(data)
    })
}

/// Decompress each input independently with default options.
pub fn decompress_batch<T: AsRef<[u8]> + Sync>(
    inputs: &[T],
    algorithm: Algorithm,
) -> Vec<Result<Vec<u8>>> {
    decompress_batch_with(inputs, Some(algorithm), CodecOptions::default())
}

/// Decompress each input independently.
///
/// With `algorithm` set to `None`, each input's algorithm is detected from
/// its magic.
pub fn decompress_batch_with<T: AsRef<[u8]> + Sync>(
    inputs: &[T],
    algorithm: Option<Algorithm>,
    options: CodecOptions,
) -> Vec<Result<Vec<u8>>> {
    map_inputs(inputs, |data| {
        oxipack_core::ensure_non_empty(data)?;
        let algorithm = match algorithm {
            Some(algorithm) => algorithm,
            None => require_detect(data)?,
        };
        options.codec(algorithm).decompress(data)
    })
}

#[cfg(feature = "parallel")]
fn map_inputs<T, F>(inputs: &[T], op: F) -> Vec<Result<Vec<u8>>>
where
    T: AsRef<[u8]> + Sync,
    F: Fn(&[u8]) -> Result<Vec<u8>> + Sync + Send,
{
    inputs.par_iter().map(|input| op(input.as_ref())).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_inputs<T, F>(inputs: &[T], op: F) -> Vec<Result<Vec<u8>>>
where
    T: AsRef<[u8]>,
    F: Fn(&[u8]) -> Result<Vec<u8>>,
{
    inputs.iter().map(|input| op(input.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::OxiPackError;
    use oxipack_huffman::HuffmanConfig;

    #[test]
    fn test_batch_roundtrip() {
        let inputs: Vec<Vec<u8>> = vec![
            b"first input".to_vec(),
            vec![7; 1000],
            (0..=255).collect(),
        ];

        for algorithm in Algorithm::ALL {
            let compressed: Vec<Vec<u8>> = compress_batch(&inputs, algorithm)
                .into_iter()
                .collect::<Result<_>>()
                .unwrap();
            let restored: Vec<Vec<u8>> = decompress_batch(&compressed, algorithm)
                .into_iter()
                .collect::<Result<_>>()
                .unwrap();
            assert_eq!(restored, inputs);
        }
    }

    #[test]
    fn test_batch_detects_mixed_inputs() {
        let inputs = vec![
            compress_batch(&[b"huffman data"], Algorithm::Huffman).remove(0).unwrap(),
            compress_batch(&[b"rle data"], Algorithm::Rle).remove(0).unwrap(),
            b"garbage".to_vec(),
        ];
        let options = CodecOptions {
            huffman: HuffmanConfig::LEGACY,
            ..CodecOptions::default()
        };

        let results = decompress_batch_with(&inputs, None, options);
        assert_eq!(results[0].as_ref().unwrap(), b"huffman data");
        assert_eq!(results[1].as_ref().unwrap(), b"rle data");
        assert!(matches!(results[2], Err(OxiPackError::InvalidContainer { .. })));
    }

    #[test]
    fn test_batch_keeps_errors_per_input() {
        let inputs: [&[u8]; 3] = [b"ok", b"", b"also ok"];
        let results = compress_batch(&inputs, Algorithm::Huffman);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(OxiPackError::EmptyInput)));
        assert!(results[2].is_ok());
    }
}
