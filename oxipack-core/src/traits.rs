//! Core codec trait.
//!
//! Every algorithm exposes the same whole-buffer contract: the entire input
//! is in memory, and each call builds its own state from scratch.

use crate::algorithm::Algorithm;
use crate::error::{OxiPackError, Result};

/// A whole-buffer lossless codec.
pub trait Codec {
    /// The algorithm this codec implements.
    fn algorithm(&self) -> Algorithm;

    /// Compress `input` into a self-describing container.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a container produced by [`Codec::compress`].
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Check that `input` opens with this codec's magic.
    fn check_magic(&self, input: &[u8]) -> Result<()> {
        let magic = self.algorithm().magic();
        if input.starts_with(magic) {
            Ok(())
        } else {
            Err(OxiPackError::invalid_container(
                magic.to_vec(),
                &input[..input.len().min(magic.len())],
            ))
        }
    }
}

/// Reject zero-length buffers.
pub fn ensure_non_empty(input: &[u8]) -> Result<()> {
    if input.is_empty() {
        Err(OxiPackError::EmptyInput)
    } else {
        Ok(())
    }
}
