//! RLE container inspection.

use crate::decode::payload;
use oxipack_core::error::Result;

/// Summary of an RLE container, read without expanding the runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Number of `(count, value)` pairs.
    pub pairs: usize,
    /// Length of the decompressed output.
    pub decoded_size: u64,
    /// Longest single run.
    pub longest_run: u8,
}

impl ContainerInfo {
    /// Parse an RLE container.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let payload = payload(data)?;

        let mut decoded_size = 0u64;
        let mut longest_run = 0u8;
        for pair in payload.chunks_exact(2) {
            decoded_size += pair[0] as u64;
            longest_run = longest_run.max(pair[0]);
        }

        Ok(Self {
            pairs: payload.len() / 2,
            decoded_size,
            longest_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::OxiPackError;

    #[test]
    fn test_info() {
        let info = ContainerInfo::parse(b"RLE\xff\x09\x2d\x09").unwrap();
        assert_eq!(info.pairs, 2);
        assert_eq!(info.decoded_size, 300);
        assert_eq!(info.longest_run, 255);
    }

    #[test]
    fn test_info_rejects_foreign() {
        assert!(matches!(
            ContainerInfo::parse(b"HUF\0\0\0\x02"),
            Err(OxiPackError::InvalidContainer { .. })
        ));
    }
}
