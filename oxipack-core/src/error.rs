//! Error types for OxiPack operations.
//!
//! Every failure a codec can report is a distinct variant, so callers can
//! match on the cause instead of parsing messages.

use std::io;
use thiserror::Error;

/// The main error type for OxiPack operations.
#[derive(Debug, Error)]
pub enum OxiPackError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container magic does not match the selected codec.
    #[error("Invalid container: expected magic {expected:02x?}, found {found:02x?}")]
    InvalidContainer {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual leading bytes found.
        found: Vec<u8>,
    },

    /// Serialized Huffman tree could not be rebuilt.
    #[error("Malformed Huffman tree at offset {offset}: {message}")]
    MalformedTree {
        /// Byte offset within the tree buffer.
        offset: usize,
        /// Description of the problem.
        message: String,
    },

    /// Zero-length input submitted to a codec.
    #[error("Input is empty")]
    EmptyInput,

    /// Algorithm selector outside the supported set.
    #[error("Unsupported algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The rejected selector.
        name: String,
    },

    /// Fixed-size container header is truncated or inconsistent.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Huffman bitstream ended inside a partial code.
    #[error("Corrupt bitstream: incomplete code at bit position {bit_position}")]
    CorruptStream {
        /// Bit position where the unfinished code started.
        bit_position: u64,
    },

    /// RLE payload has a count byte with no value byte.
    #[error("Odd RLE payload length {length}: trailing count has no value")]
    OddRunPayload {
        /// Payload length after the magic.
        length: usize,
    },

    /// RLE pair with a count of zero.
    #[error("Zero-length run at offset {offset}")]
    ZeroLengthRun {
        /// Container offset of the count byte.
        offset: usize,
    },

    /// File name does not follow the compressed naming convention.
    #[error("Invalid file name '{name}': {message}")]
    InvalidFileName {
        /// The offending name.
        name: String,
        /// Description of the problem.
        message: String,
    },
}

/// Result type alias for OxiPack operations.
pub type Result<T> = std::result::Result<T, OxiPackError>;

impl OxiPackError {
    /// Create an invalid container error.
    pub fn invalid_container(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidContainer {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a malformed tree error.
    pub fn malformed_tree(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedTree {
            offset,
            message: message.into(),
        }
    }

    /// Create an unsupported algorithm error.
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(bit_position: u64) -> Self {
        Self::CorruptStream { bit_position }
    }

    /// Create an invalid file name error.
    pub fn invalid_file_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiPackError::invalid_container(b"HUF".to_vec(), b"XYZ".to_vec());
        assert!(err.to_string().contains("Invalid container"));

        let err = OxiPackError::unsupported_algorithm("lzw");
        assert!(err.to_string().contains("lzw"));

        let err = OxiPackError::malformed_tree(4, "buffer exhausted");
        assert!(err.to_string().contains("offset 4"));

        let err = OxiPackError::OddRunPayload { length: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiPackError = io_err.into();
        assert!(matches!(err, OxiPackError::Io(_)));
    }
}
