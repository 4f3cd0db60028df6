//! MSB-first bit packing with explicit pad accounting.
//!
//! Variable-length codes are packed most-significant bit first: the first bit
//! written lands in bit 7 of the first output byte. The final partial byte is
//! right-padded with zero bits and the number of pad bits (0-7) is reported
//! alongside the packed bytes, so a reader can strip them exactly.
//!
//! # Example
//!
//! ```
//! use oxipack_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//! let packed = writer.finish();
//! assert_eq!(packed.bytes, vec![0b1011_1000]);
//! assert_eq!(packed.pad, 1);
//!
//! let mut reader = BitReader::new(&packed.bytes, packed.pad).unwrap();
//! assert_eq!(reader.bits_remaining(), 7);
//! assert_eq!(reader.read_bit(), Some(true));
//! ```

use crate::error::{OxiPackError, Result};

/// Packed bitstream plus the number of zero bits appended to fill the last byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBits {
    /// Packed bytes, MSB-first.
    pub bytes: Vec<u8>,
    /// Pad bits at the end of the last byte (0-7).
    pub pad: u8,
}

impl PackedBits {
    /// Number of meaningful bits, excluding padding.
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8 - self.pad as u64
    }
}

/// MSB-first bit writer over an in-memory buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Partial byte being filled from the MSB side.
    current: u8,
    /// Number of bits already placed in `current`.
    filled: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            current: 0,
            filled: 0,
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current = (self.current << 1) | bit as u8;
        self.filled += 1;
        if self.filled == 8 {
            self.output.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    #[inline]
    pub fn write_bits(&mut self, value: u128, count: u8) {
        debug_assert!(count <= 128, "Cannot write more than 128 bits at once");

        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.output.len() as u64 * 8 + self.filled as u64
    }

    /// Pad the final byte with zeros and return the packed stream.
    pub fn finish(mut self) -> PackedBits {
        let mut pad = 0;
        if self.filled > 0 {
            pad = 8 - self.filled;
            self.output.push(self.current << pad);
        }

        PackedBits {
            bytes: self.output,
            pad,
        }
    }
}

/// MSB-first bit reader that stops before the trailing pad bits.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Packed input.
    data: &'a [u8],
    /// Index of the next bit to read.
    position: u64,
    /// Number of meaningful bits in `data`.
    total_bits: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` whose last `pad` bits are filler.
    ///
    /// Fails if `pad` is outside 0-7 or larger than the stream itself.
    pub fn new(data: &'a [u8], pad: u8) -> Result<Self> {
        if pad > 7 {
            return Err(OxiPackError::invalid_header(format!(
                "pad bit count {} exceeds 7",
                pad
            )));
        }

        let available = data.len() as u64 * 8;
        if (pad as u64) > available {
            return Err(OxiPackError::invalid_header(format!(
                "pad bit count {} exceeds payload of {} bits",
                pad, available
            )));
        }

        Ok(Self {
            data,
            position: 0,
            total_bits: available - pad as u64,
        })
    }

    /// Read the next bit, or `None` once the meaningful bits are exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.position >= self.total_bits {
            return None;
        }

        let byte = self.data[(self.position / 8) as usize];
        let bit = (byte >> (7 - (self.position % 8))) & 1 == 1;
        self.position += 1;
        Some(bit)
    }

    /// Index of the next bit to be read.
    pub fn bit_position(&self) -> u64 {
        self.position
    }

    /// Meaningful bits not yet read.
    pub fn bits_remaining(&self) -> u64 {
        self.total_bits - self.position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits_remaining() as usize;
        (remaining, Some(remaining))
    }
}
