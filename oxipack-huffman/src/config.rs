//! Huffman decoder configuration.

/// Decoder behaviour for tampered or foreign bitstreams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Reject a bitstream that ends inside a partial code.
    ///
    /// When `false`, the unfinished code is silently dropped.
    pub strict_trailing_bits: bool,
}

impl HuffmanConfig {
    /// Reject incomplete trailing codes with `CorruptStream`.
    pub const STRICT: Self = Self {
        strict_trailing_bits: true,
    };

    /// Drop incomplete trailing codes, as older HUF readers did.
    pub const LEGACY: Self = Self {
        strict_trailing_bits: false,
    };
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::STRICT
    }
}
