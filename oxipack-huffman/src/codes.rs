//! Prefix-code assignment from a built tree.

use crate::tree::{HuffmanNode, HuffmanTree};
use std::fmt;

/// A variable-length code, stored right-aligned in `bits`.
///
/// Tree depth grows with the logarithm of the input length, so 128 bits
/// cover any input that fits in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    /// Code bits; the first bit to emit is bit `len - 1`.
    pub bits: u128,
    /// Number of bits in the code.
    pub len: u8,
}

impl Code {
    /// Append a branch bit.
    fn push(self, bit: bool) -> Self {
        Self {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1,
        }
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other
                .bits
                .checked_shr((other.len - self.len) as u32)
                .unwrap_or(0)
                == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in (0..self.len).rev() {
            let bit = if (self.bits >> shift) & 1 == 1 { '1' } else { '0' };
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Byte value to code mapping derived from a [`HuffmanTree`].
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Walk `tree` and assign `0` to left branches and `1` to right branches.
    ///
    /// A tree made of a single leaf has no branches; its value gets the
    /// one-bit code `0` so every symbol still occupies at least one bit.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = [None; 256];

        match tree.root() {
            HuffmanNode::Leaf { value, .. } => {
                codes[*value as usize] = Some(Code { bits: 0, len: 1 });
            }
            root => assign(root, Code::default(), &mut codes),
        }

        Self { codes }
    }

    /// Code for a byte value, if it occurred in the input.
    pub fn get(&self, byte: u8) -> Option<Code> {
        self.codes[byte as usize]
    }

    /// Number of coded byte values.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// Whether no byte value has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(byte, code)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.map(|code| (byte as u8, code)))
    }
}

fn assign(node: &HuffmanNode, prefix: Code, codes: &mut [Option<Code>; 256]) {
    match node {
        HuffmanNode::Leaf { value, .. } => codes[*value as usize] = Some(prefix),
        HuffmanNode::Internal { left, right, .. } => {
            assign(left, prefix.push(false), codes);
            assign(right, prefix.push(true), codes);
        }
    }
}
