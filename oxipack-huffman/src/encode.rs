//! Huffman compression.

use crate::codes::CodeTable;
use crate::container::HEADER_SIZE;
use crate::tree::HuffmanTree;
use oxipack_core::error::{OxiPackError, Result};
use oxipack_core::{BitWriter, HUFFMAN_MAGIC, PackedBits, ensure_non_empty};

/// Pack every input byte's code into one MSB-first bitstream.
///
/// Fails if `table` lacks a code for some input byte, which only happens
/// when the table was built from a different input.
pub fn pack(input: &[u8], table: &CodeTable) -> Result<PackedBits> {
    let mut writer = BitWriter::with_capacity(input.len() / 2);

    for &byte in input {
        let code = table.get(byte).ok_or_else(|| {
            OxiPackError::malformed_tree(0, format!("tree has no leaf for byte {:#04x}", byte))
        })?;
        writer.write_bits(code.bits, code.len);
    }

    Ok(writer.finish())
}

/// Compress `input` into a HUF container.
///
/// # Algorithm
///
/// 1. Count byte frequencies and build the tree
/// 2. Derive the code table from the tree
/// 3. Pack the codes of all input bytes, recording the pad bit count
/// 4. Emit magic, tree size, serialized tree, pad byte and packed bits
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    ensure_non_empty(input)?;

    let tree = HuffmanTree::from_bytes(input)?;
    let table = CodeTable::from_tree(&tree);
    let packed = pack(input, &table)?;
    let tree_bytes = tree.serialize();

    let mut output = Vec::with_capacity(HEADER_SIZE + tree_bytes.len() + 1 + packed.bytes.len());
    output.extend_from_slice(&HUFFMAN_MAGIC);
    output.extend_from_slice(&(tree_bytes.len() as u32).to_be_bytes());
    output.extend_from_slice(&tree_bytes);
    output.push(packed.pad);
    output.extend_from_slice(&packed.bytes);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_layout() {
        // Codes: 1 -> 0, 3 -> 10, 2 -> 11
        // Bits: 0 0 0 11 11 10 = 000111110 -> 00011111 0(0000000), pad 7
        let compressed = compress(&[1, 1, 1, 2, 2, 3]).unwrap();
        assert_eq!(&compressed[..3], b"HUF");
        assert_eq!(&compressed[3..7], &[0, 0, 0, 8]);
        assert_eq!(&compressed[7..15], &[0, 1, 1, 0, 1, 3, 1, 2]);
        assert_eq!(compressed[15], 7);
        assert_eq!(&compressed[16..], &[0b0001_1111, 0b0000_0000]);
    }

    #[test]
    fn test_compress_single_value() {
        let compressed = compress(&[7, 7, 7, 7]).unwrap();
        assert_eq!(
            compressed,
            vec![b'H', b'U', b'F', 0, 0, 0, 2, 1, 7, 4, 0b0000_0000]
        );
    }

    #[test]
    fn test_compress_empty() {
        assert!(matches!(compress(&[]), Err(OxiPackError::EmptyInput)));
    }

    #[test]
    fn test_padding_invariant() {
        let mut data = Vec::new();
        for len in 1..64usize {
            data.push((len * 37 % 11) as u8);
            let tree = HuffmanTree::from_bytes(&data).unwrap();
            let packed = pack(&data, &CodeTable::from_tree(&tree)).unwrap();
            assert!(packed.pad <= 7);
            assert_eq!((packed.bit_len() + packed.pad as u64) % 8, 0);
        }
    }

    #[test]
    fn test_skewed_input_compresses() {
        let mut data = vec![b'a'; 4000];
        data.extend_from_slice(b"bcdefgh");
        let compressed = compress(&data).unwrap();
        assert!(compressed.len() < data.len() / 4);
    }
}
