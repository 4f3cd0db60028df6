//! End-to-end tests of the selector-based compress/decompress contract.

use oxipack_codec::{
    Algorithm, OxiPackError, compress_named, compressed_file_name, decompress_named, detect,
    restored_file_name,
};

fn sample_inputs() -> Vec<Vec<u8>> {
    vec![
        vec![0],
        vec![7, 7, 7, 7],
        vec![1, 1, 1, 2, 2, 3],
        b"The quick brown fox jumps over the lazy dog".to_vec(),
        vec![0xAB; 300],
        (0..=255).collect(),
        (0..5000u32).map(|i| (i * i % 251) as u8).collect(),
    ]
}

#[test]
fn test_roundtrip_both_selectors() {
    for selector in ["huffman", "rle"] {
        for input in sample_inputs() {
            let packed = compress_named(&input, selector).expect("compression failed");
            let restored = decompress_named(&packed, selector).expect("decompression failed");
            assert_eq!(restored, input, "selector {}", selector);
        }
    }
}

#[test]
fn test_unsupported_selector() {
    for selector in ["", "lzw", "Huffman", "RLE "] {
        assert!(matches!(
            compress_named(b"data", selector),
            Err(OxiPackError::UnsupportedAlgorithm { .. })
        ));
        assert!(matches!(
            decompress_named(b"HUF", selector),
            Err(OxiPackError::UnsupportedAlgorithm { .. })
        ));
    }
}

#[test]
fn test_empty_input_both_directions() {
    for selector in ["huffman", "rle"] {
        assert!(matches!(compress_named(&[], selector), Err(OxiPackError::EmptyInput)));
        assert!(matches!(decompress_named(&[], selector), Err(OxiPackError::EmptyInput)));
    }
}

#[test]
fn test_foreign_magic() {
    let foreign = b"XYZ this is not a container";
    for selector in ["huffman", "rle"] {
        assert!(matches!(
            decompress_named(foreign, selector),
            Err(OxiPackError::InvalidContainer { .. })
        ));
    }
    assert_eq!(detect(foreign), None);
}

#[test]
fn test_cross_codec_rejected() {
    let huf = compress_named(b"payload", "huffman").unwrap();
    let rle = compress_named(b"payload", "rle").unwrap();
    assert_eq!(detect(&huf), Some(Algorithm::Huffman));
    assert_eq!(detect(&rle), Some(Algorithm::Rle));
    assert!(decompress_named(&huf, "rle").is_err());
    assert!(decompress_named(&rle, "huffman").is_err());
}

#[test]
fn test_file_name_convention() {
    let name = compressed_file_name("report.txt", Algorithm::Huffman);
    assert_eq!(name, "report.txt.huf");
    assert_eq!(restored_file_name(&name).unwrap(), "report.txt");
    assert!(matches!(
        restored_file_name("report.huf"),
        Err(OxiPackError::InvalidFileName { .. })
    ));
}
