//! Info command implementation.

use oxipack_codec::{Algorithm, require_detect};
use std::fs;
use std::path::Path;

pub fn cmd_info(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let algorithm = require_detect(&data)?;

    println!("File: {}", file.display());
    println!("Format: {}", algorithm);
    println!("Container size: {} bytes", data.len());

    match algorithm {
        Algorithm::Huffman => {
            let info = oxipack_huffman::ContainerInfo::parse(&data)?;
            println!("Tree size: {} bytes", info.tree_size);
            println!("Distinct bytes: {}", info.leaf_count);
            println!("Longest code: {} bits", info.max_code_len);
            println!("Payload: {} bytes ({} bits + {} pad)", info.payload_size, info.bit_len, info.pad);
        }
        Algorithm::Rle => {
            let info = oxipack_rle::ContainerInfo::parse(&data)?;
            println!("Runs: {}", info.pairs);
            println!("Longest run: {}", info.longest_run);
            println!("Decompressed size: {} bytes", info.decoded_size);
        }
    }

    Ok(())
}
