//! Detect command implementation.

use oxipack_codec::{algorithm_from_file_name, detect};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn cmd_detect(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut magic = Vec::with_capacity(3);
    File::open(file)?.take(3).read_to_end(&mut magic)?;

    println!("File: {}", file.display());
    match detect(&magic) {
        Some(algorithm) => {
            println!("Format: {}", algorithm);
            println!("Extension: .{}", algorithm.extension());
        }
        None => println!("Format: unknown"),
    }
    println!("Magic bytes: {:02X?}", magic);

    let hint = file
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(algorithm_from_file_name);
    if let Some(hinted) = hint {
        if detect(&magic) != Some(hinted) {
            println!("Warning: extension suggests {} but contents do not match", hinted);
        }
    }

    Ok(())
}
