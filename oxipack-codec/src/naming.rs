//! File naming convention for compressed output.
//!
//! A compressed file keeps the full original name and appends the codec
//! extension: `report.txt` becomes `report.txt.huf`. Restoring drops the last
//! segment and keeps the one before it as the original extension, so the
//! compressed name must have at least three dot-separated segments.

use oxipack_core::Algorithm;
use oxipack_core::error::{OxiPackError, Result};

/// Name of the compressed file for `original`.
pub fn compressed_file_name(original: &str, algorithm: Algorithm) -> String {
    format!("{}.{}", original, algorithm.extension())
}

/// Recover the original file name from a compressed file name.
///
/// `report.txt.huf` restores to `report.txt` and `a.b.c.rle` to `a.b.c`.
pub fn restored_file_name(compressed: &str) -> Result<String> {
    let parts: Vec<&str> = compressed.split('.').collect();
    if parts.len() < 3 {
        return Err(OxiPackError::invalid_file_name(
            compressed,
            "compressed file must include the original extension",
        ));
    }

    let extension = parts[parts.len() - 2];
    let base = parts[..parts.len() - 2].join(".");
    Ok(format!("{}.{}", base, extension))
}

/// Algorithm implied by a compressed file name's extension.
pub fn algorithm_from_file_name(name: &str) -> Option<Algorithm> {
    let (_, extension) = name.rsplit_once('.')?;
    Algorithm::ALL
        .into_iter()
        .find(|algorithm| algorithm.extension() == extension)
}
