//! Decompress command implementation.

use crate::utils::{create_progress_bar, file_name_of, write_output};
use oxipack_codec::{
    Algorithm, CodecOptions, HuffmanConfig, decompress_batch_with, detect, restored_file_name,
};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// JSON report for one decompressed file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecompressReport {
    file: String,
    algorithm: String,
    original_size: usize,
    decompressed_size: usize,
    output: String,
}

/// Options for the decompress command.
pub struct DecompressOptions<'a> {
    /// Algorithm to apply; detected per file when `None`.
    pub algorithm: Option<Algorithm>,
    pub output: &'a Path,
    pub lenient: bool,
    pub force: bool,
    pub json: bool,
    pub progress: bool,
    pub verbose: bool,
}

pub fn cmd_decompress(
    files: &[PathBuf],
    opts: &DecompressOptions<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs: Vec<Vec<u8>> = files.iter().map(fs::read).collect::<io::Result<_>>()?;

    let codec_options = CodecOptions {
        huffman: if opts.lenient {
            HuffmanConfig::LEGACY
        } else {
            HuffmanConfig::STRICT
        },
        ..CodecOptions::default()
    };
    let results = decompress_batch_with(&inputs, opts.algorithm, codec_options);

    let pb = create_progress_bar(files.len() as u64, opts.progress && !opts.json);
    pb.set_message("files");

    let mut reports = Vec::new();
    let mut failures = 0;

    for ((path, input), result) in files.iter().zip(&inputs).zip(results) {
        pb.inc(1);

        let name = file_name_of(path)?;
        let restored = result.and_then(|data| restored_file_name(&name).map(|restored| (restored, data)));
        let (restored_name, data) = match restored {
            Ok(pair) => pair,
            Err(e) => {
                failures += 1;
                pb.println(format!("  Failed: {}: {}", path.display(), e));
                continue;
            }
        };

        let out_path = opts.output.join(restored_name);
        if !write_output(&out_path, &data, opts.force, &pb)? {
            pb.println(format!("  Skipped: {}", out_path.display()));
            continue;
        }

        if opts.verbose {
            pb.println(format!(
                "  Decompressed: {} ({} -> {} bytes)",
                path.display(),
                input.len(),
                data.len()
            ));
        }

        let algorithm = opts.algorithm.or_else(|| detect(input));
        reports.push(DecompressReport {
            file: path.display().to_string(),
            algorithm: algorithm.map_or_else(|| "unknown".to_string(), |a| a.to_string()),
            original_size: input.len(),
            decompressed_size: data.len(),
            output: out_path.display().to_string(),
        });
    }

    pb.finish_and_clear();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{} -> {} ({} -> {} bytes)",
                report.file, report.output, report.original_size, report.decompressed_size
            );
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} files failed to decompress", failures, files.len()).into());
    }

    Ok(())
}
