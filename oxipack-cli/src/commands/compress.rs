//! Compress command implementation.

use crate::utils::{compression_ratio, create_progress_bar, file_name_of, write_output};
use oxipack_codec::{Algorithm, compress_batch, compressed_file_name};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// JSON report for one compressed file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompressReport {
    file: String,
    algorithm: String,
    size: usize,
    new_size: usize,
    ratio: f64,
    output: String,
}

/// Options for the compress command.
pub struct CompressOptions<'a> {
    pub algorithm: Algorithm,
    pub output: &'a Path,
    pub force: bool,
    pub json: bool,
    pub progress: bool,
    pub verbose: bool,
}

pub fn cmd_compress(
    files: &[PathBuf],
    opts: &CompressOptions<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs: Vec<Vec<u8>> = files.iter().map(fs::read).collect::<io::Result<_>>()?;
    let results = compress_batch(&inputs, opts.algorithm);

    let pb = create_progress_bar(files.len() as u64, opts.progress && !opts.json);
    pb.set_message("files");

    let mut reports = Vec::new();
    let mut failures = 0;

    for ((path, input), result) in files.iter().zip(&inputs).zip(results) {
        pb.inc(1);

        let packed = match result {
            Ok(packed) => packed,
            Err(e) => {
                failures += 1;
                pb.println(format!("  Failed: {}: {}", path.display(), e));
                continue;
            }
        };

        let name = file_name_of(path)?;
        let out_path = opts.output.join(compressed_file_name(&name, opts.algorithm));
        if !write_output(&out_path, &packed, opts.force, &pb)? {
            pb.println(format!("  Skipped: {}", out_path.display()));
            continue;
        }

        if opts.verbose {
            pb.println(format!(
                "  Compressed: {} ({} -> {} bytes)",
                path.display(),
                input.len(),
                packed.len()
            ));
        }

        reports.push(CompressReport {
            file: path.display().to_string(),
            algorithm: opts.algorithm.to_string(),
            size: input.len(),
            new_size: packed.len(),
            ratio: compression_ratio(input.len(), packed.len()),
            output: out_path.display().to_string(),
        });
    }

    pb.finish_and_clear();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{} -> {} ({} -> {} bytes, ratio {:.2})",
                report.file, report.output, report.size, report.new_size, report.ratio
            );
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} files failed to compress", failures, files.len()).into());
    }

    Ok(())
}
