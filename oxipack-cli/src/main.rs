//! OxiPack CLI
//!
//! Compress and decompress files with Huffman coding or run-length encoding.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{CompressOptions, DecompressOptions, cmd_compress, cmd_decompress, cmd_detect, cmd_info};
use oxipack_codec::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxipack")]
#[command(author, version, about = "Pure Rust Huffman and RLE file compression")]
#[command(long_about = "
OxiPack compresses files into self-describing HUF (Huffman) or RLE containers.

Examples:
  oxipack compress report.txt
  oxipack compress -a rle image.bmp -o packed
  oxipack decompress compressed/report.txt.huf
  oxipack decompress --lenient legacy.txt.huf
  oxipack detect report.txt.huf
  oxipack info report.txt.huf
  oxipack completions bash
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress one or more files
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Compression algorithm
        #[arg(short, long, value_enum, default_value = "huffman")]
        algorithm: AlgorithmArg,

        /// Output directory
        #[arg(short, long, default_value = "compressed")]
        output: PathBuf,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress one or more files
    #[command(alias = "d")]
    Decompress {
        /// Files to decompress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Algorithm to use (detected from the magic bytes when omitted)
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        /// Output directory
        #[arg(short, long, default_value = "decompressed")]
        output: PathBuf,

        /// Accept Huffman streams that end inside a code
        #[arg(long)]
        lenient: bool,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Detect the container format of a file
    Detect {
        /// File to inspect
        file: PathBuf,
    },

    /// Show container details
    #[command(alias = "i")]
    Info {
        /// Compressed file
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Huffman coding (.huf)
    Huffman,
    /// Run-length encoding (.rle)
    Rle,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Huffman => Algorithm::Huffman,
            AlgorithmArg::Rle => Algorithm::Rle,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            files,
            algorithm,
            output,
            force,
            json,
            progress,
            verbose,
        } => cmd_compress(
            &files,
            &CompressOptions {
                algorithm: algorithm.into(),
                output: &output,
                force,
                json,
                progress,
                verbose,
            },
        ),
        Commands::Decompress {
            files,
            algorithm,
            output,
            lenient,
            force,
            json,
            progress,
            verbose,
        } => cmd_decompress(
            &files,
            &DecompressOptions {
                algorithm: algorithm.map(Algorithm::from),
                output: &output,
                lenient,
                force,
                json,
                progress,
                verbose,
            },
        ),
        Commands::Detect { file } => cmd_detect(&file),
        Commands::Info { file } => cmd_info(&file),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxipack", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compress_defaults() {
        let cli = Cli::try_parse_from(["oxipack", "compress", "a.txt"]).unwrap();
        match cli.command {
            Commands::Compress {
                files,
                algorithm,
                output,
                ..
            } => {
                assert_eq!(files, vec![PathBuf::from("a.txt")]);
                assert_eq!(algorithm, AlgorithmArg::Huffman);
                assert_eq!(output, PathBuf::from("compressed"));
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_parse_decompress_auto() {
        let cli = Cli::try_parse_from(["oxipack", "decompress", "a.txt.rle", "--lenient"]).unwrap();
        match cli.command {
            Commands::Decompress {
                algorithm, lenient, ..
            } => {
                assert_eq!(algorithm, None);
                assert!(lenient);
            }
            _ => panic!("expected decompress"),
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Cli::try_parse_from(["oxipack", "compress", "-a", "lzw", "a.txt"]).is_err());
    }
}
