//! # OxiPack Core
//!
//! Core components for the OxiPack compression toolkit.
//!
//! - [`bitstream`]: MSB-first bit packing with explicit pad accounting
//! - [`algorithm`]: Algorithm selector and container magic markers
//! - [`traits`]: The whole-buffer [`Codec`] trait
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     oxipack CLI (file I/O, naming, reports)             │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Dispatch                                            │
//! │     oxipack-codec (selector, detection, batches)        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Codec                                               │
//! │     oxipack-huffman, oxipack-rle                        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L0: Core (this crate)                                   │
//! │     BitWriter/BitReader, Algorithm, Codec, errors       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipack_core::{Algorithm, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b10, 2);
//! let packed = writer.finish();
//! assert_eq!(packed.pad, 6);
//!
//! assert_eq!("rle".parse::<Algorithm>().unwrap(), Algorithm::Rle);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithm;
pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use algorithm::{Algorithm, HUFFMAN_MAGIC, RLE_MAGIC};
pub use bitstream::{BitReader, BitWriter, PackedBits};
pub use error::{OxiPackError, Result};
pub use traits::{Codec, ensure_non_empty};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::bitstream::{BitReader, BitWriter, PackedBits};
    pub use crate::error::{OxiPackError, Result};
    pub use crate::traits::Codec;
}
