//! Command implementations for OxiPack CLI.

pub mod compress;
pub mod decompress;
pub mod detect;
pub mod info;

pub use compress::{CompressOptions, cmd_compress};
pub use decompress::{DecompressOptions, cmd_decompress};
pub use detect::cmd_detect;
pub use info::cmd_info;
