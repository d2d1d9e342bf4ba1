//! # Huffpack Core
//!
//! Core traits, error types and statistics shared by the huffpack crates.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use huffpack_core::{Codec, TableFormat};
//! use huffpack_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::with_format(TableFormat::Counted);
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{CompressionRatio, TableFormat};
