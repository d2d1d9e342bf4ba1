//! # Huffpack Huffman
//!
//! Byte-oriented Huffman compression with a self-describing container.
//!
//! Compression is two-pass: symbol frequencies are counted over the whole
//! input, an optimal prefix code is built from them, and the input is
//! re-encoded with that code. The container stores the bit-exact payload
//! next to the code table, so decompression needs no side information.
//!
//! ## Pipeline
//!
//! ```text
//! bytes ─→ FrequencyTable ─→ HuffmanTree ─→ CodeTable ─→ encode ─→ CompressedData
//!                                                                        │
//! bytes ←─ decode ←─ ReverseCodeTable ←─ CodeTable ←─────────────────────┘
//! ```
//!
//! Tree construction is deterministic: equal weights are merged in the
//! order they entered the queue, leaves entering in ascending symbol order.
//! The same input therefore always produces the same container.
//!
//! ## Example
//!
//! ```
//! use huffpack_core::{Compressor, Decompressor};
//! use huffpack_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let packed = codec.compress(b"AAABBC").unwrap();
//! assert_eq!(codec.decompress(&packed).unwrap(), b"AAABBC");
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod config;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

// Re-export main types
pub use codec::{HuffmanCodec, HuffmanCompressor, HuffmanDecompressor};
pub use config::CodecConfig;
pub use container::CompressedData;

// Re-export building blocks for advanced use
pub use bits::{pack, unpack, BitReader, BitSequence, BitWriter};
pub use code::{CodeTable, ReverseCodeTable};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, Node};

// Re-export raw functions
pub use decoder::{decode, decompress};
pub use encoder::{compress, compress_with_config, encode};
