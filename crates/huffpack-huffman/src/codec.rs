//! Huffman codec (compressor, decompressor and combined codec).

use std::time::Instant;

use huffpack_core::{
    Codec, CompressionStats, Compressor, Decompressor, Result, TableFormat,
};
use tracing::debug;

use crate::code::MAX_CODE_BITS;
use crate::config::CodecConfig;
use crate::container::{CompressedData, HEADER_SIZE};
use crate::decoder::decompress;
use crate::encoder::{compress_with_config, count_frequencies};

/// Upper bound on the serialized code table: every symbol with the
/// longest possible code.
const MAX_TABLE_SIZE: usize = 256 * (2 + MAX_CODE_BITS.div_ceil(8));

// ============================================================================
// Compressor
// ============================================================================

/// Huffman compressor producing serialized containers.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCompressor {
    config: CodecConfig,
}

impl HuffmanCompressor {
    /// Create a new compressor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a table format.
    pub fn with_format(format: TableFormat) -> Self {
        Self::with_config(CodecConfig::with_format(format))
    }

    /// Create from a full configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress and report statistics for the run.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = Instant::now();
        let compressed = compress_with_config(input, &self.config)?;
        let output = compressed.to_bytes(self.config.table_format)?;
        let time_us = start.elapsed().as_micros() as u64;

        let frequencies = count_frequencies(input, &self.config);
        let stats = CompressionStats {
            original_size: input.len(),
            compressed_size: output.len(),
            encoded_bits: compressed.bit_count(),
            distinct_symbols: compressed.table().len(),
            max_code_len: compressed.table().max_code_len(),
            entropy_bits: frequencies.entropy_bits(),
            time_us,
        };
        debug!(summary = %stats.summary(), "compressed");

        Ok((output, stats))
    }
}

impl Compressor for HuffmanCompressor {
    fn table_format(&self) -> TableFormat {
        self.config.table_format
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress_with_config(input, &self.config)?.to_bytes(self.config.table_format)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // An optimal prefix code over bytes averages under 9 bits a symbol
        HEADER_SIZE
            + input_len.saturating_mul(9).div_ceil(8)
            + self.config.table_format.header_len()
            + MAX_TABLE_SIZE
    }
}

// ============================================================================
// Decompressor
// ============================================================================

/// Huffman decompressor reading serialized containers.
#[derive(Debug, Clone, Default)]
pub struct HuffmanDecompressor {
    format: TableFormat,
}

impl HuffmanDecompressor {
    /// Create a new decompressor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create for a table format.
    pub fn with_format(format: TableFormat) -> Self {
        Self { format }
    }
}

impl Decompressor for HuffmanDecompressor {
    fn table_format(&self) -> TableFormat {
        self.format
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let compressed = CompressedData::from_bytes(input, self.format)?;
        decompress(&compressed)
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Huffman codec combining compression and decompression.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    compressor: HuffmanCompressor,
    decompressor: HuffmanDecompressor,
}

impl HuffmanCodec {
    /// Create a new codec with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new codec using the given table format.
    pub fn with_format(format: TableFormat) -> Self {
        Self::with_config(CodecConfig::with_format(format))
    }

    /// Create from a full configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        let format = config.table_format;
        Self {
            compressor: HuffmanCompressor::with_config(config),
            decompressor: HuffmanDecompressor::with_format(format),
        }
    }

    /// Compress and report statistics for the run.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        self.compressor.compress_with_stats(input)
    }
}

impl Compressor for HuffmanCodec {
    fn table_format(&self) -> TableFormat {
        Compressor::table_format(&self.compressor)
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compressor.compress(input)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.compressor.compress_to(input, output)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        self.compressor.max_compressed_size(input_len)
    }
}

impl Decompressor for HuffmanCodec {
    fn table_format(&self) -> TableFormat {
        Decompressor::table_format(&self.decompressor)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompressor.decompress(input)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.decompressor.decompress_to(input, output)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec::new()
    }

    fn with_format(format: TableFormat) -> Self {
        HuffmanCodec::with_format(format)
    }
}
