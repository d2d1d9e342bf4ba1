//! Statistics for compression operations.

use crate::types::CompressionRatio;

/// Statistics from a single compression run.
#[derive(Debug, Clone, Default)]
pub struct CompressionStats {
    /// Original (uncompressed) size in bytes.
    pub original_size: usize,

    /// Size of the whole container in bytes.
    pub compressed_size: usize,

    /// Length of the encoded payload in bits.
    pub encoded_bits: usize,

    /// Number of distinct symbols in the input.
    pub distinct_symbols: usize,

    /// Longest code in the table, in bits.
    pub max_code_len: usize,

    /// Shannon lower bound for the payload, in bits.
    pub entropy_bits: f64,

    /// Time taken in microseconds.
    pub time_us: u64,
}

impl CompressionStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Average payload bits spent per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_size as f64
    }

    /// Payload overhead above the entropy bound, as a fraction (0.0 = optimal).
    pub fn redundancy(&self) -> f64 {
        if self.entropy_bits <= 0.0 {
            return 0.0;
        }
        (self.encoded_bits as f64 - self.entropy_bits) / self.entropy_bits
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.time_us as f64
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} bytes ({:.1}% saved), {} symbols, {:.3} bits/symbol, max code {} bits, {:.1} MB/s",
            self.original_size,
            self.compressed_size,
            self.savings_percent(),
            self.distinct_symbols,
            self.bits_per_symbol(),
            self.max_code_len,
            self.throughput_mbs(),
        )
    }
}
