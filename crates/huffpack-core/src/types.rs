//! Core type definitions for compression operations.

use serde::{Deserialize, Serialize};

/// How the code table at the end of a container is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// Table runs until the end of the input; no entry count is stored.
    #[default]
    EndOfStream,

    /// A big-endian `u16` entry count precedes the table, and nothing may
    /// follow it.
    Counted,
}

impl TableFormat {
    /// Get format name as string.
    pub fn name(self) -> &'static str {
        match self {
            TableFormat::EndOfStream => "end-of-stream",
            TableFormat::Counted => "counted",
        }
    }

    /// Parse a format name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "end-of-stream" | "end_of_stream" | "eos" => Some(TableFormat::EndOfStream),
            "counted" => Some(TableFormat::Counted),
            _ => None,
        }
    }

    /// Bytes of framing this format adds ahead of the table entries.
    pub fn header_len(self) -> usize {
        match self {
            TableFormat::EndOfStream => 0,
            TableFormat::Counted => 2,
        }
    }
}

/// Compression ratio metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRatio {
    /// Original uncompressed size in bytes.
    pub original_size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
}

impl CompressionRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, compressed: usize) -> Self {
        CompressionRatio {
            original_size: original,
            compressed_size: compressed,
        }
    }

    /// Calculate ratio (original / compressed).
    /// Higher is better (more compression).
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.compressed_size as f64
    }

    /// Calculate space savings as percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - (self.compressed_size as f64 / self.original_size as f64)) * 100.0
    }

    /// Check if compression was effective (saved space).
    pub fn is_effective(&self) -> bool {
        self.compressed_size < self.original_size
    }
}
