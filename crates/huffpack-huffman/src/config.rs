//! Codec configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use huffpack_core::{Error, Result, TableFormat};

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// How the code table is delimited in the container
    #[serde(default)]
    pub table_format: TableFormat,

    /// Input size (bytes) from which frequency counting runs in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Bytes per parallel counting task
    #[serde(default = "default_parallel_chunk_size")]
    pub parallel_chunk_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            table_format: TableFormat::default(),
            parallel_threshold: default_parallel_threshold(),
            parallel_chunk_size: default_parallel_chunk_size(),
        }
    }
}

impl CodecConfig {
    /// Default configuration with a specific table format.
    pub fn with_format(table_format: TableFormat) -> Self {
        Self {
            table_format,
            ..Self::default()
        }
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CodecConfig =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the codec cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        if self.parallel_chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "parallel_chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_parallel_threshold() -> usize {
    1024 * 1024 // 1MB
}

fn default_parallel_chunk_size() -> usize {
    256 * 1024
}
