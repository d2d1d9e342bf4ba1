//! Job configuration.

use std::path::{Path, PathBuf};

use huffpack_core::TableFormat;
use huffpack_huffman::CodecConfig;

use crate::error::{CliError, Result};

/// Direction of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    /// Mode selected by the decode flag.
    pub fn from_decode_flag(decode: bool) -> Self {
        if decode {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }
}

/// A fully resolved compress or decompress job
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// File to read
    pub input: PathBuf,

    /// File to write
    pub output: PathBuf,

    /// Direction
    pub mode: Mode,

    /// Codec settings
    pub codec: CodecConfig,
}

impl JobConfig {
    /// Job with default codec settings.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode,
            codec: CodecConfig::default(),
        }
    }

    /// Load codec settings from a JSON file.
    pub fn with_config_file(mut self, path: &Path) -> Result<Self> {
        self.codec = CodecConfig::load(path)?;
        Ok(self)
    }

    /// Override the table format by name.
    pub fn with_table_format(mut self, name: &str) -> Result<Self> {
        self.codec.table_format = TableFormat::from_name(name)
            .ok_or_else(|| CliError::UnknownTableFormat(name.to_string()))?;
        Ok(self)
    }
}
