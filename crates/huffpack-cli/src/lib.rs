//! Huffpack command-line front end
//!
//! Reads one file, compresses or decompresses it whole, and writes the
//! result to another file.
//!
//! ## Usage
//!
//! ```bash
//! # Compress input.txt into output.bin
//! huffpack
//!
//! # Compress a specific file
//! huffpack -i notes.txt -o notes.huf
//!
//! # Decompress
//! huffpack -d -i notes.huf -o notes.txt
//! ```

pub mod config;
pub mod error;

use std::time::Instant;

use huffpack_core::{CompressionStats, Decompressor};
use huffpack_huffman::{HuffmanCompressor, HuffmanDecompressor};
use tracing::info;

pub use config::{JobConfig, Mode};
pub use error::{CliError, Result};

/// Outcome of a finished job
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Bytes read
    pub input_size: usize,

    /// Bytes written
    pub output_size: usize,

    /// Compression statistics, compress jobs only
    pub stats: Option<CompressionStats>,
}

/// Run a job to completion.
pub fn run(job: &JobConfig) -> Result<JobReport> {
    let input = std::fs::read(&job.input).map_err(|source| CliError::ReadInput {
        path: job.input.clone(),
        source,
    })?;
    info!(path = %job.input.display(), bytes = input.len(), "read input");

    let (output, stats) = match job.mode {
        Mode::Compress => {
            let compressor = HuffmanCompressor::with_config(job.codec.clone());
            let (output, stats) = compressor.compress_with_stats(&input)?;
            info!("{}", stats.summary());
            (output, Some(stats))
        }
        Mode::Decompress => {
            let start = Instant::now();
            let decompressor = HuffmanDecompressor::with_format(job.codec.table_format);
            let output = decompressor.decompress(&input)?;
            info!(
                bytes = output.len(),
                time_us = start.elapsed().as_micros() as u64,
                "decompressed"
            );
            (output, None)
        }
    };

    std::fs::write(&job.output, &output).map_err(|source| CliError::WriteOutput {
        path: job.output.clone(),
        source,
    })?;
    info!(path = %job.output.display(), bytes = output.len(), "wrote output");

    Ok(JobReport {
        input_size: input.len(),
        output_size: output.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_then_decompress_files() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("input.txt");
        let packed = dir.path().join("output.bin");
        let restored = dir.path().join("restored.txt");
        std::fs::write(&original, "she sells sea shells by the sea shore").unwrap();

        let report = run(&JobConfig::new(&original, &packed, Mode::Compress)).unwrap();
        assert_eq!(report.input_size, 37);
        assert!(report.stats.is_some());

        let report = run(&JobConfig::new(&packed, &restored, Mode::Decompress)).unwrap();
        assert_eq!(report.output_size, 37);
        assert!(report.stats.is_none());
        assert_eq!(
            std::fs::read(&restored).unwrap(),
            std::fs::read(&original).unwrap()
        );
    }

    #[test]
    fn test_concrete_container_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("input.txt");
        let packed = dir.path().join("output.bin");
        std::fs::write(&original, "AAABBC").unwrap();

        run(&JobConfig::new(&original, &packed, Mode::Compress)).unwrap();
        assert_eq!(
            std::fs::read(&packed).unwrap(),
            vec![0, 0, 0, 9, 0x1F, 0x00, b'A', 1, 0x00, b'B', 2, 0xC0, b'C', 2, 0x80]
        );
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("empty.txt");
        let packed = dir.path().join("empty.bin");
        std::fs::write(&original, "").unwrap();

        let report = run(&JobConfig::new(&original, &packed, Mode::Compress)).unwrap();
        assert_eq!(report.output_size, 4);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let job = JobConfig::new(
            dir.path().join("missing.txt"),
            dir.path().join("out.bin"),
            Mode::Compress,
        );
        assert!(matches!(run(&job), Err(CliError::ReadInput { .. })));
    }

    #[test]
    fn test_corrupt_container() {
        let dir = tempfile::tempdir().unwrap();
        let packed = dir.path().join("bad.bin");
        std::fs::write(&packed, [0, 0, 0, 40, 0xAB]).unwrap();

        let job = JobConfig::new(&packed, dir.path().join("out.txt"), Mode::Decompress);
        assert!(matches!(run(&job), Err(CliError::Codec(_))));
    }
}
