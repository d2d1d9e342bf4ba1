//! Huffpack Huffman Compressor
//!
//! ## Usage
//!
//! ```bash
//! # Compress input.txt into output.bin
//! huffpack
//!
//! # Custom paths
//! huffpack --input book.txt --output book.huf
//!
//! # Decompress with a counted code table
//! huffpack -d -i book.huf -o book.txt --table-format counted
//!
//! # Codec settings from a JSON file
//! huffpack -c huffpack.json -i book.txt -o book.huf
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use huffpack_cli::{run, JobConfig, Mode};

#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(version)]
#[command(about = "Byte-oriented Huffman compressor", long_about = None)]
struct Args {
    /// File to read
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// File to write
    #[arg(short, long, default_value = "output.bin")]
    output: PathBuf,

    /// Decompress instead of compress
    #[arg(short, long)]
    decode: bool,

    /// Codec configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Code table format (end-of-stream, counted); overrides the config file
    #[arg(long)]
    table_format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut job = JobConfig::new(args.input, args.output, Mode::from_decode_flag(args.decode));
    if let Some(ref path) = args.config {
        job = job.with_config_file(path)?;
    }
    if let Some(ref name) = args.table_format {
        job = job.with_table_format(name)?;
    }

    info!(
        mode = ?job.mode,
        input = %job.input.display(),
        output = %job.output.display(),
        table_format = job.codec.table_format.name(),
        "starting"
    );

    match run(&job) {
        Ok(report) => {
            info!(
                input_bytes = report.input_size,
                output_bytes = report.output_size,
                "done"
            );
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
