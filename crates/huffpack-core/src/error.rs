//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// The Huffman tree or the code generator reached a state the merge
    /// algorithm can never produce.
    #[error("invalid tree state: {message}")]
    InvalidTreeState { message: String },

    /// Decoding ran out of bits (or past the longest code) while holding
    /// a partial code that matches no symbol.
    #[error("unmatched bit sequence: {pending_bits} pending bits after {decoded_symbols} symbols")]
    UnmatchedBitSequence {
        pending_bits: usize,
        decoded_symbols: usize,
    },

    /// Encoding met a byte with no entry in the code table.
    #[error("missing code for symbol 0x{symbol:02x}")]
    MissingCodeForSymbol { symbol: u8 },

    /// Input data is corrupted or invalid.
    #[error("corrupted data: {message}")]
    CorruptedData {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// Unexpected end of input stream.
    #[error("unexpected EOF after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// Encoded stream does not fit the container's bit count field.
    #[error("payload too large: {bits} bits exceeds the limit of {max}")]
    PayloadTooLarge { bits: usize, max: usize },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error from underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
            source: None,
        }
    }

    /// Create a corrupted data error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
            source: None,
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Error::UnexpectedEof { bytes_read }
    }

    /// Create an invalid tree state error.
    pub fn invalid_tree(message: impl Into<String>) -> Self {
        Error::InvalidTreeState {
            message: message.into(),
        }
    }

    /// Create an unmatched bit sequence error.
    pub fn unmatched(pending_bits: usize, decoded_symbols: usize) -> Self {
        Error::UnmatchedBitSequence {
            pending_bits,
            decoded_symbols,
        }
    }

    /// True for errors that indicate a bug in the codec rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::InvalidTreeState { .. } | Error::MissingCodeForSymbol { .. }
        )
    }

    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidTreeState { .. } => "invalid_tree_state",
            Error::UnmatchedBitSequence { .. } => "unmatched_bit_sequence",
            Error::MissingCodeForSymbol { .. } => "missing_code_for_symbol",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::PayloadTooLarge { .. } => "payload_too_large",
            Error::InvalidConfig(_) => "invalid_config",
            Error::Io(_) => "io_error",
        }
    }
}
