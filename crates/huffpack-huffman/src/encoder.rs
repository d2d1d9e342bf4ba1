//! Encoding: frequency analysis, code generation and payload packing.

use huffpack_core::{Error, Result};
use tracing::debug;

use crate::bits::{BitSequence, BitWriter};
use crate::code::CodeTable;
use crate::config::CodecConfig;
use crate::container::CompressedData;
use crate::frequency::FrequencyTable;

/// Concatenate the code of every input byte, in input order.
///
/// Every byte must have a code; a missing entry is an error, never skipped.
pub fn encode(input: &[u8], table: &CodeTable) -> Result<BitSequence> {
    encode_with_capacity(input, table, input.len())
}

fn encode_with_capacity(input: &[u8], table: &CodeTable, capacity_bits: usize) -> Result<BitSequence> {
    let mut writer = BitWriter::with_capacity(capacity_bits);
    for &byte in input {
        let code = table
            .get(byte)
            .ok_or(Error::MissingCodeForSymbol { symbol: byte })?;
        writer.write_sequence(code);
    }
    Ok(writer.finish())
}

/// Compress `input` with the default configuration.
pub fn compress(input: &[u8]) -> Result<CompressedData> {
    compress_with_config(input, &CodecConfig::default())
}

/// Compress `input`: count frequencies, build codes, encode.
pub fn compress_with_config(input: &[u8], config: &CodecConfig) -> Result<CompressedData> {
    let frequencies = count_frequencies(input, config);
    debug!(
        input_len = input.len(),
        distinct = frequencies.distinct_symbols(),
        "counted symbol frequencies"
    );

    let table = CodeTable::from_frequencies(&frequencies)?;
    let expected_bits = table.encoded_bit_len(&frequencies) as usize;
    debug!(
        entries = table.len(),
        max_code_len = table.max_code_len(),
        "generated code table"
    );

    let encoded = encode_with_capacity(input, &table, expected_bits)?;
    debug_assert_eq!(encoded.len(), expected_bits);
    debug!(bits = encoded.len(), "encoded payload");

    Ok(CompressedData::new(encoded, table))
}

#[cfg(feature = "parallel")]
pub(crate) fn count_frequencies(input: &[u8], config: &CodecConfig) -> FrequencyTable {
    if input.len() >= config.parallel_threshold {
        FrequencyTable::from_bytes_parallel(input, config.parallel_chunk_size)
    } else {
        FrequencyTable::from_bytes(input)
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn count_frequencies(input: &[u8], _config: &CodecConfig) -> FrequencyTable {
    FrequencyTable::from_bytes(input)
}
