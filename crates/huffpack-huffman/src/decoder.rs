//! Decoding: reverse code lookup over the payload bit by bit.

use huffpack_core::{Error, Result};
use tracing::{debug, trace};

use crate::bits::BitSequence;
use crate::code::{CodeTable, ReverseCodeTable};
use crate::container::CompressedData;

/// Recover the symbols of `encoded` using `table`.
///
/// Bits are accumulated until they spell a code, which emits its symbol and
/// resets the accumulator. Running out of bits mid-code, or accumulating
/// more bits than the longest code, fails with
/// [`Error::UnmatchedBitSequence`].
pub fn decode(encoded: &BitSequence, table: &CodeTable) -> Result<Vec<u8>> {
    let reverse = ReverseCodeTable::new(table)?;
    let max_code_len = reverse.max_code_len();

    let mut output = Vec::with_capacity(encoded.len() / max_code_len.max(1));
    let mut pending = BitSequence::with_capacity(max_code_len);

    for bit in encoded {
        pending.push(bit);
        if let Some(symbol) = reverse.get(&pending) {
            trace!(symbol, code = %pending, "decoded symbol");
            output.push(symbol);
            pending.clear();
        } else if pending.len() >= max_code_len {
            return Err(Error::unmatched(pending.len(), output.len()));
        }
    }

    if !pending.is_empty() {
        return Err(Error::unmatched(pending.len(), output.len()));
    }

    Ok(output)
}

/// Decompress a container back into the original bytes.
pub fn decompress(compressed: &CompressedData) -> Result<Vec<u8>> {
    let output = decode(compressed.encoded(), compressed.table())?;
    debug!(
        bits = compressed.bit_count(),
        output_len = output.len(),
        "decoded payload"
    );
    Ok(output)
}
