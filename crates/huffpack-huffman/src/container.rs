//! Container serialization.
//!
//! ## Layout
//!
//! ```text
//! i32 BE      encoded bit count
//! [u8]        payload, ceil(bit count / 8) bytes, MSB-first
//! u16 BE      entry count            (TableFormat::Counted only)
//! per entry:
//!   u8        symbol
//!   u8        code length in bits (1..=255)
//!   [u8]      code, ceil(length / 8) bytes, MSB-first
//! ```
//!
//! With [`TableFormat::EndOfStream`] the table runs until the end of the
//! input, so the container must be the last thing in its buffer.

use huffpack_core::{Error, Result, TableFormat};
use tracing::warn;

use crate::bits::{byte_len, BitSequence};
use crate::code::CodeTable;

/// Largest bit count the signed 32-bit header can carry.
pub const MAX_ENCODED_BITS: usize = i32::MAX as usize;

/// Size of the bit count header in bytes.
pub const HEADER_SIZE: usize = 4;

/// An encoded payload together with the code table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    encoded: BitSequence,
    table: CodeTable,
}

impl CompressedData {
    /// Pair an encoded stream with its code table.
    pub fn new(encoded: BitSequence, table: CodeTable) -> Self {
        Self { encoded, table }
    }

    /// Payload length in bits.
    pub fn bit_count(&self) -> usize {
        self.encoded.len()
    }

    /// Packed payload bytes.
    pub fn payload(&self) -> &[u8] {
        self.encoded.as_bytes()
    }

    /// Encoded stream.
    pub fn encoded(&self) -> &BitSequence {
        &self.encoded
    }

    /// Code table.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Split into the encoded stream and the code table.
    pub fn into_parts(self) -> (BitSequence, CodeTable) {
        (self.encoded, self.table)
    }

    /// Exact size of the serialized container.
    pub fn serialized_len(&self, format: TableFormat) -> usize {
        let table: usize = self
            .table
            .iter()
            .map(|(_, code)| 2 + code.as_bytes().len())
            .sum();
        HEADER_SIZE + self.payload().len() + format.header_len() + table
    }

    /// Serialize into the container layout.
    pub fn to_bytes(&self, format: TableFormat) -> Result<Vec<u8>> {
        let bits = self.bit_count();
        if bits > MAX_ENCODED_BITS {
            return Err(Error::PayloadTooLarge {
                bits,
                max: MAX_ENCODED_BITS,
            });
        }

        let mut out = Vec::with_capacity(self.serialized_len(format));
        out.extend_from_slice(&(bits as i32).to_be_bytes());
        out.extend_from_slice(self.payload());

        if format == TableFormat::Counted {
            let count = u16::try_from(self.table.len())
                .map_err(|_| Error::invalid_tree(format!("{} table entries", self.table.len())))?;
            out.extend_from_slice(&count.to_be_bytes());
        }

        for (symbol, code) in self.table.iter() {
            let len = u8::try_from(code.len()).map_err(|_| {
                Error::invalid_tree(format!(
                    "code for symbol 0x{:02x} is {} bits long",
                    symbol,
                    code.len()
                ))
            })?;
            out.push(symbol);
            out.push(len);
            out.extend_from_slice(code.as_bytes());
        }

        Ok(out)
    }

    /// Parse a container.
    pub fn from_bytes(data: &[u8], format: TableFormat) -> Result<Self> {
        let mut reader = ByteReader::new(data);

        let bits = i32::from_be_bytes(reader.read_array::<4>()?);
        let bits = usize::try_from(bits)
            .map_err(|_| Error::corrupted_at(format!("negative bit count {}", bits), 0))?;

        let payload = reader.take(byte_len(bits))?;
        if has_padding_bits(payload, bits) {
            warn!(bits, "ignoring non-zero padding bits in payload");
        }
        let encoded = BitSequence::from_packed(payload, bits)?;

        let mut entries = Vec::new();
        match format {
            TableFormat::EndOfStream => {
                while !reader.is_empty() {
                    entries.push(read_entry(&mut reader)?);
                }
            }
            TableFormat::Counted => {
                let count = u16::from_be_bytes(reader.read_array::<2>()?);
                for _ in 0..count {
                    entries.push(read_entry(&mut reader)?);
                }
                if !reader.is_empty() {
                    return Err(Error::corrupted_at(
                        "trailing bytes after code table",
                        reader.pos(),
                    ));
                }
            }
        }

        let table = CodeTable::from_entries(entries)?;
        Ok(Self { encoded, table })
    }
}

fn read_entry(reader: &mut ByteReader<'_>) -> Result<(u8, BitSequence)> {
    let symbol = reader.read_u8()?;
    let len_offset = reader.pos();
    let len = reader.read_u8()? as usize;
    if len == 0 {
        return Err(Error::corrupted_at(
            format!("zero-length code for symbol 0x{:02x}", symbol),
            len_offset,
        ));
    }
    let code = BitSequence::from_packed(reader.take(byte_len(len))?, len)?;
    Ok((symbol, code))
}

fn has_padding_bits(payload: &[u8], bits: usize) -> bool {
    let tail = bits % 8;
    match payload.last() {
        Some(&last) if tail != 0 => last & (0xFFu8 >> tail) != 0,
        _ => false,
    }
}

/// Cursor over a byte slice that reports truncation as `UnexpectedEof`.
struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.data.len() - self.pos < n {
            return Err(Error::unexpected_eof(self.data.len()));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::compress;

    #[test]
    fn test_concrete_layout() {
        let compressed = compress(b"AAABBC").unwrap();
        let bytes = compressed.to_bytes(TableFormat::EndOfStream).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 9,                 // bit count
            0b0001_1111, 0b0000_0000,   // payload
            b'A', 1, 0b0000_0000,       // A = 0
            b'B', 2, 0b1100_0000,       // B = 11
            b'C', 2, 0b1000_0000,       // C = 10
        ];
        assert_eq!(bytes, expected);
        assert_eq!(compressed.serialized_len(TableFormat::EndOfStream), bytes.len());

        let parsed = CompressedData::from_bytes(&bytes, TableFormat::EndOfStream).unwrap();
        assert_eq!(parsed, compressed);
    }

    #[test]
    fn test_counted_layout() {
        let compressed = compress(b"AAABBC").unwrap();
        let bytes = compressed.to_bytes(TableFormat::Counted).unwrap();
        assert_eq!(&bytes[6..8], &[0, 3]);
        assert_eq!(compressed.serialized_len(TableFormat::Counted), bytes.len());
        assert_eq!(
            CompressedData::from_bytes(&bytes, TableFormat::Counted).unwrap(),
            compressed
        );
    }

    #[test]
    fn test_empty_container() {
        let compressed = compress(&[]).unwrap();
        let bytes = compressed.to_bytes(TableFormat::EndOfStream).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);

        let parsed = CompressedData::from_bytes(&bytes, TableFormat::EndOfStream).unwrap();
        assert_eq!(parsed.bit_count(), 0);
        assert!(parsed.table().is_empty());
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            CompressedData::from_bytes(&[0, 0], TableFormat::EndOfStream),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        assert!(matches!(
            CompressedData::from_bytes(&[0, 0, 0, 17, 0xFF], TableFormat::EndOfStream),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_truncated_entry() {
        // Entry declares a 9-bit code but carries one byte
        let bytes = [0, 0, 0, 1, 0x00, b'A', 9, 0x00];
        assert!(matches!(
            CompressedData::from_bytes(&bytes, TableFormat::EndOfStream),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_negative_bit_count() {
        let bytes = (-1i32).to_be_bytes();
        assert!(matches!(
            CompressedData::from_bytes(&bytes, TableFormat::EndOfStream),
            Err(Error::CorruptedData { .. })
        ));
    }

    #[test]
    fn test_zero_length_code() {
        let bytes = [0, 0, 0, 0, b'A', 0];
        assert!(matches!(
            CompressedData::from_bytes(&bytes, TableFormat::EndOfStream),
            Err(Error::CorruptedData { .. })
        ));
    }

    #[test]
    fn test_duplicate_symbol() {
        let bytes = [0, 0, 0, 0, b'A', 1, 0x00, b'A', 1, 0x80];
        assert!(matches!(
            CompressedData::from_bytes(&bytes, TableFormat::EndOfStream),
            Err(Error::CorruptedData { .. })
        ));
    }

    #[test]
    fn test_counted_rejects_trailing_bytes() {
        let compressed = compress(b"hello").unwrap();
        let mut bytes = compressed.to_bytes(TableFormat::Counted).unwrap();
        bytes.push(0);
        assert!(matches!(
            CompressedData::from_bytes(&bytes, TableFormat::Counted),
            Err(Error::CorruptedData { .. })
        ));
    }

    #[test]
    fn test_padding_bits_are_ignored() {
        let compressed = compress(b"AAABBC").unwrap();
        let mut bytes = compressed.to_bytes(TableFormat::EndOfStream).unwrap();
        bytes[5] |= 0b0111_1111;
        let parsed = CompressedData::from_bytes(&bytes, TableFormat::EndOfStream).unwrap();
        assert_eq!(parsed, compressed);
    }

    #[test]
    fn test_formats_are_not_interchangeable() {
        let compressed = compress(b"AAABBC").unwrap();
        let counted = compressed.to_bytes(TableFormat::Counted).unwrap();
        // The count bytes read as an entry for symbol 0 with a 3-bit code.
        let misread = CompressedData::from_bytes(&counted, TableFormat::EndOfStream);
        assert_ne!(misread.ok(), Some(compressed));
    }
}
