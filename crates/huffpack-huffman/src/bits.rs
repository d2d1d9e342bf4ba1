//! Bit-level packing for payloads and code table entries.
//!
//! Bits are stored most-significant-bit first within each byte. A packed
//! buffer never records how many of its final byte's bits are real, so every
//! packed value travels with an explicit bit count.

use std::fmt;

use huffpack_core::{Error, Result};

/// Number of bytes needed to hold `bits` packed bits.
#[inline]
pub fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Pack a bit sequence into bytes, MSB first, zero-filling the last byte.
pub fn pack(bits: &[bool]) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(bits.len());
    for &bit in bits {
        writer.write_bit(bit);
    }
    writer.finish().into_bytes()
}

/// Unpack the first `bit_count` bits of `data`, MSB first.
///
/// Padding bits past `bit_count` are discarded. Fails if `data` is shorter
/// than `ceil(bit_count / 8)` bytes.
pub fn unpack(data: &[u8], bit_count: usize) -> Result<Vec<bool>> {
    Ok(BitReader::new(data, bit_count)?.collect())
}

/// A packed, length-tagged run of bits.
///
/// Equality and hashing go by content, which makes the type usable as a
/// lookup key. Bits past `len` in the final byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(byte_len(bits)),
            len: 0,
        }
    }

    /// Build a sequence from individual bits.
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bytes: pack(bits),
            len: bits.len(),
        }
    }

    /// Take the first `bit_count` bits of an already packed buffer.
    pub fn from_packed(data: &[u8], bit_count: usize) -> Result<Self> {
        let needed = byte_len(bit_count);
        if data.len() < needed {
            return Err(Error::unexpected_eof(data.len()));
        }

        let mut bytes = data[..needed].to_vec();
        let tail = bit_count % 8;
        if tail != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFFu8 << (8 - tail);
            }
        }

        Ok(Self {
            bytes,
            len: bit_count,
        })
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes, `ceil(len / 8)` of them.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the sequence, returning its packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the bit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    /// Append one bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Remove all bits, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.len = 0;
    }

    /// True if `self` is a prefix of `other` (equal sequences included).
    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        if self.len > other.len {
            return false;
        }
        let full = self.len / 8;
        if self.bytes[..full] != other.bytes[..full] {
            return false;
        }
        let tail = self.len % 8;
        if tail == 0 {
            return true;
        }
        let mask = 0xFFu8 << (8 - tail);
        self.bytes[full] == other.bytes[full] & mask
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> BitReader<'_> {
        BitReader {
            data: &self.bytes,
            bit_count: self.len,
            pos: 0,
        }
    }

    /// Expand into individual bits.
    pub fn to_bits(&self) -> Vec<bool> {
        self.iter().collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;
    type IntoIter = BitReader<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// MSB-first bit reader bounded by an explicit bit count.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_count: usize,
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_count` bits of `data`.
    pub fn new(data: &'a [u8], bit_count: usize) -> Result<Self> {
        if data.len() < byte_len(bit_count) {
            return Err(Error::unexpected_eof(data.len()));
        }
        Ok(Self {
            data,
            bit_count,
            pos: 0,
        })
    }

    /// Read a single bit, or `None` once `bit_count` bits have been read.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.pos >= self.bit_count {
            return None;
        }
        let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }

    /// Read `n` bits (at most 32) as an MSB-first integer.
    pub fn read_bits(&mut self, n: u8) -> Result<u32> {
        debug_assert!(n <= 32);
        if self.remaining() < n as usize {
            return Err(Error::unexpected_eof(self.byte_pos()));
        }
        let mut value = 0u32;
        for _ in 0..n {
            let bit = self.read_bit().unwrap_or(false);
            value = (value << 1) | bit as u32;
        }
        Ok(value)
    }

    /// Bits left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bit_count - self.pos
    }

    /// Get current byte position.
    pub fn byte_pos(&self) -> usize {
        self.pos / 8
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

/// MSB-first bit writer producing a [`BitSequence`].
pub struct BitWriter {
    data: Vec<u8>,
    bit_buf: u64,
    bit_count: u8,
    total_bits: usize,
}

impl BitWriter {
    /// Create a new bit writer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity(byte_len(bits)),
            bit_buf: 0,
            bit_count: 0,
            total_bits: 0,
        }
    }

    /// Write one bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u32, 1);
    }

    /// Write the low `n` bits of `value` (at most 32), most significant first.
    #[inline]
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= 32);
        if n == 0 {
            return;
        }
        let masked = (value as u64) & ((1u64 << n) - 1);
        self.bit_buf = (self.bit_buf << n) | masked;
        self.bit_count += n;
        self.total_bits += n as usize;

        while self.bit_count >= 8 {
            self.bit_count -= 8;
            self.data.push((self.bit_buf >> self.bit_count) as u8);
        }
        self.bit_buf &= (1u64 << self.bit_count) - 1;
    }

    /// Append every bit of `bits`.
    pub fn write_sequence(&mut self, bits: &BitSequence) {
        let full = bits.len() / 8;
        for &byte in &bits.as_bytes()[..full] {
            self.write_bits(byte as u32, 8);
        }
        let tail = (bits.len() % 8) as u8;
        if tail > 0 {
            self.write_bits((bits.as_bytes()[full] >> (8 - tail)) as u32, tail);
        }
    }

    /// Number of bits written so far.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.total_bits
    }

    /// Flush remaining bits (pad with zeros).
    pub fn finish(mut self) -> BitSequence {
        if self.bit_count > 0 {
            self.data.push((self.bit_buf << (8 - self.bit_count)) as u8);
        }
        BitSequence {
            bytes: self.data,
            len: self.total_bits,
        }
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
