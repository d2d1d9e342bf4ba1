//! Prefix code tables derived from a Huffman tree.

use std::collections::{BTreeMap, HashMap};

use huffpack_core::{Error, Result};
use tracing::trace;

use crate::bits::BitSequence;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// Longest code the container can describe (its length field is one byte).
pub const MAX_CODE_BITS: usize = u8::MAX as usize;

/// Symbol to prefix code mapping.
///
/// Iteration and serialization go in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, BitSequence>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive codes by walking the tree: `0` going left, `1` going right.
    ///
    /// A tree that is a single leaf gets the one-bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut table = CodeTable::new();
        match tree.root() {
            Node::Leaf { symbol, .. } => {
                table.codes.insert(*symbol, BitSequence::from_bits(&[false]));
            }
            root => {
                let mut path = Vec::with_capacity(tree.depth());
                table.assign(root, &mut path)?;
            }
        }
        Ok(table)
    }

    /// Build the table for a frequency table; empty input gives an empty table.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        match HuffmanTree::build(frequencies) {
            Some(tree) => Self::from_tree(&tree),
            None => Ok(CodeTable::new()),
        }
    }

    /// Build a table from stored entries, rejecting anything a tree walk
    /// could not have produced.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, BitSequence)>,
    {
        let mut table = CodeTable::new();
        for (symbol, code) in entries {
            if code.is_empty() || code.len() > MAX_CODE_BITS {
                return Err(Error::corrupted(format!(
                    "code length {} for symbol 0x{:02x}",
                    code.len(),
                    symbol
                )));
            }
            if table.codes.insert(symbol, code).is_some() {
                return Err(Error::corrupted(format!(
                    "duplicate entry for symbol 0x{:02x}",
                    symbol
                )));
            }
        }

        if !table.is_prefix_free() {
            return Err(Error::corrupted("code table is not prefix-free"));
        }
        Ok(table)
    }

    fn assign(&mut self, node: &Node, path: &mut Vec<bool>) -> Result<()> {
        match node {
            Node::Leaf { symbol, .. } => {
                if path.len() > MAX_CODE_BITS {
                    return Err(Error::invalid_tree(format!(
                        "symbol 0x{:02x} at depth {}",
                        symbol,
                        path.len()
                    )));
                }
                let code = BitSequence::from_bits(path);
                trace!(symbol = *symbol, %code, "assigned code");
                if self.codes.insert(*symbol, code).is_some() {
                    return Err(Error::invalid_tree(format!(
                        "symbol 0x{:02x} has two leaves",
                        symbol
                    )));
                }
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                self.assign(left, path)?;
                path.pop();

                path.push(true);
                self.assign(right, path)?;
                path.pop();
            }
        }
        Ok(())
    }

    /// Code for `symbol`.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&BitSequence> {
        self.codes.get(&symbol)
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSequence)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Longest code length in bits (0 for an empty table).
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitSequence::len).max().unwrap_or(0)
    }

    /// Payload length in bits for input with these frequencies.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .map(|(symbol, count)| count * self.get(symbol).map_or(0, BitSequence::len) as u64)
            .sum()
    }

    /// True if no code is a prefix of another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts directly before one of its
        // extensions, so adjacent pairs are enough.
        let mut sorted: Vec<Vec<bool>> = self.codes.values().map(BitSequence::to_bits).collect();
        sorted.sort();
        sorted
            .windows(2)
            .all(|pair| !pair[1].starts_with(&pair[0]))
    }
}

/// Code to symbol mapping used by the decoder.
#[derive(Debug, Clone)]
pub struct ReverseCodeTable {
    lookup: HashMap<BitSequence, u8>,
    max_code_len: usize,
}

impl ReverseCodeTable {
    /// Invert a code table. Fails if two symbols share a code.
    pub fn new(table: &CodeTable) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(table.len());
        for (symbol, code) in table.iter() {
            if let Some(previous) = lookup.insert(code.clone(), symbol) {
                return Err(Error::corrupted(format!(
                    "symbols 0x{:02x} and 0x{:02x} share code {}",
                    previous, symbol, code
                )));
            }
        }
        Ok(Self {
            lookup,
            max_code_len: table.max_code_len(),
        })
    }

    /// Symbol whose code is exactly `code`.
    #[inline]
    pub fn get(&self, code: &BitSequence) -> Option<u8> {
        self.lookup.get(code).copied()
    }

    /// Longest code length in bits.
    #[inline]
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: &str) -> BitSequence {
        let bits: Vec<bool> = bits.chars().map(|c| c == '1').collect();
        BitSequence::from_bits(&bits)
    }

    #[test]
    fn test_concrete_codes() {
        let table = CodeTable::from_frequencies(&FrequencyTable::from_bytes(b"AAABBC")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'A'), Some(&code("0")));
        assert_eq!(table.get(b'C'), Some(&code("10")));
        assert_eq!(table.get(b'B'), Some(&code("11")));
        assert_eq!(table.max_code_len(), 2);
        assert_eq!(
            table.encoded_bit_len(&FrequencyTable::from_bytes(b"AAABBC")),
            9
        );
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = CodeTable::from_frequencies(&FrequencyTable::from_bytes(&[0x41; 1000])).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0x41), Some(&code("0")));
    }

    #[test]
    fn test_empty_frequencies_empty_table() {
        let table = CodeTable::from_frequencies(&FrequencyTable::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max_code_len(), 0);
    }

    #[test]
    fn test_all_symbols_prefix_free() {
        let data: Vec<u8> = (0..=255u8)
            .flat_map(|b| std::iter::repeat(b).take(1 + b as usize % 17))
            .collect();
        let table = CodeTable::from_frequencies(&FrequencyTable::from_bytes(&data)).unwrap();
        assert_eq!(table.len(), 256);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_from_entries_rejects_invalid() {
        assert!(CodeTable::from_entries([(1, code("0")), (2, code("1"))]).is_ok());
        assert!(CodeTable::from_entries([(1, BitSequence::new())]).is_err());
        assert!(CodeTable::from_entries([(1, code("0")), (1, code("1"))]).is_err());
        assert!(CodeTable::from_entries([(1, code("0")), (2, code("01"))]).is_err());
    }

    #[test]
    fn test_reverse_table_inverts() {
        let table = CodeTable::from_frequencies(&FrequencyTable::from_bytes(b"hello world")).unwrap();
        let reverse = ReverseCodeTable::new(&table).unwrap();
        assert_eq!(reverse.len(), table.len());
        for (symbol, code) in table.iter() {
            assert_eq!(reverse.get(code), Some(symbol));
        }
        assert_eq!(reverse.max_code_len(), table.max_code_len());
    }
}
