//! Byte frequency analysis.

/// Occurrence count of every byte value in an input.
///
/// Only symbols with a non-zero count are considered present; iteration
/// visits them in ascending symbol order.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.count(data);
        table
    }

    /// Count `data` split across the rayon pool.
    ///
    /// Per-chunk counts are summed, so the result is identical to
    /// [`FrequencyTable::from_bytes`].
    #[cfg(feature = "parallel")]
    pub fn from_bytes_parallel(data: &[u8], chunk_size: usize) -> Self {
        use rayon::prelude::*;

        data.par_chunks(chunk_size.max(1))
            .map(FrequencyTable::from_bytes)
            .reduce(FrequencyTable::new, |mut acc, part| {
                acc.merge(&part);
                acc
            })
    }

    /// Add the bytes of `data` to the counts.
    pub fn count(&mut self, data: &[u8]) {
        // Process 4 bytes at a time to reduce loop overhead
        let chunks = data.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            self.counts[chunk[0] as usize] += 1;
            self.counts[chunk[1] as usize] += 1;
            self.counts[chunk[2] as usize] += 1;
            self.counts[chunk[3] as usize] += 1;
        }

        for &b in remainder {
            self.counts[b as usize] += 1;
        }
    }

    /// Add another table's counts to this one.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Count for `symbol` (zero if absent).
    #[inline]
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Present symbols and their counts, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct symbols present.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Check if no byte has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Shannon entropy of the whole input in bits: the lower bound for any
    /// symbol-by-symbol prefix code.
    pub fn entropy_bits(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.iter()
            .map(|(_, count)| {
                let count = count as f64;
                -count * (count / total).log2()
            })
            .sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
