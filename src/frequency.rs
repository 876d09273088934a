use std::io::{self, BufReader, Read};
use std::ops::Index;

/// Number of distinct symbols: one per byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count for every byte value, indexed by the byte itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; ALPHABET_SIZE],
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = FrequencyTable::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Scans `reader` to the end, one byte at a time.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut table = FrequencyTable::new();
        for byte in BufReader::new(reader).bytes() {
            table.counts[byte? as usize] += 1;
        }
        Ok(table)
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Sum of all counts: the number of symbols in the source. Saturates at
    /// `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// `(symbol, count)` pairs with a non-zero count, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .map(move |symbol| (symbol, self.get(symbol)))
            .filter(|&(_, count)| count != 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u64;

    fn index(&self, symbol: u8) -> &u64 {
        &self.counts[symbol as usize]
    }
}
