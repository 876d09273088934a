//! Textual header: `"<byte> <count>"` pairs for every non-zero count, in
//! ascending byte order, separated by single spaces.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

pub fn encode(table: &FrequencyTable) -> String {
    table
        .iter()
        .map(|(symbol, count)| format!("{} {}", symbol, count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a header back into a frequency table.
///
/// Blank text is the empty table. Anything else must be whitespace-separated
/// pairs of a byte value (0..=255) and a positive count, with no byte listed
/// twice, whose counts sum to at most `u64::MAX`.
pub fn decode(text: &str) -> Result<FrequencyTable> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(HuffmanError::invalid_header(format!(
            "expected byte/count pairs, found {} tokens",
            tokens.len()
        )));
    }

    let mut table = FrequencyTable::new();
    let mut total: u64 = 0;
    for pair in tokens.chunks_exact(2) {
        let symbol: u8 = pair[0].parse().map_err(|_| {
            HuffmanError::invalid_header(format!("`{}` is not a byte value", pair[0]))
        })?;
        let count: u64 = pair[1].parse().map_err(|_| {
            HuffmanError::invalid_header(format!("`{}` is not a valid count", pair[1]))
        })?;
        if count == 0 {
            return Err(HuffmanError::invalid_header(format!(
                "byte {} has a zero count",
                symbol
            )));
        }
        if table.get(symbol) != 0 {
            return Err(HuffmanError::invalid_header(format!(
                "byte {} is listed more than once",
                symbol
            )));
        }
        total = total.checked_add(count).ok_or_else(|| {
            HuffmanError::invalid_header("counts add up to more than a 64-bit total")
        })?;
        table.set(symbol, count);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_symbol_order() {
        let table = FrequencyTable::from_bytes(b"aaabbbbcc");
        assert_eq!(encode(&table), "97 3 98 4 99 2");
    }

    #[test]
    fn single_symbol_header() {
        assert_eq!(encode(&FrequencyTable::from_bytes(b"AAAAA")), "65 5");
    }

    #[test]
    fn empty_table_encodes_to_nothing() {
        assert_eq!(encode(&FrequencyTable::new()), "");
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \t").unwrap().is_empty());
    }

    #[test]
    fn decodes_what_it_encodes() {
        let table = FrequencyTable::from_bytes(b"\x00\x00\xff hello");
        assert_eq!(decode(&encode(&table)).unwrap(), table);
    }

    #[test]
    fn accepts_counts_summing_to_the_limit() {
        let table = decode("0 18446744073709551614 1 1").unwrap();
        assert_eq!(table.total(), u64::MAX);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let table = decode(" 97  3\t98 4\n").unwrap();
        assert_eq!(table.get(97), 3);
        assert_eq!(table.get(98), 4);
        assert_eq!(table.distinct(), 2);
    }

    #[test]
    fn rejects_malformed_headers() {
        for bad in [
            "97", "97 3 98", "256 1", "-1 4", "a 3", "97 x", "97 0", "97 1 97 2",
            "0 18446744073709551615 1 1",
        ] {
            assert!(
                matches!(decode(bad), Err(HuffmanError::InvalidHeader { .. })),
                "accepted `{bad}`"
            );
        }
    }
}
