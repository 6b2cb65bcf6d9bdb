//! Symbol frequency records.
//!
//! A [`Frequency`] pairs a byte value with its occurrence count in the input.
//! Internal tree nodes carry no symbol at all; that distinction lives in the
//! [`Node`](crate::tree::Node) enum rather than in a sentinel value here.

/// A symbol and the number of times it occurs in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    /// The byte value this record counts.
    pub symbol: u8,
    /// Occurrence count.
    pub count: u64,
}

impl Frequency {
    /// Create a new frequency record.
    pub fn new(symbol: u8, count: u64) -> Self {
        Self { symbol, count }
    }
}

/// Count the occurrences of every byte value in `data`.
///
/// The result contains one record per distinct byte, in ascending symbol
/// order. The fixed iteration order keeps downstream tree construction
/// deterministic for identical input.
pub fn count_frequencies(data: &[u8]) -> Vec<Frequency> {
    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(symbol, &count)| Frequency::new(symbol as u8, count))
        .collect()
}
