use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Inputs longer than this (in characters) are counted in parallel chunks.
const PARALLEL_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const CHUNK_SIZE: usize = 16_000;

/// Occurrence count of every distinct character in a text.
///
/// Characters are Unicode scalar values, so a multi-byte character is one symbol.
/// The table also remembers the order in which characters first appeared. That order
/// is what the tree builder uses to break ties between equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<char, usize>,
    order: Vec<char>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a frequency count of the text. Uses parallelism when the text is over 64k characters.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() > PARALLEL_THRESHOLD {
            // Chunks are folded and reduced in input order, so first appearances survive the merge.
            chars
                .par_chunks(CHUNK_SIZE)
                .fold(FrequencyTable::new, |mut table, chunk| {
                    chunk.iter().for_each(|&c| table.add(c));
                    table
                })
                .reduce(FrequencyTable::new, |mut a, b| {
                    a.merge(b);
                    a
                })
        } else {
            let mut table = FrequencyTable::new();
            chars.iter().for_each(|&c| table.add(c));
            table
        }
    }

    /// Count one more occurrence of `c`.
    pub fn add(&mut self, c: char) {
        self.add_count(c, 1);
    }

    /// Add `n` occurrences of `c`. Zero counts are ignored so every entry stays positive.
    pub fn add_count(&mut self, c: char, n: usize) {
        if n == 0 {
            return;
        }
        match self.counts.get_mut(&c) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(c, n);
                self.order.push(c);
            }
        }
    }

    /// Fold another table into this one. Characters new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: FrequencyTable) {
        let FrequencyTable { mut counts, order } = other;
        for c in order {
            if let Some(n) = counts.remove(&c) {
                self.add_count(c, n);
            }
        }
    }

    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted text in characters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// (character, count) pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.order.iter().map(move |c| (*c, self.counts[c]))
    }

    /// (character, count) pairs by descending count. Equal counts keep first-appearance order.
    pub fn sorted_by_count(&self) -> Vec<(char, usize)> {
        let mut pairs: Vec<(char, usize)> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        iter.into_iter().for_each(|c| table.add(c));
        table
    }
}
