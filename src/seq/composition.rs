use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::io::fasta::read_sequence_lines;

/// Per-symbol counts of a sequence. No alphabet is assumed: ambiguity codes,
/// gaps and lowercase letters are counted as distinct symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Composition {
    counts: BTreeMap<char, u64>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sequence(&mut self, seq: &str) {
        for nt in seq.chars() {
            *self.counts.entry(nt).or_insert(0) += 1;
        }
    }

    pub fn merge(&mut self, other: &Composition) {
        for (&nt, &count) in &other.counts {
            *self.counts.entry(nt).or_insert(0) += count;
        }
    }

    pub fn count(&self, nt: char) -> u64 {
        self.counts.get(&nt).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Share of `nt` among all symbols; 0 for an empty composition.
    pub fn fraction(&self, nt: char) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(nt) as f64 / total as f64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Symbols and counts in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&nt, &count)| (nt, count))
    }
}

pub fn nt_composition(seq: &str) -> Composition {
    let mut comp = Composition::new();
    comp.add_sequence(seq);
    comp
}

/// Composition of every non-header line of a (possibly gzipped) sequence file.
pub fn nt_composition_file<P: AsRef<Path>>(path: P) -> Result<Composition> {
    let mut comp = Composition::new();
    for line in read_sequence_lines(path)? {
        comp.add_sequence(&line?);
    }
    Ok(comp)
}
