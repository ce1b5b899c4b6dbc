//! Count tables: k-mer keyed maps of raw (`u64`) or folded (`f64`) counts.

use ahash::AHashMap;

use crate::kmer::kmer::Kmer;

pub type CountTable<C> = AHashMap<Kmer, C>;

/// Numeric count stored in a [`CountTable`].
pub trait Count: Copy + Send + Sync {
    fn as_f64(self) -> f64;
}

impl Count for u32 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Count for u64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Count for usize {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Count for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

/// Add every count of `other` into `into`, per key.
pub fn merge_into(into: &mut CountTable<u64>, other: CountTable<u64>) {
    if into.len() < other.len() {
        let smaller = std::mem::replace(into, other);
        for (kmer, count) in smaller {
            *into.entry(kmer).or_insert(0) += count;
        }
    } else {
        for (kmer, count) in other {
            *into.entry(kmer).or_insert(0) += count;
        }
    }
}

/// Per-key sum of two raw tables.
pub fn merge_tables(mut a: CountTable<u64>, b: CountTable<u64>) -> CountTable<u64> {
    merge_into(&mut a, b);
    a
}

pub fn total<C: Count>(table: &CountTable<C>) -> f64 {
    table.values().map(|c| c.as_f64()).sum()
}

/// Entries sorted by k-mer, for stable output.
pub fn sorted_entries<C: Count>(table: &CountTable<C>) -> Vec<(&str, C)> {
    let mut entries: Vec<_> = table.iter().map(|(k, &c)| (k.as_str(), c)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}
