//! Two-strand k-mer counting.
//!
//! Every window offset `i` in `0..=len-k` contributes two increments: the
//! forward k-mer, and a second k-mer chosen by [`StrandMode`]. Only
//! uppercase `ACGT` k-mers are kept.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{CountConfig, StrandMode};
use crate::error::{NucleoError, Result};
use crate::kmer::codec::all_kmers;
use crate::kmer::kmer::{is_acgt, reverse_complement_bytes};
use crate::kmer::table::{merge_tables, CountTable};

/// Count the k-mers of a single sequence.
pub fn count_kmers(seq: &str, config: &CountConfig) -> Result<CountTable<u64>> {
    let k = config.k;
    check_exhaustive_limit(config)?;
    let len = seq.chars().count();
    if k == 0 || k > len {
        return Err(NucleoError::InvalidLength { k, len });
    }

    let mut kmers = count_windows(seq.as_bytes(), k, config.strand);
    if config.exhaustive {
        fill_missing(&mut kmers, k)?;
    }
    Ok(kmers)
}

/// Count k-mers across many sequences and sum the tables.
///
/// Sequences are counted in parallel and merged by per-key addition; zero
/// filling runs once on the total. Sequences shorter than `k` are skipped.
pub fn count_kmers_many<S>(seqs: &[S], config: &CountConfig) -> Result<CountTable<u64>>
where
    S: AsRef<str> + Sync,
{
    let k = config.k;
    check_exhaustive_limit(config)?;
    let lengths: Vec<usize> = seqs.iter().map(|s| s.as_ref().chars().count()).collect();
    let longest = lengths.iter().copied().max().unwrap_or(0);
    if k == 0 || k > longest {
        return Err(NucleoError::InvalidLength { k, len: longest });
    }

    let skipped = lengths.iter().filter(|&&len| len < k).count();
    if skipped > 0 {
        debug!("Skipping {} sequences shorter than k={}", skipped, k);
    }

    let mut kmers = seqs
        .par_iter()
        .zip(lengths.par_iter())
        .filter(|&(_, &len)| len >= k)
        .map(|(s, _)| count_windows(s.as_ref().as_bytes(), k, config.strand))
        .reduce(CountTable::new, merge_tables);

    if config.exhaustive {
        fill_missing(&mut kmers, k)?;
    }
    info!(
        "Counted {} distinct {}-mers over {} sequences",
        kmers.len(),
        k,
        seqs.len() - skipped
    );
    Ok(kmers)
}

fn check_exhaustive_limit(config: &CountConfig) -> Result<()> {
    if config.exhaustive && config.k > config.max_exhaustive_k {
        return Err(NucleoError::ExhaustiveLimit {
            k: config.k,
            max: config.max_exhaustive_k,
        });
    }
    Ok(())
}

/// Caller guarantees `1 <= k` and at least `k` characters, hence at least `k` bytes.
fn count_windows(seq: &[u8], k: usize, strand: StrandMode) -> CountTable<u64> {
    let mut kmers = CountTable::new();
    let mut add = |window: &[u8]| {
        // only uppercase ACGT k-mers are ever keys
        if is_acgt(window) {
            let kmer: String = window.iter().map(|&b| b as char).collect();
            *kmers.entry(kmer).or_insert(0) += 1;
        }
    };

    match strand {
        StrandMode::Forward => {
            for window in seq.windows(k) {
                add(window);
                add(window);
            }
        }
        StrandMode::ReverseComplement => {
            let rc_seq = reverse_complement_bytes(seq);
            for (forward, reverse) in seq.windows(k).zip(rc_seq.windows(k)) {
                add(forward);
                add(reverse);
            }
        }
    }
    kmers
}

fn fill_missing(kmers: &mut CountTable<u64>, k: usize) -> Result<()> {
    for kmer in all_kmers(k)? {
        kmers.entry(kmer).or_insert(0);
    }
    Ok(())
}
