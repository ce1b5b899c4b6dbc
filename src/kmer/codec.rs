//! Bijection between k-mers over `ACGT` and integers in `0..4^k`.
//!
//! Each base is one base-4 digit (`A=0, C=1, G=2, T=3`), most significant
//! digit first, so integer order is lexicographic k-mer order.

use crate::config::MAX_ENUMERABLE_K;
use crate::error::{NucleoError, Result};
use crate::kmer::kmer::Kmer;

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Widest k-mer that fits 2 bits per base in a `u64`.
pub const MAX_ENCODED_K: usize = 32;

/// Number of distinct k-mers, or `None` when 4^k does not fit in a `u64`.
pub fn kmer_space(k: usize) -> Option<u64> {
    u32::try_from(k).ok().and_then(|k| 4u64.checked_pow(k))
}

#[inline]
fn base_value(b: u8) -> Option<u64> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Encodes an uppercase DNA k-mer as a 64-bit integer (2 bits per nucleotide, max 32-mer).
pub fn encode_kmer(kmer: &str) -> Result<u64> {
    let k = kmer.len();
    if k == 0 || k > MAX_ENCODED_K {
        return Err(NucleoError::Range { k, n: 0 });
    }
    let mut val: u64 = 0;
    for (position, symbol) in kmer.chars().enumerate() {
        let digit = u8::try_from(symbol)
            .ok()
            .and_then(base_value)
            .ok_or(NucleoError::InvalidSymbol { symbol, position })?;
        val = (val << 2) | digit;
    }
    Ok(val)
}

/// Decodes `n` into the unique k-mer of length `k` whose base-4 reading is `n`.
///
/// `k` must lie in `1..=32`; at `k = 32` every `u64` is a valid code.
pub fn decode_kmer(k: usize, n: u64) -> Result<Kmer> {
    if k == 0 || k > MAX_ENCODED_K {
        return Err(NucleoError::Range { k, n });
    }
    if let Some(space) = kmer_space(k) {
        if n >= space {
            return Err(NucleoError::Range { k, n });
        }
    }
    Ok(decode_unchecked(k, n))
}

fn decode_unchecked(k: usize, n: u64) -> Kmer {
    (0..k)
        .map(|x| {
            let digit = (n >> (2 * (k - 1 - x))) & 3;
            BASES[digit as usize] as char
        })
        .collect()
}

/// Iterator over all 4^k k-mers in integer (lexicographic) order.
pub struct AllKmers {
    k: usize,
    next: u64,
    end: u64,
}

/// Enumerate the full k-mer space. `k` must lie in `1..=31`.
pub fn all_kmers(k: usize) -> Result<AllKmers> {
    if k == 0 || k > MAX_ENUMERABLE_K {
        return Err(NucleoError::Range { k, n: 0 });
    }
    let end = kmer_space(k).ok_or(NucleoError::Range { k, n: 0 })?;
    Ok(AllKmers { k, next: 0, end })
}

impl Iterator for AllKmers {
    type Item = Kmer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let kmer = decode_unchecked(self.k, self.next);
        self.next += 1;
        Some(kmer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
