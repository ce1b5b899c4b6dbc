use crate::error::{NucleoError, Result};

pub type Kmer = String;

/// Watson-Crick partner of a DNA symbol, preserving case.
#[inline]
pub fn complement(c: char) -> Option<char> {
    match c {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        'a' => Some('t'),
        't' => Some('a'),
        'c' => Some('g'),
        'g' => Some('c'),
        _ => None,
    }
}

/// Byte-level counterpart of [`complement`]; anything else is returned unchanged.
#[inline]
pub fn complement_byte(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Returns the reverse complement of a DNA sequence.
///
/// Only `ATCGatcg` are accepted; the first other character is reported with
/// its (character) position in the input.
pub fn reverse_complement(seq: &str) -> Result<String> {
    let complemented = seq
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            complement(symbol).ok_or(NucleoError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<char>>>()?;
    Ok(complemented.into_iter().rev().collect())
}

/// Reverse complement over an extended alphabet: `ATCGatcg` are complemented,
/// every other character is kept as-is.
///
/// Used where ambiguity codes may appear in k-mers; the counter drops any
/// k-mer holding them.
pub fn reverse_complement_lenient(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| complement(c).unwrap_or(c))
        .collect()
}

/// Byte-slice reverse complement with the same pass-through rule as
/// [`reverse_complement_lenient`].
pub fn reverse_complement_bytes(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_byte(b)).collect()
}

/// True when a k-mer equals its own reverse complement.
pub fn is_palindrome(kmer: &str) -> bool {
    kmer == reverse_complement_lenient(kmer)
}

/// Returns the canonical form of a k-mer (lexicographically smaller of forward and reverse complement)
pub fn canonical_kmer(kmer: &str) -> Kmer {
    let rc = reverse_complement_lenient(kmer);
    if kmer <= rc.as_str() {
        kmer.to_string()
    } else {
        rc
    }
}

/// True for windows made only of uppercase `A`, `C`, `G`, `T`.
#[inline]
pub fn is_acgt(window: &[u8]) -> bool {
    window.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
}
