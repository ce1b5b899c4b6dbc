//! DNA to peptide translation with the standard genetic code.
//!
//! The table holds every uppercase codon (uppercase amino acids) and every
//! lowercase codon (lowercase amino acids); `*` marks a stop in both.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use tracing::warn;

use crate::error::{NucleoError, Result};

// Codon order: AAA, AAC, AAG, AAT, ACA, ..., TTG, TTT (A=0, C=1, G=2, T=3).
const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Standard genetic code (NCBI Table 1).
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

static STANDARD: Lazy<CodonTable> = Lazy::new(|| CodonTable::from_amino_acids(&STANDARD_AA));

/// Codon → amino acid lookup covering both letter cases.
#[derive(Debug, Clone)]
pub struct CodonTable {
    codons: AHashMap<[u8; 3], u8>,
}

impl CodonTable {
    /// The standard code, built on first use and shared for the process lifetime.
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    /// Build a table from 64 amino acids in `AAA..TTT` codon order.
    pub fn from_amino_acids(amino_acids: &[u8; 64]) -> Self {
        let mut codons = AHashMap::with_capacity(128);
        for (idx, &aa) in amino_acids.iter().enumerate() {
            let codon = [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]];
            codons.insert(codon, aa);
            codons.insert(codon.map(|b| b.to_ascii_lowercase()), aa.to_ascii_lowercase());
        }
        CodonTable { codons }
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    /// Exact lookup, then a lowercase retry for mixed-case codons.
    pub fn lookup(&self, codon: &[u8]) -> Option<u8> {
        let codon: [u8; 3] = codon.try_into().ok()?;
        self.codons
            .get(&codon)
            .or_else(|| self.codons.get(&codon.map(|b| b.to_ascii_lowercase())))
            .copied()
    }
}

/// Translate a DNA sequence whose length (in characters) is a multiple of 3.
pub fn translate(dna: &str, table: &CodonTable) -> Result<String> {
    let symbols: Vec<char> = dna.chars().collect();
    if symbols.len() % 3 != 0 {
        return Err(NucleoError::LengthMismatch { len: symbols.len() });
    }

    symbols
        .chunks_exact(3)
        .enumerate()
        .map(|(i, codon)| {
            let bytes: Option<Vec<u8>> = codon.iter().map(|&c| c.is_ascii().then(|| c as u8)).collect();
            bytes
                .and_then(|bytes| table.lookup(&bytes))
                .map(char::from)
                .ok_or_else(|| NucleoError::UnknownCodon {
                    codon: codon.iter().collect(),
                    position: i * 3,
                })
        })
        .collect()
}

/// Like [`translate`], but a length that is not a multiple of 3 logs a
/// warning and yields an empty peptide instead of an error.
pub fn translate_lenient(dna: &str, table: &CodonTable) -> Result<String> {
    match translate(dna, table) {
        Err(NucleoError::LengthMismatch { len }) => {
            warn!("DNA sequence length {} is not divisible by 3", len);
            Ok(String::new())
        }
        other => other,
    }
}
