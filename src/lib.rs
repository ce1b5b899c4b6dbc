//! Nucleotide sequence primitives: FASTA reading, reverse complements,
//! two-strand k-mer counting, canonical folding, composition and translation.

pub mod config;
pub mod error;
pub mod io;
pub mod kmer;
pub mod seq;

pub use config::{CountConfig, StrandMode};
pub use error::{NucleoError, Result};
