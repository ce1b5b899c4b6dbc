use thiserror::Error;

#[derive(Debug, Error)]
pub enum NucleoError {
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Invalid k-mer length {k} for sequence of length {len}")]
    InvalidLength { k: usize, len: usize },

    /// Zero-filling 4^k entries above the configured ceiling.
    #[error("Exhaustive enumeration for k={k} exceeds the limit of k={max}")]
    ExhaustiveLimit { k: usize, max: usize },

    #[error("DNA sequence length {len} is not divisible by 3")]
    LengthMismatch { len: usize },

    #[error("Unknown codon '{codon}' at position {position}")]
    UnknownCodon { codon: String, position: usize },

    #[error("Value {n} is out of range for k={k}")]
    Range { k: usize, n: u64 },

    #[error("Malformed FASTA at line {line}: {message}")]
    FastaFormat { line: usize, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NucleoError>;
