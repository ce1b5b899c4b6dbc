//! K-mer processing: reverse complements, counting, canonical folding and the integer codec.

pub mod kmer;
pub mod codec;
pub mod table;
pub mod counter;
pub mod canonical;

pub use canonical::canonical_kmers;
pub use codec::{all_kmers, decode_kmer, encode_kmer};
pub use counter::{count_kmers, count_kmers_many};
pub use kmer::{reverse_complement, reverse_complement_lenient, Kmer};
pub use table::{merge_tables, CountTable};
