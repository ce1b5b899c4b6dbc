use std::cmp::Ordering;

use crate::kmer::kmer::reverse_complement_lenient;
use crate::kmer::table::{Count, CountTable};

/// Fold a two-strand count table into canonical k-mer counts.
///
/// Each k-mer is merged with its reverse complement under the
/// lexicographically smaller of the two, and every count is halved since
/// the input already counted each occurrence once per strand. Palindromes
/// map to themselves and are assigned rather than accumulated.
///
/// With `return_all`, every input key is kept and maps to the folded value
/// of its representative.
pub fn canonical_kmers<C: Count>(kmers: &CountTable<C>, return_all: bool) -> CountTable<f64> {
    let mut canon: CountTable<f64> = CountTable::with_capacity(kmers.len());

    for (kmer, &count) in kmers.iter() {
        let half = count.as_f64() / 2.0;
        let kmer_rc = reverse_complement_lenient(kmer);

        match kmer.as_str().cmp(kmer_rc.as_str()) {
            Ordering::Less => *canon.entry(kmer.clone()).or_insert(0.0) += half,
            Ordering::Greater => *canon.entry(kmer_rc).or_insert(0.0) += half,
            Ordering::Equal => {
                canon.insert(kmer.clone(), half);
            }
        }
    }

    if return_all {
        for kmer in kmers.keys() {
            if !canon.contains_key(kmer) {
                let folded = canon
                    .get(&reverse_complement_lenient(kmer))
                    .copied()
                    .unwrap_or(0.0);
                canon.insert(kmer.clone(), folded);
            }
        }
    }

    canon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::table::total;

    fn raw(entries: &[(&str, u64)]) -> CountTable<u64> {
        entries.iter().map(|&(k, c)| (k.to_string(), c)).collect()
    }

    #[test]
    fn test_folds_pairs_under_smaller_key() {
        let canon = canonical_kmers(&raw(&[("AAC", 4), ("GTT", 2), ("CCC", 6)]), false);
        assert_eq!(canon.len(), 2);
        assert_eq!(canon["AAC"], 3.0);
        assert_eq!(canon["CCC"], 3.0);
        assert!(!canon.contains_key("GTT"));
    }

    #[test]
    fn test_palindrome_is_halved_once() {
        let canon = canonical_kmers(&raw(&[("ACGT", 5), ("AATT", 2)]), false);
        assert_eq!(canon["ACGT"], 2.5);
        assert_eq!(canon["AATT"], 1.0);
    }

    #[test]
    fn test_return_all_restores_partner_keys() {
        let input = raw(&[("AAC", 4), ("GTT", 2), ("ACGT", 2), ("GGG", 2)]);
        let canon = canonical_kmers(&input, true);
        assert!(input.keys().all(|k| canon.contains_key(k)));
        assert_eq!(canon["AAC"], 3.0);
        assert_eq!(canon["GTT"], 3.0);
        assert_eq!(canon["ACGT"], 1.0);
        // the representative of GGG is kept alongside it
        assert_eq!(canon["GGG"], 1.0);
        assert_eq!(canon["CCC"], 1.0);
        assert_eq!(canon.len(), 5);
        assert!(total(&canon) <= total(&input));
    }

    #[test]
    fn test_sum_is_half_without_return_all() {
        let input = raw(&[("A", 4), ("C", 4), ("G", 2), ("T", 2), ("AT", 7)]);
        let canon = canonical_kmers(&input, false);
        assert_eq!(total(&canon), total(&input) / 2.0);
    }

    #[test]
    fn test_non_acgt_keys_pass_through() {
        let canon = canonical_kmers(&raw(&[("N", 3), ("acg", 2), ("cgt", 2)]), false);
        assert_eq!(canon["N"], 1.5);
        assert_eq!(canon["acg"], 2.0);
        assert!(!canon.contains_key("cgt"));
    }

    #[test]
    fn test_accepts_float_counts() {
        let folded: CountTable<f64> = [("AC".to_string(), 3.0), ("GG".to_string(), 1.0)]
            .into_iter()
            .collect();
        let again = canonical_kmers(&folded, false);
        assert_eq!(again["AC"], 1.5);
        assert_eq!(again["CC"], 0.5);
    }
}
