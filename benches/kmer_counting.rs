use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nucleo::kmer::canonical::canonical_kmers;
use nucleo::kmer::counter::{count_kmers, count_kmers_many};
use nucleo::{CountConfig, StrandMode};
use rand::Rng;

/// Generate random DNA sequences for benchmarking
fn generate_sequences(num_seqs: usize, seq_len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let bases = ['A', 'C', 'G', 'T'];

    (0..num_seqs)
        .map(|_| {
            (0..seq_len)
                .map(|_| bases[rng.gen_range(0..4)])
                .collect()
        })
        .collect()
}

/// Benchmark counting under both strand modes
fn bench_kmer_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmer_counting");

    for num_seqs in [100, 1000, 10000] {
        let sequences = generate_sequences(num_seqs, 150); // 150bp reads
        let total_bases: usize = sequences.iter().map(|s| s.len()).sum();

        group.throughput(Throughput::Bytes(total_bases as u64));

        for (name, strand) in [
            ("forward", StrandMode::Forward),
            ("reverse_complement", StrandMode::ReverseComplement),
        ] {
            let config = CountConfig::new(11).strand(strand);
            group.bench_with_input(BenchmarkId::new(name, num_seqs), &sequences, |b, seqs| {
                b.iter(|| black_box(count_kmers_many(seqs, &config).unwrap()))
            });
        }
    }

    group.finish();
}

/// Benchmark canonical folding of a single long sequence
fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical");
    let sequence = generate_sequences(1, 100_000).remove(0);

    for k in [4, 8, 12] {
        let raw = count_kmers(&sequence, &CountConfig::new(k)).unwrap();
        group.bench_with_input(BenchmarkId::new("fold", k), &raw, |b, raw| {
            b.iter(|| black_box(canonical_kmers(raw, false)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kmer_counting, bench_canonical);
criterion_main!(benches);
