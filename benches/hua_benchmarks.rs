//! Hua Dict Benchmarks
//!
//! Benchmarks for the dictionary engine, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hua_dict_lib::data_structures::hua_trie::HuaTrie;
use std::time::Duration;

/// Deterministic pseudo-random words over the dictionary alphabet.
fn generate_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_hua_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("hua_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = generate_words(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = HuaTrie::new();
                for word in words {
                    trie.insert(black_box(word));
                }
                trie
            });
        });

        let mut trie = HuaTrie::new();
        for word in &words {
            trie.insert(word);
        }

        group.bench_with_input(BenchmarkId::new("lookup", size), &words, |b, words| {
            b.iter(|| words.iter().filter(|w| trie.lookup(black_box(w)).is_some()).count());
        });

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("autocomplete", size), &trie, |b, trie| {
            b.iter(|| trie.autocomplete(black_box("t")));
        });

        group.bench_with_input(BenchmarkId::new("stats", size), &trie, |b, trie| {
            b.iter(|| trie.stats());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hua_trie);
criterion_main!(benches);
