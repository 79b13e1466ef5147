use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use lrukit::lru::LruCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn filled(capacity: u64) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity as usize).unwrap();
    for i in 0..capacity {
        cache.set(i, i);
    }
    cache
}

fn bench_lru_set_get(c: &mut Criterion) {
    c.bench_function("lru_set_get", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.set(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_get_hit(c: &mut Criterion) {
    c.bench_function("lru_get_hit", |b| {
        b.iter_batched(
            || filled(4096),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_update_existing(c: &mut Criterion) {
    c.bench_function("lru_update_existing", |b| {
        b.iter_batched(
            || filled(4096),
            |mut cache| {
                for i in (0..4096u64).rev() {
                    let _ = std::hint::black_box(cache.set(std::hint::black_box(i), i + 1));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.set(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_hotset_mix(c: &mut Criterion) {
    c.bench_function("lru_hotset_mix", |b| {
        b.iter_batched(
            || (filled(1024), StdRng::seed_from_u64(42)),
            |(mut cache, mut rng)| {
                for _ in 0..4096 {
                    // 80% of traffic to 20% of a keyspace twice the capacity
                    let key = if rng.gen_bool(0.8) {
                        rng.gen_range(0..410u64)
                    } else {
                        rng.gen_range(0..2048u64)
                    };
                    if cache.get(&key).is_none() {
                        cache.set(key, key);
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_set_get,
    bench_lru_get_hit,
    bench_lru_update_existing,
    bench_lru_eviction_churn,
    bench_lru_hotset_mix
);
criterion_main!(benches);
