use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use simplemap::HashTable;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
    c.bench_function("hash_table_insert_10k", |b| {
        b.iter_batched(
            HashTable::new,
            |mut t| {
                // Includes every growth from 16 buckets up.
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, &(i as u64).to_le_bytes()).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_overwrite(c: &mut Criterion) {
    c.bench_function("hash_table_overwrite", |b| {
        let mut t = HashTable::new();
        let keys: Vec<_> = lcg(3).take(1_000).map(key).collect();
        for k in &keys {
            t.insert(k, b"initial").unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            t.insert(k, b"replaced").unwrap();
        })
    });
}

fn bench_lookup_hit(c: &mut Criterion) {
    c.bench_function("hash_table_lookup_hit", |b| {
        let mut t = HashTable::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, &(i as u64).to_le_bytes()).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.lookup(k));
        })
    });
}

fn bench_lookup_miss(c: &mut Criterion) {
    c.bench_function("hash_table_lookup_miss", |b| {
        let mut t = HashTable::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            t.insert(&key(x), &(i as u64).to_le_bytes()).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in the table
            let k = key(miss.next().unwrap());
            black_box(t.lookup(&k));
        })
    });
}

fn bench_insert_remove(c: &mut Criterion) {
    c.bench_function("hash_table_insert_remove", |b| {
        let mut t = HashTable::new();
        for x in lcg(13).take(1_000) {
            t.insert(&key(x), b"resident").unwrap();
        }
        let mut churn = lcg(17);
        b.iter(|| {
            let k = key(churn.next().unwrap());
            t.insert(&k, b"transient").unwrap();
            black_box(t.remove(&k));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_overwrite, bench_lookup_hit, bench_lookup_miss, bench_insert_remove
}
criterion_main!(benches);
