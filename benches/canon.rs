//! Canonicalization benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench canon
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use npn4_rs::canon::CanonTable;
use npn4_rs::npn::Npn4;
use npn4_rs::perm::Perm4;
use npn4_rs::tv::Tv4;

/// Full table construction: the ascending scan over all 65536 functions.
fn bench_table_build(c: &mut Criterion) {
    c.bench_function("canon_table_build", |b| {
        b.iter(|| black_box(CanonTable::new()))
    });
}

/// Canonical-form lookups over a shuffled sample of the domain.
fn bench_lookup(c: &mut Criterion) {
    let canon = CanonTable::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let sample: Vec<Tv4> = (0..4096).map(|_| Tv4::new(rng.gen())).collect();

    let mut group = c.benchmark_group("canon_lookup");
    group.throughput(Throughput::Elements(sample.len() as u64));
    group.bench_function("canonical_form", |b| {
        b.iter(|| {
            for &tv in &sample {
                black_box(canon.canonical_form(tv));
            }
        })
    });
    group.finish();
}

/// Applying every member of the 768-element transform group to one table.
fn bench_apply_group(c: &mut Criterion) {
    let tv = Tv4::new(0x9E37);

    let mut group = c.benchmark_group("transform_apply");
    group.throughput(Throughput::Elements(768));
    group.bench_function("all_768", |b| {
        b.iter(|| {
            for &perm in Perm4::all() {
                for iinv in 0..16u8 {
                    for &oinv in &[false, true] {
                        let x = Npn4::from_parts(oinv, iinv, perm);
                        black_box(x.apply(tv));
                    }
                }
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_table_build, bench_lookup, bench_apply_group);
criterion_main!(benches);
