use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId,
    Criterion,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Clustered, Gen, UnitSeq};
use unit_bucket_sort::{UnitBucketSort, BUCKET_COUNT};

fn std_sort(a: &mut [f64]) {
    a.sort_unstable_by(|x, y| x.partial_cmp(y).unwrap());
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");

    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x91, 0x0C, 0xE7, 0x54, 0x2B, 0xD8, 0x6F, 0x10, 0xA3, 0x7E, 0xC5,
        0x29, 0xF4, 0x8B, 0x06, 0x5D, 0xB2, 0x47, 0xEC, 0x93, 0x18, 0x6A, 0xD1,
        0x0F, 0x7C, 0xB9, 0x24, 0xE1, 0x58, 0xC3, 0x9E,
    ]);

    for len in [100, 10_000, 1_000_000] {
        let a: Vec<f64> = UnitSeq::<f64>::new(len).generate(&mut rng);

        group.bench_with_input(BenchmarkId::new("bucket", len), &a, |b, a| {
            b.iter_batched_ref(
                || a.clone(),
                |a| a.bucket_sort(),
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(
            BenchmarkId::new("bucket-1000", len),
            &a,
            |b, a| {
                b.iter_batched_ref(
                    || a.clone(),
                    |a| a.bucket_sort_with::<1000>(),
                    BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(BenchmarkId::new("std", len), &a, |b, a| {
            b.iter_batched_ref(|| a.clone(), |a| std_sort(a), BatchSize::LargeInput)
        });
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustered");

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let len = 10_000;
    let a: Vec<f64> =
        Clustered::<f64>::new(len, 3, BUCKET_COUNT).generate(&mut rng);

    group
        .bench_function(BenchmarkId::new("bucket", len), |b| {
            b.iter_batched_ref(
                || a.clone(),
                |a| black_box(a).bucket_sort(),
                BatchSize::LargeInput,
            )
        })
        .bench_function(BenchmarkId::new("std", len), |b| {
            b.iter_batched_ref(
                || a.clone(),
                |a| std_sort(black_box(a)),
                BatchSize::LargeInput,
            )
        });
    group.finish();
}

criterion_group!(benches, bench_uniform, bench_clustered);
criterion_main!(benches);
