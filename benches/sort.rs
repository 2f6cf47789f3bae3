use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn nearly_sorted(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    let mut v: Vec<u32> = (0..len as u32).collect();
    for _ in 0..len / 100 {
        let i = rng.gen_range(1..len);
        v.swap(i - 1, i);
    }
    v
}

fn random(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_nearly_sorted(c: &mut Criterion) {
    let input = nearly_sorted(10_000);

    c.bench_function("bubble_nearly_sorted_10k", |b| {
        b.iter(|| {
            let mut v = input.clone();
            sortp::bubble(&mut v);
            black_box(v)
        })
    });

    c.bench_function("sort_nearly_sorted_10k", |b| {
        b.iter(|| {
            let mut v = input.clone();
            sortp::sort(&mut v);
            black_box(v)
        })
    });
}

fn bench_random(c: &mut Criterion) {
    let input = random(10_000);

    c.bench_function("sort_random_10k", |b| {
        b.iter(|| {
            let mut v = input.clone();
            sortp::sort(&mut v);
            black_box(v)
        })
    });

    c.bench_function("stable_sort_random_10k", |b| {
        b.iter(|| {
            let mut v = input.clone();
            sortp::stable_sort(&mut v);
            black_box(v)
        })
    });

    c.bench_function("index_sort_random_10k", |b| {
        b.iter(|| black_box(sortp::index_sort_by(input.len(), |i, j| input[i] < input[j])))
    });
}

criterion_group!(benches, bench_nearly_sorted, bench_random);
criterion_main!(benches);
