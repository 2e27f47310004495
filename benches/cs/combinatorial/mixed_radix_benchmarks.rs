use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_gray::cs::combinatorial::{assemble, enumerate, switches, Sequences};

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_radix_enumerate");
    for bounds in [vec![2; 12], vec![3, 5, 7, 4, 6], vec![10, 10, 10, 10]] {
        let label = format!("{:?}", bounds);
        group.bench_with_input(BenchmarkId::new("eager", &label), &bounds, |b, bounds| {
            b.iter(|| enumerate(black_box(bounds)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("switches", &label), &bounds, |b, bounds| {
            b.iter(|| switches(black_box(bounds)).unwrap().count())
        });
    }
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_assemble");
    for (base, length) in [(2, 12), (3, 7), (4, 6)] {
        let label = format!("{}^{}", base, length);
        group.bench_function(BenchmarkId::new("eager", &label), |b| {
            b.iter(|| assemble(black_box(base), black_box(length)).unwrap())
        });
        group.bench_function(BenchmarkId::new("lazy", &label), |b| {
            b.iter(|| {
                Sequences::new(black_box(base), black_box(length))
                    .unwrap()
                    .map(|s| s[0])
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_assemble);
criterion_main!(benches);
