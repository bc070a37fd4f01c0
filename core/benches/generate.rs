use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazer_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [(12, 10), (64, 64), (256, 256)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size.0, size.1)),
            &size,
            |b, &(cols, rows)| {
                b.iter(|| {
                    let mut grid = Grid::new(cols, rows).unwrap();
                    RecursiveBacktracker::new(0)
                        .generate_corners(&mut grid)
                        .unwrap();
                    grid
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
