//! Generation and resolution throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ladder_game::board::{BoardGenerator, PathResolver};
use ladder_game::core::{BoardSpec, LadderRng};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for columns in [3usize, 5, 8] {
        let spec = BoardSpec::new(columns, 10).randomized();
        group.bench_with_input(BenchmarkId::from_parameter(columns), &spec, |b, spec| {
            let mut rng = LadderRng::new(42);
            b.iter(|| BoardGenerator::generate(black_box(spec), &mut rng));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut rng = LadderRng::new(42);
    let spec = BoardSpec::new(8, 20).with_target_rungs(11);
    let Ok((board, _)) = BoardGenerator::generate(&spec, &mut rng) else {
        return;
    };
    c.bench_function("resolve_all_starts", |b| {
        b.iter(|| {
            (0..board.columns())
                .filter_map(|start| PathResolver::resolve(black_box(&board), start).ok())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_generate, bench_resolve);
criterion_main!(benches);
