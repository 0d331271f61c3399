use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dfmin_core::functions::{Rosenbrock, Woods};
use dfmin_solvers::optimization::{hooke_jeeves, nelder_mead};

fn hooke_jeeves_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hooke_jeeves");
    let config = hooke_jeeves::Config::default();

    group.bench_function("rosenbrock", |b| {
        b.iter(|| {
            hooke_jeeves::minimize_unobserved(&Rosenbrock, black_box(&Rosenbrock::START), &config)
        });
    });
    group.bench_function("woods", |b| {
        b.iter(|| hooke_jeeves::minimize_unobserved(&Woods, black_box(&Woods::START), &config));
    });

    group.finish();
}

fn nelder_mead_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("nelder_mead");
    let config = nelder_mead::Config::default();

    group.bench_function("rosenbrock", |b| {
        b.iter(|| {
            nelder_mead::minimize_unobserved(
                &Rosenbrock,
                black_box(&Rosenbrock::START),
                &[1.0; Rosenbrock::DIM],
                &config,
            )
        });
    });
    group.bench_function("woods", |b| {
        b.iter(|| {
            nelder_mead::minimize_unobserved(
                &Woods,
                black_box(&Woods::START),
                &[1.0; Woods::DIM],
                &config,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, hooke_jeeves_benchmarks, nelder_mead_benchmarks);
criterion_main!(benches);
