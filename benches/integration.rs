use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dussim::{analyze, rk4, run_simulation, DriveInputs, DusParameters, State};

fn bench_rk4_step(c: &mut Criterion) {
    let p = DusParameters::default();
    let omega_d = p.drive_natural_frequency();
    let s = State {
        x: 2e-8,
        vx: 1e-4,
        y: 1e-10,
        vy: 5e-7,
    };

    c.bench_function("rk4_single_step", |b| {
        b.iter(|| rk4(black_box(&p), black_box(&s), 100.0, 1e-6, omega_d, 1e-3, 1e-6))
    });
}

fn bench_default_run(c: &mut Criterion) {
    let p = DusParameters::default();
    let inputs = DriveInputs::resonant(&p, 100.0, 1e-6);

    c.bench_function("default_run_10k_steps", |b| {
        b.iter(|| {
            let series = run_simulation(black_box(&p), &inputs, 0.01, 1e-6).unwrap();
            analyze(&series, &inputs).unwrap()
        })
    });
}

criterion_group!(benches, bench_rk4_step, bench_default_run);
criterion_main!(benches);
