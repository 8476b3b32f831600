use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use easeful::{Curve, EnumCount, IntoEnumIterator};

const SAMPLES: usize = 256;

fn sample_times() -> Vec<f64> {
    (0..SAMPLES).map(|i| i as f64 / (SAMPLES - 1) as f64).collect()
}

fn bench_eval(c: &mut Criterion) {
    let times = sample_times();
    let mut group = c.benchmark_group("eval");

    for curve in Curve::iter() {
        group.bench_with_input(BenchmarkId::from_parameter(curve), &curve, |b, &curve| {
            b.iter(|| {
                for &t in &times {
                    black_box(curve.eval(0.0, 1.0, black_box(t)));
                }
            });
        });
    }
    group.finish();
}

fn bench_derivative(c: &mut Criterion) {
    let times = sample_times();
    let mut group = c.benchmark_group("derivative");

    for curve in Curve::iter() {
        group.bench_with_input(BenchmarkId::from_parameter(curve), &curve, |b, &curve| {
            b.iter(|| {
                for &t in &times {
                    black_box(curve.derivative(0.0, 1.0, black_box(t)));
                }
            });
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let times = sample_times();

    c.bench_function("dispatch_by_id", |b| {
        b.iter(|| {
            for id in 0..Curve::COUNT as u8 {
                for &t in &times {
                    black_box(easeful::evaluate_id_or_zero(black_box(id), 0.0, 1.0, t));
                }
            }
        });
    });

    c.bench_function("resolved_fn_pointer", |b| {
        let fns: Vec<_> = Curve::iter().map(|curve| curve.value_fn::<f64>()).collect();

        b.iter(|| {
            for f in &fns {
                for &t in &times {
                    black_box(f(0.0, 1.0, black_box(t)));
                }
            }
        });
    });
}

fn bench_tween(c: &mut Criterion) {
    let anim = easeful::tween(Curve::EaseInOutElastic, 0.0f64, 100.0)
        .over(2.0)
        .seq(easeful::constant(100.0));
    let times = sample_times();

    c.bench_function("tween_sequence", |b| {
        b.iter(|| {
            for &t in &times {
                black_box(anim.eval(black_box(t * 4.0)));
            }
        });
    });
}

criterion_group!(
    evaluate,
    bench_eval,
    bench_derivative,
    bench_dispatch,
    bench_tween
);
criterion_main!(evaluate);
