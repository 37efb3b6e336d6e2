use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use optiviz_expr::Expr;
use optiviz_solver::{
    bisection, central_difference, golden_section, newton_raphson, secant, CubicSpline,
    DataPoint, SolveOptions,
};

/// Kernels driven by a parsed expression, the function-mode hot path: every
/// iteration re-evaluates the expression tree.
fn bench_expression_kernels(c: &mut Criterion) {
    let expr = Expr::parse("x*x - 4").unwrap();
    let deriv = expr.derivative("x");
    let opts = SolveOptions::default();

    let mut group = c.benchmark_group("expression_kernels");

    group.bench_function("bisection", |b| {
        b.iter(|| bisection(|x| expr.eval("x", x), black_box(0.0), black_box(5.0), opts))
    });
    group.bench_function("golden_section", |b| {
        b.iter(|| golden_section(|x| expr.eval("x", x), black_box(0.0), black_box(5.0), opts))
    });
    group.bench_function("newton_raphson", |b| {
        b.iter(|| {
            newton_raphson(
                |x| expr.eval("x", x),
                |x| deriv.eval("x", x),
                black_box(3.0),
                opts,
            )
        })
    });
    group.bench_function("secant", |b| {
        b.iter(|| secant(|x| expr.eval("x", x), black_box(1.0), black_box(3.0), opts))
    });

    group.finish();
}

/// Data-mode path: spline construction plus a Newton run with a numeric
/// derivative, at increasing dataset sizes.
fn bench_spline_kernels(c: &mut Criterion) {
    let opts = SolveOptions::default();
    let mut group = c.benchmark_group("spline_kernels");

    for size in [16usize, 128, 1024] {
        let data: Vec<DataPoint> = (0..size)
            .map(|i| {
                let x = i as f64 / size as f64 * 10.0;
                DataPoint {
                    x,
                    y: (x - 5.0) * (x - 5.0) - 4.0,
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("construct", size), &data, |b, data| {
            b.iter(|| CubicSpline::new(black_box(data)).unwrap())
        });

        let spline = CubicSpline::new(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("newton", size), &spline, |b, spline| {
            b.iter(|| {
                let f = |x| spline.at(x);
                newton_raphson(f, central_difference(f, 1e-5), black_box(1.0), opts)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expression_kernels, bench_spline_kernels);
criterion_main!(benches);
