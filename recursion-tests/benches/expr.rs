use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use recursion_schemes::{cata, cata_recursive, try_cata, ExpandableExt};
use recursion_tests::expr::{
    eval::{compute, naive_compute, try_compute},
    naive::Expr,
    ExprFrame,
};

fn bench_eval(criterion: &mut Criterion) {
    let mut test_cases = Vec::new();

    // balanced trees of additions, 2^(depth + 1) - 1 nodes each
    for depth in [12, 17] {
        let big_expr = Expr::expand_frames_recursive(depth, |x| {
            if x > 0 {
                ExprFrame::Add(x - 1, x - 1)
            } else {
                ExprFrame::LiteralInt(1)
            }
        });

        test_cases.push((depth, big_expr));
    }

    let mut group = criterion.benchmark_group("evaluate expression tree");

    for (depth, big_expr) in test_cases.iter() {
        group.bench_with_input(
            BenchmarkId::new("traditional boxed method", depth),
            big_expr,
            |b, expr| b.iter(|| naive_compute(expr)),
        );

        group.bench_with_input(
            BenchmarkId::new("cata_recursive", depth),
            big_expr,
            |b, expr| b.iter(|| cata_recursive(expr, compute)),
        );

        group.bench_with_input(BenchmarkId::new("cata", depth), big_expr, |b, expr| {
            b.iter(|| cata(expr, compute))
        });

        group.bench_with_input(BenchmarkId::new("try_cata", depth), big_expr, |b, expr| {
            b.iter(|| try_cata(expr, try_compute))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_eval
}
criterion_main!(benches);
