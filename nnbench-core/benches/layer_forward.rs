#[cfg(feature = "mkl")]
extern crate intel_mkl_src;

#[cfg(feature = "accelerate")]
extern crate accelerate_src;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nnbench_core::{
    limit_intra_op_threads, Activation, ActivationForward, MlpForward, Workload,
};

fn bench_mlp(c: &mut Criterion) {
    limit_intra_op_threads(1).unwrap();
    let case = MlpForward::setup().unwrap();
    case.run().unwrap();
    c.bench_function(MlpForward::NAME, |b| {
        b.iter(|| case.run().unwrap());
    });
}

fn bench_activations(c: &mut Criterion) {
    limit_intra_op_threads(1).unwrap();
    let mut group = c.benchmark_group("activation_forward");

    let cases = [
        ("relu", Activation::Relu),
        ("sigmoid", Activation::Sigmoid),
        ("silu", Activation::Silu),
    ];

    for (name, act) in cases {
        let case = ActivationForward::new(act, ActivationForward::DEFAULT_LEN).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &case, |b, case| {
            b.iter(|| case.run().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mlp, bench_activations);
criterion_main!(benches);
