#[cfg(feature = "accelerate")]
extern crate accelerate_src;
#[cfg(feature = "mkl")]
extern crate intel_mkl_src;

use std::time::Instant;

use nnbench_core::{host_threads, intra_op_threads, limit_intra_op_threads, Conv2dForward, Workload};

const WARMUP: usize = 10;
const ITERS: usize = 1_000;

fn main() {
    limit_intra_op_threads(1).unwrap();

    let case = Conv2dForward::setup().unwrap();
    println!(
        "{}: input {:?}, {} of {} host threads",
        Conv2dForward::NAME,
        case.input().dims(),
        intra_op_threads(),
        host_threads(),
    );

    for _ in 0..WARMUP {
        case.run().unwrap();
    }

    let start = Instant::now();
    for _ in 0..ITERS {
        case.run().unwrap();
    }
    let elapsed = start.elapsed();

    println!(
        "{ITERS} passes in {elapsed:?} ({:.2}us per pass)",
        elapsed.as_secs_f64() * 1e6 / ITERS as f64
    );
}
