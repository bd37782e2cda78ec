use nnbench_core::{
    host_threads, intra_op_threads, limit_intra_op_threads, Conv2dForward, Workload,
};

// The cap binds the process-wide pool, so this check gets its own test binary.
#[test]
fn single_thread_cap() {
    limit_intra_op_threads(1).unwrap();
    assert_eq!(intra_op_threads(), 1);

    // Later calls are accepted no-ops; the first cap stays.
    limit_intra_op_threads(4).unwrap();
    assert_eq!(intra_op_threads(), 1);

    // Tensor work proceeds normally under the cap.
    let case = Conv2dForward::setup().unwrap();
    for _ in 0..3 {
        case.run().unwrap();
    }
}

#[test]
fn host_reports_at_least_one_core() {
    assert!(host_threads() >= 1);
}
