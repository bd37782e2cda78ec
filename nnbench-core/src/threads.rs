use std::sync::Once;

use crate::{Error, Result};

static LIMIT: Once = Once::new();

/// Cap the number of threads a single tensor operation may use.
///
/// CPU tensor ops fan their work out through the global rayon pool, so the
/// cap is applied by building that pool with `count` threads. The setting is
/// process-wide and permanent: the first call wins and later calls are
/// accepted no-ops. Benchmark entry points call `limit_intra_op_threads(1)`
/// before any tensor work.
pub fn limit_intra_op_threads(count: usize) -> Result<()> {
    let mut built = Ok(());
    LIMIT.call_once(|| {
        built = rayon::ThreadPoolBuilder::new()
            .num_threads(count)
            .build_global()
            .map_err(Error::from);
    });
    built
}

/// Number of threads tensor ops may currently use.
///
/// Reads the live pool; if no cap was set this initializes the pool at its
/// default size.
pub fn intra_op_threads() -> usize {
    rayon::current_num_threads()
}

/// Number of logical cores on the host, the pool size when no cap is set.
pub fn host_threads() -> usize {
    num_cpus::get()
}
