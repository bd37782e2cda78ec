use thiserror::Error;

/// Failures surfaced while building or running a workload.
#[derive(Debug, Error)]
pub enum Error {
    /// Anything raised by the tensor backend.
    #[error(transparent)]
    Backend(#[from] candle_core::Error),

    /// The global intra-op thread pool could not be built.
    #[error("intra-op thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A profile that cannot produce a valid operator.
    #[error("invalid profile: {0}")]
    Profile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
