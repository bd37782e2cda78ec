use crate::Result;

/// Contract between a benchmark case and the harness that times it.
///
/// [`setup`](Workload::setup) builds the operator and its input once, outside
/// the timed region. [`run`](Workload::run) is then called any number of
/// times; it never rebuilds state and discards whatever the forward pass
/// produces. The only valid call sequence is `setup` followed by repeated
/// `run`s; there is no teardown.
pub trait Workload: Sized {
    /// Identifier the harness reports measurements under.
    const NAME: &'static str;

    /// Build the operator and its input. Runs once, untimed.
    fn setup() -> Result<Self>;

    /// One timed iteration over the state built by `setup`.
    fn run(&self) -> Result<()>;
}
