use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every check on entailment, including those made on subsets of a base during contraction.
    pub entailment_checks: usize,

    /// A count of every pass over pairs of clauses made during saturation.
    pub saturation_passes: usize,

    /// A count of every (fresh, non-tautological) resolvent derived.
    pub resolvents: usize,

    /// A count of every subset of a base examined during contraction.
    pub subsets: usize,

    /// The time taken during the most recent contraction.
    pub time: Duration,
}
