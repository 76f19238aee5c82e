//! Statistics regarding various things.
use std::time::Duration;

/// Dispatches containing statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stat {
    /// The count of passes over pairs of clauses made during an operation, over every saturation.
    Passes(usize),

    /// The count of resolvents derived during an operation, over every saturation.
    Resolvents(usize),

    /// The count of subsets of a base examined during a contraction.
    Subsets(usize),

    /// The time elapsed during some procedure.
    Time(Duration),
}
