//! The library of dispatch types.

/// Details on some change to a belief base.
pub mod delta;
/// Details on the result of some procedure.
pub mod report;
/// Statistics regarding various things.
pub mod stat;
