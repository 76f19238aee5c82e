//! Procedures on a belief base.
//!
//! For the most part these are methods accessed via a [belief base](crate::base::BeliefBase), and primarily placed here for documentation.
//!
//! The procedures build on one another:
//! - [Conversion to CNF](cnf) gives the clauses of a formula.
//! - [Resolution](resolution) decides whether some clauses are unsatisfiable.
//! - [Entailment](entailment) saturates the clauses of a base together with the clauses of a negated formula.
//! - [Contraction](contraction) checks entailment on many subsets of a base.
//! - [Revision](revision) is contraction followed by expansion.

pub mod cnf;
pub mod contraction;
pub mod entailment;
pub mod resolution;
pub mod revision;
