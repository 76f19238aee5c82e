//! Key structures, such as literals, clauses, and formulas.
//!
//! Literals and clauses are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A [formula] is a syntax tree over atoms and the usual connectives.
//! Formulas are what a [belief base](crate::base) holds, and what entailment is queried for.
//!
//! Internally, each formula is converted to a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The two representations are logically equivalent, but only the formula is used to decide whether two beliefs are the same.
//!
//! ## Languages
//! A *language* 𝓛 is some set of [atoms](atom), closed under the connectives. \
//! Every [belief base](crate::base) is implicitly relative to the language of the atoms which have appeared in its formulas or queries, as recorded in the [atom database](crate::db::atom).
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false].

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
