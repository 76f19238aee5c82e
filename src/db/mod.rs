//! Databases for holding information relevant to a belief base.
//!
//!   - [The atom database](crate::db::atom)
//!     + The map between external names of atoms, as used in formulas, and internal atoms, as used in clauses.
//!
//! The formulas of a base, together with the clauses of each formula, are held by the [base](crate::base) itself.

pub mod atom;
