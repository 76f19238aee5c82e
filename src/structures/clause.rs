//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, sorted and without duplicates.
//! As the order on literals places complementary literals side by side, a sorted clause is a tautology exactly when two adjacent literals share an atom.
//!
//! ```rust
//! # use belief_base::structures::literal::{CLiteral, Literal};
//! # use belief_base::structures::clause::{self, Clause};
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, true);
//!
//! let c = clause::canonical(vec![q, p, q]);
//! assert_eq!(c.size(), 2);
//! assert!(!c.is_tautology());
//!
//! let d = clause::canonical(vec![-p, q]);
//! assert_eq!(c.resolve(&d, p), vec![q]);
//!
//! assert!(clause::canonical(vec![p, q, -p]).is_tautology());
//! ```
//!
//! - The empty clause is always false (never true), and so stands for a contradiction.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//!
//! A [ClauseSet] is a set of clauses, interpreted as the conjunction of those clauses.
//! The empty clause set is always true.

use std::collections::BTreeSet;

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause, using internal atoms.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// The literals of the clause whose negation is contained in `other`.
    fn pivots(&self, other: &Self) -> Vec<CLiteral>;

    /// The resolvent of the clause and `other` on `pivot`, where `pivot` belongs to the clause and the negation of `pivot` to `other`.
    fn resolve(&self, other: &Self, pivot: CLiteral) -> CClause;

    /// The value of the clause on the given valuation, if determined.
    fn value_on(&self, valuation: &impl Valuation) -> Option<bool>;
}

/// The canonical implementation of a clause, as a sorted vector of distinct literals.
pub type CClause = Vec<CLiteral>;

/// A collection of clauses without duplicates, interpreted as the conjunction of the clauses.
pub type ClauseSet = BTreeSet<CClause>;

/// The canonical form of some collection of literals, i.e. sorted and without duplicates.
pub fn canonical(literals: impl IntoIterator<Item = CLiteral>) -> CClause {
    let mut clause: CClause = literals.into_iter().collect();
    clause.sort_unstable();
    clause.dedup();
    clause
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_tautology(&self) -> bool {
        self.windows(2).any(|pair| pair[0].atom() == pair[1].atom())
    }

    fn pivots(&self, other: &Self) -> Vec<CLiteral> {
        // Both clauses are sorted by atom, so a single walk suffices.
        let mut pivots = Vec::default();
        let (mut i, mut j) = (0, 0);
        while i < self.len() && j < other.len() {
            let (a, b) = (self[i], other[j]);
            match a.atom().cmp(&b.atom()) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    if a.polarity() != b.polarity() {
                        pivots.push(a);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        pivots
    }

    fn resolve(&self, other: &Self, pivot: CLiteral) -> CClause {
        let anti_pivot = pivot.negate();
        let mut resolvent = Vec::with_capacity((self.len() + other.len()).saturating_sub(2));

        let mut left = self.iter().filter(|l| **l != pivot).peekable();
        let mut right = other.iter().filter(|l| **l != anti_pivot).peekable();

        loop {
            let next = match (left.peek(), right.peek()) {
                (None, None) => break,
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (Some(a), Some(b)) => match a.cmp(b) {
                    std::cmp::Ordering::Less => left.next(),
                    std::cmp::Ordering::Greater => right.next(),
                    std::cmp::Ordering::Equal => {
                        right.next();
                        left.next()
                    }
                },
            };
            if let Some(literal) = next {
                resolvent.push(*literal);
            }
        }

        resolvent
    }

    fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut undetermined = false;
        for literal in self {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Some(true),
                Some(_) => {}
                None => undetermined = true,
            }
        }
        match undetermined {
            true => None,
            false => Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::atom::Atom;

    fn lit(atom: Atom, polarity: bool) -> CLiteral {
        CLiteral::new(atom, polarity)
    }

    #[test]
    fn canonical_sorts_and_dedups() {
        let clause = canonical(vec![lit(3, true), lit(1, false), lit(3, true)]);
        assert_eq!(clause, vec![lit(1, false), lit(3, true)]);
    }

    #[test]
    fn pivots_of_clauses() {
        let a = canonical(vec![lit(0, true), lit(1, false), lit(2, true)]);
        let b = canonical(vec![lit(0, false), lit(1, false), lit(2, false)]);

        assert_eq!(a.pivots(&b), vec![lit(0, true), lit(2, true)]);
        assert_eq!(b.pivots(&a), vec![lit(0, false), lit(2, false)]);
    }

    #[test]
    fn resolvent_collapses_shared_literals() {
        let a = canonical(vec![lit(0, true), lit(1, true), lit(3, false)]);
        let b = canonical(vec![lit(0, false), lit(1, true), lit(2, true)]);

        assert_eq!(
            a.resolve(&b, lit(0, true)),
            vec![lit(1, true), lit(2, true), lit(3, false)]
        );
    }

    #[test]
    fn resolvent_of_units_is_empty() {
        let a = vec![lit(4, true)];
        let b = vec![lit(4, false)];
        assert!(a.resolve(&b, lit(4, true)).is_empty());
    }

    #[test]
    fn tautology() {
        assert!(canonical(vec![lit(2, true), lit(1, true), lit(2, false)]).is_tautology());
        assert!(!canonical(vec![lit(2, true), lit(1, false)]).is_tautology());
        assert!(!CClause::default().is_tautology());
    }

    #[test]
    fn values() {
        let valuation = vec![Some(true), Some(false), None];
        assert_eq!(vec![lit(0, false), lit(1, true)].value_on(&valuation), Some(false));
        assert_eq!(vec![lit(1, false), lit(2, true)].value_on(&valuation), Some(true));
        assert_eq!(vec![lit(0, false), lit(2, true)].value_on(&valuation), None);
        assert_eq!(CClause::default().value_on(&valuation), Some(false));
    }
}
