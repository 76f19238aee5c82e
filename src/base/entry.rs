use crate::structures::{clause::ClauseSet, formula::Formula};

/// A priority, used to choose between equally sized remainders during a contraction.
///
/// Priorities are positive, and higher priorities are more entrenched.
/// Priorities play no part in whether a formula is entailed.
pub type Priority = u32;

/// A formula held by a base, together with the priority of the formula.
///
/// The clauses of the formula are computed once, when the entry is made, and reused for each check on entailment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeliefEntry {
    formula: Formula,
    priority: Priority,
    clauses: ClauseSet,
}

impl BeliefEntry {
    pub(crate) fn new(formula: Formula, priority: Priority, clauses: ClauseSet) -> Self {
        BeliefEntry {
            formula,
            priority,
            clauses,
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The clauses of the formula, in terms of the atoms of the base the entry belongs to.
    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }
}

impl std::fmt::Display for BeliefEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.priority, self.formula)
    }
}
