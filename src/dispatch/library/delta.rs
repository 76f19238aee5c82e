/*!
Details on some change to a belief base.
*/
use crate::{base::Priority, structures::formula::Formula};

/// High level distinction of changes, by 'location' of the change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delta {
    /// Within the formulas of a [belief base](crate::base::BeliefBase).
    BeliefBase(self::BeliefBase),
}

/// Changes within the formulas of a [belief base](crate::base::BeliefBase).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BeliefBase {
    /// The formula was added, with the given priority.
    Added(Formula, Priority),

    /// The formula was already present, and so the base is unchanged.
    Duplicate(Formula),

    /// The formula was removed.
    Removed(Formula),

    /// The base was contracted by the target formula, and the remainder (in order) is now the formulas of the base.
    Contracted {
        target: Formula,
        remainder: Vec<Formula>,
    },

    /// Contraction by the formula was not applicable, as the formula was not entailed or is a tautology.
    ContractionRejected(Formula),

    /// The base was revised by the formula.
    Revised(Formula),
}
