/*!
Revision of a base by a formula, via the Levi identity.

To revise a base 𝐁 by φ is to make φ a belief while keeping the base consistent, if possible.
Following the Levi identity, revision is [contraction](crate::procedures::contraction) by ¬φ, followed by [expansion](crate::base::BeliefBase::expansion_with) with φ.

If ¬φ is not entailed, the contraction leaves the base unchanged and revision is simply expansion.

# Example

```rust
# use belief_base::base::BeliefBase;
# use belief_base::builder::ExpansionOk;
# use belief_base::procedures::{contraction::ContractionOk, revision::RevisionOk};
# use belief_base::structures::formula::Formula;
let mut base = BeliefBase::default();

let p: Formula = "p".parse().unwrap();
let p_implies_q: Formula = "p → q".parse().unwrap();
let not_q: Formula = "¬q".parse().unwrap();

assert!(base.expansion_with(&p, 1).is_ok());
assert!(base.expansion_with(&p_implies_q, 2).is_ok());

let result = base.revision(&not_q, 1).unwrap();
assert_eq!(
    result,
    RevisionOk {
        contraction: ContractionOk::Contracted { removed: vec![p.clone()] },
        expansion: ExpansionOk::Added,
    }
);

assert_eq!(base.formulas().collect::<Vec<_>>(), vec![&p_implies_q, &not_q]);
assert_eq!(base.is_consistent(), Ok(true));
```
*/

use std::borrow::Borrow;

use crate::{
    base::{BeliefBase, Priority},
    builder::ExpansionOk,
    dispatch::{
        library::delta::{self, Delta},
        Dispatch,
    },
    misc::log::targets::{self},
    procedures::contraction::ContractionOk,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// The results of the contraction and expansion made during a revision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevisionOk {
    /// The result of contraction by the negation of the formula.
    pub contraction: ContractionOk,

    /// The result of expansion with the formula.
    pub expansion: ExpansionOk,
}

impl BeliefBase {
    /// Revises the base by `formula`, with the given priority.
    ///
    /// See [revision](crate::procedures::revision) for details.
    pub fn revision(
        &mut self,
        formula: impl Borrow<Formula>,
        priority: Priority,
    ) -> Result<RevisionOk, ErrorKind> {
        let formula = formula.borrow();

        if !self.config.default_priority.admits(&priority) {
            return Err(err::BeliefBaseError::InvalidPriority.into());
        }

        let contraction = self.contraction(formula.negation())?;
        let expansion = self.expansion_with(formula, priority)?;

        log::info!(target: targets::REVISION, "Revised by {formula}");
        self.dispatch(|| {
            Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::Revised(
                formula.clone(),
            )))
        });

        Ok(RevisionOk {
            contraction,
            expansion,
        })
    }
}
