/*!
Tools for building a belief base.

# Basic methods

The library has two basic methods for building a base:
- [expansion](crate::base::BeliefBase::expansion), to add a formula with the configured default priority.
- [expansion_with](crate::base::BeliefBase::expansion_with), to add a formula with a given priority.

And, a formula may be dropped from a base by [remove](crate::base::BeliefBase::remove).

Formulas may be built directly from the [Formula](crate::structures::formula::Formula) constructors, or [parsed](parse) from a string.
Several formulas may be added at once by [reading](crate::base::BeliefBase::read_beliefs) a belief file.

# Examples

```rust
# use belief_base::base::BeliefBase;
# use belief_base::builder::{ExpansionOk, RemovalOk};
# use belief_base::structures::formula::Formula;
let mut base = BeliefBase::default();

let p = Formula::atom("p");
let q_or_p: Formula = "q ∨ p".parse().unwrap();

assert_eq!(base.expansion(&p), Ok(ExpansionOk::Added));
assert_eq!(base.expansion_with(&q_or_p, 3), Ok(ExpansionOk::Added));
assert_eq!(base.expansion_with(&p, 5), Ok(ExpansionOk::Duplicate));

assert_eq!(base.entries()[0].priority(), 1);
assert_eq!(base.len(), 2);

assert_eq!(base.remove(&p), RemovalOk::Removed);
assert_eq!(base.remove(&p), RemovalOk::Missing);
assert_eq!(base.formulas().collect::<Vec<_>>(), vec![&q_or_p]);
```
*/

mod beliefs;
pub use beliefs::ParserInfo;
pub mod parse;

use std::borrow::Borrow;

use crate::{
    base::{BeliefBase, BeliefEntry, Priority},
    dispatch::{
        library::delta::{self, Delta},
        Dispatch,
    },
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Ok results when adding a formula to a base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionOk {
    /// The formula was added to the base.
    Added,

    /// The formula was already in the base (and so the base is unchanged).
    Duplicate,
}

/// Ok results when removing a formula from a base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalOk {
    /// The formula was removed from the base.
    Removed,

    /// The formula was not in the base (and so the base is unchanged).
    Missing,
}

impl BeliefBase {
    /// Adds `formula` to the base with the configured default priority, unless `formula` is already in the base.
    pub fn expansion(&mut self, formula: impl Borrow<Formula>) -> Result<ExpansionOk, ErrorKind> {
        let priority = self.config.default_priority.value;
        self.expansion_with(formula, priority)
    }

    /// Adds `formula` to the base with the given priority, unless `formula` is already in the base.
    ///
    /// If `formula` is already in the base, the priority of the existing entry is unchanged.
    pub fn expansion_with(
        &mut self,
        formula: impl Borrow<Formula>,
        priority: Priority,
    ) -> Result<ExpansionOk, ErrorKind> {
        let formula = formula.borrow();

        if !self.config.default_priority.admits(&priority) {
            return Err(err::BeliefBaseError::InvalidPriority.into());
        }

        if self.contains(formula) {
            log::info!(target: targets::BELIEF_BASE, "Duplicate: {formula}");
            self.dispatch(|| {
                Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::Duplicate(
                    formula.clone(),
                )))
            });
            return Ok(ExpansionOk::Duplicate);
        }

        let clauses = self.clauses_of(formula)?;
        log::info!(target: targets::BELIEF_BASE, "Added: {formula} at {priority}");
        self.entries
            .push(BeliefEntry::new(formula.clone(), priority, clauses));

        self.dispatch(|| {
            Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::Added(
                formula.clone(),
                priority,
            )))
        });
        Ok(ExpansionOk::Added)
    }

    /// Removes `formula` from the base, if present.
    pub fn remove(&mut self, formula: impl Borrow<Formula>) -> RemovalOk {
        let formula = formula.borrow();

        match self.position_of(formula) {
            Some(index) => {
                self.entries.remove(index);
                log::info!(target: targets::BELIEF_BASE, "Removed: {formula}");
                self.dispatch(|| {
                    Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::Removed(
                        formula.clone(),
                    )))
                });
                RemovalOk::Removed
            }
            None => RemovalOk::Missing,
        }
    }
}
