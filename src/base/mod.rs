/*!
The belief base --- to which formulas are added, and against which entailment is checked, etc.

A base is an insertion ordered sequence of [entries](BeliefEntry), each a formula paired with a priority, and no two of which have the same formula.
Formulas are the same just in case their syntax trees are the same, so logically equivalent formulas with different syntax are distinct beliefs.

A base is revised only through:
- [expansion](BeliefBase::expansion), which adds a formula.
- [remove](BeliefBase::remove), which drops a formula.
- [contraction](BeliefBase::contraction), which replaces the formulas with some maximal subset of the formulas which does not entail a given formula.
- [revision](BeliefBase::revision), which is a contraction followed by an expansion.

Every procedure runs to completion before returning, and a base offers no internal synchronisation.
So, if a base is shared then all calls should be made with exclusive access to the base (e.g. through a mutex around the base).

# Example
```rust
# use belief_base::base::BeliefBase;
# use belief_base::config::Config;
# use belief_base::procedures::contraction::ContractionOk;
# use belief_base::structures::formula::Formula;
let mut base = BeliefBase::from_config(Config::default(), None);

let p_implies_q: Formula = "P → Q".parse().unwrap();
let p: Formula = "P".parse().unwrap();
let q: Formula = "Q".parse().unwrap();

assert!(base.expansion_with(&p_implies_q, 2).is_ok());
assert!(base.expansion_with(&p, 1).is_ok());

assert_eq!(base.entails(&q), Ok(true));

assert!(matches!(base.contraction(&q), Ok(ContractionOk::Contracted { .. })));
assert_eq!(base.entails(&q), Ok(false));
assert_eq!(base.formulas().collect::<Vec<_>>(), vec![&p_implies_q]);
```
*/

mod counters;
pub use counters::Counters;
mod entry;
pub use entry::{BeliefEntry, Priority};

use std::{borrow::Borrow, rc::Rc};

use crate::{
    config::Config,
    db::atom::AtomDB,
    dispatch::Dispatch,
    structures::formula::Formula,
};

/// A belief base.
pub struct BeliefBase {
    /// The configuration of the base.
    pub config: Config,

    /// Counters related to the procedures applied to the base.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The entries of the base, in order of insertion.
    pub(crate) entries: Vec<BeliefEntry>,

    /// A function to send [dispatches](crate::dispatch) to, if any.
    pub(crate) dispatcher: Option<Rc<dyn Fn(Dispatch)>>,
}

impl BeliefBase {
    /// An empty base, with the given configuration and (optional) dispatcher.
    pub fn from_config(config: Config, dispatcher: Option<Rc<dyn Fn(Dispatch)>>) -> Self {
        BeliefBase {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            entries: Vec::default(),
            dispatcher,
        }
    }

    /// The formulas of the base, in order of insertion.
    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        self.entries.iter().map(|entry| entry.formula())
    }

    /// The entries of the base, in order of insertion.
    pub fn entries(&self) -> &[BeliefEntry] {
        &self.entries
    }

    /// The count of formulas in the base.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the formula is in the base.
    ///
    /// This is a syntactic check: the base may contain a formula logically equivalent to `formula` without containing `formula`.
    pub fn contains(&self, formula: impl Borrow<Formula>) -> bool {
        self.position_of(formula.borrow()).is_some()
    }

    /// The index of the entry for `formula`, if any.
    pub(crate) fn position_of(&self, formula: &Formula) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.formula() == formula)
    }

    /// Sends `dispatch` to the dispatcher, if one is present.
    pub(crate) fn dispatch(&self, dispatch: impl FnOnce() -> Dispatch) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(dispatch())
        }
    }
}

impl Default for BeliefBase {
    fn default() -> Self {
        BeliefBase::from_config(Config::default(), None)
    }
}

impl std::fmt::Display for BeliefBase {
    /// The entries of the base, one per line, in the form read from a belief file.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
