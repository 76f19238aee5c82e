/*!
Whether a base entails a formula, by refutation.

A base 𝐁 entails φ just in case 𝐁 ∧ ¬φ is unsatisfiable.
So, to check whether φ is entailed:
1. The clauses of ¬φ are obtained by [conversion to CNF](crate::procedures::cnf).
2. The clauses of each formula in the base are collected (these are stored with each formula, as the formula is added).
3. The union of these clauses is [saturated](crate::procedures::resolution), and φ is entailed exactly when the empty clause is derived.

Given the conversion to CNF is correct and saturation is complete, this is sound and complete for propositional logic.

The formulas of the base are not changed by a check on entailment, though any atom in φ new to the base is recorded in the [atom database](crate::db::atom).

# Example

```rust
# use belief_base::base::BeliefBase;
# use belief_base::structures::formula::Formula;
let mut base = BeliefBase::default();

for belief in ["C", "C → R", "R → U", "U ↔ W"] {
    let formula: Formula = belief.parse().unwrap();
    assert!(base.expansion(&formula).is_ok());
}

assert_eq!(base.entails(&"W".parse::<Formula>().unwrap()), Ok(true));
assert_eq!(base.entails(&"¬C".parse::<Formula>().unwrap()), Ok(false));
assert_eq!(base.is_consistent(), Ok(true));
```
*/

use std::borrow::Borrow;

use crate::{
    base::{BeliefBase, Counters},
    dispatch::{
        library::report::{self},
        library::stat::Stat,
        Dispatch,
    },
    misc::log::targets::{self},
    procedures::resolution::{ResolutionBuffer, Saturation},
    structures::{clause::ClauseSet, formula::Formula},
    types::err::ErrorKind,
};

impl BeliefBase {
    /// Whether the base entails `formula`.
    pub fn entails(&mut self, formula: impl Borrow<Formula>) -> Result<bool, ErrorKind> {
        let formula = formula.borrow();
        let before = self.counters.clone();
        let negated_goal = self.clauses_of(formula.negation())?;

        let all = (0..self.entries.len()).collect::<Vec<_>>();
        let entailed = self.entails_from(&all, &negated_goal)?;
        self.dispatch_saturation_stats(&before);

        log::info!(target: targets::ENTAILMENT, "{formula} entailed: {entailed}");
        self.dispatch(|| {
            Dispatch::Report(report::Report::Entailment(formula.clone(), entailed))
        });

        Ok(entailed)
    }

    /// Whether the base is consistent, i.e. does not entail ⊥.
    pub fn is_consistent(&mut self) -> Result<bool, ErrorKind> {
        let before = self.counters.clone();
        let all = (0..self.entries.len()).collect::<Vec<_>>();
        // The negation of ⊥ has no clauses.
        let inconsistent = self.entails_from(&all, &ClauseSet::default())?;
        self.dispatch_saturation_stats(&before);
        Ok(!inconsistent)
    }

    /// Whether the entries at `indicies` together with `negated_goal` are unsatisfiable.
    ///
    /// In other words, whether the formulas at `indicies` entail the goal whose negation has the clauses `negated_goal`.
    /// The entries at `indicies` amount to a scratch base, and so this is the check made on each subset of a base during contraction.
    pub(crate) fn entails_from(
        &mut self,
        indicies: &[usize],
        negated_goal: &ClauseSet,
    ) -> Result<bool, ErrorKind> {
        self.counters.entailment_checks += 1;

        let mut clauses = negated_goal.clone();
        for index in indicies {
            clauses.extend(self.entries[*index].clauses().iter().cloned());
        }

        log::trace!(target: targets::ENTAILMENT, "Saturating {} clauses from {} formulas", clauses.len(), indicies.len());

        let mut buffer = ResolutionBuffer::from_clauses(clauses, &self.config);
        let saturation = buffer.saturate()?;

        self.counters.saturation_passes += buffer.passes();
        self.counters.resolvents += buffer.resolvents();

        Ok(saturation == Saturation::Unsatisfiable)
    }

    /// Dispatches the passes and resolvents counted since `before`.
    ///
    /// Called once at the end of an operation, however many checks on entailment the operation made.
    pub(crate) fn dispatch_saturation_stats(&self, before: &Counters) {
        let passes = self.counters.saturation_passes - before.saturation_passes;
        let resolvents = self.counters.resolvents - before.resolvents;
        self.dispatch(|| Dispatch::Stat(Stat::Passes(passes)));
        self.dispatch(|| Dispatch::Stat(Stat::Resolvents(resolvents)));
    }
}
