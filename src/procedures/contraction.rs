/*!
Contraction of a base by a formula, so the formula is no longer entailed.

# Overview

Contraction is partial meet contraction over an enumeration of subsets of the base.

Given a base 𝐁 of *n* formulas and some formula φ entailed by 𝐁:
1. For each size *k* from *n* - 1 down to 0, each subset of 𝐁 of size *k* is examined (in the order of [Combinations]).
   + A subset which does not entail φ is a candidate.
2. On the first size with some candidate, the search stops, and the candidate with the greatest sum of priorities is selected.
   + If two candidates have the same sum, the candidate examined first is selected.
3. The formulas of the base are replaced by the selected candidate, in their original order.

As larger subsets are examined first, every candidate is maximal by cardinality, and so no formula of the base outside the selected candidate can be added back without φ being entailed.

Contraction is not applicable, and the base is unchanged, if either:
- φ is not entailed by the base, or
- φ is entailed by the empty base (i.e. φ is a tautology), as then every subset entails φ.

The result of a contraction is returned as a [ContractionOk].

# Complexity

The enumeration examines up to 2<sup>*n*</sup> subsets, each with a check on entailment.
So, if the count of formulas in the base exceeds the [configured limit](crate::config::Config::contraction_limit) an error is returned, and the base is unchanged.

# Example

```rust
# use belief_base::base::BeliefBase;
# use belief_base::procedures::contraction::ContractionOk;
# use belief_base::structures::formula::Formula;
let mut base = BeliefBase::default();

let p: Formula = "p".parse().unwrap();
let q: Formula = "q".parse().unwrap();
let p_and_q: Formula = "p ∧ q".parse().unwrap();

assert!(base.expansion_with(&p, 1).is_ok());
assert!(base.expansion_with(&q, 3).is_ok());

assert_eq!(
    base.contraction(&p_and_q),
    Ok(ContractionOk::Contracted { removed: vec![p.clone()] })
);
assert_eq!(base.formulas().collect::<Vec<_>>(), vec![&q]);

assert_eq!(base.contraction(&p), Ok(ContractionOk::NotEntailed));
```
*/

use std::{borrow::Borrow, time::Instant};

use crate::{
    base::{BeliefBase, BeliefEntry},
    dispatch::{
        library::{
            delta::{self, Delta},
            stat::Stat,
        },
        Dispatch,
    },
    generic::combinations::Combinations,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Ok results of a contraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractionOk {
    /// The base was contracted, and the formulas removed are noted, in their original order.
    Contracted { removed: Vec<Formula> },

    /// The formula was not entailed by the base, and so the base is unchanged.
    NotEntailed,

    /// The formula was entailed by the empty base, and so the base is unchanged.
    Tautology,
}

impl BeliefBase {
    /// Contracts the base by `formula`.
    ///
    /// See [contraction](crate::procedures::contraction) for details.
    pub fn contraction(
        &mut self,
        formula: impl Borrow<Formula>,
    ) -> Result<ContractionOk, ErrorKind> {
        let target = formula.borrow();
        let start = Instant::now();
        let before = self.counters.clone();

        let negated_target = self.clauses_of(target.negation())?;

        let count = self.entries.len();
        let all = (0..count).collect::<Vec<_>>();

        if !self.entails_from(&all, &negated_target)? {
            log::info!(target: targets::CONTRACTION, "{target} is not entailed");
            self.dispatch(|| {
                Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::ContractionRejected(
                    target.clone(),
                )))
            });
            self.dispatch_saturation_stats(&before);
            return Ok(ContractionOk::NotEntailed);
        }

        if self.entails_from(&[], &negated_target)? {
            log::info!(target: targets::CONTRACTION, "{target} is a tautology");
            self.dispatch(|| {
                Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::ContractionRejected(
                    target.clone(),
                )))
            });
            self.dispatch_saturation_stats(&before);
            return Ok(ContractionOk::Tautology);
        }

        if count > self.config.contraction_limit.value {
            return Err(err::BeliefBaseError::ContractionLimit.into());
        }

        let mut selected: Option<(Vec<usize>, u64)> = None;
        let mut subsets = 0;

        // The empty set does not entail the target, so some size has a candidate.
        for size in (0..count).rev() {
            for subset in Combinations::new(count, size) {
                subsets += 1;

                if self.entails_from(&subset, &negated_target)? {
                    continue;
                }

                let priority_sum = self.priority_sum(&subset);
                log::trace!(target: targets::CONTRACTION, "Candidate {subset:?} with priority {priority_sum}");

                match &selected {
                    Some((_, best)) if *best >= priority_sum => {}
                    _ => selected = Some((subset, priority_sum)),
                }
            }

            if selected.is_some() {
                log::debug!(target: targets::CONTRACTION, "Candidates found at size {size}");
                break;
            }
        }

        self.counters.subsets += subsets;

        let kept = selected.map(|(subset, _)| subset).unwrap_or_default();

        let mut removed = Vec::default();
        let mut remainder = Vec::with_capacity(kept.len());
        for (index, entry) in std::mem::take(&mut self.entries).into_iter().enumerate() {
            match kept.binary_search(&index) {
                Ok(_) => remainder.push(entry),
                Err(_) => removed.push(entry.formula().clone()),
            }
        }
        self.entries = remainder;

        self.counters.time = start.elapsed();
        log::info!(target: targets::CONTRACTION, "Contracted {target}, removing {} formulas in {:?}", removed.len(), self.counters.time);

        self.dispatch(|| {
            Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::Contracted {
                target: target.clone(),
                remainder: self.formulas().cloned().collect(),
            }))
        });
        self.dispatch(|| Dispatch::Stat(Stat::Subsets(subsets)));
        self.dispatch_saturation_stats(&before);
        self.dispatch(|| Dispatch::Stat(Stat::Time(self.counters.time)));

        Ok(ContractionOk::Contracted { removed })
    }

    /// The remainder set of the base with respect to `formula`.
    ///
    /// That is, every subset of the base which does not entail `formula` and is maximal with respect to inclusion, from largest to smallest.
    /// Entries of each remainder are in the order of the base, and remainders of the same size are in the order of [Combinations].
    ///
    /// If `formula` is not entailed by the base, the only remainder is the base itself.
    /// And, if `formula` is a tautology, there are no remainders.
    ///
    /// ```rust
    /// # use belief_base::base::BeliefBase;
    /// # use belief_base::structures::formula::Formula;
    /// let mut base = BeliefBase::default();
    /// for belief in ["p", "p → q", "q"] {
    ///     assert!(base.expansion(&belief.parse::<Formula>().unwrap()).is_ok());
    /// }
    ///
    /// let remainders = base.remainders(&"q".parse::<Formula>().unwrap()).unwrap();
    /// let formulas = remainders
    ///     .iter()
    ///     .map(|remainder| remainder.iter().map(|entry| entry.formula().to_string()).collect::<Vec<_>>())
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(formulas, vec![vec!["p"], vec!["p → q"]]);
    /// ```
    pub fn remainders(
        &mut self,
        formula: impl Borrow<Formula>,
    ) -> Result<Vec<Vec<BeliefEntry>>, ErrorKind> {
        let before = self.counters.clone();
        let negated_target = self.clauses_of(formula.borrow().negation())?;

        let count = self.entries.len();
        if count > self.config.contraction_limit.value {
            return Err(err::BeliefBaseError::ContractionLimit.into());
        }

        let mut found: Vec<Vec<usize>> = Vec::default();

        for size in (0..=count).rev() {
            for subset in Combinations::new(count, size) {
                if found.iter().any(|remainder| is_subset(&subset, remainder)) {
                    continue;
                }

                self.counters.subsets += 1;
                if !self.entails_from(&subset, &negated_target)? {
                    found.push(subset);
                }
            }
        }

        log::debug!(target: targets::CONTRACTION, "{} remainders of {}", found.len(), formula.borrow());
        self.dispatch_saturation_stats(&before);

        Ok(found
            .into_iter()
            .map(|remainder| {
                remainder
                    .into_iter()
                    .map(|index| self.entries[index].clone())
                    .collect()
            })
            .collect())
    }

    /// The sum of the priorities of the entries at `indicies`.
    fn priority_sum(&self, indicies: &[usize]) -> u64 {
        indicies
            .iter()
            .map(|index| self.entries[*index].priority() as u64)
            .sum()
    }
}

/// Whether the sorted indicies of `subset` all belong to the sorted indicies of `superset`.
fn is_subset(subset: &[usize], superset: &[usize]) -> bool {
    subset.len() <= superset.len()
        && subset
            .iter()
            .all(|index| superset.binary_search(index).is_ok())
}
