/*!
Saturation of a set of clauses by resolution, to determine whether the clauses are unsatisfiable.

# Resolution

Given clauses *C* and *D* such that *p* belongs to *C* and ¬*p* belongs to *D*, the resolvent of *C* and *D* on *p* is the clause of every literal in *C* or *D*, other than *p* and ¬*p*.
The resolvent is a consequence of *C* and *D*, and so if the empty clause is a resolvent the clauses are unsatisfiable.

# Saturation

A [ResolutionBuffer] holds a working set of clauses, initialised to some given clauses (without tautologies, if so configured).
Then, in passes:
- For each pair of distinct clauses, each resolvent of the pair is derived.
  + If the resolvent is empty, saturation stops and the clauses are unsatisfiable.
  + If the resolvent is a tautology, the resolvent is discarded.
  + If the resolvent is not already present, the resolvent is added to the working set (and considered from the next pass).
- If a pass adds no fresh clause then no further clause can be derived, and the clauses are satisfiable.

Each pass after the first only examines pairs with at least one clause added on the previous pass, as every other pair has already been examined.

Saturation always terminates: every resolvent contains only literals from the given clauses, and there are finitely many clauses over finitely many literals.
Still, the count of clauses may be exponential in the count of atoms, and if the count of clauses exceeds the configured limit an error is returned.

No heuristics are applied --- no unit propagation, subsumption, or indexing of clauses.

# Example

```rust
# use belief_base::config::Config;
# use belief_base::procedures::resolution::{ResolutionBuffer, Saturation};
# use belief_base::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);

// p, p → q, ¬q
let clauses = vec![vec![p], vec![-p, q], vec![-q]];

let mut buffer = ResolutionBuffer::from_clauses(clauses, &Config::default());
assert_eq!(buffer.saturate(), Ok(Saturation::Unsatisfiable));

// p, p → q
let clauses = vec![vec![p], vec![-p, q]];

let mut buffer = ResolutionBuffer::from_clauses(clauses, &Config::default());
assert_eq!(buffer.saturate(), Ok(Saturation::Satisfiable));
assert!(buffer.clauses().contains(&vec![q]));
```
*/

use std::collections::HashSet;

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::{self},
};

/// The result of saturating a set of clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saturation {
    /// The empty clause was derived (or given), and so the clauses are unsatisfiable.
    Unsatisfiable,

    /// No fresh clause may be derived and the empty clause was not derived, and so the clauses are satisfiable.
    Satisfiable,
}

/// A working set of clauses, to be saturated.
pub struct ResolutionBuffer {
    /// The clauses, in order of addition.
    clauses: Vec<CClause>,

    /// The same clauses, for checks on whether a resolvent is fresh.
    present: HashSet<CClause>,

    /// Whether the empty clause was among the given clauses.
    contains_empty: bool,

    /// The largest count of clauses permitted.
    clause_limit: usize,

    /// A count of passes made.
    passes: usize,

    /// A count of fresh clauses derived.
    resolvents: usize,
}

impl ResolutionBuffer {
    /// A buffer holding `clauses`, configured by `config`.
    pub fn from_clauses(clauses: impl IntoIterator<Item = CClause>, config: &Config) -> Self {
        let mut buffer = ResolutionBuffer {
            clauses: Vec::default(),
            present: HashSet::default(),
            contains_empty: false,
            clause_limit: config.clause_limit.value,
            passes: 0,
            resolvents: 0,
        };

        for clause in clauses {
            if clause.is_empty() {
                buffer.contains_empty = true;
            }
            if config.tautology_elimination.value && clause.is_tautology() {
                continue;
            }
            if buffer.present.insert(clause.clone()) {
                buffer.clauses.push(clause);
            }
        }

        buffer
    }

    /// The clauses of the buffer, given and derived, in order of addition.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The count of passes made by saturation.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The count of fresh clauses derived by saturation.
    pub fn resolvents(&self) -> usize {
        self.resolvents
    }

    /// Saturates the clauses of the buffer, stopping early if the empty clause is derived.
    pub fn saturate(&mut self) -> Result<Saturation, err::ResolutionError> {
        if self.contains_empty {
            log::trace!(target: targets::RESOLUTION, "Empty clause given");
            return Ok(Saturation::Unsatisfiable);
        }

        if self.clauses.len() > self.clause_limit {
            return Err(err::ResolutionError::ClauseLimit);
        }

        // Pairs within clauses[..examined] have been resolved.
        let mut examined = 0;

        loop {
            self.passes += 1;
            let limit = self.clauses.len();
            let mut fresh = Vec::default();

            for j in examined..limit {
                for i in 0..j {
                    let (a, b) = (&self.clauses[i], &self.clauses[j]);

                    for pivot in a.pivots(b) {
                        let resolvent = a.resolve(b, pivot);

                        if resolvent.is_empty() {
                            log::debug!(target: targets::RESOLUTION, "Empty resolvent of {} and {}, on pass {}", a.as_string(), b.as_string(), self.passes);
                            return Ok(Saturation::Unsatisfiable);
                        }

                        if resolvent.is_tautology() {
                            continue;
                        }

                        if self.present.insert(resolvent.clone()) {
                            log::trace!(target: targets::RESOLUTION, "Resolvent {} of {} and {}", resolvent.as_string(), a.as_string(), b.as_string());
                            fresh.push(resolvent);

                            if limit + fresh.len() > self.clause_limit {
                                return Err(err::ResolutionError::ClauseLimit);
                            }
                        }
                    }
                }
            }

            if fresh.is_empty() {
                log::debug!(target: targets::RESOLUTION, "Saturated with {} clauses after {} passes", self.clauses.len(), self.passes);
                return Ok(Saturation::Satisfiable);
            }

            self.resolvents += fresh.len();
            examined = limit;
            self.clauses.append(&mut fresh);
        }
    }
}

/// Whether the given clauses are unsatisfiable, by saturation.
pub fn is_unsatisfiable(
    clauses: impl IntoIterator<Item = CClause>,
    config: &Config,
) -> Result<bool, err::ResolutionError> {
    let mut buffer = ResolutionBuffer::from_clauses(clauses, config);
    Ok(buffer.saturate()? == Saturation::Unsatisfiable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    fn lit(atom: u32, polarity: bool) -> CLiteral {
        CLiteral::new(atom, polarity)
    }

    #[test]
    fn unsatisfiable() {
        let config = Config::default();

        // p ∨ q, ¬p ∨ q, p ∨ ¬q, ¬p ∨ ¬q
        let all_pairs = vec![
            vec![lit(0, true), lit(1, true)],
            vec![lit(0, false), lit(1, true)],
            vec![lit(0, true), lit(1, false)],
            vec![lit(0, false), lit(1, false)],
        ];
        assert_eq!(is_unsatisfiable(all_pairs.clone(), &config), Ok(true));
        assert_eq!(is_unsatisfiable(all_pairs[1..].to_vec(), &config), Ok(false));

        assert_eq!(is_unsatisfiable(Vec::<CClause>::default(), &config), Ok(false));
        assert_eq!(is_unsatisfiable(vec![CClause::default()], &config), Ok(true));
    }

    #[test]
    fn clause_limit() {
        let mut config = Config::default();
        assert!(config.clause_limit.set(3));

        // The resolvent q of p and ¬p ∨ q exceeds the limit.
        let clauses = vec![
            vec![lit(0, true)],
            vec![lit(0, false), lit(1, true)],
            vec![lit(2, true)],
        ];
        assert_eq!(
            is_unsatisfiable(clauses, &config),
            Err(err::ResolutionError::ClauseLimit)
        );
    }

    #[test]
    fn later_passes() {
        let mut buffer = ResolutionBuffer::from_clauses(
            vec![
                vec![lit(0, true)],
                vec![lit(0, false), lit(1, true)],
                vec![lit(1, false), lit(2, true)],
                vec![lit(2, false)],
            ],
            &Config::default(),
        );

        assert_eq!(buffer.saturate(), Ok(Saturation::Unsatisfiable));
        assert!(buffer.passes() >= 2);
    }
}
