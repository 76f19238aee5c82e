/*!
Conversion of a formula to an equivalent set of clauses, aka. conjunctive normal form.

The conversion rewrites the syntax tree of a formula in four steps:
1. [Eliminate biconditionals](eliminate_biconditionals): *A ↔ B* becomes *(A → B) ∧ (B → A)*.
2. [Eliminate implications](eliminate_implications): *A → B* becomes *¬A ∨ B*.
3. [Push negations inward](negation_normal_form): *¬(A ∧ B)* becomes *¬A ∨ ¬B*, *¬(A ∨ B)* becomes *¬A ∧ ¬B*, and *¬¬A* becomes *A*.
   After this step negation applies only to atoms and constants, and negated constants are flipped.
4. [Distribute](distribute) disjunction over conjunction, while flattening the result to a [ClauseSet].
   - A conjunction is the union of the clauses of each conjunct.
   - A disjunction is the pairwise union of the clauses of each disjunct, and so *A ∨ (B ∧ C)* gives the clauses of *(A ∨ B) ∧ (A ∨ C)*.
   - ⊤ is the empty set of clauses, and ⊥ is the set containing only the empty clause.

Tautological clauses are dropped during distribution, as these carry no information.
So, any formula whose CNF is the constant true (e.g. *p ∨ ¬p*) has an empty set of clauses.

Each step is total, and so any formula may be converted.
Each step is also a [fold](Formula::fold) over the formula, and so the depth of a formula is bounded only by memory.
Still, distribution may produce exponentially many clauses, and if the count of clauses exceeds the configured limit an error is returned.

# Example

```rust
# use belief_base::db::atom::AtomDB;
# use belief_base::procedures::cnf::to_clauses;
# use belief_base::structures::formula::Formula;
let mut atom_db = AtomDB::default();
let f: Formula = "r ↔ (p ∨ s)".parse().unwrap();

let clauses = to_clauses(&f, &mut atom_db, 1000).unwrap();
let mut clause_strings = clauses
    .iter()
    .map(|clause| atom_db.clause_string(clause))
    .collect::<Vec<_>>();
clause_strings.sort();

assert_eq!(clause_strings, vec!["r ∨ ¬p", "r ∨ ¬s", "¬r ∨ p ∨ s"]);
```
*/

use std::borrow::Borrow;

use crate::{
    base::BeliefBase,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{
        clause::{self, CClause, Clause, ClauseSet},
        formula::{Formula, Operands},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The formula with every biconditional *A ↔ B* rewritten as *(A → B) ∧ (B → A)*.
pub fn eliminate_biconditionals(formula: &Formula) -> Formula {
    formula.fold(|formula, operands: Operands<Formula>| match (formula, operands) {
        (Formula::Iff(..), Operands::Two(l, r)) => Formula::and(
            Formula::implies(l.clone(), r.clone()),
            Formula::implies(r, l),
        ),
        (_, operands) => formula.rebuild(operands),
    })
}

/// The formula with every implication *A → B* rewritten as *¬A ∨ B*.
///
/// Any biconditional is rewritten as a conjunction of implications, and so also eliminated.
pub fn eliminate_implications(formula: &Formula) -> Formula {
    formula.fold(|formula, operands: Operands<Formula>| match (formula, operands) {
        (Formula::Implies(..), Operands::Two(l, r)) => Formula::or(Formula::not(l), r),
        (Formula::Iff(..), Operands::Two(l, r)) => Formula::and(
            Formula::or(Formula::not(l.clone()), r.clone()),
            Formula::or(Formula::not(r), l),
        ),
        (_, operands) => formula.rebuild(operands),
    })
}

/// The formula in negation normal form, with negation applied only to atoms.
///
/// Implications and biconditionals are eliminated along the way, if present.
pub fn negation_normal_form(formula: &Formula) -> Formula {
    let (positive, _negative) = formula.fold(polarised);
    positive
}

/// The negation normal forms of a formula and of its negation, from those of the immediate subformulas.
fn polarised(formula: &Formula, operands: Operands<(Formula, Formula)>) -> (Formula, Formula) {
    match (formula, operands) {
        (Formula::Top, _) => (Formula::Top, Formula::Bottom),
        (Formula::Bottom, _) => (Formula::Bottom, Formula::Top),
        (Formula::Atom(_), _) => (formula.clone(), Formula::not(formula.clone())),

        (_, Operands::One((positive, negative))) => (negative, positive),

        (Formula::And(..), Operands::Two((lp, ln), (rp, rn))) => {
            (Formula::and(lp, rp), Formula::or(ln, rn))
        }

        (Formula::Or(..), Operands::Two((lp, ln), (rp, rn))) => {
            (Formula::or(lp, rp), Formula::and(ln, rn))
        }

        (Formula::Implies(..), Operands::Two((lp, ln), (rp, rn))) => {
            (Formula::or(ln, rp), Formula::and(lp, rn))
        }

        (_, Operands::Two((lp, ln), (rp, rn))) => (
            Formula::and(
                Formula::or(ln.clone(), rp.clone()),
                Formula::or(rn.clone(), lp.clone()),
            ),
            Formula::or(Formula::and(lp, rn), Formula::and(ln, rp)),
        ),

        (_, Operands::None) => panic!("! A compound formula without operands"),
    }
}

/// The clauses of a formula, by distributing disjunction over conjunction.
///
/// The formula is first put in [negation normal form](negation_normal_form).
pub fn distribute(
    formula: &Formula,
    atom_db: &mut AtomDB,
    clause_limit: usize,
) -> Result<ClauseSet, ErrorKind> {
    distribute_nnf(&negation_normal_form(formula), atom_db, clause_limit)
}

/// The clauses of a formula in negation normal form.
fn distribute_nnf(
    formula: &Formula,
    atom_db: &mut AtomDB,
    clause_limit: usize,
) -> Result<ClauseSet, ErrorKind> {
    formula.try_fold(|formula, operands| -> Result<ClauseSet, ErrorKind> {
        match (formula, operands) {
            (Formula::Top, _) => Ok(ClauseSet::default()),

            (Formula::Bottom, _) => Ok(ClauseSet::from([CClause::default()])),

            (Formula::Atom(name), _) => {
                let atom = atom_db.atom_or_fresh(name)?;
                Ok(ClauseSet::from([vec![CLiteral::new(atom, true)]]))
            }

            (Formula::Not(sub), _) => match sub.as_ref() {
                Formula::Atom(name) => {
                    let atom = atom_db.atom_or_fresh(name)?;
                    Ok(ClauseSet::from([vec![CLiteral::new(atom, false)]]))
                }
                _ => panic!("! Distribution over a formula not in negation normal form"),
            },

            (Formula::And(..), Operands::Two(mut left, mut right)) => {
                if left.len() < right.len() {
                    std::mem::swap(&mut left, &mut right);
                }
                left.extend(right);
                if left.len() > clause_limit {
                    return Err(err::CnfError::ClauseLimit.into());
                }
                Ok(left)
            }

            (Formula::Or(..), Operands::Two(left, right)) => {
                let mut clauses = ClauseSet::default();
                for left_clause in &left {
                    for right_clause in &right {
                        let clause =
                            clause::canonical(left_clause.iter().chain(right_clause.iter()).copied());
                        if clause.is_tautology() {
                            continue;
                        }
                        clauses.insert(clause);
                        if clauses.len() > clause_limit {
                            return Err(err::CnfError::ClauseLimit.into());
                        }
                    }
                }
                Ok(clauses)
            }

            _ => panic!("! Distribution over a formula not in negation normal form"),
        }
    })
}

/// The clauses of a formula, using (and extending) the given atom database.
pub fn to_clauses(
    formula: &Formula,
    atom_db: &mut AtomDB,
    clause_limit: usize,
) -> Result<ClauseSet, ErrorKind> {
    let without_biconditionals = eliminate_biconditionals(formula);
    let without_implications = eliminate_implications(&without_biconditionals);
    let nnf = negation_normal_form(&without_implications);

    let clauses = distribute_nnf(&nnf, atom_db, clause_limit)?;
    log::trace!(target: targets::CNF, "{formula} as {} clauses", clauses.len());
    Ok(clauses)
}

impl BeliefBase {
    /// The clauses of a formula, in terms of the atoms of the base.
    ///
    /// Any atom of the formula not yet seen by the base is added to the atom database, though the formulas of the base are unchanged.
    pub fn clauses_of(&mut self, formula: impl Borrow<Formula>) -> Result<ClauseSet, ErrorKind> {
        to_clauses(
            formula.borrow(),
            &mut self.atom_db,
            self.config.clause_limit.value,
        )
    }
}
