//! Comparisons against truth tables, over random formulas with few atoms.

use belief_base::{
    base::{BeliefBase, Priority},
    db::atom::AtomDB,
    procedures::{cnf, contraction::ContractionOk},
    structures::{clause::Clause, formula::Formula},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ATOMS: usize = 4;

fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    if depth == 0 || rng.random_bool(0.25) {
        return match rng.random_range(0..12) {
            0 => Formula::Top,
            1 => Formula::Bottom,
            _ => Formula::atom(format!("a{}", rng.random_range(0..ATOMS))),
        };
    }

    match rng.random_range(0..5) {
        0 => Formula::not(random_formula(rng, depth - 1)),
        1 => Formula::and(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
        2 => Formula::or(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
        3 => Formula::implies(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
        _ => Formula::iff(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
    }
}

/// The index of an atom named by [random_formula].
fn index_of(name: &str) -> usize {
    name[1..].parse().unwrap()
}

/// Whether `formula` is true on the valuation encoded by the bits of `mask`.
fn true_on(formula: &Formula, mask: usize) -> bool {
    formula
        .value_on(|name| Some((mask >> index_of(name)) & 1 == 1))
        .unwrap()
}

/// Whether `premises` entail `goal`, by truth table.
fn entails_by_table(premises: &[Formula], goal: &Formula) -> bool {
    (0..1 << ATOMS).all(|mask| {
        !premises.iter().all(|premise| true_on(premise, mask)) || true_on(goal, mask)
    })
}

mod cnf_equivalence {
    use super::*;

    #[test]
    fn random_formulas() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, 4);
            let mut atom_db = AtomDB::default();
            let clauses = cnf::to_clauses(&formula, &mut atom_db, 100_000).unwrap();

            for mask in 0..1 << ATOMS {
                let valuation = (0..atom_db.count())
                    .map(|atom| {
                        let name = atom_db.name_of(atom as u32).unwrap();
                        Some((mask >> index_of(name)) & 1 == 1)
                    })
                    .collect::<Vec<_>>();

                let clauses_value = clauses
                    .iter()
                    .all(|clause| clause.value_on(&valuation) == Some(true));

                assert_eq!(clauses_value, true_on(&formula, mask), "{formula}");
            }
        }
    }

    #[test]
    fn random_formulas_are_clausal() {
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, 4);
            let mut atom_db = AtomDB::default();
            let clauses = cnf::to_clauses(&formula, &mut atom_db, 100_000).unwrap();

            for clause in &clauses {
                assert!(!clause.is_tautology());
                assert!(clause.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }
}

mod entailment {
    use super::*;

    #[test]
    fn random_bases() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..150 {
            let mut base = BeliefBase::default();
            let premise_count = rng.random_range(0..4);
            for _ in 0..premise_count {
                assert!(base.expansion(random_formula(&mut rng, 3)).is_ok());
            }
            let premises = base.formulas().cloned().collect::<Vec<_>>();

            let goal = random_formula(&mut rng, 3);
            assert_eq!(
                base.entails(&goal),
                Ok(entails_by_table(&premises, &goal)),
                "{premises:?} ⊨ {goal}"
            );
        }
    }
}

mod contraction {
    use super::*;

    /// The indicies of the remainder a contraction should keep, found by examining every subset of `formulas`.
    ///
    /// Remainders are compared by size, then by sum of priorities, and then by the (lexicographic) order of their indicies.
    fn best_remainder(formulas: &[Formula], priorities: &[Priority], target: &Formula) -> Vec<usize> {
        let mut best: Option<(usize, u64, Vec<usize>)> = None;

        for mask in 0..1_usize << formulas.len() {
            let indicies = (0..formulas.len())
                .filter(|i| (mask >> i) & 1 == 1)
                .collect::<Vec<_>>();
            let subset = indicies.iter().map(|i| formulas[*i].clone()).collect::<Vec<_>>();

            if entails_by_table(&subset, target) {
                continue;
            }

            let sum = indicies.iter().map(|i| priorities[*i] as u64).sum::<u64>();
            let better = match &best {
                None => true,
                Some((size, best_sum, best_indicies)) => {
                    (indicies.len(), sum) > (*size, *best_sum)
                        || ((indicies.len(), sum) == (*size, *best_sum) && indicies < *best_indicies)
                }
            };
            if better {
                best = Some((indicies.len(), sum, indicies));
            }
        }

        best.map(|(_, _, indicies)| indicies).unwrap_or_default()
    }

    #[test]
    fn random_bases() {
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..200 {
            let mut base = BeliefBase::default();
            for _ in 0..rng.random_range(1..5) {
                let priority = rng.random_range(1..4);
                assert!(base.expansion_with(random_formula(&mut rng, 2), priority).is_ok());
            }
            let original = base.formulas().cloned().collect::<Vec<_>>();
            let priorities = base.entries().iter().map(|e| e.priority()).collect::<Vec<_>>();
            let target = random_formula(&mut rng, 2);

            let entailed = entails_by_table(&original, &target);
            let tautology = entails_by_table(&[], &target);

            match base.contraction(&target) {
                Ok(ContractionOk::NotEntailed) => {
                    assert!(!entailed);
                    assert_eq!(base.formulas().cloned().collect::<Vec<_>>(), original);
                }

                Ok(ContractionOk::Tautology) => {
                    assert!(entailed && tautology);
                    assert_eq!(base.formulas().cloned().collect::<Vec<_>>(), original);
                }

                Ok(ContractionOk::Contracted { removed }) => {
                    assert!(entailed && !tautology);

                    let kept = base.formulas().cloned().collect::<Vec<_>>();
                    assert!(!entails_by_table(&kept, &target));
                    assert_eq!(kept.len() + removed.len(), original.len());
                    assert!(kept.iter().all(|f| original.contains(f)));

                    for formula in &removed {
                        let mut restored = kept.clone();
                        restored.push(formula.clone());
                        assert!(entails_by_table(&restored, &target));
                    }

                    let best = best_remainder(&original, &priorities, &target);
                    let expected = best.iter().map(|i| original[*i].clone()).collect::<Vec<_>>();
                    assert_eq!(kept, expected, "{original:?} ÷ {target}");
                }

                Err(e) => panic!("{e}"),
            }
        }
    }
}
