use belief_base::{
    base::BeliefBase,
    builder::{ExpansionOk, RemovalOk},
    config::Config,
    procedures::contraction::ContractionOk,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

fn formula(text: &str) -> Formula {
    text.parse().unwrap()
}

mod expansion {
    use super::*;

    #[test]
    fn added_in_order() {
        let mut base = BeliefBase::default();

        for belief in ["q", "p → q", "p"] {
            assert_eq!(base.expansion(formula(belief)), Ok(ExpansionOk::Added));
        }

        let formulas = base.formulas().map(|f| f.to_string()).collect::<Vec<_>>();
        assert_eq!(formulas, vec!["q", "p → q", "p"]);
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn duplicate_keeps_priority() {
        let mut base = BeliefBase::default();
        let p = formula("p ∧ q");

        assert_eq!(base.expansion_with(&p, 4), Ok(ExpansionOk::Added));
        assert_eq!(base.expansion_with(&p, 7), Ok(ExpansionOk::Duplicate));
        assert_eq!(base.expansion(formula("p & q")), Ok(ExpansionOk::Duplicate));

        assert_eq!(base.len(), 1);
        assert_eq!(base.entries()[0].priority(), 4);
    }

    #[test]
    fn equivalent_formulas_are_distinct() {
        let mut base = BeliefBase::default();

        assert_eq!(base.expansion(formula("q")), Ok(ExpansionOk::Added));
        assert_eq!(base.expansion(formula("¬¬q")), Ok(ExpansionOk::Added));
        assert_eq!(base.expansion(formula("q ∧ q")), Ok(ExpansionOk::Added));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn default_priority() {
        let mut config = Config::default();
        assert!(config.default_priority.set(5));
        let mut base = BeliefBase::from_config(config, None);

        assert!(base.expansion(formula("p")).is_ok());
        assert_eq!(base.entries()[0].priority(), 5);
    }

    #[test]
    fn invalid_priority() {
        let mut base = BeliefBase::default();

        assert_eq!(
            base.expansion_with(formula("p"), 0),
            Err(ErrorKind::BeliefBase(err::BeliefBaseError::InvalidPriority))
        );
        assert!(base.is_empty());
    }

    #[test]
    fn clause_limit() {
        let mut config = Config::default();
        assert!(config.clause_limit.set(2));
        let mut base = BeliefBase::from_config(config, None);

        assert!(base.expansion(formula("a ∧ b")).is_ok());
        assert_eq!(
            base.expansion(formula("(a ∧ b) ∨ (c ∧ d)")),
            Err(ErrorKind::Cnf(err::CnfError::ClauseLimit))
        );
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn long_conjunction() {
        let conjunction = (0..10_000)
            .map(|index| format!("p{index}"))
            .collect::<Vec<_>>()
            .join(" ∧ ");
        let belief = formula(&conjunction);

        let mut base = BeliefBase::default();
        assert_eq!(base.expansion(&belief), Ok(ExpansionOk::Added));
        assert_eq!(base.entries()[0].clauses().len(), 10_000);

        assert_eq!(
            base.expansion(formula(&belief.to_string())),
            Ok(ExpansionOk::Duplicate)
        );
        assert_eq!(base.remove(&belief), RemovalOk::Removed);
        assert!(base.is_empty());
    }

    #[test]
    fn long_negation() {
        let belief = formula(&format!("{}p", "¬".repeat(10_000)));

        let mut base = BeliefBase::default();
        assert_eq!(base.expansion(&belief), Ok(ExpansionOk::Added));
        assert_eq!(base.entails(formula("p")), Ok(true));

        assert_eq!(
            base.contraction(formula("p")),
            Ok(ContractionOk::Contracted {
                removed: vec![belief]
            })
        );
        assert!(base.is_empty());
    }
}

mod removal {
    use super::*;

    #[test]
    fn remove_and_contains() {
        let mut base = BeliefBase::default();
        let p = formula("p");
        let q = formula("q");

        assert!(base.expansion(&p).is_ok());
        assert!(base.expansion(&q).is_ok());
        assert!(base.contains(&p));

        assert_eq!(base.remove(&p), RemovalOk::Removed);
        assert!(!base.contains(&p));
        assert_eq!(base.remove(&p), RemovalOk::Missing);

        assert_eq!(base.formulas().collect::<Vec<_>>(), vec![&q]);
        assert_eq!(base.expansion(&p), Ok(ExpansionOk::Added));
        assert_eq!(base.formulas().collect::<Vec<_>>(), vec![&q, &p]);
    }
}

mod belief_files {
    use super::*;

    #[test]
    fn read() {
        let mut base = BeliefBase::default();

        let beliefs = "
# A comment.
2 C → R

C
3   R → U
U <-> W
";

        let info = base.read_beliefs(beliefs.as_bytes()).unwrap();
        assert_eq!(info.beliefs, 4);
        assert_eq!(info.added, 4);
        assert_eq!(info.duplicates, 0);

        assert_eq!(base.to_string(), "2 C → R\n1 C\n3 R → U\n1 U ↔ W\n");
        assert_eq!(base.entails(formula("W")), Ok(true));
    }

    #[test]
    fn display_reads_back() {
        let mut base = BeliefBase::default();
        assert!(base.expansion_with(formula("p → (q ∨ ¬r)"), 3).is_ok());
        assert!(base.expansion_with(formula("⊤ ↔ s"), 1).is_ok());

        let mut copy = BeliefBase::default();
        assert!(copy.read_beliefs(base.to_string().as_bytes()).is_ok());
        assert_eq!(copy.entries(), base.entries());
    }

    #[test]
    fn bad_priority() {
        let mut base = BeliefBase::default();

        assert_eq!(
            base.read_beliefs("p\n0 q\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Priority(2)))
        );
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn bad_formula() {
        let mut base = BeliefBase::default();

        assert_eq!(
            base.read_beliefs("\n1 p ∧\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
        assert!(base.is_empty());
    }
}

mod dispatches {
    use super::*;
    use belief_base::dispatch::{
        library::{
            delta::{self, Delta},
            report::Report,
        },
        Dispatch,
    };
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn deltas_and_reports() {
        let dispatches = Rc::new(RefCell::new(Vec::new()));
        let sink = dispatches.clone();

        let mut base = BeliefBase::from_config(
            Config::default(),
            Some(Rc::new(move |dispatch: Dispatch| {
                sink.borrow_mut().push(dispatch)
            })),
        );

        let p = formula("p");
        assert!(base.expansion_with(&p, 2).is_ok());
        assert!(base.expansion(&p).is_ok());
        assert_eq!(base.entails(&p), Ok(true));
        assert_eq!(base.remove(&p), RemovalOk::Removed);

        let deltas = dispatches
            .borrow()
            .iter()
            .filter_map(|dispatch| match dispatch {
                Dispatch::Delta(Delta::BeliefBase(delta)) => Some(delta.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(
            deltas,
            vec![
                delta::BeliefBase::Added(p.clone(), 2),
                delta::BeliefBase::Duplicate(p.clone()),
                delta::BeliefBase::Removed(p.clone()),
            ]
        );

        assert!(dispatches
            .borrow()
            .iter()
            .any(|dispatch| *dispatch == Dispatch::Report(Report::Entailment(p.clone(), true))));
    }
}
