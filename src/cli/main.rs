use belief_base::{
    base::BeliefBase, builder::ExpansionOk, procedures::contraction::ContractionOk,
    structures::formula::Formula,
};
use config::{parse_args, CliConfig, Query};
use read::read_beliefs;

mod config;
mod read;

/// Writes the clauses of each belief in the base.
fn write_clauses(base: &mut BeliefBase) {
    let formulas = base.formulas().cloned().collect::<Vec<_>>();
    for formula in formulas {
        match base.clauses_of(&formula) {
            Ok(clauses) => {
                println!("c {formula}");
                for clause in &clauses {
                    println!("c   {}", base.atom_db.clause_string(clause));
                }
            }
            Err(e) => println!("c Conversion error: {e}"),
        }
    }
}

fn contraction_report(formula: &Formula, result: &ContractionOk) {
    match result {
        ContractionOk::Contracted { removed } => {
            println!("c Contracted by {formula}, removing {} beliefs", removed.len());
            for belief in removed {
                println!("c   {belief}");
            }
        }
        ContractionOk::NotEntailed => println!("c Contraction by {formula} not applicable: not entailed"),
        ContractionOk::Tautology => println!("c Contraction by {formula} not applicable: tautology"),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let mut cli_options = CliConfig::default();

    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(&args, &mut cli_options) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let mut base = BeliefBase::from_config(config, None);

    if let Err(e) = read_beliefs(args.iter().skip(1).last(), &mut base) {
        println!("c {e}");
        std::process::exit(1);
    }

    if cli_options.clauses {
        write_clauses(&mut base);
    }

    for query in &cli_options.queries {
        match query {
            Query::Entails(formula) => match base.entails(formula) {
                Ok(true) => println!("s Entailed"),
                Ok(false) => println!("s Not entailed"),
                Err(e) => {
                    println!("c Entailment error: {e}");
                    std::process::exit(2);
                }
            },

            Query::Contract(formula) => match base.contraction(formula) {
                Ok(result) => contraction_report(formula, &result),
                Err(e) => {
                    println!("c Contraction error: {e}");
                    std::process::exit(2);
                }
            },

            Query::Revise(formula) => {
                let priority = base.config.default_priority.value;
                match base.revision(formula, priority) {
                    Ok(result) => {
                        contraction_report(&formula.negation(), &result.contraction);
                        match result.expansion {
                            ExpansionOk::Added => println!("c Revised by {formula}"),
                            ExpansionOk::Duplicate => println!("c Revised by {formula}, already believed"),
                        }
                    }
                    Err(e) => {
                        println!("c Revision error: {e}");
                        std::process::exit(2);
                    }
                }
            }
        }
    }

    println!("c Beliefs:");
    for entry in base.entries() {
        println!("b {entry}");
    }
}
