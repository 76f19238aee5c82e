use belief_base::{base::Priority, config::Config, structures::formula::Formula};

/// Something to do with the base, once read.
pub enum Query {
    Entails(Formula),
    Contract(Formula),
    Revise(Formula),
}

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// Whether to write the clauses of each belief.
    pub clauses: bool,

    /// Queries, in the order given.
    pub queries: Vec<Query>,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parses `request` as a formula, or notes the option the formula was for.
fn formula_for(option: &str, request: Option<&str>) -> Result<Formula, ConfigError> {
    match request.map(|text| text.parse::<Formula>()) {
        Some(Ok(formula)) => Ok(formula),
        Some(Err(e)) => Err(ConfigError::NonSpecific(format!(
            "{option} requires a formula: {e}"
        ))),
        None => Err(ConfigError::NonSpecific(format!(
            "{option} requires a formula"
        ))),
    }
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
///
/// The first argument is the program and the last argument is the path to a belief file, and so both are skipped.
pub(super) fn parse_args(args: &[String], cli_options: &mut CliConfig) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    let options: &[String] = match args.len() {
        0..=2 => &[],
        len => &args[1..len - 1],
    };

    for arg in options {
        // Split on the first '=' only, as formulas may contain '=>' or '<=>'.
        let (option, request) = match arg.split_once('=') {
            Some((option, request)) => (option, Some(request)),
            None => (arg.as_str(), None),
        };

        match option {
            "--clauses" => {
                println!("c The clauses of each belief will be written.");
                cli_options.clauses = true;
            }

            "--contract" => {
                let formula = formula_for("contract", request)?;
                cli_options.queries.push(Query::Contract(formula));
            }

            "--entails" => {
                let formula = formula_for("entails", request)?;
                cli_options.queries.push(Query::Entails(formula));
            }

            "--revise" => {
                let formula = formula_for("revise", request)?;
                cli_options.queries.push(Query::Revise(formula));
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, an error is returned.
            //
            // Further, the cases should be in lexicographic order.
            //
            "--clause_limit" => {
                let (min, max) = cfg.clause_limit.min_max();

                if let Some(Ok(value)) = request.map(|r| r.parse::<usize>()) {
                    if cfg.clause_limit.set(value) {
                        println!("c {} set to: {value}", cfg.clause_limit.name);
                        continue;
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "{} requires a value between {min} and {max}",
                    cfg.clause_limit.name
                )));
            }

            "--contraction_limit" => {
                let (min, max) = cfg.contraction_limit.min_max();

                if let Some(Ok(value)) = request.map(|r| r.parse::<usize>()) {
                    if cfg.contraction_limit.set(value) {
                        println!("c {} set to: {value}", cfg.contraction_limit.name);
                        continue;
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "{} requires a value between {min} and {max}",
                    cfg.contraction_limit.name
                )));
            }

            "--default_priority" => {
                let (min, max) = cfg.default_priority.min_max();

                if let Some(Ok(value)) = request.map(|r| r.parse::<Priority>()) {
                    if cfg.default_priority.set(value) {
                        println!("c {} set to: {value}", cfg.default_priority.name);
                        continue;
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "{} requires a value between {min} and {max}",
                    cfg.default_priority.name
                )));
            }

            "--no_tautology_elimination" => {
                println!("c {} set to: false", cfg.tautology_elimination.name);
                cfg.tautology_elimination.value = false;
            }

            _ => {
                return Err(ConfigError::NonSpecific(format!("Unknown option: {arg}")));
            }
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(options: &[&str]) -> Vec<String> {
        std::iter::once("belief_cli")
            .chain(options.iter().copied())
            .chain(std::iter::once("beliefs.txt"))
            .map(String::from)
            .collect()
    }

    #[test]
    fn options() {
        let mut cli_options = CliConfig::default();
        let Ok(cfg) = parse_args(
            &args(&["--clause_limit=50", "--no_tautology_elimination", "--contract=p => q"]),
            &mut cli_options,
        ) else {
            panic!("Expected a config");
        };

        assert_eq!(cfg.clause_limit.value, 50);
        assert!(!cfg.tautology_elimination.value);
        assert!(matches!(
            cli_options.queries.as_slice(),
            [Query::Contract(formula)] if formula.to_string() == "p → q"
        ));
    }

    #[test]
    fn bounds_are_named() {
        let mut cli_options = CliConfig::default();

        match parse_args(&args(&["--default_priority=0"]), &mut cli_options) {
            Err(e) => assert_eq!(
                e.to_string(),
                format!(
                    "default_priority requires a value between 1 and {}",
                    Priority::MAX
                )
            ),
            Ok(_) => panic!("Expected an error"),
        }

        assert!(parse_args(&args(&["--entails"]), &mut cli_options).is_err());
        assert!(parse_args(&args(&["--unknown"]), &mut cli_options).is_err());
    }
}
