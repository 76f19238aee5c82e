/*!
Configuration of a belief base.

All configuration for a base is contained within a [Config], and each option is a [ConfigOption] which records the bounds within which the option may be set.

```rust
# use belief_base::config::Config;
let mut config = Config::default();

assert!(config.clause_limit.set(500));
assert!(!config.default_priority.set(0));
assert_eq!(config.default_priority.value, 1);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::base::Priority;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The priority given to a formula when no priority is given on expansion.
    pub default_priority: ConfigOption<Priority>,

    /// The largest count of clauses which may be held during CNF conversion or resolution.
    ///
    /// Exceeding the limit is an error, rather than a (silent) truncation.
    pub clause_limit: ConfigOption<usize>,

    /// The largest count of formulas a base may hold for a contraction to enumerate subsets of the base.
    pub contraction_limit: ConfigOption<usize>,

    /// Remove tautological clauses before saturation.
    pub tautology_elimination: ConfigOption<bool>,
}

impl Default for Config {
    /// The default configuration is suitable for small bases, e.g. those in the tests.
    fn default() -> Self {
        Config {
            default_priority: ConfigOption {
                name: "default_priority",
                min: 1,
                max: Priority::MAX,
                value: 1,
            },

            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 1,
                max: usize::MAX,
                value: 100_000,
            },

            contraction_limit: ConfigOption {
                name: "contraction_limit",
                min: 0,
                max: 63,
                value: 20,
            },

            tautology_elimination: ConfigOption {
                name: "tautology_elimination",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
