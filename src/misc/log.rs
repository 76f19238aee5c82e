/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [the belief base](crate::base), e.g. additions and removals.
    pub const BELIEF_BASE: &str = "belief_base";

    /// Logs related to [conversion to CNF](crate::procedures::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [contraction](crate::procedures::contraction)
    pub const CONTRACTION: &str = "contraction";

    /// Logs related to [entailment](crate::procedures::entailment)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to reading formulas and [belief files](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [revision](crate::procedures::revision)
    pub const REVISION: &str = "revision";
}
