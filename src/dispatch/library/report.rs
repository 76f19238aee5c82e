//! Details on the result of some procedure.
use crate::structures::formula::Formula;

/// Reports from a belief base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// Whether the base entails the formula.
    Entailment(Formula, bool),

    /// Information regarding the parse of a belief file.
    Parser(self::Parser),
}

/// Information regarding the parse of a belief file.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Parser {
    /// A count of beliefs read.
    Beliefs(usize),

    /// A count of beliefs added to the base, and of those already present.
    Added(usize, usize),
}

impl std::fmt::Display for self::Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beliefs(b) => write!(f, "Parse result: {b} beliefs"),
            Self::Added(a, d) => write!(f, "Added {a} beliefs, with {d} duplicates"),
        }
    }
}
