//! Error types used in the library.
//!
//! - Most of these are capacity errors, and signal that a base or query is too large to be handled by a complete but naive procedure.
//! - Parse errors are external, and are only returned when reading formulas from text.
//! - Outcomes which leave a base unchanged for logical reasons (e.g. contracting a formula which is not entailed) are *not* errors.
//!   Instead, these are reported through the Ok variant of a result, e.g. [ContractionOk](crate::procedures::contraction::ContractionOk).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    BeliefBase(BeliefBaseError),
    Cnf(CnfError),
    Parse(ParseError),
    Resolution(ResolutionError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "Atom database: {e:?}"),
            Self::BeliefBase(e) => write!(f, "Belief base: {e:?}"),
            Self::Cnf(e) => write!(f, "CNF conversion: {e:?}"),
            Self::Parse(e) => write!(f, "Parse: {e}"),
            Self::Resolution(e) => write!(f, "Resolution: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors when revising a belief base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BeliefBaseError {
    /// A priority outside of the configured bounds, e.g. zero.
    InvalidPriority,

    /// The base holds more formulas than contraction is configured to enumerate subsets of.
    ContractionLimit,
}

impl From<BeliefBaseError> for ErrorKind {
    fn from(e: BeliefBaseError) -> Self {
        ErrorKind::BeliefBase(e)
    }
}

/// Errors during conversion to conjunctive normal form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CnfError {
    /// Distributing a disjunction would produce more clauses than the configured limit.
    ClauseLimit,
}

impl From<CnfError> for ErrorKind {
    fn from(e: CnfError) -> Self {
        ErrorKind::Cnf(e)
    }
}

/// Errors during parsing.
///
/// Positions are counted in characters from the start of the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some formula was required.
    Empty,

    /// The input ended while a formula was still expected.
    UnexpectedEnd,

    /// A token which cannot appear at the noted position.
    UnexpectedToken(usize),

    /// A parenthesis without a partner.
    UnbalancedParenthesis(usize),

    /// A character which belongs to no token.
    InvalidCharacter(usize),

    /// Some problem with the formula on a given line of a belief file.
    Line(usize),

    /// The priority of the belief on a given line could not be read, or was out of bounds.
    Priority(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnexpectedEnd => write!(f, "unexpected end of formula"),
            Self::UnexpectedToken(at) => write!(f, "unexpected token at {at}"),
            Self::UnbalancedParenthesis(at) => write!(f, "unbalanced parenthesis at {at}"),
            Self::InvalidCharacter(at) => write!(f, "invalid character at {at}"),
            Self::Line(line) => write!(f, "malformed formula on line {line}"),
            Self::Priority(line) => write!(f, "invalid priority on line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// Saturation would hold more clauses than the configured limit.
    ClauseLimit,
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}
