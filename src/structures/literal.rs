//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use belief_base::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.cmp(&CLiteral::new(79, !false)).is_eq());
//! assert_eq!(-literal, literal.negate());
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//!     So, in a sorted clause complementary literals are adjacent.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow clauses to be collected into sets.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The canonical representation of a literal, as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_atom_then_polarity() {
        let mut literals = vec![
            CLiteral::new(2, true),
            CLiteral::new(1, true),
            CLiteral::new(2, false),
            CLiteral::new(1, false),
        ];
        literals.sort();

        assert_eq!(
            literals,
            vec![
                CLiteral::new(1, false),
                CLiteral::new(1, true),
                CLiteral::new(2, false),
                CLiteral::new(2, true),
            ]
        );
    }
}
