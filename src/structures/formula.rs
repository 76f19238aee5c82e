/*!
Formulas of propositional logic, as syntax trees.

A formula is built from named atoms, the constants ⊤ (top) and ⊥ (bottom), and five connectives: negation, conjunction, disjunction, implication, and the biconditional.

Formulas are (structurally) immutable, and equality of formulas is equality of trees.
In particular, two formulas which are logically equivalent though written differently are distinct.

```rust
# use belief_base::structures::formula::Formula;
let p = Formula::atom("p");
let q = Formula::atom("q");

let f = Formula::implies(p.clone(), Formula::or(q.clone(), Formula::not(p.clone())));
assert_eq!(f.to_string(), "p → (q ∨ ¬p)");

let g: Formula = "p -> (q | ~p)".parse().unwrap();
assert_eq!(f, g);

assert_eq!(f.atoms().into_iter().collect::<Vec<_>>(), vec!["p", "q"]);
```

The display of a formula always parses back to the same formula.
For details on the accepted syntax, see [the parser](crate::builder::parse).

# Traversal

Formulas may be arbitrarily deep, e.g. the parse of a conjunction of ten thousand atoms is a tree ten thousand levels deep.
So, no method on formulas recurses on the call stack.
Instead, each traversal keeps an explicit stack, and most traversals are made through [Formula::fold] or [Formula::try_fold].
This includes the implementations of [Clone], [PartialEq], [Display](std::fmt::Display), and [Drop].
*/

use std::collections::BTreeSet;

/// A formula of propositional logic.
pub enum Formula {
    /// The constant true.
    Top,

    /// The constant false.
    Bottom,

    /// An atom, by (external) name.
    Atom(String),

    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

/// The values of the immediate subformulas of a formula, during a [fold](Formula::fold).
pub enum Operands<T> {
    /// The formula is an atom or a constant.
    None,

    /// The value of the subformula of a negation.
    One(T),

    /// The values of the left and right subformulas of a binary formula.
    Two(T, T),
}

/// A step of a (post-order) traversal.
enum Visit<'a> {
    Enter(&'a Formula),
    Exit(&'a Formula),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Formula {
        Formula::Atom(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(formula: Formula) -> Formula {
        Formula::Not(Box::new(formula))
    }

    pub fn and(left: Formula, right: Formula) -> Formula {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Formula {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Formula {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Formula {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The negation of the formula, as a fresh formula.
    pub fn negation(&self) -> Formula {
        Formula::not(self.clone())
    }

    /// Whether the formula has two immediate subformulas.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Formula::And(..) | Formula::Or(..) | Formula::Implies(..) | Formula::Iff(..)
        )
    }

    /// Folds the formula from the leaves up, stopping at the first error.
    ///
    /// `visit` is called once on each subformula, after it has been called on each immediate subformula, with the values returned on those subformulas.
    /// Subformulas are visited left to right.
    ///
    /// ```rust
    /// # use belief_base::structures::formula::{Formula, Operands};
    /// let f: Formula = "(p ∧ q) ∨ ¬r".parse().unwrap();
    ///
    /// let size = f.try_fold(|_, operands| match operands {
    ///     Operands::None => Ok::<usize, ()>(1),
    ///     Operands::One(s) => Ok(s + 1),
    ///     Operands::Two(l, r) => Ok(l + r + 1),
    /// });
    /// assert_eq!(size, Ok(6));
    /// ```
    pub fn try_fold<T, E>(
        &self,
        mut visit: impl FnMut(&Formula, Operands<T>) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut pending = vec![Visit::Enter(self)];
        let mut values: Vec<T> = Vec::default();

        while let Some(step) = pending.pop() {
            match step {
                Visit::Enter(formula) => match formula {
                    Formula::Top | Formula::Bottom | Formula::Atom(_) => {
                        values.push(visit(formula, Operands::None)?)
                    }

                    Formula::Not(sub) => {
                        pending.push(Visit::Exit(formula));
                        pending.push(Visit::Enter(sub));
                    }

                    Formula::And(l, r)
                    | Formula::Or(l, r)
                    | Formula::Implies(l, r)
                    | Formula::Iff(l, r) => {
                        pending.push(Visit::Exit(formula));
                        pending.push(Visit::Enter(r));
                        pending.push(Visit::Enter(l));
                    }
                },

                Visit::Exit(formula) => {
                    let operands = match (formula, values.pop()) {
                        (Formula::Not(_), Some(value)) => Operands::One(value),
                        (_, Some(right)) => match values.pop() {
                            Some(left) => Operands::Two(left, right),
                            None => panic!("! Missing left operand"),
                        },
                        (_, None) => panic!("! Missing operand"),
                    };
                    values.push(visit(formula, operands)?);
                }
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => panic!("! Empty fold"),
        }
    }

    /// As [try_fold](Formula::try_fold), for an infallible `visit`.
    pub fn fold<T>(&self, mut visit: impl FnMut(&Formula, Operands<T>) -> T) -> T {
        match self.try_fold(|formula, operands| {
            Ok::<T, std::convert::Infallible>(visit(formula, operands))
        }) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// A formula with the connective of `self` applied to `operands`.
    ///
    /// For an atom or a constant, a copy of the formula.
    pub fn rebuild(&self, operands: Operands<Formula>) -> Formula {
        match (self, operands) {
            (Formula::Top, _) => Formula::Top,
            (Formula::Bottom, _) => Formula::Bottom,
            (Formula::Atom(name), _) => Formula::Atom(name.clone()),
            (Formula::Not(_), Operands::One(sub)) => Formula::not(sub),
            (Formula::And(..), Operands::Two(l, r)) => Formula::and(l, r),
            (Formula::Or(..), Operands::Two(l, r)) => Formula::or(l, r),
            (Formula::Implies(..), Operands::Two(l, r)) => Formula::implies(l, r),
            (Formula::Iff(..), Operands::Two(l, r)) => Formula::iff(l, r),
            _ => panic!("! Operands do not match the connective"),
        }
    }

    /// The names of all atoms in the formula, in (lexicographic) order.
    pub fn atoms(&self) -> BTreeSet<&str> {
        let mut atoms = BTreeSet::default();
        let mut pending = vec![self];

        while let Some(formula) = pending.pop() {
            match formula {
                Formula::Top | Formula::Bottom => {}
                Formula::Atom(name) => {
                    atoms.insert(name.as_str());
                }
                Formula::Not(sub) => pending.push(sub),
                Formula::And(l, r)
                | Formula::Or(l, r)
                | Formula::Implies(l, r)
                | Formula::Iff(l, r) => {
                    pending.push(r);
                    pending.push(l);
                }
            }
        }

        atoms
    }

    /// The value of the formula when each atom takes the value given by `value_of`, if every atom has some value.
    ///
    /// A formula whose value is settled by the value of a left operand has a value, even if the right operand does not.
    ///
    /// ```rust
    /// # use belief_base::structures::formula::Formula;
    /// let f: Formula = "p ↔ ¬q".parse().unwrap();
    ///
    /// assert_eq!(f.value_on(|atom| Some(atom == "p")), Some(true));
    /// assert_eq!(f.value_on(|_| Some(true)), Some(false));
    /// assert_eq!(f.value_on(|atom| (atom == "p").then_some(true)), None);
    /// ```
    pub fn value_on(&self, value_of: impl Fn(&str) -> Option<bool>) -> Option<bool> {
        self.fold(|formula, operands| -> Option<bool> {
            match (formula, operands) {
                (Formula::Top, _) => Some(true),
                (Formula::Bottom, _) => Some(false),
                (Formula::Atom(name), _) => value_of(name),
                (_, Operands::One(value)) => value.map(|v| !v),
                (Formula::And(..), Operands::Two(l, r)) => match l? {
                    true => r,
                    false => Some(false),
                },
                (Formula::Or(..), Operands::Two(l, r)) => match l? {
                    true => Some(true),
                    false => r,
                },
                (Formula::Implies(..), Operands::Two(l, r)) => match l? {
                    true => r,
                    false => Some(true),
                },
                (_, Operands::Two(l, r)) => Some(l? == r?),
                (_, Operands::None) => None,
            }
        })
    }

    /// The connective symbol of a binary formula, padded with spaces.
    fn symbol(&self) -> &'static str {
        match self {
            Formula::And(..) => " ∧ ",
            Formula::Or(..) => " ∨ ",
            Formula::Implies(..) => " → ",
            Formula::Iff(..) => " ↔ ",
            _ => "",
        }
    }

    /// Moves any compound operands of the formula to `into`, leaving constants in their place.
    fn take_operands(&mut self, into: &mut Vec<Formula>) {
        let mut take = |operand: &mut Box<Formula>| {
            if operand.is_binary() || matches!(operand.as_ref(), Formula::Not(_)) {
                into.push(std::mem::replace(operand.as_mut(), Formula::Top));
            }
        };

        match self {
            Formula::Top | Formula::Bottom | Formula::Atom(_) => {}
            Formula::Not(sub) => take(sub),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                take(l);
                take(r);
            }
        }
    }
}

impl Drop for Formula {
    fn drop(&mut self) {
        let mut pending = Vec::default();
        self.take_operands(&mut pending);
        while let Some(mut formula) = pending.pop() {
            formula.take_operands(&mut pending);
        }
    }
}

impl Clone for Formula {
    fn clone(&self) -> Self {
        self.fold(|formula, operands| formula.rebuild(operands))
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Formula::Top, Formula::Top) | (Formula::Bottom, Formula::Bottom) => {}

                (Formula::Atom(a), Formula::Atom(b)) => {
                    if a != b {
                        return false;
                    }
                }

                (Formula::Not(a), Formula::Not(b)) => pending.push((a.as_ref(), b.as_ref())),

                (Formula::And(al, ar), Formula::And(bl, br))
                | (Formula::Or(al, ar), Formula::Or(bl, br))
                | (Formula::Implies(al, ar), Formula::Implies(bl, br))
                | (Formula::Iff(al, ar), Formula::Iff(bl, br)) => {
                    pending.push((ar.as_ref(), br.as_ref()));
                    pending.push((al.as_ref(), bl.as_ref()));
                }

                _ => return false,
            }
        }

        true
    }
}

impl Eq for Formula {}

/// Pieces of a formula still to be written.
enum Piece<'a> {
    Formula(&'a Formula),
    Text(&'static str),
}

/// Queues a subformula to be written, with parentheses around binary formulas.
fn push_operand<'a>(pending: &mut Vec<Piece<'a>>, operand: &'a Formula) {
    match operand.is_binary() {
        true => {
            pending.push(Piece::Text(")"));
            pending.push(Piece::Formula(operand));
            pending.push(Piece::Text("("));
        }
        false => pending.push(Piece::Formula(operand)),
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Formula(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,

                Piece::Formula(formula) => match formula {
                    Formula::Top => f.write_str("⊤")?,
                    Formula::Bottom => f.write_str("⊥")?,
                    Formula::Atom(name) => f.write_str(name)?,
                    Formula::Not(sub) => {
                        f.write_str("¬")?;
                        push_operand(&mut pending, sub);
                    }
                    Formula::And(l, r)
                    | Formula::Or(l, r)
                    | Formula::Implies(l, r)
                    | Formula::Iff(l, r) => {
                        push_operand(&mut pending, r);
                        pending.push(Piece::Text(formula.symbol()));
                        push_operand(&mut pending, l);
                    }
                },
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Formula")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl std::str::FromStr for Formula {
    type Err = crate::types::err::ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::builder::parse::parse_formula(s)
    }
}
