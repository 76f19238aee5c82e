/*!
A parser for formulas written as text.

# Syntax

| Element | Accepted |
|---|---|
| atom | a letter or `_`, followed by any letters, digits, or `_` |
| true | `⊤`, `true`, `True` |
| false | `⊥`, `false`, `False` |
| negation | `¬`, `~`, `!` |
| conjunction | `∧`, `&`, `/\` |
| disjunction | `∨`, `\|`, `\/` |
| implication | `→`, `->`, `=>` |
| biconditional | `↔`, `<->`, `<=>` |

Whitespace between tokens is ignored, and parentheses group.

Connectives bind in the order ¬, ∧, ∨, →, ↔ (tightest first), and each binary connective is left associative.
So, *p → q → r* is read as *(p → q) → r*, and *¬p ∧ q ∨ r* is read as *((¬p) ∧ q) ∨ r*.

On failure a [ParseError](crate::types::err::ParseError) is returned, noting the position of the problem in characters from the start of the input.

```rust
# use belief_base::builder::parse::parse_formula;
# use belief_base::structures::formula::Formula;
let f = parse_formula("~p & q | r").unwrap();
let g = Formula::or(
    Formula::and(Formula::not(Formula::atom("p")), Formula::atom("q")),
    Formula::atom("r"),
);
assert_eq!(f, g);

assert!(parse_formula("p ∧").is_err());
assert!(parse_formula("(p ∨ q").is_err());
```
*/

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Tokens, paired with a position when read.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Atom(String),
    Top,
    Bottom,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

/// The tokens of `input`, each with the (character) position at which the token starts.
fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, err::ParseError> {
    let chars = input.chars().collect::<Vec<_>>();
    let mut tokens = Vec::default();
    let mut position = 0;

    // Whether the characters from the current position begin with `pattern`.
    let starts_with = |position: usize, pattern: &str| {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, c)| chars.get(position + offset) == Some(&c))
    };

    while position < chars.len() {
        let c = chars[position];
        let start = position;

        if c.is_whitespace() {
            position += 1;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            while position < chars.len()
                && (chars[position].is_ascii_alphanumeric() || chars[position] == '_')
            {
                position += 1;
            }
            let word = chars[start..position].iter().collect::<String>();
            let token = match word.as_str() {
                "true" | "True" => Token::Top,
                "false" | "False" => Token::Bottom,
                _ => Token::Atom(word),
            };
            tokens.push((token, start));
            continue;
        }

        let (token, length) = match c {
            '⊤' => (Token::Top, 1),
            '⊥' => (Token::Bottom, 1),
            '¬' | '~' | '!' => (Token::Not, 1),
            '∧' | '&' => (Token::And, 1),
            '∨' | '|' => (Token::Or, 1),
            '→' => (Token::Implies, 1),
            '↔' => (Token::Iff, 1),
            '(' => (Token::Open, 1),
            ')' => (Token::Close, 1),
            '/' if starts_with(position, "/\\") => (Token::And, 2),
            '\\' if starts_with(position, "\\/") => (Token::Or, 2),
            '-' if starts_with(position, "->") => (Token::Implies, 2),
            '=' if starts_with(position, "=>") => (Token::Implies, 2),
            '<' if starts_with(position, "<->") || starts_with(position, "<=>") => (Token::Iff, 3),
            _ => return Err(err::ParseError::InvalidCharacter(position)),
        };

        tokens.push((token, start));
        position += length;
    }

    Ok(tokens)
}

/// Operators waiting on an operand, or on the close of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Not,
    Binary(Binary),
    /// An open parenthesis, at the noted position.
    Open(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Binary {
    And,
    Or,
    Implies,
    Iff,
}

impl Binary {
    fn of(token: &Token) -> Option<Binary> {
        match token {
            Token::And => Some(Binary::And),
            Token::Or => Some(Binary::Or),
            Token::Implies => Some(Binary::Implies),
            Token::Iff => Some(Binary::Iff),
            _ => None,
        }
    }

    /// Binding strength, higher binds tighter.
    fn precedence(self) -> u8 {
        match self {
            Binary::And => 4,
            Binary::Or => 3,
            Binary::Implies => 2,
            Binary::Iff => 1,
        }
    }

    fn join(self, left: Formula, right: Formula) -> Formula {
        match self {
            Binary::And => Formula::and(left, right),
            Binary::Or => Formula::or(left, right),
            Binary::Implies => Formula::implies(left, right),
            Binary::Iff => Formula::iff(left, right),
        }
    }
}

/// An operator precedence parser, with an explicit stack of pending operators.
///
/// Nothing is parsed by recursion, and so the nesting of a formula is bounded only by memory.
#[derive(Default)]
struct Parser {
    operands: Vec<Formula>,
    pending: Vec<Pending>,
}

impl Parser {
    /// Applies the most recent pending operator to the most recent operands.
    fn reduce(&mut self) -> Result<(), err::ParseError> {
        let formula = match self.pending.pop() {
            Some(Pending::Not) => match self.operands.pop() {
                Some(operand) => Formula::not(operand),
                None => return Err(err::ParseError::UnexpectedEnd),
            },

            Some(Pending::Binary(binary)) => match (self.operands.pop(), self.operands.pop()) {
                (Some(right), Some(left)) => binary.join(left, right),
                _ => return Err(err::ParseError::UnexpectedEnd),
            },

            Some(Pending::Open(position)) => {
                return Err(err::ParseError::UnbalancedParenthesis(position))
            }

            None => return Err(err::ParseError::UnexpectedEnd),
        };

        self.operands.push(formula);
        Ok(())
    }

    /// Reduces each pending operator which binds at least as tightly as `binary`.
    ///
    /// As each binary connective is left associative, equal binding strength is enough.
    fn reduce_for(&mut self, binary: Binary) -> Result<(), err::ParseError> {
        while let Some(top) = self.pending.last().copied() {
            match top {
                Pending::Not => self.reduce()?,
                Pending::Binary(other) if other.precedence() >= binary.precedence() => {
                    self.reduce()?
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Reduces up to and including the most recent open parenthesis, if there is one.
    fn close(&mut self, position: usize) -> Result<(), err::ParseError> {
        loop {
            match self.pending.last().copied() {
                Some(Pending::Open(_)) => {
                    self.pending.pop();
                    return Ok(());
                }
                Some(_) => self.reduce()?,
                None => return Err(err::ParseError::UnbalancedParenthesis(position)),
            }
        }
    }

    fn parse(mut self, tokens: Vec<(Token, usize)>) -> Result<Formula, err::ParseError> {
        // Whether the next token should begin an operand, rather than follow one.
        let mut expect_operand = true;

        for (token, position) in tokens {
            match expect_operand {
                true => match token {
                    Token::Not => self.pending.push(Pending::Not),
                    Token::Open => self.pending.push(Pending::Open(position)),
                    Token::Atom(name) => {
                        self.operands.push(Formula::Atom(name));
                        expect_operand = false;
                    }
                    Token::Top => {
                        self.operands.push(Formula::Top);
                        expect_operand = false;
                    }
                    Token::Bottom => {
                        self.operands.push(Formula::Bottom);
                        expect_operand = false;
                    }
                    Token::Close => return Err(err::ParseError::UnbalancedParenthesis(position)),
                    _ => return Err(err::ParseError::UnexpectedToken(position)),
                },

                false => match Binary::of(&token) {
                    Some(binary) => {
                        self.reduce_for(binary)?;
                        self.pending.push(Pending::Binary(binary));
                        expect_operand = true;
                    }
                    None if token == Token::Close => self.close(position)?,
                    None => return Err(err::ParseError::UnexpectedToken(position)),
                },
            }
        }

        if expect_operand {
            return Err(err::ParseError::UnexpectedEnd);
        }

        while !self.pending.is_empty() {
            self.reduce()?;
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(formula), true) => Ok(formula),
            _ => Err(err::ParseError::UnexpectedEnd),
        }
    }
}

/// Parses `input` as a formula.
pub fn parse_formula(input: &str) -> Result<Formula, ErrorKind> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(err::ParseError::Empty.into());
    }

    let formula = Parser::default().parse(tokens)?;
    log::trace!(target: targets::PARSER, "Parsed {formula}");
    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn precedence() {
        assert_eq!(
            parse_formula("p ∨ q ∧ r"),
            Ok(Formula::or(atom("p"), Formula::and(atom("q"), atom("r"))))
        );
        assert_eq!(
            parse_formula("p → q ↔ r"),
            Ok(Formula::iff(Formula::implies(atom("p"), atom("q")), atom("r")))
        );
        assert_eq!(
            parse_formula("¬p ∧ q"),
            Ok(Formula::and(Formula::not(atom("p")), atom("q")))
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(
            parse_formula("p → q → r"),
            Ok(Formula::implies(Formula::implies(atom("p"), atom("q")), atom("r")))
        );
        assert_eq!(
            parse_formula("p ∧ q ∧ r"),
            Ok(Formula::and(Formula::and(atom("p"), atom("q")), atom("r")))
        );
    }

    #[test]
    fn ascii_spellings() {
        assert_eq!(parse_formula("p /\\ q"), parse_formula("p ∧ q"));
        assert_eq!(parse_formula("p \\/ q"), parse_formula("p | q"));
        assert_eq!(parse_formula("p => q"), parse_formula("p -> q"));
        assert_eq!(parse_formula("p <=> q"), parse_formula("p <-> q"));
        assert_eq!(parse_formula("!p"), parse_formula("~p"));
        assert_eq!(parse_formula("true ∧ False"), Ok(Formula::and(Formula::Top, Formula::Bottom)));
    }

    #[test]
    fn names() {
        assert_eq!(parse_formula("_x1"), Ok(atom("_x1")));
        assert_eq!(parse_formula("truth"), Ok(atom("truth")));
        assert_eq!(parse_formula("  Rain  "), Ok(atom("Rain")));
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            parse_formula("¬(p ∨ (q))"),
            Ok(Formula::not(Formula::or(atom("p"), atom("q"))))
        );
    }

    #[test]
    fn errors() {
        assert_eq!(parse_formula(""), Err(err::ParseError::Empty.into()));
        assert_eq!(parse_formula("   "), Err(err::ParseError::Empty.into()));
        assert_eq!(parse_formula("p ∧"), Err(err::ParseError::UnexpectedEnd.into()));
        assert_eq!(
            parse_formula("(p ∨ q"),
            Err(err::ParseError::UnbalancedParenthesis(0).into())
        );
        assert_eq!(
            parse_formula("p ∨ q)"),
            Err(err::ParseError::UnbalancedParenthesis(5).into())
        );
        assert_eq!(parse_formula("p q"), Err(err::ParseError::UnexpectedToken(2).into()));
        assert_eq!(parse_formula("p ∧ ∨ q"), Err(err::ParseError::UnexpectedToken(4).into()));
        assert_eq!(parse_formula("p # q"), Err(err::ParseError::InvalidCharacter(2).into()));
        assert_eq!(parse_formula("p - q"), Err(err::ParseError::InvalidCharacter(2).into()));
    }

    #[test]
    fn deep_nesting() {
        let count = 10_000;

        let conjunction = (0..count)
            .map(|index| format!("p{index}"))
            .collect::<Vec<_>>()
            .join(" ∧ ");
        let formula = parse_formula(&conjunction).unwrap();
        assert_eq!(formula.atoms().len(), count);
        assert_eq!(parse_formula(&formula.to_string()), Ok(formula));

        let negations = format!("{}p", "¬".repeat(count));
        let formula = parse_formula(&negations).unwrap();
        assert_eq!(formula.to_string(), negations);

        let grouped = format!("{}p{}", "(".repeat(count), ")".repeat(count));
        assert_eq!(parse_formula(&grouped), Ok(atom("p")));

        let unbalanced = format!("{}p{}", "(".repeat(count), ")".repeat(count - 1));
        assert_eq!(
            parse_formula(&unbalanced),
            Err(err::ParseError::UnbalancedParenthesis(0).into())
        );
    }

    #[test]
    fn display_parses_back() {
        for input in [
            "p → q → r",
            "¬(p ∧ ¬q) ↔ (r ∨ ⊥)",
            "a & (b | c) -> ~d",
            "⊤",
            "¬¬p",
        ] {
            let formula = parse_formula(input).unwrap();
            assert_eq!(parse_formula(&formula.to_string()), Ok(formula));
        }
    }
}
