use crate::{
    base::{BeliefBase, Priority},
    builder::{parse::parse_formula, ExpansionOk},
    dispatch::{
        library::report::{self, Report},
        Dispatch,
    },
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// Counts from reading a belief file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// A count of beliefs read.
    pub beliefs: usize,

    /// A count of beliefs added to the base.
    pub added: usize,

    /// A count of beliefs already in the base.
    pub duplicates: usize,
}

impl BeliefBase {
    /// Reads a belief file into the base.
    ///
    /// Each line of a belief file is either:
    /// - Blank.
    /// - A comment, beginning with `#`.
    /// - A belief: an optional (positive) priority followed by a formula.
    ///
    /// A belief without a priority is added with the configured default priority.
    ///
    /// ```rust,ignore
    /// base.read_beliefs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use belief_base::base::BeliefBase;
    /// # use std::io::Write;
    /// let mut base = BeliefBase::default();
    ///
    /// let mut beliefs = vec![];
    /// let _ = beliefs.write("
    /// ## Rain makes things wet.
    /// 3 rain → wet
    ///   rain
    /// 2 rain → wet
    /// ".as_bytes());
    ///
    /// let info = base.read_beliefs(beliefs.as_slice()).unwrap();
    /// assert_eq!((info.beliefs, info.added, info.duplicates), (3, 2, 1));
    /// assert_eq!(base.to_string(), "3 rain → wet\n1 rain\n");
    /// ```
    pub fn read_beliefs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(256);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (priority, formula_text) = match line.split_once(char::is_whitespace) {
                Some((first, rest)) if first.chars().all(|c| c.is_ascii_digit()) => {
                    match first.parse::<Priority>() {
                        Ok(priority) if self.config.default_priority.admits(&priority) => {
                            (priority, rest)
                        }
                        _ => return Err(err::ParseError::Priority(line_counter).into()),
                    }
                }
                _ => (self.config.default_priority.value, line),
            };

            let formula = match parse_formula(formula_text) {
                Ok(formula) => formula,
                Err(e) => {
                    log::error!(target: targets::PARSER, "Line {line_counter}: {e}");
                    return Err(err::ParseError::Line(line_counter).into());
                }
            };

            info.beliefs += 1;
            match self.expansion_with(formula, priority)? {
                ExpansionOk::Added => info.added += 1,
                ExpansionOk::Duplicate => info.duplicates += 1,
            }
        }

        log::info!(target: targets::PARSER, "Read {} beliefs from {line_counter} lines", info.beliefs);

        self.dispatch(|| Dispatch::Report(Report::Parser(report::Parser::Beliefs(info.beliefs))));
        self.dispatch(|| {
            Dispatch::Report(Report::Parser(report::Parser::Added(
                info.added,
                info.duplicates,
            )))
        });

        Ok(info)
    }
}
