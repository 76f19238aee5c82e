//! A library for maintaining prioritised bases of propositional beliefs.
//!
//! belief_base is a library for holding a finite collection of propositional formulas, each with a priority, for deciding whether the collection entails some formula, and for revising the collection in the manner of AGM belief revision.
//!
//! Entailment is decided by refutation: the formulas are converted to clauses, and the clauses are saturated by resolution.
//! Contraction is partial meet contraction over an enumeration of the subsets of a base, with priorities used to select between equally large remainders.
//!
//! Each procedure is complete, though naive, and so the library is suited to small bases and to investigating the behaviour of belief revision, rather than to large problems.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [belief base](crate::base).
//!
//! Bases are built with a configuration and optional method for recording [dispatches](crate::dispatch) from procedures.
//! Formulas may be added through a [belief file](crate::base::BeliefBase::read_beliefs) or [programatically](crate::base::BeliefBase::expansion_with).
//!
//! Useful starting points, then, may be:
//! - The [formula](crate::structures::formula) structure, and the [parser](crate::builder::parse) for formulas.
//! - The [procedures] to inspect how entailment is decided, and how a base is contracted.
//! - The [configuration](crate::config) to see which bounds may be adjusted.
//!
//! # Examples
//!
//! + Check an argument.
//!
//! ```rust
//! # use belief_base::base::BeliefBase;
//! # use belief_base::structures::formula::Formula;
//! let mut base = BeliefBase::default();
//!
//! for premise in ["rain ∨ sprinkler", "rain → wet", "sprinkler → wet"] {
//!     assert!(base.expansion(&premise.parse::<Formula>().unwrap()).is_ok());
//! }
//!
//! assert_eq!(base.entails(&"wet".parse::<Formula>().unwrap()), Ok(true));
//! assert_eq!(base.entails(&"rain".parse::<Formula>().unwrap()), Ok(false));
//! ```
//!
//! + Read a belief file, and then give up a belief.
//!
//! ```rust
//! # use belief_base::base::BeliefBase;
//! # use belief_base::procedures::contraction::ContractionOk;
//! # use belief_base::structures::formula::Formula;
//! # use std::io::Write;
//! let mut base = BeliefBase::default();
//!
//! let mut beliefs = vec![];
//! let _ = beliefs.write("
//! 2 P → Q
//! 1 P
//! ".as_bytes());
//!
//! assert!(base.read_beliefs(beliefs.as_slice()).is_ok());
//!
//! let q: Formula = "Q".parse().unwrap();
//! assert!(matches!(base.contraction(&q), Ok(ContractionOk::Contracted { .. })));
//! assert_eq!(base.to_string(), "2 P → Q\n");
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [contraction](crate::procedures::contraction) can be filtered with `RUST_LOG=contraction …` or,
//! - Logs of the candidate sizes of a contraction without information about each candidate can be found with `RUST_LOG=contraction=debug …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

pub mod base;
pub mod builder;
pub mod procedures;

pub mod config;
pub mod structures;
pub mod types;

pub mod generic;

pub mod dispatch;

pub mod db;

pub mod misc;
