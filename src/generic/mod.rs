//! Generic structures, not specific to belief bases.

pub mod combinations;
