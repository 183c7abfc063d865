//! Analysis configuration.

use std::fmt;

use crate::domain::Domain;
use crate::predicate::Builtin;

/// What to analyze: a built-in predicate over the domain
/// `[left_border, right_border]`.
///
/// An inverted configuration (`left_border > right_border`) is accepted and
/// describes the empty domain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Config {
    /// Lower border of the domain (inclusive).
    pub left_border: i64,
    /// Upper border of the domain (inclusive).
    pub right_border: i64,
    /// Relation predicate.
    pub predicate: Builtin,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_border: 1,
            right_border: 10,
            predicate: Builtin::default(),
        }
    }
}

impl Config {
    pub fn new(left_border: i64, right_border: i64) -> Self {
        Self {
            left_border,
            right_border,
            ..Self::default()
        }
    }

    pub fn with_predicate(self, predicate: Builtin) -> Self {
        Self { predicate, ..self }
    }

    pub fn domain(&self) -> Domain {
        Domain::new(self.left_border, self.right_border)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {}", self.predicate.formula(), self.domain())
    }
}
