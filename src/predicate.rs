//! Relation membership predicates.
//!
//! A [`Predicate`] decides whether the ordered pair `(a, b)` belongs to a
//! relation. Any `Fn(i64, i64) -> bool` is a predicate; the [`Builtin`] enum
//! names the two predicates the command-line tool ships with.

use std::fmt;
use std::str::FromStr;

/// Membership test for ordered pairs of integers.
pub trait Predicate {
    /// Returns `true` if `a` is related to `b`.
    fn holds(&self, a: i64, b: i64) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(i64, i64) -> bool,
{
    fn holds(&self, a: i64, b: i64) -> bool {
        self(a, b)
    }
}

/// Built-in predicates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Builtin {
    /// `a² ≥ 3b`
    #[default]
    SquareAtLeastTriple,
    /// `3a ≤ 5b`
    ScaledAtMost,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::SquareAtLeastTriple, Builtin::ScaledAtMost];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::SquareAtLeastTriple => "square",
            Builtin::ScaledAtMost => "scaled",
        }
    }

    /// Human-readable formula.
    pub fn formula(self) -> &'static str {
        match self {
            Builtin::SquareAtLeastTriple => "a^2 >= 3b",
            Builtin::ScaledAtMost => "3a <= 5b",
        }
    }
}

impl Predicate for Builtin {
    fn holds(&self, a: i64, b: i64) -> bool {
        // Widened so that no `i64` input can overflow.
        let (a, b) = (i128::from(a), i128::from(b));
        match self {
            Builtin::SquareAtLeastTriple => a * a >= 3 * b,
            Builtin::ScaledAtMost => 3 * a <= 5 * b,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseBuiltinError(String);

impl fmt::Display for ParseBuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Builtin::ALL.iter().map(|p| p.name()).collect();
        write!(f, "unknown predicate '{}', expected one of: {}", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseBuiltinError {}

impl FromStr for Builtin {
    type Err = ParseBuiltinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBuiltinError(s.to_string()))
    }
}
