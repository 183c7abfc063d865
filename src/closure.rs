//! Transitive closure by iterated self-composition.
//!
//! Starting from a base relation `R`, the closure computer builds the powers
//! `R¹ = R`, `R² = R ∘ R`, `R³ = R² ∘ R`, … and records each one as a
//! [`CompositionStep`]. Iteration stops as soon as the next power equals a
//! recorded one:
//!
//! - usually the previous power, i.e. a fixed point `Rᵏ⁺¹ = Rᵏ`;
//! - otherwise an earlier power, i.e. the sequence of powers is periodic
//!   (this happens for cyclic relations such as a successor modulo `n`).
//!
//! In both cases every distinct power has been recorded, so the transitive
//! closure `R⁺ = R¹ ∪ R² ∪ …` is the union of all recorded steps.
//!
//! The computation has no side effects: the ordered list of steps is returned
//! as part of the [`Closure`], and rendering it is left to
//! [`report`][crate::report].
//!
//! # Examples
//!
//! ```
//! use relations::closure::{transitive_closure, Termination};
//! use relations::domain::Domain;
//! use relations::matrix::RelationMatrix;
//!
//! let domain = Domain::new(1, 4);
//! let succ = RelationMatrix::from_predicate(domain, &|a: i64, b: i64| b == a + 1);
//! let closure = transitive_closure(&succ);
//!
//! // R¹ … R⁴, where R⁴ is empty and R⁵ = R⁴ is the fixed point
//! assert_eq!(closure.steps().len(), 4);
//! assert_eq!(closure.termination(), Termination::FixedPoint);
//! assert!(closure.matrix().get(1, 4));
//! assert!(!closure.matrix().get(4, 1));
//! ```

use std::fmt;

use crate::matrix::RelationMatrix;

/// The `index`-th power of the base relation (1-based).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompositionStep {
    pub index: usize,
    pub matrix: RelationMatrix,
}

/// Why the closure loop stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Termination {
    /// The next power equals the last recorded one.
    FixedPoint,
    /// The next power equals the one recorded `period` steps earlier (`period > 1`).
    Cycle { period: usize },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::FixedPoint => write!(f, "fixed point"),
            Termination::Cycle { period } => write!(f, "cycle of period {}", period),
        }
    }
}

/// Result of [`transitive_closure`].
#[derive(Debug, Clone)]
pub struct Closure {
    steps: Vec<CompositionStep>,
    termination: Termination,
    matrix: RelationMatrix,
}

impl Closure {
    /// All recorded powers, in increasing step order. Never empty.
    pub fn steps(&self) -> &[CompositionStep] {
        &self.steps
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// The transitive closure: union of all recorded steps.
    pub fn matrix(&self) -> &RelationMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> RelationMatrix {
        self.matrix
    }

    /// The base relation (step 1).
    pub fn base(&self) -> &RelationMatrix {
        &self.steps[0].matrix
    }

    /// The last recorded power.
    pub fn last(&self) -> &RelationMatrix {
        &self.steps[self.steps.len() - 1].matrix
    }
}

/// Computes the transitive closure of `base`, recording every power.
pub fn transitive_closure(base: &RelationMatrix) -> Closure {
    let mut steps = vec![CompositionStep {
        index: 1,
        matrix: base.clone(),
    }];

    let termination = loop {
        let last = &steps[steps.len() - 1];
        let next = last.matrix.compose(base);

        // Most recent first: a fixed point is found after a single comparison.
        if let Some(pos) = steps.iter().rposition(|step| step.matrix == next) {
            let period = steps.len() - pos;
            break if period == 1 {
                Termination::FixedPoint
            } else {
                Termination::Cycle { period }
            };
        }

        let index = last.index + 1;
        log::debug!("transitive_closure: step {} has {} related pairs", index, next.count());
        steps.push(CompositionStep { index, matrix: next });
    };

    let mut matrix = RelationMatrix::new(base.domain());
    for step in steps.iter() {
        matrix.union_mut(&step.matrix);
    }

    log::debug!(
        "transitive_closure: stopped after {} steps ({}), closure has {} related pairs",
        steps.len(),
        termination,
        matrix.count()
    );

    Closure {
        steps,
        termination,
        matrix,
    }
}

impl RelationMatrix {
    /// Shorthand for [`transitive_closure`].
    pub fn transitive_closure(&self) -> Closure {
        transitive_closure(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::matrix::tests::from_rows;

    use test_log::test;

    #[test]
    fn test_chain() {
        let domain = Domain::new(0, 3);
        let succ = from_rows(domain, &["0100", "0010", "0001", "0000"]);
        let closure = transitive_closure(&succ);

        let indices: Vec<usize> = closure.steps().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(closure.last(), &RelationMatrix::new(domain));
        assert_eq!(closure.termination(), Termination::FixedPoint);
        assert_eq!(closure.matrix(), &from_rows(domain, &["0111", "0011", "0001", "0000"]));
    }

    #[test]
    fn test_already_transitive() {
        let domain = Domain::new(1, 4);
        let le = RelationMatrix::from_predicate(domain, &|a: i64, b: i64| a <= b);
        let closure = le.transitive_closure();
        assert_eq!(closure.steps().len(), 1);
        assert_eq!(closure.termination(), Termination::FixedPoint);
        assert_eq!(closure.matrix(), &le);
    }

    #[test]
    fn test_cycle() {
        // Successor modulo 3: powers repeat with period 3 and never reach a fixed point.
        let domain = Domain::new(0, 2);
        let rotate = from_rows(domain, &["010", "001", "100"]);
        let closure = transitive_closure(&rotate);

        assert_eq!(closure.steps().len(), 3);
        assert_eq!(closure.termination(), Termination::Cycle { period: 3 });
        assert_eq!(closure.steps()[2].matrix, RelationMatrix::identity(domain));
        assert_eq!(closure.matrix(), &from_rows(domain, &["111", "111", "111"]));
    }

    #[test]
    fn test_eventually_periodic() {
        // 0 -> 1 -> 2 -> 1: powers 1..=2 differ, then alternate with period 2.
        let domain = Domain::new(0, 2);
        let r = from_rows(domain, &["010", "001", "010"]);
        let closure = transitive_closure(&r);

        assert_eq!(closure.termination(), Termination::Cycle { period: 2 });
        assert_eq!(closure.matrix(), &from_rows(domain, &["011", "011", "011"]));
        assert!(closure.matrix().is_transitive());
    }

    #[test]
    fn test_empty_domain() {
        let domain = Domain::new(1, 0);
        let closure = transitive_closure(&RelationMatrix::new(domain));
        assert_eq!(closure.steps().len(), 1);
        assert_eq!(closure.termination(), Termination::FixedPoint);
        assert!(closure.matrix().is_empty());
    }

    #[test]
    fn test_single_element() {
        let domain = Domain::new(5, 5);
        for related in [false, true] {
            let m = RelationMatrix::from_vec(domain, vec![related]);
            let closure = transitive_closure(&m);
            assert_eq!(closure.steps().len(), 1);
            assert_eq!(closure.matrix(), &m);
        }
    }

    #[test]
    fn test_steps_are_not_mutated() {
        let domain = Domain::new(0, 3);
        let succ = from_rows(domain, &["0100", "0010", "0001", "0000"]);
        let closure = transitive_closure(&succ);
        assert_eq!(closure.base(), &succ);
        for (k, step) in closure.steps().iter().enumerate().skip(1) {
            assert_eq!(step.matrix, closure.steps()[k - 1].matrix.compose(&succ));
        }
    }
}
