//! Classical properties of binary relations.
//!
//! Every check enumerates the full domain (or its square, or cube) and stops at
//! the first counterexample. Over an empty domain all checks hold vacuously.
//!
//! The checks come in two flavours with identical semantics:
//! - free functions over a [`Predicate`] and a [`Domain`], which never build a
//!   matrix;
//! - methods on [`RelationMatrix`], used to inspect computed relations such as
//!   a transitive closure.
//!
//! **Note on anti-symmetry.** [`is_anti_symmetric`] requires that `R(a, b)` and
//! `R(b, a)` never hold together for *any* pair, including `a == b`. This is
//! stricter than the textbook definition (which allows `a == b`): a relation
//! with any reflexive element is never anti-symmetric here.

use std::fmt;

use crate::domain::Domain;
use crate::matrix::RelationMatrix;
use crate::predicate::Predicate;

/// `∀a: R(a, a)`
pub fn is_reflexive<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> bool {
    domain.iter().all(|a| predicate.holds(a, a))
}

/// `∀a: ¬R(a, a)`
pub fn is_anti_reflexive<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> bool {
    domain.iter().all(|a| !predicate.holds(a, a))
}

/// `∀a, b: R(a, b) = R(b, a)`
pub fn is_symmetric<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> bool {
    domain
        .iter()
        .all(|a| domain.iter().all(|b| predicate.holds(a, b) == predicate.holds(b, a)))
}

/// `∀a, b: ¬(R(a, b) ∧ R(b, a))`, diagonal included.
pub fn is_anti_symmetric<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> bool {
    domain
        .iter()
        .all(|a| domain.iter().all(|b| !(predicate.holds(a, b) && predicate.holds(b, a))))
}

/// `∀a, b, c: R(a, b) ∧ R(b, c) → R(a, c)`
pub fn is_transitive<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> bool {
    for a in domain.iter() {
        for b in domain.iter() {
            if !predicate.holds(a, b) {
                continue;
            }
            for c in domain.iter() {
                if predicate.holds(b, c) && !predicate.holds(a, c) {
                    log::trace!("is_transitive: counterexample ({}, {}, {})", a, b, c);
                    return false;
                }
            }
        }
    }
    true
}

/// Reflexive, symmetric and transitive.
pub fn is_equivalence<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> bool {
    is_reflexive(domain, predicate) && is_symmetric(domain, predicate) && is_transitive(domain, predicate)
}

impl RelationMatrix {
    pub fn is_reflexive(&self) -> bool {
        (0..self.dim()).all(|i| self[(i, i)])
    }

    pub fn is_anti_reflexive(&self) -> bool {
        (0..self.dim()).all(|i| !self[(i, i)])
    }

    /// Same answer as comparing the matrix with its [transpose][RelationMatrix::transpose].
    pub fn is_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| (0..n).all(|j| self[(i, j)] == self[(j, i)]))
    }

    /// The diagonal is included, see the module-level note.
    pub fn is_anti_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| (0..n).all(|j| !(self[(i, j)] && self[(j, i)])))
    }

    pub fn is_transitive(&self) -> bool {
        let n = self.dim();
        for i in 0..n {
            for j in 0..n {
                if !self[(i, j)] {
                    continue;
                }
                for k in 0..n {
                    if self[(j, k)] && !self[(i, k)] {
                        return false;
                    }
                }
            }
        }
        true
    }

    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }
}

/// Summary of all checked properties of a relation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Properties {
    pub reflexive: bool,
    pub anti_reflexive: bool,
    pub symmetric: bool,
    pub anti_symmetric: bool,
    pub transitive: bool,
    pub equivalence: bool,
}

impl Properties {
    /// Checks every property of `predicate` over `domain`.
    pub fn of_predicate<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> Self {
        let properties = Self {
            reflexive: is_reflexive(domain, predicate),
            anti_reflexive: is_anti_reflexive(domain, predicate),
            symmetric: is_symmetric(domain, predicate),
            anti_symmetric: is_anti_symmetric(domain, predicate),
            transitive: is_transitive(domain, predicate),
            equivalence: is_equivalence(domain, predicate),
        };
        log::debug!("of_predicate(domain = {}) -> {:?}", domain, properties);
        properties
    }

    /// Checks every property of an already built relation.
    pub fn of_matrix(matrix: &RelationMatrix) -> Self {
        Self {
            reflexive: matrix.is_reflexive(),
            anti_reflexive: matrix.is_anti_reflexive(),
            symmetric: matrix.is_symmetric(),
            anti_symmetric: matrix.is_anti_symmetric(),
            transitive: matrix.is_transitive(),
            equivalence: matrix.is_equivalence(),
        }
    }

    /// Labelled values, in report order.
    pub fn labelled(&self) -> [(&'static str, bool); 6] {
        [
            ("Reflexively", self.reflexive),
            ("Anti-reflexively", self.anti_reflexive),
            ("Symmetrically", self.symmetric),
            ("Anti-Symmetrically", self.anti_symmetric),
            ("Transitively", self.transitive),
            ("Equivalence", self.equivalence),
        ]
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.labelled() {
            writeln!(f, "{}: {}", label, if value { "True" } else { "False" })?;
        }
        Ok(())
    }
}
