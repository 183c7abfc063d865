//! Dense boolean relation matrices.
//!
//! A [`RelationMatrix`] stores a relation over a [`Domain`] as a square,
//! row-major `n × n` grid of booleans, where `n = domain.len()`. Entry
//! `(i, j)` is `true` iff the `i`-th domain value is related to the `j`-th.
//!
//! Matrices are plain values: every operation here allocates a fresh matrix
//! and never mutates its inputs, so previously computed matrices can be kept
//! around and compared safely.
//!
//! # Examples
//!
//! ```
//! use relations::domain::Domain;
//! use relations::matrix::RelationMatrix;
//!
//! let domain = Domain::new(1, 4);
//! let succ = RelationMatrix::from_predicate(domain, &|a: i64, b: i64| b == a + 1);
//! let two_steps = succ.compose(&succ);
//!
//! assert!(two_steps.get(1, 3));
//! assert!(!two_steps.get(1, 2));
//! ```

use std::ops::{Index, IndexMut};

use crate::domain::Domain;
use crate::predicate::Predicate;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RelationMatrix {
    domain: Domain,
    elements: Vec<bool>,
}

impl RelationMatrix {
    /// Creates the empty relation (all zeros) over `domain`.
    pub fn new(domain: Domain) -> Self {
        let dim = domain.len();
        Self {
            domain,
            elements: vec![false; dim * dim],
        }
    }

    /// Creates the identity relation over `domain`.
    pub fn identity(domain: Domain) -> Self {
        let mut matrix = Self::new(domain);
        for i in 0..matrix.dim() {
            matrix[(i, i)] = true;
        }
        matrix
    }

    /// Creates a matrix from row-major `elements`.
    ///
    /// # Panics
    ///
    /// Panics if `elements.len() != domain.len()^2`.
    pub fn from_vec(domain: Domain, elements: Vec<bool>) -> Self {
        let dim = domain.len();
        assert_eq!(
            elements.len(),
            dim * dim,
            "Expected {} elements for domain {}",
            dim * dim,
            domain
        );
        Self { domain, elements }
    }

    /// Materializes `predicate` over `domain`: entry `(a, b)` is set iff
    /// `predicate.holds(a, b)`.
    pub fn from_predicate<P>(domain: Domain, predicate: &P) -> Self
    where
        P: Predicate + ?Sized,
    {
        let mut elements = Vec::with_capacity(domain.len() * domain.len());
        for a in domain.iter() {
            for b in domain.iter() {
                elements.push(predicate.holds(a, b));
            }
        }
        let matrix = Self { domain, elements };
        log::debug!(
            "from_predicate(domain = {}) -> {} related pairs",
            domain,
            matrix.count()
        );
        matrix
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if `a` is related to `b`.
    ///
    /// Values outside the domain are never related.
    pub fn get(&self, a: i64, b: i64) -> bool {
        match (self.domain.position(a), self.domain.position(b)) {
            (Some(i), Some(j)) => self[(i, j)],
            _ => false,
        }
    }

    /// Row `i` as a slice of booleans.
    pub fn row(&self, i: usize) -> &[bool] {
        let dim = self.dim();
        &self.elements[i * dim..(i + 1) * dim]
    }

    /// Number of related pairs.
    pub fn count(&self) -> usize {
        self.elements.iter().filter(|&&x| x).count()
    }

    /// Iterates over related pairs `(a, b)` in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let dim = self.dim();
        self.elements
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x)
            .map(move |(k, _)| (self.domain.value(k / dim), self.domain.value(k % dim)))
    }

    /// Boolean matrix product: `(self ∘ other)(a, b)` holds iff there is some
    /// `c` with `self(a, c)` and `other(c, b)`.
    ///
    /// # Panics
    ///
    /// Panics if the matrices are defined over different domains.
    pub fn compose(&self, other: &Self) -> Self {
        assert_eq!(self.domain, other.domain, "Cannot compose relations over different domains");
        let dim = self.dim();
        let mut result = Self::new(self.domain);
        for a in 0..dim {
            for b in 0..dim {
                // First witness wins.
                result[(a, b)] = (0..dim).any(|c| self[(a, c)] && other[(c, b)]);
            }
        }
        result
    }

    /// Elementwise OR.
    ///
    /// # Panics
    ///
    /// Panics if the matrices are defined over different domains.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_mut(other);
        result
    }

    /// In-place elementwise OR.
    pub fn union_mut(&mut self, other: &Self) {
        assert_eq!(self.domain, other.domain, "Cannot unite relations over different domains");
        for (x, &y) in self.elements.iter_mut().zip(other.elements.iter()) {
            *x |= y;
        }
    }

    /// The converse relation.
    pub fn transpose(&self) -> Self {
        let dim = self.dim();
        let mut result = Self::new(self.domain);
        for i in 0..dim {
            for j in 0..dim {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Returns `true` if every pair related in `self` is related in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.elements.iter().zip(other.elements.iter()).all(|(&x, &y)| !x || y)
    }
}

impl Index<(usize, usize)> for RelationMatrix {
    type Output = bool;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        let dim = self.dim();
        assert!(i < dim && j < dim, "Position ({}, {}) out of bounds for dim {}", i, j, dim);
        &self.elements[i * dim + j]
    }
}

impl IndexMut<(usize, usize)> for RelationMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let dim = self.dim();
        assert!(i < dim && j < dim, "Position ({}, {}) out of bounds for dim {}", i, j, dim);
        &mut self.elements[i * dim + j]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use quickcheck::{Arbitrary, Gen};

    use super::*;

    use test_log::test;

    impl Arbitrary for RelationMatrix {
        fn arbitrary(g: &mut Gen) -> Self {
            // Keep domains small: closure is cubic per step.
            let left = i64::from(<i8 as Arbitrary>::arbitrary(g));
            let len = <usize as Arbitrary>::arbitrary(g) % 7;
            let domain = Domain::new(left, left + len as i64 - 1);
            let elements = (0..len * len).map(|_| bool::arbitrary(g)).collect();
            RelationMatrix::from_vec(domain, elements)
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let m = self.clone();
            Box::new((0..m.dim()).rev().map(move |n| {
                let domain = Domain::new(m.domain.left(), m.domain.left() + n as i64 - 1);
                let mut smaller = RelationMatrix::new(domain);
                for i in 0..n {
                    for j in 0..n {
                        smaller[(i, j)] = m[(i, j)];
                    }
                }
                smaller
            }))
        }
    }

    /// Builds a matrix from rows of `0`/`1` characters.
    pub(crate) fn from_rows(domain: Domain, rows: &[&str]) -> RelationMatrix {
        assert_eq!(rows.len(), domain.len());
        let elements = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), domain.len());
                row.chars().map(|c| c == '1')
            })
            .collect();
        RelationMatrix::from_vec(domain, elements)
    }

    #[test]
    fn test_from_predicate() {
        let domain = Domain::new(1, 3);
        let m = RelationMatrix::from_predicate(domain, &|a: i64, b: i64| a <= b);
        assert_eq!(m, from_rows(domain, &["111", "011", "001"]));
        assert_eq!(m.count(), 6);
        assert!(m.get(1, 3));
        assert!(!m.get(3, 1));
        assert!(!m.get(0, 1));
    }

    #[test]
    fn test_empty_domain() {
        let domain = Domain::new(1, 0);
        let m = RelationMatrix::from_predicate(domain, &|_: i64, _: i64| true);
        assert!(m.is_empty());
        assert_eq!(m.dim(), 0);
        assert_eq!(m.count(), 0);
        assert_eq!(m.compose(&m), m);
        assert_eq!(m.pairs().count(), 0);
    }

    #[test]
    fn test_compose() {
        let domain = Domain::new(0, 3);
        let succ = from_rows(domain, &["0100", "0010", "0001", "0000"]);
        let succ2 = succ.compose(&succ);
        assert_eq!(succ2, from_rows(domain, &["0010", "0001", "0000", "0000"]));
        let succ3 = succ2.compose(&succ);
        assert_eq!(succ3, from_rows(domain, &["0001", "0000", "0000", "0000"]));
        assert_eq!(succ3.compose(&succ), RelationMatrix::new(domain));
    }

    #[test]
    fn test_compose_is_not_commutative() {
        let domain = Domain::new(0, 2);
        let r = from_rows(domain, &["010", "000", "000"]);
        let s = from_rows(domain, &["000", "001", "000"]);
        assert!(r.compose(&s).get(0, 2));
        assert_eq!(s.compose(&r).count(), 0);
    }

    #[test]
    fn test_compose_does_not_mutate_inputs() {
        let domain = Domain::new(0, 2);
        let r = from_rows(domain, &["010", "001", "100"]);
        let copy = r.clone();
        let _ = r.compose(&r);
        assert_eq!(r, copy);
    }

    #[test]
    fn test_identity_is_neutral() {
        let domain = Domain::new(-1, 2);
        let r = from_rows(domain, &["0110", "0001", "1000", "0010"]);
        let id = RelationMatrix::identity(domain);
        assert_eq!(r.compose(&id), r);
        assert_eq!(id.compose(&r), r);
    }

    #[test]
    fn test_union_and_subset() {
        let domain = Domain::new(0, 1);
        let r = from_rows(domain, &["10", "00"]);
        let s = from_rows(domain, &["01", "00"]);
        let u = r.union(&s);
        assert_eq!(u, from_rows(domain, &["11", "00"]));
        assert!(r.is_subset(&u));
        assert!(s.is_subset(&u));
        assert!(!u.is_subset(&r));
    }

    #[test]
    fn test_transpose() {
        let domain = Domain::new(0, 2);
        let r = from_rows(domain, &["011", "001", "000"]);
        assert_eq!(r.transpose(), from_rows(domain, &["000", "100", "110"]));
    }

    #[test]
    fn test_pairs() {
        let domain = Domain::new(5, 6);
        let r = from_rows(domain, &["01", "11"]);
        let pairs: Vec<_> = r.pairs().collect();
        assert_eq!(pairs, vec![(5, 6), (6, 5), (6, 6)]);
    }

    #[test]
    #[should_panic]
    fn test_compose_domain_mismatch() {
        let r = RelationMatrix::new(Domain::new(0, 1));
        let s = RelationMatrix::new(Domain::new(1, 2));
        let _ = r.compose(&s);
    }
}
