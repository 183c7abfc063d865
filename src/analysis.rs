//! The full pipeline: properties, relation matrix, transitive closure.
//!
//! ```text
//! Predicate ──► RelationMatrix ──► transitive_closure ──► Closure
//!     │
//!     └──► Properties
//! ```
//!
//! Property checks consult the predicate directly and do not depend on the
//! matrix pipeline.

use crate::closure::{transitive_closure, Closure};
use crate::config::Config;
use crate::domain::Domain;
use crate::matrix::RelationMatrix;
use crate::predicate::Predicate;
use crate::properties::Properties;

#[derive(Debug, Clone)]
pub struct Analysis {
    pub domain: Domain,
    pub properties: Properties,
    pub matrix: RelationMatrix,
    pub closure: Closure,
}

impl Analysis {
    /// Analyzes `predicate` over `domain`.
    pub fn run<P: Predicate + ?Sized>(domain: Domain, predicate: &P) -> Self {
        let properties = Properties::of_predicate(domain, predicate);
        let matrix = RelationMatrix::from_predicate(domain, predicate);
        let closure = transitive_closure(&matrix);
        Self {
            domain,
            properties,
            matrix,
            closure,
        }
    }
}

/// Analyzes the built-in predicate selected by `config`.
pub fn analyze(config: &Config) -> Analysis {
    log::debug!("analyze({})", config);
    Analysis::run(config.domain(), &config.predicate)
}
