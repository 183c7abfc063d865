//! # relations: properties and transitive closure of binary relations
//!
//! **`relations`** analyzes a binary relation over a finite range of integers.
//! The relation is given by a predicate on ordered pairs; the library decides
//! which classical properties it has and computes its transitive closure by
//! iterated self-composition.
//!
//! ## Key Features
//!
//! - **Property checks**: reflexivity, anti-reflexivity, symmetry,
//!   anti-symmetry, transitivity and equivalence, by exhaustive enumeration.
//! - **Dense matrices**: relations are materialized as `n × n` boolean
//!   matrices with boolean matrix product as composition.
//! - **Observable closure**: every intermediate power `Rᵏ` is returned, not
//!   just the final closure, so the computation can be inspected step by step.
//! - **Total**: nothing here fails on well-typed input; an empty range yields
//!   vacuously true properties and empty matrices.
//!
//! ## Basic Usage
//!
//! ```rust
//! use relations::analysis::analyze;
//! use relations::config::Config;
//! use relations::predicate::Builtin;
//!
//! // 1. Choose the range and the predicate
//! let config = Config::new(1, 10).with_predicate(Builtin::ScaledAtMost);
//!
//! // 2. Run the analysis
//! let analysis = analyze(&config);
//!
//! // 3. Inspect the results
//! assert!(analysis.properties.reflexive);
//! assert!(!analysis.properties.symmetric);
//! assert_eq!(analysis.closure.steps().len(), 4);
//! assert!(analysis.closure.matrix().is_transitive());
//! ```
//!
//! ## Core Components
//!
//! - **[`matrix`]**: the [`RelationMatrix`][crate::matrix::RelationMatrix] type and composition.
//! - **[`closure`]**: transitive closure by iterated composition.
//! - **[`properties`]**: the property checks.
//! - **[`report`]**, **[`table`]**, **[`dot`]**: rendering.

pub mod analysis;
pub mod closure;
pub mod config;
pub mod domain;
pub mod dot;
pub mod matrix;
pub mod predicate;
pub mod properties;
pub mod report;
pub mod table;
