//! kbest-select: K-best univariate feature selection for tabular data.
//!
//! This crate scores every feature column of a table against a target
//! variable and keeps the `k` highest-scoring columns. Scoring functions
//! are pluggable collaborators with the contract `(X, y) -> scores[, p-values]`;
//! the built-ins cover ANOVA F-tests for classification and regression,
//! chi-squared, and mutual information.
//!
//! The design favors small, testable modules: `table` holds the data model,
//! `scoring` the built-in scorers, `selector` the fit/mask/transform
//! pipeline, and `config` the serializable configuration surface.
pub mod config;
pub mod error;
pub mod scoring;
pub mod selector;
pub mod table;
