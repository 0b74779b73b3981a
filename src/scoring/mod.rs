//! Built-in scoring functions and the collaborator contract.
//!
//! A scoring function maps `(X, y)` to one score per feature column, either
//! alone or paired with p-values. The selector treats every scorer as a
//! black box behind [`ScoreFunc`]; the functions in this module are the
//! stock implementations a caller would otherwise have to supply.
pub mod chi2;
pub mod fstat;
pub mod mutual_info;

pub use chi2::chi2;
pub use fstat::{f_classif, f_regression, r_regression};
pub use mutual_info::{mutual_info_classif, mutual_info_regression};

use std::collections::BTreeMap;
use std::sync::Arc;

use ndarray::Array1;

use crate::error::SelectError;
use crate::table::{FeatureTable, Target};

/// Output of a scoring function: one entry per feature column, in column
/// order, with p-values when the underlying test provides them.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutput {
    Scores(Array1<f64>),
    WithPValues {
        scores: Array1<f64>,
        pvalues: Array1<f64>,
    },
}

impl ScoreOutput {
    pub fn scores(&self) -> &Array1<f64> {
        match self {
            ScoreOutput::Scores(scores) => scores,
            ScoreOutput::WithPValues { scores, .. } => scores,
        }
    }
}

/// A scoring collaborator: `(X, y)` to per-feature scores.
///
/// Function-valued on purpose: custom scorers plug in as closures without
/// implementing a trait.
pub type ScoreFunc =
    Arc<dyn Fn(&FeatureTable, &Target) -> Result<ScoreOutput, SelectError> + Send + Sync>;

/// Reject feature/target inputs that are not row-aligned.
pub(crate) fn check_aligned(x: &FeatureTable, y: &Target) -> Result<(), SelectError> {
    if y.len() != x.n_samples() {
        return Err(SelectError::TargetLength {
            rows: x.n_samples(),
            target: y.len(),
        });
    }
    Ok(())
}

/// Group row indices by target value, keyed on the IEEE bit pattern.
///
/// BTreeMap keeps group iteration deterministic so repeated fits accumulate
/// floating-point sums in the same order.
pub(crate) fn group_rows_by_class(y: &Target) -> BTreeMap<u64, Vec<usize>> {
    let mut groups: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
    for (i, v) in y.values().iter().enumerate() {
        groups.entry(v.to_bits()).or_default().push(i);
    }
    groups
}
