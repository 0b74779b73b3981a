//! K-best selection: fit a scoring function, rank features, keep the top k.

use std::cmp::Ordering;
use std::sync::Arc;

use ndarray::Array1;

use crate::error::SelectError;
use crate::scoring::{f_classif, f_regression, ScoreFunc, ScoreOutput};
use crate::table::{FeatureTable, Target};

/// Targets with at most this many distinct values are treated as
/// classification problems when no scoring function is configured.
const CLASSIFICATION_CARDINALITY: usize = 15;

/// Selects the `k` features most associated with the target.
///
/// A scoring function is fitted over `(X, y)` to produce one score per
/// feature column; `transform` then keeps the `k` highest-scoring columns.
/// When no scoring function is configured, `fit` picks an ANOVA F-test
/// variant from the target's cardinality and keeps that choice for later
/// fits until [`clear_score_func`](KBestSelector::clear_score_func) is
/// called.
pub struct KBestSelector {
    score_func: Option<ScoreFunc>,
    k: usize,
    scores: Option<Array1<f64>>,
    pvalues: Option<Array1<f64>>,
}

impl KBestSelector {
    /// Create a selector keeping the top `k` features.
    ///
    /// `score_func` of `None` defers the choice of scorer to `fit`.
    pub fn new(score_func: Option<ScoreFunc>, k: usize) -> Self {
        Self {
            score_func,
            k,
            scores: None,
            pvalues: None,
        }
    }

    /// Selector with auto-selected scoring function.
    pub fn with_k(k: usize) -> Self {
        Self::new(None, k)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Scores from the last `fit`, one per feature column.
    pub fn scores(&self) -> Option<&Array1<f64>> {
        self.scores.as_ref()
    }

    /// P-values from the last `fit`, when the scorer produced them.
    pub fn pvalues(&self) -> Option<&Array1<f64>> {
        self.pvalues.as_ref()
    }

    /// Drop the configured scoring function so the next `fit` re-derives it
    /// from the target.
    pub fn clear_score_func(&mut self) {
        self.score_func = None;
    }

    /// Fit the scoring function over `(X, y)` and record scores/p-values.
    ///
    /// Returns the selector itself so calls can be chained:
    /// `selector.fit(&x, &y)?.transform(&x)?`.
    pub fn fit(&mut self, x: &FeatureTable, y: &Target) -> Result<&mut Self, SelectError> {
        if y.len() != x.n_samples() {
            return Err(SelectError::TargetLength {
                rows: x.n_samples(),
                target: y.len(),
            });
        }

        if self.score_func.is_none() {
            let distinct = y.n_distinct();
            let resolved: ScoreFunc = if distinct <= CLASSIFICATION_CARDINALITY {
                log::debug!(
                    "auto-selected f_classif: target has {} distinct values",
                    distinct
                );
                Arc::new(f_classif)
            } else {
                log::debug!(
                    "auto-selected f_regression: target has {} distinct values",
                    distinct
                );
                Arc::new(f_regression)
            };
            self.score_func = Some(resolved);
        }

        let score_func = Arc::clone(
            self.score_func
                .as_ref()
                .expect("score function resolved above"),
        );
        let (scores, pvalues) = match score_func(x, y)? {
            ScoreOutput::Scores(scores) => (scores, None),
            ScoreOutput::WithPValues { scores, pvalues } => (scores, Some(pvalues)),
        };

        if scores.len() != x.n_features() {
            return Err(SelectError::ScoreLength {
                expected: x.n_features(),
                actual: scores.len(),
            });
        }
        if let Some(pvalues) = &pvalues {
            if pvalues.len() != x.n_features() {
                return Err(SelectError::ScoreLength {
                    expected: x.n_features(),
                    actual: pvalues.len(),
                });
            }
        }

        self.scores = Some(scores);
        self.pvalues = pvalues;
        Ok(self)
    }

    /// Mask over the fitted features: true for the `k` highest scores.
    ///
    /// Indices are ranked by score ascending with a stable sort and the last
    /// `k` are kept, so among tied scores the later column wins at the
    /// cutoff. `k` larger than the feature count keeps everything.
    fn support_mask(&self) -> Result<Vec<bool>, SelectError> {
        let scores = self.scores.as_ref().ok_or(SelectError::NotFitted)?;
        let mut mask = vec![false; scores.len()];
        if self.k == 0 {
            return Ok(mask);
        }

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&i, &j| scores[i].partial_cmp(&scores[j]).unwrap_or(Ordering::Equal));
        for &index in order.iter().rev().take(self.k) {
            mask[index] = true;
        }
        Ok(mask)
    }

    /// Reduce `x` to the selected feature columns.
    ///
    /// The mask is recomputed on every call; nothing is cached. Column
    /// order, names, and all rows are preserved.
    pub fn transform(&self, x: &FeatureTable) -> Result<FeatureTable, SelectError> {
        let mask = self.support_mask()?;
        if !mask.iter().any(|&keep| keep) {
            return Err(SelectError::EmptySelection);
        }
        if mask.len() != x.n_features() {
            return Err(SelectError::ShapeMismatch {
                fitted: mask.len(),
                actual: x.n_features(),
            });
        }
        Ok(x.select_columns(&mask))
    }

    /// `fit` then `transform` on the same table.
    pub fn fit_transform(
        &mut self,
        x: &FeatureTable,
        y: &Target,
    ) -> Result<FeatureTable, SelectError> {
        self.fit(x, y)?.transform(x)
    }
}

impl Default for KBestSelector {
    fn default() -> Self {
        Self::new(None, 10)
    }
}
