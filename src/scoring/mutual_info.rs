//! Discrete mutual-information scorers.
//!
//! Mutual information is estimated from a joint histogram: continuous
//! columns are discretized into equal-width bins (the target as well, for
//! the regression variant), class labels are used as-is. Estimates are in
//! nats and clamped at zero; no p-values are produced, so these scorers
//! exercise the scores-only half of the collaborator contract.

use std::collections::HashMap;

use ndarray::{Array1, ArrayView1};

use super::{check_aligned, ScoreOutput};
use crate::error::SelectError;
use crate::table::{FeatureTable, Target};

/// Upper bound on histogram bins; below this the bin count follows the
/// square root of the sample count.
const MAX_BINS: usize = 32;

/// Discretize a column into equal-width bins.
///
/// A constant column collapses into a single bin, which makes its mutual
/// information exactly zero.
fn bin_column(column: ArrayView1<f64>) -> Vec<usize> {
    let n = column.len();
    if n == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in column.iter() {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    if !(max > min) {
        return vec![0; n];
    }

    let bins = ((n as f64).sqrt().ceil() as usize).clamp(2, MAX_BINS);
    let width = (max - min) / bins as f64;
    column
        .iter()
        .map(|&v| (((v - min) / width) as usize).min(bins - 1))
        .collect()
}

/// Mutual information between two discrete label sequences, in nats.
fn discrete_mutual_info(a: &[usize], b: &[u64]) -> f64 {
    let n = a.len() as f64;
    let mut joint: HashMap<(usize, u64), f64> = HashMap::new();
    let mut marginal_a: HashMap<usize, f64> = HashMap::new();
    let mut marginal_b: HashMap<u64, f64> = HashMap::new();
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        *joint.entry((ai, bi)).or_insert(0.0) += 1.0;
        *marginal_a.entry(ai).or_insert(0.0) += 1.0;
        *marginal_b.entry(bi).or_insert(0.0) += 1.0;
    }

    let mut mi = 0.0;
    for ((ai, bi), count) in &joint {
        let p_joint = count / n;
        let p_a = marginal_a[ai] / n;
        let p_b = marginal_b[bi] / n;
        mi += p_joint * (p_joint / (p_a * p_b)).ln();
    }
    // rounding can leave the sum a hair below zero
    mi.max(0.0)
}

/// Mutual information between each feature and a class-label target.
///
/// # Returns
///
/// `ScoreOutput::Scores` — one non-negative estimate per feature, no
/// p-values.
pub fn mutual_info_classif(x: &FeatureTable, y: &Target) -> Result<ScoreOutput, SelectError> {
    check_aligned(x, y)?;
    let labels: Vec<u64> = y.values().iter().map(|v| v.to_bits()).collect();

    let mut scores = Array1::zeros(x.n_features());
    for (j, column) in x.values().columns().into_iter().enumerate() {
        scores[j] = discrete_mutual_info(&bin_column(column), &labels);
    }
    Ok(ScoreOutput::Scores(scores))
}

/// Mutual information between each feature and a continuous target.
///
/// The target is discretized the same way the features are. Documented for
/// completeness; the selector never auto-selects this variant.
pub fn mutual_info_regression(x: &FeatureTable, y: &Target) -> Result<ScoreOutput, SelectError> {
    check_aligned(x, y)?;
    let labels: Vec<u64> = bin_column(y.values().view())
        .into_iter()
        .map(|bin| bin as u64)
        .collect();

    let mut scores = Array1::zeros(x.n_features());
    for (j, column) in x.values().columns().into_iter().enumerate() {
        scores[j] = discrete_mutual_info(&bin_column(column), &labels);
    }
    Ok(ScoreOutput::Scores(scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn table(values: Array2<f64>) -> FeatureTable {
        let names = (0..values.ncols()).map(|j| format!("f{}", j)).collect();
        FeatureTable::new(values, names).unwrap()
    }

    #[test]
    fn bin_column_constant_is_single_bin() {
        let column = Array1::from_vec(vec![3.0; 8]);
        let bins = bin_column(column.view());
        assert!(bins.iter().all(|&b| b == 0));
    }

    #[test]
    fn dependent_feature_scores_above_constant() {
        // Column 0 mirrors the class label, column 1 is constant
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                0.0, 7.0, //
                0.0, 7.0, //
                0.0, 7.0, //
                0.0, 7.0, //
                9.0, 7.0, //
                9.0, 7.0, //
                9.0, 7.0, //
                9.0, 7.0,
            ],
        )
        .unwrap();
        let y = Target::from_vec(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);

        let out = mutual_info_classif(&table(x), &y).unwrap();
        let ScoreOutput::Scores(scores) = out else {
            panic!("mutual information must not report p-values");
        };
        // a perfectly informative split of two balanced classes is ln(2)
        assert!((scores[0] - (2.0f64).ln()).abs() < 1e-9, "scores = {:?}", scores);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn regression_variant_tracks_monotone_relation() {
        let ramp: Vec<f64> = (0..32).map(|i| i as f64).collect();
        let noise: Vec<f64> = (0..32).map(|i| ((i * 13) % 7) as f64).collect();
        let x = table(
            Array2::from_shape_vec(
                (32, 2),
                ramp.iter()
                    .zip(noise.iter())
                    .flat_map(|(&a, &b)| [a, b])
                    .collect(),
            )
            .unwrap(),
        );
        let y = Target::from_vec(ramp);

        let out = mutual_info_regression(&x, &y).unwrap();
        let scores = out.scores();
        assert!(scores[0] > scores[1], "scores = {:?}", scores);
    }
}
