//! Chi-squared scorer for non-negative features and class targets.

use ndarray::Array1;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::{check_aligned, group_rows_by_class, ScoreOutput};
use crate::error::SelectError;
use crate::table::{FeatureTable, Target};

/// Chi-squared statistic between each non-negative feature and the class
/// labels.
///
/// Feature values are treated as frequency-like counts: the observed value
/// of a feature summed per class is compared against the total expected from
/// the class frequencies alone. The statistic has `n_classes - 1` degrees of
/// freedom.
///
/// Features containing negative values are a scoring error; the test is
/// only meaningful for counts (booleans, frequencies, non-negative
/// measurements).
pub fn chi2(x: &FeatureTable, y: &Target) -> Result<ScoreOutput, SelectError> {
    check_aligned(x, y)?;

    for (j, column) in x.values().columns().into_iter().enumerate() {
        if let Some(v) = column.iter().find(|v| **v < 0.0) {
            return Err(SelectError::Scoring(format!(
                "chi2 requires non-negative feature values; feature '{}' contains {}",
                x.feature_names()[j],
                v
            )));
        }
    }

    let groups = group_rows_by_class(y);
    let n_classes = groups.len();
    if n_classes < 2 {
        return Err(SelectError::Scoring(format!(
            "chi2 requires at least 2 classes, found {}",
            n_classes
        )));
    }

    let n_samples = x.n_samples() as f64;
    let chi2_dist = ChiSquared::new((n_classes - 1) as f64)
        .map_err(|e| SelectError::Scoring(format!("chi2 degrees of freedom: {}", e)))?;

    let mut scores = Array1::zeros(x.n_features());
    let mut pvalues = Array1::ones(x.n_features());
    for (j, column) in x.values().columns().into_iter().enumerate() {
        let feature_total: f64 = column.sum();
        if feature_total <= 0.0 {
            // all-zero feature carries no counts to compare
            scores[j] = 0.0;
            pvalues[j] = 1.0;
            continue;
        }

        let mut statistic = 0.0;
        for rows in groups.values() {
            let observed: f64 = rows.iter().map(|&i| column[i]).sum();
            let expected = feature_total * rows.len() as f64 / n_samples;
            statistic += (observed - expected).powi(2) / expected;
        }

        scores[j] = statistic;
        pvalues[j] = 1.0 - chi2_dist.cdf(statistic);
    }

    Ok(ScoreOutput::WithPValues { scores, pvalues })
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
    fn chi2_rejects_negative_values() {
        let x = table(Array2::from_shape_vec((2, 1), vec![1.0, -0.5]).unwrap());
        let y = Target::from_vec(vec![0.0, 1.0]);
        let err = chi2(&x, &y).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("non-negative"), "message: {}", message);
        assert!(message.contains("f0"), "message: {}", message);
    }

    #[test]
    fn chi2_class_dependent_counts_score_higher() {
        // Column 0 concentrates its mass in class 1, column 1 is uniform
        let x = Array2::from_shape_vec(
            (6, 2),
            vec![
                0.0, 2.0, //
                0.0, 2.0, //
                0.0, 2.0, //
                4.0, 2.0, //
                4.0, 2.0, //
                4.0, 2.0,
            ],
        )
        .unwrap();
        let y = Target::from_vec(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        let out = chi2(&table(x), &y).unwrap();
        let scores = out.scores();
        assert!(scores[0] > scores[1], "scores = {:?}", scores);
        assert_eq!(scores[1], 0.0, "uniform counts carry no dependence");
    }

    #[test]
    fn chi2_all_zero_feature_scores_zero() {
        let x = table(Array2::from_shape_vec((4, 1), vec![0.0; 4]).unwrap());
        let y = Target::from_vec(vec![0.0, 0.0, 1.0, 1.0]);
        let out = chi2(&x, &y).unwrap();
        assert_eq!(out.scores()[0], 0.0);
    }
}
