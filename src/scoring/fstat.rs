//! F-statistic scorers for regression and classification targets.

use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use super::{check_aligned, group_rows_by_class, ScoreOutput};
use crate::error::SelectError;
use crate::table::{FeatureTable, Target};

/// Compute Pearson's r for each feature column and the target.
///
/// Both the columns and the target are centered before the correlation is
/// taken. Columns with zero variance (and empty inputs) yield 0 rather than
/// a non-finite value, so downstream ranking always sees comparable numbers.
///
/// # Parameters
///
/// * `x` - A 2D array of shape (n_samples, n_features).
/// * `y` - A 1D array of shape (n_samples,).
///
/// # Returns
///
/// An array of shape (n_features,) with the correlation coefficient of each
/// feature against the target.
pub fn r_regression(x: &Array2<f64>, y: &Array1<f64>) -> Array1<f64> {
    let n_samples = x.nrows() as f64;
    let y_mean = y.sum() / n_samples;
    let y_centered = y.mapv(|v| v - y_mean);
    let y_norm = y_centered.dot(&y_centered).sqrt();

    let mut coefficients = Array1::zeros(x.ncols());
    for (j, column) in x.columns().into_iter().enumerate() {
        let column_mean = column.sum() / n_samples;
        let centered = column.mapv(|v| v - column_mean);
        let column_norm = centered.dot(&centered).sqrt();
        let r = centered.dot(&y_centered) / (column_norm * y_norm);
        coefficients[j] = if r.is_finite() { r } else { 0.0 };
    }

    coefficients
}

/// Univariate linear-regression F-test.
///
/// Tests the effect of each regressor on the target, sequentially for many
/// regressors: the squared correlation is converted to an F-statistic and a
/// p-value under `FisherSnedecor(1, n_samples - 2)`.
///
/// A perfectly correlated column saturates to `f64::MAX` with p-value 0
/// instead of returning infinity.
///
/// # Returns
///
/// `ScoreOutput::WithPValues` with one F-statistic and one p-value per
/// feature column.
pub fn f_regression(x: &FeatureTable, y: &Target) -> Result<ScoreOutput, SelectError> {
    check_aligned(x, y)?;
    let deg_of_freedom = y.len() as f64 - 2.0;
    let f_dist = FisherSnedecor::new(1.0, deg_of_freedom).map_err(|e| {
        SelectError::Scoring(format!("f_regression requires at least 3 samples: {}", e))
    })?;

    let correlation = r_regression(x.values(), y.values());
    let mut scores = Array1::zeros(correlation.len());
    let mut pvalues = Array1::ones(correlation.len());
    for (j, &r) in correlation.iter().enumerate() {
        let r_squared = r * r;
        // r_squared can graze 1.0 from above through rounding
        if r_squared >= 1.0 {
            scores[j] = f64::MAX;
            pvalues[j] = 0.0;
            continue;
        }
        let f = r_squared / (1.0 - r_squared) * deg_of_freedom;
        scores[j] = f;
        pvalues[j] = 1.0 - f_dist.cdf(f);
    }

    Ok(ScoreOutput::WithPValues { scores, pvalues })
}

/// One-way ANOVA F-test for classification targets.
///
/// Rows are grouped by class label; each feature's variance between group
/// means is compared against the variance within groups. P-values come from
/// `FisherSnedecor(n_classes - 1, n_samples - n_classes)`.
///
/// Fails when fewer than two classes are present or when there are not
/// enough samples to leave within-group degrees of freedom.
pub fn f_classif(x: &FeatureTable, y: &Target) -> Result<ScoreOutput, SelectError> {
    check_aligned(x, y)?;
    let groups = group_rows_by_class(y);
    let n_samples = x.n_samples();
    let n_classes = groups.len();
    if n_classes < 2 {
        return Err(SelectError::Scoring(format!(
            "f_classif requires at least 2 classes, found {}",
            n_classes
        )));
    }
    if n_samples <= n_classes {
        return Err(SelectError::Scoring(format!(
            "f_classif requires more samples ({}) than classes ({})",
            n_samples, n_classes
        )));
    }

    let df_between = (n_classes - 1) as f64;
    let df_within = (n_samples - n_classes) as f64;
    let f_dist = FisherSnedecor::new(df_between, df_within)
        .map_err(|e| SelectError::Scoring(format!("f_classif degrees of freedom: {}", e)))?;

    let mut scores = Array1::zeros(x.n_features());
    let mut pvalues = Array1::ones(x.n_features());
    for (j, column) in x.values().columns().into_iter().enumerate() {
        let grand_mean = column.sum() / n_samples as f64;

        let mut ss_between = 0.0;
        let mut ss_within = 0.0;
        for rows in groups.values() {
            let group_mean = rows.iter().map(|&i| column[i]).sum::<f64>() / rows.len() as f64;
            ss_between += rows.len() as f64 * (group_mean - grand_mean).powi(2);
            ss_within += rows
                .iter()
                .map(|&i| (column[i] - group_mean).powi(2))
                .sum::<f64>();
        }

        if ss_within <= 0.0 {
            // constant within every group: no signal at all, or a perfect one
            if ss_between <= 0.0 {
                scores[j] = 0.0;
                pvalues[j] = 1.0;
            } else {
                scores[j] = f64::MAX;
                pvalues[j] = 0.0;
            }
            continue;
        }

        let f = (ss_between / df_between) / (ss_within / df_within);
        scores[j] = f;
        pvalues[j] = 1.0 - f_dist.cdf(f);
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
    fn r_regression_ranks_collinear_feature_highest() {
        // Features: [noise-ish ramp, collinear with target, constant]
        let x = Array2::from_shape_vec(
            (6, 3),
            vec![
                0.1, 1.0, 5.0, //
                0.5, -1.0, 5.0, //
                0.2, 1.0, 5.0, //
                0.9, -1.0, 5.0, //
                0.3, 1.0, 5.0, //
                0.8, -1.0, 5.0,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);

        let r = r_regression(&x, &y);
        assert!((r[1] - 1.0).abs() < 1e-9, "r[1] = {}", r[1]);
        assert_eq!(r[2], 0.0, "constant column must correlate to 0");
        assert!(r[1].abs() > r[0].abs());
    }

    #[test]
    fn f_regression_saturates_perfect_fit() {
        let x = Array2::from_shape_vec(
            (5, 2),
            vec![
                1.0, 0.3, //
                2.0, -0.2, //
                3.0, 0.9, //
                4.0, 0.1, //
                5.0, -0.5,
            ],
        )
        .unwrap();
        let y = Target::from_vec(vec![2.0, 4.0, 6.0, 8.0, 10.0]);

        let out = f_regression(&table(x), &y).unwrap();
        let ScoreOutput::WithPValues { scores, pvalues } = out else {
            panic!("f_regression must return p-values");
        };
        assert_eq!(scores[0], f64::MAX);
        assert_eq!(pvalues[0], 0.0);
        assert!(scores[1] < scores[0]);
        assert!(pvalues[1] > 0.0);
    }

    #[test]
    fn f_regression_too_few_samples_errors() {
        let x = table(Array2::from_shape_vec((2, 1), vec![1.0, 2.0]).unwrap());
        let y = Target::from_vec(vec![1.0, 2.0]);
        assert!(matches!(
            f_regression(&x, &y),
            Err(SelectError::Scoring(_))
        ));
    }

    #[test]
    fn f_classif_separable_feature_wins() {
        // Column 0 separates the classes cleanly, column 1 is identical noise
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                0.0, 0.4, //
                0.1, 0.5, //
                0.2, 0.4, //
                0.1, 0.5, //
                5.0, 0.4, //
                5.1, 0.5, //
                5.2, 0.4, //
                5.1, 0.5,
            ],
        )
        .unwrap();
        let y = Target::from_vec(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);

        let out = f_classif(&table(x), &y).unwrap();
        let scores = out.scores();
        assert!(scores[0] > scores[1], "scores = {:?}", scores);
    }

    #[test]
    fn f_classif_single_class_errors() {
        let x = table(Array2::from_shape_vec((4, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap());
        let y = Target::from_vec(vec![1.0, 1.0, 1.0, 1.0]);
        assert!(matches!(f_classif(&x, &y), Err(SelectError::Scoring(_))));
    }
}
