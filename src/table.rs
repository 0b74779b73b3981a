//! Tabular containers for feature matrices and target vectors.
//!
//! `FeatureTable` pairs an `ndarray` matrix with per-column feature names;
//! `Target` wraps the row-aligned dependent variable. Both are plain data
//! holders: validation happens at construction, selection is column-wise.
use std::collections::HashSet;

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::SelectError;

/// Column-named numeric table, one column per feature and one row per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    values: Array2<f64>,
    feature_names: Vec<String>,
}

impl FeatureTable {
    /// Wrap an existing matrix, one name per column.
    pub fn new(values: Array2<f64>, feature_names: Vec<String>) -> Result<Self, SelectError> {
        if feature_names.len() != values.ncols() {
            return Err(SelectError::NameCount {
                names: feature_names.len(),
                columns: values.ncols(),
            });
        }
        Ok(Self {
            values,
            feature_names,
        })
    }

    /// Build a table from row-major nested data.
    ///
    /// Every row must have exactly one value per feature name; ragged input
    /// is rejected rather than silently truncated or padded.
    pub fn from_rows(rows: &[Vec<f64>], feature_names: Vec<String>) -> Result<Self, SelectError> {
        let expected = feature_names.len();
        let mut data = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SelectError::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            data.extend_from_slice(row);
        }
        let values = Array2::from_shape_vec((rows.len(), expected), data)
            .expect("row-major buffer matches the checked shape");
        Ok(Self {
            values,
            feature_names,
        })
    }

    /// Build a table from named columns of equal length.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self, SelectError> {
        let n_samples = columns.first().map_or(0, |(_, values)| values.len());
        for (name, values) in &columns {
            if values.len() != n_samples {
                return Err(SelectError::ColumnLength {
                    column: name.clone(),
                    len: values.len(),
                    expected: n_samples,
                });
            }
        }

        let n_features = columns.len();
        let mut values = Array2::zeros((n_samples, n_features));
        let mut feature_names = Vec::with_capacity(n_features);
        for (j, (name, column)) in columns.into_iter().enumerate() {
            for (i, v) in column.into_iter().enumerate() {
                values[(i, j)] = v;
            }
            feature_names.push(name);
        }
        Ok(Self {
            values,
            feature_names,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.values.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.values.nrows(), self.values.ncols())
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn column(&self, index: usize) -> ArrayView1<f64> {
        self.values.column(index)
    }

    /// New table keeping only the columns where `mask` is true.
    ///
    /// Column order, row count, and the corresponding names are preserved.
    /// `mask` must have one entry per column.
    pub fn select_columns(&self, mask: &[bool]) -> FeatureTable {
        assert_eq!(
            mask.len(),
            self.n_features(),
            "mask length must equal the number of columns"
        );
        let kept: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(j, &keep)| if keep { Some(j) } else { None })
            .collect();

        FeatureTable {
            values: self.values.select(Axis(1), &kept),
            feature_names: kept
                .iter()
                .map(|&j| self.feature_names[j].clone())
                .collect(),
        }
    }
}

/// Row-aligned target vector: class labels or real values, one per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    values: Array1<f64>,
}

impl Target {
    pub fn new(values: Array1<f64>) -> Self {
        Self { values }
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::new(Array1::from_vec(values))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Count distinct values by IEEE bit pattern.
    ///
    /// Bit-pattern identity keeps NaN countable as a single value and is the
    /// same device used to key float grouping elsewhere in the crate.
    pub fn n_distinct(&self) -> usize {
        let mut seen = HashSet::new();
        for v in self.values.iter() {
            seen.insert(v.to_bits());
        }
        seen.len()
    }
}

impl From<Vec<f64>> for Target {
    fn from(values: Vec<f64>) -> Self {
        Target::from_vec(values)
    }
}
