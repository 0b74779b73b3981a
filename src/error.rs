use std::error::Error;
use std::fmt;

/// Errors raised by table construction, fitting, and transforming.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    /// A nested-rows input had rows of unequal length.
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A named column had a different length than the others.
    ColumnLength {
        column: String,
        len: usize,
        expected: usize,
    },
    /// Feature-name count disagrees with the number of columns.
    NameCount { names: usize, columns: usize },
    /// Target vector length disagrees with the table's row count.
    TargetLength { rows: usize, target: usize },
    /// A scoring function returned output of the wrong length.
    ScoreLength { expected: usize, actual: usize },
    /// A scoring function rejected its input.
    Scoring(String),
    /// `transform` was called before a successful `fit`.
    NotFitted,
    /// The selection mask kept no features.
    EmptySelection,
    /// `transform` input has a different column count than the fitted table.
    ShapeMismatch { fitted: usize, actual: usize },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectError::RaggedRows { row, len, expected } => write!(
                f,
                "row {} has {} values but {} were expected. Expected type: FeatureTable (rectangular rows)",
                row, len, expected
            ),
            SelectError::ColumnLength {
                column,
                len,
                expected,
            } => write!(
                f,
                "column '{}' has {} values but {} were expected. Expected type: FeatureTable (equal-length columns)",
                column, len, expected
            ),
            SelectError::NameCount { names, columns } => write!(
                f,
                "{} feature names for {} columns. Expected type: FeatureTable (one name per column)",
                names, columns
            ),
            SelectError::TargetLength { rows, target } => write!(
                f,
                "target has {} values but the feature table has {} rows. Expected type: Target aligned by row index",
                target, rows
            ),
            SelectError::ScoreLength { expected, actual } => write!(
                f,
                "score function returned {} values for {} features",
                actual, expected
            ),
            SelectError::Scoring(msg) => write!(f, "{}", msg),
            SelectError::NotFitted => write!(
                f,
                "scores are not available. Please fit the selector before calling transform"
            ),
            SelectError::EmptySelection => write!(
                f,
                "no features were selected: either the data is too noisy or the selection test too strict"
            ),
            SelectError::ShapeMismatch { fitted, actual } => write!(
                f,
                "input has {} columns but the selector was fitted on {}",
                actual, fitted
            ),
        }
    }
}

impl Error for SelectError {}
