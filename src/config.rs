use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::scoring::{self, ScoreFunc};
use crate::selector::KBestSelector;

/// Central configuration for the selector.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SelectorConfig {
    /// Number of top features to keep.
    pub k: usize,
    /// Built-in scoring function; `None` lets `fit` choose from the target.
    pub score_func: Option<ScoreFuncKind>,
}

/// Built-in scoring functions, addressable by name.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFuncKind {
    FClassif,
    FRegression,
    MutualInfoClassif,
    MutualInfoRegression,
    Chi2,
}

impl ScoreFuncKind {
    /// Resolve the named scorer to its callable form.
    pub fn resolve(self) -> ScoreFunc {
        match self {
            ScoreFuncKind::FClassif => Arc::new(scoring::f_classif),
            ScoreFuncKind::FRegression => Arc::new(scoring::f_regression),
            ScoreFuncKind::MutualInfoClassif => Arc::new(scoring::mutual_info_classif),
            ScoreFuncKind::MutualInfoRegression => Arc::new(scoring::mutual_info_regression),
            ScoreFuncKind::Chi2 => Arc::new(scoring::chi2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreFuncKind::FClassif => "f_classif",
            ScoreFuncKind::FRegression => "f_regression",
            ScoreFuncKind::MutualInfoClassif => "mutual_info_classif",
            ScoreFuncKind::MutualInfoRegression => "mutual_info_regression",
            ScoreFuncKind::Chi2 => "chi2",
        }
    }
}

impl fmt::Display for ScoreFuncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreFuncKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f_classif" => Ok(ScoreFuncKind::FClassif),
            "f_regression" => Ok(ScoreFuncKind::FRegression),
            "mutual_info_classif" => Ok(ScoreFuncKind::MutualInfoClassif),
            "mutual_info_regression" => Ok(ScoreFuncKind::MutualInfoRegression),
            "chi2" => Ok(ScoreFuncKind::Chi2),
            _ => Err(format!(
                "Unknown score function: {}. Valid names are f_classif, f_regression, mutual_info_classif, mutual_info_regression, chi2",
                s
            )),
        }
    }
}

impl SelectorConfig {
    pub fn new(k: usize, score_func: Option<ScoreFuncKind>) -> Self {
        Self { k, score_func }
    }

    /// Build a selector from this configuration.
    pub fn build(&self) -> KBestSelector {
        KBestSelector::new(self.score_func.map(ScoreFuncKind::resolve), self.k)
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            k: 10,
            score_func: None,
        }
    }
}
