mod logistic;
mod tree;

use std::{fs, path::Path};

use ndarray::{Array1, ArrayView2};
use serde::Deserialize;

pub use logistic::LogisticRegression;
pub use tree::{DecisionTree, Node, RandomForest};

use crate::{LoanErr, Result};

pub trait Classifier: Send + Sync {
    /// Runs inference over every row of `x`.
    ///
    /// # Arguments
    /// * `x` - The samples, one per row, features in training order.
    ///
    /// # Returns
    /// One class per row (`0.` or `1.` for the models in this crate), or an error if the input
    /// does not fit the model.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>>;
}

/// A trained model as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

impl ModelArtifact {
    /// Loads a model artifact from a JSON file.
    ///
    /// # Errors
    /// `ModelNotFound` if nothing exists at `path`, `ModelRead` or `ModelDecode` if it cannot be
    /// read or is not a valid artifact.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoanErr::ModelNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| LoanErr::ModelRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| LoanErr::ModelDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LogisticRegression(_) => "logistic_regression",
            ModelArtifact::DecisionTree(_) => "decision_tree",
            ModelArtifact::RandomForest(_) => "random_forest",
        }
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        match self {
            ModelArtifact::LogisticRegression(m) => m.predict(x),
            ModelArtifact::DecisionTree(m) => m.predict(x),
            ModelArtifact::RandomForest(m) => m.predict(x),
        }
    }
}
