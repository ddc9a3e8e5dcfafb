use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::Deserialize;

use super::Classifier;
use crate::{LoanErr, Result};

fn default_threshold() -> f64 {
    0.5
}

/// A fitted binary logistic regression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

impl LogisticRegression {
    /// Creates a new `LogisticRegression` with the default `0.5` decision threshold.
    ///
    /// # Arguments
    /// * `coefficients` - One weight per feature, in feature order.
    /// * `intercept` - The bias term.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold: default_threshold(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the probability of the positive class for every row of `x`.
    pub fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(LoanErr::FeatureCountMismatch {
                got: x.ncols(),
                expected: self.coefficients.len(),
            });
        }

        let w = ArrayView1::from(&self.coefficients[..]);
        let z = x.dot(&w) + self.intercept;
        Ok(z.mapv_into(sigmoid))
    }
}

fn sigmoid(z: f64) -> f64 {
    1. / (1. + (-z).exp())
}

impl Classifier for LogisticRegression {
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let p = self.predict_proba(x)?;
        Ok(p.mapv_into(|p| if p >= self.threshold { 1. } else { 0. }))
    }
}
