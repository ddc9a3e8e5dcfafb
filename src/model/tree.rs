use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use serde::Deserialize;

use super::Classifier;
use crate::{LoanErr, Result};

/// A node of a flattened decision tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Goes to `left` when `x[feature] <= threshold`, to `right` otherwise.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A fitted decision tree, stored as a flat node list rooted at index 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn predict_row(&self, row: ArrayView1<f64>) -> Result<f64> {
        let nodes = self.nodes.len();
        if nodes == 0 {
            return Err(LoanErr::EmptyModel { what: "nodes" });
        }

        // a well formed tree visits at most every node once, the extra step resolves the child
        // picked on the last one
        let mut i = 0;
        for _ in 0..=nodes {
            match self.nodes.get(i) {
                Some(Node::Leaf { value }) => return Ok(*value),
                Some(&Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let v = row.get(feature).ok_or(LoanErr::FeatureOutOfRange {
                        feature,
                        width: row.len(),
                    })?;
                    i = if *v <= threshold { left } else { right };
                }
                None => return Err(LoanErr::NodeOutOfRange { node: i, nodes }),
            }
        }

        Err(LoanErr::TreeCycle { steps: nodes })
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        x.axis_iter(Axis(0))
            .map(|row| self.predict_row(row))
            .collect::<Result<Vec<_>>>()
            .map(Array1::from)
    }
}

/// An ensemble of decision trees voting by majority.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>) -> Self {
        Self { trees }
    }
}

impl Classifier for RandomForest {
    /// A row is positive only when strictly more than half the trees say so, ties go to the
    /// negative class.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if self.trees.is_empty() {
            return Err(LoanErr::EmptyModel { what: "trees" });
        }

        let mut votes = Array1::<f64>::zeros(x.nrows());
        for tree in &self.trees {
            let y = tree.predict(x)?;
            votes.zip_mut_with(&y, |v, &y| {
                if y != 0. {
                    *v += 1.;
                }
            });
        }

        let half = self.trees.len() as f64 / 2.;
        Ok(votes.mapv_into(|v| if v > half { 1. } else { 0. }))
    }
}
