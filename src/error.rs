use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, LoanErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum LoanErr {
    ModelNotFound {
        path: PathBuf,
    },
    ModelRead {
        path: PathBuf,
        source: io::Error,
    },
    ModelDecode {
        path: PathBuf,
        source: serde_json::Error,
    },
    FeatureCountMismatch {
        got: usize,
        expected: usize,
    },
    FeatureOutOfRange {
        feature: usize,
        width: usize,
    },
    NodeOutOfRange {
        node: usize,
        nodes: usize,
    },
    TreeCycle {
        steps: usize,
    },
    EmptyModel {
        what: &'static str,
    },
    EmptyPrediction,
}

impl Display for LoanErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanErr::ModelNotFound { path } => write!(
                f,
                "model artifact not found at {}. Please place the trained model there.",
                path.display()
            ),
            LoanErr::ModelRead { path, source } => {
                write!(f, "cannot read model artifact '{}': {source}", path.display())
            }
            LoanErr::ModelDecode { path, source } => {
                write!(f, "invalid model artifact '{}': {source}", path.display())
            }
            LoanErr::FeatureCountMismatch { got, expected } => write!(
                f,
                "feature count mismatch, got {got} and the model expects {expected}"
            ),
            LoanErr::FeatureOutOfRange { feature, width } => write!(
                f,
                "split references feature {feature} but the input only has {width}"
            ),
            LoanErr::NodeOutOfRange { node, nodes } => {
                write!(f, "tree references node {node} but only has {nodes}")
            }
            LoanErr::TreeCycle { steps } => {
                write!(f, "tree walk did not reach a leaf after {steps} steps")
            }
            LoanErr::EmptyModel { what } => write!(f, "the model has no {what}"),
            LoanErr::EmptyPrediction => write!(f, "the classifier returned no prediction"),
        }
    }
}

impl Error for LoanErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoanErr::ModelRead { source, .. } => Some(source),
            LoanErr::ModelDecode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Boundary conversion for the HTTP layer. The detail is logged, the client only gets a
/// generic failure.
impl IntoResponse for LoanErr {
    fn into_response(self) -> Response {
        log::error!("request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
