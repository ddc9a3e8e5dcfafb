//! Loan approval predictor.
//!
//! Encodes the applicant attributes submitted through an HTML form into the feature vector a
//! pre-trained binary classifier expects, and renders its decision back into the form.

pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod render;
pub mod server;
pub mod service;

pub use config::ServiceConfig;
pub use encoder::{encode, Feature, FeatureVector, FormSubmission};
pub use error::{LoanErr, Result};
pub use model::{Classifier, ModelArtifact};
pub use service::{Decision, PredictionService};
