use std::{fmt, sync::Arc};

use crate::{
    encoder::{self, FormSubmission},
    model::Classifier,
    LoanErr, Result,
};

/// The decision the classifier reached for an applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    NotApproved,
}

impl Decision {
    /// Interprets a raw classifier output. Only `0` is a rejection.
    pub fn from_output(output: f64) -> Self {
        // truncated toward zero, 0.7 still reads as 0
        if output.trunc() as i64 == 0 {
            Decision::NotApproved
        } else {
            Decision::Approved
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decision::Approved => "Approved (Loan Status = 1)",
            Decision::NotApproved => "Not approved (Loan Status = 0)",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bridges form submissions to the classifier. Cheap to clone, the classifier is shared.
#[derive(Clone)]
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
}

impl PredictionService {
    pub fn new<C>(classifier: C) -> Self
    where
        C: Classifier + 'static,
    {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Encodes `form` and asks the classifier for a decision.
    ///
    /// # Errors
    /// Any inference failure is returned as is; malformed form values never fail.
    pub fn predict(&self, form: &FormSubmission) -> Result<Decision> {
        let x = encoder::encode(form);
        log::debug!("encoded features {:?}", x.values());

        let y = self.classifier.predict(x.view())?;
        let output = y.first().copied().ok_or(LoanErr::EmptyPrediction)?;

        let decision = Decision::from_output(output);
        log::debug!("classifier returned {output}, {decision}");
        Ok(decision)
    }
}
