use std::fmt;

use crate::domain::ports::BoxError;

// Domain-level errors for the channel analysis workflow.
#[derive(Debug)]
pub enum AnalysisError {
    // The model answered, but with nothing usable after tidying.
    EmptyCompletion,
    Backend(BoxError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyCompletion => write!(f, "model returned an empty completion"),
            AnalysisError::Backend(err) => write!(f, "{err}"),
        }
    }
}
