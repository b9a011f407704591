use std::path::PathBuf;
use thiserror::Error;

use crate::core::{FeatureColumn, InputField};

/// Raised by the feature builder before anything reaches a classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is not a finite number: {value:?}")]
    NonNumeric { field: InputField, value: String },

    #[error("missing reading: {0}")]
    MissingField(InputField),

    #[error("unknown reading: {0:?}")]
    UnknownField(String),
}

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt model artifact {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("unexpected classifier output: {0}")]
    UnexpectedOutput(String),

    #[error("{column} is not numeric: {value:?}")]
    InvalidInput { column: FeatureColumn, value: String },
}

/// Everything that can go wrong between a submitted form and a verdict.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("model unavailable: {0}")]
    ModelLoad(#[from] ModelLoadError),

    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_error_keeps_category_prefix() {
        let err: PipelineError = ValidationError::NonNumeric {
            field: InputField::Temperature,
            value: String::new(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid input: Temperature is not a finite number: \"\""
        );

        let err: PipelineError = ModelLoadError::NotFound(PathBuf::from("nope.json")).into();
        assert_eq!(
            err.to_string(),
            "model unavailable: model artifact not found: nope.json"
        );
    }
}
