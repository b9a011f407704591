use std::slice;

use log::{debug, warn};

use crate::core::{FeatureVector, RawReadingSet, build};
use crate::error::{PipelineError, PredictionError};
use crate::inference::outcome::ClassificationOutcome;
use crate::inference::source::ModelSource;

fn predict_one<S>(
    vector: &FeatureVector,
    source: &S,
) -> Result<ClassificationOutcome, PipelineError>
where
    S: ModelSource + ?Sized,
{
    let handle = source.acquire()?;
    debug!("Submitting {vector}");
    let labels = handle.predict(slice::from_ref(vector))?;
    match labels.as_slice() {
        [label] => Ok(ClassificationOutcome::from_label(*label)?),
        other => Err(PredictionError::UnexpectedOutput(format!(
            "expected one label, got {}",
            other.len()
        ))
        .into()),
    }
}

fn settle(result: Result<ClassificationOutcome, PipelineError>) -> ClassificationOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Submission inconclusive: {e}");
            ClassificationOutcome::Inconclusive(e.to_string())
        }
    }
}

/// Classifies an already built feature vector.
///
/// Load and prediction failures become [`ClassificationOutcome::Inconclusive`].
pub fn classify<S>(vector: &FeatureVector, source: &S) -> ClassificationOutcome
where
    S: ModelSource + ?Sized,
{
    settle(predict_one(vector, source))
}

/// Full submission: build the feature vector, then classify it.
///
/// Never fails; every error ends up as an inconclusive verdict.
pub fn submit<S>(raw: &RawReadingSet, source: &S) -> ClassificationOutcome
where
    S: ModelSource + ?Sized,
{
    let result = build(raw)
        .map_err(PipelineError::from)
        .and_then(|vector| predict_one(&vector, source));
    settle(result)
}
