use crate::classifiers::BinaryClassifier;
use crate::core::{FEATURE_COUNT, FeatureVector};
use crate::error::PredictionError;

pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.5;

/// Logistic regression over the eleven schema columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
    threshold: f64,
}

impl LogisticModel {
    pub fn new(weights: [f64; FEATURE_COUNT], intercept: f64, threshold: f64) -> Self {
        Self {
            weights,
            intercept,
            threshold,
        }
    }

    /// Fails when the weighted sum is not finite.
    pub fn probability(&self, row: &[f64; FEATURE_COUNT]) -> Result<f64, PredictionError> {
        let z = self
            .weights
            .iter()
            .zip(row.iter())
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        if !z.is_finite() {
            return Err(PredictionError::UnexpectedOutput(format!(
                "linear score {z} is not finite"
            )));
        }
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl BinaryClassifier for LogisticModel {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, PredictionError> {
        rows.iter()
            .map(|fv| {
                let row = fv.to_numeric()?;
                Ok((self.probability(&row)? >= self.threshold) as i64)
            })
            .collect()
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}
