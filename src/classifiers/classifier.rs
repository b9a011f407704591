use crate::core::FeatureVector;
use crate::error::PredictionError;

/// A pre-trained binary classifier.
///
/// Returns one label per input row. Implementations are expected to emit
/// `0` or `1`; anything else is left for the caller to reject.
pub trait BinaryClassifier: Send + Sync {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, PredictionError>;

    fn kind(&self) -> &'static str;
}
