use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::classifiers::{BinaryClassifier, ModelArtifact};
use crate::core::FeatureVector;
use crate::error::{ModelLoadError, PredictionError};

#[derive(Debug, Clone)]
pub struct ModelMetadata {
    pub source: PathBuf,
    pub kind: &'static str,
    pub loaded_at: DateTime<Utc>,
}

/// A loaded classifier. Read-only once constructed.
pub struct ClassifierHandle {
    classifier: Box<dyn BinaryClassifier>,
    metadata: ModelMetadata,
}

impl ClassifierHandle {
    pub fn new(classifier: Box<dyn BinaryClassifier>, source: impl Into<PathBuf>) -> Self {
        let metadata = ModelMetadata {
            source: source.into(),
            kind: classifier.kind(),
            loaded_at: Utc::now(),
        };
        Self {
            classifier,
            metadata,
        }
    }

    /// Reads and validates a JSON model artifact.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        info!("Loading model artifact from {}", path.display());

        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ModelLoadError::NotFound(path.to_path_buf()),
            _ => ModelLoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let corrupt = |reason: String| ModelLoadError::Corrupt {
            path: path.to_path_buf(),
            reason,
        };
        let classifier = ModelArtifact::from_json(&bytes)
            .and_then(ModelArtifact::into_classifier)
            .map_err(|e| corrupt(e.to_string()))?;

        let handle = Self::new(classifier, path);
        info!(
            "Loaded {} model from {}",
            handle.metadata.kind,
            path.display()
        );
        Ok(handle)
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, PredictionError> {
        let labels = self.classifier.predict(rows)?;
        debug!("{} model answered {:?}", self.metadata.kind, labels);
        Ok(labels)
    }
}

impl std::fmt::Debug for ClassifierHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierHandle")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
