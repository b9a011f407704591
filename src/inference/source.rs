use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::error::ModelLoadError;
use crate::inference::handle::ClassifierHandle;

/// Where the adapter gets its classifier from on each submission.
pub trait ModelSource {
    fn acquire(&self) -> Result<Arc<ClassifierHandle>, ModelLoadError>;
}

impl<F> ModelSource for F
where
    F: Fn() -> Result<Arc<ClassifierHandle>, ModelLoadError>,
{
    fn acquire(&self) -> Result<Arc<ClassifierHandle>, ModelLoadError> {
        self()
    }
}

/// Reloads the artifact from disk every time.
#[derive(Debug, Clone)]
pub struct FileModelSource {
    path: PathBuf,
}

impl FileModelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelSource for FileModelSource {
    fn acquire(&self) -> Result<Arc<ClassifierHandle>, ModelLoadError> {
        ClassifierHandle::load(&self.path).map(Arc::new)
    }
}

/// Loads lazily and keeps the first successful handle.
///
/// Failed loads are not remembered; the next call tries again.
pub struct CachedModelSource<S> {
    inner: S,
    cached: RwLock<Option<Arc<ClassifierHandle>>>,
}

impl<S: ModelSource> CachedModelSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cached: RwLock::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.read().is_some()
    }

    /// Drops the cached handle so the next call reloads.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }
}

impl<S: ModelSource> ModelSource for CachedModelSource<S> {
    fn acquire(&self) -> Result<Arc<ClassifierHandle>, ModelLoadError> {
        if let Some(handle) = self.cached.read().as_ref() {
            return Ok(Arc::clone(handle));
        }

        let mut slot = self.cached.write();
        if let Some(handle) = slot.as_ref() {
            return Ok(Arc::clone(handle));
        }
        let handle = self.inner.acquire()?;
        debug!("Caching model from {}", handle.metadata().source.display());
        *slot = Some(Arc::clone(&handle));
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{STUMP_MODEL_JSON, write_model};
    use crate::testing::stubs::FixedClassifier;
    use std::cell::Cell;

    #[test]
    fn closures_are_sources() {
        let source = || -> Result<Arc<ClassifierHandle>, ModelLoadError> {
            Ok(Arc::new(FixedClassifier::handle(vec![1])))
        };
        assert!(source.acquire().is_ok());
    }

    #[test]
    fn file_source_reloads_each_call() {
        let file = write_model(STUMP_MODEL_JSON);
        let source = FileModelSource::new(file.path());
        let a = source.acquire().unwrap();
        let b = source.acquire().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn cache_loads_once() {
        let calls = Cell::new(0);
        let inner = || -> Result<Arc<ClassifierHandle>, ModelLoadError> {
            calls.set(calls.get() + 1);
            Ok(Arc::new(FixedClassifier::handle(vec![0])))
        };
        let cached = CachedModelSource::new(inner);
        assert!(!cached.is_loaded());

        let a = cached.acquire().unwrap();
        let b = cached.acquire().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.get(), 1);
        assert!(cached.is_loaded());

        cached.invalidate();
        cached.acquire().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn cache_does_not_remember_failures() {
        let calls = Cell::new(0);
        let inner = || -> Result<Arc<ClassifierHandle>, ModelLoadError> {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(ModelLoadError::NotFound(PathBuf::from("model.json")))
            } else {
                Ok(Arc::new(FixedClassifier::handle(vec![0])))
            }
        };
        let cached = CachedModelSource::new(inner);
        assert!(cached.acquire().is_err());
        assert!(!cached.is_loaded());
        assert!(cached.acquire().is_ok());
        assert_eq!(calls.get(), 2);
    }
}
