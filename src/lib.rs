pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod inference;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{ModelLoadError, PipelineError, PredictionError, ValidationError};
