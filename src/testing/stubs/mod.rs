pub mod fixed_classifier;

pub use fixed_classifier::{FixedClassifier, FixedSource, fixed_source, missing_source};
