pub mod adapter;
pub mod handle;
pub mod outcome;
pub mod source;

pub use adapter::{classify, submit};
pub use handle::{ClassifierHandle, ModelMetadata};
pub use outcome::{ClassificationOutcome, Severity, StatusLine};
pub use source::{CachedModelSource, FileModelSource, ModelSource};
