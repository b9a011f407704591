pub mod feature_builder;
pub mod features;
pub mod readings;

pub use feature_builder::build;
pub use features::{FEATURE_COUNT, FEATURE_SCHEMA, FeatureColumn, FeatureValue, FeatureVector};
pub use readings::{InputField, RawReadingSet};
