pub mod artifact;
pub mod classifier;
pub mod linear;
pub mod tree;

pub use artifact::{ArtifactError, ModelArtifact};
pub use classifier::BinaryClassifier;
pub use linear::LogisticModel;
pub use tree::DecisionTree;
