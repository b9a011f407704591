use std::str::FromStr;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifiers::BinaryClassifier;
use crate::classifiers::linear::{DEFAULT_DECISION_THRESHOLD, LogisticModel};
use crate::classifiers::tree::{DecisionTree, Node, NumericThresholdTest, SplitNode, TreeShapeError};
use crate::core::{FEATURE_COUNT, FeatureColumn};

/// On-disk description of a trained classifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModelArtifact {
    /// Column names the model was trained on; checked against the schema
    /// when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,

    #[serde(flatten)]
    pub model: ModelSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelSpec {
    Linear(LinearParams),
    Tree(TreeParams),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinearParams {
    /// One weight per schema column.
    pub weights: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
    /// Probability at or above which the model answers `1`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_DECISION_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TreeParams {
    /// Flat node list, root first. Children must come after their parent.
    pub nodes: Vec<TreeNodeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TreeNodeSpec {
    Split {
        /// Schema column name, e.g. `"temp_diff"`.
        column: String,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feature names {found:?} do not match the expected order {expected:?}")]
    SchemaMismatch {
        expected: Vec<&'static str>,
        found: Vec<String>,
    },

    #[error("expected 11 weights, found {0}")]
    WeightCount(usize),

    #[error("non-finite parameter in {0}")]
    NonFinite(&'static str),

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error(transparent)]
    TreeShape(#[from] TreeShapeError),
}

impl ModelArtifact {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn kind(&self) -> &'static str {
        match self.model {
            ModelSpec::Linear(_) => "linear",
            ModelSpec::Tree(_) => "tree",
        }
    }

    pub fn json_schema() -> Schema {
        schema_for!(ModelArtifact)
    }

    fn check_feature_names(&self) -> Result<(), ArtifactError> {
        let Some(found) = &self.feature_names else {
            return Ok(());
        };
        let expected = FeatureColumn::names();
        if found.len() != expected.len() || found.iter().zip(&expected).any(|(f, e)| f != e) {
            return Err(ArtifactError::SchemaMismatch {
                expected,
                found: found.clone(),
            });
        }
        Ok(())
    }

    /// Validates the artifact and builds the classifier it describes.
    pub fn into_classifier(self) -> Result<Box<dyn BinaryClassifier>, ArtifactError> {
        self.check_feature_names()?;
        match self.model {
            ModelSpec::Linear(params) => Ok(Box::new(build_linear(params)?)),
            ModelSpec::Tree(params) => Ok(Box::new(build_tree(params)?)),
        }
    }
}

fn build_linear(params: LinearParams) -> Result<LogisticModel, ArtifactError> {
    let weights: [f64; FEATURE_COUNT] = params
        .weights
        .as_slice()
        .try_into()
        .map_err(|_| ArtifactError::WeightCount(params.weights.len()))?;
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(ArtifactError::NonFinite("weights"));
    }
    if !params.intercept.is_finite() {
        return Err(ArtifactError::NonFinite("intercept"));
    }
    if !params.threshold.is_finite() {
        return Err(ArtifactError::NonFinite("threshold"));
    }
    Ok(LogisticModel::new(weights, params.intercept, params.threshold))
}

fn build_tree(params: TreeParams) -> Result<DecisionTree, ArtifactError> {
    let nodes = params
        .nodes
        .into_iter()
        .map(|spec| match spec {
            TreeNodeSpec::Split {
                column,
                threshold,
                left,
                right,
            } => {
                let column = FeatureColumn::from_str(&column)
                    .map_err(|_| ArtifactError::UnknownColumn(column))?;
                if !threshold.is_finite() {
                    return Err(ArtifactError::NonFinite("threshold"));
                }
                let test = NumericThresholdTest::new(column, threshold);
                Ok(Node::Split(SplitNode::new(test, left, right)))
            }
            TreeNodeSpec::Leaf { class } => Ok(Node::Leaf { class }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DecisionTree::new(nodes)?)
}
