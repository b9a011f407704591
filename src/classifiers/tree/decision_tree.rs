use crate::classifiers::BinaryClassifier;
use crate::classifiers::tree::node::Node;
use crate::core::{FEATURE_COUNT, FeatureVector};
use crate::error::PredictionError;

/// Decision tree stored as a flat node array rooted at index 0.
///
/// Children always come after their parent in the array, so a walk from the
/// root always terminates.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeShapeError {
    #[error("tree has no nodes")]
    Empty,
    #[error("node {node} points to child {child}, which is out of range")]
    ChildOutOfRange { node: usize, child: usize },
    #[error("node {node} points backwards to {child}")]
    BackEdge { node: usize, child: usize },
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>) -> Result<Self, TreeShapeError> {
        if nodes.is_empty() {
            return Err(TreeShapeError::Empty);
        }
        for (node, n) in nodes.iter().enumerate() {
            let Node::Split(split) = n else {
                continue;
            };
            for child in split.children() {
                if child >= nodes.len() {
                    return Err(TreeShapeError::ChildOutOfRange { node, child });
                }
                if child <= node {
                    return Err(TreeShapeError::BackEdge { node, child });
                }
            }
        }
        Ok(Self { nodes })
    }

    fn filter_row_to_leaf(&self, row: &[f64; FEATURE_COUNT]) -> i64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { class } => return *class,
                Node::Split(split) => index = split.child_for_row(row),
            }
        }
    }
}

impl BinaryClassifier for DecisionTree {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, PredictionError> {
        rows.iter()
            .map(|fv| Ok(self.filter_row_to_leaf(&fv.to_numeric()?)))
            .collect()
    }

    fn kind(&self) -> &'static str {
        "tree"
    }
}
