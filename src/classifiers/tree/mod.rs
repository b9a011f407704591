mod decision_tree;
pub mod node;

pub use decision_tree::{DecisionTree, TreeShapeError};
pub use node::{Node, SplitNode};
pub use split_test::NumericThresholdTest;
