use crate::classifiers::tree::split_test::NumericThresholdTest;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    split_test: NumericThresholdTest,
    children: [usize; 2],
}

impl SplitNode {
    pub fn new(split_test: NumericThresholdTest, left: usize, right: usize) -> Self {
        Self {
            split_test,
            children: [left, right],
        }
    }

    pub fn children(&self) -> [usize; 2] {
        self.children
    }

    pub fn child_for_row(&self, row: &[f64]) -> usize {
        self.children[self.split_test.branch_for_row(row)]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Split(SplitNode),
    Leaf { class: i64 },
}
