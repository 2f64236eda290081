use crate::types::*;

/// A read-only view of a binary tree node. Walkers and comparators are generic
/// over it, any node model is required to implement it.
pub trait TreeNode {
    fn value(&self) -> Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    fn in_order(&self) -> InOrder<'_, Self>
    where
        Self: Sized,
    {
        InOrder::new(Some(self))
    }
}

/// In-order traversal driven by an explicit stack, so list-shaped trees
/// cost heap rather than call stack.
pub struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: TreeNode> InOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: TreeNode> Iterator for InOrder<'a, N> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

pub mod boxed;

pub use boxed::{Node, Tree};
