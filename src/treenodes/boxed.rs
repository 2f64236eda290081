use std::fmt;

use crate::treenodes::{InOrder, TreeNode};
use crate::types::*;

pub type WrappedNode = Box<Node>;

/// A tree node. Everything that visits a whole subtree (drop, display, depth,
/// clone, equality) walks it with an explicit stack, so list-shaped trees never
/// recurse once per level.
pub struct Node {
    value: Value,
    left: Option<WrappedNode>,
    right: Option<WrappedNode>,
}

impl Node {
    pub fn new(value: Value) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(value: Value, left: Option<Node>, right: Option<Node>) -> Self {
        Node {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

impl TreeNode for Node {
    fn value(&self) -> Value {
        self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<WrappedNode> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// Children are shown by value only, the full shape is what `Display` is for.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(|n| n.value))
            .field("right", &self.right().map(|n| n.value))
            .finish()
    }
}

enum Token<'a> {
    Open(&'a Node),
    Value(Value),
    Text(&'static str),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Token::Open(self)];
        while let Some(token) = stack.pop() {
            match token {
                Token::Open(node) => {
                    stack.push(Token::Text(")"));
                    if let Some(right) = node.right() {
                        stack.push(Token::Open(right));
                        stack.push(Token::Text(" "));
                    }
                    stack.push(Token::Value(node.value));
                    if let Some(left) = node.left() {
                        stack.push(Token::Text(" "));
                        stack.push(Token::Open(left));
                    }
                    stack.push(Token::Text("("));
                }
                Token::Value(v) => write!(f, "{}", v)?,
                Token::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

/// An owned binary tree. The empty tree has no root.
#[derive(Default)]
pub struct Tree {
    root: Option<WrappedNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn from_root(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Inserts every value in iteration order, so the shape depends on the order.
    pub fn from_values<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut tree = Self::new();
        for v in values {
            tree.insert(v);
        }
        tree
    }

    /// Builds a height-balanced tree whose in-order sequence is `values`.
    pub fn from_sorted(values: &[Value]) -> Self {
        fn build(values: &[Value]) -> Option<WrappedNode> {
            if values.is_empty() {
                return None;
            }
            let mid = values.len() / 2;
            Some(Box::new(Node {
                value: values[mid],
                left: build(&values[..mid]),
                right: build(&values[mid + 1..]),
            }))
        }

        Self {
            root: build(values),
        }
    }

    /// Binary search insertion. Smaller values go left, everything else right.
    pub fn insert(&mut self, value: Value) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            deepest = std::cmp::max(deepest, level);
            stack.extend(node.left().map(|n| (n, level + 1)));
            stack.extend(node.right().map(|n| (n, level + 1)));
        }
        deepest
    }

    pub fn in_order(&self) -> InOrder<'_, Node> {
        InOrder::new(self.root())
    }

    pub fn to_sequence(&self) -> Sequence {
        self.in_order().collect()
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        let mut tree = Tree::new();
        {
            let mut stack: Vec<(&Node, &mut Option<WrappedNode>)> = Vec::new();
            if let Some(root) = self.root() {
                stack.push((root, &mut tree.root));
            }
            while let Some((src, slot)) = stack.pop() {
                let node = slot.get_or_insert_with(|| Box::new(Node::new(src.value)));
                let Node { left, right, .. } = &mut **node;
                if let Some(l) = src.left() {
                    stack.push((l, left));
                }
                if let Some(r) = src.right() {
                    stack.push((r, right));
                }
            }
        }
        tree
    }
}

/// Structural equality: same shape and same value at every position.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    stack.push((a.left(), b.left()));
                    stack.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tree").field(&format_args!("{}", self)).finish()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => write!(f, "()"),
        }
    }
}
