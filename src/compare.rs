//! # Equivalent Binary Trees
//!
//! Two trees are equivalent when their in-order sequences are equal, shape does
//! not matter. Each tree is walked on its own scoped thread into a rendezvous
//! channel and the calling thread drains both channels in lockstep.
//!
//! When the first sequence runs out the second one must be exhausted too,
//! otherwise the first tree is a strict prefix of the second and the trees
//! differ.

use crate::error::{Error, Result};
use crate::treenodes::{Tree, TreeNode};
use crate::types::*;
use crate::walk::{sequence_channel, walk};
use itertools::{EitherOrBoth, Itertools};
use log::debug;
use std::panic;
use std::sync::mpsc::Receiver;
use utils::thread;

/// Outcome of comparing two in-order sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal { len: usize },
    /// First position where the sequences disagree.
    Differs { index: usize, left: Value, right: Value },
    /// The left sequence ended after `len` values, the right one still had `next`.
    LeftShorter { len: usize, next: Value },
    /// The right sequence ended after `len` values, the left one still had `next`.
    RightShorter { len: usize, next: Value },
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        match self {
            Comparison::Equal { .. } => true,
            _ => false,
        }
    }
}

/// Reports whether both trees hold the same in-order sequence.
///
/// A panic on a walker thread is resumed on the caller with its payload.
pub fn same(a: &Tree, b: &Tree) -> bool {
    same_nodes(a.root(), b.root())
}

pub fn same_nodes<N: TreeNode + Sync>(a: Option<&N>, b: Option<&N>) -> bool {
    match walk_both(a, b) {
        Ok(cmp) => cmp.is_equal(),
        Err(payload) => panic::resume_unwind(payload),
    }
}

pub fn compare(a: &Tree, b: &Tree) -> Result<Comparison> {
    compare_nodes(a.root(), b.root())
}

/// Walks both trees concurrently and compares their sequences in lockstep.
pub fn compare_nodes<N: TreeNode + Sync>(a: Option<&N>, b: Option<&N>) -> Result<Comparison> {
    walk_both(a, b).map_err(|_| Error::WalkerPanicked)
}

fn walk_both<N: TreeNode + Sync>(a: Option<&N>, b: Option<&N>) -> std::thread::Result<Comparison> {
    let (tx_a, rx_a) = sequence_channel();
    let (tx_b, rx_b) = sequence_channel();

    let cmp = thread::scope(|s| {
        // The walkers end with `Disconnected` when the consumer returns early,
        // nothing waits on their result.
        s.spawn(move |_| walk(a, tx_a));
        s.spawn(move |_| walk(b, tx_b));

        // Both receivers are dropped inside `lockstep`, before the scope joins.
        lockstep(rx_a, rx_b)
    })?;

    debug!("compare: {:?}", cmp);
    Ok(cmp)
}

fn lockstep(a: Receiver<Value>, b: Receiver<Value>) -> Comparison {
    let mut index = 0;
    for left in a.iter() {
        match b.recv() {
            Ok(right) if right == left => index += 1,
            Ok(right) => return Comparison::Differs { index, left, right },
            Err(_) => {
                return Comparison::RightShorter {
                    len: index,
                    next: left,
                }
            }
        }
    }

    match b.recv() {
        Ok(next) => Comparison::LeftShorter { len: index, next },
        Err(_) => Comparison::Equal { len: index },
    }
}

/// Single-threaded comparison over the in-order iterators.
pub fn same_sequential(a: &Tree, b: &Tree) -> bool {
    compare_sequential(a, b).is_equal()
}

pub fn compare_sequential(a: &Tree, b: &Tree) -> Comparison {
    let mut index = 0;
    for pair in a.in_order().zip_longest(b.in_order()) {
        match pair {
            EitherOrBoth::Both(left, right) if left == right => index += 1,
            EitherOrBoth::Both(left, right) => return Comparison::Differs { index, left, right },
            EitherOrBoth::Left(next) => return Comparison::RightShorter { len: index, next },
            EitherOrBoth::Right(next) => return Comparison::LeftShorter { len: index, next },
        }
    }
    Comparison::Equal { len: index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    #[test]
    fn same_content_different_shape() {
        let balanced = Tree::from_sorted(&[1, 2, 3]);
        let chain = Tree::from_values(vec![1, 2, 3]);
        assert_ne!(balanced, chain);
        assert!(same(&balanced, &chain));
        assert_eq!(compare(&balanced, &chain), Ok(Comparison::Equal { len: 3 }));
    }

    #[test]
    fn differs_at_third_value() {
        let a = Tree::from_sorted(&[1, 2, 3]);
        let b = Tree::from_sorted(&[1, 2, 4]);
        assert!(!same(&a, &b));
        assert_eq!(
            compare(&a, &b),
            Ok(Comparison::Differs {
                index: 2,
                left: 3,
                right: 4
            })
        );
    }

    #[test]
    fn both_empty() {
        assert!(same(&Tree::new(), &Tree::new()));
    }

    #[test]
    fn one_empty() {
        let a = Tree::from_sorted(&[1]);
        let empty = Tree::new();
        assert_eq!(
            compare(&a, &empty),
            Ok(Comparison::RightShorter { len: 0, next: 1 })
        );
        assert_eq!(
            compare(&empty, &a),
            Ok(Comparison::LeftShorter { len: 0, next: 1 })
        );
        assert!(!same(&a, &empty));
        assert!(!same(&empty, &a));
    }

    #[test]
    fn left_prefix_of_right_is_not_same() {
        let a = Tree::from_sorted(&[1, 2, 3]);
        let b = Tree::from_sorted(&[1, 2, 3, 4]);
        assert_eq!(
            compare(&a, &b),
            Ok(Comparison::LeftShorter { len: 3, next: 4 })
        );
        assert!(!same(&a, &b));
    }

    #[test]
    fn right_prefix_of_left_is_not_same() {
        let a = Tree::from_sorted(&[1, 2, 3, 4]);
        let b = Tree::from_sorted(&[1, 2, 3]);
        assert_eq!(
            compare(&a, &b),
            Ok(Comparison::RightShorter { len: 3, next: 4 })
        );
    }

    #[test]
    fn reflexive() {
        let mut generator = Generator::seeded(32, 7);
        for k in 1..=5 {
            let tree = generator.tree(k);
            assert!(same(&tree, &tree));
        }
    }

    #[test]
    fn single_position_change_is_detected() {
        let values: Sequence = (1..=20).map(|v| v * 10).collect();
        let base = Tree::from_sorted(&values);
        for i in 0..values.len() {
            let mut changed = values.clone();
            changed[i] += 1;
            let other = Tree::from_values(changed.iter().cloned());
            assert!(!same(&base, &other), "position {}", i);
            assert_eq!(
                compare(&base, &other),
                Ok(Comparison::Differs {
                    index: i,
                    left: values[i],
                    right: values[i] + 1
                })
            );
        }
    }

    #[test]
    fn agrees_with_sequential() {
        let mut generator = Generator::seeded(10, crate::K_RAND_SEED);
        for k in 1..=6 {
            for j in 1..=6 {
                let a = generator.tree(k);
                let b = generator.tree(j);
                assert_eq!(compare(&a, &b), Ok(compare_sequential(&a, &b)));
                assert_eq!(same(&a, &b), same_sequential(&a, &b));
                assert_eq!(same(&a, &b), k == j);
            }
        }
    }

    /// A node model whose values cannot be read.
    struct Unreadable;

    impl TreeNode for Unreadable {
        fn value(&self) -> Value {
            panic!("unreadable node")
        }

        fn left(&self) -> Option<&Self> {
            None
        }

        fn right(&self) -> Option<&Self> {
            None
        }
    }

    #[test]
    fn walker_panic_is_reported() {
        assert_eq!(
            compare_nodes(Some(&Unreadable), Some(&Unreadable)),
            Err(Error::WalkerPanicked)
        );
        assert_eq!(
            compare_nodes(Some(&Unreadable), None),
            Err(Error::WalkerPanicked)
        );
    }

    #[test]
    #[should_panic(expected = "unreadable node")]
    fn same_resumes_walker_panic() {
        same_nodes(Some(&Unreadable), Some(&Unreadable));
    }

    #[test]
    fn long_chains_compare() {
        let a = Tree::from_values(0..2_000);
        let b = Tree::from_values((0..2_000).rev());
        assert!(same(&a, &b));
    }
}
