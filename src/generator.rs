use crate::treenodes::Tree;
use crate::types::*;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Generates binary search trees holding `k, 2k, ..., size * k`, inserted in a
/// random order. Two trees for the same `k` always walk to the same sequence,
/// their shapes usually differ.
pub struct Generator {
    size: usize,
    rng: StdRng,
}

impl Generator {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(size: usize, seed: u64) -> Self {
        Self {
            size,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn permutation(&mut self, k: Value) -> Sequence {
        let mut values: Sequence = (1..=self.size as Value).map(|i| i * k).collect();
        values.shuffle(&mut self.rng);
        values
    }

    pub fn tree(&mut self, k: Value) -> Tree {
        Tree::from_values(self.permutation(k))
    }

    /// `count` pairs of trees, both trees of a pair built for the same random key.
    pub fn same_key_pairs(&mut self, count: usize) -> Vec<(Tree, Tree)> {
        (0..count)
            .map(|_| {
                let k = self.rng.gen_range(1, 11);
                (self.tree(k), self.tree(k))
            })
            .collect()
    }
}
