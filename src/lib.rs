pub const K_RAND_SEED: u64 = 52;

extern crate crossbeam_utils as utils;

/// Compares many tree pairs on the rayon pool
pub mod batch;
/// # Equivalent Binary Trees - concurrent walk and lockstep compare
pub mod compare;
/// Command line configuration and its defaults
pub mod config;
pub mod error;
/// Generates random binary search trees with a known in-order sequence
pub mod generator;
/// Drives the fixed comparisons and the optional sweep for the binary
pub mod runner;
/// Node models and the `TreeNode` trait every walker is generic over
pub mod treenodes;
/// Common types for values and sequences.
pub mod types;
/// Streams a tree's in-order sequence onto a rendezvous channel
pub mod walk;

mod timer;

pub use compare::{compare, same, same_sequential, Comparison};
pub use error::{Error, Result};
pub use treenodes::{Node, Tree, TreeNode};
pub use walk::walk;
