use crate::error::{Error, Result};
use crate::types::*;
use clap::Parser;

/// Keys for the two comparisons printed on every run.
pub const EQUAL_KEYS: (Value, Value) = (1, 1);
pub const UNEQUAL_KEYS: (Value, Value) = (3, 4);
const MAX_TREE_SIZE: usize = 1 << 20;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "equivtrees")]
#[command(about = "Checks whether binary trees hold the same values, walking them concurrently")]
pub struct Config {
    /// Values per generated tree
    #[arg(long, default_value_t = DEFAULT_TREE_SIZE)]
    pub size: usize,

    /// Seed for tree generation, random when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random same-key pairs to compare on the thread pool after the fixed comparisons
    #[arg(long, default_value_t = 0)]
    pub pairs: usize,

    /// Log every generated tree
    #[arg(long)]
    pub show: bool,

    /// Exit with status 1 when a fixed comparison is not what it should be
    #[arg(long)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_TREE_SIZE,
            seed: None,
            pairs: 0,
            show: false,
            strict: false,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self> {
        if self.size == 0 {
            return Err(Error::InvalidConfig("`size` must be at least 1".to_string()));
        }
        if self.size > MAX_TREE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "`size` must be at most {}",
                MAX_TREE_SIZE
            )));
        }
        Ok(self)
    }
}
