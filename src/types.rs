pub type Value = i64;
pub type Sequence = Vec<Value>;

/// Number of values in a generated tree when nothing else is asked for.
pub const DEFAULT_TREE_SIZE: usize = 10;
