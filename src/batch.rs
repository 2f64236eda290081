use crate::compare::{compare, Comparison};
use crate::error::Result;
use crate::treenodes::Tree;
use log::info;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

/// Compares every pair on the rayon pool. Results keep the order of `pairs`.
pub fn compare_all(pairs: &[(Tree, Tree)]) -> Result<Vec<Comparison>> {
    pairs.par_iter().map(|(a, b)| compare(a, b)).collect()
}

pub fn count_equal(pairs: &[(Tree, Tree)]) -> Result<usize> {
    let results = compare_all(pairs)?;
    let equal = results.iter().filter(|c| c.is_equal()).count();
    info!("{} of {} pairs equal", equal, results.len());
    Ok(equal)
}
