use std::fmt::Debug;
use std::hash::Hash;

pub mod combinations;
pub mod growth;
pub mod storage;


pub use growth::{fp_growth, fp_growth_algorithm, fp_growth_with};
pub use growth::{FPNode, FPTree, NodeId, TransformedPrefixPath};
pub use storage::{FrequentLevel, Pattern, PatternSet};

/// Anything usable as a transaction item. Ties between equally frequent
/// items are broken by `Ord`.
pub trait Item: Ord + Clone + Hash + Debug + Send + Sync {}

impl<T> Item for T where T: Ord + Clone + Hash + Debug + Send + Sync {}
