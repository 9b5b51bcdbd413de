pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{count_items, ItemOrder};
pub use mining::{fp_growth, fp_growth_algorithm, fp_growth_with};
pub use tree::{FPNode, FPTree, NodeId, NodeLinks, TransformedPrefixPath, ROOT};
