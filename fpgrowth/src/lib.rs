//! Frequent item-set mining with FP-growth.
//!
//! Transactions are compressed into an [`FPTree`] whose nodes live in an
//! arena and refer to each other by index. [`fp_growth`] then mines the
//! tree by recursively building conditional trees, one per header item.
//!
//! ```
//! use fpgrowth::{fp_growth, FPTree};
//!
//! let transactions = vec![vec!["A", "B"], vec!["B", "C"], vec!["A", "B", "C"]];
//! let tree = FPTree::new(&transactions, 2);
//! let patterns = fp_growth(&tree);
//!
//! assert_eq!(patterns.support(&["B"]), Some(3));
//! assert_eq!(patterns.support(&["A", "B"]), Some(2));
//! assert!(!patterns.contains(&["A", "C"]));
//! ```

pub mod config;
pub mod error;
pub mod fp;

pub use config::{DuplicatePolicy, MinSupport, MiningConfig};
pub use error::{MiningError, Result};
pub use fp::{fp_growth, fp_growth_algorithm, fp_growth_with};
pub use fp::{FPNode, FPTree, FrequentLevel, Item, NodeId, Pattern, PatternSet, TransformedPrefixPath};
