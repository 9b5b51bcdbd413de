use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use super::tree::FPTree;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::combinations::single_path_patterns;
use crate::fp::storage::{Pattern, PatternSet};
use crate::fp::Item;

/// Resolves `config` against `transactions`, builds the tree and mines it.
pub fn fp_growth_algorithm<T: Item, Tx: AsRef<[T]>>(
    transactions: &[Tx],
    config: &MiningConfig,
) -> Result<PatternSet<T>> {
    let min_count = config.min_support.resolve(transactions.len())?;
    let fp_tree = FPTree::try_new(transactions, min_count, config.duplicates)?;
    debug!(
        transactions = transactions.len(),
        min_count,
        frequent_items = fp_tree.header_table().len(),
        nodes = fp_tree.len(),
        "built fp-tree"
    );
    Ok(fp_growth_with(&fp_tree, config.parallel))
}

/// Every pattern of `fp_tree` meeting its threshold.
pub fn fp_growth<T: Item>(fp_tree: &FPTree<T>) -> PatternSet<T> {
    fp_growth_with(fp_tree, false)
}

/// Same as [`fp_growth`]; with `parallel` set, the items of each branching
/// tree are mined on the rayon pool.
#[instrument(
    level = "debug",
    skip_all,
    fields(threshold = fp_tree.minimum_support_threshold(), nodes = fp_tree.len(), parallel = parallel)
)]
pub fn fp_growth_with<T: Item>(fp_tree: &FPTree<T>, parallel: bool) -> PatternSet<T> {
    let patterns = fp_growth_recursive(fp_tree, parallel, 0);
    debug!(patterns = patterns.len(), "mining complete");
    PatternSet::from(patterns)
}

impl<T: Item> FPTree<T> {
    pub fn mine(&self) -> PatternSet<T> {
        fp_growth(self)
    }
}

fn fp_growth_recursive<T: Item>(
    fp_tree: &FPTree<T>,
    parallel: bool,
    depth: usize,
) -> BTreeSet<Pattern<T>> {
    if fp_tree.is_empty() {
        return BTreeSet::new();
    }

    if fp_tree.has_single_path() {
        let path = fp_tree.single_path();
        trace!(depth, path_len = path.len(), "single path");
        return single_path_patterns(&path);
    }

    if parallel {
        let items: Vec<&T> = fp_tree.header_table().keys().collect();
        items
            .par_iter()
            .map(|item| mine_item(fp_tree, item, parallel, depth))
            .reduce(BTreeSet::new, |mut merged, mut item_patterns| {
                merged.append(&mut item_patterns);
                merged
            })
    } else {
        let mut merged = BTreeSet::new();
        for item in fp_tree.header_table().keys() {
            merged.append(&mut mine_item(fp_tree, item, parallel, depth));
        }
        merged
    }
}

/// Patterns ending in `item`: the item alone plus the item added to
/// every pattern of its conditional tree.
fn mine_item<T: Item>(
    fp_tree: &FPTree<T>,
    item: &T,
    parallel: bool,
    depth: usize,
) -> BTreeSet<Pattern<T>> {
    let support = fp_tree.item_support(item);
    let prefix_paths = fp_tree.conditional_pattern_base(item);

    let mut item_patterns = BTreeSet::new();
    item_patterns.insert(Pattern::singleton(item.clone(), support));

    if prefix_paths.is_empty() {
        return item_patterns;
    }

    let conditional_tree =
        FPTree::from_weighted(&prefix_paths, fp_tree.minimum_support_threshold());
    trace!(
        depth,
        item = ?item,
        support,
        prefix_paths = prefix_paths.len(),
        conditional_nodes = conditional_tree.len(),
        "conditional tree"
    );

    for mut pattern in fp_growth_recursive(&conditional_tree, parallel, depth + 1) {
        pattern.items.insert(item.clone());
        item_patterns.insert(pattern);
    }

    item_patterns
}
