mod common;

use std::collections::BTreeSet;

use common::{brute_force_patterns, brute_force_support};
use fpgrowth::{fp_growth, fp_growth_with, FPTree};
use proptest::prelude::*;

/// Up to 12 transactions over items 0..6, each a set.
fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::btree_set(0u8..6, 0..=5).prop_map(|items| items.into_iter().collect::<Vec<u8>>()),
        0..=12,
    )
}

proptest! {
    #[test]
    fn prop_supports_match_brute_force(transactions in transactions_strategy(), min_support in 0u64..5) {
        let patterns = fp_growth(&FPTree::new(&transactions, min_support));

        for pattern in &patterns {
            prop_assert!(pattern.support >= min_support);
            prop_assert_eq!(pattern.support, brute_force_support(&transactions, &pattern.items));
        }

        let mined: BTreeSet<_> = patterns
            .iter()
            .map(|pattern| (pattern.items.clone(), pattern.support))
            .collect();
        prop_assert_eq!(mined, brute_force_patterns(&transactions, min_support));
    }

    #[test]
    fn prop_raising_threshold_only_removes(transactions in transactions_strategy(), min_support in 0u64..4) {
        let lower = fp_growth(&FPTree::new(&transactions, min_support));
        let higher = fp_growth(&FPTree::new(&transactions, min_support + 1));

        prop_assert!(higher.len() <= lower.len());
        for pattern in &higher {
            prop_assert!(lower.iter().any(|p| p == pattern));
        }
    }

    #[test]
    fn prop_mining_is_idempotent(transactions in transactions_strategy(), min_support in 1u64..4) {
        let tree = FPTree::new(&transactions, min_support);
        prop_assert_eq!(fp_growth(&tree), fp_growth(&tree));
    }

    #[test]
    fn prop_parallel_matches_sequential(transactions in transactions_strategy(), min_support in 1u64..4) {
        let tree = FPTree::new(&transactions, min_support);
        prop_assert_eq!(fp_growth_with(&tree, true), fp_growth_with(&tree, false));
    }

    #[test]
    fn prop_tree_invariants(transactions in transactions_strategy(), min_support in 0u64..4) {
        let tree = FPTree::new(&transactions, min_support);
        let nodes = tree.nodes();

        prop_assert!(tree.root().item.is_none());
        prop_assert!(tree.root().parent.is_none());

        for (idx, node) in nodes.iter().enumerate().skip(1) {
            let parent = node.parent.expect("non-root node has a parent");
            prop_assert!(nodes[parent].children.contains(&idx));
            if let Some(parent_item) = &nodes[parent].item {
                prop_assert!(nodes[parent].frequency >= node.frequency);
                prop_assert!(parent_item != node.item.as_ref().unwrap());
            }

            let child_items: BTreeSet<_> = node.children.iter().map(|&c| nodes[c].item).collect();
            prop_assert_eq!(child_items.len(), node.children.len());
        }

        // Chains visit every node of their item exactly once.
        let mut linked = 0;
        for item in tree.header_table().keys() {
            let support = tree.item_support(item);
            prop_assert!(support >= min_support);
            for idx in tree.node_links(item) {
                prop_assert_eq!(nodes[idx].item, Some(*item));
                linked += 1;
            }
        }
        prop_assert_eq!(linked, nodes.len() - 1);
    }
}
