#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fpgrowth=debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );
        if subscriber.try_init().is_err() {
            eprintln!("Tracing subscriber already set");
        }
        info!("Test Setup complete");
    });
}

/// Number of transactions whose item set is a superset of `itemset`.
pub fn brute_force_support<T: Ord>(transactions: &[Vec<T>], itemset: &BTreeSet<T>) -> u64 {
    transactions
        .iter()
        .filter(|tx| itemset.iter().all(|item| tx.contains(item)))
        .count() as u64
}

/// Every item-set over the distinct items of `transactions` with support
/// at least `min_support`; exponential, for small inputs only.
pub fn brute_force_patterns<T: Ord + Clone>(
    transactions: &[Vec<T>],
    min_support: u64,
) -> BTreeSet<(BTreeSet<T>, u64)> {
    let universe: Vec<T> = transactions
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect();

    let mut patterns = BTreeSet::new();
    for mask in 1u64..(1u64 << universe.len()) {
        let itemset: BTreeSet<T> = universe
            .iter()
            .enumerate()
            .filter(|&(idx, _)| mask & (1u64 << idx) != 0)
            .map(|(_, item)| item.clone())
            .collect();
        let support = brute_force_support(transactions, &itemset);
        if support > 0 && support >= min_support {
            patterns.insert((itemset, support));
        }
    }
    patterns
}
