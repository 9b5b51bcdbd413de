use std::collections::{HashMap, HashSet};

use crate::fp::Item;

/// Counts, for each item, the number of transactions containing it.
///
/// An item repeated inside one transaction is counted once.
pub fn count_items<T: Item, Tx: AsRef<[T]>>(transactions: &[Tx]) -> HashMap<T, u64> {
    count_weighted(transactions.iter().map(|tx| (tx.as_ref(), 1)))
}

/// Same as [`count_items`], with each transaction standing for `weight`
/// identical copies of itself.
pub fn count_weighted<'a, T, I>(transactions: I) -> HashMap<T, u64>
where
    T: Item + 'a,
    I: IntoIterator<Item = (&'a [T], u64)>,
{
    let mut item_counts: HashMap<T, u64> = HashMap::new();
    let mut seen: HashSet<&T> = HashSet::new();

    for (transaction, weight) in transactions {
        seen.clear();
        for item in transaction {
            if seen.insert(item) {
                *item_counts.entry(item.clone()).or_insert(0) += weight;
            }
        }
    }

    item_counts
}

/// Returns the first `(transaction index, item)` where an item repeats.
pub fn find_duplicate<T: Item, Tx: AsRef<[T]>>(transactions: &[Tx]) -> Option<(usize, &T)> {
    let mut seen: HashSet<&T> = HashSet::new();
    for (tx_idx, transaction) in transactions.iter().enumerate() {
        seen.clear();
        for item in transaction.as_ref() {
            if !seen.insert(item) {
                return Some((tx_idx, item));
            }
        }
    }
    None
}

/// The global item order of one tree: frequent items only, by descending
/// count, ties broken by ascending item.
#[derive(Debug, Clone)]
pub struct ItemOrder<T> {
    items: Vec<(T, u64)>,
    ranks: HashMap<T, usize>,
}

impl<T: Item> ItemOrder<T> {
    /// Keeps every item whose count is not below `min_count`.
    pub fn from_counts(item_counts: HashMap<T, u64>, min_count: u64) -> Self {
        let mut frequent_items: Vec<(T, u64)> = item_counts
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect();

        frequent_items.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let ranks = frequent_items
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();

        Self {
            items: frequent_items,
            ranks,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rank(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn count(&self, item: &T) -> Option<u64> {
        self.rank(item).map(|rank| self.items[rank].1)
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(item, _)| item)
    }

    /// The frequent items of `transaction` in global order, each once.
    pub fn order_transaction<'a>(&self, transaction: &'a [T]) -> Vec<&'a T> {
        let mut filtered: Vec<(usize, &T)> = transaction
            .iter()
            .filter_map(|item| self.rank(item).map(|rank| (rank, item)))
            .collect();

        filtered.sort_unstable_by_key(|&(rank, _)| rank);
        filtered.dedup_by_key(|&mut (rank, _)| rank);
        filtered.into_iter().map(|(_, item)| item).collect()
    }
}
