use std::collections::BTreeSet;

use super::storage::Pattern;
use super::Item;

/// Every non-empty subset of a single-path tree, each supported by the
/// smallest node frequency among its members.
pub fn single_path_patterns<T: Item>(path: &[(T, u64)]) -> BTreeSet<Pattern<T>> {
    let mut patterns = BTreeSet::new();
    let indices: Vec<usize> = (0..path.len()).collect();

    for k in 1..=path.len() {
        let mut callback = |combination: &[usize]| {
            let items = combination.iter().map(|&idx| path[idx].0.clone()).collect();
            let support = combination
                .iter()
                .map(|&idx| path[idx].1)
                .min()
                .unwrap_or(0);
            patterns.insert(Pattern::new(items, support));
        };
        generate_combinations_recursive(&indices, k, 0, &mut Vec::with_capacity(k), &mut callback);
    }

    patterns
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
