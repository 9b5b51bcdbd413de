use std::collections::btree_set;
use std::collections::BTreeSet;

/// A frequent item-set with the number of transactions containing it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern<T> {
    pub items: BTreeSet<T>,
    pub support: u64,
}

impl<T: Ord> Pattern<T> {
    pub fn new(items: BTreeSet<T>, support: u64) -> Self {
        Self { items, support }
    }

    pub fn singleton(item: T, support: u64) -> Self {
        Self {
            items: BTreeSet::from([item]),
            support,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The result of a mining run: a set of `(item-set, support)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet<T> {
    patterns: BTreeSet<Pattern<T>>,
}

impl<T> Default for PatternSet<T> {
    fn default() -> Self {
        Self {
            patterns: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone> PatternSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn insert(&mut self, pattern: Pattern<T>) -> bool {
        self.patterns.insert(pattern)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Pattern<T>> {
        self.patterns.iter()
    }

    /// Support of the item-set made of `items`, if it was found frequent.
    pub fn support(&self, items: &[T]) -> Option<u64> {
        let key: BTreeSet<T> = items.iter().cloned().collect();
        let probe = Pattern::new(key, 0);
        self.patterns
            .range(probe.clone()..)
            .next()
            .filter(|pattern| pattern.items == probe.items)
            .map(|pattern| pattern.support)
    }

    pub fn contains(&self, items: &[T]) -> bool {
        self.support(items).is_some()
    }

    pub fn max_len(&self) -> usize {
        self.patterns.iter().map(Pattern::len).max().unwrap_or(0)
    }

    /// Groups patterns by size: level `i` holds the `(i + 1)`-item-sets.
    pub fn into_levels(self) -> Vec<FrequentLevel<T>> {
        let mut levels: Vec<FrequentLevel<T>> = Vec::new();
        for pattern in self.patterns {
            let size = pattern.len();
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[size - 1].add_itemset_with_support(pattern.items, pattern.support);
        }
        levels
    }
}

impl<T> From<BTreeSet<Pattern<T>>> for PatternSet<T> {
    fn from(patterns: BTreeSet<Pattern<T>>) -> Self {
        Self { patterns }
    }
}

impl<T: Ord> FromIterator<Pattern<T>> for PatternSet<T> {
    fn from_iter<I: IntoIterator<Item = Pattern<T>>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for PatternSet<T> {
    type Item = Pattern<T>;
    type IntoIter = btree_set::IntoIter<Pattern<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PatternSet<T> {
    type Item = &'a Pattern<T>;
    type IntoIter = btree_set::Iter<'a, Pattern<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[derive(Debug, Clone)]
pub struct FrequentLevel<T> {
    items: Vec<T>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<u64>,
    pub itemset_size: usize,
}

impl<T> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
            itemset_size,
        }
    }

    pub fn add_itemset_with_support<I>(&mut self, items: I, support: u64) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.items.len();
        self.items.extend(items);
        let length = self.items.len() - start;
        debug_assert_eq!(length, self.itemset_size);

        self.offsets.push((start, length));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        let (start, length) = self.offsets[idx];
        &self.items[start..start + length]
    }

    pub fn support(&self, idx: usize) -> u64 {
        self.supports[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[T]> {
        (0..self.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[T], u64)> {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.supports[idx]))
    }
}
