use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use super::builder::{count_weighted, find_duplicate, ItemOrder};
use crate::config::DuplicatePolicy;
use crate::error::{MiningError, Result};
use crate::fp::Item;

pub type NodeId = usize;

/// The sentinel root always sits at the start of the arena.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub struct FPNode<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub frequency: u64,
    pub parent: Option<NodeId>,
    pub node_link: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl<T> FPNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            frequency: 0,
            parent: None,
            node_link: None,
            children: Vec::new(),
        }
    }

    pub fn new_item(item: T, frequency: u64, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            frequency,
            parent: Some(parent),
            node_link: None,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A prefix path collected for one item: the items above one of its nodes,
/// nearest first, with that node's frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedPrefixPath<T> {
    pub items: Vec<T>,
    pub count: u64,
}

impl<T: Clone> TransformedPrefixPath<T> {
    pub fn expand(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        (0..self.count).map(move |_| self.items.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FPTree<T> {
    nodes: Vec<FPNode<T>>,
    header_table: BTreeMap<T, NodeId>,
    minimum_support_threshold: u64,
}

impl<T: Item> FPTree<T> {
    /// Builds the tree of `transactions`, keeping items that occur in at
    /// least `minimum_support_threshold` of them. Repeated items inside a
    /// transaction count once.
    pub fn new<Tx: AsRef<[T]>>(transactions: &[Tx], minimum_support_threshold: u64) -> Self {
        Self::build(
            transactions.iter().map(|tx| (tx.as_ref(), 1)),
            minimum_support_threshold,
        )
    }

    /// Like [`FPTree::new`], applying `policy` to repeated items.
    pub fn try_new<Tx: AsRef<[T]>>(
        transactions: &[Tx],
        minimum_support_threshold: u64,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        if policy == DuplicatePolicy::Reject {
            if let Some((transaction, item)) = find_duplicate(transactions) {
                return Err(MiningError::DuplicateItem {
                    transaction,
                    item: format!("{:?}", item),
                });
            }
        }
        Ok(Self::new(transactions, minimum_support_threshold))
    }

    /// Builds a tree where every path stands for `count` identical
    /// transactions. Zero-count paths are ignored.
    pub fn from_weighted(
        paths: &[TransformedPrefixPath<T>],
        minimum_support_threshold: u64,
    ) -> Self {
        Self::build(
            paths.iter().map(|path| (path.items.as_slice(), path.count)),
            minimum_support_threshold,
        )
    }

    fn build<'a, I>(transactions: I, minimum_support_threshold: u64) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = (&'a [T], u64)> + Clone,
    {
        let item_counts = count_weighted(transactions.clone());
        let order = ItemOrder::from_counts(item_counts, minimum_support_threshold);

        let mut fp_tree = Self::empty(minimum_support_threshold);
        // Chain tails, so appending a node does not rescan its chain.
        let mut tails: HashMap<T, NodeId> = HashMap::new();

        if !order.is_empty() {
            for (transaction, weight) in transactions {
                if weight == 0 {
                    continue;
                }
                let tx_items = order.order_transaction(transaction);
                if !tx_items.is_empty() {
                    fp_tree.insert_transaction(&tx_items, weight, &mut tails);
                }
            }
        }

        trace!(
            frequent_items = order.len(),
            nodes = fp_tree.nodes.len(),
            threshold = minimum_support_threshold,
            "inserted transactions"
        );
        fp_tree
    }

    fn empty(minimum_support_threshold: u64) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: BTreeMap::new(),
            minimum_support_threshold,
        }
    }

    /// Inserts items already filtered and sorted in the global order.
    fn insert_transaction(&mut self, transaction: &[&T], weight: u64, tails: &mut HashMap<T, NodeId>) {
        let mut current_index = ROOT;

        for &item in transaction {
            let existing = self.nodes[current_index]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].item.as_ref() == Some(item));

            current_index = match existing {
                Some(child_index) => {
                    self.nodes[child_index].frequency += weight;
                    child_index
                }
                None => {
                    let new_index = self.nodes.len();
                    self.nodes
                        .push(FPNode::new_item(item.clone(), weight, current_index));
                    self.nodes[current_index].children.push(new_index);

                    match tails.insert(item.clone(), new_index) {
                        Some(tail_index) => self.nodes[tail_index].node_link = Some(new_index),
                        None => {
                            self.header_table.insert(item.clone(), new_index);
                        }
                    }
                    new_index
                }
            };
        }
    }

    pub fn is_empty(&self) -> bool {
        self.header_table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> &FPNode<T> {
        &self.nodes[ROOT]
    }

    pub fn node(&self, index: NodeId) -> Option<&FPNode<T>> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[FPNode<T>] {
        &self.nodes
    }

    pub fn header_table(&self) -> &BTreeMap<T, NodeId> {
        &self.header_table
    }

    pub fn minimum_support_threshold(&self) -> u64 {
        self.minimum_support_threshold
    }

    pub fn node_links(&self, item: &T) -> NodeLinks<'_, T> {
        NodeLinks {
            nodes: &self.nodes,
            next: self.header_table.get(item).copied(),
        }
    }

    pub fn item_support(&self, item: &T) -> u64 {
        self.node_links(item)
            .map(|idx| self.nodes[idx].frequency)
            .sum()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = ROOT;

        loop {
            match self.nodes[current_index].children.as_slice() {
                [] => return true,
                [only_child] => current_index = *only_child,
                _ => return false,
            }
        }
    }

    /// The `(item, frequency)` pairs from the root's first child down to
    /// the first leaf. Only meaningful when [`has_single_path`] holds.
    ///
    /// [`has_single_path`]: FPTree::has_single_path
    pub fn single_path(&self) -> Vec<(T, u64)> {
        let mut path = Vec::new();
        let mut current_index = ROOT;

        while let Some(&child_index) = self.nodes[current_index].children.first() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.frequency));
            }
            current_index = child_index;
        }
        path
    }

    /// Collects the prefix paths of every node carrying `item`. Nodes
    /// hanging directly off the root have an empty prefix and are skipped.
    pub fn conditional_pattern_base(&self, item: &T) -> Vec<TransformedPrefixPath<T>> {
        self.node_links(item)
            .filter_map(|idx| {
                let node = &self.nodes[idx];
                let mut items = Vec::new();
                let mut current = node.parent;

                while let Some(i) = current {
                    let path_node = &self.nodes[i];
                    if let Some(path_item) = &path_node.item {
                        items.push(path_item.clone());
                    }
                    current = path_node.parent;
                }

                (!items.is_empty()).then(|| TransformedPrefixPath {
                    items,
                    count: node.frequency,
                })
            })
            .collect()
    }
}

pub struct NodeLinks<'a, T> {
    nodes: &'a [FPNode<T>],
    next: Option<NodeId>,
}

impl<T> Iterator for NodeLinks<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.nodes[current].node_link;
        Some(current)
    }
}
