//! Traversal, ordering and filtering of built trees

use std::cmp::Ordering;

use super::node::{NodeKind, TreeNode};

/// Depth-first, pre-order iterator over a node and its descendants
///
/// Yields each node together with its depth relative to the starting node.
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

impl TreeNode {
    /// Iterates over this node and all descendants with their depth
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![(0, self)],
        }
    }

    /// Iterates over this node and all descendants in display order
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        self.descendants().map(|(_, node)| node)
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Finds the first node in display order matching the predicate
    pub fn find<P>(&self, mut predicate: P) -> Option<&Self>
    where
        P: FnMut(&Self) -> bool,
    {
        self.iter().find(|node| predicate(*node))
    }

    /// Finds the node of the given kind wrapping the given identifier
    pub fn find_by_identifier(&self, kind: &NodeKind, identifier: &str) -> Option<&Self> {
        self.find(|node| node.identifier == identifier && node.kind() == *kind)
    }

    /// Orders every sibling list by weight, then by case-insensitive name
    ///
    /// The sort is stable, so nodes comparing equal keep their build order.
    pub fn sort_by_weight(&mut self) {
        self.children.sort_by(compare_siblings);
        for child in &mut self.children {
            child.sort_by_weight();
        }
    }

    /// Returns a pruned copy containing only matches and their ancestors
    ///
    /// A node matches when its name or protocol contains `query`, ignoring
    /// case. A matching node keeps its entire subtree. An empty query keeps
    /// everything. Returns `None` if nothing in this subtree matches.
    #[must_use]
    pub fn filtered(&self, query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Some(self.clone());
        }
        self.filter_by(&needle)
    }

    fn filter_by(&self, needle: &str) -> Option<Self> {
        if self.matches(needle) {
            return Some(self.clone());
        }

        let children: Vec<Self> = self
            .children
            .iter()
            .filter_map(|child| child.filter_by(needle))
            .collect();

        if children.is_empty() {
            return None;
        }

        let mut node = self.shallow_clone();
        node.children = children;
        Some(node)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .protocol
                .as_deref()
                .is_some_and(|protocol| protocol.to_lowercase().contains(needle))
    }
}

fn compare_siblings(a: &TreeNode, b: &TreeNode) -> Ordering {
    a.weight
        .cmp(&b.weight)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}
