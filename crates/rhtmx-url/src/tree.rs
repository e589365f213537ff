//! Generic ordered tree
//!
//! Nodes are built bottom-up and never mutated afterwards, so a tree is
//! acyclic by construction. There are no parent links: code that needs the
//! ancestors of a node asks for the chain with [`TreeNode::path_to`].

use serde::{Deserialize, Serialize};

/// An immutable tree node: a value plus ordered children
///
/// Child order matters. The first child is the primary continuation of a
/// path; the remaining children are its siblings in other outlets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T, children: Vec<TreeNode<T>>) -> Self {
        Self { value, children }
    }

    /// Creates a node without children
    pub fn leaf(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&TreeNode<T>> {
        self.children.first()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Builds a new tree of the same shape with every value transformed
    pub fn map<U, F>(&self, f: F) -> TreeNode<U>
    where
        F: Fn(&T) -> U + Copy,
    {
        TreeNode {
            value: f(&self.value),
            children: self.children.iter().map(|child| child.map(f)).collect(),
        }
    }

    /// Depth-first, pre-order search for the first node whose value matches
    pub fn find<P>(&self, predicate: P) -> Option<&TreeNode<T>>
    where
        P: Fn(&T) -> bool + Copy,
    {
        if predicate(&self.value) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// Chain of nodes from `self` down to the first node matching `predicate`
    ///
    /// The first element is always `self` and the last is the match.
    /// Returns `None` if nothing in the subtree matches.
    pub fn path_to<P>(&self, predicate: P) -> Option<Vec<&TreeNode<T>>>
    where
        P: Fn(&T) -> bool + Copy,
    {
        let mut chain = Vec::new();
        if self.collect_path(predicate, &mut chain) {
            chain.reverse();
            Some(chain)
        } else {
            None
        }
    }

    // Pushes match-first while unwinding; the caller reverses once.
    fn collect_path<'a, P>(&'a self, predicate: P, chain: &mut Vec<&'a TreeNode<T>>) -> bool
    where
        P: Fn(&T) -> bool + Copy,
    {
        let found = predicate(&self.value)
            || self
                .children
                .iter()
                .any(|child| child.collect_path(predicate, chain));
        if found {
            chain.push(self);
        }
        found
    }

    /// Lazy iterator down the first-child chain, starting at `self`
    pub fn primary_chain(&self) -> PrimaryChain<'_, T> {
        PrimaryChain {
            current: Some(self),
        }
    }
}

impl<T: PartialEq> TreeNode<T> {
    /// Structural prefix containment
    ///
    /// `self` contains `other` when their values are equal and every child
    /// of `other` is contained by some child of `self`. A leaf is contained
    /// by any node holding an equal value.
    pub fn contains(&self, other: &TreeNode<T>) -> bool {
        self.value == other.value
            && other
                .children
                .iter()
                .all(|wanted| self.children.iter().any(|child| child.contains(wanted)))
    }
}

/// Iterator over a node and its first-child descendants
///
/// For `a/b/c` (rooted at `a`) yields `a` → `b` → `c`. Borrows from the
/// tree; no allocation.
pub struct PrimaryChain<'a, T> {
    current: Option<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for PrimaryChain<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.first_child();
        Some(node)
    }
}

impl<'a, T> Clone for PrimaryChain<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode<&'static str> {
        // root -> [a -> [b, c -> [d]], e]
        TreeNode::new(
            "root",
            vec![
                TreeNode::new(
                    "a",
                    vec![TreeNode::leaf("b"), TreeNode::new("c", vec![TreeNode::leaf("d")])],
                ),
                TreeNode::leaf("e"),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let tree = sample();
        assert_eq!(*tree.value(), "root");
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.first_child().map(|n| *n.value()), Some("a"));
        assert!(!tree.is_leaf());
        assert!(TreeNode::leaf(1).is_leaf());
    }

    #[test]
    fn test_primary_chain() {
        let tree = sample();
        let values: Vec<&str> = tree.primary_chain().map(|n| *n.value()).collect();
        assert_eq!(values, vec!["root", "a", "b"]);
    }

    #[test]
    fn test_find_is_depth_first() {
        let tree = sample();
        let found = tree.find(|v| v.len() == 1 && *v != "a");
        assert_eq!(found.map(|n| *n.value()), Some("b"));
        assert!(tree.find(|v| *v == "z").is_none());
    }

    #[test]
    fn test_path_to() {
        let tree = sample();
        let chain: Vec<&str> = tree
            .path_to(|v| *v == "d")
            .unwrap()
            .into_iter()
            .map(|n| *n.value())
            .collect();
        assert_eq!(chain, vec!["root", "a", "c", "d"]);

        let self_match = tree.path_to(|v| *v == "root").unwrap();
        assert_eq!(self_match.len(), 1);
        assert!(tree.path_to(|v| *v == "z").is_none());
    }

    #[test]
    fn test_path_to_long_chain() {
        let depth = 2_000;
        let mut node = TreeNode::leaf(depth);
        for value in (0..depth).rev() {
            node = TreeNode::new(value, vec![node]);
        }

        let chain = node.path_to(|v| *v == depth).unwrap();
        assert_eq!(chain.len(), depth + 1);
        let values: Vec<usize> = chain.iter().map(|n| *n.value()).collect();
        assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 1));
        assert_eq!(values[0], 0);
    }

    #[test]
    fn test_map_keeps_shape() {
        let tree = sample();
        let lengths = tree.map(|v| v.len());
        assert_eq!(*lengths.value(), 4);
        assert_eq!(lengths.children().len(), 2);
        assert_eq!(*lengths.children()[0].children()[1].children()[0].value(), 1);
    }

    #[test]
    fn test_contains() {
        let tree = sample();
        let prefix = TreeNode::new("root", vec![TreeNode::new("a", vec![TreeNode::leaf("c")])]);
        assert!(tree.contains(&prefix));
        assert!(tree.contains(&TreeNode::leaf("root")));

        let other = TreeNode::new("root", vec![TreeNode::leaf("b")]);
        assert!(!tree.contains(&other));
        assert!(!prefix.contains(&tree));
    }
}
