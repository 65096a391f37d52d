//! Binary search tree model used by the tree-category adapters.
//!
//! Every node exclusively owns its children (`Option<Box<TreeNode>>`), so a
//! tree can never share subtrees or contain cycles. Cloning a [`BinaryTree`]
//! is a deep copy, which is exactly what a step snapshot needs.
//!
//! Trees are built fresh from a value list via repeated BST insertion
//! ([`BinaryTree::from_values`]); duplicate values are ignored.

use serde::{Deserialize, Serialize};

use crate::id::RenderKey;

/// A single tree node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: i64,
    /// Height of the subtree rooted here (a leaf has height 1).
    pub height: u32,
    /// Render handle; carries no algorithmic meaning.
    pub key: RenderKey,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a leaf with a fresh render key.
    pub fn leaf(value: i64) -> Self {
        TreeNode {
            value,
            height: 1,
            key: RenderKey::fresh(),
            left: None,
            right: None,
        }
    }

    /// Recomputes this node's height from its children.
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    pub fn balance_factor(&self) -> i64 {
        height(&self.left) as i64 - height(&self.right) as i64
    }
}

/// Height of an optional subtree (0 for an empty one).
pub fn height(node: &Option<Box<TreeNode>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

/// An owned binary tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinaryTree {
    pub root: Option<Box<TreeNode>>,
}

impl BinaryTree {
    pub fn new() -> Self {
        BinaryTree { root: None }
    }

    /// Builds a BST by inserting `values` in order.
    pub fn from_values(values: &[i64]) -> Self {
        let mut tree = BinaryTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    /// Plain BST insertion. Returns `false` if the value was already present.
    pub fn insert(&mut self, value: i64) -> bool {
        fn go(slot: &mut Option<Box<TreeNode>>, value: i64) -> bool {
            match slot {
                None => {
                    *slot = Some(Box::new(TreeNode::leaf(value)));
                    true
                }
                Some(node) => {
                    let inserted = if value < node.value {
                        go(&mut node.left, value)
                    } else if value > node.value {
                        go(&mut node.right, value)
                    } else {
                        false
                    };
                    node.update_height();
                    inserted
                }
            }
        }
        go(&mut self.root, value)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        fn count(node: &Option<Box<TreeNode>>) -> usize {
            node.as_ref()
                .map_or(0, |n| 1 + count(&n.left) + count(&n.right))
        }
        count(&self.root)
    }

    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut cursor = &self.root;
        while let Some(node) = cursor {
            if value == node.value {
                return true;
            }
            cursor = if value < node.value {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }

    /// Values in left-root-right order.
    pub fn in_order(&self) -> Vec<i64> {
        fn go(node: &Option<Box<TreeNode>>, out: &mut Vec<i64>) {
            if let Some(n) = node {
                go(&n.left, out);
                out.push(n.value);
                go(&n.right, out);
            }
        }
        let mut out = Vec::new();
        go(&self.root, &mut out);
        out
    }

    /// Values in root-left-right order.
    pub fn pre_order(&self) -> Vec<i64> {
        fn go(node: &Option<Box<TreeNode>>, out: &mut Vec<i64>) {
            if let Some(n) = node {
                out.push(n.value);
                go(&n.left, out);
                go(&n.right, out);
            }
        }
        let mut out = Vec::new();
        go(&self.root, &mut out);
        out
    }

    /// Values in left-right-root order.
    pub fn post_order(&self) -> Vec<i64> {
        fn go(node: &Option<Box<TreeNode>>, out: &mut Vec<i64>) {
            if let Some(n) = node {
                go(&n.left, out);
                go(&n.right, out);
                out.push(n.value);
            }
        }
        let mut out = Vec::new();
        go(&self.root, &mut out);
        out
    }

    /// Breadth-first listing with `None` holes, trimmed after the last
    /// non-empty level. Useful for comparing shapes.
    pub fn level_order(&self) -> Vec<Option<i64>> {
        let mut out = Vec::new();
        let mut level: Vec<Option<&TreeNode>> = vec![self.root.as_deref()];
        while level.iter().any(|n| n.is_some()) {
            let mut next = Vec::with_capacity(level.len() * 2);
            for slot in &level {
                out.push(slot.map(|n| n.value));
                match slot {
                    Some(n) => {
                        next.push(n.left.as_deref());
                        next.push(n.right.as_deref());
                    }
                    None => {
                        next.push(None);
                        next.push(None);
                    }
                }
            }
            level = next;
        }
        out
    }

    /// Checks the BST ordering invariant (strict, no duplicates).
    pub fn is_search_tree(&self) -> bool {
        self.in_order().windows(2).all(|w| w[0] < w[1])
    }

    /// Checks that every node has balance factor in `-1..=1` and a correct
    /// stored height.
    pub fn is_balanced(&self) -> bool {
        fn go(node: &Option<Box<TreeNode>>) -> Option<u32> {
            match node {
                None => Some(0),
                Some(n) => {
                    let l = go(&n.left)?;
                    let r = go(&n.right)?;
                    let h = 1 + l.max(r);
                    if l.abs_diff(r) > 1 || h != n.height {
                        None
                    } else {
                        Some(h)
                    }
                }
            }
        }
        go(&self.root).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_builds_bst() {
        let tree = BinaryTree::from_values(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.pre_order(), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(tree.post_order(), vec![20, 40, 30, 60, 80, 70, 50]);
        assert!(tree.is_search_tree());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = BinaryTree::from_values(&[5, 3, 5, 3]);
        assert_eq!(tree.len(), 2);
        assert!(!tree.insert(3));
        assert!(tree.insert(4));
        assert!(tree.contains(4));
        assert!(!tree.contains(9));
    }

    #[test]
    fn level_order_shows_holes() {
        let tree = BinaryTree::from_values(&[2, 3]);
        assert_eq!(tree.level_order(), vec![Some(2), None, Some(3)]);
    }

    #[test]
    fn clone_is_deep() {
        let tree = BinaryTree::from_values(&[2, 1, 3]);
        let mut copy = tree.clone();
        copy.insert(4);
        assert_eq!(tree.len(), 3);
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn degenerate_tree_is_not_balanced() {
        let tree = BinaryTree::from_values(&[1, 2, 3]);
        assert_eq!(tree.height(), 3);
        assert!(!tree.is_balanced());
        assert!(BinaryTree::from_values(&[2, 1, 3]).is_balanced());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn in_order_is_sorted_and_deduplicated(values in prop::collection::vec(-50i64..50, 0..40)) {
            let tree = BinaryTree::from_values(&values);
            let mut expected = values.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(tree.in_order(), expected);
            prop_assert!(tree.is_search_tree());
        }
    }
}
