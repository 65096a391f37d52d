//! Tree adapters: BST search/insert/delete, AVL insert, depth-first
//! traversals.
//!
//! Adapters take the input [`BinaryTree`](algoviz_core::BinaryTree) by
//! reference, work on a private clone, and snapshot the whole clone into
//! each [`TreeFrame`](algoviz_core::TreeFrame). Mutating operations address
//! nodes by their path of left/right turns from the root, re-walking it for
//! every change so no borrow into the tree outlives a single edit.

pub mod avl;
pub mod bst;
pub mod traversal;

pub use avl::avl_insert;
pub use bst::{bst_delete, bst_insert, bst_search};
pub use traversal::{traverse, TraversalOrder};

use algoviz_core::TreeNode;

type Link = Option<Box<TreeNode>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    Left,
    Right,
}

/// Follows `path` from `slot`. Returns `None` if the path runs off the tree.
pub(crate) fn slot_mut<'a>(mut slot: &'a mut Link, path: &[Dir]) -> Option<&'a mut Link> {
    for dir in path {
        let node = slot.as_mut()?;
        slot = match dir {
            Dir::Left => &mut node.left,
            Dir::Right => &mut node.right,
        };
    }
    Some(slot)
}

/// Right rotation of the subtree in `slot`. No-op without a left child.
pub(crate) fn rotate_right(slot: &mut Link) {
    let Some(mut y) = slot.take() else {
        return;
    };
    let Some(mut x) = y.left.take() else {
        *slot = Some(y);
        return;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    *slot = Some(x);
}

/// Left rotation of the subtree in `slot`. No-op without a right child.
pub(crate) fn rotate_left(slot: &mut Link) {
    let Some(mut x) = slot.take() else {
        return;
    };
    let Some(mut y) = x.right.take() else {
        *slot = Some(x);
        return;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    *slot = Some(y);
}

/// Recomputes every stored height below `slot`; returns the subtree height.
pub(crate) fn recompute_heights(slot: &mut Link) -> u32 {
    match slot {
        None => 0,
        Some(node) => {
            let l = recompute_heights(&mut node.left);
            let r = recompute_heights(&mut node.right);
            node.height = 1 + l.max(r);
            node.height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::BinaryTree;

    #[test]
    fn rotations_restore_balance() {
        let mut tree = BinaryTree::from_values(&[1, 2, 3]);
        rotate_left(&mut tree.root);
        assert_eq!(tree.pre_order(), vec![2, 1, 3]);
        assert!(tree.is_balanced());

        let mut tree = BinaryTree::from_values(&[3, 2, 1]);
        rotate_right(&mut tree.root);
        assert_eq!(tree.pre_order(), vec![2, 1, 3]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn slot_mut_follows_path() {
        let mut tree = BinaryTree::from_values(&[5, 3, 8, 4]);
        let slot = slot_mut(&mut tree.root, &[Dir::Left, Dir::Right]).unwrap();
        assert_eq!(slot.as_ref().map(|n| n.value), Some(4));
        assert!(slot_mut(&mut tree.root, &[Dir::Right, Dir::Left, Dir::Left]).is_none());
    }
}
