//! Binary search tree search, insertion and deletion.
//!
//! One step per node visited on the way down, each naming the comparison
//! and the direction taken, followed by the operation's outcome.

use std::cmp::Ordering;

use algoviz_core::{BinaryTree, StepLog, TreeFrame, TreeNode};

use super::{recompute_heights, slot_mut, Dir};
use crate::recording::Recording;

/// Result of walking down towards `value`.
struct Descent {
    /// Turns taken from the root to the node holding `value`, or to the
    /// empty slot where it would go.
    path: Vec<Dir>,
    found: bool,
}

fn descend(tree: &BinaryTree, value: i64, log: &mut StepLog<TreeFrame>, frame: &mut TreeFrame) -> Descent {
    let mut path = Vec::new();
    let mut cursor = tree.root.as_deref();
    while let Some(node) = cursor {
        frame.current = Some(node.value);
        frame.path.push(node.value);
        match value.cmp(&node.value) {
            Ordering::Equal => return Descent { path, found: true },
            Ordering::Less => {
                log.record(
                    format!("Visiting {}: {value} < {}, moving left", node.value, node.value),
                    frame.clone(),
                );
                path.push(Dir::Left);
                cursor = node.left.as_deref();
            }
            Ordering::Greater => {
                log.record(
                    format!("Visiting {}: {value} > {}, moving right", node.value, node.value),
                    frame.clone(),
                );
                path.push(Dir::Right);
                cursor = node.right.as_deref();
            }
        }
    }
    Descent { path, found: false }
}

pub fn bst_search(tree: &BinaryTree, target: i64) -> Recording<TreeFrame> {
    let mut log = StepLog::new();
    let mut frame = TreeFrame::new(tree);
    log.record(format!("Searching for {target}"), frame.clone());

    let descent = descend(tree, target, &mut log, &mut frame);
    if descent.found {
        frame.found = Some(target);
        frame.output = vec![target];
        log.record(
            format!("Visiting {target}: found {target} in the tree"),
            frame,
        );
    } else {
        frame.current = None;
        log.record(format!("{target} not found in the tree"), frame);
    }
    Recording::completed(log)
}

pub fn bst_insert(tree: &BinaryTree, value: i64) -> Recording<TreeFrame> {
    let mut log = StepLog::new();
    let mut frame = TreeFrame::new(tree);
    log.record(format!("Inserting {value}"), frame.clone());

    let descent = descend(tree, value, &mut log, &mut frame);
    if descent.found {
        log.record(format!("{value} already exists in the tree"), frame);
        return Recording::completed(log);
    }

    let parent = frame.current;
    let mut working = tree.clone();
    if let Some(slot) = slot_mut(&mut working.root, &descent.path) {
        *slot = Some(Box::new(TreeNode::leaf(value)));
    }
    recompute_heights(&mut working.root);

    frame.tree = working;
    frame.current = Some(value);
    frame.highlight = Some(value);
    frame.path.push(value);
    let status = match (parent, descent.path.last()) {
        (Some(p), Some(Dir::Left)) => format!("Inserted {value} as left child of {p}"),
        (Some(p), Some(Dir::Right)) => format!("Inserted {value} as right child of {p}"),
        _ => format!("Inserted {value} as the root"),
    };
    log.record(status, frame);
    Recording::completed(log)
}

pub fn bst_delete(tree: &BinaryTree, value: i64) -> Recording<TreeFrame> {
    let mut log = StepLog::new();
    let mut frame = TreeFrame::new(tree);
    log.record(format!("Deleting {value}"), frame.clone());

    let descent = descend(tree, value, &mut log, &mut frame);
    if !descent.found {
        frame.current = None;
        log.record(format!("{value} not found in the tree"), frame);
        return Recording::completed(log);
    }

    let mut working = tree.clone();
    let Some(slot) = slot_mut(&mut working.root, &descent.path) else {
        return Recording::completed(log);
    };
    let Some(mut node) = slot.take() else {
        return Recording::completed(log);
    };

    match (node.left.take(), node.right.take()) {
        (None, None) => {
            log.record(format!("Found {value}: leaf node, removing it"), frame.clone());
        }
        (Some(child), None) | (None, Some(child)) => {
            log.record(
                format!(
                    "Found {value}: one child, replacing it with {}",
                    child.value
                ),
                frame.clone(),
            );
            *slot = Some(child);
        }
        (Some(left), Some(right)) => {
            log.record(
                format!("Found {value}: two children, finding in-order successor"),
                frame.clone(),
            );
            // Walk the right subtree's left spine for the successor.
            let mut successor = right.value;
            let mut cursor = Some(&right);
            while let Some(n) = cursor {
                successor = n.value;
                frame.highlight = Some(n.value);
                frame.path.push(n.value);
                log.record(format!("Visiting {} for successor", n.value), frame.clone());
                cursor = n.left.as_ref();
            }
            log.record(format!("Successor is {successor}"), frame.clone());

            node.left = Some(left);
            node.right = Some(right);
            if let Some(min) = take_min(&mut node.right) {
                node.value = min;
            }
            *slot = Some(node);
        }
    }

    recompute_heights(&mut working.root);
    frame.tree = working;
    frame.current = None;
    frame.highlight = None;
    log.record(format!("Deleted {value} from BST"), frame);
    Recording::completed(log)
}

/// Removes and returns the minimum value of a subtree.
fn take_min(slot: &mut Option<Box<TreeNode>>) -> Option<i64> {
    let node = slot.as_mut()?;
    if node.left.is_some() {
        return take_min(&mut node.left);
    }
    let mut node = slot.take()?;
    *slot = node.right.take();
    Some(node.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryTree {
        BinaryTree::from_values(&[50, 30, 70, 20, 40, 60, 80])
    }

    #[test]
    fn search_steps_follow_the_path() {
        let rec = bst_search(&sample(), 60);
        assert_eq!(
            rec.statuses(),
            vec![
                "Searching for 60",
                "Visiting 50: 60 > 50, moving right",
                "Visiting 70: 60 < 70, moving left",
                "Visiting 60: found 60 in the tree",
            ]
        );
        assert_eq!(rec.final_payload().unwrap().path, vec![50, 70, 60]);
    }

    #[test]
    fn search_miss() {
        let rec = bst_search(&sample(), 65);
        assert_eq!(rec.last().unwrap().status, "65 not found in the tree");
        assert_eq!(rec.final_payload().unwrap().found, None);
    }

    #[test]
    fn insert_adds_leaf_and_keeps_input_untouched() {
        let tree = sample();
        let rec = bst_insert(&tree, 65);
        assert_eq!(rec.last().unwrap().status, "Inserted 65 as right child of 60");
        let after = &rec.final_payload().unwrap().tree;
        assert!(after.contains(65));
        assert!(after.is_search_tree());
        assert!(!tree.contains(65));
        assert!(!rec.steps[0].payload.tree.contains(65));
    }

    #[test]
    fn insert_into_empty_tree() {
        let rec = bst_insert(&BinaryTree::new(), 5);
        assert_eq!(rec.last().unwrap().status, "Inserted 5 as the root");
    }

    #[test]
    fn delete_two_children_uses_successor() {
        let rec = bst_delete(&sample(), 50);
        let statuses = rec.statuses();
        assert!(statuses.contains(&"Successor is 60"));
        let after = &rec.final_payload().unwrap().tree;
        assert_eq!(after.in_order(), vec![20, 30, 40, 60, 70, 80]);
        assert_eq!(after.root.as_ref().unwrap().value, 60);
        assert!(after.is_search_tree());
    }

    #[test]
    fn delete_leaf_and_single_child() {
        let rec = bst_delete(&sample(), 20);
        assert!(rec.statuses().contains(&"Found 20: leaf node, removing it"));
        assert_eq!(rec.final_payload().unwrap().tree.len(), 6);

        let tree = BinaryTree::from_values(&[10, 5, 3]);
        let rec = bst_delete(&tree, 5);
        assert!(rec.statuses().contains(&"Found 5: one child, replacing it with 3"));
        let after = &rec.final_payload().unwrap().tree;
        assert_eq!(after.pre_order(), vec![10, 3]);
        assert_eq!(after.height(), 2);
    }

    #[test]
    fn delete_missing_value() {
        let rec = bst_delete(&sample(), 99);
        assert_eq!(rec.last().unwrap().status, "99 not found in the tree");
    }
}
