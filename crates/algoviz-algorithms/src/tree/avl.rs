//! AVL insertion.
//!
//! Descends like a BST insert, attaches the new leaf, then walks back up
//! the insertion path refreshing heights. Any node whose balance factor
//! leaves `-1..=1` is rebalanced; a step naming the case (LL, RR, LR, RL)
//! is recorded before the rotation and another after it.

use std::cmp::Ordering;

use algoviz_core::{BinaryTree, Rotation, StepLog, TreeFrame, TreeNode};

use super::{rotate_left, rotate_right, slot_mut, Dir};
use crate::recording::Recording;

fn classify(node: &TreeNode) -> Option<Rotation> {
    let balance = node.balance_factor();
    if balance > 1 {
        let left = node.left.as_ref()?;
        Some(if left.balance_factor() >= 0 {
            Rotation::LeftLeft
        } else {
            Rotation::LeftRight
        })
    } else if balance < -1 {
        let right = node.right.as_ref()?;
        Some(if right.balance_factor() <= 0 {
            Rotation::RightRight
        } else {
            Rotation::RightLeft
        })
    } else {
        None
    }
}

fn describe(rotation: Rotation) -> &'static str {
    match rotation {
        Rotation::LeftLeft => "Left-Left case, performing right rotation",
        Rotation::RightRight => "Right-Right case, performing left rotation",
        Rotation::LeftRight => "Left-Right case, performing left-right rotation",
        Rotation::RightLeft => "Right-Left case, performing right-left rotation",
    }
}

fn apply(slot: &mut Option<Box<TreeNode>>, rotation: Rotation) {
    match rotation {
        Rotation::LeftLeft => rotate_right(slot),
        Rotation::RightRight => rotate_left(slot),
        Rotation::LeftRight => {
            if let Some(node) = slot.as_mut() {
                rotate_left(&mut node.left);
            }
            rotate_right(slot);
        }
        Rotation::RightLeft => {
            if let Some(node) = slot.as_mut() {
                rotate_right(&mut node.right);
            }
            rotate_left(slot);
        }
    }
}

pub fn avl_insert(tree: &BinaryTree, value: i64) -> Recording<TreeFrame> {
    let mut log = StepLog::new();
    let mut working = tree.clone();
    let mut frame = TreeFrame::new(&working);
    log.record(format!("Inserting {value} into AVL tree"), frame.clone());

    let mut path = Vec::new();
    let mut cursor = working.root.as_deref();
    while let Some(node) = cursor {
        frame.current = Some(node.value);
        frame.path.push(node.value);
        match value.cmp(&node.value) {
            Ordering::Equal => {
                log.record(format!("{value} already exists in the tree"), frame);
                return Recording::completed(log);
            }
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

    if let Some(slot) = slot_mut(&mut working.root, &path) {
        *slot = Some(Box::new(TreeNode::leaf(value)));
    }
    frame.tree = working.clone();
    frame.current = Some(value);
    frame.highlight = Some(value);
    frame.path.push(value);
    log.record(format!("Created new node for {value}"), frame.clone());
    frame.highlight = None;

    for depth in (0..path.len()).rev() {
        let inspected = slot_mut(&mut working.root, &path[..depth])
            .and_then(|slot| slot.as_mut())
            .map(|node| {
                node.update_height();
                (node.value, node.height, node.balance_factor(), classify(node))
            });
        let Some((node_value, height, balance, rotation)) = inspected else {
            break;
        };

        frame.tree = working.clone();
        frame.current = Some(node_value);
        frame.rotation = None;
        log.record(
            format!("Updated height of {node_value} to {height}, balance = {balance}"),
            frame.clone(),
        );

        let Some(rotation) = rotation else {
            continue;
        };
        frame.rotation = Some(rotation);
        log.record(
            format!("{rotation} at {node_value}: {}", describe(rotation)),
            frame.clone(),
        );
        if let Some(slot) = slot_mut(&mut working.root, &path[..depth]) {
            apply(slot, rotation);
        }
        frame.tree = working.clone();
        log.record(format!("{rotation} rotation at {node_value} complete"), frame.clone());
    }

    frame.tree = working;
    frame.current = None;
    frame.rotation = None;
    log.record(format!("Successfully inserted {value} into AVL tree"), frame);
    Recording::completed(log)
}
