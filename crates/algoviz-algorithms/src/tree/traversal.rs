//! Depth-first traversals: in-order, pre-order, post-order.

use std::fmt;

use algoviz_core::{BinaryTree, StepLog, TreeFrame, TreeNode};
use serde::{Deserialize, Serialize};

use crate::recording::Recording;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraversalOrder::InOrder => "In-order",
            TraversalOrder::PreOrder => "Pre-order",
            TraversalOrder::PostOrder => "Post-order",
        })
    }
}

struct Walk {
    order: TraversalOrder,
    log: StepLog<TreeFrame>,
    frame: TreeFrame,
}

impl Walk {
    fn visit(&mut self, node: &TreeNode) {
        self.frame.current = Some(node.value);
        self.frame.path.push(node.value);
        self.frame.highlight = None;
        self.log
            .record(format!("Visiting node {}", node.value), self.frame.clone());

        if self.order == TraversalOrder::PreOrder {
            self.emit(node);
        }
        if let Some(left) = &node.left {
            self.visit(left);
        }
        if self.order == TraversalOrder::InOrder {
            self.emit(node);
        }
        if let Some(right) = &node.right {
            self.visit(right);
        }
        if self.order == TraversalOrder::PostOrder {
            self.emit(node);
        }
    }

    fn emit(&mut self, node: &TreeNode) {
        self.frame.current = Some(node.value);
        self.frame.highlight = Some(node.value);
        self.frame.output.push(node.value);
        self.log
            .record(format!("Processing node {}", node.value), self.frame.clone());
    }
}

pub fn traverse(tree: &BinaryTree, order: TraversalOrder) -> Recording<TreeFrame> {
    let mut walk = Walk {
        order,
        log: StepLog::new(),
        frame: TreeFrame::new(tree),
    };
    walk.log.record(
        format!("Starting {} traversal", order.to_string().to_lowercase()),
        walk.frame.clone(),
    );
    if let Some(root) = &tree.root {
        walk.visit(root);
    }

    let Walk { mut log, mut frame, .. } = walk;
    frame.current = None;
    frame.highlight = None;
    let listing = frame
        .output
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log.record(format!("{order} traversal completed: {listing}"), frame);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryTree {
        BinaryTree::from_values(&[4, 2, 6, 1, 3])
    }

    #[test]
    fn outputs_match_reference_orders() {
        let tree = sample();
        for (order, expected) in [
            (TraversalOrder::InOrder, tree.in_order()),
            (TraversalOrder::PreOrder, tree.pre_order()),
            (TraversalOrder::PostOrder, tree.post_order()),
        ] {
            let rec = traverse(&tree, order);
            assert_eq!(rec.final_payload().unwrap().output, expected, "{order}");
        }
    }

    #[test]
    fn path_records_visit_order() {
        let rec = traverse(&sample(), TraversalOrder::PostOrder);
        let last = rec.final_payload().unwrap();
        assert_eq!(last.path, vec![4, 2, 1, 3, 6]);
        assert_eq!(
            rec.last().unwrap().status,
            "Post-order traversal completed: 1, 3, 2, 6, 4"
        );
    }

    #[test]
    fn empty_tree() {
        let rec = traverse(&BinaryTree::new(), TraversalOrder::InOrder);
        assert_eq!(
            rec.statuses(),
            vec!["Starting in-order traversal", "In-order traversal completed: "]
        );
    }
}
