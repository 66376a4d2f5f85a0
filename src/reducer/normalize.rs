//! Post-edit tree repair
//!
//! Runs bottom-up after every structural edit:
//! - empty tab groups are pruned (the root group is kept even when empty)
//! - splits drop pruned children along with their sizes
//! - a split left with one child is replaced by that child
//! - a split left with no children is pruned, or becomes the empty sentinel
//!   group when it is the root
//! - sizes are reset to an even split when a child was dropped or the
//!   existing sizes are malformed

use std::rc::Rc;

use tracing::debug;

use super::resize::sizes_are_valid;
use crate::model::{LayoutNode, SplitNode, TabGroupNode};

/// Normalize a whole tree. Returns the same `Rc` when nothing needed fixing.
pub fn normalize(root: &Rc<LayoutNode>) -> Rc<LayoutNode> {
    normalize_node(root, true)
        .unwrap_or_else(|| Rc::new(LayoutNode::TabGroup(TabGroupNode::empty_sentinel())))
}

/// `None` means the node was pruned from its parent
fn normalize_node(node: &Rc<LayoutNode>, is_root: bool) -> Option<Rc<LayoutNode>> {
    let split = match node.as_ref() {
        LayoutNode::TabGroup(group) => {
            if group.pane_ids.is_empty() && !is_root {
                debug!(group = %group.id, "pruning empty tab group");
                return None;
            }
            return Some(Rc::clone(node));
        }
        LayoutNode::Split(split) => split,
    };

    let mut children = Vec::with_capacity(split.children.len());
    let mut dropped = false;
    let mut child_changed = false;

    for child in &split.children {
        match normalize_node(child, false) {
            Some(next) => {
                child_changed |= !Rc::ptr_eq(&next, child);
                children.push(next);
            }
            None => dropped = true,
        }
    }

    match children.len() {
        0 if is_root => {
            debug!(split = %split.id, "root split emptied, using empty group");
            Some(Rc::new(LayoutNode::TabGroup(TabGroupNode::empty_sentinel())))
        }
        0 => {
            debug!(split = %split.id, "pruning empty split");
            None
        }
        1 => {
            debug!(split = %split.id, "collapsing single-child split");
            children.pop()
        }
        count => {
            let keep_sizes = !dropped && sizes_are_valid(&split.sizes, count);
            if keep_sizes && !child_changed {
                return Some(Rc::clone(node));
            }

            let sizes = if keep_sizes {
                split.sizes.clone()
            } else {
                debug!(split = %split.id, count, "resetting split sizes");
                even_sizes(count)
            };

            Some(Rc::new(LayoutNode::Split(SplitNode {
                id: split.id.clone(),
                direction: split.direction,
                children,
                sizes,
            })))
        }
    }
}

fn even_sizes(count: usize) -> Vec<f64> {
    vec![100.0 / count as f64; count]
}
