//! Tree lookups and copy-on-write rewrites
//!
//! Rewrites rebuild only the nodes on the path from the root to the changed
//! node. Siblings keep their original `Rc`, so untouched subtrees stay
//! pointer-equal to the previous layout.

use std::rc::Rc;

use crate::model::{DockLayout, LayoutNode, NodeId, SplitNode, TabGroupNode};

/// Find a tab group by id (depth-first)
pub fn find_group<'a>(node: &'a LayoutNode, group_id: &str) -> Option<&'a TabGroupNode> {
    match node {
        LayoutNode::TabGroup(group) => (group.id.as_str() == group_id).then_some(group),
        LayoutNode::Split(split) => split
            .children
            .iter()
            .find_map(|child| find_group(child, group_id)),
    }
}

/// Find a split node by id (depth-first)
pub fn find_split<'a>(node: &'a LayoutNode, split_id: &str) -> Option<&'a SplitNode> {
    match node {
        LayoutNode::TabGroup(_) => None,
        LayoutNode::Split(split) if split.id.as_str() == split_id => Some(split),
        LayoutNode::Split(split) => split
            .children
            .iter()
            .find_map(|child| find_split(child, split_id)),
    }
}

/// Id of the tab group currently holding `pane_id`, if the pane is open
pub fn find_group_id_for_pane(layout: &DockLayout, pane_id: &str) -> Option<NodeId> {
    find_group_for_pane(&layout.root, pane_id).map(|group| group.id.clone())
}

fn find_group_for_pane<'a>(node: &'a LayoutNode, pane_id: &str) -> Option<&'a TabGroupNode> {
    match node {
        LayoutNode::TabGroup(group) => group.contains(pane_id).then_some(group),
        LayoutNode::Split(split) => split
            .children
            .iter()
            .find_map(|child| find_group_for_pane(child, pane_id)),
    }
}

/// Rewrite the first node with `id` for which `f` returns a replacement.
///
/// Returns `None` when nothing was replaced, in which case the caller keeps
/// its original tree.
pub fn rewrite_node<F>(node: &Rc<LayoutNode>, id: &str, f: &mut F) -> Option<Rc<LayoutNode>>
where
    F: FnMut(&LayoutNode) -> Option<LayoutNode>,
{
    if node.id().as_str() == id {
        if let Some(replacement) = f(node) {
            return Some(Rc::new(replacement));
        }
    }

    let LayoutNode::Split(split) = node.as_ref() else {
        return None;
    };

    for (index, child) in split.children.iter().enumerate() {
        if let Some(next) = rewrite_node(child, id, f) {
            let mut children = split.children.clone();
            children[index] = next;
            return Some(Rc::new(LayoutNode::Split(SplitNode {
                id: split.id.clone(),
                direction: split.direction,
                children,
                sizes: split.sizes.clone(),
            })));
        }
    }
    None
}

/// Rewrite a tab group by id
pub fn rewrite_group<F>(node: &Rc<LayoutNode>, group_id: &str, mut f: F) -> Option<Rc<LayoutNode>>
where
    F: FnMut(&TabGroupNode) -> Option<TabGroupNode>,
{
    rewrite_node(node, group_id, &mut |candidate| match candidate {
        LayoutNode::TabGroup(group) => f(group).map(LayoutNode::TabGroup),
        LayoutNode::Split(_) => None,
    })
}

/// Rewrite a split node by id
pub fn rewrite_split<F>(node: &Rc<LayoutNode>, split_id: &str, mut f: F) -> Option<Rc<LayoutNode>>
where
    F: FnMut(&SplitNode) -> Option<SplitNode>,
{
    rewrite_node(node, split_id, &mut |candidate| match candidate {
        LayoutNode::Split(split) => f(split).map(LayoutNode::Split),
        LayoutNode::TabGroup(_) => None,
    })
}
