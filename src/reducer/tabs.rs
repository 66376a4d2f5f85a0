//! Tab reducers: activate, close, reorder, move and restore panes
//!
//! Each reducer returns the input `Rc` untouched when the command does not
//! apply, so callers can skip work with `Rc::ptr_eq`.

use std::rc::Rc;

use tracing::trace;

use super::normalize::normalize;
use super::tree::{find_group, rewrite_group};
use crate::model::{DockLayout, LayoutNode, PaneId, TabGroupNode};

/// Options for reopening a closed pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Insert position; appended when `None`, clamped to the group length
    pub index: Option<usize>,
    /// Make the restored pane the active one
    pub activate: bool,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            index: None,
            activate: true,
        }
    }
}

/// Wrap a rewritten root, normalizing it first
fn commit(layout: &Rc<DockLayout>, root: Option<Rc<LayoutNode>>) -> Rc<DockLayout> {
    match root {
        Some(root) => Rc::new(layout.with_root(normalize(&root))),
        None => Rc::clone(layout),
    }
}

/// Remove `pane_id` from a group. When it was active, the left neighbor takes
/// over, then the pane that slid into its slot, otherwise nothing is active.
fn remove_pane(group: &TabGroupNode, pane_id: &str) -> Option<TabGroupNode> {
    let index = group.index_of(pane_id)?;
    let mut pane_ids = group.pane_ids.clone();
    pane_ids.remove(index);

    let active_pane_id = if group.is_active(pane_id) {
        let neighbor = if index > 0 { index - 1 } else { index };
        pane_ids.get(neighbor).cloned()
    } else {
        group.active_pane_id.clone()
    };

    Some(TabGroupNode {
        id: group.id.clone(),
        pane_ids,
        active_pane_id,
    })
}

/// Insert `pane_id` at `index` (clamped), optionally making it active
fn insert_pane(group: &TabGroupNode, pane_id: &PaneId, index: usize, activate: bool) -> TabGroupNode {
    let mut pane_ids = group.pane_ids.clone();
    let index = index.min(pane_ids.len());
    pane_ids.insert(index, pane_id.clone());

    // an empty group has nothing else to show
    let active_pane_id = if activate || group.active_pane_id.is_none() {
        Some(pane_id.clone())
    } else {
        group.active_pane_id.clone()
    };

    TabGroupNode {
        id: group.id.clone(),
        pane_ids,
        active_pane_id,
    }
}

/// Make `pane_id` the visible tab of `group_id`
pub fn reduce_set_active_pane(
    layout: &Rc<DockLayout>,
    group_id: &str,
    pane_id: &str,
) -> Rc<DockLayout> {
    let root = rewrite_group(&layout.root, group_id, |group| {
        if !group.contains(pane_id) || group.is_active(pane_id) {
            return None;
        }
        Some(TabGroupNode {
            id: group.id.clone(),
            pane_ids: group.pane_ids.clone(),
            active_pane_id: Some(PaneId::from(pane_id)),
        })
    });

    match root {
        Some(root) => Rc::new(layout.with_root(root)),
        None => {
            trace!(group_id, pane_id, "set active: no-op");
            Rc::clone(layout)
        }
    }
}

/// Close `pane_id` in `group_id`; the pane stays in the catalog
pub fn reduce_close_pane(layout: &Rc<DockLayout>, group_id: &str, pane_id: &str) -> Rc<DockLayout> {
    let root = rewrite_group(&layout.root, group_id, |group| remove_pane(group, pane_id));
    if root.is_none() {
        trace!(group_id, pane_id, "close: no-op");
    }
    commit(layout, root)
}

/// Move the tab at `from_index` to `to_index` within one group
pub fn reduce_reorder_pane_within_group(
    layout: &Rc<DockLayout>,
    group_id: &str,
    from_index: usize,
    to_index: usize,
) -> Rc<DockLayout> {
    if from_index == to_index {
        return Rc::clone(layout);
    }

    let root = rewrite_group(&layout.root, group_id, |group| {
        let len = group.pane_ids.len();
        if from_index >= len || to_index >= len {
            return None;
        }
        let mut pane_ids = group.pane_ids.clone();
        let pane = pane_ids.remove(from_index);
        pane_ids.insert(to_index, pane);
        Some(TabGroupNode {
            id: group.id.clone(),
            pane_ids,
            active_pane_id: group.active_pane_id.clone(),
        })
    });
    if root.is_none() {
        trace!(group_id, from_index, to_index, "reorder: no-op");
    }
    commit(layout, root)
}

/// Move `pane_id` from one group into another at `to_index`, activating it
/// there. Refuses when the destination already holds the pane.
pub fn reduce_move_pane_between_groups(
    layout: &Rc<DockLayout>,
    pane_id: &str,
    from_group_id: &str,
    to_group_id: &str,
    to_index: usize,
) -> Rc<DockLayout> {
    if from_group_id == to_group_id {
        return Rc::clone(layout);
    }

    let (Some(source), Some(destination)) = (
        find_group(&layout.root, from_group_id),
        find_group(&layout.root, to_group_id),
    ) else {
        trace!(from_group_id, to_group_id, "move: group not found");
        return Rc::clone(layout);
    };
    if !source.contains(pane_id) || destination.contains(pane_id) {
        trace!(pane_id, from_group_id, to_group_id, "move: no-op");
        return Rc::clone(layout);
    }

    let moved = PaneId::from(pane_id);
    let root = rewrite_group(&layout.root, from_group_id, |group| remove_pane(group, pane_id))
        .and_then(|removed| {
            rewrite_group(&removed, to_group_id, |group| {
                Some(insert_pane(group, &moved, to_index, true))
            })
        });
    commit(layout, root)
}

/// Reopen a cataloged pane that is not open anywhere
pub fn reduce_restore_pane_to_group(
    layout: &Rc<DockLayout>,
    group_id: &str,
    pane_id: &str,
    options: RestoreOptions,
) -> Rc<DockLayout> {
    if layout.pane(pane_id).is_none() {
        trace!(pane_id, "restore: unknown pane");
        return Rc::clone(layout);
    }
    if layout.is_pane_open(pane_id) {
        trace!(pane_id, "restore: already open");
        return Rc::clone(layout);
    }

    // the catalog key is the open id, even if the entry's own id differs
    let restored = PaneId::from(pane_id);
    let root = rewrite_group(&layout.root, group_id, |group| {
        let index = options.index.unwrap_or(group.pane_ids.len());
        Some(insert_pane(group, &restored, index, options.activate))
    });
    if root.is_none() {
        trace!(group_id, "restore: group not found");
    }
    commit(layout, root)
}
