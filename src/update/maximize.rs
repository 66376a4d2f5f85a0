//! Maximize/restore state machine
//!
//! Normal --maximize(p)--> Maximized(p) --exit restore--> Normal
//!                                      --exit close----> Normal
//!
//! Maximizing never edits the tree. The snapshot taken on entry is what both
//! exits return to, so closing removes the pane from where it was when the
//! user maximized it.

use std::rc::Rc;

use crate::commands::Cmd;
use crate::messages::MaximizeMsg;
use crate::model::{DockModel, MaximizeState, PaneId};
use crate::reducer::{find_group_id_for_pane, reduce_close_pane};

use super::commit_layout;

/// Handle maximize messages
pub fn update_maximize(model: &mut DockModel, msg: MaximizeMsg) -> Option<Cmd> {
    match msg {
        MaximizeMsg::Maximize(pane_id) => maximize_pane(model, pane_id),
        MaximizeMsg::ExitRestore => exit_restore(model),
        MaximizeMsg::ExitClose => exit_close(model),
    }
}

fn maximize_pane(model: &mut DockModel, pane_id: PaneId) -> Option<Cmd> {
    if model.layout().pane(pane_id.as_str()).is_none() {
        tracing::trace!(%pane_id, "maximize: unknown pane");
        return None;
    }

    let pre_max_layout = match model.store.maximize() {
        MaximizeState::Maximized {
            pane_id: current, ..
        } if *current == pane_id => return None,
        // switching panes keeps the original snapshot
        MaximizeState::Maximized { pre_max_layout, .. } => Rc::clone(pre_max_layout),
        MaximizeState::Normal => Rc::new(model.layout().deep_clone()),
    };

    tracing::debug!(%pane_id, "maximize");
    model.store.set_maximize(MaximizeState::Maximized {
        pane_id,
        pre_max_layout,
    });
    Some(Cmd::RedrawChrome)
}

fn exit_restore(model: &mut DockModel) -> Option<Cmd> {
    let snapshot = Rc::clone(model.store.pre_max_layout()?);

    tracing::debug!("exit maximize: restore");
    model.store.set_maximize(MaximizeState::Normal);
    commit_layout(model, snapshot, &MaximizeMsg::ExitRestore).or(Some(Cmd::RedrawChrome))
}

fn exit_close(model: &mut DockModel) -> Option<Cmd> {
    let MaximizeState::Maximized {
        pane_id,
        pre_max_layout,
    } = model.store.maximize().clone()
    else {
        return None;
    };

    let next = match find_group_id_for_pane(&pre_max_layout, pane_id.as_str()) {
        Some(group_id) => reduce_close_pane(&pre_max_layout, group_id.as_str(), pane_id.as_str()),
        None => {
            tracing::debug!(%pane_id, "exit maximize: pane not in snapshot, restoring");
            pre_max_layout
        }
    };

    tracing::debug!(%pane_id, "exit maximize: close");
    model.store.set_maximize(MaximizeState::Normal);
    commit_layout(model, next, &MaximizeMsg::ExitClose).or(Some(Cmd::RedrawChrome))
}
