//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Reducers compute
//! the next layout; the handlers here are the only code that writes it back
//! to the store.

pub mod layout;
mod maximize;

use std::fmt::Debug;
use std::rc::Rc;

use crate::commands::Cmd;
use crate::messages::{LayoutMsg, MaximizeMsg, Msg};
use crate::model::{DockLayout, DockModel, NodeId, PaneId};
use crate::reducer::{find_group, RestoreOptions};
use crate::validate;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use layout::update_layout;
pub use maximize::update_maximize;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Maximize(m) => maximize::update_maximize(model, m),
    }
}

/// Traced update wrapper (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = LayoutSnapshot::from_model(model);

    debug!(target: "message", msg = %msg_name, "processing");
    let result = update_inner(model, msg);
    debug!(target: "message", msg = %msg_name, ?result, "processed");

    if let Some(diff) = before.diff(&LayoutSnapshot::from_model(model)) {
        debug!(target: "layout", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Layout::ClosePane { group_id: NodeId("left"), pane_id: PaneId("a") }`
/// - `Maximize::ExitRestore`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Maximize(m) => format!("Maximize::{:?}", m),
    }
}

/// Write a reducer result back to the store.
///
/// Returns `None` when `next` is the current layout (the reducer was a no-op).
pub(crate) fn commit_layout(
    model: &mut DockModel,
    next: Rc<DockLayout>,
    context: &dyn Debug,
) -> Option<Cmd> {
    if !model.store.set_layout(next) {
        return None;
    }

    let layout = model.store.layout();
    if model.config.validation != validate::ValidationMode::Off {
        validate::report(
            layout,
            model.config.validation,
            model.config.min_split_size,
            context,
        );
    }

    let focus_lost = model
        .focused_group_id
        .as_ref()
        .is_some_and(|id| find_group(&layout.root, id.as_str()).is_none());
    if focus_lost {
        tracing::debug!(focused = ?model.focused_group_id, "focused group left the layout");
        model.focused_group_id = None;
    }

    Some(Cmd::Redraw)
}

// ============================================================================
// Command facade
// ============================================================================

/// Method-style entry points over [`update`], one per user-facing command.
/// Each returns the command produced, or `None` when the call was a no-op.
impl DockModel {
    pub fn set_active_pane(&mut self, group_id: &str, pane_id: &str) -> Option<Cmd> {
        update(
            self,
            Msg::Layout(LayoutMsg::SetActivePane {
                group_id: NodeId::from(group_id),
                pane_id: PaneId::from(pane_id),
            }),
        )
    }

    pub fn close_pane(&mut self, group_id: &str, pane_id: &str) -> Option<Cmd> {
        update(
            self,
            Msg::Layout(LayoutMsg::ClosePane {
                group_id: NodeId::from(group_id),
                pane_id: PaneId::from(pane_id),
            }),
        )
    }

    pub fn reorder_pane_within_group(
        &mut self,
        group_id: &str,
        from_index: usize,
        to_index: usize,
    ) -> Option<Cmd> {
        update(
            self,
            Msg::Layout(LayoutMsg::ReorderPane {
                group_id: NodeId::from(group_id),
                from_index,
                to_index,
            }),
        )
    }

    pub fn move_pane_between_groups(
        &mut self,
        pane_id: &str,
        from_group_id: &str,
        to_group_id: &str,
        to_index: usize,
    ) -> Option<Cmd> {
        update(
            self,
            Msg::Layout(LayoutMsg::MovePane {
                pane_id: PaneId::from(pane_id),
                from_group_id: NodeId::from(from_group_id),
                to_group_id: NodeId::from(to_group_id),
                to_index,
            }),
        )
    }

    pub fn restore_pane_to_group(
        &mut self,
        group_id: &str,
        pane_id: &str,
        options: RestoreOptions,
    ) -> Option<Cmd> {
        update(
            self,
            Msg::Layout(LayoutMsg::RestorePane {
                group_id: NodeId::from(group_id),
                pane_id: PaneId::from(pane_id),
                options,
            }),
        )
    }

    pub fn resize_split(&mut self, split_id: &str, sizes: &[f64]) -> Option<Cmd> {
        update(
            self,
            Msg::Layout(LayoutMsg::ResizeSplit {
                split_id: NodeId::from(split_id),
                sizes: sizes.to_vec(),
            }),
        )
    }

    pub fn focus_group(&mut self, group_id: &str) -> Option<Cmd> {
        update(self, Msg::Layout(LayoutMsg::FocusGroup(NodeId::from(group_id))))
    }

    pub fn maximize_pane(&mut self, pane_id: &str) -> Option<Cmd> {
        update(
            self,
            Msg::Maximize(MaximizeMsg::Maximize(PaneId::from(pane_id))),
        )
    }

    pub fn exit_maximize_restore(&mut self) -> Option<Cmd> {
        update(self, Msg::Maximize(MaximizeMsg::ExitRestore))
    }

    pub fn exit_maximize_close(&mut self) -> Option<Cmd> {
        update(self, Msg::Maximize(MaximizeMsg::ExitClose))
    }
}
