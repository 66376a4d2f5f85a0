//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{NodeId, PaneId};
use crate::reducer::RestoreOptions;

/// Layout tree commands (tabs, groups, splits)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Show `pane_id` in its tab group
    SetActivePane { group_id: NodeId, pane_id: PaneId },
    /// Close a tab; the pane stays in the catalog
    ClosePane { group_id: NodeId, pane_id: PaneId },
    /// Drag a tab within its own group
    ReorderPane {
        group_id: NodeId,
        from_index: usize,
        to_index: usize,
    },
    /// Drag a tab into another group
    MovePane {
        pane_id: PaneId,
        from_group_id: NodeId,
        to_group_id: NodeId,
        to_index: usize,
    },
    /// Reopen a closed pane in a group
    RestorePane {
        group_id: NodeId,
        pane_id: PaneId,
        options: RestoreOptions,
    },
    /// Set split percentages (result of a splitter drag)
    ResizeSplit { split_id: NodeId, sizes: Vec<f64> },
    /// Mark a tab group as focused
    FocusGroup(NodeId),
}

/// Maximize/restore display mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaximizeMsg {
    /// Show only `pane_id`
    Maximize(PaneId),
    /// Leave maximize mode, returning to the pre-maximize layout
    ExitRestore,
    /// Leave maximize mode and close the maximized pane where it used to be
    ExitClose,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Maximize(MaximizeMsg),
}
