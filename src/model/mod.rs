//! Application model - the complete state of the dock manager
//!
//! This module contains the layout tree types and the store, following the
//! Elm Architecture pattern: update functions receive `&mut DockModel`.

pub mod layout;
pub mod store;

pub use layout::{
    DockLayout, LayoutNode, NodeId, Pane, PaneId, SplitDirection, SplitNode, TabGroupNode,
    EMPTY_GROUP_ID,
};
pub use store::{DockStore, MaximizeState, StoreChange, SubscriptionId};

use crate::config::DockConfig;

/// The complete dock model
#[derive(Debug, Default)]
pub struct DockModel {
    /// Current layout and maximize state
    pub store: DockStore,
    /// Loaded configuration
    pub config: DockConfig,
    /// Tab group that last received focus (UI context, not part of the layout)
    pub focused_group_id: Option<NodeId>,
}

impl DockModel {
    pub fn new(layout: DockLayout, config: DockConfig) -> Self {
        Self {
            store: DockStore::new(layout),
            config,
            focused_group_id: None,
        }
    }

    /// Shortcut for the current layout
    #[inline]
    pub fn layout(&self) -> &DockLayout {
        self.store.layout()
    }

    #[inline]
    pub fn maximized_pane_id(&self) -> Option<&PaneId> {
        self.store.maximized_pane_id()
    }
}
