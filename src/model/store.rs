//! Dock store - the single owner of the current layout and maximize state
//!
//! The store enforces no invariants; it only swaps values and tells
//! subscribers when something actually changed.

use std::fmt;
use std::rc::Rc;

use super::layout::{DockLayout, PaneId};

/// Display mode over the layout tree.
///
/// The snapshot is a deep copy taken when maximize starts and exists only
/// while a pane is maximized.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MaximizeState {
    #[default]
    Normal,
    Maximized {
        pane_id: PaneId,
        pre_max_layout: Rc<DockLayout>,
    },
}

impl MaximizeState {
    pub fn maximized_pane_id(&self) -> Option<&PaneId> {
        match self {
            MaximizeState::Normal => None,
            MaximizeState::Maximized { pane_id, .. } => Some(pane_id),
        }
    }

    pub fn pre_max_layout(&self) -> Option<&Rc<DockLayout>> {
        match self {
            MaximizeState::Normal => None,
            MaximizeState::Maximized { pre_max_layout, .. } => Some(pre_max_layout),
        }
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        matches!(self, MaximizeState::Maximized { .. })
    }

    /// Equality without walking the snapshot trees
    fn same_as(&self, other: &MaximizeState) -> bool {
        match (self, other) {
            (MaximizeState::Normal, MaximizeState::Normal) => true,
            (
                MaximizeState::Maximized {
                    pane_id: a,
                    pre_max_layout: a_layout,
                },
                MaximizeState::Maximized {
                    pane_id: b,
                    pre_max_layout: b_layout,
                },
            ) => a == b && Rc::ptr_eq(a_layout, b_layout),
            _ => false,
        }
    }
}

/// What changed in a store write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Layout,
    Maximize,
}

/// Handle returned by [`DockStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(StoreChange)>;

pub struct DockStore {
    layout: Rc<DockLayout>,
    maximize: MaximizeState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription_id: u64,
}

impl fmt::Debug for DockStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockStore")
            .field("layout", &self.layout)
            .field("maximize", &self.maximize)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for DockStore {
    fn default() -> Self {
        Self::new(DockLayout::empty())
    }
}

impl DockStore {
    /// Seed the store. The layout is taken as-is, without validation.
    pub fn new(layout: DockLayout) -> Self {
        Self {
            layout: Rc::new(layout),
            maximize: MaximizeState::Normal,
            listeners: Vec::new(),
            next_subscription_id: 1,
        }
    }

    #[inline]
    pub fn layout(&self) -> &Rc<DockLayout> {
        &self.layout
    }

    #[inline]
    pub fn maximize(&self) -> &MaximizeState {
        &self.maximize
    }

    pub fn maximized_pane_id(&self) -> Option<&PaneId> {
        self.maximize.maximized_pane_id()
    }

    pub fn pre_max_layout(&self) -> Option<&Rc<DockLayout>> {
        self.maximize.pre_max_layout()
    }

    /// Register a listener called after every effective write
    pub fn subscribe(&mut self, listener: impl FnMut(StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Replace the layout. Writing the same `Rc` again is not a change.
    pub(crate) fn set_layout(&mut self, layout: Rc<DockLayout>) -> bool {
        if Rc::ptr_eq(&self.layout, &layout) {
            return false;
        }
        self.layout = layout;
        self.notify(StoreChange::Layout);
        true
    }

    /// Replace the maximize state. Snapshots are compared by pointer.
    pub(crate) fn set_maximize(&mut self, maximize: MaximizeState) -> bool {
        if self.maximize.same_as(&maximize) {
            return false;
        }
        self.maximize = maximize;
        self.notify(StoreChange::Maximize);
        true
    }

    fn notify(&mut self, change: StoreChange) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }
}
