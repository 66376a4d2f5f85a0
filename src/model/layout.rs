//! Layout tree - splits, tab groups and the pane catalog
//!
//! A `DockLayout` is an immutable value. Nodes are reference counted so that
//! reducers can rebuild only the path from the root to the node they change
//! and share every other subtree with the previous layout.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a pane
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(pub String);

/// Unique identifier for a layout node (split or tab group)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(PaneId);
string_id!(NodeId);

/// Id of the tab group that replaces a root split once every pane is gone
pub const EMPTY_GROUP_ID: &str = "empty";

// ============================================================================
// Panes
// ============================================================================

/// A content-bearing unit that can be displayed inside a tab group.
///
/// `component_key` names external content and is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pane {
    pub id: PaneId,
    pub title: String,
    pub component_key: String,
}

impl Pane {
    pub fn new(
        id: impl Into<PaneId>,
        title: impl Into<String>,
        component_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            component_key: component_key.into(),
        }
    }
}

// ============================================================================
// Layout Tree
// ============================================================================

/// Axis along which a split arranges its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Children arranged left-to-right
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

/// A node dividing space among its children along one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitNode {
    pub id: NodeId,
    pub direction: SplitDirection,
    pub children: Vec<Rc<LayoutNode>>,
    /// Percentages parallel to `children`, summing to 100
    pub sizes: Vec<f64>,
}

/// An ordered set of panes with at most one of them visible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroupNode {
    pub id: NodeId,
    pub pane_ids: Vec<PaneId>,
    /// `None` only while `pane_ids` is empty
    #[serde(default, with = "active_pane")]
    pub active_pane_id: Option<PaneId>,
}

impl TabGroupNode {
    pub fn new(id: impl Into<NodeId>, pane_ids: Vec<PaneId>) -> Self {
        let active_pane_id = pane_ids.first().cloned();
        Self {
            id: id.into(),
            pane_ids,
            active_pane_id,
        }
    }

    /// The tab group used as root once the whole tree has emptied out
    pub fn empty_sentinel() -> Self {
        Self {
            id: NodeId::from(EMPTY_GROUP_ID),
            pane_ids: Vec::new(),
            active_pane_id: None,
        }
    }

    #[inline]
    pub fn contains(&self, pane_id: &str) -> bool {
        self.index_of(pane_id).is_some()
    }

    #[inline]
    pub fn index_of(&self, pane_id: &str) -> Option<usize> {
        self.pane_ids.iter().position(|id| id.as_str() == pane_id)
    }

    #[inline]
    pub fn is_active(&self, pane_id: &str) -> bool {
        self.active_pane_id
            .as_ref()
            .is_some_and(|id| id.as_str() == pane_id)
    }
}

/// A node in the layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LayoutNode {
    Split(SplitNode),
    TabGroup(TabGroupNode),
}

impl LayoutNode {
    pub fn id(&self) -> &NodeId {
        match self {
            LayoutNode::Split(split) => &split.id,
            LayoutNode::TabGroup(group) => &group.id,
        }
    }

    pub fn as_split(&self) -> Option<&SplitNode> {
        match self {
            LayoutNode::Split(split) => Some(split),
            LayoutNode::TabGroup(_) => None,
        }
    }

    pub fn as_tab_group(&self) -> Option<&TabGroupNode> {
        match self {
            LayoutNode::TabGroup(group) => Some(group),
            LayoutNode::Split(_) => None,
        }
    }

    /// Rebuild this subtree with fresh allocations for every node
    fn deep_clone(&self) -> LayoutNode {
        match self {
            LayoutNode::TabGroup(group) => LayoutNode::TabGroup(group.clone()),
            LayoutNode::Split(split) => LayoutNode::Split(SplitNode {
                id: split.id.clone(),
                direction: split.direction,
                children: split
                    .children
                    .iter()
                    .map(|child| Rc::new(child.deep_clone()))
                    .collect(),
                sizes: split.sizes.clone(),
            }),
        }
    }

    /// Visit every tab group in depth-first order
    pub fn for_each_group<'a>(&'a self, f: &mut impl FnMut(&'a TabGroupNode)) {
        match self {
            LayoutNode::TabGroup(group) => f(group),
            LayoutNode::Split(split) => {
                for child in &split.children {
                    child.for_each_group(f);
                }
            }
        }
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            LayoutNode::Split(split) => {
                let sizes: Vec<String> = split.sizes.iter().map(|s| format!("{:.2}", s)).collect();
                writeln!(
                    f,
                    "{}split {} {:?} [{}]",
                    indent,
                    split.id,
                    split.direction,
                    sizes.join(", ")
                )?;
                for child in &split.children {
                    child.fmt_tree(f, depth + 1)?;
                }
                Ok(())
            }
            LayoutNode::TabGroup(group) => {
                let tabs: Vec<String> = group
                    .pane_ids
                    .iter()
                    .map(|id| {
                        if group.is_active(id.as_str()) {
                            format!("*{}", id)
                        } else {
                            id.to_string()
                        }
                    })
                    .collect();
                writeln!(f, "{}tabs {} [{}]", indent, group.id, tabs.join(", "))
            }
        }
    }
}

// ============================================================================
// Dock Layout (tree + pane catalog)
// ============================================================================

/// The layout document: a tree of splits and tab groups plus the full pane
/// catalog, which also remembers panes that are currently closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockLayout {
    pub root: Rc<LayoutNode>,
    pub panes_by_id: Rc<HashMap<PaneId, Pane>>,
}

impl Default for DockLayout {
    fn default() -> Self {
        Self::empty()
    }
}

impl DockLayout {
    pub fn new(root: LayoutNode, panes: impl IntoIterator<Item = Pane>) -> Self {
        Self {
            root: Rc::new(root),
            panes_by_id: Rc::new(panes.into_iter().map(|p| (p.id.clone(), p)).collect()),
        }
    }

    /// A layout with an empty root tab group and no panes
    pub fn empty() -> Self {
        Self::new(LayoutNode::TabGroup(TabGroupNode::empty_sentinel()), [])
    }

    /// Same catalog, different tree
    pub(crate) fn with_root(&self, root: Rc<LayoutNode>) -> Self {
        Self {
            root,
            panes_by_id: Rc::clone(&self.panes_by_id),
        }
    }

    /// Copy the whole layout without sharing any node with `self`
    pub fn deep_clone(&self) -> Self {
        Self {
            root: Rc::new(self.root.deep_clone()),
            panes_by_id: Rc::new(self.panes_by_id.as_ref().clone()),
        }
    }

    pub fn pane(&self, pane_id: &str) -> Option<&Pane> {
        self.panes_by_id.get(pane_id)
    }

    /// Title to show on a tab; falls back to the id for unknown or untitled panes
    pub fn pane_title<'a>(&'a self, pane_id: &'a str) -> &'a str {
        match self.pane(pane_id) {
            Some(pane) if !pane.title.is_empty() => &pane.title,
            _ => pane_id,
        }
    }

    /// Pane ids present in some tab group, in tree order
    pub fn open_pane_ids(&self) -> Vec<&PaneId> {
        let mut open = Vec::new();
        self.root
            .for_each_group(&mut |group| open.extend(group.pane_ids.iter()));
        open
    }

    pub fn is_pane_open(&self, pane_id: &str) -> bool {
        let mut found = false;
        self.root.for_each_group(&mut |group| {
            found = found || group.contains(pane_id);
        });
        found
    }

    /// Cataloged panes that are not open anywhere, sorted by id
    pub fn closed_pane_ids(&self) -> Vec<&PaneId> {
        let open = self.open_pane_ids();
        let mut closed: Vec<&PaneId> = self
            .panes_by_id
            .keys()
            .filter(|id| !open.contains(id))
            .collect();
        closed.sort();
        closed
    }
}

impl fmt::Display for DockLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_tree(f, 0)
    }
}

/// Serde adapter: the empty string stands for "no active pane"
mod active_pane {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::PaneId;

    pub fn serialize<S: Serializer>(value: &Option<PaneId>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_ref().map_or("", |id| id.as_str()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PaneId>, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(if raw.is_empty() {
            None
        } else {
            Some(PaneId(raw))
        })
    }
}
