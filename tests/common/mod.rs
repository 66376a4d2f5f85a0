//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;

use dock_manager::config::DockConfig;
use dock_manager::model::{DockLayout, DockModel, LayoutNode, SplitNode, TabGroupNode};
use dock_manager::reducer::{find_group, find_split};
use dock_manager::validate::ValidationMode;
use serde_json::{json, Value};

/// Build a layout from its JSON form
pub fn layout_from_json(value: Value) -> DockLayout {
    serde_json::from_value(value).expect("test layout should deserialize")
}

/// Catalog entries for the given pane ids, titled by upper-casing the id
pub fn catalog(ids: &[&str]) -> Value {
    let mut panes = serde_json::Map::new();
    for id in ids {
        panes.insert(
            id.to_string(),
            json!({ "id": id, "title": id.to_uppercase(), "componentKey": id }),
        );
    }
    Value::Object(panes)
}

/// Root split with two groups:
/// - `left` holds `a, b, c` with `b` active
/// - `right` holds `d`
/// - `e` is cataloged but closed
pub fn two_groups() -> DockLayout {
    layout_from_json(json!({
        "root": {
            "type": "split",
            "id": "root",
            "direction": "horizontal",
            "sizes": [50, 50],
            "children": [
                { "type": "tab-group", "id": "left", "paneIds": ["a", "b", "c"], "activePaneId": "b" },
                { "type": "tab-group", "id": "right", "paneIds": ["d"], "activePaneId": "d" }
            ]
        },
        "panesById": catalog(&["a", "b", "c", "d", "e"])
    }))
}

/// Nested layout:
/// - `root` (horizontal 40/60) holds `left` and `right-split`
/// - `left` holds `a, b`
/// - `right-split` (vertical 50/50) holds `top` (`c, d`) and `bottom` (`e`)
/// - `f` is cataloged but closed
pub fn nested() -> DockLayout {
    layout_from_json(json!({
        "root": {
            "type": "split",
            "id": "root",
            "direction": "horizontal",
            "sizes": [40, 60],
            "children": [
                { "type": "tab-group", "id": "left", "paneIds": ["a", "b"], "activePaneId": "a" },
                {
                    "type": "split",
                    "id": "right-split",
                    "direction": "vertical",
                    "sizes": [50, 50],
                    "children": [
                        { "type": "tab-group", "id": "top", "paneIds": ["c", "d"], "activePaneId": "c" },
                        { "type": "tab-group", "id": "bottom", "paneIds": ["e"], "activePaneId": "e" }
                    ]
                }
            ]
        },
        "panesById": catalog(&["a", "b", "c", "d", "e", "f"])
    }))
}

/// A single root tab group holding `panes`, with `extra` panes cataloged but closed
pub fn single_group(panes: &[&str], extra: &[&str]) -> DockLayout {
    let all: Vec<&str> = panes.iter().chain(extra).copied().collect();
    layout_from_json(json!({
        "root": {
            "type": "tab-group",
            "id": "main",
            "paneIds": panes,
            "activePaneId": panes.first().copied().unwrap_or("")
        },
        "panesById": catalog(&all)
    }))
}

pub fn shared(layout: DockLayout) -> Rc<DockLayout> {
    Rc::new(layout)
}

/// Model that panics on any layout violation after a command
pub fn strict_model(layout: DockLayout) -> DockModel {
    DockModel::new(
        layout,
        DockConfig {
            validation: ValidationMode::Panic,
            ..DockConfig::default()
        },
    )
}

pub fn group<'a>(layout: &'a DockLayout, group_id: &str) -> &'a TabGroupNode {
    find_group(&layout.root, group_id)
        .unwrap_or_else(|| panic!("group {} not in layout:\n{}", group_id, layout))
}

pub fn split<'a>(layout: &'a DockLayout, split_id: &str) -> &'a SplitNode {
    find_split(&layout.root, split_id)
        .unwrap_or_else(|| panic!("split {} not in layout:\n{}", split_id, layout))
}

pub fn root_split(layout: &DockLayout) -> &SplitNode {
    layout.root.as_split().expect("root should be a split")
}

pub fn root_group(layout: &DockLayout) -> &TabGroupNode {
    layout.root.as_tab_group().expect("root should be a tab group")
}

/// Pane ids of a group as plain strings
pub fn panes(group: &TabGroupNode) -> Vec<&str> {
    group.pane_ids.iter().map(|id| id.as_str()).collect()
}

pub fn active(group: &TabGroupNode) -> Option<&str> {
    group.active_pane_id.as_ref().map(|id| id.as_str())
}

/// Ids of every tab group in tree order
pub fn group_ids(layout: &DockLayout) -> Vec<String> {
    let mut ids = Vec::new();
    layout
        .root
        .for_each_group(&mut |group| ids.push(group.id.to_string()));
    ids
}

pub fn child<'a>(node: &'a LayoutNode, index: usize) -> &'a Rc<LayoutNode> {
    &node.as_split().expect("node should be a split").children[index]
}

pub fn assert_sizes(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-6, "{:?} != {:?}", actual, expected);
    }
}
