//! Sample workspace used by the demo binary and benches

use crate::model::{
    DockLayout, LayoutNode, NodeId, Pane, PaneId, SplitDirection, SplitNode, TabGroupNode,
};
use std::rc::Rc;

fn tab_group(id: &str, panes: &[&str]) -> Rc<LayoutNode> {
    Rc::new(LayoutNode::TabGroup(TabGroupNode::new(
        id,
        panes.iter().map(|p| PaneId::from(*p)).collect(),
    )))
}

/// Scene editor style workspace: a left tab group next to a vertical split
pub fn initial_layout() -> DockLayout {
    let right_top: Vec<String> = ["pane-3", "pane-4"]
        .into_iter()
        .map(String::from)
        .chain((6..=15).map(|n| format!("pane-{}", n)))
        .collect();
    let right_top: Vec<&str> = right_top.iter().map(String::as_str).collect();

    let root = LayoutNode::Split(SplitNode {
        id: NodeId::from("root-split"),
        direction: SplitDirection::Horizontal,
        sizes: vec![45.0, 55.0],
        children: vec![
            tab_group("left-group", &["pane-1", "pane-2"]),
            Rc::new(LayoutNode::Split(SplitNode {
                id: NodeId::from("right-split"),
                direction: SplitDirection::Vertical,
                sizes: vec![60.0, 40.0],
                children: vec![
                    tab_group("right-top-group", &right_top),
                    tab_group("right-bottom-group", &["pane-5"]),
                ],
            })),
        ],
    });

    let named = [
        ("pane-1", "Scene", "scene"),
        ("pane-2", "Hierarchy", "hierarchy"),
        ("pane-3", "Inspector", "inspector"),
        ("pane-4", "Console", "console"),
        ("pane-5", "Preview", "preview"),
    ];
    let numbered = [
        "six", "seven", "eight", "nine", "ten", "eleven", "twelve", "thirteen", "fourteen",
        "fifteen",
    ];

    let panes = named
        .into_iter()
        .map(|(id, title, key)| Pane::new(id, title, key))
        .chain(
            numbered
                .into_iter()
                .enumerate()
                .map(|(i, word)| Pane::new(format!("pane-{}", i + 6), word, word)),
        );

    DockLayout::new(root, panes)
}
