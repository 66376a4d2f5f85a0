//! Layout consistency checks
//!
//! Reducers keep the tree valid on their own; these checks exist to catch
//! bad seed layouts and regressions. Results go through `tracing` (or a
//! panic in `ValidationMode::Panic`) and never change the layout.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{DockLayout, LayoutNode, NodeId, PaneId};
use crate::reducer::{SIZE_EPSILON, SIZE_SUM_TOLERANCE};

/// How violations found after a command are surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip the check entirely
    Off,
    /// Log each violation as a warning
    Warn,
    /// Panic on the first report
    Panic,
}

impl Default for ValidationMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ValidationMode::Warn
        } else {
            ValidationMode::Off
        }
    }
}

/// A broken structural rule
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutViolation {
    DuplicatePaneInGroup { group: NodeId, pane: PaneId },
    ActivePaneNotInGroup { group: NodeId, pane: PaneId },
    MissingActivePane { group: NodeId },
    PaneOpenInSeveralGroups { pane: PaneId, groups: Vec<NodeId> },
    UnknownPane { group: NodeId, pane: PaneId },
    SplitTooFewChildren { split: NodeId, count: usize },
    SizeCountMismatch { split: NodeId, sizes: usize, children: usize },
    SizesDoNotSumTo100 { split: NodeId, sum: f64 },
    SizeBelowFloor { split: NodeId, index: usize, size: f64 },
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutViolation::DuplicatePaneInGroup { group, pane } => {
                write!(f, "group {} lists pane {} more than once", group, pane)
            }
            LayoutViolation::ActivePaneNotInGroup { group, pane } => {
                write!(f, "group {} has active pane {} that it does not hold", group, pane)
            }
            LayoutViolation::MissingActivePane { group } => {
                write!(f, "group {} has panes but no active pane", group)
            }
            LayoutViolation::PaneOpenInSeveralGroups { pane, groups } => {
                let groups: Vec<&str> = groups.iter().map(|g| g.as_str()).collect();
                write!(f, "pane {} is open in {}", pane, groups.join(", "))
            }
            LayoutViolation::UnknownPane { group, pane } => {
                write!(f, "group {} shows uncataloged pane {}", group, pane)
            }
            LayoutViolation::SplitTooFewChildren { split, count } => {
                write!(f, "split {} has {} children", split, count)
            }
            LayoutViolation::SizeCountMismatch {
                split,
                sizes,
                children,
            } => write!(
                f,
                "split {} has {} sizes for {} children",
                split, sizes, children
            ),
            LayoutViolation::SizesDoNotSumTo100 { split, sum } => {
                write!(f, "split {} sizes sum to {}", split, sum)
            }
            LayoutViolation::SizeBelowFloor { split, index, size } => {
                write!(f, "split {} child {} is only {}%", split, index, size)
            }
        }
    }
}

/// Collect every violation in `layout`. `floor` is the minimum split size.
pub fn check_layout(layout: &DockLayout, floor: f64) -> Vec<LayoutViolation> {
    let mut violations = Vec::new();
    let mut owners: HashMap<&PaneId, Vec<NodeId>> = HashMap::new();
    check_node(layout, &layout.root, floor, &mut owners, &mut violations);

    let mut shared: Vec<_> = owners
        .into_iter()
        .filter(|(_, groups)| groups.len() > 1)
        .collect();
    shared.sort_by(|a, b| a.0.cmp(b.0));
    for (pane, groups) in shared {
        violations.push(LayoutViolation::PaneOpenInSeveralGroups {
            pane: pane.clone(),
            groups,
        });
    }
    violations
}

fn check_node<'a>(
    layout: &DockLayout,
    node: &'a LayoutNode,
    floor: f64,
    owners: &mut HashMap<&'a PaneId, Vec<NodeId>>,
    violations: &mut Vec<LayoutViolation>,
) {
    match node {
        LayoutNode::TabGroup(group) => {
            for (index, pane) in group.pane_ids.iter().enumerate() {
                if group.pane_ids[..index].contains(pane) {
                    violations.push(LayoutViolation::DuplicatePaneInGroup {
                        group: group.id.clone(),
                        pane: pane.clone(),
                    });
                    continue;
                }
                if layout.pane(pane.as_str()).is_none() {
                    violations.push(LayoutViolation::UnknownPane {
                        group: group.id.clone(),
                        pane: pane.clone(),
                    });
                }
                owners.entry(pane).or_default().push(group.id.clone());
            }

            match &group.active_pane_id {
                Some(active) if !group.pane_ids.contains(active) => {
                    violations.push(LayoutViolation::ActivePaneNotInGroup {
                        group: group.id.clone(),
                        pane: active.clone(),
                    });
                }
                None if !group.pane_ids.is_empty() => {
                    violations.push(LayoutViolation::MissingActivePane {
                        group: group.id.clone(),
                    });
                }
                _ => {}
            }
        }
        LayoutNode::Split(split) => {
            if split.children.len() < 2 {
                violations.push(LayoutViolation::SplitTooFewChildren {
                    split: split.id.clone(),
                    count: split.children.len(),
                });
            }
            if split.sizes.len() != split.children.len() {
                violations.push(LayoutViolation::SizeCountMismatch {
                    split: split.id.clone(),
                    sizes: split.sizes.len(),
                    children: split.children.len(),
                });
            } else {
                let sum: f64 = split.sizes.iter().sum();
                if (sum - 100.0).abs() > SIZE_SUM_TOLERANCE {
                    violations.push(LayoutViolation::SizesDoNotSumTo100 {
                        split: split.id.clone(),
                        sum,
                    });
                }
                for (index, size) in split.sizes.iter().enumerate() {
                    if *size < floor - SIZE_EPSILON {
                        violations.push(LayoutViolation::SizeBelowFloor {
                            split: split.id.clone(),
                            index,
                            size: *size,
                        });
                    }
                }
            }
            for child in &split.children {
                check_node(layout, child, floor, owners, violations);
            }
        }
    }
}

/// Run the check for `mode` and surface violations. Returns how many were found.
///
/// `context` (usually the message that produced `layout`) is only formatted
/// when something is wrong.
pub fn report(
    layout: &DockLayout,
    mode: ValidationMode,
    floor: f64,
    context: &dyn fmt::Debug,
) -> usize {
    if mode == ValidationMode::Off {
        return 0;
    }

    let violations = check_layout(layout, floor);
    if violations.is_empty() {
        return 0;
    }

    if mode == ValidationMode::Panic {
        let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
        panic!("layout invalid after {:?}: {}", context, lines.join("; "));
    }
    for violation in &violations {
        tracing::warn!(target: "dock::validate", ?context, "{}", violation);
    }
    violations.len()
}
