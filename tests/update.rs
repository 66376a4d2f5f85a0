//! Tests for the update loop, the command facade and store notifications

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{active, group, nested, panes, strict_model, two_groups};
use dock_manager::commands::Cmd;
use dock_manager::messages::{LayoutMsg, Msg};
use dock_manager::model::{DockModel, NodeId, PaneId, StoreChange};
use dock_manager::reducer::RestoreOptions;
use dock_manager::update::update;

fn record_changes(model: &mut DockModel) -> Rc<RefCell<Vec<StoreChange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    model
        .store
        .subscribe(move |change| sink.borrow_mut().push(change));
    seen
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_update_dispatches_layout_messages() {
    let mut model = strict_model(two_groups());

    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::MovePane {
            pane_id: PaneId::from("c"),
            from_group_id: NodeId::from("left"),
            to_group_id: NodeId::from("right"),
            to_index: 0,
        }),
    );

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(panes(group(model.layout(), "right")), vec!["c", "d"]);
}

#[test]
fn test_noop_returns_none_and_keeps_layout() {
    let mut model = strict_model(two_groups());
    let before = Rc::clone(model.store.layout());

    assert_eq!(model.set_active_pane("left", "b"), None);
    assert_eq!(model.close_pane("right", "a"), None);
    assert_eq!(model.reorder_pane_within_group("left", 0, 9), None);
    assert_eq!(model.move_pane_between_groups("a", "left", "left", 0), None);
    assert_eq!(model.restore_pane_to_group("left", "a", RestoreOptions::default()), None);
    assert_eq!(model.resize_split("root", &[50.0, 50.0]), None);
    assert!(Rc::ptr_eq(model.store.layout(), &before));
}

#[test]
fn test_facade_sequence() {
    let mut model = strict_model(nested());

    assert_eq!(model.set_active_pane("top", "d"), Some(Cmd::Redraw));
    assert_eq!(model.reorder_pane_within_group("top", 1, 0), Some(Cmd::Redraw));
    assert_eq!(panes(group(model.layout(), "top")), vec!["d", "c"]);
    assert_eq!(active(group(model.layout(), "top")), Some("d"));

    assert_eq!(model.resize_split("right-split", &[70.0, 30.0]), Some(Cmd::Redraw));
    assert_eq!(model.restore_pane_to_group("bottom", "f", RestoreOptions::default()), Some(Cmd::Redraw));
    assert_eq!(panes(group(model.layout(), "bottom")), vec!["e", "f"]);
    assert_eq!(model.close_pane("bottom", "f"), Some(Cmd::Redraw));
    assert!(!model.layout().is_pane_open("f"));
}

#[test]
fn test_cmd_helpers() {
    assert!(Cmd::Redraw.needs_redraw());
    assert!(Cmd::Redraw.layout_changed());
    assert!(Cmd::RedrawChrome.needs_redraw());
    assert!(!Cmd::RedrawChrome.layout_changed());
    assert!(!Cmd::None.needs_redraw());
    assert_eq!(Cmd::default(), Cmd::None);
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_group() {
    let mut model = strict_model(two_groups());

    assert_eq!(model.focus_group("right"), Some(Cmd::RedrawChrome));
    assert_eq!(model.focused_group_id, Some(NodeId::from("right")));

    // refocusing and unknown groups are no-ops
    assert_eq!(model.focus_group("right"), None);
    assert_eq!(model.focus_group("nowhere"), None);
    assert_eq!(model.focused_group_id, Some(NodeId::from("right")));
}

#[test]
fn test_focus_cleared_when_group_disappears() {
    let mut model = strict_model(two_groups());
    model.focus_group("right");

    model.close_pane("right", "d");
    assert!(model.focused_group_id.is_none());
}

#[test]
fn test_focus_kept_when_group_survives() {
    let mut model = strict_model(two_groups());
    model.focus_group("left");

    model.close_pane("right", "d");
    assert_eq!(model.focused_group_id, Some(NodeId::from("left")));
}

// ============================================================================
// Store Notifications
// ============================================================================

#[test]
fn test_store_notifies_on_effective_writes_only() {
    let mut model = strict_model(two_groups());
    let seen = record_changes(&mut model);

    model.set_active_pane("left", "b");
    assert!(seen.borrow().is_empty());

    model.set_active_pane("left", "a");
    model.maximize_pane("a");
    model.exit_maximize_restore();

    assert_eq!(
        *seen.borrow(),
        vec![
            StoreChange::Layout,
            StoreChange::Maximize,
            StoreChange::Maximize,
            StoreChange::Layout,
        ]
    );
}

#[test]
fn test_focus_does_not_notify_store() {
    let mut model = strict_model(two_groups());
    let seen = record_changes(&mut model);

    model.focus_group("left");
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut model = strict_model(two_groups());
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let id = model.store.subscribe(move |_| *sink.borrow_mut() += 1);

    model.close_pane("left", "a");
    assert!(model.store.unsubscribe(id));
    assert!(!model.store.unsubscribe(id));
    model.close_pane("left", "b");

    assert_eq!(*seen.borrow(), 1);
}

// ============================================================================
// Default Store
// ============================================================================

#[test]
fn test_default_model_is_empty() {
    let mut model = DockModel::default();
    assert!(model.layout().panes_by_id.is_empty());
    assert!(model.layout().open_pane_ids().is_empty());
    assert_eq!(model.close_pane("empty", "a"), None);
    assert_eq!(model.maximize_pane("a"), None);
}
