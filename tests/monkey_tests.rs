//! Monkey tests - long random command sequences
//!
//! These tests drive the model with pseudo-random commands, including plenty
//! of invalid ones, and check that the layout stays structurally valid after
//! every step.

mod common;

use std::rc::Rc;

use common::{nested, strict_model};
use dock_manager::commands::Cmd;
use dock_manager::demo;
use dock_manager::messages::{LayoutMsg, MaximizeMsg, Msg};
use dock_manager::model::{DockLayout, DockModel, NodeId, PaneId};
use dock_manager::reducer::{solve_sizes, RestoreOptions, MIN_SPLIT_SIZE, SIZE_EPSILON};
use dock_manager::update::update;
use dock_manager::validate::check_layout;

/// Small xorshift generator so runs are reproducible
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n.max(1) as u64) as usize
    }

    fn pick<'a>(&mut self, items: &'a [String]) -> &'a str {
        &items[self.below(items.len())]
    }
}

fn group_ids(layout: &DockLayout) -> Vec<String> {
    let mut ids = vec!["ghost-group".to_string()];
    layout
        .root
        .for_each_group(&mut |group| ids.push(group.id.to_string()));
    ids
}

fn split_ids(layout: &DockLayout) -> Vec<String> {
    fn walk(node: &dock_manager::model::LayoutNode, out: &mut Vec<String>) {
        if let Some(split) = node.as_split() {
            out.push(split.id.to_string());
            for child in &split.children {
                walk(child, out);
            }
        }
    }
    let mut ids = vec!["ghost-split".to_string()];
    walk(&layout.root, &mut ids);
    ids
}

fn random_msg(rng: &mut Rng, model: &DockModel, pane_ids: &[String]) -> Msg {
    let layout = model.layout();
    let groups = group_ids(layout);
    let splits = split_ids(layout);

    match rng.below(10) {
        0 | 1 => Msg::Layout(LayoutMsg::ClosePane {
            group_id: NodeId::from(rng.pick(&groups)),
            pane_id: PaneId::from(rng.pick(pane_ids)),
        }),
        2 => Msg::Layout(LayoutMsg::SetActivePane {
            group_id: NodeId::from(rng.pick(&groups)),
            pane_id: PaneId::from(rng.pick(pane_ids)),
        }),
        3 => Msg::Layout(LayoutMsg::ReorderPane {
            group_id: NodeId::from(rng.pick(&groups)),
            from_index: rng.below(6),
            to_index: rng.below(6),
        }),
        4 | 5 => Msg::Layout(LayoutMsg::MovePane {
            pane_id: PaneId::from(rng.pick(pane_ids)),
            from_group_id: NodeId::from(rng.pick(&groups)),
            to_group_id: NodeId::from(rng.pick(&groups)),
            to_index: rng.below(8),
        }),
        6 | 7 => Msg::Layout(LayoutMsg::RestorePane {
            group_id: NodeId::from(rng.pick(&groups)),
            pane_id: PaneId::from(rng.pick(pane_ids)),
            options: RestoreOptions {
                index: (rng.below(2) == 0).then(|| rng.below(6)),
                activate: rng.below(3) != 0,
            },
        }),
        8 => {
            let count = 1 + rng.below(4);
            let sizes = (0..count).map(|_| rng.below(100) as f64).collect();
            Msg::Layout(LayoutMsg::ResizeSplit {
                split_id: NodeId::from(rng.pick(&splits)),
                sizes,
            })
        }
        _ => match rng.below(3) {
            0 => Msg::Maximize(MaximizeMsg::Maximize(PaneId::from(rng.pick(pane_ids)))),
            1 => Msg::Maximize(MaximizeMsg::ExitRestore),
            _ => Msg::Maximize(MaximizeMsg::ExitClose),
        },
    }
}

fn run_monkey(seed: u64, steps: usize, layout: DockLayout) {
    let mut pane_ids: Vec<String> = layout.panes_by_id.keys().map(|id| id.to_string()).collect();
    pane_ids.sort();
    pane_ids.push("ghost-pane".to_string());

    let mut model = strict_model(layout);
    let mut rng = Rng(seed);

    for step in 0..steps {
        let msg = random_msg(&mut rng, &model, &pane_ids);
        let before = Rc::clone(model.store.layout());
        let cmd = update(&mut model, msg.clone());

        // a no-op must not replace the layout
        if cmd.is_none() || cmd == Some(Cmd::RedrawChrome) {
            assert!(
                Rc::ptr_eq(&before, model.store.layout()),
                "step {}: {:?} changed the layout without a redraw",
                step,
                msg
            );
        }

        let violations = check_layout(model.layout(), MIN_SPLIT_SIZE);
        assert!(
            violations.is_empty(),
            "step {}: {:?} left {:?}\n{}",
            step,
            msg,
            violations,
            model.layout()
        );

        let catalog = &model.layout().panes_by_id;
        assert!(model
            .layout()
            .open_pane_ids()
            .iter()
            .all(|id| catalog.contains_key(*id)));
    }
}

#[test]
fn test_monkey_nested_layout() {
    for seed in 1..=8 {
        run_monkey(seed * 0x9E37_79B9, 400, nested());
    }
}

#[test]
fn test_monkey_demo_layout() {
    for seed in 1..=4 {
        run_monkey(seed * 0x85EB_CA6B, 600, demo::initial_layout());
    }
}

#[test]
fn test_close_everything_then_restore_everything() {
    let mut model = strict_model(demo::initial_layout());

    loop {
        let Some(pane_id) = model.layout().open_pane_ids().first().map(|id| id.to_string())
        else {
            break;
        };
        let group_id = dock_manager::reducer::find_group_id_for_pane(model.layout(), &pane_id)
            .expect("open pane has a group");
        assert_eq!(model.close_pane(group_id.as_str(), &pane_id), Some(Cmd::Redraw));
    }

    let root = model.layout().root.as_tab_group().expect("root collapses to a group");
    assert!(root.pane_ids.is_empty());
    let root_id = root.id.to_string();

    let closed: Vec<String> = model
        .layout()
        .closed_pane_ids()
        .iter()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(closed.len(), 15);
    for pane_id in &closed {
        model.restore_pane_to_group(&root_id, pane_id, RestoreOptions::default());
    }
    assert!(model.layout().closed_pane_ids().is_empty());
}

#[test]
fn test_monkey_solve_sizes_bounds() {
    let mut rng = Rng(0x2545_F491_4F6C_DD1D);
    let floors = [MIN_SPLIT_SIZE, 1.0, 12.5, 20.0, 33.0];

    for _ in 0..5000 {
        let count = 1 + rng.below(24);
        // mix tiny and huge weights so clamping cascades
        let requested: Vec<f64> = (0..count)
            .map(|_| match rng.below(3) {
                0 => (1 + rng.below(10)) as f64 / 1000.0,
                1 => (1 + rng.below(100)) as f64,
                _ => (1 + rng.below(1_000_000)) as f64,
            })
            .collect();
        let floor = floors[rng.below(floors.len())];

        let Some(sizes) = solve_sizes(&requested, floor) else {
            continue;
        };
        assert_eq!(sizes.len(), count);
        let sum: f64 = sizes.iter().sum();
        assert!(
            (sum - 100.0).abs() <= SIZE_EPSILON,
            "{:?} at floor {} summed to {}",
            requested,
            floor,
            sum
        );
        assert!(
            sizes.iter().all(|s| *s >= floor - SIZE_EPSILON),
            "{:?} at floor {} gave {:?}",
            requested,
            floor,
            sizes
        );
    }
}

#[test]
fn test_monkey_solve_sizes_feasible_requests_succeed() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);

    // with count * floor <= 100 the floor can always be met
    for _ in 0..2000 {
        let count = 1 + rng.below(20);
        let requested: Vec<f64> = (0..count).map(|_| (1 + rng.below(500)) as f64).collect();
        assert!(
            solve_sizes(&requested, MIN_SPLIT_SIZE).is_some(),
            "{:?} should be feasible",
            requested
        );
    }
}
