//! Pure layout reducers
//!
//! Every reducer takes the current `Rc<DockLayout>` plus command arguments and
//! returns either the very same `Rc` (the command did not apply) or a new
//! layout that shares every untouched subtree with the input.

pub mod normalize;
pub mod resize;
mod tabs;
pub mod tree;

pub use normalize::normalize;
pub use resize::{
    reduce_resize_split, reduce_resize_split_with_floor, solve_sizes, MIN_SPLIT_SIZE,
    SIZE_EPSILON, SIZE_SUM_TOLERANCE,
};
pub use tabs::{
    reduce_close_pane, reduce_move_pane_between_groups, reduce_reorder_pane_within_group,
    reduce_restore_pane_to_group, reduce_set_active_pane, RestoreOptions,
};
pub use tree::{find_group, find_group_id_for_pane, find_split};
