//! Layout message handlers (tabs, groups, splits)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::DockModel;
use crate::reducer::{
    find_group, reduce_close_pane, reduce_move_pane_between_groups,
    reduce_reorder_pane_within_group, reduce_resize_split_with_floor,
    reduce_restore_pane_to_group, reduce_set_active_pane,
};

use super::commit_layout;

/// Handle layout messages
pub fn update_layout(model: &mut DockModel, msg: LayoutMsg) -> Option<Cmd> {
    if let Some(pane_id) = model.maximized_pane_id() {
        // the tree is hidden behind the maximized pane but still editable
        tracing::debug!(maximized = %pane_id, ?msg, "layout command while maximized");
    }

    let layout = model.store.layout();
    let next = match &msg {
        LayoutMsg::SetActivePane { group_id, pane_id } => {
            reduce_set_active_pane(layout, group_id.as_str(), pane_id.as_str())
        }

        LayoutMsg::ClosePane { group_id, pane_id } => {
            reduce_close_pane(layout, group_id.as_str(), pane_id.as_str())
        }

        LayoutMsg::ReorderPane {
            group_id,
            from_index,
            to_index,
        } => reduce_reorder_pane_within_group(layout, group_id.as_str(), *from_index, *to_index),

        LayoutMsg::MovePane {
            pane_id,
            from_group_id,
            to_group_id,
            to_index,
        } => reduce_move_pane_between_groups(
            layout,
            pane_id.as_str(),
            from_group_id.as_str(),
            to_group_id.as_str(),
            *to_index,
        ),

        LayoutMsg::RestorePane {
            group_id,
            pane_id,
            options,
        } => reduce_restore_pane_to_group(layout, group_id.as_str(), pane_id.as_str(), *options),

        LayoutMsg::ResizeSplit { split_id, sizes } => reduce_resize_split_with_floor(
            layout,
            split_id.as_str(),
            sizes,
            model.config.min_split_size,
        ),

        LayoutMsg::FocusGroup(group_id) => {
            if find_group(&layout.root, group_id.as_str()).is_none()
                || model.focused_group_id.as_ref() == Some(group_id)
            {
                return None;
            }
            model.focused_group_id = Some(group_id.clone());
            return Some(Cmd::RedrawChrome);
        }
    };

    commit_layout(model, next, &msg)
}
