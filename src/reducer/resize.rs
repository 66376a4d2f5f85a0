//! Split resizing with a minimum size floor
//!
//! Requested weights are scaled to sum to 100, then a water-filling pass
//! clamps entries below the floor and redistributes the remaining budget
//! proportionally across the others until nothing new falls below it.

use std::rc::Rc;

use tracing::{debug, trace};

use super::tree::rewrite_split;
use crate::model::{DockLayout, SplitNode};

/// Smallest share (percent) a split child may be resized to
pub const MIN_SPLIT_SIZE: f64 = 5.0;

/// Tolerance for comparing and validating resized sizes
pub const SIZE_EPSILON: f64 = 1e-4;

/// Looser tolerance for accepting an existing set of sizes
pub const SIZE_SUM_TOLERANCE: f64 = 0.01;

/// Whether `sizes` can be kept as-is for a split with `count` children
pub fn sizes_are_valid(sizes: &[f64], count: usize) -> bool {
    if sizes.len() != count || sizes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return false;
    }
    let sum: f64 = sizes.iter().sum();
    (sum - 100.0).abs() <= SIZE_SUM_TOLERANCE
}

/// Turn requested weights into percentages that sum to 100 with every entry
/// at or above `floor`. Returns `None` when the request is invalid or the
/// floor cannot be satisfied.
pub fn solve_sizes(requested: &[f64], floor: f64) -> Option<Vec<f64>> {
    if requested.is_empty() || requested.iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return None;
    }

    let total: f64 = requested.iter().sum();
    if !total.is_finite() {
        return None;
    }
    let mut sizes: Vec<f64> = requested.iter().map(|s| s / total * 100.0).collect();
    let mut fixed = vec![false; sizes.len()];

    loop {
        let mut newly_fixed = false;
        for (size, is_fixed) in sizes.iter_mut().zip(fixed.iter_mut()) {
            if !*is_fixed && *size < floor {
                *size = floor;
                *is_fixed = true;
                newly_fixed = true;
            }
        }
        if !newly_fixed {
            break;
        }

        let fixed_count = fixed.iter().filter(|f| **f).count();
        let budget = 100.0 - fixed_count as f64 * floor;
        if budget < 0.0 {
            return None;
        }

        let free_total: f64 = sizes
            .iter()
            .zip(&fixed)
            .filter(|(_, f)| !**f)
            .map(|(s, _)| *s)
            .sum();
        if free_total <= 0.0 {
            break;
        }
        for (size, _) in sizes.iter_mut().zip(&fixed).filter(|(_, f)| !**f) {
            *size = *size / free_total * budget;
        }
    }

    let residual = 100.0 - sizes.iter().sum::<f64>();
    let last = sizes.last_mut()?;
    *last += residual;
    if *last < floor - SIZE_EPSILON {
        return None;
    }

    Some(sizes)
}

fn sizes_match(current: &[f64], next: &[f64]) -> bool {
    current.len() == next.len()
        && current
            .iter()
            .zip(next)
            .all(|(a, b)| (a - b).abs() <= SIZE_EPSILON)
}

/// Replace the sizes of split `split_id`. Children are left untouched.
pub fn reduce_resize_split(
    layout: &Rc<DockLayout>,
    split_id: &str,
    sizes: &[f64],
) -> Rc<DockLayout> {
    reduce_resize_split_with_floor(layout, split_id, sizes, MIN_SPLIT_SIZE)
}

/// `reduce_resize_split` with a custom minimum floor
pub fn reduce_resize_split_with_floor(
    layout: &Rc<DockLayout>,
    split_id: &str,
    sizes: &[f64],
    floor: f64,
) -> Rc<DockLayout> {
    let root = rewrite_split(&layout.root, split_id, |split| {
        if sizes.len() != split.children.len() {
            trace!(split = %split.id, requested = sizes.len(), "resize: wrong size count");
            return None;
        }
        let Some(next) = solve_sizes(sizes, floor) else {
            trace!(split = %split.id, ?sizes, "resize: rejected");
            return None;
        };
        if sizes_match(&split.sizes, &next) {
            return None;
        }
        debug!(split = %split.id, ?next, "resize");
        Some(SplitNode {
            id: split.id.clone(),
            direction: split.direction,
            children: split.children.clone(),
            sizes: next,
        })
    });

    match root {
        Some(root) => Rc::new(layout.with_root(root)),
        None => Rc::clone(layout),
    }
}
