//! Column-wise optimization of an assembled laminate: minimum vertical
//! spacing, horizontal gap compression, uniform scaling, and bounding box.
//!
//! A *column* is a maximal chain of nodes connected by `upper` links. Column
//! walks start from the laminate's root node and advance with [next_column],
//! which steps to the next sibling in the current ply or, past the ply end,
//! continues the search from the node linked above.
use crate::core::{
    math::{dist, point_on_ray, Vector2},
    traits::Real,
};
use crate::laminate::{LaminateData, NodePos};

/// Position starting the column after the one containing `pos`, or `None`
/// when `pos` is the laminate's right edge.
pub fn next_column<T>(data: &LaminateData<T>, pos: NodePos) -> Option<NodePos>
where
    T: Real,
{
    if !data.is_last_ply_node(pos) {
        return Some(NodePos::new(pos.layer, pos.ply, pos.node + 1));
    }

    match data.node(pos).upper {
        Some(link) => next_column(data, link),
        None => None,
    }
}

/// Minimum distance between consecutive linked nodes walking up the column
/// starting at `pos`. Returns `T::max_value()` when the column has no links.
fn min_column_gap<T>(data: &LaminateData<T>, pos: NodePos) -> T
where
    T: Real,
{
    let mut result = <T as Real>::max_value();
    let mut current = pos;
    while let Some(link) = data.node(current).upper {
        let gap = dist(data.node(current).point, data.node(link).point);
        result = num_traits::real::Real::min(result, gap);
        current = link;
    }

    result
}

/// Minimum vertical node spacing across every column of the laminate.
///
/// Returns `T::max_value()` when no column carries a link (single layer);
/// callers must treat that sentinel as "no spacing defined".
pub fn min_column_distance<T>(data: &LaminateData<T>) -> T
where
    T: Real,
{
    let mut result = <T as Real>::max_value();
    let mut pos = data.find_root_node();

    loop {
        result = num_traits::real::Real::min(result, min_column_gap(data, pos));
        match next_column(data, pos) {
            Some(next) => pos = data.trace_to_bottom(next),
            None => break,
        }
    }

    result
}

/// Minimum distance between the two columns starting at `first` and
/// `second`, pairing nodes step by step along their `upper` chains.
fn min_paired_distance<T>(data: &LaminateData<T>, first: NodePos, second: NodePos) -> T
where
    T: Real,
{
    let mut a = first;
    let mut b = second;
    let mut result = dist(data.node(a).point, data.node(b).point);

    while let (Some(ua), Some(ub)) = (data.node(a).upper, data.node(b).upper) {
        a = ua;
        b = ub;
        let step = dist(data.node(a).point, data.node(b).point);
        result = num_traits::real::Real::min(result, step);
    }

    result
}

/// Translate the column starting at `start` and every column right of it by
/// `-delta`, walking each column's `upper` chain.
fn translate_columns_from<T>(data: &mut LaminateData<T>, start: NodePos, delta: Vector2<T>)
where
    T: Real,
{
    let mut pos = start;
    loop {
        let mut walk = pos;
        loop {
            let node = data.node_mut(walk);
            node.point = node.point - delta;
            match node.upper {
                Some(link) => walk = link,
                None => break,
            }
        }

        match next_column(data, pos) {
            Some(next) => pos = data.trace_to_bottom(next),
            None => break,
        }
    }
}

/// Pull the column at `second` (and everything right of it) toward the
/// column at `first` so their base distance becomes `max_distance`.
fn compress_pair<T>(data: &mut LaminateData<T>, first: NodePos, second: NodePos, max_distance: T)
where
    T: Real,
{
    let first_point = data.node(first).point;
    let second_point = data.node(second).point;

    let target = point_on_ray(first_point, second_point, max_distance);
    let delta = second_point - target;

    translate_columns_from(data, second, delta);
}

/// Walk adjacent column pairs left to right and compress every pair whose
/// minimum aligned node distance exceeds `max_distance`.
///
/// Compressing a pair translates every column to its right, so a later pair
/// re-examines already-translated columns; chains of widely separated
/// columns are therefore pulled together cumulatively.
pub fn compress<T>(data: &mut LaminateData<T>, max_distance: T)
where
    T: Real,
{
    if data.is_empty() {
        return;
    }

    let mut first = data.find_root_node();
    let Some(mut second) = next_column(data, first) else {
        return;
    };

    loop {
        let distance = min_paired_distance(data, first, second);
        if max_distance < distance {
            compress_pair(data, first, second, max_distance);
        }

        match next_column(data, second) {
            Some(next) => {
                first = second;
                second = data.trace_to_bottom(next);
            }
            None => break,
        }
    }
}

/// Multiply every node coordinate by `factor`.
pub fn scale<T>(data: &mut LaminateData<T>, factor: T)
where
    T: Real,
{
    for node in data.nodes_mut() {
        node.point = node.point.scale(factor);
    }
}

/// Axis aligned bounding extents `(min, max)` over every node, `None` for an
/// empty laminate.
pub fn bounding_box<T>(data: &LaminateData<T>) -> Option<(Vector2<T>, Vector2<T>)>
where
    T: Real,
{
    let mut nodes = data.nodes();
    let first = nodes.next()?.point;
    let mut min = first;
    let mut max = first;

    for node in nodes {
        let p = node.point;
        if p.x < min.x {
            min.x = p.x;
        } else if p.x > max.x {
            max.x = p.x;
        }

        if p.y < min.y {
            min.y = p.y;
        } else if p.y > max.y {
            max.y = p.y;
        }
    }

    Some((min, max))
}
