//! Assembly of a [LaminateData] from a normalized [RawSketch]: iteratively
//! classifies the topmost polylines, appends them as a new layer, and
//! stitches vertical adjacency links down from the still-unlinked nodes of
//! the layers above, inserting synthetic nodes where a probe lands
//! mid-segment.
use crate::core::{
    math::{bisector_point, is_parallel_tol, perpendicular_point, seg_seg_intr_tol, Vector2},
    traits::{Real, Tolerance},
};
use crate::laminate::{LaminateData, LoadError, Node, NodePos, Ply};
use crate::polyline::Polygon;
use crate::sketch::{RawPolyline, RawSketch};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::cmp::Ordering;

/// Vertical reach of the topmost-ply band and of the connection probes: no
/// monolayer in the target material exceeds 3 units of local thickness.
#[inline]
fn probe_reach<T>() -> T
where
    T: Real,
{
    T::from_f64(3.0)
}

/// Tolerance on the parametric range when intersecting probe segments with a
/// ply edge.
#[inline]
fn probe_tolerance<T>() -> Tolerance<T>
where
    T: Real,
{
    Tolerance::new(T::from_f64(1e-3), T::fuzzy_rel_epsilon())
}

/// Tolerance for deciding that a probe intersection coincides with a ply
/// edge endpoint (and should link to it rather than insert a new node).
#[inline]
fn endpoint_tolerance<T>() -> Tolerance<T>
where
    T: Real,
{
    Tolerance::new(T::from_f64(1e-2), T::fuzzy_rel_epsilon())
}

/// A node of an already-added layer that has not yet received a `lower`
/// link. Consumed entries are purged after every layer addition.
#[derive(Debug, Copy, Clone)]
struct PendingLink {
    pos: NodePos,
    consumed: bool,
}

/// Convert the normalized raw sketch into a laminate by peeling topmost
/// plies until the sketch is exhausted, then reversing the layer order so
/// index 0 is the physical bottom.
pub fn assemble<T>(mut sketch: RawSketch<T>) -> Result<LaminateData<T>, LoadError>
where
    T: Real,
{
    if sketch.is_empty() {
        return Err(LoadError::EmptySketch);
    }

    let mut data = LaminateData::new();
    // there can never be more layers than input polylines
    data.reserve_layers(sketch.len());

    let mut pending: Vec<PendingLink> = Vec::new();

    while !sketch.is_empty() {
        let tops = topmost_indices(&sketch);
        if tops.is_empty() {
            return Err(LoadError::NoTopmostPly {
                remaining: sketch.len(),
            });
        }

        // extract back to front so earlier indexes stay valid, then order
        // the new layer's plies left to right
        let mut extracted: Vec<RawPolyline<T>> =
            tops.iter().rev().map(|&i| sketch.remove(i)).collect();
        extracted.sort_by(|a, b| {
            let ax = a.polyline.first().map_or(T::zero(), |v| v.x);
            let bx = b.polyline.first().map_or(T::zero(), |v| v.x);
            ax.partial_cmp(&bx).unwrap_or(Ordering::Equal)
        });

        add_layer(extracted, &mut data, &mut pending);
    }

    reverse_layers(&mut data);

    Ok(data)
}

/// Indexes of every polyline currently on the top boundary of the sketch.
fn topmost_indices<T>(sketch: &RawSketch<T>) -> Vec<usize>
where
    T: Real,
{
    let index = polyline_bounds_index(sketch);
    (0..sketch.len())
        .filter(|&i| is_topmost(i, sketch, &index))
        .collect()
}

/// Spatial index over the bounding boxes of the sketch polylines, in entry
/// order, used to prune the candidates the classifier must test against.
fn polyline_bounds_index<T>(sketch: &RawSketch<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    let mut builder = StaticAABB2DIndexBuilder::new(sketch.len());
    for entry in sketch.iter() {
        match entry.polyline.bounds() {
            Some((min, max)) => {
                builder.add(min.x, min.y, max.x, max.y);
            }
            None => {
                builder.add(T::zero(), T::zero(), T::zero(), T::zero());
            }
        }
    }

    build_spatial_index(builder)
}

/// Helper function to unwrap a spatial index from a builder or panic for the
/// unexpected case of failure.
fn build_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(index) => index,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("item count mismatch when building spatial index")
            }
            _ => panic!("failed to build spatial index: {e}"),
        },
    }
}

/// Decides whether the polyline at `candidate` currently lies on the top
/// boundary of the sketch.
///
/// The polyline is offset upward by the probe reach and the self
/// intersections of the offset removed. The candidate is topmost iff no
/// other polyline crosses the two segments connecting the candidate's
/// endpoints to the offset's endpoints, and no other polyline has a vertex
/// inside the band polygon formed by the candidate and the reversed offset.
///
/// Degenerate candidates whose offset comes back empty are never topmost.
fn is_topmost<T>(candidate: usize, sketch: &RawSketch<T>, index: &StaticAABB2DIndex<T>) -> bool
where
    T: Real,
{
    let input = &sketch.entries()[candidate].polyline;
    let (Some(input_first), Some(input_last)) = (input.first(), input.last()) else {
        return false;
    };

    let mut band = input.offset(probe_reach()).remove_self_intersections();
    let (Some(band_first), Some(band_last)) = (band.first(), band.last()) else {
        return false;
    };

    // every connector segment and band polygon point lies within the union
    // of the candidate's and the offset's extents
    let (Some((in_min, in_max)), Some((band_min, band_max))) = (input.bounds(), band.bounds())
    else {
        return false;
    };
    let neighbors = index.query(
        num_traits::real::Real::min(in_min.x, band_min.x),
        num_traits::real::Real::min(in_min.y, band_min.y),
        num_traits::real::Real::max(in_max.x, band_max.x),
        num_traits::real::Real::max(in_max.y, band_max.y),
    );

    for &other_idx in neighbors.iter() {
        if other_idx == candidate {
            continue;
        }
        let other = &sketch.entries()[other_idx].polyline;
        if other.intersects_segment(input_first, band_first)
            || other.intersects_segment(input_last, band_last)
        {
            return false;
        }
    }

    band.reverse();
    let mut polygon = Polygon::new();
    polygon.add_polyline(input);
    polygon.add_polyline(&band);

    for &other_idx in neighbors.iter() {
        if other_idx == candidate {
            continue;
        }
        if polygon.contains_any_vertex(&sketch.entries()[other_idx].polyline) {
            return false;
        }
    }

    true
}

/// Append the extracted topmost plies as a new layer and connect their edges
/// to the pending nodes of the layers added before.
fn add_layer<T>(tops: Vec<RawPolyline<T>>, data: &mut LaminateData<T>, pending: &mut Vec<PendingLink>)
where
    T: Real,
{
    let layer_idx = data.layer_count();
    data.add_layer();
    let is_first_layer = layer_idx == 0;

    for raw in tops {
        let ply_idx = data.layer(layer_idx).len();
        let mut ply = Ply::with_capacity(raw.orientation, raw.polyline.len());
        for (node_idx, &point) in raw.polyline.vertexes().iter().enumerate() {
            ply.add_node(Node::new(point, NodePos::new(layer_idx, ply_idx, node_idx)));
        }
        data.layer_mut(layer_idx).add_ply(ply);

        if !is_first_layer {
            connect_ply(layer_idx, ply_idx, data, pending);
        }
    }

    pending.retain(|link| !link.consumed);

    for (ply_idx, ply) in data.layer(layer_idx).iter().enumerate() {
        for node_idx in 0..ply.len() {
            pending.push(PendingLink {
                pos: NodePos::new(layer_idx, ply_idx, node_idx),
                consumed: false,
            });
        }
    }
}

/// Walk the interior edges of a freshly added ply and try to connect each to
/// the pending nodes above.
fn connect_ply<T>(layer: usize, ply: usize, data: &mut LaminateData<T>, pending: &mut Vec<PendingLink>)
where
    T: Real,
{
    // the ply length is re-read every pass because connections can insert
    // new nodes into the ply being walked
    let mut node = 1;
    while node < data.layer(layer).ply(ply).len() {
        connect_edge(
            NodePos::new(layer, ply, node - 1),
            NodePos::new(layer, ply, node),
            data,
            pending,
        );
        node += 1;
    }
}

/// Try to connect every unconsumed pending node to the ply edge bounded by
/// the nodes at `first` and `second`.
///
/// For each pending node C three probes are tried in order: the angle
/// bisector at C (only when C has neighbors on both sides), then the
/// perpendiculars to C's left and right arms. A probe intersection that
/// coincides with an edge endpoint links C to that endpoint; an intersection
/// mid-segment inserts a new node at `second`'s index carrying the link.
///
/// After an insertion the node at `second` *is* the inserted node, so the
/// remaining pending nodes connect against the shortened edge; the caller's
/// edge walk then picks up the displaced right endpoint on its next pass.
/// A link to the right endpoint ends the walk for this edge since later
/// pending nodes belong to edges further right.
fn connect_edge<T>(
    first: NodePos,
    second: NodePos,
    data: &mut LaminateData<T>,
    pending: &mut Vec<PendingLink>,
) where
    T: Real,
{
    let reach = probe_reach::<T>();

    for entry_idx in 0..pending.len() {
        let connectable = pending[entry_idx].pos;
        if data.node(connectable).lower.is_some() {
            continue;
        }

        let is_first_node = data.is_first_ply_node(connectable);
        let is_last_node = data.is_last_ply_node(connectable);

        let mut neighbors: Vec<NodePos> = Vec::with_capacity(2);
        if !is_first_node {
            neighbors.push(NodePos::new(
                connectable.layer,
                connectable.ply,
                connectable.node - 1,
            ));
        }
        if !is_last_node {
            neighbors.push(NodePos::new(
                connectable.layer,
                connectable.ply,
                connectable.node + 1,
            ));
        }

        let first_point = data.node(first).point;
        let second_point = data.node(second).point;
        let connect_point = data.node(connectable).point;

        if !is_first_node && !is_last_node {
            let left = data.node(neighbors[0]).point;
            let right = data.node(neighbors[1]).point;
            let probe_start = bisector_point(left, connect_point, right, reach);
            let probe_end = bisector_point(left, connect_point, right, -reach);

            let intersect = seg_seg_intr_tol(
                first_point,
                second_point,
                probe_start,
                probe_end,
                probe_tolerance(),
            );
            let (hit_first, hit_second) = try_link(intersect, first, second, connectable, data);
            if hit_first || hit_second {
                pending[entry_idx].consumed = true;
                if hit_second {
                    return;
                }
                continue;
            }
        }

        let mut intersections: Vec<Vector2<T>> = Vec::with_capacity(2);
        let mut connected = false;

        for &neighbor in neighbors.iter() {
            let neighbor_point = data.node(neighbor).point;
            let probe_start = perpendicular_point(connect_point, neighbor_point, reach);
            let probe_end = perpendicular_point(connect_point, neighbor_point, -reach);

            let intersect = seg_seg_intr_tol(
                first_point,
                second_point,
                probe_start,
                probe_end,
                probe_tolerance(),
            );
            let (hit_first, hit_second) = try_link(intersect, first, second, connectable, data);
            if hit_first || hit_second {
                pending[entry_idx].consumed = true;
                if hit_second {
                    return;
                }
                connected = true;
                break;
            }
            if let Some(point) = intersect {
                intersections.push(point);
            }
        }
        if connected {
            continue;
        }

        if let Some(&first_intersect) = intersections.first() {
            let mut insert_point = first_intersect;
            if intersections.len() == 2 {
                // with two mid-segment candidates prefer the right arm's
                // projection when the edge runs parallel to the right arm
                let right = data.node(neighbors[1]).point;
                if is_parallel_tol(
                    first_point,
                    second_point,
                    connect_point,
                    right,
                    Tolerance::point(),
                ) {
                    insert_point = intersections[1];
                }
            }

            data.insert_node(second, Node::new(insert_point, second));
            data.node_mut(second).upper = Some(connectable);
            data.node_mut(connectable).lower = Some(second);
            pending[entry_idx].consumed = true;
        }
    }
}

/// Link the pending node to whichever edge endpoint the probe intersection
/// coincides with, provided that endpoint has no `upper` link yet and the
/// pending node no `lower` link. Returns which endpoint matched (left,
/// right); `(false, false)` when no link was made.
fn try_link<T>(
    intersect: Option<Vector2<T>>,
    first: NodePos,
    second: NodePos,
    connectable: NodePos,
    data: &mut LaminateData<T>,
) -> (bool, bool)
where
    T: Real,
{
    let Some(point) = intersect else {
        return (false, false);
    };

    let tol = endpoint_tolerance();
    let hit_first = point.fuzzy_eq_tol(data.node(first).point, tol);
    let hit_second = point.fuzzy_eq_tol(data.node(second).point, tol);
    if !hit_first && !hit_second {
        return (false, false);
    }

    let target = if hit_first { first } else { second };
    if data.node(target).upper.is_none() && data.node(connectable).lower.is_none() {
        data.node_mut(target).upper = Some(connectable);
        data.node_mut(connectable).lower = Some(target);
        return (hit_first, hit_second);
    }

    (false, false)
}

/// Reverse the layer order so index 0 becomes the physical bottom, rewriting
/// the layer component of every position and link.
fn reverse_layers<T>(data: &mut LaminateData<T>)
where
    T: Real,
{
    if data.is_empty() {
        return;
    }

    let top = data.layer_count() - 1;
    for node in data.nodes_mut() {
        node.position.layer = top - node.position.layer;
        if let Some(link) = node.upper.as_mut() {
            link.layer = top - link.layer;
        }
        if let Some(link) = node.lower.as_mut() {
            link.layer = top - link.layer;
        }
    }

    data.reverse_layer_order();
}
