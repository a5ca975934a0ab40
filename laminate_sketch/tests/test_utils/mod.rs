#![allow(dead_code)]
use laminate_sketch::core::math::Vector2;
use laminate_sketch::laminate::{Layer, Node, NodePos};
use laminate_sketch::polyline::Polyline;
use laminate_sketch::sketch::{Orientation, RawPolyline, RawSketch};

/// Build a polyline from coordinate pairs.
pub fn pline_from(points: &[(f64, f64)]) -> Polyline<f64> {
    points.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

/// Build a tagged raw polyline from coordinate pairs.
pub fn raw_polyline(points: &[(f64, f64)], orientation: Orientation) -> RawPolyline<f64> {
    RawPolyline::new(pline_from(points), orientation)
}

/// Build a raw sketch from coordinate pair slices, all tagged with the same
/// orientation.
pub fn raw_sketch_zero(polylines: &[&[(f64, f64)]]) -> RawSketch<f64> {
    polylines
        .iter()
        .map(|points| raw_polyline(points, Orientation::Zero))
        .collect()
}

/// Look up a node by position in a layer slice.
pub fn node_at(layers: &[Layer<f64>], pos: NodePos) -> &Node<f64> {
    layers[pos.layer].ply(pos.ply).node(pos.node)
}

/// Assert the structural invariants every laminate must satisfy: every ply
/// has at least two nodes, stored positions match storage indexes, and
/// cross-layer links are symmetric between adjacent layers.
pub fn assert_laminate_invariants(layers: &[Layer<f64>]) {
    assert!(!layers.is_empty(), "laminate has no layers");
    for (layer_idx, layer) in layers.iter().enumerate() {
        assert!(!layer.is_empty(), "layer {layer_idx} has no plies");
        for (ply_idx, ply) in layer.iter().enumerate() {
            assert!(
                ply.len() >= 2,
                "ply {layer_idx}/{ply_idx} has fewer than two nodes"
            );
            for (node_idx, node) in ply.iter().enumerate() {
                let pos = node.position;
                assert_eq!(
                    (pos.layer, pos.ply, pos.node),
                    (layer_idx, ply_idx, node_idx),
                    "stored position does not match storage index"
                );
                if let Some(link) = node.upper {
                    assert_eq!(
                        link.layer,
                        layer_idx + 1,
                        "upper link of {pos:?} does not point to the layer above"
                    );
                    assert_eq!(
                        node_at(layers, link).lower,
                        Some(pos),
                        "upper link of {pos:?} is not symmetric"
                    );
                }
                if let Some(link) = node.lower {
                    assert_eq!(
                        link.layer + 1,
                        layer_idx,
                        "lower link of {pos:?} does not point to the layer below"
                    );
                    assert_eq!(
                        node_at(layers, link).upper,
                        Some(pos),
                        "lower link of {pos:?} is not symmetric"
                    );
                }
            }
        }
    }
}

/// Collect the points of a ply for comparison.
pub fn ply_points(layers: &[Layer<f64>], layer: usize, ply: usize) -> Vec<Vector2<f64>> {
    layers[layer].ply(ply).iter().map(|n| n.point).collect()
}
