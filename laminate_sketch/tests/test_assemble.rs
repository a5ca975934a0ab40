mod test_utils;

use laminate_sketch::{
    core::math::vec2,
    laminate::{LaminateSketch, LoadError, NodePos},
    sketch::Orientation,
};
use test_utils::{assert_laminate_invariants, node_at, ply_points, raw_polyline, raw_sketch_zero};

#[test]
fn two_stacked_horizontal_lines() {
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[
            &[(0.0, 0.0), (10.0, 0.0)],
            &[(0.0, 1.0), (10.0, 1.0)],
        ]))
        .unwrap();

    let layers = session.original_layers();
    assert_laminate_invariants(layers);

    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].len(), 1);
    assert_eq!(layers[1].len(), 1);
    assert_eq!(layers[0].ply(0).len(), 2);
    assert_eq!(layers[1].ply(0).len(), 2);

    // bottom nodes link straight up to the nodes above them
    let bottom_left = node_at(layers, NodePos::new(0, 0, 0));
    assert!(bottom_left.point.fuzzy_eq(vec2(0.0, 0.0)));
    assert_eq!(bottom_left.upper, Some(NodePos::new(1, 0, 0)));
    assert_eq!(bottom_left.lower, None);

    let bottom_right = node_at(layers, NodePos::new(0, 0, 1));
    assert!(bottom_right.point.fuzzy_eq(vec2(10.0, 0.0)));
    assert_eq!(bottom_right.upper, Some(NodePos::new(1, 0, 1)));

    let top_left = node_at(layers, NodePos::new(1, 0, 0));
    assert!(top_left.point.fuzzy_eq(vec2(0.0, 1.0)));
    assert_eq!(top_left.lower, Some(NodePos::new(0, 0, 0)));
    assert_eq!(top_left.upper, None);
}

#[test]
fn slanted_top_projects_onto_flat_bottom() {
    // the apex of the slanted top ply has no matching bottom vertex: its
    // probe lands mid-segment and inserts a synthetic node near x = 5; the
    // top endpoints likewise project along their segment normals, landing
    // inside the 0.01 link tolerance of nothing, so they insert too
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[
            &[(0.0, 0.0), (10.0, 0.0)],
            &[(0.0, 1.0), (5.0, 2.0), (10.0, 1.0)],
        ]))
        .unwrap();

    let layers = session.original_layers();
    assert_laminate_invariants(layers);

    assert_eq!(layers.len(), 2);
    let bottom = layers[0].ply(0);
    let top = layers[1].ply(0);
    assert_eq!(top.len(), 3);
    assert_eq!(bottom.len(), 5);

    let bottom_points = ply_points(layers, 0, 0);
    let expected_x = [0.0, 0.2, 5.4, 9.8, 10.0];
    for (point, x) in bottom_points.iter().zip(expected_x) {
        assert!(
            point.fuzzy_eq(vec2(x, 0.0)),
            "expected x {x}, got {point:?}"
        );
    }

    // the apex (5, 2) links down to the inserted node at (5.4, 0)
    let apex = node_at(layers, NodePos::new(1, 0, 1));
    assert!(apex.point.fuzzy_eq(vec2(5.0, 2.0)));
    assert_eq!(apex.lower, Some(NodePos::new(0, 0, 2)));
    assert_eq!(
        node_at(layers, NodePos::new(0, 0, 2)).upper,
        Some(NodePos::new(1, 0, 1))
    );

    // the top endpoints link to the other inserted nodes
    assert_eq!(
        node_at(layers, NodePos::new(1, 0, 0)).lower,
        Some(NodePos::new(0, 0, 1))
    );
    assert_eq!(
        node_at(layers, NodePos::new(1, 0, 2)).lower,
        Some(NodePos::new(0, 0, 3))
    );

    // the original bottom corners stay unlinked
    assert_eq!(node_at(layers, NodePos::new(0, 0, 0)).upper, None);
    assert_eq!(node_at(layers, NodePos::new(0, 0, 4)).upper, None);
}

#[test]
fn apex_links_to_matching_interior_vertex() {
    // the top ply's apex sits directly above the bottom ply's interior
    // vertex: the angle bisector at the apex points straight down and lands
    // on that vertex within the link tolerance, so they connect without any
    // insertion for the apex itself
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[
            &[(0.0, 0.0), (5.0, 0.5), (10.0, 0.0)],
            &[(0.0, 1.5), (5.0, 2.0), (10.0, 1.5)],
        ]))
        .unwrap();

    let layers = session.original_layers();
    assert_laminate_invariants(layers);
    assert_eq!(layers.len(), 2);

    let bottom = layers[0].ply(0);
    assert_eq!(bottom.len(), 5);

    // the original interior vertex carries the link to the apex
    let keel = node_at(layers, NodePos::new(0, 0, 2));
    assert!(keel.point.fuzzy_eq(vec2(5.0, 0.5)));
    assert_eq!(keel.upper, Some(NodePos::new(1, 0, 1)));

    // the top endpoints project along their segment normals and insert
    // synthetic bottom nodes near the corners
    assert_eq!(
        node_at(layers, NodePos::new(1, 0, 0)).lower,
        Some(NodePos::new(0, 0, 1))
    );
    assert_eq!(
        node_at(layers, NodePos::new(1, 0, 2)).lower,
        Some(NodePos::new(0, 0, 3))
    );
    assert_eq!(node_at(layers, NodePos::new(0, 0, 0)).upper, None);
    assert_eq!(node_at(layers, NodePos::new(0, 0, 4)).upper, None);
}

#[test]
fn right_to_left_input_is_normalized() {
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[&[(10.0, 0.0), (0.0, 0.0)]]))
        .unwrap();

    let layers = session.original_layers();
    assert_eq!(layers.len(), 1);
    let points = ply_points(layers, 0, 0);
    assert!(points[0].fuzzy_eq(vec2(0.0, 0.0)));
    assert!(points[1].fuzzy_eq(vec2(10.0, 0.0)));
}

#[test]
fn two_disjoint_plies_in_one_layer() {
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[
            &[(0.0, 0.0), (4.0, 0.0)],
            &[(6.0, 0.0), (10.0, 0.0)],
            &[(0.0, 1.0), (10.0, 1.0)],
        ]))
        .unwrap();

    let layers = session.original_layers();
    assert_laminate_invariants(layers);

    assert_eq!(layers.len(), 2);
    // bottom layer has two plies ordered left to right by leftmost x
    assert_eq!(layers[0].len(), 2);
    assert!(layers[0].ply(0).first_node().point.fuzzy_eq(vec2(0.0, 0.0)));
    assert!(layers[0].ply(1).first_node().point.fuzzy_eq(vec2(6.0, 0.0)));
    // the top layer is one ply spanning both
    assert_eq!(layers[1].len(), 1);

    // each bottom ply connects to the matching end of the spanning ply
    assert_eq!(
        node_at(layers, NodePos::new(0, 0, 0)).upper,
        Some(NodePos::new(1, 0, 0))
    );
    assert_eq!(
        node_at(layers, NodePos::new(0, 1, 1)).upper,
        Some(NodePos::new(1, 0, 1))
    );
}

#[test]
fn overlapping_plies_are_malformed() {
    // two polylines at the same level with overlapping x ranges: each sits
    // inside the other's upward band, so neither classifies as topmost
    let mut session = LaminateSketch::new();
    let result = session.load(raw_sketch_zero(&[
        &[(0.0, 0.0), (6.0, 0.0)],
        &[(4.0, 0.0), (10.0, 0.0)],
    ]));

    assert_eq!(result, Err(LoadError::NoTopmostPly { remaining: 2 }));
    assert!(session.is_empty());
    assert!(session.layers().is_empty());
}

#[test]
fn empty_sketch_is_rejected() {
    let mut session = LaminateSketch::<f64>::new();
    let result = session.load(raw_sketch_zero(&[]));
    assert_eq!(result, Err(LoadError::EmptySketch));
    assert!(session.is_empty());
}

#[test]
fn orientations_carry_through_to_plies() {
    let mut session = LaminateSketch::new();
    session
        .load(
            [
                raw_polyline(&[(0.0, 0.0), (10.0, 0.0)], Orientation::Perpendicular),
                raw_polyline(&[(0.0, 1.0), (10.0, 1.0)], Orientation::Other),
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();

    let layers = session.original_layers();
    assert_eq!(layers[0].ply(0).orientation, Orientation::Perpendicular);
    assert_eq!(layers[1].ply(0).orientation, Orientation::Other);
}

#[test]
fn original_is_translated_to_origin() {
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[
            &[(5.0, 7.0), (15.0, 7.0)],
            &[(5.0, 8.0), (15.0, 8.0)],
        ]))
        .unwrap();

    let layers = session.original_layers();
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    for layer in layers {
        for ply in layer.iter() {
            for node in ply.iter() {
                min_x = min_x.min(node.point.x);
                min_y = min_y.min(node.point.y);
            }
        }
    }
    assert!(min_x.abs() < 1e-9);
    assert!(min_y.abs() < 1e-9);
}

#[test]
fn three_layer_stack_links_through() {
    let mut session = LaminateSketch::new();
    session
        .load(raw_sketch_zero(&[
            &[(0.0, 2.0), (10.0, 2.0)],
            &[(0.0, 0.0), (10.0, 0.0)],
            &[(0.0, 1.0), (10.0, 1.0)],
        ]))
        .unwrap();

    let layers = session.original_layers();
    assert_laminate_invariants(layers);
    assert_eq!(layers.len(), 3);

    // layer order is bottom to top regardless of input order
    assert!((node_at(layers, NodePos::new(0, 0, 0)).point.y - 0.0).abs() < 1e-9);
    assert!((node_at(layers, NodePos::new(1, 0, 0)).point.y - 1.0).abs() < 1e-9);
    assert!((node_at(layers, NodePos::new(2, 0, 0)).point.y - 2.0).abs() < 1e-9);

    // the full column is linked bottom to top
    assert_eq!(
        node_at(layers, NodePos::new(0, 0, 0)).upper,
        Some(NodePos::new(1, 0, 0))
    );
    assert_eq!(
        node_at(layers, NodePos::new(1, 0, 0)).upper,
        Some(NodePos::new(2, 0, 0))
    );
    assert_eq!(node_at(layers, NodePos::new(2, 0, 0)).upper, None);
}
