mod test_utils;

use laminate_sketch::{core::math::vec2, core::traits::Tolerance, pline, polyline::Polyline};
use test_utils::pline_from;

#[test]
fn horizontal_line_offsets_up() {
    // left-to-right travel, positive offset is to the left which is up
    let pl = pline![(0.0, 0.0), (10.0, 0.0)];
    let result = pl.offset(3.0);
    assert_eq!(result.len(), 2);
    assert!(result.fuzzy_eq(&pline![(0.0, 3.0), (10.0, 3.0)]));

    let result = pl.offset(-3.0);
    assert!(result.fuzzy_eq(&pline![(0.0, -3.0), (10.0, -3.0)]));
}

#[test]
fn vertex_count_is_preserved() {
    let pl = pline_from(&[(0.0, 0.0), (4.0, 1.0), (8.0, -1.0), (12.0, 0.5)]);
    let result = pl.offset(2.0);
    assert_eq!(result.len(), pl.len());
}

#[test]
fn interior_vertex_is_shifted_segment_intersection() {
    // right-angle corner: both adjacent segments shifted left by 1 meet one
    // unit inside the corner
    let pl = pline![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)];
    let result = pl.offset(1.0);
    assert_eq!(result.len(), 3);
    assert!(result[0].fuzzy_eq(vec2(0.0, 1.0)));
    assert!(result[1].fuzzy_eq(vec2(4.0, 1.0)));
    assert!(result[2].fuzzy_eq(vec2(4.0, 5.0)));
}

#[test]
fn zero_offset_is_identity() {
    let pl = pline_from(&[(0.0, 0.0), (4.0, 1.0), (8.0, -1.0), (12.0, 0.5)]);
    let result = pl.offset(0.0);
    assert!(result.fuzzy_eq_tol(&pl, Tolerance::new(1e-9, 1e-9)));
}

#[test]
fn round_trip_approximates_input() {
    // offsetting up then down again is not an exact inverse, but it must
    // stay within a tolerance proportional to the offset distance
    let pl = pline_from(&[(0.0, 0.0), (5.0, 1.0), (10.0, 0.0), (15.0, 2.0)]);
    let d = 2.0;
    let round_trip = pl.offset(d).offset(-d);
    assert_eq!(round_trip.len(), pl.len());
    for (a, b) in pl.iter().zip(round_trip.iter()) {
        assert!(a.fuzzy_eq_tol(*b, Tolerance::new(0.1 * d, 0.0)));
    }
}

#[test]
fn degenerate_input_yields_empty() {
    // fewer than two vertexes
    assert!(Polyline::<f64>::new().offset(1.0).is_empty());
    assert!(pline![(1.0, 1.0)].offset(1.0).is_empty());

    // coincident adjacent vertexes
    let pl = pline![(0.0, 0.0), (0.0, 0.0), (5.0, 0.0)];
    assert!(pl.offset(1.0).is_empty());
    let pl = pline![(0.0, 0.0), (5.0, 0.0), (5.0, 0.0)];
    assert!(pl.offset(1.0).is_empty());
}

#[test]
fn parallel_joint_uses_midpoint_fallback() {
    // collinear interior vertex: the shifted segments are parallel so the
    // joint falls back to the midpoint of the shifted endpoints
    let pl = pline![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)];
    let result = pl.offset(2.0);
    assert_eq!(result.len(), 3);
    assert!(result[0].fuzzy_eq(vec2(0.0, 2.0)));
    // midpoint of the previously emitted (0, 2) and the shifted start (5, 2)
    assert!(result[1].fuzzy_eq(vec2(2.5, 2.0)));
    assert!(result[2].fuzzy_eq(vec2(10.0, 2.0)));
}
