use laminate_sketch::core::math::{line_line_intr, vec2};

#[test]
fn crossing_lines() {
    let intr = line_line_intr(
        vec2(-1.0, -1.0),
        vec2(1.0, 1.0),
        vec2(-1.0, 1.0),
        vec2(1.0, -1.0),
    );
    assert!(intr.is_some_and(|p| p.fuzzy_eq(vec2(0.0, 0.0))));
}

#[test]
fn intersect_beyond_defining_points() {
    // infinite lines intersect even though the defining segments do not
    let intr = line_line_intr(
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(5.0, -1.0),
        vec2(5.0, 1.0),
    );
    assert!(intr.is_some_and(|p| p.fuzzy_eq(vec2(5.0, 0.0))));
}

#[test]
fn parallel_lines_return_none() {
    assert!(line_line_intr(
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(0.0, 1.0),
        vec2(1.0, 1.0)
    )
    .is_none());
}

#[test]
fn collinear_lines_return_none() {
    assert!(line_line_intr(
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(2.0, 0.0),
        vec2(3.0, 0.0)
    )
    .is_none());
}

#[test]
fn slanted_crossing() {
    let intr = line_line_intr(
        vec2(0.0, 0.0),
        vec2(4.0, 4.0),
        vec2(0.0, 4.0),
        vec2(4.0, 0.0),
    );
    assert!(intr.is_some_and(|p| p.fuzzy_eq(vec2(2.0, 2.0))));
}
