//! Orientation predicates used by the bridge selector.

use crate::geom::Winding;
use crate::math::Point;

/// Returns true if the turn `prev -> current -> next` goes against the winding
/// of the contour, i.e. the interior angle at `current` is larger than a
/// straight angle.
///
/// Collinear vertices are not reflex.
#[inline]
pub(crate) fn is_reflex(prev: Point, current: Point, next: Point, winding: Winding) -> bool {
    let sign: f32 = winding.sign();
    (current - prev).cross(next - current) * sign < 0.0
}

/// Returns true if `target` is inside the interior angle of the contour at
/// `current`, boundaries included.
///
/// The interior lies on the left of the edges for a positive winding and on
/// the right for a negative one.
pub(crate) fn wedge_contains(
    prev: Point,
    current: Point,
    next: Point,
    target: Point,
    winding: Winding,
) -> bool {
    let sign: f32 = winding.sign();
    let to_target = target - current;
    let inside_outgoing = (next - current).cross(to_target) * sign >= 0.0;
    let inside_incoming = to_target.cross(prev - current) * sign >= 0.0;

    if is_reflex(prev, current, next, winding) {
        inside_outgoing || inside_incoming
    } else {
        inside_outgoing && inside_incoming
    }
}

#[test]
fn reflex_vertices() {
    use crate::math::point;

    // A counter-clockwise square with a notch at (5, 8).
    let a = point(10.0, 10.0);
    let notch = point(5.0, 8.0);
    let b = point(0.0, 10.0);
    assert!(is_reflex(a, notch, b, Winding::Positive));
    assert!(!is_reflex(b, notch, a, Winding::Positive));
    assert!(!is_reflex(a, notch, b, Winding::Negative));

    // Collinear.
    assert!(!is_reflex(
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 0.0),
        Winding::Positive
    ));
}

#[test]
fn convex_wedge() {
    use crate::math::point;

    // Bottom right corner of a counter-clockwise square.
    let prev = point(0.0, 0.0);
    let corner = point(10.0, 0.0);
    let next = point(10.0, 10.0);

    assert!(wedge_contains(prev, corner, next, point(5.0, 5.0), Winding::Positive));
    assert!(!wedge_contains(prev, corner, next, point(15.0, 5.0), Winding::Positive));
    assert!(!wedge_contains(prev, corner, next, point(5.0, -5.0), Winding::Positive));
    // Same corner on a clockwise contour: the interior is on the other side.
    assert!(!wedge_contains(next, corner, prev, point(5.0, 5.0), Winding::Positive));
    assert!(wedge_contains(next, corner, prev, point(5.0, 5.0), Winding::Negative));
}

#[test]
fn reflex_wedge() {
    use crate::math::point;

    // Notch pointing down into a counter-clockwise contour.
    let prev = point(10.0, 10.0);
    let notch = point(5.0, 5.0);
    let next = point(0.0, 10.0);

    assert!(wedge_contains(prev, notch, next, point(5.0, 0.0), Winding::Positive));
    assert!(wedge_contains(prev, notch, next, point(9.0, 6.0), Winding::Positive));
    assert!(!wedge_contains(prev, notch, next, point(5.0, 9.0), Winding::Positive));
}
