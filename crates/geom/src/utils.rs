//! Small helpers shared by the keyhole crates.

use crate::scalar::Scalar;
use crate::{Point, Winding};

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Compute the signed area of a closed polygon.
///
/// The area is positive for counter-clockwise polygons (with the y axis
/// pointing up) and negative for clockwise ones.
pub fn signed_area<S: Scalar>(points: &[Point<S>]) -> S {
    if points.len() < 3 {
        return S::ZERO;
    }

    let first = points[0];
    let mut double_area = S::ZERO;
    let mut v0 = points[1] - first;
    for p in &points[2..] {
        let v1 = *p - first;
        double_area += v0.cross(v1);
        v0 = v1;
    }

    double_area * S::HALF
}

/// Compute the winding of a closed polygon.
///
/// The polygon is expected to have a non-null area and no self-intersections, otherwise
/// the result is unspecified. Returns `None` for polygons with a null area.
pub fn compute_winding<S: Scalar>(points: &[Point<S>]) -> Option<Winding> {
    let area = signed_area(points);
    if area > S::ZERO {
        Some(Winding::Positive)
    } else if area < S::ZERO {
        Some(Winding::Negative)
    } else {
        None
    }
}

#[test]
fn polygon_winding() {
    use crate::point;

    let ccw = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];
    assert_eq!(signed_area(&ccw), 100.0);
    assert_eq!(compute_winding(&ccw), Some(Winding::Positive));

    let mut cw = ccw;
    cw.reverse();
    assert_eq!(signed_area(&cw), -100.0);
    assert_eq!(compute_winding(&cw), Some(Winding::Negative));

    assert_eq!(compute_winding(&ccw[..2]), None);
    assert_eq!(
        compute_winding(&[point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)]),
        None
    );
}
