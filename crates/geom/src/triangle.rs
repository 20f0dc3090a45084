use crate::scalar::Scalar;
#[cfg(test)]
use crate::point;
use crate::Point;

/// A 2D triangle defined by three points `a`, `b` and `c`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Triangle<S> {
    pub a: Point<S>,
    pub b: Point<S>,
    pub c: Point<S>,
}

impl<S: Scalar> Triangle<S> {
    #[inline]
    fn get_barycentric_coords_for_point(&self, point: Point<S>) -> (S, S, S) {
        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = point - self.a;
        let inv = S::ONE / v0.cross(v1);
        let a = v0.cross(v2) * inv;
        let b = v2.cross(v1) * inv;
        let c = S::ONE - a - b;

        (a, b, c)
    }

    /// Returns true if the point is strictly inside the triangle.
    ///
    /// Points on the edges or on the vertices are outside, and a degenerate
    /// (zero area) triangle contains nothing. The winding of the vertices
    /// does not matter.
    pub fn contains_point(&self, point: Point<S>) -> bool {
        if self.signed_area() == S::ZERO {
            return false;
        }

        let coords = self.get_barycentric_coords_for_point(point);

        coords.0 > S::ZERO && coords.1 > S::ZERO && coords.2 > S::ZERO
    }

    /// Positive if `a`, `b`, `c` are in counter-clockwise order (y up).
    #[inline]
    pub fn signed_area(&self) -> S {
        (self.b - self.a).cross(self.c - self.a) * S::HALF
    }
}

#[test]
fn test_triangle_contains() {
    assert!(Triangle {
        a: point(0.0, 0.0),
        b: point(1.0, 0.0),
        c: point(0.0, 1.0),
    }
    .contains_point(point(0.2, 0.2)));
    assert!(!Triangle {
        a: point(0.0, 0.0),
        b: point(1.0, 0.0),
        c: point(0.0, 1.0),
    }
    .contains_point(point(1.2, 0.2)));

    // Triangle vertex winding should not matter
    assert!(Triangle {
        a: point(1.0, 0.0),
        b: point(0.0, 0.0),
        c: point(0.0, 1.0),
    }
    .contains_point(point(0.2, 0.2)));

    // Point exactly on the edge counts as outside the triangle.
    assert!(!Triangle {
        a: point(0.0, 0.0),
        b: point(1.0, 0.0),
        c: point(0.0, 1.0),
    }
    .contains_point(point(0.0, 0.0)));
    assert!(!Triangle {
        a: point(0.0, 0.0),
        b: point(2.0, 0.0),
        c: point(0.0, 2.0),
    }
    .contains_point(point(1.0, 0.0)));
}

#[test]
fn test_degenerate_triangle_contains_nothing() {
    let flat = Triangle {
        a: point(0.0, 0.0),
        b: point(1.0, 0.0),
        c: point(2.0, 0.0),
    };

    assert_eq!(flat.signed_area(), 0.0);
    assert!(!flat.contains_point(point(1.0, 0.0)));
    assert!(!flat.contains_point(point(1.0, 1.0)));
}

#[test]
fn test_signed_area() {
    let t = Triangle {
        a: point(0.0, 0.0),
        b: point(4.0, 0.0),
        c: point(0.0, 2.0),
    };
    assert_eq!(t.signed_area(), 4.0);

    let flipped = Triangle {
        a: t.a,
        b: t.c,
        c: t.b,
    };
    assert_eq!(flipped.signed_area(), -4.0);
}
