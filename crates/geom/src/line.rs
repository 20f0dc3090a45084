use crate::scalar::Scalar;
use crate::utils::min_max;
use crate::{point, Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Intersects this segment with the horizontal segment going from `origin`
    /// to `origin + (length, 0)`.
    ///
    /// Endpoints are included on both sides. A segment that is itself horizontal
    /// is collinear with the ray and never reported. When one of this segment's
    /// endpoints lies on the ray's line it is returned as is, so that rays going
    /// exactly through a vertex produce that vertex's exact position.
    pub fn horizontal_ray_intersection(&self, origin: Point<S>, length: S) -> Option<Point<S>> {
        let y = origin.y;
        let (min_y, max_y) = min_max(self.from.y, self.to.y);
        if !(y >= min_y && y <= max_y) {
            return None;
        }

        let dy = self.to.y - self.from.y;
        if dy == S::ZERO {
            return None;
        }

        let x = if y == self.from.y {
            self.from.x
        } else if y == self.to.y {
            self.to.x
        } else {
            self.from.x + (y - self.from.y) * (self.to.x - self.from.x) / dy
        };

        if !(x >= origin.x && x <= origin.x + length) {
            return None;
        }

        Some(point(x, y))
    }

    /// Returns true if the two segments cross at a single point lying strictly
    /// inside both of them.
    ///
    /// Touching, overlapping and endpoint-sharing segments do not cross.
    pub fn crosses(&self, other: &Self) -> bool {
        let v1 = self.to_vector();
        let v2 = other.to_vector();

        let d1 = v1.cross(other.from - self.from);
        let d2 = v1.cross(other.to - self.from);
        let d3 = v2.cross(self.from - other.from);
        let d4 = v2.cross(self.to - other.from);

        let straddles = |a: S, b: S| (a > S::ZERO && b < S::ZERO) || (a < S::ZERO && b > S::ZERO);

        straddles(d1, d2) && straddles(d3, d4)
    }

    /// Returns true if `p` lies on the segment, endpoints excluded.
    ///
    /// The collinearity test is exact, so this is only meaningful for points
    /// that were not computed from the segment.
    pub fn strictly_contains(&self, p: Point<S>) -> bool {
        let v = self.to_vector();
        let offset = p - self.from;
        if v.cross(offset) != S::ZERO {
            return false;
        }

        let d = v.dot(offset);

        d > S::ZERO && d < v.square_length()
    }
}

#[test]
fn touching_and_overlapping() {
    let l1 = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 10.0),
    };
    let l2 = LineSegment {
        from: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };
    assert!(!l1.crosses(&l2));

    let l3 = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };
    let l4 = LineSegment {
        from: point(5.0, 0.0),
        to: point(15.0, 0.0),
    };
    assert!(!l3.crosses(&l4));
    assert!(l3.strictly_contains(l4.from));
    assert!(!l3.strictly_contains(l4.to));
}

#[test]
fn crossing_segments() {
    let l1 = LineSegment {
        from: point(0.0, 0.0),
        to: point(4.0, 4.0),
    };
    let l2 = LineSegment {
        from: point(0.0, 4.0),
        to: point(4.0, 0.0),
    };
    assert!(l1.crosses(&l2));
    assert!(l2.crosses(&l1));

    // T junction: the end of l3 touches the middle of l1.
    let l3 = LineSegment {
        from: point(2.0, 2.0),
        to: point(4.0, 0.0),
    };
    assert!(!l1.crosses(&l3));
    assert!(l1.strictly_contains(l3.from));
}

#[test]
fn points_on_segment() {
    let s = LineSegment {
        from: point(40.0f32, 0.0),
        to: point(31.0, 21.0),
    };

    assert!(s.strictly_contains(point(34.0, 14.0)));
    assert!(!s.strictly_contains(point(40.0, 0.0)));
    assert!(!s.strictly_contains(point(31.0, 21.0)));
    // On the line, past the ends.
    assert!(!s.strictly_contains(point(43.0, -7.0)));
    assert!(!s.strictly_contains(point(28.0, 28.0)));
    // Off the line.
    assert!(!s.strictly_contains(point(34.0, 13.0)));
}

#[test]
fn horizontal_ray() {
    let edge = LineSegment {
        from: point(10.0f32, 0.0),
        to: point(10.0, 10.0),
    };

    assert_eq!(
        edge.horizontal_ray_intersection(point(4.0, 6.0), 10.0),
        Some(point(10.0, 6.0))
    );
    // Too short.
    assert_eq!(edge.horizontal_ray_intersection(point(4.0, 6.0), 5.0), None);
    // Behind the origin.
    assert_eq!(edge.horizontal_ray_intersection(point(12.0, 6.0), 10.0), None);
    // Above the segment.
    assert_eq!(edge.horizontal_ray_intersection(point(4.0, 11.0), 10.0), None);
    // Going through an endpoint.
    assert_eq!(
        edge.horizontal_ray_intersection(point(4.0, 10.0), 10.0),
        Some(point(10.0, 10.0))
    );

    // Collinear horizontal segments are ignored.
    let flat = LineSegment {
        from: point(6.0f32, 6.0),
        to: point(8.0, 6.0),
    };
    assert_eq!(flat.horizontal_ray_intersection(point(4.0, 6.0), 10.0), None);
}

#[test]
fn horizontal_ray_through_slanted_vertex() {
    let edge = LineSegment {
        from: point(8.0f32, 0.0),
        to: point(10.0, 4.0),
    };

    assert_eq!(
        edge.horizontal_ray_intersection(point(4.0, 4.0), 10.0),
        Some(point(10.0, 4.0))
    );
    assert_eq!(
        edge.horizontal_ray_intersection(point(4.0, 2.0), 10.0),
        Some(point(9.0, 2.0))
    );
}
