use crate::math::{LineSegment, Point};
use crate::{BoundaryId, BoundaryList, PolygonWithHoles};

/// The closest boundary edge hit by the horizontal ray cast from a hole.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Where the ray hits the edge.
    pub position: Point,
    /// The position of the edge's first endpoint in the boundary list. The
    /// edge goes from there to the next position.
    pub edge_from: BoundaryId,
    /// Squared distance between the ray's origin and `position`.
    pub square_distance: f32,
}

/// The length of the rays cast by the visibility scan: the width of the
/// outer contour.
///
/// A ray starting anywhere inside the contour and going that far towards
/// positive x reaches past the contour's rightmost point.
pub fn ray_length(polygon: &PolygonWithHoles) -> f32 {
    let mut contour = polygon.contour().iter();
    let first = match contour.next() {
        Some(p) => p.x,
        None => return 0.0,
    };

    let (min_x, max_x) = contour.fold((first, first), |(min, max), p| {
        (min.min(p.x), max.max(p.x))
    });

    max_x - min_x
}

/// Casts a horizontal ray from `origin` towards positive x and returns the
/// closest edge of the boundary it hits, if any.
///
/// All edges of the current boundary are tested, including the one closing
/// the loop. Horizontal edges are ignored. When two edges are hit at the same
/// distance (the ray goes through the vertex they share) the one that comes
/// first in the list wins.
pub fn find_visible_edge(
    polygon: &PolygonWithHoles,
    boundary: &BoundaryList,
    origin: Point,
    ray_length: f32,
) -> Option<RayHit> {
    let mut closest: Option<RayHit> = None;

    for (from, to) in boundary.edges() {
        let edge = LineSegment {
            from: polygon.vertex(boundary.vertex(from)),
            to: polygon.vertex(boundary.vertex(to)),
        };

        let position = match edge.horizontal_ray_intersection(origin, ray_length) {
            Some(position) => position,
            None => continue,
        };

        let square_distance = (position - origin).square_length();
        if closest.map_or(true, |hit| square_distance < hit.square_distance) {
            closest = Some(RayHit {
                position,
                edge_from: from,
                square_distance,
            });
        }
    }

    closest
}

#[cfg(test)]
fn square_with_contour(hole: &[Point]) -> (PolygonWithHoles, BoundaryList) {
    use crate::math::point;
    use crate::VertexId;

    let polygon = PolygonWithHoles::from_rings(
        &[
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ],
        &[hole],
    );
    let mut boundary = BoundaryList::new();
    for i in 0..polygon.num_contour_points() {
        boundary.push_back(VertexId::from_usize(i));
    }

    (polygon, boundary)
}

#[test]
fn ray_hits_right_edge() {
    use crate::math::point;

    let (polygon, boundary) = square_with_contour(&[
        point(2.0, 4.0),
        point(2.0, 6.0),
        point(4.0, 6.0),
        point(4.0, 4.0),
    ]);

    assert_eq!(ray_length(&polygon), 10.0);

    let origin = point(4.0, 6.0);
    let hit = find_visible_edge(&polygon, &boundary, origin, ray_length(&polygon)).unwrap();
    assert_eq!(hit.position, point(10.0, 6.0));
    assert_eq!(boundary.vertex(hit.edge_from).0, 1);
    assert_eq!(hit.square_distance, 36.0);
}

#[test]
fn ray_through_vertex_picks_first_edge() {
    use crate::math::point;
    use crate::VertexId;

    let polygon = PolygonWithHoles::new(&[
        point(0.0, 0.0),
        point(8.0, 0.0),
        point(10.0, 5.0),
        point(8.0, 10.0),
        point(0.0, 10.0),
    ]);
    let mut boundary = BoundaryList::new();
    for i in 0..polygon.num_contour_points() {
        boundary.push_back(VertexId::from_usize(i));
    }

    // Edges 1->2 and 2->3 both contain (10, 5).
    let hit = find_visible_edge(&polygon, &boundary, point(4.0, 5.0), 10.0).unwrap();
    assert_eq!(hit.position, point(10.0, 5.0));
    assert_eq!(boundary.vertex(hit.edge_from), VertexId(1));

    // The top edge is collinear with this ray and ignored.
    let hit = find_visible_edge(&polygon, &boundary, point(4.0, 10.0), 10.0).unwrap();
    assert_eq!(hit.position, point(8.0, 10.0));
    assert_eq!(boundary.vertex(hit.edge_from), VertexId(2));
}

#[test]
fn no_visible_edge() {
    use crate::math::point;

    let (polygon, boundary) = square_with_contour(&[
        point(12.0, 4.0),
        point(12.0, 6.0),
        point(14.0, 5.0),
    ]);

    assert_eq!(
        find_visible_edge(&polygon, &boundary, point(14.0, 5.0), ray_length(&polygon)),
        None
    );
}
