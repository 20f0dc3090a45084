use crate::geom::utils::compute_winding;
use crate::math::{LineSegment, Point, Triangle, Vector};
use crate::math_utils::{is_reflex, wedge_contains};
use crate::{BoundaryId, BoundaryList, BridgeOptions, PolygonWithHoles, RayHit, Winding};

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// How a bridge point was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BridgeKind {
    /// The ray went through a boundary vertex.
    Vertex,
    /// The endpoint with the larger x of the edge hit by the ray.
    EdgeEndpoint,
    /// A reflex vertex or the end of an earlier bridge, hiding the edge
    /// endpoint from the hole.
    Reflex,
}

/// The boundary position a hole gets connected to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BridgePoint {
    pub position: BoundaryId,
    pub kind: BridgeKind,
}

/// The winding used to classify the vertices of the boundary.
///
/// Holes are wound opposite to the contour, so merging them does not change
/// the orientation of the boundary.
pub fn boundary_winding(polygon: &PolygonWithHoles, options: &BridgeOptions) -> Winding {
    options
        .contour_winding
        .or_else(|| compute_winding(polygon.contour()))
        .unwrap_or(Winding::Positive)
}

/// Picks the boundary position that the hole vertex `origin` can be connected
/// to without crossing the boundary, given the closest edge hit by the ray
/// cast from `origin`.
///
/// If the hit is within `options.epsilon` of one of the edge's endpoints, that
/// endpoint is used. Otherwise the edge's endpoint with the larger x is used,
/// unless reflex vertices of the boundary lie inside the triangle formed by
/// `origin`, the hit and that endpoint. In that case the one with the smallest
/// angle to the ray wins, the closest one on ties. Vertices on the segment
/// between `origin` and the endpoint also block it, and the ends of earlier
/// bridges count as reflex.
///
/// When the chosen vertex appears several times in the boundary, the copy
/// whose interior angle faces `origin` is returned.
pub fn select_bridge_point(
    polygon: &PolygonWithHoles,
    boundary: &BoundaryList,
    origin: Point,
    hit: &RayHit,
    options: &BridgeOptions,
) -> BridgePoint {
    let winding = boundary_winding(polygon, options);
    let position_of = |id: BoundaryId| polygon.vertex(boundary.vertex(id));

    let from = hit.edge_from;
    let to = boundary.next(from);
    let square_epsilon = options.epsilon * options.epsilon;

    let is_on = |id: BoundaryId| (hit.position - position_of(id)).square_length() <= square_epsilon;

    let (position, kind) = if is_on(from) {
        (from, BridgeKind::Vertex)
    } else if is_on(to) {
        (to, BridgeKind::Vertex)
    } else {
        let endpoint = if position_of(to).x > position_of(from).x {
            to
        } else {
            from
        };

        match find_blocking_vertex(
            polygon,
            boundary,
            origin,
            hit.position,
            endpoint,
            winding,
            options,
        ) {
            Some(reflex) => (reflex, BridgeKind::Reflex),
            None => (endpoint, BridgeKind::EdgeEndpoint),
        }
    };

    BridgePoint {
        position: pick_facing_copy(polygon, boundary, position, origin, winding),
        kind,
    }
}

/// Looks for the vertex hiding `endpoint` from `origin` with the smallest
/// angle to the ray.
///
/// Candidates are reflex vertices and vertices held by several positions.
/// A bridge splits the angle at its ends, so neither copy of a bridged
/// vertex needs to be reflex on its own. They must be strictly inside the
/// triangle or on its side going from `origin` to `endpoint`.
fn find_blocking_vertex(
    polygon: &PolygonWithHoles,
    boundary: &BoundaryList,
    origin: Point,
    intersection: Point,
    endpoint: BoundaryId,
    winding: Winding,
    options: &BridgeOptions,
) -> Option<BoundaryId> {
    let position_of = |id: BoundaryId| polygon.vertex(boundary.vertex(id));

    let triangle = Triangle {
        a: origin,
        b: intersection,
        c: position_of(endpoint),
    };
    let sight_line = LineSegment {
        from: origin,
        to: position_of(endpoint),
    };

    let mut best: Option<Candidate> = None;

    for (position, vertex) in boundary.iter() {
        if position == endpoint {
            continue;
        }

        let current = polygon.vertex(vertex);
        if !triangle.contains_point(current) && !sight_line.strictly_contains(current) {
            continue;
        }

        let prev = position_of(boundary.prev(position));
        let next = position_of(boundary.next(position));
        let is_candidate = is_reflex(prev, current, next, winding)
            || boundary.positions_of(vertex).nth(1).is_some();
        if !is_candidate {
            continue;
        }

        let offset = current - origin;
        let candidate = Candidate {
            position,
            offset,
            angle: offset.y.atan2(offset.x).abs(),
            square_distance: offset.square_length(),
        };

        let is_better = match &best {
            None => true,
            Some(best) => {
                let aligned = offset.cross(best.offset) == 0.0 && offset.dot(best.offset) > 0.0;
                if aligned || (candidate.angle - best.angle).abs() <= options.angle_epsilon {
                    candidate.square_distance < best.square_distance
                } else {
                    candidate.angle < best.angle
                }
            }
        };

        if is_better {
            best = Some(candidate);
        }
    }

    best.map(|candidate| candidate.position)
}

struct Candidate {
    position: BoundaryId,
    offset: Vector,
    angle: f32,
    square_distance: f32,
}

/// Bridge endpoints and the rightmost vertex of merged holes appear twice in
/// the boundary. Only one of the copies can be connected without crossing the
/// bridge they belong to.
fn pick_facing_copy(
    polygon: &PolygonWithHoles,
    boundary: &BoundaryList,
    chosen: BoundaryId,
    origin: Point,
    winding: Winding,
) -> BoundaryId {
    let vertex = boundary.vertex(chosen);
    if boundary.positions_of(vertex).nth(1).is_none() {
        return chosen;
    }

    let faces_origin = |position: BoundaryId| {
        wedge_contains(
            polygon.vertex(boundary.vertex(boundary.prev(position))),
            polygon.vertex(vertex),
            polygon.vertex(boundary.vertex(boundary.next(position))),
            origin,
            winding,
        )
    };

    if faces_origin(chosen) {
        return chosen;
    }

    boundary
        .positions_of(vertex)
        .find(|&position| position != chosen && faces_origin(position))
        .unwrap_or(chosen)
}

#[cfg(test)]
use crate::ray_length;

#[cfg(test)]
fn contour_boundary(polygon: &PolygonWithHoles) -> BoundaryList {
    let mut boundary = BoundaryList::new();
    for i in 0..polygon.num_contour_points() {
        boundary.push_back(crate::VertexId::from_usize(i));
    }

    boundary
}

#[test]
fn edge_endpoint_with_larger_x() {
    use crate::find_visible_edge;
    use crate::math::point;

    // Slanted right edge going from (10, 0) to (14, 10).
    let polygon = PolygonWithHoles::from_rings(
        &[
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(14.0, 10.0),
            point(0.0, 10.0),
        ],
        &[[point(2.0, 4.0), point(2.0, 6.0), point(4.0, 5.0)]],
    );
    let boundary = contour_boundary(&polygon);
    let origin = point(4.0, 5.0);
    let hit = find_visible_edge(&polygon, &boundary, origin, 14.0).unwrap();
    assert_eq!(hit.position, point(12.0, 5.0));

    let bridge = select_bridge_point(&polygon, &boundary, origin, &hit, &BridgeOptions::DEFAULT);
    assert_eq!(bridge.kind, BridgeKind::EdgeEndpoint);
    assert_eq!(boundary.vertex(bridge.position).0, 2);
}

#[test]
fn coincident_endpoints() {
    use crate::math::point;

    let polygon = PolygonWithHoles::new(&[
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);
    let boundary = contour_boundary(&polygon);
    let edge_from = boundary.head().unwrap();
    let edge_from = boundary.next(edge_from);

    // The hit is on the second endpoint of the edge.
    let hit = RayHit {
        position: point(10.0, 10.0),
        edge_from,
        square_distance: 36.0,
    };
    let options = BridgeOptions::DEFAULT;
    let bridge = select_bridge_point(&polygon, &boundary, point(4.0, 10.0), &hit, &options);
    assert_eq!(bridge.kind, BridgeKind::Vertex);
    assert_eq!(boundary.vertex(bridge.position).0, 2);

    // Close enough with a larger epsilon.
    let hit = RayHit {
        position: point(10.0, 0.01),
        edge_from,
        square_distance: 36.0,
    };
    let loose = BridgeOptions::epsilon(0.1);
    let bridge = select_bridge_point(&polygon, &boundary, point(4.0, 0.01), &hit, &loose);
    assert_eq!(bridge.kind, BridgeKind::Vertex);
    assert_eq!(boundary.vertex(bridge.position).0, 1);

    let bridge = select_bridge_point(&polygon, &boundary, point(4.0, 0.01), &hit, &options);
    assert_eq!(bridge.kind, BridgeKind::EdgeEndpoint);
}

#[test]
fn reflex_vertex_in_the_way() {
    use crate::find_visible_edge;
    use crate::math::point;

    // A notch at (7, 7) pokes down into the square.
    let polygon = PolygonWithHoles::new(&[
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(8.0, 10.0),
        point(7.0, 7.0),
        point(6.0, 10.0),
        point(0.0, 10.0),
    ]);
    let boundary = contour_boundary(&polygon);
    let origin = point(4.0, 5.0);
    let hit = find_visible_edge(&polygon, &boundary, origin, 10.0).unwrap();
    assert_eq!(hit.position, point(10.0, 5.0));

    let bridge = select_bridge_point(&polygon, &boundary, origin, &hit, &BridgeOptions::DEFAULT);
    assert_eq!(bridge.kind, BridgeKind::EdgeEndpoint);
    // Both endpoints share x = 10, the first one is used.
    assert_eq!(boundary.vertex(bridge.position).0, 1);

    let origin = point(4.0, 8.0);
    let hit = find_visible_edge(&polygon, &boundary, origin, 10.0).unwrap();
    let bridge = select_bridge_point(&polygon, &boundary, origin, &hit, &BridgeOptions::DEFAULT);
    // The ray from (4, 8) hits the notch's left edge first.
    assert_eq!(hit.position.y, 8.0);
    assert!(hit.position.x < 7.0);
    assert_eq!(bridge.kind, BridgeKind::EdgeEndpoint);
    assert_eq!(boundary.vertex(bridge.position).0, 4);
}

#[test]
fn closest_reflex_vertex_wins_angle_ties() {
    use crate::find_visible_edge;
    use crate::math::point;

    // Two notches at (4, 6) and (7, 7) hang over the inside of the slanted
    // right edge.
    let polygon = PolygonWithHoles::new(&[
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(12.0, 10.0),
        point(9.0, 10.0),
        point(7.0, 7.0),
        point(6.0, 10.0),
        point(5.0, 10.0),
        point(4.0, 6.0),
        point(3.0, 10.0),
        point(0.0, 10.0),
    ]);
    let boundary = contour_boundary(&polygon);

    // Seen from (1, 5) both notches are at atan(1/3) from the ray.
    let origin = point(1.0, 5.0);
    let hit = find_visible_edge(&polygon, &boundary, origin, ray_length(&polygon)).unwrap();
    assert_eq!(hit.position, point(11.0, 5.0));
    let bridge = select_bridge_point(&polygon, &boundary, origin, &hit, &BridgeOptions::DEFAULT);
    assert_eq!(bridge.kind, BridgeKind::Reflex);
    assert_eq!(boundary.vertex(bridge.position).0, 7);

    // Seen from slightly lower, the farther notch has the smaller angle.
    let origin = point(1.0, 4.8);
    let hit = find_visible_edge(&polygon, &boundary, origin, ray_length(&polygon)).unwrap();
    let bridge = select_bridge_point(&polygon, &boundary, origin, &hit, &BridgeOptions::DEFAULT);
    assert_eq!(bridge.kind, BridgeKind::Reflex);
    assert_eq!(boundary.vertex(bridge.position).0, 4);
}

#[test]
fn blocking_vertices_below_the_ray() {
    use crate::find_visible_edge;
    use crate::math::point;

    // Two notches at (6, 4) and (10, 2) rise from the bottom edge, under the
    // ray and above the line to (14, 0).
    let polygon = PolygonWithHoles::new(&[
        point(0.0, 0.0),
        point(5.0, 0.0),
        point(6.0, 4.0),
        point(7.0, 0.0),
        point(9.0, 0.0),
        point(10.0, 2.0),
        point(11.0, 0.0),
        point(14.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);
    let boundary = contour_boundary(&polygon);

    let origin = point(2.0, 5.0);
    let hit = find_visible_edge(&polygon, &boundary, origin, ray_length(&polygon)).unwrap();
    assert_eq!(hit.position, point(12.0, 5.0));
    assert_eq!(boundary.vertex(hit.edge_from).0, 7);

    // (6, 4) is 0.245 radians below the ray and (10, 2) is 0.359 below it.
    // Angles are compared regardless of their sign.
    let bridge = select_bridge_point(&polygon, &boundary, origin, &hit, &BridgeOptions::DEFAULT);
    assert_eq!(bridge.kind, BridgeKind::Reflex);
    assert_eq!(boundary.vertex(bridge.position).0, 2);
}
