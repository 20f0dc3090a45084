//! Tools to validate the output of the hole eliminator and to reduce failing
//! test cases.

use crate::math::{LineSegment, Point};
use crate::ParsedPolygon;

use std::panic;

use thiserror::Error;

/// A problem found by [`check_walk`].
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum WalkError {
    #[error("Expected a walk of {expected} vertices, got {actual}.")]
    UnexpectedLength { expected: usize, actual: usize },
    #[error("Vertex {vertex} is not in the polygon.")]
    VertexOutOfBounds { vertex: u32 },
    #[error("Vertex {vertex} is never visited.")]
    MissingVertex { vertex: u32 },
    #[error("Vertex {vertex} is visited {actual} times instead of {expected}.")]
    UnexpectedMultiplicity {
        vertex: u32,
        expected: usize,
        actual: usize,
    },
    #[error("The walk does not go from {boundary_vertex} to {hole_vertex} and back.")]
    MissingBridge { hole_vertex: u32, boundary_vertex: u32 },
    #[error("Vertex {vertex} lies on edge #{edge} of the walk.")]
    VertexOnEdge { edge: usize, vertex: u32 },
    #[error("Edges #{first} and #{second} of the walk cross.")]
    Crossing { first: usize, second: usize },
}

fn walk_segment(points: &[Point], walk: &[u32], idx: usize) -> LineSegment {
    let next = (idx + 1) % walk.len();
    LineSegment {
        from: points[walk[idx] as usize],
        to: points[walk[next] as usize],
    }
}

/// Returns the pairs of edges of a closed walk that cross each other.
///
/// Edge `i` goes from `walk[i]` to `walk[i + 1]`, the last one closes the
/// loop. Edges touching at a point or overlapping along a line do not count,
/// so the two sides of a bridge are fine.
pub fn find_crossings(points: &[Point], walk: &[u32]) -> Vec<(usize, usize)> {
    let mut crossings = Vec::new();
    for i in 0..walk.len() {
        let a = walk_segment(points, walk, i);
        for j in (i + 1)..walk.len() {
            if a.crosses(&walk_segment(points, walk, j)) {
                crossings.push((i, j));
            }
        }
    }

    crossings
}

/// Returns the `(edge, vertex)` pairs where a point of the polygon lies inside
/// an edge of the walk, endpoints excluded.
///
/// This catches the degenerate cases [`find_crossings`] lets through: an edge
/// going through a vertex, and edges overlapping along a line (one of them then
/// contains an endpoint of the other).
pub fn find_vertices_on_edges(points: &[Point], walk: &[u32]) -> Vec<(usize, u32)> {
    let mut result = Vec::new();
    for edge in 0..walk.len() {
        let segment = walk_segment(points, walk, edge);
        for (vertex, p) in points.iter().enumerate() {
            if segment.strictly_contains(*p) {
                result.push((edge, vertex as u32));
            }
        }
    }

    result
}

/// Checks that `walk` is a valid result of merging the holes of `polygon`.
///
/// The ids in the walk index `polygon.points()`. `bridges` holds one
/// `(hole vertex, boundary vertex)` pair per merged hole.
///
/// Every vertex must be visited once, plus once for each bridge it ends. Each
/// bridge must be walked in both directions, and no edge may cross another one
/// or go through a vertex.
pub fn check_walk(
    polygon: &ParsedPolygon,
    walk: &[u32],
    bridges: &[(u32, u32)],
) -> Result<(), WalkError> {
    let points = polygon.points();

    let expected = points.len() + 2 * polygon.holes.len();
    if walk.len() != expected {
        return Err(WalkError::UnexpectedLength {
            expected,
            actual: walk.len(),
        });
    }

    let mut visits = vec![0usize; points.len()];
    for &vertex in walk {
        match visits.get_mut(vertex as usize) {
            Some(count) => *count += 1,
            None => return Err(WalkError::VertexOutOfBounds { vertex }),
        }
    }

    if let Some(vertex) = visits.iter().position(|&count| count == 0) {
        return Err(WalkError::MissingVertex {
            vertex: vertex as u32,
        });
    }

    let mut expected_visits = vec![1usize; points.len()];
    for &(hole_vertex, boundary_vertex) in bridges {
        for &vertex in &[hole_vertex, boundary_vertex] {
            match expected_visits.get_mut(vertex as usize) {
                Some(count) => *count += 1,
                None => return Err(WalkError::VertexOutOfBounds { vertex }),
            }
        }
    }

    for (vertex, (&actual, &expected)) in visits.iter().zip(expected_visits.iter()).enumerate() {
        if actual != expected {
            return Err(WalkError::UnexpectedMultiplicity {
                vertex: vertex as u32,
                expected,
                actual,
            });
        }
    }

    let has_edge = |from: u32, to: u32| {
        (0..walk.len()).any(|i| walk[i] == from && walk[(i + 1) % walk.len()] == to)
    };
    for &(hole_vertex, boundary_vertex) in bridges {
        if !has_edge(boundary_vertex, hole_vertex) || !has_edge(hole_vertex, boundary_vertex) {
            return Err(WalkError::MissingBridge {
                hole_vertex,
                boundary_vertex,
            });
        }
    }

    if let Some(&(edge, vertex)) = find_vertices_on_edges(&points, walk).first() {
        return Err(WalkError::VertexOnEdge { edge, vertex });
    }

    if let Some(&(first, second)) = find_crossings(&points, walk).first() {
        return Err(WalkError::Crossing { first, second });
    }

    Ok(())
}

/// Simplifies a polygon for which `cb` returns true (the failure case) as long
/// as the simplified polygon still fails, and prints the result as a test.
///
/// Holes are removed first, then vertices of each ring, as long as rings keep
/// at least three points. Panics in `cb` count as failures.
pub fn find_reduced_test_case<F>(polygon: &ParsedPolygon, cb: &F) -> ParsedPolygon
where
    F: Fn(&ParsedPolygon) -> bool + panic::UnwindSafe + panic::RefUnwindSafe,
{
    let mut polygon = polygon.clone();

    println!(" -- removing holes...");

    let mut i = 0;
    while i < polygon.holes.len() {
        let mut cloned = polygon.clone();
        cloned.holes.remove(i);

        if fails(&cloned, cb) {
            polygon = cloned;
            continue;
        }

        i += 1;
    }

    println!(" -- removing vertices...");

    for ring in 0..(polygon.holes.len() + 1) {
        let mut v = 0;
        loop {
            let len = ring_mut(&mut polygon, ring).len();
            if v >= len || len <= 3 {
                break;
            }

            let mut cloned = polygon.clone();
            ring_mut(&mut cloned, ring).remove(v);

            if fails(&cloned, cb) {
                polygon = cloned;
                continue;
            }

            v += 1;
        }
    }

    println!(" ----------- reduced test case: -----------\n\n");
    println!("#[test]");
    println!("fn reduced_test_case() {{");
    println!("    let polygon = parse_polygon(");
    println!("        \"{}\",", polygon.to_string().replace('\n', " "));
    println!("    )");
    println!("    .unwrap();\n");
    println!("    test_polygon(&polygon);");
    println!("}}\n\n");

    polygon
}

fn fails<F>(polygon: &ParsedPolygon, cb: &F) -> bool
where
    F: Fn(&ParsedPolygon) -> bool + panic::UnwindSafe + panic::RefUnwindSafe,
{
    panic::catch_unwind(|| cb(polygon)).unwrap_or(true)
}

fn ring_mut(polygon: &mut ParsedPolygon, ring: usize) -> &mut Vec<Point> {
    if ring == 0 {
        &mut polygon.contour
    } else {
        &mut polygon.holes[ring - 1]
    }
}

/// Installs `env_logger` with a default level, so that test runs print the
/// eliminator's records.
///
/// `RUST_LOG` still takes precedence. Does nothing if a logger is already
/// installed, so it can be called from every test.
pub fn init_console_logger(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .is_test(true)
        .try_init();
}

#[cfg(test)]
fn square_with_hole() -> ParsedPolygon {
    crate::parse_polygon("0,0 10,0 10,10 0,10; 2,4 2,6 4,6 4,4").unwrap()
}

#[test]
fn valid_walk() {
    let polygon = square_with_hole();
    assert_eq!(
        check_walk(&polygon, &[0, 1, 6, 7, 4, 5, 6, 1, 2, 3], &[(6, 1)]),
        Ok(())
    );
}

#[test]
fn invalid_walks() {
    let polygon = square_with_hole();
    let bridges = [(6, 1)];

    assert_eq!(
        check_walk(&polygon, &[0, 1, 2, 3], &bridges),
        Err(WalkError::UnexpectedLength {
            expected: 10,
            actual: 4
        })
    );
    assert_eq!(
        check_walk(&polygon, &[0, 1, 6, 7, 4, 5, 6, 1, 2, 9], &bridges),
        Err(WalkError::VertexOutOfBounds { vertex: 9 })
    );
    assert_eq!(
        check_walk(&polygon, &[0, 1, 6, 7, 4, 6, 6, 1, 2, 3], &bridges),
        Err(WalkError::MissingVertex { vertex: 5 })
    );
    assert_eq!(
        check_walk(&polygon, &[0, 1, 6, 7, 4, 5, 6, 2, 2, 3], &bridges),
        Err(WalkError::UnexpectedMultiplicity {
            vertex: 1,
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        check_walk(&polygon, &[0, 1, 6, 7, 4, 5, 6, 2, 1, 3], &bridges),
        Err(WalkError::MissingBridge {
            hole_vertex: 6,
            boundary_vertex: 1
        })
    );
    // Bridge from (0, 0) to (4, 6), across the bottom edge of the hole.
    assert_eq!(
        check_walk(&polygon, &[0, 6, 7, 4, 5, 6, 0, 1, 2, 3], &[(6, 0)]),
        Err(WalkError::Crossing {
            first: 0,
            second: 2
        })
    );
}

#[test]
fn bridge_through_a_vertex() {
    let polygon =
        crate::parse_polygon("0,0 10,0 10,10 0,10; 2,4 2,6 4,6 4,4; 7,8 8,8 7.5,7").unwrap();

    // Both holes are bridged to (10, 10) and the bridge from (4, 6) touches
    // the corner (7, 8) of the other hole.
    let walk = [0, 1, 2, 9, 10, 8, 9, 2, 6, 7, 4, 5, 6, 2, 3];
    assert_eq!(
        check_walk(&polygon, &walk, &[(9, 2), (6, 2)]),
        Err(WalkError::VertexOnEdge { edge: 7, vertex: 8 })
    );
    assert!(find_crossings(&polygon.points(), &walk).is_empty());
}

#[test]
fn overlapping_edges() {
    use crate::math::point;

    let points = [
        point(0.0, 0.0),
        point(4.0, 0.0),
        point(2.0, 0.0),
        point(6.0, 0.0),
        point(3.0, 3.0),
    ];

    // 0 -> 1 and 2 -> 3 overlap between x = 2 and x = 4.
    assert!(find_crossings(&points, &[0, 1, 2, 3, 4]).is_empty());
    assert_eq!(
        find_vertices_on_edges(&points, &[0, 1, 2, 3, 4]),
        vec![(0, 2), (2, 1)]
    );
}

#[test]
fn crossings() {
    use crate::math::point;

    let points = [
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(0.0, 2.0),
        point(2.0, 2.0),
    ];

    assert_eq!(find_crossings(&points, &[0, 1, 2, 3]), vec![(1, 3)]);
    assert!(find_crossings(&points, &[0, 1, 3, 2]).is_empty());
}

#[test]
fn reduce_test_case() {
    use crate::math::point;

    let polygon = crate::parse_polygon(
        "0,0 10,0 10,10 5,12 0,10; 1,1 1,2 2,2 2,1; 6,6 6,7 7,7 7,6",
    )
    .unwrap();

    // Fails whenever the polygon has a hole touching (6, 6).
    let reduced = find_reduced_test_case(&polygon, &|p: &ParsedPolygon| {
        p.holes.iter().any(|h| h.contains(&point(6.0, 6.0)))
    });

    assert_eq!(reduced.holes.len(), 1);
    assert_eq!(reduced.contour.len(), 3);
    assert_eq!(reduced.holes[0].len(), 3);
    assert!(reduced.holes[0].contains(&point(6.0, 6.0)));
}

#[test]
fn logger_can_be_installed_twice() {
    init_console_logger(log::LevelFilter::Debug);
    init_console_logger(log::LevelFilter::Trace);
    log::debug!("logger installed");
}
