use crate::extra::debugging::{check_walk, find_reduced_test_case, init_console_logger};
use crate::extra::fixtures;
use crate::extra::parser::{parse_polygon, ParsedPolygon};
use crate::math::{point, Point};
use crate::{
    BoundaryList, Bridge, BridgeKind, BridgeOptions, HoleEliminationError, HoleEliminator,
    PolygonWithHoles, UnsupportedParameter, VertexId, Winding,
};

use alloc::vec;
use alloc::vec::Vec;

fn to_polygon(polygon: &ParsedPolygon) -> PolygonWithHoles {
    PolygonWithHoles::from_rings(&polygon.contour, &polygon.holes)
}

fn eliminate(
    polygon: &ParsedPolygon,
    options: &BridgeOptions,
    log: bool,
) -> Result<(Vec<u32>, Vec<Bridge>), HoleEliminationError> {
    let mut eliminator = HoleEliminator::new();
    eliminator.set_logging(log);

    let mut output = BoundaryList::new();
    eliminator.eliminate_holes(&to_polygon(polygon), options, &mut output)?;

    let walk = output.vertices().map(|id| id.0).collect();

    Ok((walk, eliminator.bridges().to_vec()))
}

fn bridge_pairs(bridges: &[Bridge]) -> Vec<(u32, u32)> {
    bridges
        .iter()
        .map(|bridge| (bridge.hole_vertex.0, bridge.boundary_vertex.0))
        .collect()
}

fn is_invalid(polygon: &ParsedPolygon, options: &BridgeOptions) -> bool {
    match eliminate(polygon, options, false) {
        Ok((walk, bridges)) => check_walk(polygon, &walk, &bridge_pairs(&bridges)).is_err(),
        Err(_) => true,
    }
}

pub(crate) fn test_polygon(polygon: &ParsedPolygon) -> Vec<u32> {
    test_polygon_with_options(polygon, &BridgeOptions::DEFAULT)
}

pub(crate) fn test_polygon_with_options(
    polygon: &ParsedPolygon,
    options: &BridgeOptions,
) -> Vec<u32> {
    let add_logging = std::env::var("KEYHOLE_ENABLE_LOGGING").is_ok();
    let find_test_case = std::env::var("KEYHOLE_REDUCED_TESTCASE").is_ok();

    let res = eliminate(polygon, options, false);

    if let Ok((walk, bridges)) = &res {
        if check_walk(polygon, walk, &bridge_pairs(bridges)).is_ok() {
            return walk.clone();
        }
    }

    if find_test_case {
        let options = *options;
        find_reduced_test_case(polygon, &move |p: &ParsedPolygon| is_invalid(p, &options));
    }

    if add_logging {
        init_console_logger(log::LevelFilter::Debug);
        let _ = eliminate(polygon, options, true);
    }

    match res {
        Ok((walk, bridges)) => panic!(
            "Invalid walk {:?}: {:?}\npolygon: {}",
            walk,
            check_walk(polygon, &walk, &bridge_pairs(&bridges)),
            polygon
        ),
        Err(e) => panic!("Hole elimination failed: {:?}\npolygon: {}", e, polygon),
    }
}

fn bridges(polygon: &ParsedPolygon) -> Vec<Bridge> {
    match eliminate(polygon, &BridgeOptions::DEFAULT, false) {
        Ok((_, bridges)) => bridges,
        Err(e) => panic!("{:?}", e),
    }
}

#[test]
fn square_with_one_hole() {
    let polygon = fixtures::square_with_hole();
    let walk = test_polygon(&polygon);

    assert_eq!(walk, vec![0, 1, 6, 7, 4, 5, 6, 1, 2, 3]);
    assert_eq!(walk.len(), 4 + (4 + 2));
    assert_eq!(
        bridges(&polygon),
        vec![Bridge {
            hole: 0,
            hole_vertex: VertexId(6),
            boundary_vertex: VertexId(1),
            kind: BridgeKind::EdgeEndpoint,
        }]
    );
}

#[test]
fn rightmost_hole_is_merged_first() {
    let polygon = fixtures::two_holes();
    let walk = test_polygon(&polygon);

    assert_eq!(walk, vec![0, 1, 10, 11, 8, 6, 7, 4, 5, 6, 8, 9, 10, 1, 2, 3]);

    let bridges = bridges(&polygon);
    assert_eq!(bridges.len(), 2);
    assert_eq!(bridges[0].hole, 1);
    assert_eq!(bridges[0].hole_vertex, VertexId(10));
    assert!(bridges[0].boundary_vertex.to_usize() < polygon.contour.len());
    assert_eq!(bridges[1].hole, 0);
    assert_eq!(bridges[1].boundary_vertex, VertexId(8));
}

#[test]
fn ray_through_contour_vertex() {
    let polygon = fixtures::ray_through_vertex();
    let walk = test_polygon(&polygon);

    assert_eq!(walk, vec![0, 1, 2, 7, 5, 6, 7, 2, 3, 4]);

    let bridges = bridges(&polygon);
    assert_eq!(bridges[0].boundary_vertex, VertexId(2));
    assert_eq!(bridges[0].kind, BridgeKind::Vertex);
}

#[test]
fn reflex_vertex_blocks_the_edge_endpoint() {
    let polygon = fixtures::reflex_notch();
    let walk = test_polygon(&polygon);

    assert_eq!(walk, vec![0, 1, 2, 3, 8, 9, 6, 7, 8, 3, 4, 5]);

    let bridges = bridges(&polygon);
    assert_eq!(bridges[0].boundary_vertex, VertexId(3));
    assert_eq!(bridges[0].kind, BridgeKind::Reflex);
}

#[test]
fn ray_hits_a_previous_bridge() {
    let polygon = fixtures::bridge_behind_bridge();
    let walk = test_polygon(&polygon);

    // The second hole is connected to the copy of vertex 2 that comes after
    // the first hole.
    assert_eq!(
        walk,
        vec![0, 1, 2, 6, 7, 4, 5, 6, 2, 10, 11, 8, 9, 10, 2, 3]
    );

    let bridges = bridges(&polygon);
    assert_eq!(bridges[0].boundary_vertex, VertexId(2));
    assert_eq!(bridges[1].boundary_vertex, VertexId(2));
    assert_eq!(bridges[1].kind, BridgeKind::EdgeEndpoint);
}

#[test]
fn collinear_bridge_ends() {
    // The sight line from the fourth hole's rightmost vertex to (40, 0) goes
    // exactly through (34, 14), where the first hole is bridged. Later holes
    // must be bridged to that vertex rather than to the corners behind the
    // first hole.
    let polygon = parse_polygon(
        "0,0 40,0 40,40 26,40 25,39 24,40 22,40 21,38 20,40 6,40 5,38 4,40 0,40;
         4,12 4,16 6,16 6,12;
         2,20 3.5,24 5,20;
         31,12 31,14 34,14 34,12;
         29,21 30,23 31,21",
    )
    .unwrap();

    test_polygon(&polygon);

    let bridges: Vec<(usize, u32, u32, BridgeKind)> = bridges(&polygon)
        .iter()
        .map(|b| (b.hole, b.hole_vertex.0, b.boundary_vertex.0, b.kind))
        .collect();
    assert_eq!(
        bridges,
        vec![
            (2, 22, 1, BridgeKind::EdgeEndpoint),
            (3, 26, 22, BridgeKind::Reflex),
            (0, 15, 22, BridgeKind::EdgeEndpoint),
            (1, 19, 22, BridgeKind::EdgeEndpoint),
        ]
    );
}

#[test]
fn comb() {
    let polygon = fixtures::comb(6);
    test_polygon(&polygon);

    assert!(bridges(&polygon)
        .iter()
        .any(|bridge| bridge.kind == BridgeKind::Reflex));
}

#[test]
fn grid_of_holes() {
    test_polygon(&fixtures::hole_grid(1, 6));
    test_polygon(&fixtures::hole_grid(4, 1));
    test_polygon(&fixtures::hole_grid(4, 5));
}

#[test]
fn clockwise_contour() {
    let polygon = ParsedPolygon {
        contour: vec![
            point(0.0, 0.0),
            point(0.0, 10.0),
            point(10.0, 10.0),
            point(10.0, 0.0),
        ],
        holes: vec![vec![
            point(2.0, 4.0),
            point(4.0, 4.0),
            point(4.0, 6.0),
            point(2.0, 6.0),
        ]],
    };

    let expected = vec![0, 1, 2, 5, 6, 7, 4, 5, 2, 3];
    assert_eq!(test_polygon(&polygon), expected);

    let options = BridgeOptions::DEFAULT.with_contour_winding(Winding::Negative);
    assert_eq!(test_polygon_with_options(&polygon, &options), expected);
}

#[test]
fn parsed_polygon() {
    let polygon = parse_polygon(
        "0,0 10,0 10,10 0,10;
         2,4 2,6 4,6 4,4",
    )
    .unwrap();

    assert_eq!(test_polygon(&polygon), vec![0, 1, 6, 7, 4, 5, 6, 1, 2, 3]);
}

#[test]
fn deterministic_output() {
    let polygon = to_polygon(&fixtures::hole_grid(3, 4));
    let other = to_polygon(&fixtures::comb(4));
    let options = BridgeOptions::DEFAULT;

    let mut eliminator = HoleEliminator::new();
    let mut first = BoundaryList::new();
    let mut second = BoundaryList::new();

    eliminator.eliminate_holes(&polygon, &options, &mut first).unwrap();
    let first_bridges = eliminator.bridges().to_vec();

    // Run something else in between to make sure no state leaks across runs.
    eliminator.eliminate_holes(&other, &options, &mut second).unwrap();
    eliminator.eliminate_holes(&polygon, &options, &mut second).unwrap();

    assert_eq!(first.to_vec(), second.to_vec());
    assert_eq!(first_bridges, eliminator.bridges());
}

#[test]
fn boundary_is_closed() {
    let polygon = to_polygon(&fixtures::hole_grid(2, 3));
    let output = crate::eliminate_holes(&polygon, &BridgeOptions::DEFAULT).unwrap();

    let head = output.head().unwrap();
    let mut position = head;
    for _ in 0..output.len() {
        assert_eq!(output.prev(output.next(position)), position);
        position = output.next(position);
    }
    assert_eq!(position, head);

    // Every hole adds its rightmost vertex and the bridge's boundary vertex
    // once more.
    let mut counts = vec![0usize; polygon.num_vertices()];
    for vertex in output.vertices() {
        counts[vertex.to_usize()] += 1;
    }
    assert_eq!(
        counts.iter().sum::<usize>(),
        polygon.num_vertices() + 2 * polygon.num_holes()
    );
    assert!(counts.iter().all(|&count| count >= 1));
}

#[test]
fn hole_outside_of_the_contour() {
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];
    let inside: [Point; 3] = [point(2.0, 4.0), point(2.0, 6.0), point(4.0, 5.0)];
    let outside: [Point; 3] = [point(12.0, 4.0), point(12.0, 6.0), point(14.0, 5.0)];

    let polygon = PolygonWithHoles::from_rings(&square, &[inside, outside]);
    assert_eq!(
        crate::eliminate_holes(&polygon, &BridgeOptions::DEFAULT).err(),
        Some(HoleEliminationError::NoVisibleEdge { hole: 1 })
    );
}

#[test]
fn unsupported_input() {
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];

    let empty: [Point; 0] = [];
    let polygon = PolygonWithHoles::from_rings(&square, &[&empty[..]]);
    assert_eq!(
        crate::eliminate_holes(&polygon, &BridgeOptions::DEFAULT).err(),
        Some(HoleEliminationError::UnsupportedParameter(
            UnsupportedParameter::EmptyHole { hole: 0 }
        ))
    );

    let polygon = PolygonWithHoles::from_rings(
        &square,
        &[[point(2.0, 4.0), point(f32::NAN, 6.0), point(4.0, 5.0)]],
    );
    assert_eq!(
        crate::eliminate_holes(&polygon, &BridgeOptions::DEFAULT).err(),
        Some(HoleEliminationError::UnsupportedParameter(
            UnsupportedParameter::PositionIsNaN
        ))
    );

    let polygon = PolygonWithHoles::new(&square[..2]);
    assert_eq!(
        crate::eliminate_holes(&polygon, &BridgeOptions::DEFAULT).err(),
        Some(HoleEliminationError::UnsupportedParameter(
            UnsupportedParameter::NotEnoughContourPoints
        ))
    );
}
