use crate::{BoundaryId, BoundaryList, HoleRank, PolygonWithHoles, VertexId};

/// Inserts a hole into the boundary right after `bridge`.
///
/// The walk around the bridge becomes `B, M, <hole vertices>, M, B` where `B`
/// is the vertex at `bridge` and `M` is the rightmost vertex of the hole.
/// Since every id is inserted right after `bridge`, walking the hole block
/// backwards from `M` produces a walk that visits the hole in its own order,
/// starting and ending at `M`. In total `len + 2` ids are inserted.
pub fn splice_hole(
    boundary: &mut BoundaryList,
    bridge: BoundaryId,
    polygon: &PolygonWithHoles,
    rank: &HoleRank,
) {
    let hole = polygon.hole(rank.hole);
    let bridge_vertex = boundary.vertex(bridge);
    let rightmost = rank.vertex(polygon);

    boundary.insert_after(bridge, bridge_vertex);

    let mut idx = rightmost.0;
    for _ in 0..hole.len {
        boundary.insert_after(bridge, VertexId(idx));
        idx = if idx == hole.start {
            hole.end() - 1
        } else {
            idx - 1
        };
    }

    boundary.insert_after(bridge, rightmost);
}

#[test]
fn splice_square_hole() {
    use crate::math::point;

    let polygon = PolygonWithHoles::from_rings(
        &[
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ],
        &[[
            point(2.0, 4.0),
            point(2.0, 6.0),
            point(4.0, 6.0),
            point(4.0, 4.0),
        ]],
    );

    let mut boundary = BoundaryList::new();
    let mut positions = alloc::vec::Vec::new();
    for i in 0..4 {
        positions.push(boundary.push_back(VertexId(i)));
    }

    let rank = HoleRank {
        hole: 0,
        max_x_offset: 2,
    };
    splice_hole(&mut boundary, positions[1], &polygon, &rank);

    let walk: alloc::vec::Vec<u32> = boundary.vertices().map(|v| v.0).collect();
    assert_eq!(walk, alloc::vec![0, 1, 6, 7, 4, 5, 6, 1, 2, 3]);
    assert_eq!(boundary.len(), 4 + 4 + 2);
    // The original positions are untouched.
    assert_eq!(boundary.next(positions[2]), positions[3]);
    assert_eq!(boundary.prev(positions[2]).to_usize(), 4);
}

#[test]
fn splice_wraps_around_the_hole_block() {
    use crate::math::point;

    let polygon = PolygonWithHoles::from_rings(
        &[point(0.0, 0.0), point(10.0, 0.0), point(0.0, 10.0)],
        &[[point(1.0, 1.0), point(2.0, 1.0), point(1.0, 2.0)]],
    );

    let mut boundary = BoundaryList::new();
    let first = boundary.push_back(VertexId(0));
    boundary.push_back(VertexId(1));
    boundary.push_back(VertexId(2));

    // The rightmost vertex is the first one of the block.
    let rank = HoleRank {
        hole: 0,
        max_x_offset: 0,
    };
    splice_hole(&mut boundary, first, &polygon, &rank);

    let walk: alloc::vec::Vec<u32> = boundary.vertices().map(|v| v.0).collect();
    assert_eq!(walk, alloc::vec![0, 3, 4, 5, 3, 0, 1, 2]);
}
