use crate::{PolygonWithHoles, VertexId};

use alloc::vec::Vec;

/// A hole and the offset of its rightmost vertex inside of its block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoleRank {
    pub hole: usize,
    pub max_x_offset: u32,
}

impl HoleRank {
    /// The id of the hole's rightmost vertex in the polygon's vertex table.
    #[inline]
    pub fn vertex(&self, polygon: &PolygonWithHoles) -> VertexId {
        polygon.hole(self.hole).vertex(self.max_x_offset)
    }
}

/// Finds the rightmost vertex of each hole and sorts the holes by decreasing x
/// coordinate of that vertex.
///
/// When several vertices of a hole share the largest x coordinate, the first one
/// in the hole's block is used. Holes with the same rightmost x are kept in
/// increasing hole index order.
///
/// The result is written into `output`, which is cleared first.
pub fn rank_holes(polygon: &PolygonWithHoles, output: &mut Vec<HoleRank>) {
    output.clear();
    output.reserve(polygon.num_holes());

    for hole in 0..polygon.num_holes() {
        let points = polygon.hole_points(hole);
        let mut max_x_offset = 0;
        if let Some(first) = points.first() {
            let mut max_x = first.x;
            for (offset, p) in points.iter().enumerate().skip(1) {
                if p.x > max_x {
                    max_x = p.x;
                    max_x_offset = offset;
                }
            }
        }

        output.push(HoleRank {
            hole,
            max_x_offset: max_x_offset as u32,
        });
    }

    output.sort_by(|a, b| {
        let ax = polygon.vertex(a.vertex(polygon)).x;
        let bx = polygon.vertex(b.vertex(polygon)).x;
        bx.total_cmp(&ax).then(a.hole.cmp(&b.hole))
    });
}

#[test]
fn rightmost_first() {
    use crate::math::point;

    let polygon = PolygonWithHoles::from_rings(
        &[
            point(0.0, 0.0),
            point(30.0, 0.0),
            point(30.0, 10.0),
            point(0.0, 10.0),
        ],
        &[
            [point(2.0, 2.0), point(2.0, 4.0), point(4.0, 4.0)],
            [point(20.0, 2.0), point(20.0, 4.0), point(22.0, 3.0)],
            [point(10.0, 2.0), point(12.0, 4.0), point(12.0, 2.0)],
        ],
    );

    let mut ranking = Vec::new();
    rank_holes(&polygon, &mut ranking);

    assert_eq!(
        ranking,
        alloc::vec![
            HoleRank { hole: 1, max_x_offset: 2 },
            HoleRank { hole: 2, max_x_offset: 1 },
            HoleRank { hole: 0, max_x_offset: 2 },
        ]
    );
    assert_eq!(ranking[0].vertex(&polygon), VertexId(9));
}

#[test]
fn ties_are_deterministic() {
    use crate::math::point;

    let polygon = PolygonWithHoles::from_rings(
        &[
            point(0.0, 0.0),
            point(30.0, 0.0),
            point(30.0, 30.0),
            point(0.0, 30.0),
        ],
        &[
            [point(2.0, 2.0), point(2.0, 4.0), point(8.0, 4.0), point(8.0, 2.0)],
            [point(2.0, 12.0), point(2.0, 14.0), point(8.0, 14.0), point(8.0, 12.0)],
        ],
    );

    let mut ranking = alloc::vec![HoleRank { hole: 7, max_x_offset: 7 }];
    rank_holes(&polygon, &mut ranking);

    // Both holes reach x = 8, the first vertex found at that x is used and the
    // holes stay in index order.
    assert_eq!(
        ranking,
        alloc::vec![
            HoleRank { hole: 0, max_x_offset: 2 },
            HoleRank { hole: 1, max_x_offset: 2 },
        ]
    );
}
