//! The polygon descriptor consumed by the hole eliminator.

use crate::math::Point;
use crate::{UnsupportedParameter, VertexId};

use alloc::vec::Vec;
use core::ops::Range;

/// The block of the vertex table holding the points of one hole.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HoleRange {
    /// Index of the first vertex of the hole.
    pub start: u32,
    /// Number of vertices in the hole.
    pub len: u32,
}

impl HoleRange {
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    /// Returns the id of the vertex at a given offset inside the hole.
    #[inline]
    pub fn vertex(&self, local_offset: u32) -> VertexId {
        debug_assert!(local_offset < self.len);
        VertexId(self.start + local_offset)
    }

    fn overlaps(&self, other: &HoleRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// An outer contour followed by any number of holes, stored in a single vertex table.
///
/// The first `num_contour_points()` vertices form the outer contour. Each hole owns
/// a contiguous block of the rest of the table, described by a [`HoleRange`].
///
/// The holes are expected to be wound in the opposite direction of the outer
/// contour, to be inside of it and to not overlap each other.
///
/// ## Example
///
/// ```
/// use keyhole_bridging::PolygonWithHoles;
/// use keyhole_bridging::math::point;
///
/// let mut polygon = PolygonWithHoles::new(&[
///     point(0.0, 0.0),
///     point(10.0, 0.0),
///     point(10.0, 10.0),
///     point(0.0, 10.0),
/// ]);
/// let hole = polygon.add_hole(&[point(4.0, 4.0), point(4.0, 6.0), point(6.0, 5.0)]);
///
/// assert_eq!(polygon.num_holes(), 1);
/// assert_eq!(polygon.hole_start(hole), 4);
/// assert_eq!(polygon.hole_point(hole, 2), point(6.0, 5.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PolygonWithHoles {
    vertices: Vec<Point>,
    num_contour_points: usize,
    holes: Vec<HoleRange>,
}

impl PolygonWithHoles {
    /// Creates a polygon without holes.
    pub fn new(contour: &[Point]) -> Self {
        PolygonWithHoles {
            vertices: contour.to_vec(),
            num_contour_points: contour.len(),
            holes: Vec::new(),
        }
    }

    /// Creates a polygon from its outer contour and a sequence of holes.
    pub fn from_rings<Holes, Hole>(contour: &[Point], holes: Holes) -> Self
    where
        Holes: IntoIterator<Item = Hole>,
        Hole: AsRef<[Point]>,
    {
        let mut polygon = Self::new(contour);
        for hole in holes {
            polygon.add_hole(hole.as_ref());
        }

        polygon
    }

    /// Creates a polygon from an already flattened vertex table.
    ///
    /// Unlike the other constructors this one checks that the hole ranges are
    /// consistent with the vertex table.
    pub fn from_parts(
        vertices: Vec<Point>,
        num_contour_points: usize,
        holes: Vec<HoleRange>,
    ) -> Result<Self, UnsupportedParameter> {
        let polygon = PolygonWithHoles {
            vertices,
            num_contour_points,
            holes,
        };
        polygon.validate()?;

        Ok(polygon)
    }

    /// Appends a hole at the end of the vertex table and returns its index.
    pub fn add_hole(&mut self, points: &[Point]) -> usize {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(points);
        self.holes.push(HoleRange {
            start,
            len: points.len() as u32,
        });

        self.holes.len() - 1
    }

    /// Checks that the polygon can be indexed safely.
    ///
    /// This does not look at the geometry beyond rejecting NaN positions.
    pub fn validate(&self) -> Result<(), UnsupportedParameter> {
        if self.num_contour_points < 3 || self.num_contour_points > self.vertices.len() {
            return Err(UnsupportedParameter::NotEnoughContourPoints);
        }

        for (hole, range) in self.holes.iter().enumerate() {
            if range.len == 0 {
                return Err(UnsupportedParameter::EmptyHole { hole });
            }
            if range.start as u64 + range.len as u64 > self.vertices.len() as u64 {
                return Err(UnsupportedParameter::HoleOutOfBounds { hole });
            }
            if (range.start as usize) < self.num_contour_points {
                return Err(UnsupportedParameter::OverlappingHoles { hole });
            }
            if self.holes[..hole].iter().any(|other| other.overlaps(range)) {
                return Err(UnsupportedParameter::OverlappingHoles { hole });
            }
        }

        if self.vertices.iter().any(|p| p.x.is_nan() || p.y.is_nan()) {
            return Err(UnsupportedParameter::PositionIsNaN);
        }

        Ok(())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Point {
        self.vertices[id.to_usize()]
    }

    #[inline]
    pub fn num_contour_points(&self) -> usize {
        self.num_contour_points
    }

    /// The points of the outer contour.
    #[inline]
    pub fn contour(&self) -> &[Point] {
        &self.vertices[..self.num_contour_points]
    }

    #[inline]
    pub fn num_holes(&self) -> usize {
        self.holes.len()
    }

    #[inline]
    pub fn holes(&self) -> &[HoleRange] {
        &self.holes
    }

    #[inline]
    pub fn hole(&self, hole: usize) -> HoleRange {
        self.holes[hole]
    }

    /// Index of the first vertex of a hole in the vertex table.
    #[inline]
    pub fn hole_start(&self, hole: usize) -> u32 {
        self.holes[hole].start
    }

    #[inline]
    pub fn num_points_in_hole(&self, hole: usize) -> u32 {
        self.holes[hole].len
    }

    /// The points of a hole.
    #[inline]
    pub fn hole_points(&self, hole: usize) -> &[Point] {
        &self.vertices[self.holes[hole].to_range()]
    }

    /// Returns the point at a given offset inside a hole.
    #[inline]
    pub fn hole_point(&self, hole: usize, local_offset: u32) -> Point {
        self.vertex(self.holes[hole].vertex(local_offset))
    }
}

#[cfg(test)]
fn square(x: f32, y: f32, size: f32) -> [Point; 4] {
    use crate::math::point;

    [
        point(x, y),
        point(x + size, y),
        point(x + size, y + size),
        point(x, y + size),
    ]
}

#[test]
fn polygon_layout() {
    let polygon = PolygonWithHoles::from_rings(
        &square(0.0, 0.0, 10.0),
        &[square(1.0, 1.0, 2.0), square(5.0, 5.0, 2.0)],
    );

    assert_eq!(polygon.num_contour_points(), 4);
    assert_eq!(polygon.num_vertices(), 12);
    assert_eq!(polygon.num_holes(), 2);
    assert_eq!(polygon.hole(0), HoleRange { start: 4, len: 4 });
    assert_eq!(polygon.hole(1), HoleRange { start: 8, len: 4 });
    assert_eq!(polygon.hole_points(1), &square(5.0, 5.0, 2.0)[..]);
    assert_eq!(polygon.hole_point(1, 2), polygon.vertex(VertexId(10)));
    assert_eq!(polygon.contour(), &square(0.0, 0.0, 10.0)[..]);
    assert_eq!(polygon.validate(), Ok(()));
}

#[test]
fn from_parts_checks_ranges() {
    let mut vertices = square(0.0, 0.0, 10.0).to_vec();
    vertices.extend_from_slice(&square(1.0, 1.0, 2.0));

    assert!(PolygonWithHoles::from_parts(
        vertices.clone(),
        4,
        alloc::vec![HoleRange { start: 4, len: 4 }]
    )
    .is_ok());

    assert_eq!(
        PolygonWithHoles::from_parts(vertices.clone(), 2, Vec::new()),
        Err(UnsupportedParameter::NotEnoughContourPoints)
    );
    assert_eq!(
        PolygonWithHoles::from_parts(
            vertices.clone(),
            4,
            alloc::vec![HoleRange { start: 4, len: 0 }]
        ),
        Err(UnsupportedParameter::EmptyHole { hole: 0 })
    );
    assert_eq!(
        PolygonWithHoles::from_parts(
            vertices.clone(),
            4,
            alloc::vec![HoleRange { start: 6, len: 4 }]
        ),
        Err(UnsupportedParameter::HoleOutOfBounds { hole: 0 })
    );
    assert_eq!(
        PolygonWithHoles::from_parts(
            vertices.clone(),
            4,
            alloc::vec![HoleRange { start: 2, len: 4 }]
        ),
        Err(UnsupportedParameter::OverlappingHoles { hole: 0 })
    );
    assert_eq!(
        PolygonWithHoles::from_parts(
            vertices.clone(),
            4,
            alloc::vec![HoleRange { start: 4, len: 3 }, HoleRange { start: 6, len: 2 }]
        ),
        Err(UnsupportedParameter::OverlappingHoles { hole: 1 })
    );

    vertices[5].y = f32::NAN;
    assert_eq!(
        PolygonWithHoles::from_parts(vertices, 4, alloc::vec![HoleRange { start: 4, len: 4 }]),
        Err(UnsupportedParameter::PositionIsNaN)
    );
}
