//! Reference shapes.
//!
//! Outer contours are counter-clockwise (y up) and holes clockwise. The
//! expected walks mentioned below index [`ParsedPolygon::points`].

use crate::math::{point, Point};
use crate::ParsedPolygon;

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point> {
    // Clockwise, the top right corner comes first among the rightmost points.
    vec![point(x0, y0), point(x0, y1), point(x1, y1), point(x1, y0)]
}

fn square_contour(size: f32) -> Vec<Point> {
    vec![
        point(0.0, 0.0),
        point(size, 0.0),
        point(size, size),
        point(0.0, size),
    ]
}

/// A square with a single square hole.
///
/// Expected walk: `0 1 6 7 4 5 6 1 2 3`.
pub fn square_with_hole() -> ParsedPolygon {
    ParsedPolygon {
        contour: square_contour(10.0),
        holes: vec![rect(2.0, 4.0, 4.0, 6.0)],
    }
}

/// Two holes side by side. The right one is bridged to the outer contour and
/// the left one to the right one.
///
/// Expected walk: `0 1 10 11 8 6 7 4 5 6 8 9 10 1 2 3`.
pub fn two_holes() -> ParsedPolygon {
    ParsedPolygon {
        contour: square_contour(10.0),
        holes: vec![rect(2.0, 4.0, 4.0, 6.0), rect(6.0, 5.0, 8.0, 8.0)],
    }
}

/// The ray cast from the hole goes exactly through the contour's vertex 2.
///
/// Expected walk: `0 1 2 7 5 6 7 2 3 4`.
pub fn ray_through_vertex() -> ParsedPolygon {
    ParsedPolygon {
        contour: vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(12.0, 5.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ],
        holes: vec![vec![point(2.0, 4.0), point(2.0, 6.0), point(4.0, 5.0)]],
    }
}

/// The reflex vertex 3 hides the endpoint of the edge hit by the ray.
///
/// Expected walk: `0 1 2 3 8 9 6 7 8 3 4 5`.
pub fn reflex_notch() -> ParsedPolygon {
    ParsedPolygon {
        contour: vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(12.0, 10.0),
            point(7.0, 8.0),
            point(4.0, 10.0),
            point(0.0, 10.0),
        ],
        holes: vec![rect(2.0, 5.0, 4.0, 7.0)],
    }
}

/// The second hole's ray hits the bridge of the first one, and vertex 2 is
/// then present twice in the boundary.
///
/// Expected walk: `0 1 2 6 7 4 5 6 2 10 11 8 9 10 2 3`.
pub fn bridge_behind_bridge() -> ParsedPolygon {
    ParsedPolygon {
        contour: vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(12.0, 10.0),
            point(0.0, 10.0),
        ],
        holes: vec![rect(4.0, 7.0, 6.0, 8.0), rect(1.0, 8.0, 3.0, 9.0)],
    }
}

/// A contour with `teeth` notches hanging from its top edge and a hole below
/// each of them.
///
/// The right edge is slanted so that the rays cast from the holes end up
/// looking at the top right corner, behind the notches.
pub fn comb(teeth: usize) -> ParsedPolygon {
    let width = 10.0 * teeth as f32;
    let mut contour = vec![
        point(0.0, 0.0),
        point(width, 0.0),
        point(width + 4.0, 20.0),
    ];
    let mut holes = Vec::with_capacity(teeth);

    for i in (0..teeth).rev() {
        let x0 = 10.0 * i as f32;
        contour.push(point(x0 + 9.0, 20.0));
        contour.push(point(x0 + 8.0, 9.0));
        contour.push(point(x0 + 7.0, 20.0));
    }
    contour.push(point(0.0, 20.0));

    for i in 0..teeth {
        let x0 = 10.0 * i as f32;
        let top = 7.0 + 0.5 * (i % 3) as f32;
        holes.push(rect(x0 + 2.0, 3.0, x0 + 5.0, top));
    }

    ParsedPolygon { contour, holes }
}

/// A square with a `rows` by `cols` grid of square holes.
///
/// The holes are slightly shifted from each other so that no two of them are
/// aligned.
pub fn hole_grid(rows: usize, cols: usize) -> ParsedPolygon {
    let mut holes = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let idx = (row * cols + col) as f32;
            let x = 20.0 * col as f32 + 7.0 + 0.125 * idx;
            let y = 20.0 * row as f32 + 7.0 + 0.25 * idx;
            holes.push(rect(x, y, x + 5.0, y + 5.0));
        }
    }

    ParsedPolygon {
        contour: vec![
            point(0.0, 0.0),
            point(20.0 * cols as f32 + 10.0, 0.0),
            point(20.0 * cols as f32 + 10.0, 20.0 * rows as f32 + 10.0),
            point(0.0, 20.0 * rows as f32 + 10.0),
        ],
        holes,
    }
}

#[test]
fn fixture_layout() {
    assert_eq!(square_with_hole().num_points(), 8);
    assert_eq!(two_holes().hole_lengths(), vec![4, 4]);

    let comb = comb(3);
    assert_eq!(comb.contour.len(), 3 + 3 * 3 + 1);
    assert_eq!(comb.holes.len(), 3);

    let grid = hole_grid(2, 3);
    assert_eq!(grid.holes.len(), 6);
    assert_eq!(grid.num_points(), 4 + 6 * 4);
}
