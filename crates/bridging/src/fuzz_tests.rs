use crate::bridge_tests::test_polygon;
use crate::extra::parser::ParsedPolygon;
use crate::math::{point, vector, Point};

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// A star shaped contour around the origin. Every point of the contour is at
// least 60 units away from the origin and consecutive points are less than
// 1.6 / 8 of a turn apart, so the disc of radius 48 is inside.
fn random_star(rng: &mut StdRng) -> Vec<Point> {
    let num_points = rng.gen_range(8..32);
    let step = 2.0 * PI / num_points as f32;

    (0..num_points)
        .map(|i| {
            let angle = (i as f32 + rng.gen_range(-0.3..0.3)) * step;
            let radius = rng.gen_range(60.0..100.0);
            point(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

// Rotated squares around the points of a grid, all within 40 units of the
// origin and far enough from each other to never overlap.
fn random_holes(rng: &mut StdRng) -> Vec<Vec<Point>> {
    let mut holes = Vec::new();
    for i in -2..=2 {
        for j in -2..=2 {
            let center = point(i as f32 * 15.0, j as f32 * 15.0);
            if center.to_vector().length() > 30.0 || !rng.gen_bool(0.75) {
                continue;
            }

            let center = center + vector(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
            let half_size = rng.gen_range(1.0..3.0);
            let (sin, cos) = rng.gen_range(0.0..PI).sin_cos();
            let corner = |x: f32, y: f32| {
                let (x, y) = (x * half_size, y * half_size);
                center + vector(x * cos - y * sin, x * sin + y * cos)
            };

            // Clockwise.
            holes.push(vec![
                corner(-1.0, -1.0),
                corner(-1.0, 1.0),
                corner(1.0, 1.0),
                corner(1.0, -1.0),
            ]);
        }
    }

    holes
}

// A 40 by 40 square whose top edge has random V shaped notches. All
// coordinates are integers so that rays and sight lines often go exactly
// through vertices.
fn random_comb(rng: &mut StdRng) -> Vec<Point> {
    let mut contour = vec![point(0.0, 0.0), point(40.0, 0.0), point(40.0, 40.0)];

    let mut x = 38;
    while x > 2 {
        if rng.gen_bool(0.5) {
            let depth = rng.gen_range(1..=3);
            contour.push(point((x + 1) as f32, 40.0));
            contour.push(point(x as f32, (40 - depth) as f32));
            contour.push(point((x - 1) as f32, 40.0));
        }
        x -= rng.gen_range(3..=5);
    }

    contour.push(point(0.0, 40.0));

    contour
}

// Rectangles and triangles with integer coordinates, at most one per cell of
// a 4 by 4 grid. Cells are separated by at least two units and stay below
// the notches of `random_comb`.
fn random_integer_holes(rng: &mut StdRng) -> Vec<Vec<Point>> {
    let mut holes = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            if !rng.gen_bool(0.6) {
                continue;
            }

            let x0 = 2 + 9 * i + rng.gen_range(0..=2);
            let y0 = 2 + 8 * j + rng.gen_range(0..=2);
            let x1 = x0 + rng.gen_range(1..=4);
            let y1 = y0 + rng.gen_range(1..=4);
            let xm = rng.gen_range(x0..=x1);
            let p = |x: i32, y: i32| point(x as f32, y as f32);

            // Clockwise.
            let hole = match rng.gen_range(0..3) {
                0 => vec![p(x0, y0), p(x0, y1), p(x1, y1), p(x1, y0)],
                1 => vec![p(x0, y0), p(xm, y1), p(x1, y0)],
                _ => vec![p(x0, y1), p(x1, y1), p(xm, y0)],
            };
            holes.push(hole);
        }
    }

    holes
}

fn mirrored(polygon: &ParsedPolygon) -> ParsedPolygon {
    let mirror = |ring: &Vec<Point>| -> Vec<Point> {
        ring.iter().map(|p| point(-p.x, p.y)).collect()
    };

    ParsedPolygon {
        contour: mirror(&polygon.contour),
        holes: polygon.holes.iter().map(mirror).collect(),
    }
}

#[test]
fn fuzzing_star_polygons() {
    let mut rng = StdRng::seed_from_u64(0x6b65_7968);

    for _ in 0..200 {
        let polygon = ParsedPolygon {
            contour: random_star(&mut rng),
            holes: random_holes(&mut rng),
        };

        test_polygon(&polygon);
        // Clockwise contour with counter-clockwise holes.
        test_polygon(&mirrored(&polygon));
    }
}

#[test]
fn fuzzing_single_hole() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let contour = random_star(&mut rng);
        let mut holes = random_holes(&mut rng);
        holes.truncate(1);

        test_polygon(&ParsedPolygon { contour, holes });
    }
}

#[test]
fn fuzzing_integer_coordinates() {
    let mut rng = StdRng::seed_from_u64(40);

    for _ in 0..400 {
        let polygon = ParsedPolygon {
            contour: random_comb(&mut rng),
            holes: random_integer_holes(&mut rng),
        };

        test_polygon(&polygon);
        test_polygon(&mirrored(&polygon));
    }
}
