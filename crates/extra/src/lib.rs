#![deny(bare_trait_objects)]
#![allow(dead_code)]

//! Various optional utilities for the keyhole crates.
//!
//! - [`parser`](parser/index.html): a small text format for polygons with holes,
//! - [`fixtures`](fixtures/index.html): reference shapes used by the tests,
//! - [`debugging`](debugging/index.html): walk validation, test case reduction
//!   and a console logger.
//!
//! The polygons handled here are plain point rings, so that this crate does
//! not depend on the hole eliminator itself.

extern crate keyhole_geom as geom;

pub use geom::euclid;

pub mod math {
    //! f32 aliases of the keyhole_geom types.

    pub type Point = crate::geom::Point<f32>;
    pub type LineSegment = crate::geom::LineSegment<f32>;

    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }
}

pub mod debugging;
pub mod fixtures;
pub mod parser;

pub use crate::parser::{parse_polygon, ParseError, ParsedPolygon};
