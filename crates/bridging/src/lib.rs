#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Hole elimination for polygon triangulation.
//!
//! Ear clipping and most other simple-polygon triangulators only accept a
//! single closed contour. This crate turns an outer contour with holes into
//! such a contour by cutting a bridge from each hole to the boundary: the
//! resulting walk goes from the boundary to the hole, around the hole and back
//! along the same bridge.
//!
//! ```text
//!  +-------------------+          +-------------------+
//!  |                   |          |                   |
//!  |   +---+           |          |   +---+           |
//!  |   |   |           |   ==>    |   |   +===========+
//!  |   +---+           |          |   +---+           |
//!  |                   |          |                   |
//!  +-------------------+          +-------------------+
//! ```
//!
//! # Overview
//!
//! The input is a [`PolygonWithHoles`](struct.PolygonWithHoles.html): a
//! vertex table where the outer contour comes first, followed by the vertices
//! of each hole. The output is a [`BoundaryList`](struct.BoundaryList.html),
//! a circular list of vertex ids in which some ids appear twice (the two ends
//! of each bridge).
//!
//! Holes are merged one at a time, sorted by decreasing x coordinate of their
//! rightmost vertex `M`:
//!
//! - a horizontal ray is cast from `M` towards positive x and the closest
//!   boundary edge it hits is found ([`find_visible_edge`](fn.find_visible_edge.html)),
//! - a boundary vertex visible from `M` is selected, taking reflex vertices
//!   that could hide the naive candidate into account
//!   ([`select_bridge_point`](fn.select_bridge_point.html)),
//! - the hole is spliced into the list after that vertex
//!   ([`splice_hole`](fn.splice_hole.html)).
//!
//! The outer contour and the holes must have opposite windings. Holes must not
//! overlap each other or the outer contour. This is not checked.
//!
//! # Example
//!
//! ```
//! use keyhole_bridging::{BridgeOptions, BoundaryList, HoleEliminator, PolygonWithHoles};
//! use keyhole_bridging::math::point;
//!
//! let mut polygon = PolygonWithHoles::new(&[
//!     point(0.0, 0.0),
//!     point(10.0, 0.0),
//!     point(10.0, 10.0),
//!     point(0.0, 10.0),
//! ]);
//! polygon.add_hole(&[
//!     point(2.0, 4.0),
//!     point(2.0, 6.0),
//!     point(4.0, 6.0),
//!     point(4.0, 4.0),
//! ]);
//!
//! let mut output = BoundaryList::new();
//! let mut eliminator = HoleEliminator::new();
//! eliminator
//!     .eliminate_holes(&polygon, &BridgeOptions::default(), &mut output)
//!     .unwrap();
//!
//! let walk: Vec<u32> = output.vertices().map(|id| id.0).collect();
//! assert_eq!(walk, vec![0, 1, 6, 7, 4, 5, 6, 1, 2, 3]);
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use keyhole_geom as geom;

#[cfg(test)]
use keyhole_extra as extra;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod boundary;
mod eliminator;
mod error;
mod math_utils;
mod polygon;
mod ranking;
mod selector;
mod splice;
mod visibility;

#[cfg(test)]
mod bridge_tests;
#[cfg(test)]
mod fuzz_tests;

#[doc(inline)]
pub use crate::boundary::*;

#[doc(inline)]
pub use crate::eliminator::*;

#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::polygon::*;

#[doc(inline)]
pub use crate::ranking::*;

#[doc(inline)]
pub use crate::selector::*;

#[doc(inline)]
pub use crate::splice::*;

#[doc(inline)]
pub use crate::visibility::*;

pub use crate::geom::Winding;

pub mod math {
    //! f32 version of the keyhole_geom types used everywhere in this crate.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```keyhole_geom::LineSegment<f32>```.
    pub type LineSegment = crate::geom::LineSegment<f32>;

    /// Alias for ```keyhole_geom::Triangle<f32>```.
    pub type Triangle = crate::geom::Triangle<f32>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }
}

/// Index of a vertex in the vertex table of a [`PolygonWithHoles`](struct.PolygonWithHoles.html).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(v: usize) -> Self {
        VertexId(v as u32)
    }
}

/// Parameters for the hole eliminator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct BridgeOptions {
    /// Maximum distance between a ray intersection and a boundary vertex for the
    /// two to be considered the same point.
    ///
    /// Default value: `BridgeOptions::DEFAULT_EPSILON`.
    pub epsilon: f32,

    /// Maximum difference between two angles for them to be considered equal when
    /// ranking the reflex vertices that may block a bridge.
    ///
    /// Default value: `BridgeOptions::DEFAULT_ANGLE_EPSILON`.
    pub angle_epsilon: f32,

    /// Winding of the outer contour, used to tell reflex vertices apart from
    /// convex ones.
    ///
    /// When `None`, the winding is computed from the signed area of the outer
    /// contour.
    ///
    /// Default value: `None`.
    pub contour_winding: Option<Winding>,
}

impl BridgeOptions {
    /// Default point coincidence threshold (machine epsilon).
    pub const DEFAULT_EPSILON: f32 = f32::EPSILON;
    /// Default angle tie threshold (machine epsilon).
    pub const DEFAULT_ANGLE_EPSILON: f32 = f32::EPSILON;

    pub const DEFAULT: Self = BridgeOptions {
        epsilon: Self::DEFAULT_EPSILON,
        angle_epsilon: Self::DEFAULT_ANGLE_EPSILON,
        contour_winding: None,
    };

    #[inline]
    pub fn epsilon(epsilon: f32) -> Self {
        Self::DEFAULT.with_epsilon(epsilon)
    }

    #[inline]
    pub const fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[inline]
    pub const fn with_angle_epsilon(mut self, epsilon: f32) -> Self {
        self.angle_epsilon = epsilon;
        self
    }

    #[inline]
    pub const fn with_contour_winding(mut self, winding: Winding) -> Self {
        self.contour_winding = Some(winding);
        self
    }
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn options_builder() {
    let options = BridgeOptions::epsilon(0.01)
        .with_angle_epsilon(0.001)
        .with_contour_winding(Winding::Negative);

    assert_eq!(options.epsilon, 0.01);
    assert_eq!(options.angle_epsilon, 0.001);
    assert_eq!(options.contour_winding, Some(Winding::Negative));
    assert_eq!(BridgeOptions::default(), BridgeOptions::DEFAULT);
    assert_eq!(BridgeOptions::default().contour_winding, None);
}
