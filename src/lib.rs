#![deny(bare_trait_objects)]
#![no_std]

//! Hole elimination for polygon triangulation.
//!
//! Simple triangulators such as ear clippers only accept a single contour.
//! This crate turns a polygon with holes into one closed walk over all of its
//! vertices by connecting each hole to the outer contour with a bridge edge.
//!
//! # Crates
//!
//! This meta-crate (`keyhole`) reexports the following sub-crates for convenience:
//!
//! * **keyhole_bridging** - The hole eliminator.
//! * **keyhole_geom** - Points, segments and triangles on top of euclid.
//! * **keyhole_extra** - Additional testing and debugging tools.
//!
//! Each `keyhole_<name>` crate is reexported as a `<name>` module in `keyhole`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled with the `serialization` feature flag
//! (disabled by default).
//!
//! `keyhole_extra` is disabled by default. It can be added with the feature flag `extra`.
//!
//! # Example
//!
//! ```
//! use keyhole::bridging::{eliminate_holes, BridgeOptions, PolygonWithHoles};
//! use keyhole::math::point;
//!
//! let polygon = PolygonWithHoles::from_rings(
//!     &[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0), point(0.0, 10.0)],
//!     &[[point(2.0, 4.0), point(2.0, 6.0), point(4.0, 6.0), point(4.0, 4.0)]],
//! );
//!
//! let boundary = eliminate_holes(&polygon, &BridgeOptions::DEFAULT).unwrap();
//!
//! // The outer contour, the hole and both ends of the bridge.
//! assert_eq!(boundary.len(), 4 + 4 + 2);
//! ```

pub extern crate keyhole_bridging;
#[cfg(feature = "extra")]
pub extern crate keyhole_extra;
pub extern crate keyhole_geom;

pub use keyhole_bridging as bridging;
#[cfg(feature = "extra")]
pub use keyhole_extra as extra;
pub use keyhole_geom as geom;

pub use bridging::math;
