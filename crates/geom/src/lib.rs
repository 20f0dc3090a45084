#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [keyhole](https://docs.rs/keyhole/).
//!
//! # Overview.
//!
//! This crate implements the few primitives the hole elimination algorithm
//! needs:
//!
//! - [line segments](struct.LineSegment.html), with a dedicated intersection
//!   routine for horizontal rays,
//! - [triangles](struct.Triangle.html), with a strict point containment test,
//! - the orientation helpers in [`utils`](utils/index.html).
//!
//! They are generic over the [`Scalar`](trait.Scalar.html) type, which is
//! implemented for `f32` and `f64`.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod line;
mod triangle;
pub mod utils;

#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::triangle::Triangle;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::Float;

    use core::fmt::Debug;
    use core::ops::AddAssign;

    /// The floating point types the geometry is generic over.
    pub trait Scalar: Float + Sized + Debug + AddAssign {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// The orientation of a closed contour.
///
/// With the y axis pointing up, `Positive` is counter-clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Winding {
    Positive,
    Negative,
}

impl Winding {
    /// Returns `1` for a positive winding and `-1` for a negative one.
    #[inline]
    pub fn sign<S: Scalar>(self) -> S {
        match self {
            Winding::Positive => S::ONE,
            Winding::Negative => -S::ONE,
        }
    }
}
