#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! 2D segment math for SVG path data, on top of euclid.
//!
//! This crate is reexported in `svgpath`.
//!
//! # Overview.
//!
//! This crate implements the maths to work with the segments an SVG path is
//! made of:
//!
//! - line segments,
//! - quadratic and cubic bézier curves,
//! - elliptic arcs in the SVG endpoint parameterization.
//!
//! Every segment type can be sampled with `point(t)`, differentiated with
//! `derivative(t)`, measured with `length(&options)` and bounded with
//! `bounding_box()`. These capabilities are gathered in the [`Segment`] trait.
//! Segments can also be mapped through any affine [`Transformation`] with
//! `transformed(&transform)`.
//!
//! # Length
//!
//! Lines, quadratic bézier curves and circular arcs have closed-form lengths.
//! Cubic bézier curves and elliptic arcs are measured by recursively
//! subdividing the curve until the sum of the chords stops improving by more
//! than [`LengthOptions::error`], with at least [`LengthOptions::min_depth`]
//! levels of subdivision.
//!
//! ```
//! use svgpath_geom::{point, CubicBezierSegment, LengthOptions};
//!
//! let curve = CubicBezierSegment {
//!     from: point(0.0, 0.0),
//!     ctrl1: point(0.0, 0.0),
//!     ctrl2: point(0.0, 100.0),
//!     to: point(0.0, 100.0),
//! };
//!
//! assert!((curve.length(&LengthOptions::DEFAULT) - 100.0).abs() < 1e-7);
//! ```

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

#[macro_use]
mod segment;
pub mod arc;
pub mod cubic_bezier;
pub mod length;
mod line;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::arc::{ArcFlags, ArcSegment, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::length::LengthOptions;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::Segment;
#[doc(inline)]
pub use crate::traits::Transformation;

/// Alias for `euclid::default::Point2D<f64>`.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for `euclid::default::Vector2D<f64>`.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for `euclid::default::Box2D<f64>`.
pub type Box2D = euclid::default::Box2D<f64>;

/// Alias for `euclid::default::Rotation2D<f64>`.
pub type Rotation = euclid::default::Rotation2D<f64>;

/// An angle in radians.
pub type Angle = euclid::Angle<f64>;

/// Alias for `euclid::default::Transform2D<f64>`.
pub type Transform = euclid::default::Transform2D<f64>;

/// Alias for `euclid::default::Translation2D<f64>`.
pub type Translation = euclid::default::Translation2D<f64>;

/// Alias for `euclid::default::Scale<f64>`.
pub type Scale = euclid::default::Scale<f64>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub mod traits {
    pub use crate::segment::Segment;

    use crate::{Point, Rotation, Scale, Transform, Translation, Vector};

    /// Anything that can map points and vectors of the plane.
    pub trait Transformation {
        fn transform_point(&self, p: Point) -> Point;
        fn transform_vector(&self, v: Vector) -> Vector;
    }

    impl Transformation for Transform {
        fn transform_point(&self, p: Point) -> Point {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector) -> Vector {
            self.transform_vector(v)
        }
    }

    impl Transformation for Rotation {
        fn transform_point(&self, p: Point) -> Point {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector) -> Vector {
            self.transform_vector(v)
        }
    }

    impl Transformation for Translation {
        fn transform_point(&self, p: Point) -> Point {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector) -> Vector {
            v
        }
    }

    impl Transformation for Scale {
        fn transform_point(&self, p: Point) -> Point {
            (*self).transform_point(p)
        }

        fn transform_vector(&self, v: Vector) -> Vector {
            (*self).transform_vector(v)
        }
    }

    impl<'l, T: Transformation> Transformation for &'l T {
        #[inline]
        fn transform_point(&self, p: Point) -> Point {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector) -> Vector {
            (*self).transform_vector(v)
        }
    }
}

/// Smallest box containing all of the provided points.
///
/// Unlike `Box2D::from_points`, a single point produces a zero-sized box
/// located at that point instead of an empty one.
pub(crate) fn bounding_box_of<I>(points: I) -> Box2D
where
    I: IntoIterator<Item = Point>,
{
    let mut points = points.into_iter();
    let first = match points.next() {
        Some(p) => p,
        None => return Box2D::zero(),
    };

    let mut min = first;
    let mut max = first;
    for p in points {
        min = min.min(p);
        max = max.max(p);
    }

    Box2D { min, max }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{Point, Vector};

    pub fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-7,
            "{actual:?} != {expected:?}"
        );
    }

    pub fn assert_point_approx_eq(actual: Point, expected: Point) {
        assert!(
            (actual - expected).length() < 1e-7,
            "{actual:?} != {expected:?}"
        );
    }

    pub fn assert_vector_approx_eq(actual: Vector, expected: Vector) {
        assert!(
            (actual - expected).length() < 1e-7,
            "{actual:?} != {expected:?}"
        );
    }
}
