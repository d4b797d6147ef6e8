use crate::{Box2D, LengthOptions, Point, Vector};

/// Common APIs to segment types.
pub trait Segment {
    /// Start of the curve.
    fn from(&self) -> Point;

    /// End of the curve.
    fn to(&self) -> Point;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn point(&self, t: f64) -> Point;

    /// Sample x at t (expecting t between 0 and 1).
    fn x(&self, t: f64) -> f64 {
        self.point(t).x
    }

    /// Sample y at t (expecting t between 0 and 1).
    fn y(&self, t: f64) -> f64 {
        self.point(t).y
    }

    /// Sample the derivative at t (expecting t between 0 and 1).
    ///
    /// The result is not normalized: its magnitude is the speed at which
    /// `point(t)` moves.
    fn derivative(&self, t: f64) -> Vector;

    /// Compute the length of the segment.
    ///
    /// Segments without a closed-form length are approximated with the
    /// tolerance and depth in `options`.
    fn length(&self, options: &LengthOptions) -> f64;

    /// Returns the smallest rectangle that contains the curve.
    fn bounding_box(&self) -> Box2D;
}

macro_rules! impl_segment {
    () => {
        fn from(&self) -> Point {
            self.from()
        }
        fn to(&self) -> Point {
            self.to()
        }
        fn point(&self, t: f64) -> Point {
            self.point(t)
        }
        fn derivative(&self, t: f64) -> Vector {
            self.derivative(t)
        }
        fn length(&self, options: &LengthOptions) -> f64 {
            self.length(options)
        }
        fn bounding_box(&self) -> Box2D {
            self.bounding_box()
        }
    };
}
