//! The segments a path is made of.

use crate::geom::traits::Transformation;
use crate::geom::{
    ArcSegment, CubicBezierSegment, LengthOptions, LineSegment, QuadraticBezierSegment, Segment,
};
use crate::math::{vector, Box2D, Point, Vector};

/// One drawing command's worth of geometry.
///
/// Every segment knows both of its endpoints, so a segment can be evaluated
/// without looking at the rest of the path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathSegment {
    /// Starts a new sub-path. Has no extent.
    Move(Point),
    Line(LineSegment),
    /// The line going back to the start of the sub-path.
    Close(LineSegment),
    Quadratic(QuadraticBezierSegment),
    Cubic(CubicBezierSegment),
    Arc(ArcSegment),
}

impl PathSegment {
    #[inline]
    pub fn from(&self) -> Point {
        match self {
            PathSegment::Move(to) => *to,
            PathSegment::Line(segment) | PathSegment::Close(segment) => segment.from,
            PathSegment::Quadratic(segment) => segment.from,
            PathSegment::Cubic(segment) => segment.from,
            PathSegment::Arc(segment) => segment.from(),
        }
    }

    #[inline]
    pub fn to(&self) -> Point {
        match self {
            PathSegment::Move(to) => *to,
            PathSegment::Line(segment) | PathSegment::Close(segment) => segment.to,
            PathSegment::Quadratic(segment) => segment.to,
            PathSegment::Cubic(segment) => segment.to,
            PathSegment::Arc(segment) => segment.to(),
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, PathSegment::Move(..))
    }

    #[inline]
    pub fn is_close(&self) -> bool {
        matches!(self, PathSegment::Close(..))
    }

    /// Sample the segment at t (expecting t between 0 and 1).
    pub fn point(&self, t: f64) -> Point {
        match self {
            PathSegment::Move(to) => *to,
            PathSegment::Line(segment) | PathSegment::Close(segment) => segment.point(t),
            PathSegment::Quadratic(segment) => segment.point(t),
            PathSegment::Cubic(segment) => segment.point(t),
            PathSegment::Arc(segment) => segment.point(t),
        }
    }

    /// Sample the segment's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> Vector {
        match self {
            PathSegment::Move(..) => vector(0.0, 0.0),
            PathSegment::Line(segment) | PathSegment::Close(segment) => segment.derivative(t),
            PathSegment::Quadratic(segment) => segment.derivative(t),
            PathSegment::Cubic(segment) => segment.derivative(t),
            PathSegment::Arc(segment) => segment.derivative(t),
        }
    }

    pub fn length(&self, options: &LengthOptions) -> f64 {
        match self {
            PathSegment::Move(..) => 0.0,
            PathSegment::Line(segment) | PathSegment::Close(segment) => segment.length(options),
            PathSegment::Quadratic(segment) => segment.length(options),
            PathSegment::Cubic(segment) => segment.length(options),
            PathSegment::Arc(segment) => segment.length(options),
        }
    }

    /// Returns the smallest rectangle that contains the segment.
    ///
    /// The box of a move is empty and located at its point.
    pub fn bounding_box(&self) -> Box2D {
        match self {
            PathSegment::Move(to) => Box2D { min: *to, max: *to },
            PathSegment::Line(segment) | PathSegment::Close(segment) => segment.bounding_box(),
            PathSegment::Quadratic(segment) => segment.bounding_box(),
            PathSegment::Cubic(segment) => segment.bounding_box(),
            PathSegment::Arc(segment) => segment.bounding_box(),
        }
    }

    /// Applies the transform to this segment and returns the results.
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        match self {
            PathSegment::Move(to) => PathSegment::Move(transform.transform_point(*to)),
            PathSegment::Line(segment) => PathSegment::Line(segment.transformed(transform)),
            PathSegment::Close(segment) => PathSegment::Close(segment.transformed(transform)),
            PathSegment::Quadratic(segment) => {
                PathSegment::Quadratic(segment.transformed(transform))
            }
            PathSegment::Cubic(segment) => PathSegment::Cubic(segment.transformed(transform)),
            PathSegment::Arc(segment) => PathSegment::Arc(segment.transformed(transform)),
        }
    }

    /// Returns true if the segment can be written with the smooth shorthand
    /// (`S` or `T`) after `previous`.
    ///
    /// Only bézier curves can be smooth.
    pub fn is_smooth_from(&self, previous: Option<&PathSegment>) -> bool {
        match self {
            PathSegment::Quadratic(segment) => segment.is_smooth_from(match previous {
                Some(PathSegment::Quadratic(prev)) => Some(prev),
                _ => None,
            }),
            PathSegment::Cubic(segment) => segment.is_smooth_from(match previous {
                Some(PathSegment::Cubic(prev)) => Some(prev),
                _ => None,
            }),
            _ => false,
        }
    }
}

impl Segment for PathSegment {
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
}

impl From<LineSegment> for PathSegment {
    fn from(segment: LineSegment) -> Self {
        PathSegment::Line(segment)
    }
}

impl From<QuadraticBezierSegment> for PathSegment {
    fn from(segment: QuadraticBezierSegment) -> Self {
        PathSegment::Quadratic(segment)
    }
}

impl From<CubicBezierSegment> for PathSegment {
    fn from(segment: CubicBezierSegment) -> Self {
        PathSegment::Cubic(segment)
    }
}

impl From<ArcSegment> for PathSegment {
    fn from(segment: ArcSegment) -> Self {
        PathSegment::Arc(segment)
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn move_has_no_extent() {
    let m = PathSegment::Move(point(3.0, 4.0));
    assert_eq!(m.from(), point(3.0, 4.0));
    assert_eq!(m.to(), point(3.0, 4.0));
    assert_eq!(m.point(0.5), point(3.0, 4.0));
    assert_eq!(m.derivative(0.5), vector(0.0, 0.0));
    assert_eq!(m.length(&LengthOptions::DEFAULT), 0.0);
    assert_eq!(m.bounding_box(), Box2D { min: point(3.0, 4.0), max: point(3.0, 4.0) });
}

#[test]
fn equality_depends_on_kind() {
    let segment = LineSegment {
        from: point(0.0, 0.0),
        to: point(400.0, 0.0),
    };

    let converted: PathSegment = segment.into();
    assert_eq!(converted, PathSegment::Line(segment));
    assert_ne!(PathSegment::Line(segment), PathSegment::Close(segment));
    assert_ne!(
        PathSegment::Line(segment),
        PathSegment::Line(LineSegment {
            from: point(0.0, 0.0),
            to: point(400.0, 1.0),
        })
    );
}

#[test]
fn smoothness_requires_same_kind() {
    let q1 = QuadraticBezierSegment {
        from: point(200.0, 300.0),
        ctrl: point(400.0, 50.0),
        to: point(600.0, 300.0),
    };
    let q2 = QuadraticBezierSegment {
        from: point(600.0, 300.0),
        ctrl: point(800.0, 550.0),
        to: point(1000.0, 300.0),
    };
    let line = PathSegment::Line(LineSegment {
        from: point(200.0, 300.0),
        to: point(600.0, 300.0),
    });

    assert!(PathSegment::Quadratic(q2).is_smooth_from(Some(&PathSegment::Quadratic(q1))));
    assert!(!PathSegment::Quadratic(q2).is_smooth_from(Some(&line)));
    assert!(!PathSegment::Quadratic(q2).is_smooth_from(None));
    assert!(!line.is_smooth_from(Some(&line)));

    let c = CubicBezierSegment {
        from: point(600.0, 300.0),
        ctrl1: point(600.0, 300.0),
        ctrl2: point(700.0, 0.0),
        to: point(800.0, 300.0),
    };
    assert!(PathSegment::Cubic(c).is_smooth_from(Some(&line)));
    assert!(PathSegment::Cubic(c).is_smooth_from(None));
}
