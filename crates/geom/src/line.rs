use crate::segment::Segment;
use crate::traits::Transformation;
use crate::{Box2D, LengthOptions, Point, Vector};

/// A linear segment.
///
/// Used for `L`, `H`, `V` and `Z` path-data commands.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t.
    ///
    /// Values of t outside of `[0, 1]` extrapolate along the line.
    #[inline]
    pub fn point(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.to
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// The derivative is constant along a line.
    #[inline]
    pub fn derivative(&self, _t: f64) -> Vector {
        self.to_vector()
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self, _options: &LengthOptions) -> f64 {
        self.to_vector().length()
    }

    /// Returns the smallest rectangle that contains the segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        Box2D {
            min: self.from.min(self.to),
            max: self.from.max(self.to),
        }
    }

    /// Applies the transform to this segment and returns the results.
    #[inline]
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        LineSegment {
            from: transform.transform_point(self.from),
            to: transform.transform_point(self.to),
        }
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }
}

impl Segment for LineSegment {
    impl_segment!();
}

#[cfg(test)]
use crate::point;

#[test]
fn length() {
    let line = LineSegment {
        from: point(0.0, 0.0),
        to: point(400.0, 0.0),
    };
    assert_eq!(line.length(&LengthOptions::DEFAULT), 400.0);

    let line = LineSegment {
        from: point(0.0, 0.0),
        to: point(0.0, 400.0),
    };
    assert_eq!(line.length(&LengthOptions::DEFAULT), 400.0);

    let line = LineSegment {
        from: point(3.0, -4.0),
        to: point(0.0, 0.0),
    };
    assert_eq!(line.length(&LengthOptions::DEFAULT), 5.0);
}

#[test]
fn sample() {
    let line = LineSegment {
        from: point(0.0, 0.0),
        to: point(400.0, 0.0),
    };
    assert_eq!(line.point(0.0), point(0.0, 0.0));
    assert_eq!(line.point(0.3), point(120.0, 0.0));
    assert_eq!(line.point(0.5), point(200.0, 0.0));
    assert_eq!(line.point(0.9), point(360.0, 0.0));
    assert_eq!(line.point(1.0), point(400.0, 0.0));

    // Not clamped.
    assert_eq!(line.point(1.5), point(600.0, 0.0));
}

#[test]
fn derivative() {
    let line = LineSegment {
        from: point(1.0, 2.0),
        to: point(4.0, -2.0),
    };
    assert_eq!(line.derivative(0.0), crate::vector(3.0, -4.0));
    assert_eq!(line.derivative(0.7), crate::vector(3.0, -4.0));
}

#[test]
fn bounding_box() {
    let l1 = LineSegment {
        from: point(1.0, 5.0),
        to: point(5.0, 7.0),
    };
    let r1 = Box2D {
        min: point(1.0, 5.0),
        max: point(5.0, 7.0),
    };

    let l2 = LineSegment {
        from: point(5.0, 5.0),
        to: point(1.0, 1.0),
    };
    let r2 = Box2D {
        min: point(1.0, 1.0),
        max: point(5.0, 5.0),
    };

    let l3 = LineSegment {
        from: point(3.0, 3.0),
        to: point(1.0, 5.0),
    };
    let r3 = Box2D {
        min: point(1.0, 3.0),
        max: point(3.0, 5.0),
    };

    let cases = std::vec![(l1, r1), (l2, r2), (l3, r3)];
    for &(ls, r) in &cases {
        assert_eq!(ls.bounding_box(), r);
    }

    assert_eq!(l2.flip().bounding_box(), r2);
}

#[test]
fn transformed() {
    use crate::Transform;

    let line = LineSegment {
        from: point(0.0, 0.0),
        to: point(100.0, 100.0),
    };

    assert_eq!(
        line.transformed(&Transform::scale(0.1, 0.2)),
        LineSegment {
            from: point(0.0, 0.0),
            to: point(10.0, 20.0),
        }
    );

    let translation = crate::Translation::new(5.0, -5.0);
    assert_eq!(
        line.transformed(&translation),
        LineSegment {
            from: point(5.0, -5.0),
            to: point(105.0, 95.0),
        }
    );
}
