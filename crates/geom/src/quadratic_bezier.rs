use crate::segment::Segment;
use crate::traits::Transformation;
use crate::{bounding_box_of, Box2D, LengthOptions, Point, Vector};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn point(&self, t: f64) -> Point {
        Point::new(self.x(t), self.y(t))
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: f64) -> f64 {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        one_t2 * self.from.x + 2.0 * one_t * t * self.ctrl.x + t2 * self.to.x
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: f64) -> f64 {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        one_t2 * self.from.y + 2.0 * one_t * t * self.ctrl.y + t2 * self.to.y
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.to
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> Vector {
        (self.ctrl - self.from) * (2.0 * (1.0 - t)) + (self.to - self.ctrl) * (2.0 * t)
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }

    /// Applies the transform to this curve and returns the results.
    #[inline]
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        QuadraticBezierSegment {
            from: transform.transform_point(self.from),
            ctrl: transform.transform_point(self.ctrl),
            to: transform.transform_point(self.to),
        }
    }

    /// Computes the exact length of the curve.
    ///
    /// The options are ignored, quadratic bézier curves have a closed-form
    /// arc length.
    pub fn length(&self, _options: &LengthOptions) -> f64 {
        let ax = self.from.x - 2.0 * self.ctrl.x + self.to.x;
        let ay = self.from.y - 2.0 * self.ctrl.y + self.to.y;
        let bx = 2.0 * (self.ctrl.x - self.from.x);
        let by = 2.0 * (self.ctrl.y - self.from.y);
        let a_len = ax.hypot(ay);
        let b_len = bx.hypot(by);
        let a_dot_b = ax * bx + ay * by;

        if a_len < 1e-12 {
            // Control point in the middle, this is a line.
            return b_len;
        }

        if (a_dot_b + a_len * b_len).abs() < 1e-12 * a_len * b_len {
            // The control point is on the line but outside of the endpoints,
            // the curve folds back on itself. The tolerance is relative so
            // that rounding errors on large coordinates land here too.
            let k = b_len / a_len;
            if k >= 2.0 {
                return b_len - a_len;
            }
            return a_len * (k * k / 2.0 - k + 1.0);
        }

        let a = 4.0 * (ax * ax + ay * ay);
        let b = 4.0 * (ax * bx + ay * by);
        let c = bx * bx + by * by;

        let s_abc = 2.0 * (a + b + c).sqrt();
        let a_2 = a.sqrt();
        let a_32 = 2.0 * a * a_2;
        let c_2 = 2.0 * c.sqrt();
        let b_a = b / a_2;

        (a_32 * s_abc
            + a_2 * b * (s_abc - c_2)
            + (4.0 * c * a - b * b) * ((2.0 * a_2 + b_a + s_abc) / (b_a + c_2)).ln())
            / (4.0 * a_32)
    }

    /// Returns true if this curve would be drawn as a smooth continuation of
    /// `previous` (`T` command).
    ///
    /// When `previous` isn't a quadratic bézier curve, the curve is smooth if its
    /// control point is on its starting point.
    pub fn is_smooth_from(&self, previous: Option<&QuadraticBezierSegment>) -> bool {
        match previous {
            Some(prev) => self.from == prev.to && self.ctrl - self.from == prev.to - prev.ctrl,
            None => self.ctrl == self.from,
        }
    }

    /// Moves the start of this curve onto the end of `previous` and places the
    /// control point so that `is_smooth_from(previous)` holds.
    pub fn set_smooth_from(&mut self, previous: Option<&QuadraticBezierSegment>) {
        match previous {
            Some(prev) => {
                self.from = prev.to;
                self.ctrl = self.from + (prev.to - prev.ctrl);
            }
            None => {
                self.ctrl = self.from;
            }
        }
    }

    /// Find the advancement of the x-most position in the curve, if any.
    pub fn local_x_extremum_t(&self) -> Option<f64> {
        let div = self.from.x - 2.0 * self.ctrl.x + self.to.x;
        if div == 0.0 {
            return None;
        }
        let t = (self.from.x - self.ctrl.x) / div;
        if t > 0.0 && t < 1.0 {
            return Some(t);
        }

        None
    }

    /// Find the advancement of the y-most position in the curve, if any.
    pub fn local_y_extremum_t(&self) -> Option<f64> {
        let div = self.from.y - 2.0 * self.ctrl.y + self.to.y;
        if div == 0.0 {
            return None;
        }
        let t = (self.from.y - self.ctrl.y) / div;
        if t > 0.0 && t < 1.0 {
            return Some(t);
        }

        None
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D {
        let mut points: ArrayVec<Point, 4> = ArrayVec::new();
        points.push(self.from);
        points.push(self.to);
        if let Some(t) = self.local_x_extremum_t() {
            points.push(self.point(t));
        }
        if let Some(t) = self.local_y_extremum_t() {
            points.push(self.point(t));
        }

        bounding_box_of(points)
    }
}

impl Segment for QuadraticBezierSegment {
    impl_segment!();
}

#[cfg(test)]
use crate::point;
#[cfg(test)]
use crate::test_utils::{assert_approx_eq, assert_point_approx_eq};

#[test]
fn svg_spec_examples() {
    // M200,300 Q400,50 600,300 T1000,300
    let q1 = QuadraticBezierSegment {
        from: point(200.0, 300.0),
        ctrl: point(400.0, 50.0),
        to: point(600.0, 300.0),
    };
    assert_point_approx_eq(q1.point(0.0), point(200.0, 300.0));
    assert_point_approx_eq(q1.point(0.3), point(320.0, 195.0));
    assert_point_approx_eq(q1.point(0.5), point(400.0, 175.0));
    assert_point_approx_eq(q1.point(0.9), point(560.0, 255.0));
    assert_point_approx_eq(q1.point(1.0), point(600.0, 300.0));

    let q2 = QuadraticBezierSegment {
        from: point(600.0, 300.0),
        ctrl: point(800.0, 550.0),
        to: point(1000.0, 300.0),
    };
    assert_point_approx_eq(q2.point(0.0), point(600.0, 300.0));
    assert_point_approx_eq(q2.point(0.3), point(720.0, 405.0));
    assert_point_approx_eq(q2.point(0.5), point(800.0, 425.0));
    assert_point_approx_eq(q2.point(0.9), point(960.0, 345.0));
    assert_point_approx_eq(q2.point(1.0), point(1000.0, 300.0));

    assert!(q2.is_smooth_from(Some(&q1)));
}

#[test]
fn length() {
    let quad = |from: (f64, f64), ctrl: (f64, f64), to: (f64, f64)| QuadraticBezierSegment {
        from: point(from.0, from.1),
        ctrl: point(ctrl.0, ctrl.1),
        to: point(to.0, to.1),
    };
    let options = LengthOptions::DEFAULT;

    let cases = [
        // General case.
        (quad((200.0, 300.0), (400.0, 50.0), (600.0, 300.0)), 487.77109389525975),
        (quad((200.0, 300.0), (400.0, 50.0), (500.0, 200.0)), 379.90458193489155),
        // Starts and ends at the same point.
        (quad((6.0, 2.0), (5.0, -1.0), (6.0, 2.0)), 3.1622776601683795),
        // Straight lines.
        (quad((1.0, 0.0), (2.0, 0.0), (3.0, 0.0)), 2.0),
        (quad((1.0, 3.0), (2.0, 5.0), (-9.0, -17.0)), 22.73335777124786),
        // A single point.
        (quad((1.0, 0.0), (1.0, 0.0), (1.0, 0.0)), 0.0),
    ];

    for (curve, expected) in &cases {
        assert_approx_eq(curve.length(&options), *expected);
    }
}

#[test]
fn length_matches_approximation() {
    let curve = QuadraticBezierSegment {
        from: point(200.0, 300.0),
        ctrl: point(400.0, 50.0),
        to: point(500.0, 200.0),
    };

    let options = LengthOptions {
        error: 1e-14,
        min_depth: 20,
    };
    let approx = crate::length::approximate_length(&|t| curve.point(t), 0.0, 1.0, &options);
    assert_approx_eq(curve.length(&options), approx);
}

#[test]
fn length_control_point_on_endpoint() {
    // Control points that only differ from the end point by rounding errors.
    let cases = [
        ((206.5, 525.0), (162.5, 583.0), (162.5, 583.0), 72.80109889280519),
        ((425.781, 446.289), (410.40000000000003, 373.047), (410.4, 373.047), 74.83959997888816),
        ((639.648, 568.115), (606.6890000000001, 507.568), (606.689, 507.568), 68.93645544992873),
        ((288.818, 616.699), (301.025, 547.3629999999999), (301.025, 547.363), 70.40235610403947),
        ((339.927, 706.25), (243.92700000000002, 806.25), (243.927, 806.25), 138.6217876093077),
        ((539.795, 702.637), (548.0959999999999, 803.4669999999999), (548.096, 803.467), 101.17111989594662),
        ((537.815, 555.042), (570.1680000000001, 499.1600000000001), (570.168, 499.16), 64.57177814649368),
        ((615.297, 470.503), (538.797, 694.5029999999999), (538.797, 694.503), 236.70287281737836),
    ];

    for &(from, ctrl, to, expected) in &cases {
        let curve = QuadraticBezierSegment {
            from: point(from.0, from.1),
            ctrl: point(ctrl.0, ctrl.1),
            to: point(to.0, to.1),
        };
        let len = curve.length(&LengthOptions::DEFAULT);
        assert!(len.is_finite());
        assert_approx_eq(len, expected);
    }
}

#[test]
fn derivative() {
    let curve = QuadraticBezierSegment {
        from: point(600.0, 100.0),
        ctrl: point(600.0, 0.0),
        to: point(600.0, 300.0),
    };

    assert_eq!(curve.derivative(0.0), crate::vector(0.0, -200.0));
    assert_eq!(curve.derivative(1.0), crate::vector(0.0, 600.0));

    // Scaling the curve scales the derivative.
    let small = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    let big = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(2.0, 2.0),
        to: point(4.0, 0.0),
    };
    assert_eq!(big.derivative(0.5), small.derivative(0.5) * 2.0);
}

#[test]
fn smooth() {
    let q1 = QuadraticBezierSegment {
        from: point(200.0, 300.0),
        ctrl: point(400.0, 50.0),
        to: point(600.0, 300.0),
    };
    let mut q2 = QuadraticBezierSegment {
        from: point(600.0, 300.0),
        ctrl: point(400.0, 50.0),
        to: point(1000.0, 300.0),
    };

    assert!(!q2.is_smooth_from(Some(&q1)));
    q2.set_smooth_from(Some(&q1));
    assert!(q2.is_smooth_from(Some(&q1)));
    assert_eq!(q2.ctrl, point(800.0, 550.0));

    assert!(!q2.is_smooth_from(None));
    q2.set_smooth_from(None);
    assert!(q2.is_smooth_from(None));
    assert_eq!(q2.ctrl, q2.from);
}

#[test]
fn bounding_box_for_monotonic_quadratic_bezier_segment() {
    let a = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(0.0, 0.0),
        to: point(2.0, 0.0),
    };

    let expected_aabb = Box2D {
        min: point(0.0, 0.0),
        max: point(2.0, 0.0),
    };

    assert_eq!(a.bounding_box(), expected_aabb);
}

#[test]
fn minimum_bounding_box_for_quadratic_bezier_segment() {
    let a = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    let expected_aabb = Box2D {
        min: point(0.0, 0.0),
        max: point(2.0, 0.5),
    };

    assert_eq!(a.bounding_box(), expected_aabb);
}

#[test]
fn transformed() {
    use crate::{Angle, Transform};

    let curve = QuadraticBezierSegment {
        from: point(200.0, 300.0),
        ctrl: point(400.0, 50.0),
        to: point(600.0, 300.0),
    };
    let transform = Transform::rotation(Angle::degrees(30.0))
        .then_scale(2.0, 0.5)
        .then_translate(crate::vector(-10.0, 20.0));

    let transformed = curve.transformed(&transform);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert_point_approx_eq(transformed.point(t), transform.transform_point(curve.point(t)));
    }
}
