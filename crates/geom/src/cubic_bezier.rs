use crate::length::approximate_length;
use crate::segment::Segment;
use crate::traits::Transformation;
use crate::{bounding_box_of, Box2D, LengthOptions, Point, Vector};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn point(&self, t: f64) -> Point {
        Point::new(self.x(t), self.y(t))
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: f64) -> f64 {
        let (c0, c1, c2, c3) = Self::coefficients(t);
        c0 * self.from.x + c1 * self.ctrl1.x + c2 * self.ctrl2.x + c3 * self.to.x
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: f64) -> f64 {
        let (c0, c1, c2, c3) = Self::coefficients(t);
        c0 * self.from.y + c1 * self.ctrl1.y + c2 * self.ctrl2.y + c3 * self.to.y
    }

    #[inline]
    fn coefficients(t: f64) -> (f64, f64, f64, f64) {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        (
            one_t2 * one_t,
            3.0 * one_t2 * t,
            3.0 * one_t * t2,
            t2 * t,
        )
    }

    #[inline]
    fn derivative_coefficients(t: f64) -> (f64, f64, f64, f64) {
        let t2 = t * t;
        (
            -3.0 * t2 + 6.0 * t - 3.0,
            9.0 * t2 - 12.0 * t + 3.0,
            -9.0 * t2 + 6.0 * t,
            3.0 * t2,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> Vector {
        let (c0, c1, c2, c3) = Self::derivative_coefficients(t);
        self.from.to_vector() * c0
            + self.ctrl1.to_vector() * c1
            + self.ctrl2.to_vector() * c2
            + self.to.to_vector() * c3
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.to
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }

    /// Applies the transform to this curve and returns the results.
    #[inline]
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        CubicBezierSegment {
            from: transform.transform_point(self.from),
            ctrl1: transform.transform_point(self.ctrl1),
            ctrl2: transform.transform_point(self.ctrl2),
            to: transform.transform_point(self.to),
        }
    }

    /// Approximates the length of the curve by recursive subdivision.
    pub fn length(&self, options: &LengthOptions) -> f64 {
        approximate_length(&|t| self.point(t), 0.0, 1.0, options)
    }

    /// Returns true if this curve would be drawn as a smooth continuation of
    /// `previous` (`S` command).
    ///
    /// When `previous` isn't a cubic bézier curve, the curve is smooth if its
    /// first control point is on its starting point.
    pub fn is_smooth_from(&self, previous: Option<&CubicBezierSegment>) -> bool {
        match previous {
            Some(prev) => self.from == prev.to && self.ctrl1 - self.from == prev.to - prev.ctrl2,
            None => self.ctrl1 == self.from,
        }
    }

    /// Moves the start of this curve onto the end of `previous` and places the
    /// first control point so that `is_smooth_from(previous)` holds.
    pub fn set_smooth_from(&mut self, previous: Option<&CubicBezierSegment>) {
        match previous {
            Some(prev) => {
                self.from = prev.to;
                self.ctrl1 = self.from + (prev.to - prev.ctrl2);
            }
            None => {
                self.ctrl1 = self.from;
            }
        }
    }

    /// Invokes a callback for each local x extremum in the open range ]0, 1[.
    ///
    /// This returns the advancements along the curve, not the actual x position.
    pub fn for_each_local_x_extremum_t<F>(&self, cb: &mut F)
    where
        F: FnMut(f64),
    {
        Self::for_each_local_extremum(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x, cb)
    }

    /// Invokes a callback for each local y extremum in the open range ]0, 1[.
    ///
    /// This returns the advancements along the curve, not the actual y position.
    pub fn for_each_local_y_extremum_t<F>(&self, cb: &mut F)
    where
        F: FnMut(f64),
    {
        Self::for_each_local_extremum(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y, cb)
    }

    fn for_each_local_extremum<F>(p0: f64, p1: f64, p2: f64, p3: f64, cb: &mut F)
    where
        F: FnMut(f64),
    {
        // The derivative of a cubic bézier curve is a second degree polynomial
        // f(x) = a * x² + b * x + c such as:
        let a = 3.0 * (p3 + 3.0 * (p1 - p2) - p0);
        let b = 6.0 * (p2 - 2.0 * p1 + p0);
        let c = 3.0 * (p1 - p0);

        fn in_range(t: f64) -> bool {
            t > 0.0 && t < 1.0
        }

        // If the derivative is a linear function
        if a == 0.0 {
            if b != 0.0 {
                let t = -c / b;
                if in_range(t) {
                    cb(t);
                }
            }
            return;
        }

        let discriminant = b * b - 4.0 * a * c;

        // There is no Real solution for the equation
        if discriminant < 0.0 {
            return;
        }

        // There is one Real solution for the equation
        if discriminant == 0.0 {
            let t = -b / (2.0 * a);
            if in_range(t) {
                cb(t);
            }
            return;
        }

        // There are two Real solutions for the equation
        let discriminant_sqrt = discriminant.sqrt();

        let mut first_extremum = (-b - discriminant_sqrt) / (2.0 * a);
        let mut second_extremum = (-b + discriminant_sqrt) / (2.0 * a);
        if first_extremum > second_extremum {
            std::mem::swap(&mut first_extremum, &mut second_extremum);
        }

        if in_range(first_extremum) {
            cb(first_extremum);
        }

        if in_range(second_extremum) {
            cb(second_extremum);
        }
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D {
        let mut points: ArrayVec<Point, 6> = ArrayVec::new();
        points.push(self.from);
        points.push(self.to);
        self.for_each_local_x_extremum_t(&mut |t| points.push(self.point(t)));
        self.for_each_local_y_extremum_t(&mut |t| points.push(self.point(t)));

        bounding_box_of(points)
    }
}

impl Segment for CubicBezierSegment {
    impl_segment!();
}

#[cfg(test)]
use crate::test_utils::{assert_approx_eq, assert_point_approx_eq};
#[cfg(test)]
use crate::{point, vector};

#[cfg(test)]
fn cubic(
    from: (f64, f64),
    ctrl1: (f64, f64),
    ctrl2: (f64, f64),
    to: (f64, f64),
) -> CubicBezierSegment {
    CubicBezierSegment {
        from: point(from.0, from.1),
        ctrl1: point(ctrl1.0, ctrl1.1),
        ctrl2: point(ctrl2.0, ctrl2.1),
        to: point(to.0, to.1),
    }
}

#[test]
fn approximate_circle() {
    // A quarter of a circle drawn in inkscape.
    let arc = cubic(
        (0.0, 0.0),
        (0.0, 109.66797),
        (-88.90345, 198.57142),
        (-198.57142, 198.57142),
    );

    let expected = [
        (0.0, 0.0),
        (-2.59896457, 32.20931647),
        (-10.12330256, 62.76392816),
        (-22.16418039, 91.25500149),
        (-38.31276448, 117.27370288),
        (-58.16022125, 140.41119875),
        (-81.29771712, 160.25865552),
        (-107.31641851, 176.40723961),
        (-135.80749184, 188.44811744),
        (-166.36210353, 195.97245543),
        (-198.57142, 198.57142),
    ];

    for (i, &(x, y)) in expected.iter().enumerate() {
        let t = i as f64 / 10.0;
        assert_point_approx_eq(arc.point(t), point(x, y));
    }

    let arc = cubic(
        (-198.57142, 198.57142),
        (-109.66797 - 198.57142, 198.57142),
        (-198.57143 - 198.57142, -88.90345 + 198.57142),
        (-198.57143 - 198.57142, 0.0),
    );

    let expected = [
        (-198.57142, 198.57142),
        (-230.78073675, 195.97245543),
        (-261.3353492, 188.44811744),
        (-289.82642365, 176.40723961),
        (-315.8451264, 160.25865552),
        (-338.98262375, 140.41119875),
        (-358.830082, 117.27370288),
        (-374.97866745, 91.25500149),
        (-387.0195464, 62.76392816),
        (-394.54388515, 32.20931647),
        (-397.14285, 0.0),
    ];

    for (i, &(x, y)) in expected.iter().enumerate() {
        let t = i as f64 / 10.0;
        assert_point_approx_eq(arc.point(t), point(x, y));
    }
}

#[test]
fn svg_spec_examples() {
    let cases = [
        // M100,200 C100,100 250,100 250,200
        (
            cubic((100.0, 200.0), (100.0, 100.0), (250.0, 100.0), (250.0, 200.0)),
            [(132.4, 137.0), (175.0, 125.0), (245.8, 173.0)],
        ),
        // S400,300 400,200
        (
            cubic((250.0, 200.0), (250.0, 300.0), (400.0, 300.0), (400.0, 200.0)),
            [(282.4, 263.0), (325.0, 275.0), (395.8, 227.0)],
        ),
        // M100,200 C100,100 400,100 400,200
        (
            cubic((100.0, 200.0), (100.0, 100.0), (400.0, 100.0), (400.0, 200.0)),
            [(164.8, 137.0), (250.0, 125.0), (391.6, 173.0)],
        ),
        // M100,500 C25,400 475,400 400,500
        (
            cubic((100.0, 500.0), (25.0, 400.0), (475.0, 400.0), (400.0, 500.0)),
            [(145.9, 437.0), (250.0, 425.0), (407.8, 473.0)],
        ),
        // M100,800 C175,700 325,700 400,800
        (
            cubic((100.0, 800.0), (175.0, 700.0), (325.0, 700.0), (400.0, 800.0)),
            [(183.7, 737.0), (250.0, 725.0), (375.4, 773.0)],
        ),
        // M600,200 C675,100 975,100 900,200
        (
            cubic((600.0, 200.0), (675.0, 100.0), (975.0, 100.0), (900.0, 200.0)),
            [(712.05, 137.0), (806.25, 125.0), (911.85, 173.0)],
        ),
        // M600,500 C600,350 900,650 900,500
        (
            cubic((600.0, 500.0), (600.0, 350.0), (900.0, 650.0), (900.0, 500.0)),
            [(664.8, 462.2), (750.0, 500.0), (891.6, 532.4)],
        ),
        // M600,800 C625,700 725,700 750,800
        (
            cubic((600.0, 800.0), (625.0, 700.0), (725.0, 700.0), (750.0, 800.0)),
            [(638.7, 737.0), (675.0, 725.0), (740.4, 773.0)],
        ),
        // S875,900 900,800
        (
            cubic((750.0, 800.0), (775.0, 900.0), (875.0, 900.0), (900.0, 800.0)),
            [(788.7, 863.0), (825.0, 875.0), (890.4, 827.0)],
        ),
    ];

    for (curve, samples) in &cases {
        assert_point_approx_eq(curve.point(0.0), curve.from);
        assert_point_approx_eq(curve.point(0.3), point(samples[0].0, samples[0].1));
        assert_point_approx_eq(curve.point(0.5), point(samples[1].0, samples[1].1));
        assert_point_approx_eq(curve.point(0.9), point(samples[2].0, samples[2].1));
        assert_point_approx_eq(curve.point(1.0), curve.to);
    }

    // The last curve is the smooth continuation of the one before.
    assert!(cases[8].0.is_smooth_from(Some(&cases[7].0)));
}

#[test]
fn length() {
    let options = LengthOptions::DEFAULT;

    // A straight line.
    let line = cubic((0.0, 0.0), (0.0, 0.0), (0.0, 100.0), (0.0, 100.0));
    assert_approx_eq(line.length(&options), 100.0);

    // A diagonal line.
    let diagonal = cubic((0.0, 0.0), (0.0, 0.0), (100.0, 100.0), (100.0, 100.0));
    assert_approx_eq(diagonal.length(&options), (2.0f64 * 100.0 * 100.0).sqrt());

    // A quarter circle of radius 100. Being an approximation of a circle, its
    // length is not exactly pi * 50.
    let kappa = 4.0 * (2.0f64.sqrt() - 1.0) / 3.0;
    let quarter = cubic(
        (0.0, 0.0),
        (0.0, kappa * 100.0),
        (100.0 - kappa * 100.0, 100.0),
        (100.0, 100.0),
    );
    assert_approx_eq(quarter.length(&options), 157.1016698);
}

#[test]
fn length_midpoint_on_chord() {
    // The midpoint of this curve is on the line between its endpoints, a
    // single subdivision step would measure it as a straight line of length 300.
    let curve = cubic((600.0, 500.0), (600.0, 350.0), (900.0, 650.0), (900.0, 500.0));
    assert_eq!(curve.point(0.5), point(750.0, 500.0));
    assert!(curve.length(&LengthOptions::DEFAULT) > 300.0);
}

#[test]
fn derivative() {
    let curve = cubic((0.0, 0.0), (1.0, 1.0), (2.0, -1.0), (3.0, 0.0));
    assert_eq!(curve.derivative(0.0), vector(3.0, 3.0));
    assert_eq!(curve.derivative(1.0), vector(3.0, 3.0));

    // The curve is twice as long, so is the derivative.
    let double = cubic((0.0, 0.0), (2.0, 2.0), (4.0, -2.0), (6.0, 0.0));
    let ratio = double.derivative(0.5).length() / curve.derivative(0.5).length();
    assert_approx_eq(ratio, 2.0);
}

#[test]
fn smooth() {
    let c1 = cubic((0.0, 0.0), (0.0, 0.0), (100.0, 100.0), (100.0, 100.0));
    let mut c2 = cubic((600.0, 500.0), (600.0, 350.0), (900.0, 650.0), (900.0, 500.0));

    assert!(!c2.is_smooth_from(Some(&c1)));
    c2.set_smooth_from(Some(&c1));
    assert!(c2.is_smooth_from(Some(&c1)));
    assert_eq!(c2.from, point(100.0, 100.0));
    assert_eq!(c2.ctrl1, point(100.0, 100.0));
}

#[test]
fn transformed() {
    use crate::{Angle, Transform};

    let curve = cubic((100.0, 200.0), (100.0, 100.0), (250.0, 100.0), (250.0, 200.0));
    let transform = Transform::scale(1.0, -1.0)
        .then_rotate(Angle::degrees(-45.0))
        .then_translate(vector(3.0, 4.0));

    let transformed = curve.transformed(&transform);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert_point_approx_eq(transformed.point(t), transform.transform_point(curve.point(t)));
    }
}

#[test]
fn bounding_box() {
    let curve = cubic((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
    assert_eq!(
        curve.bounding_box(),
        Box2D {
            min: point(0.0, 0.0),
            max: point(1.0, 0.75),
        }
    );

    // Extrema on both sides of the chord.
    let curve = cubic((0.0, 0.0), (1.0, 2.0), (2.0, -2.0), (3.0, 0.0));
    let bb = curve.bounding_box();
    let y_max = (0..=1000)
        .map(|i| curve.y(i as f64 / 1000.0))
        .fold(f64::MIN, f64::max);
    assert_eq!(bb.min.x, 0.0);
    assert_eq!(bb.max.x, 3.0);
    assert!(bb.max.y >= y_max);
    assert!(bb.max.y - y_max < 1e-5);
    assert_approx_eq(bb.min.y, -bb.max.y);
}
