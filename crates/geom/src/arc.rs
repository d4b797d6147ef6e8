//! Elliptic arc related maths and tools.

use crate::cubic_bezier::CubicBezierSegment;
use crate::length::approximate_length;
use crate::segment::Segment;
use crate::traits::Transformation;
use crate::{bounding_box_of, point, vector, Box2D, LengthOptions, Point, Vector};
use arrayvec::ArrayVec;

use std::f64::consts::PI;

/// Largest sweep, in degrees, covered by a single cubic bézier curve when
/// approximating an arc.
const MAX_CUBIC_SWEEP: f64 = 30.0;

/// An elliptic arc in the SVG endpoint parameterization.
///
/// This is the form arcs are written in path data: both endpoints, the radii
/// of the ellipse, the rotation of its x axis and the two flags selecting one
/// of the four candidate arcs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_rotation: f64,
    pub flags: ArcFlags,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn, as follows:
///
/// - Of the four candidate arc sweeps, two will represent an arc sweep of greater
///   than or equal to 180 degrees (the "large-arc"), and two will represent an arc
///   sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
///   is `true`, then one of the two larger arc sweeps will be chosen; otherwise, if
///   `large_arc` is `false`, one of the smaller arc sweeps will be chosen.
/// - If `sweep` is `true`, then the arc will be drawn in a "positive-angle" direction
///   (the angle increases as the arc is drawn). A value of `false` causes the arc
///   to be drawn in a "negative-angle" direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

/// The center parameterization of a non-degenerate arc.
#[derive(Copy, Clone, Debug, PartialEq)]
struct CenterParameters {
    center: Point,
    /// Start angle in degrees, in `[0, 360)`.
    theta: f64,
    /// Signed sweep angle in degrees.
    delta: f64,
    /// Factor applied to the radii so that the ellipse reaches both endpoints.
    radius_scale: f64,
}

/// An elliptic arc segment.
///
/// Holds the arc in its SVG endpoint form along with the center
/// parameterization derived from it, which is what sampling and measuring
/// use. The derived parameters are computed when the segment is created and
/// every time one of its endpoint parameters changes.
///
/// Arcs with coincident endpoints are equivalent to omitting the segment, and
/// arcs with a zero radius are drawn as a straight line between their
/// endpoints. These degenerate arcs have no center parameterization.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(
    feature = "serialization",
    derive(Serialize, Deserialize),
    serde(from = "SvgArc", into = "SvgArc")
)]
pub struct ArcSegment {
    arc: SvgArc,
    params: Option<CenterParameters>,
}

impl ArcSegment {
    pub fn new(arc: SvgArc) -> Self {
        ArcSegment {
            arc,
            params: CenterParameters::from_svg_arc(&arc),
        }
    }

    /// The endpoint form of this arc.
    #[inline]
    pub fn svg_arc(&self) -> &SvgArc {
        &self.arc
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.arc.from
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.arc.to
    }

    /// The radii as specified, before any out-of-range correction.
    #[inline]
    pub fn radii(&self) -> Vector {
        self.arc.radii
    }

    /// Rotation of the ellipse's x axis, in degrees.
    #[inline]
    pub fn x_rotation(&self) -> f64 {
        self.arc.x_rotation
    }

    #[inline]
    pub fn flags(&self) -> ArcFlags {
        self.arc.flags
    }

    pub fn set_from(&mut self, from: Point) {
        self.arc.from = from;
        self.reparameterize();
    }

    pub fn set_to(&mut self, to: Point) {
        self.arc.to = to;
        self.reparameterize();
    }

    pub fn set_radii(&mut self, radii: Vector) {
        self.arc.radii = radii;
        self.reparameterize();
    }

    pub fn set_x_rotation(&mut self, x_rotation: f64) {
        self.arc.x_rotation = x_rotation;
        self.reparameterize();
    }

    pub fn set_flags(&mut self, flags: ArcFlags) {
        self.arc.flags = flags;
        self.reparameterize();
    }

    fn reparameterize(&mut self) {
        self.params = CenterParameters::from_svg_arc(&self.arc);
    }

    /// Center of the ellipse, `None` for degenerate arcs.
    #[inline]
    pub fn center(&self) -> Option<Point> {
        self.params.map(|p| p.center)
    }

    /// Start angle in degrees, `None` for degenerate arcs.
    #[inline]
    pub fn theta(&self) -> Option<f64> {
        self.params.map(|p| p.theta)
    }

    /// Signed sweep angle in degrees, `None` for degenerate arcs.
    ///
    /// Positive when the sweep flag is set, negative otherwise.
    #[inline]
    pub fn delta(&self) -> Option<f64> {
        self.params.map(|p| p.delta)
    }

    /// Scale applied to the radii so that the ellipse reaches both endpoints.
    ///
    /// Never less than 1. Degenerate arcs have a scale of 1.
    #[inline]
    pub fn radius_scale(&self) -> f64 {
        self.params.map_or(1.0, |p| p.radius_scale)
    }

    /// Returns true if the arc has a zero radius and is drawn as a line.
    #[inline]
    pub fn is_straight_line(&self) -> bool {
        self.arc.from != self.arc.to && (self.arc.radii.x == 0.0 || self.arc.radii.y == 0.0)
    }

    /// Sample the arc at t (expecting t between 0 and 1).
    pub fn point(&self, t: f64) -> Point {
        match self.params {
            Some(params) => self.ellipse_point(&params, params.theta + params.delta * t),
            None if self.is_straight_line() => self.arc.from.lerp(self.arc.to, t),
            None => self.arc.from,
        }
    }

    // Point of the ellipse at the given angle in degrees.
    fn ellipse_point(&self, params: &CenterParameters, angle: f64) -> Point {
        let (sin_r, cos_r) = self.arc.x_rotation.to_radians().sin_cos();
        let rx = self.arc.radii.x.abs() * params.radius_scale;
        let ry = self.arc.radii.y.abs() * params.radius_scale;
        let (sin_a, cos_a) = angle.to_radians().sin_cos();

        point(
            cos_r * cos_a * rx - sin_r * sin_a * ry + params.center.x,
            sin_r * cos_a * rx + cos_r * sin_a * ry + params.center.y,
        )
    }

    // Derivative of the ellipse with respect to the angle in radians.
    fn ellipse_derivative(&self, params: &CenterParameters, angle: f64) -> Vector {
        let (sin_r, cos_r) = self.arc.x_rotation.to_radians().sin_cos();
        let rx = self.arc.radii.x.abs() * params.radius_scale;
        let ry = self.arc.radii.y.abs() * params.radius_scale;
        let (sin_a, cos_a) = angle.to_radians().sin_cos();

        vector(
            -cos_r * sin_a * rx - sin_r * cos_a * ry,
            -sin_r * sin_a * rx + cos_r * cos_a * ry,
        )
    }

    /// Sample the arc's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> Vector {
        let params = match self.params {
            Some(params) => params,
            None if self.is_straight_line() => return self.arc.to - self.arc.from,
            None => return vector(0.0, 0.0),
        };

        let angle = params.theta + params.delta * t;
        self.ellipse_derivative(&params, angle) * params.delta.to_radians()
    }

    /// Computes the length of the arc.
    ///
    /// Circular arcs have an exact length, elliptic ones are approximated by
    /// recursive subdivision.
    pub fn length(&self, options: &LengthOptions) -> f64 {
        let params = match self.params {
            Some(params) => params,
            None if self.is_straight_line() => return (self.arc.to - self.arc.from).length(),
            None => return 0.0,
        };

        let rx = self.arc.radii.x.abs();
        let ry = self.arc.radii.y.abs();
        if rx == ry {
            return (rx * params.radius_scale * params.delta * PI / 180.0).abs();
        }

        approximate_length(
            &|t| self.ellipse_point(&params, params.theta + params.delta * t),
            0.0,
            1.0,
            options,
        )
    }

    /// Returns the smallest rectangle that contains the arc.
    pub fn bounding_box(&self) -> Box2D {
        let mut points: ArrayVec<Point, 6> = ArrayVec::new();
        points.push(self.arc.from);
        points.push(self.arc.to);

        if let Some(params) = self.params {
            let (sin_r, cos_r) = self.arc.x_rotation.to_radians().sin_cos();
            let rx = self.arc.radii.x.abs();
            let ry = self.arc.radii.y.abs();

            // Angles at which the derivative of x (resp. y) vanishes.
            let x_extremum = (-ry * sin_r).atan2(rx * cos_r).to_degrees();
            let y_extremum = (ry * cos_r).atan2(rx * sin_r).to_degrees();

            for angle in [x_extremum, x_extremum + 180.0, y_extremum, y_extremum + 180.0] {
                if params.covers(angle) {
                    points.push(self.ellipse_point(&params, angle));
                }
            }
        }

        bounding_box_of(points)
    }

    /// Applies the transform to this arc and returns the result.
    ///
    /// The image of the ellipse is another ellipse: its radii and rotation
    /// are the singular values and the left singular vectors of the matrix
    /// whose columns are the transformed axes. Transforms that mirror the
    /// plane reverse the sweep direction. Radii that were too small for the
    /// endpoints stay too small by the same factor.
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        let (sin_r, cos_r) = self.arc.x_rotation.to_radians().sin_cos();
        let rx = self.arc.radii.x.abs();
        let ry = self.arc.radii.y.abs();
        let x_axis = transform.transform_vector(vector(cos_r * rx, sin_r * rx));
        let y_axis = transform.transform_vector(vector(-sin_r * ry, cos_r * ry));

        // Closed form singular value decomposition of [x_axis y_axis].
        let e = (x_axis.x + y_axis.y) / 2.0;
        let f = (x_axis.x - y_axis.y) / 2.0;
        let g = (x_axis.y + y_axis.x) / 2.0;
        let h = (x_axis.y - y_axis.x) / 2.0;
        let q = e.hypot(h);
        let r = f.hypot(g);

        let mut flags = self.arc.flags;
        if x_axis.cross(y_axis) < 0.0 {
            flags.sweep = !flags.sweep;
        }

        ArcSegment::new(SvgArc {
            from: transform.transform_point(self.arc.from),
            to: transform.transform_point(self.arc.to),
            radii: vector(q + r, (q - r).abs()),
            x_rotation: ((h.atan2(e) + g.atan2(f)) / 2.0).to_degrees(),
            flags,
        })
    }

    /// Approximates the arc with a sequence of cubic bézier curves, each
    /// covering at most 30 degrees of the ellipse.
    ///
    /// The curves are chained: the first one starts at `from`, the last one
    /// ends at `to`. Arcs drawn as straight lines produce a single curve and
    /// arcs with coincident endpoints produce none.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment),
    {
        let params = match self.params {
            Some(params) => params,
            None if self.is_straight_line() => {
                let from = self.arc.from;
                let to = self.arc.to;
                cb(&CubicBezierSegment {
                    from,
                    ctrl1: from.lerp(to, 1.0 / 3.0),
                    ctrl2: from.lerp(to, 2.0 / 3.0),
                    to,
                });
                return;
            }
            None => return,
        };

        let count = (params.delta.abs() / MAX_CUBIC_SWEEP).ceil().max(1.0) as u32;
        let step = params.delta / count as f64;
        let sweep = step.to_radians();
        let alpha = sweep.sin() * ((4.0 + 3.0 * (sweep / 2.0).tan().powi(2)).sqrt() - 1.0) / 3.0;

        let mut from = self.arc.from;
        for i in 0..count {
            let start_angle = params.theta + step * i as f64;
            let end_angle = start_angle + step;
            let to = if i + 1 == count {
                self.arc.to
            } else {
                self.ellipse_point(&params, end_angle)
            };

            cb(&CubicBezierSegment {
                from,
                ctrl1: from + self.ellipse_derivative(&params, start_angle) * alpha,
                ctrl2: to - self.ellipse_derivative(&params, end_angle) * alpha,
                to,
            });

            from = to;
        }
    }
}

impl CenterParameters {
    /// Conversion from the endpoint to the center parameterization, see
    /// the SVG implementation notes (F.6.5 and F.6.6).
    fn from_svg_arc(arc: &SvgArc) -> Option<Self> {
        if arc.from == arc.to {
            // Equivalent to omitting the segment.
            return None;
        }

        if arc.radii.x == 0.0 || arc.radii.y == 0.0 {
            // Treated as a straight line.
            return None;
        }

        let (sin_r, cos_r) = arc.x_rotation.to_radians().sin_cos();
        let hd_x = (arc.from.x - arc.to.x) / 2.0;
        let hd_y = (arc.from.y - arc.to.y) / 2.0;

        // F.6.5.1
        let x1 = cos_r * hd_x + sin_r * hd_y;
        let y1 = -sin_r * hd_x + cos_r * hd_y;
        let x1_sq = x1 * x1;
        let y1_sq = y1 * y1;

        // F.6.6.1
        let mut rx = arc.radii.x.abs();
        let mut ry = arc.radii.y.abs();

        // F.6.6.3 the ellipse only ever gets scaled up.
        let mut radius_scale = x1_sq / (rx * rx) + y1_sq / (ry * ry);
        if radius_scale > 1.0 {
            radius_scale = radius_scale.sqrt();
            rx *= radius_scale;
            ry *= radius_scale;
        } else {
            radius_scale = 1.0;
        }
        let rx_sq = rx * rx;
        let ry_sq = ry * ry;

        // F.6.5.2
        let t1 = rx_sq * y1_sq;
        let t2 = ry_sq * x1_sq;
        let mut c = ((rx_sq * ry_sq - t1 - t2) / (t1 + t2)).abs().sqrt();
        if arc.flags.large_arc == arc.flags.sweep {
            c = -c;
        }
        let cx = c * rx * y1 / ry;
        let cy = -c * ry * x1 / rx;

        // F.6.5.3
        let center = point(
            cos_r * cx - sin_r * cy + (arc.from.x + arc.to.x) / 2.0,
            sin_r * cx + cos_r * cy + (arc.from.y + arc.to.y) / 2.0,
        );

        // F.6.5.5 and F.6.5.6
        let ux = (x1 - cx) / rx;
        let uy = (y1 - cy) / ry;
        let vx = (-x1 - cx) / rx;
        let vy = (-y1 - cy) / ry;

        let mut theta = (ux / (ux * ux + uy * uy).sqrt()).acos().to_degrees();
        if uy < 0.0 {
            theta = -theta;
        }
        let theta = theta.rem_euclid(360.0);

        let n = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
        // Rounding errors can push the cosine slightly out of [-1, 1].
        let cos_delta = ((ux * vx + uy * vy) / n).clamp(-1.0, 1.0);
        let mut delta = cos_delta.acos().to_degrees();
        if ux * vy - uy * vx < 0.0 {
            delta = -delta;
        }
        let mut delta = delta.rem_euclid(360.0);
        if !arc.flags.sweep {
            delta -= 360.0;
        }

        Some(CenterParameters {
            center,
            theta,
            delta,
            radius_scale,
        })
    }

    /// Whether the sweep of the arc goes through the angle in degrees.
    fn covers(&self, angle: f64) -> bool {
        let offset = if self.delta > 0.0 {
            (angle - self.theta).rem_euclid(360.0)
        } else {
            (self.theta - angle).rem_euclid(360.0)
        };

        self.delta != 0.0 && offset <= self.delta.abs()
    }
}

impl PartialEq for ArcSegment {
    fn eq(&self, other: &Self) -> bool {
        self.arc == other.arc
    }
}

impl From<SvgArc> for ArcSegment {
    fn from(arc: SvgArc) -> Self {
        ArcSegment::new(arc)
    }
}

impl From<ArcSegment> for SvgArc {
    fn from(arc: ArcSegment) -> Self {
        arc.arc
    }
}

impl Segment for ArcSegment {
    impl_segment!();
}

#[cfg(test)]
use crate::test_utils::{assert_approx_eq, assert_point_approx_eq, assert_vector_approx_eq};

#[cfg(test)]
fn arc(
    from: (f64, f64),
    radii: (f64, f64),
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: (f64, f64),
) -> ArcSegment {
    ArcSegment::new(SvgArc {
        from: point(from.0, from.1),
        to: point(to.0, to.1),
        radii: vector(radii.0, radii.1),
        x_rotation,
        flags: ArcFlags { large_arc, sweep },
    })
}

#[cfg(test)]
fn check_samples(arc: &ArcSegment, expected: &[(f64, f64)]) {
    for (i, &(x, y)) in expected.iter().enumerate() {
        let t = i as f64 / (expected.len() - 1) as f64;
        assert_point_approx_eq(arc.point(t), point(x, y));
    }
}

#[test]
fn center_parameterization() {
    let small_negative = arc((0.0, 0.0), (100.0, 50.0), 0.0, false, false, (100.0, 50.0));
    assert_point_approx_eq(small_negative.center().unwrap(), point(100.0, 0.0));
    assert_approx_eq(small_negative.theta().unwrap(), 180.0);
    assert_approx_eq(small_negative.delta().unwrap(), -90.0);
    check_samples(
        &small_negative,
        &[
            (0.0, 0.0),
            (1.23116594049, 7.82172325201),
            (4.89434837048, 15.4508497187),
            (10.8993475812, 22.699524987),
            (19.0983005625, 29.3892626146),
            (29.2893218813, 35.3553390593),
            (41.2214747708, 40.4508497187),
            (54.6009500260, 44.5503262094),
            (69.0983005625, 47.5528258148),
            (84.3565534960, 49.3844170298),
            (100.0, 50.0),
        ],
    );

    let large_negative = arc((0.0, 0.0), (100.0, 50.0), 0.0, true, false, (100.0, 50.0));
    assert_point_approx_eq(large_negative.center().unwrap(), point(0.0, 50.0));
    assert_approx_eq(large_negative.theta().unwrap(), 270.0);
    assert_approx_eq(large_negative.delta().unwrap(), -270.0);
    check_samples(
        &large_negative,
        &[
            (0.0, 0.0),
            (-45.399049974, 5.44967379058),
            (-80.9016994375, 20.6107373854),
            (-98.7688340595, 42.178276748),
            (-95.1056516295, 65.4508497187),
            (-70.7106781187, 85.3553390593),
            (-30.9016994375, 97.5528258148),
            (15.643446504, 99.3844170298),
            (58.7785252292, 90.4508497187),
            (89.1006524188, 72.699524987),
            (100.0, 50.0),
        ],
    );

    let small_positive = arc((0.0, 0.0), (100.0, 50.0), 0.0, false, true, (100.0, 50.0));
    assert_point_approx_eq(small_positive.center().unwrap(), point(0.0, 50.0));
    assert_approx_eq(small_positive.theta().unwrap(), 270.0);
    assert_approx_eq(small_positive.delta().unwrap(), 90.0);
    check_samples(
        &small_positive,
        &[
            (0.0, 0.0),
            (15.643446504, 0.615582970243),
            (30.9016994375, 2.44717418524),
            (45.399049974, 5.44967379058),
            (58.7785252292, 9.54915028125),
            (70.7106781187, 14.6446609407),
            (80.9016994375, 20.6107373854),
            (89.1006524188, 27.300475013),
            (95.1056516295, 34.5491502813),
            (98.7688340595, 42.178276748),
            (100.0, 50.0),
        ],
    );

    let large_positive = arc((0.0, 0.0), (100.0, 50.0), 0.0, true, true, (100.0, 50.0));
    assert_point_approx_eq(large_positive.center().unwrap(), point(100.0, 0.0));
    assert_approx_eq(large_positive.theta().unwrap(), 180.0);
    assert_approx_eq(large_positive.delta().unwrap(), 270.0);
    check_samples(
        &large_positive,
        &[
            (0.0, 0.0),
            (10.8993475812, -22.699524987),
            (41.2214747708, -40.4508497187),
            (84.3565534960, -49.3844170298),
            (130.901699437, -47.5528258148),
            (170.710678119, -35.3553390593),
            (195.105651630, -15.4508497187),
            (198.768834060, 7.82172325201),
            (180.901699437, 29.3892626146),
            (145.399049974, 44.5503262094),
            (100.0, 50.0),
        ],
    );
}

#[test]
fn circle_length() {
    let options = LengthOptions::DEFAULT;
    let upper = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (200.0, 0.0));
    let lower = arc((200.0, 0.0), (100.0, 100.0), 0.0, false, false, (0.0, 0.0));
    assert_approx_eq(upper.length(&options), PI * 100.0);
    assert_approx_eq(lower.length(&options), PI * 100.0);
}

#[test]
fn ellipse_length() {
    // Half of an ellipse, compared against a finely sampled polyline.
    let half = arc((0.0, 0.0), (100.0, 50.0), 0.0, false, true, (200.0, 0.0));
    let n = 100_000;
    let mut polyline = 0.0;
    let mut prev = half.point(0.0);
    for i in 1..=n {
        let p = half.point(i as f64 / n as f64);
        polyline += (p - prev).length();
        prev = p;
    }

    let len = half.length(&LengthOptions::DEFAULT);
    assert!((len - polyline).abs() < 1e-5);
    assert!(len > 200.0 && len < PI * 100.0);
}

#[test]
fn out_of_range_parameters() {
    let options = LengthOptions::DEFAULT;

    // Identical endpoints, the segment is omitted.
    let omitted = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (0.0, 0.0));
    assert_eq!(omitted.length(&options), 0.0);
    assert_eq!(omitted.center(), None);
    assert_eq!(omitted.radius_scale(), 1.0);

    let omitted = arc((0.0, 70.0), (35.0, 35.0), 0.0, true, false, (0.0, 70.0));
    assert_eq!(omitted.length(&options), 0.0);
    assert_eq!(omitted.point(0.5), point(0.0, 70.0));
    assert_eq!(omitted.derivative(0.5), vector(0.0, 0.0));

    // A zero radius makes a straight line.
    let line = arc((0.0, 0.0), (0.0, 0.0), 0.0, false, false, (200.0, 0.0));
    assert_approx_eq(line.length(&options), 200.0);
    assert_eq!(line.point(0.25), point(50.0, 0.0));
    assert_eq!(line.derivative(0.25), vector(200.0, 0.0));
    assert!(line.is_straight_line());

    // Negative radii are used by absolute value.
    let negative = arc((200.0, 0.0), (-100.0, -100.0), 0.0, false, false, (0.0, 0.0));
    assert_approx_eq(negative.length(&options), PI * 100.0);
    assert_eq!(negative.radii(), vector(-100.0, -100.0));

    // Radii too small to reach the endpoints are scaled up.
    let scaled = arc((0.0, 0.0), (1.0, 1.0), 0.0, false, false, (200.0, 0.0));
    assert_approx_eq(scaled.length(&options), PI * 100.0);
    assert_approx_eq(scaled.radius_scale(), 100.0);

    // The rotation is taken modulo 360.
    let rotated = arc((200.0, 0.0), (-100.0, -100.0), 720.0, false, false, (0.0, 0.0));
    assert_approx_eq(rotated.length(&options), PI * 100.0);
}

#[test]
fn large_rotated_arc_does_not_fail() {
    let arc = arc(
        (725.307482225571, -915.5548199281527),
        (202.79421639137703, 148.77294617167183),
        225.6910319606926,
        true,
        true,
        (-624.6375539637027, 896.5483089399895),
    );

    let center = arc.center().unwrap();
    assert!(center.x.is_finite() && center.y.is_finite());
    assert!(arc.radius_scale() > 1.0);
    // The scaled ellipse barely reaches the endpoints, rounding errors move
    // the center a little.
    assert!((arc.point(0.0) - arc.from()).length() < 1e-3);
    assert!((arc.point(1.0) - arc.to()).length() < 1e-3);
    assert!(arc.length(&LengthOptions::DEFAULT).is_finite());
}

#[test]
fn equality() {
    let a = arc((0.0, 0.0), (100.0, 50.0), 0.0, false, false, (100.0, 50.0));
    assert_eq!(a, arc((0.0, 0.0), (100.0, 50.0), 0.0, false, false, (100.0, 50.0)));
    assert_ne!(a, arc((0.0, 0.0), (100.0, 50.0), 0.0, true, false, (100.0, 50.0)));
}

#[test]
fn setters_reparameterize() {
    let mut a = arc((0.0, 0.0), (100.0, 50.0), 0.0, false, false, (100.0, 50.0));
    a.set_flags(ArcFlags {
        large_arc: true,
        sweep: true,
    });
    assert_approx_eq(a.delta().unwrap(), 270.0);

    a.set_to(point(0.0, 0.0));
    assert_eq!(a.delta(), None);

    a.set_to(point(200.0, 0.0));
    a.set_radii(vector(100.0, 100.0));
    assert_point_approx_eq(a.center().unwrap(), point(100.0, 0.0));

    a.set_from(point(100.0, -100.0));
    a.set_x_rotation(90.0);
    assert_point_approx_eq(a.point(1.0), point(200.0, 0.0));
}

#[test]
fn derivative() {
    // The radius is twice as large, so is the derivative.
    let small = arc((0.0, -2.5), (2.5, 2.5), 0.0, false, true, (0.0, 2.5));
    let big = arc((0.0, -5.0), (5.0, 5.0), 0.0, false, true, (0.0, 5.0));
    let ratio = big.derivative(0.5).length() / small.derivative(0.5).length();
    assert_approx_eq(ratio, 2.0);

    // Matches a finite difference.
    let ellipse = arc((0.0, 0.0), (100.0, 50.0), 30.0, true, false, (100.0, 50.0));
    let h = 1e-6;
    for &t in &[0.1, 0.5, 0.9] {
        let approx = (ellipse.point(t + h) - ellipse.point(t - h)) / (2.0 * h);
        let d = ellipse.derivative(t);
        assert!((approx - d).length() < 1e-3 * d.length());
    }

    // Half a circle of radius 100 swept in the negative direction.
    let half = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (200.0, 0.0));
    assert_vector_approx_eq(half.derivative(0.0), vector(0.0, PI * 100.0));
}

#[test]
fn bounding_box() {
    let upper = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (200.0, 0.0));
    let bb = upper.bounding_box();
    assert_point_approx_eq(bb.min, point(0.0, 0.0));
    assert_point_approx_eq(bb.max, point(200.0, 100.0));

    let lower = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, true, (200.0, 0.0));
    let bb = lower.bounding_box();
    assert_point_approx_eq(bb.min, point(0.0, -100.0));
    assert_point_approx_eq(bb.max, point(200.0, 0.0));

    // Three quarters of an ellipse.
    let large = arc((0.0, 0.0), (100.0, 50.0), 0.0, true, true, (100.0, 50.0));
    let bb = large.bounding_box();
    assert_point_approx_eq(bb.min, point(0.0, -50.0));
    assert_point_approx_eq(bb.max, point(200.0, 50.0));

    // A rotated ellipse, compared against samples.
    let rotated = arc((0.0, 0.0), (100.0, 30.0), 45.0, true, false, (50.0, 20.0));
    let bb = rotated.bounding_box();
    for i in 0..=1000 {
        let p = rotated.point(i as f64 / 1000.0);
        assert!(p.x >= bb.min.x - 1e-9 && p.x <= bb.max.x + 1e-9);
        assert!(p.y >= bb.min.y - 1e-9 && p.y <= bb.max.y + 1e-9);
    }

    // Degenerate arcs.
    let line = arc((0.0, 0.0), (0.0, 10.0), 0.0, false, false, (20.0, -5.0));
    assert_eq!(
        line.bounding_box(),
        Box2D {
            min: point(0.0, -5.0),
            max: point(20.0, 0.0),
        }
    );
}

#[cfg(test)]
fn transform_samples(arc: &ArcSegment, transform: &crate::Transform) -> Vec<Point> {
    (0..=10)
        .map(|i| transform.transform_point(arc.point(i as f64 / 10.0)))
        .collect()
}

#[test]
fn transformed_by_similarity() {
    use crate::{Angle, Transform};

    // Rotations, uniform scales and translations preserve the parameterization.
    let transform = Transform::rotation(Angle::degrees(40.0))
        .then_scale(2.0, 2.0)
        .then_translate(vector(-100.0, 50.0));

    for &(large_arc, sweep) in &[(false, true), (true, false)] {
        let a = arc((0.0, 0.0), (100.0, 50.0), 20.0, large_arc, sweep, (100.0, 50.0));
        let transformed = a.transformed(&transform);
        assert_eq!(transformed.flags(), a.flags());

        for (i, expected) in transform_samples(&a, &transform).into_iter().enumerate() {
            assert_point_approx_eq(transformed.point(i as f64 / 10.0), expected);
        }
    }
}

#[test]
fn transformed_by_affine() {
    use crate::Transform;

    let half_circle = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (200.0, 0.0));
    assert_point_approx_eq(half_circle.point(0.5), point(100.0, 100.0));

    let stretched = half_circle.transformed(&Transform::scale(0.5, 2.0));
    assert_point_approx_eq(stretched.from(), point(0.0, 0.0));
    assert_point_approx_eq(stretched.to(), point(100.0, 0.0));
    assert_point_approx_eq(stretched.point(0.5), point(50.0, 200.0));

    // Mirroring reverses the direction of the sweep.
    let mirrored = half_circle.transformed(&Transform::scale(1.0, -1.0));
    assert!(mirrored.flags().sweep);
    assert!(!mirrored.flags().large_arc);
    assert_point_approx_eq(mirrored.point(0.5), point(100.0, -100.0));

    // Shears and mirrors: the transformed samples must lie on the new arc.
    let transforms = [
        Transform::new(1.0, 0.0, 0.5, 1.0, 0.0, 0.0),
        Transform::new(-1.0, 0.3, 0.2, 1.5, 0.0, 0.0),
        Transform::scale(0.5, 2.0).then_translate(vector(10.0, 10.0)),
    ];
    for &(large_arc, sweep) in &[(false, true), (true, false)] {
        let a = arc((0.0, 0.0), (100.0, 50.0), 20.0, large_arc, sweep, (100.0, 50.0));
        for transform in &transforms {
            let transformed = a.transformed(transform);
            let on_arc: Vec<Point> = (0..=1000)
                .map(|i| transformed.point(i as f64 / 1000.0))
                .collect();

            for p in transform_samples(&a, transform) {
                let distance = on_arc
                    .iter()
                    .map(|q| (*q - p).length())
                    .fold(f64::INFINITY, f64::min);
                assert!(distance < 1.0, "{p:?} is not on {transformed:?}");
            }
        }
    }
}

#[test]
fn cubic_bezier_approximation() {
    let half_circle = arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (200.0, 0.0));

    let mut curves = Vec::new();
    half_circle.for_each_cubic_bezier(&mut |curve| curves.push(*curve));

    assert_eq!(curves.len(), 6);
    assert_eq!(curves[0].from, point(0.0, 0.0));
    assert_eq!(curves[5].to, point(200.0, 0.0));
    for pair in curves.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    for curve in &curves {
        for i in 0..=10 {
            let p = curve.point(i as f64 / 10.0);
            assert!(((p - point(100.0, 0.0)).length() - 100.0).abs() < 1e-3);
            // The arc goes through (100, 100).
            assert!(p.y > -1e-9);
        }
    }

    let ellipse = arc((0.0, 0.0), (100.0, 50.0), 20.0, true, false, (100.0, 50.0));
    let options = LengthOptions::DEFAULT;
    let mut length = 0.0;
    let mut last = ellipse.from();
    ellipse.for_each_cubic_bezier(&mut |curve| {
        assert_eq!(curve.from, last);
        last = curve.to;
        length += curve.length(&options);
    });
    assert_eq!(last, ellipse.to());
    assert!((length - ellipse.length(&options)).abs() < 1e-3);
}

#[test]
fn cubic_bezier_approximation_of_degenerate_arcs() {
    let straight = arc((0.0, 0.0), (0.0, 50.0), 0.0, false, false, (30.0, 0.0));
    let mut curves = Vec::new();
    straight.for_each_cubic_bezier(&mut |curve| curves.push(*curve));
    assert_eq!(curves.len(), 1);
    assert_point_approx_eq(curves[0].point(0.5), point(15.0, 0.0));

    let nothing = arc((10.0, 10.0), (50.0, 50.0), 0.0, false, false, (10.0, 10.0));
    nothing.for_each_cubic_bezier(&mut |_| panic!());
}
