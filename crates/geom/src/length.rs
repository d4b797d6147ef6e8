//! Length approximation for segments without a closed-form length.

use crate::Point;

/// Parameters of the recursive length approximation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LengthOptions {
    /// Subdivision stops once splitting a chord in two improves the
    /// estimate by less than this amount.
    ///
    /// Default value: `LengthOptions::DEFAULT_ERROR`.
    pub error: f64,

    /// Number of subdivision levels applied regardless of `error`.
    ///
    /// Default value: `LengthOptions::DEFAULT_MIN_DEPTH`.
    pub min_depth: u32,
}

impl LengthOptions {
    /// Default error tolerance.
    pub const DEFAULT_ERROR: f64 = 1e-12;

    /// Default minimum recursion depth.
    pub const DEFAULT_MIN_DEPTH: u32 = 5;

    pub const DEFAULT: Self = LengthOptions {
        error: Self::DEFAULT_ERROR,
        min_depth: Self::DEFAULT_MIN_DEPTH,
    };

    #[inline]
    pub fn error(error: f64) -> Self {
        Self::DEFAULT.with_error(error)
    }

    #[inline]
    pub fn with_error(mut self, error: f64) -> Self {
        self.error = error;
        self
    }

    #[inline]
    pub fn with_min_depth(mut self, min_depth: u32) -> Self {
        self.min_depth = min_depth;
        self
    }
}

impl Default for LengthOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Approximates the length of the curve sampled by `point` between the
/// parameters `t0` and `t1` by recursive subdivision into chords.
///
/// Subdivision continues while halving a chord improves the estimate by more
/// than `options.error`, and always reaches `options.min_depth` levels so that
/// a midpoint which happens to be colinear with the endpoints can't stop the
/// recursion early.
pub fn approximate_length<F>(point: &F, t0: f64, t1: f64, options: &LengthOptions) -> f64
where
    F: Fn(f64) -> Point,
{
    subdivide(point, t0, t1, point(t0), point(t1), options, 0)
}

fn subdivide<F>(
    point: &F,
    t0: f64,
    t1: f64,
    p0: Point,
    p1: Point,
    options: &LengthOptions,
    depth: u32,
) -> f64
where
    F: Fn(f64) -> Point,
{
    let t_mid = (t0 + t1) * 0.5;
    let p_mid = point(t_mid);

    let chord = (p1 - p0).length();
    let halves = (p_mid - p0).length() + (p1 - p_mid).length();

    if halves - chord > options.error || depth < options.min_depth {
        let depth = depth + 1;
        return subdivide(point, t0, t_mid, p0, p_mid, options, depth)
            + subdivide(point, t_mid, t1, p_mid, p1, options, depth);
    }

    halves
}

#[test]
fn straight_line_is_exact() {
    use crate::point;
    use crate::test_utils::assert_approx_eq;

    let from = point(0.0, 0.0);
    let to = point(300.0, 400.0);
    let line = |t: f64| from.lerp(to, t);

    assert_approx_eq(approximate_length(&line, 0.0, 1.0, &LengthOptions::DEFAULT), 500.0);
    assert_approx_eq(approximate_length(&line, 0.0, 0.5, &LengthOptions::DEFAULT), 250.0);
}

#[test]
fn min_depth_is_always_reached() {
    use crate::point;
    use std::cell::Cell;

    let samples = Cell::new(0);
    let origin = point(0.0, 0.0);
    let counting = |t: f64| {
        samples.set(samples.get() + 1);
        origin
    };

    let len = approximate_length(&counting, 0.0, 1.0, &LengthOptions::DEFAULT.with_min_depth(3));
    assert_eq!(len, 0.0);
    // Two endpoints, then one midpoint per node of a tree of depth 3.
    assert_eq!(samples.get(), 2 + 15);
}

#[test]
fn midpoint_colinear_curve() {
    use crate::point;

    // An S-shaped curve whose midpoint lies on the chord.
    let wave = |t: f64| point(t * 100.0, (t * std::f64::consts::TAU).sin() * 50.0);

    let shallow = approximate_length(&wave, 0.0, 1.0, &LengthOptions::DEFAULT.with_min_depth(0));
    let deep = approximate_length(&wave, 0.0, 1.0, &LengthOptions::DEFAULT);

    assert_eq!(shallow, 100.0);
    assert!(deep > 200.0);
}
