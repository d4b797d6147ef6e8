//! The default path data structure.

use crate::geom::traits::Transformation;
use crate::geom::LengthOptions;
use crate::math::{Box2D, Point, Vector};
use crate::{PathError, PathSegment};

use std::ops::{Index, IndexMut};
use std::slice;

/// An ordered sequence of path segments.
///
/// Consecutive segments usually share their endpoints but nothing enforces it,
/// each segment carries both of its endpoints.
///
/// The path can be evaluated as a whole: `point(t)` and `tangent(t)` map `t` in
/// `[0, 1]` to a position along the entire path, proportionally to the length
/// of each segment. The lengths are computed lazily and cached until the path
/// is modified, which is why these queries need mutable access.
///
/// # Examples
///
/// ```
/// use svgpath_path::{Path, PathSegment};
/// use svgpath_path::geom::LineSegment;
/// use svgpath_path::math::point;
///
/// let mut path = Path::new();
/// path.push(PathSegment::Move(point(0.0, 0.0)));
/// path.push(PathSegment::Line(LineSegment { from: point(0.0, 0.0), to: point(100.0, 0.0) }));
/// path.push(PathSegment::Line(LineSegment { from: point(100.0, 0.0), to: point(100.0, 100.0) }));
///
/// assert_eq!(path.point(0.25), Some(point(50.0, 0.0)));
/// assert_eq!(path.point(0.75), Some(point(100.0, 50.0)));
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    segments: Vec<PathSegment>,
    #[cfg_attr(feature = "serialization", serde(skip))]
    lengths: Option<LengthCache>,
}

/// Lengths of the segments, computed with `options`.
#[derive(Clone, Debug)]
struct LengthCache {
    options: LengthOptions,
    total: f64,
    /// Cumulative fraction of the total length at the end of each segment.
    fractions: Vec<f64>,
}

impl LengthCache {
    fn new(segments: &[PathSegment], options: &LengthOptions) -> Self {
        log::trace!("Computing the lengths of {} path segments", segments.len());

        let lengths: Vec<f64> = segments.iter().map(|s| s.length(options)).collect();
        let total: f64 = lengths.iter().sum();

        let fractions = if total > 0.0 {
            let mut fraction = 0.0;
            lengths
                .iter()
                .map(|length| {
                    fraction += length / total;
                    fraction
                })
                .collect()
        } else {
            // Nothing to distribute, split evenly so that sampling stays defined.
            let n = segments.len() as f64;
            (1..=segments.len()).map(|i| i as f64 / n).collect()
        };

        LengthCache {
            options: *options,
            total,
            fractions,
        }
    }

    /// Maps a parameter along the whole path to a segment index and a
    /// parameter along that segment.
    fn locate(&self, t: f64) -> (usize, f64) {
        let fractions = &self.fractions;
        let last = fractions.len() - 1;
        let idx = fractions.partition_point(|&f| f <= t).min(last);

        let (start, end) = if idx == 0 {
            (0.0, fractions[0])
        } else {
            (fractions[idx - 1], fractions[idx])
        };

        let span = end - start;
        if span <= 0.0 {
            return (idx, 0.0);
        }

        (idx, (t - start) / span)
    }
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
            lengths: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            segments: Vec::with_capacity(capacity),
            lengths: None,
        }
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Path {
            segments,
            lengths: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PathSegment> {
        self.segments.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Mutable access to a segment. Invalidates the cached lengths.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PathSegment> {
        self.lengths = None;
        self.segments.get_mut(index)
    }

    /// Mutable iteration over the segments. Invalidates the cached lengths.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, PathSegment> {
        self.lengths = None;
        self.segments.iter_mut()
    }

    /// Replaces the segment at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, segment: PathSegment) -> PathSegment {
        self.lengths = None;
        std::mem::replace(&mut self.segments[index], segment)
    }

    /// Inserts a segment at `index`, shifting the following ones.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, segment: PathSegment) {
        self.lengths = None;
        self.segments.insert(index, segment);
    }

    /// Removes and returns the segment at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> PathSegment {
        self.lengths = None;
        self.segments.remove(index)
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.lengths = None;
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.lengths = None;
        self.segments.pop()
    }

    pub fn clear(&mut self) {
        self.lengths = None;
        self.segments.clear();
    }

    /// Reversing a path is not supported: it would require reversing the
    /// geometry of each segment as well.
    ///
    /// Takes `&mut self` like the other sequence operations (`insert`,
    /// `remove`, ...) so that in-place reversal can be added without changing
    /// the signature.
    pub fn reverse(&mut self) -> Result<(), PathError> {
        Err(PathError::ReverseUnsupported)
    }

    fn length_cache(&mut self, options: Option<&LengthOptions>) -> &LengthCache {
        let stale = matches!(
            (&self.lengths, options),
            (Some(cache), Some(options)) if cache.options != *options
        );
        if stale {
            self.lengths = None;
        }

        let options = options.copied().unwrap_or_default();
        let segments = &self.segments;
        self.lengths
            .get_or_insert_with(|| LengthCache::new(segments, &options))
    }

    /// The total length of the path.
    ///
    /// The result is cached until the path is modified or a length with
    /// different options is requested.
    pub fn length(&mut self, options: &LengthOptions) -> f64 {
        self.length_cache(Some(options)).total
    }

    /// Maps `t` in `[0, 1]` to a segment and a parameter along it.
    ///
    /// The endpoints are mapped directly to the first and last segments
    /// without computing any length.
    fn locate(&mut self, t: f64) -> Option<(usize, f64)> {
        if self.segments.is_empty() {
            return None;
        }
        if t == 0.0 {
            return Some((0, t));
        }
        if t == 1.0 {
            return Some((self.segments.len() - 1, t));
        }

        Some(self.length_cache(None).locate(t))
    }

    /// Sample the path at t (expecting t between 0 and 1).
    ///
    /// Uses the cached lengths when available, and lengths computed with the
    /// default options otherwise. Returns `None` if the path is empty.
    pub fn point(&mut self, t: f64) -> Option<Point> {
        let (idx, t) = self.locate(t)?;
        Some(self.segments[idx].point(t))
    }

    /// The derivative of the segment found at t, with respect to that
    /// segment's own parameter.
    ///
    /// Returns `None` if the path is empty.
    pub fn tangent(&mut self, t: f64) -> Option<Vector> {
        let (idx, t) = self.locate(t)?;
        Some(self.segments[idx].derivative(t))
    }

    /// Returns the smallest rectangle that contains the path, or `None` if
    /// the path is empty.
    pub fn bounding_box(&self) -> Option<Box2D> {
        let mut segments = self.segments.iter();
        let first = segments.next()?.bounding_box();

        Some(segments.fold(first, |bb, segment| {
            let other = segment.bounding_box();
            Box2D {
                min: bb.min.min(other.min),
                max: bb.max.max(other.max),
            }
        }))
    }

    /// Applies the transform to every segment of the path.
    pub fn transformed<T: Transformation>(mut self, transform: &T) -> Self {
        for segment in self.iter_mut() {
            *segment = segment.transformed(transform);
        }

        self
    }

    /// Serializes the path into SVG path data.
    pub fn d(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Index<usize> for Path {
    type Output = PathSegment;

    fn index(&self, index: usize) -> &PathSegment {
        &self.segments[index]
    }
}

impl IndexMut<usize> for Path {
    fn index_mut(&mut self, index: usize) -> &mut PathSegment {
        self.lengths = None;
        &mut self.segments[index]
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Path::from_segments(iter.into_iter().collect())
    }
}

impl Extend<PathSegment> for Path {
    fn extend<I: IntoIterator<Item = PathSegment>>(&mut self, iter: I) {
        self.lengths = None;
        self.segments.extend(iter);
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path::from_segments(segments)
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l PathSegment;
    type IntoIter = slice::Iter<'l, PathSegment>;

    fn into_iter(self) -> slice::Iter<'l, PathSegment> {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> std::vec::IntoIter<PathSegment> {
        self.segments.into_iter()
    }
}

#[cfg(test)]
use crate::geom::{
    ArcFlags, ArcSegment, CubicBezierSegment, LineSegment, QuadraticBezierSegment, SvgArc,
};
#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use std::f64::consts::PI;

#[cfg(test)]
fn line(from: (f64, f64), to: (f64, f64)) -> PathSegment {
    PathSegment::Line(LineSegment {
        from: point(from.0, from.1),
        to: point(to.0, to.1),
    })
}

#[cfg(test)]
fn arc(
    from: (f64, f64),
    radii: (f64, f64),
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: (f64, f64),
) -> PathSegment {
    PathSegment::Arc(ArcSegment::new(SvgArc {
        from: point(from.0, from.1),
        to: point(to.0, to.1),
        radii: vector(radii.0, radii.1),
        x_rotation,
        flags: ArcFlags { large_arc, sweep },
    }))
}

#[cfg(test)]
fn assert_point_approx_eq(actual: Option<Point>, expected: Point, tolerance: f64) {
    let actual = actual.unwrap();
    assert!(
        (actual - expected).length() < tolerance,
        "{actual:?} != {expected:?}"
    );
}

#[cfg(test)]
fn assert_vector_approx_eq(actual: Option<Vector>, expected: Vector) {
    let actual = actual.unwrap();
    assert!(
        (actual - expected).length() < 1e-7,
        "{actual:?} != {expected:?}"
    );
}

#[cfg(test)]
fn sample_path() -> Path {
    vec![
        line((600.0, 350.0), (650.0, 325.0)),
        arc((650.0, 325.0), (25.0, 25.0), -30.0, false, true, (700.0, 300.0)),
        PathSegment::Cubic(CubicBezierSegment {
            from: point(700.0, 300.0),
            ctrl1: point(800.0, 400.0),
            ctrl2: point(750.0, 200.0),
            to: point(600.0, 100.0),
        }),
        PathSegment::Quadratic(QuadraticBezierSegment {
            from: point(600.0, 100.0),
            ctrl: point(600.0, 0.0),
            to: point(600.0, 300.0),
        }),
    ]
    .into()
}

#[test]
fn circle() {
    let mut path: Path = vec![
        arc((0.0, 0.0), (100.0, 100.0), 0.0, false, false, (200.0, 0.0)),
        arc((200.0, 0.0), (100.0, 100.0), 0.0, false, false, (0.0, 0.0)),
    ]
    .into();

    assert_point_approx_eq(path.point(0.0), point(0.0, 0.0), 1e-7);
    assert_point_approx_eq(path.point(0.25), point(100.0, 100.0), 1e-7);
    assert_point_approx_eq(path.point(0.5), point(200.0, 0.0), 1e-7);
    assert_point_approx_eq(path.point(0.75), point(100.0, -100.0), 1e-7);
    assert_point_approx_eq(path.point(1.0), point(0.0, 0.0), 1e-7);
    assert!((path.length(&LengthOptions::DEFAULT) - PI * 200.0).abs() < 1e-7);
}

#[test]
fn big_pie() {
    // M300,200 h-150 a150,150 0 1,0 150,-150 z
    let mut path: Path = vec![
        line((300.0, 200.0), (150.0, 200.0)),
        arc((150.0, 200.0), (150.0, 150.0), 0.0, true, false, (300.0, 50.0)),
        line((300.0, 50.0), (300.0, 200.0)),
    ]
    .into();

    assert_point_approx_eq(path.point(0.0), point(300.0, 200.0), 1e-7);
    assert_point_approx_eq(path.point(0.14897825542), point(150.0, 200.0), 1e-7);
    assert_point_approx_eq(path.point(0.5), point(406.066017177, 306.066017177), 1e-7);
    assert_point_approx_eq(path.point(1.0 - 0.14897825542), point(300.0, 50.0), 1e-7);
    assert_point_approx_eq(path.point(1.0), point(300.0, 200.0), 1e-7);
    assert!((path.length(&LengthOptions::DEFAULT) - (PI * 225.0 + 300.0)).abs() < 1e-6);
}

#[test]
fn little_pie() {
    // M275,175 v-150 a150,150 0 0,0 -150,150 z
    let mut path: Path = vec![
        line((275.0, 175.0), (275.0, 25.0)),
        arc((275.0, 25.0), (150.0, 150.0), 0.0, false, false, (125.0, 175.0)),
        line((125.0, 175.0), (275.0, 175.0)),
    ]
    .into();

    assert_point_approx_eq(path.point(0.0), point(275.0, 175.0), 1e-7);
    assert_point_approx_eq(path.point(0.2800495767557787), point(275.0, 25.0), 1e-7);
    assert_point_approx_eq(
        path.point(0.5),
        point(168.93398282201787, 68.93398282201787),
        1e-7,
    );
    assert_point_approx_eq(path.point(1.0 - 0.2800495767557787), point(125.0, 175.0), 1e-7);
    assert_point_approx_eq(path.point(1.0), point(275.0, 175.0), 1e-7);
    assert!((path.length(&LengthOptions::DEFAULT) - (PI * 75.0 + 300.0)).abs() < 1e-6);
}

#[test]
fn bumpy() {
    // M600,350 l 50,-25
    //          a25,25 -30 0,1 50,-25 l 50,-25
    //          a25,50 -30 0,1 50,-25 l 50,-25
    //          a25,75 -30 0,1 50,-25 l 50,-25
    //          a25,100 -30 0,1 50,-25 l 50,-25
    let mut path: Path = vec![
        line((600.0, 350.0), (650.0, 325.0)),
        arc((650.0, 325.0), (25.0, 25.0), -30.0, false, true, (700.0, 300.0)),
        line((700.0, 300.0), (750.0, 275.0)),
        arc((750.0, 275.0), (25.0, 50.0), -30.0, false, true, (800.0, 250.0)),
        line((800.0, 250.0), (850.0, 225.0)),
        arc((850.0, 225.0), (25.0, 75.0), -30.0, false, true, (900.0, 200.0)),
        line((900.0, 200.0), (950.0, 175.0)),
        arc((950.0, 175.0), (25.0, 100.0), -30.0, false, true, (1000.0, 150.0)),
        line((1000.0, 150.0), (1050.0, 125.0)),
    ]
    .into();

    assert_point_approx_eq(path.point(0.0), point(600.0, 350.0), 1e-7);
    assert_point_approx_eq(path.point(0.3), point(755.23979927, 212.1820209585), 1e-7);
    assert_point_approx_eq(path.point(0.5), point(827.73074926, 147.8241574162), 1e-7);
    assert_point_approx_eq(path.point(0.9), point(971.28435780, 106.3023526073), 1e-7);
    assert_point_approx_eq(path.point(1.0), point(1050.0, 125.0), 1e-7);
    assert!((path.length(&LengthOptions::DEFAULT) - 928.388639381).abs() < 1e-7);
}

#[test]
fn zero_length_paths() {
    let origin = point(0.0, 0.0);
    let cases: Vec<Path> = vec![
        vec![PathSegment::Move(origin)].into(),
        vec![
            PathSegment::Move(origin),
            PathSegment::Close(LineSegment { from: origin, to: origin }),
        ]
        .into(),
        vec![PathSegment::Move(origin), line((0.0, 0.0), (0.0, 0.0))].into(),
    ];

    for mut path in cases {
        assert_eq!(path.point(0.0), Some(origin));
        assert_eq!(path.point(0.5), Some(origin));
        assert_eq!(path.point(1.0), Some(origin));
        assert_eq!(path.length(&LengthOptions::DEFAULT), 0.0);
    }

    let mut only_line: Path = vec![line((1.0, 1.0), (1.0, 1.0))].into();
    assert_eq!(only_line.point(0.0), Some(point(1.0, 1.0)));
    assert_eq!(only_line.point(0.5), Some(point(1.0, 1.0)));
    assert_eq!(only_line.point(1.0), Some(point(1.0, 1.0)));
    assert_eq!(only_line.length(&LengthOptions::DEFAULT), 0.0);
}

#[test]
fn empty_path() {
    let mut path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.point(0.5), None);
    assert_eq!(path.tangent(0.5), None);
    assert_eq!(path.bounding_box(), None);
    assert_eq!(path.length(&LengthOptions::DEFAULT), 0.0);
    assert_eq!(path.d(), "");
}

#[test]
fn tangent() {
    let mut path = sample_path();

    assert_eq!(path.tangent(0.0), Some(vector(50.0, -25.0)));
    assert_vector_approx_eq(
        path.tangent(0.25),
        vector(197.17077123205894, 106.56022001841387),
    );
    assert_vector_approx_eq(
        path.tangent(0.5),
        vector(-226.30788045372367, -364.5433357646594),
    );
    assert_vector_approx_eq(path.tangent(0.75), vector(0.0, 13.630819414210208));
    assert_vector_approx_eq(path.tangent(1.0), vector(0.0, 600.0));
}

#[test]
fn reverse_is_unsupported() {
    assert_eq!(Path::new().reverse(), Err(PathError::ReverseUnsupported));
    assert_eq!(sample_path().reverse(), Err(PathError::ReverseUnsupported));
}

#[test]
fn equality() {
    let path1 = sample_path();
    let mut path2 = sample_path();
    assert_eq!(path1, path2);

    path2[0] = line((601.0, 350.0), (650.0, 325.0));
    assert_ne!(path1, path2);

    path2[0] = line((600.0, 350.0), (650.0, 325.0));
    assert_eq!(path1, path2);

    path2.remove(3);
    assert_ne!(path1, path2);
}

#[test]
fn mutation_invalidates_lengths() {
    let options = LengthOptions::DEFAULT;
    let mut path: Path = vec![
        PathSegment::Move(point(0.0, 0.0)),
        line((0.0, 0.0), (100.0, 0.0)),
    ]
    .into();
    assert_eq!(path.length(&options), 100.0);
    assert_eq!(path.point(0.5), Some(point(50.0, 0.0)));

    path.push(line((100.0, 0.0), (100.0, 100.0)));
    assert_eq!(path.length(&options), 200.0);
    assert_eq!(path.point(0.5), Some(point(100.0, 0.0)));

    path.set(2, line((100.0, 0.0), (100.0, 300.0)));
    assert_eq!(path.length(&options), 400.0);

    path.insert(1, line((0.0, 0.0), (0.0, 0.0)));
    assert_eq!(path.len(), 4);
    assert_eq!(path.length(&options), 400.0);

    path.remove(3);
    assert_eq!(path.length(&options), 100.0);

    path[1] = line((0.0, 0.0), (0.0, 50.0));
    assert_eq!(path.length(&options), 150.0);

    for segment in path.iter_mut() {
        if let PathSegment::Line(line) = segment {
            line.to.y *= 2.0;
        }
    }
    assert_eq!(path.length(&options), 200.0);

    path.extend(Some(line((100.0, 0.0), (100.0, 10.0))));
    assert_eq!(path.length(&options), 210.0);

    if let Some(PathSegment::Line(line)) = path.get_mut(3) {
        line.to.y = 20.0;
    }
    assert_eq!(path.length(&options), 220.0);

    path.pop();
    assert_eq!(path.length(&options), 200.0);

    path.clear();
    assert_eq!(path.length(&options), 0.0);
}

#[test]
fn length_options_are_part_of_the_cache() {
    let mut path: Path = vec![PathSegment::Cubic(CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    })]
    .into();

    let precise = path.length(&LengthOptions::DEFAULT);
    let coarse = path.length(&LengthOptions {
        error: 1e3,
        min_depth: 0,
    });
    // A single subdivision through the midpoint (50, 75).
    assert!((coarse - 2.0 * 50.0f64.hypot(75.0)).abs() < 1e-9);
    assert!(precise > coarse);
    assert_eq!(path.length(&LengthOptions::DEFAULT), precise);
}

#[test]
fn bounding_box() {
    let path = sample_path();
    let bb = path.bounding_box().unwrap();
    for segment in &path {
        for i in 0..=100 {
            let p = segment.point(i as f64 / 100.0);
            assert!(bb.min.x <= p.x + 1e-9 && p.x <= bb.max.x + 1e-9);
            assert!(bb.min.y <= p.y + 1e-9 && p.y <= bb.max.y + 1e-9);
        }
    }

    let moves: Path = vec![
        PathSegment::Move(point(-10.0, 5.0)),
        PathSegment::Move(point(10.0, -5.0)),
    ]
    .into();
    assert_eq!(
        moves.bounding_box(),
        Some(Box2D {
            min: point(-10.0, -5.0),
            max: point(10.0, 5.0),
        })
    );
}

#[test]
fn transformed() {
    use crate::math::Transform;

    let close = |from: (f64, f64), to: (f64, f64)| {
        PathSegment::Close(LineSegment {
            from: point(from.0, from.1),
            to: point(to.0, to.1),
        })
    };

    let mut path: Path = vec![
        PathSegment::Move(point(750.0, 100.0)),
        line((750.0, 100.0), (250.0, 900.0)),
        line((250.0, 900.0), (1250.0, 900.0)),
        close((1250.0, 900.0), (750.0, 100.0)),
    ]
    .into();
    let before = path.length(&LengthOptions::DEFAULT);

    // 10% as big in x and 20% as big in y.
    let mut path = path.transformed(&Transform::scale(0.1, 0.2));
    assert_eq!(path.d(), "M 75,20 L 25,180 L 125,180 Z");
    assert_eq!(path[3], close((125.0, 180.0), (75.0, 20.0)));
    assert!(path.length(&LengthOptions::DEFAULT) < before);

    let mut path = sample_path();
    let transform = Transform::rotation(crate::math::Angle::degrees(90.0))
        .then_translate(vector(100.0, 0.0));
    let mut rotated = path.clone().transformed(&transform);

    let options = LengthOptions::DEFAULT;
    assert!((rotated.length(&options) - path.length(&options)).abs() < 1e-6);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let expected = transform.transform_point(path.point(t).unwrap());
        assert_point_approx_eq(rotated.point(t), expected, 1e-6);
    }
}
