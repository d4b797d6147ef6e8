//! Serialization of paths into SVG path data.
//!
//! The output always uses absolute coordinates. Bézier curves that are the
//! smooth continuation of the previous segment are written with the `S` and
//! `T` shorthands, and a sub-path is (re)started with `M` whenever the
//! segment does not begin where the previous one ended.

use crate::math::Point;
use crate::{Path, PathSegment};

use std::fmt;

/// Writes the parts of the path data separated by single spaces.
struct PathDataWriter<'a, 'b> {
    out: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> PathDataWriter<'a, 'b> {
    fn part(&mut self, args: fmt::Arguments) -> fmt::Result {
        if !self.first {
            self.out.write_str(" ")?;
        }
        self.first = false;
        self.out.write_fmt(args)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let end = match self.last() {
            Some(segment) => segment.to(),
            None => return Ok(()),
        };

        let mut writer = PathDataWriter { out, first: true };
        let mut current_position: Option<Point> = None;
        let mut previous: Option<&PathSegment> = None;

        for segment in self {
            let start = segment.from();
            let previous_is_move = previous.map_or(false, PathSegment::is_move);

            if segment.is_close() {
                writer.part(format_args!("Z"))?;
            } else if segment.is_move()
                || current_position != Some(start)
                || (start == end && !previous_is_move)
            {
                writer.part(format_args!("M {},{}", start.x, start.y))?;
            }

            match segment {
                PathSegment::Line(line) => {
                    writer.part(format_args!("L {},{}", line.to.x, line.to.y))?;
                }
                PathSegment::Cubic(curve) => {
                    if segment.is_smooth_from(previous) {
                        writer.part(format_args!(
                            "S {},{} {},{}",
                            curve.ctrl2.x, curve.ctrl2.y, curve.to.x, curve.to.y
                        ))?;
                    } else {
                        writer.part(format_args!(
                            "C {},{} {},{} {},{}",
                            curve.ctrl1.x,
                            curve.ctrl1.y,
                            curve.ctrl2.x,
                            curve.ctrl2.y,
                            curve.to.x,
                            curve.to.y
                        ))?;
                    }
                }
                PathSegment::Quadratic(curve) => {
                    if segment.is_smooth_from(previous) {
                        writer.part(format_args!("T {},{}", curve.to.x, curve.to.y))?;
                    } else {
                        writer.part(format_args!(
                            "Q {},{} {},{}",
                            curve.ctrl.x, curve.ctrl.y, curve.to.x, curve.to.y
                        ))?;
                    }
                }
                PathSegment::Arc(arc) => {
                    let radii = arc.radii();
                    let flags = arc.flags();
                    let to = arc.to();
                    writer.part(format_args!(
                        "A {},{} {} {},{} {},{}",
                        radii.x,
                        radii.y,
                        arc.x_rotation(),
                        flags.large_arc as u8,
                        flags.sweep as u8,
                        to.x,
                        to.y
                    ))?;
                }
                PathSegment::Move(..) | PathSegment::Close(..) => {}
            }

            current_position = Some(segment.to());
            previous = Some(segment);
        }

        Ok(())
    }
}

#[cfg(test)]
use crate::geom::{
    ArcFlags, ArcSegment, CubicBezierSegment, LineSegment, QuadraticBezierSegment, SvgArc,
};
#[cfg(test)]
use crate::math::{point, vector};

#[cfg(test)]
fn line(from: Point, to: Point) -> PathSegment {
    PathSegment::Line(LineSegment { from, to })
}

#[test]
fn empty() {
    assert_eq!(Path::new().to_string(), "");
}

#[test]
fn lines_and_close() {
    let a = point(100.0, 100.0);
    let b = point(300.0, 100.0);
    let c = point(200.0, 300.0);
    let path: Path = vec![
        PathSegment::Move(a),
        line(a, b),
        line(b, c),
        PathSegment::Close(LineSegment { from: c, to: a }),
    ]
    .into();

    assert_eq!(path.d(), "M 100,100 L 300,100 L 200,300 Z");
}

#[test]
fn discontinuities_start_sub_paths() {
    let path: Path = vec![
        line(point(0.0, 0.0), point(10.0, 0.0)),
        line(point(20.0, 0.0), point(30.0, 0.5)),
    ]
    .into();

    assert_eq!(path.d(), "M 0,0 L 10,0 M 20,0 L 30,0.5");
}

#[test]
fn returning_to_the_end_point_restarts() {
    // The second line starts where the path ends, and doesn't follow a move.
    let path: Path = vec![
        PathSegment::Move(point(0.0, 0.0)),
        line(point(0.0, 0.0), point(10.0, 10.0)),
        line(point(10.0, 10.0), point(10.0, 10.0)),
    ]
    .into();

    assert_eq!(path.d(), "M 0,0 L 10,10 M 10,10 L 10,10");
}

#[test]
fn smooth_curves() {
    let c1 = CubicBezierSegment {
        from: point(100.0, 200.0),
        ctrl1: point(100.0, 100.0),
        ctrl2: point(250.0, 100.0),
        to: point(250.0, 200.0),
    };
    let c2 = CubicBezierSegment {
        from: point(250.0, 200.0),
        ctrl1: point(250.0, 300.0),
        ctrl2: point(400.0, 300.0),
        to: point(400.0, 200.0),
    };
    let path: Path = vec![
        PathSegment::Move(point(100.0, 200.0)),
        PathSegment::Cubic(c1),
        PathSegment::Cubic(c2),
    ]
    .into();
    assert_eq!(path.d(), "M 100,200 C 100,100 250,100 250,200 S 400,300 400,200");

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
    let path: Path = vec![
        PathSegment::Move(point(200.0, 300.0)),
        PathSegment::Quadratic(q1),
        PathSegment::Quadratic(q2),
    ]
    .into();
    assert_eq!(path.d(), "M 200,300 Q 400,50 600,300 T 1000,300");
}

#[test]
fn arcs() {
    let path: Path = vec![
        PathSegment::Move(point(300.0, 200.0)),
        line(point(300.0, 200.0), point(150.0, 200.0)),
        PathSegment::Arc(ArcSegment::new(SvgArc {
            from: point(150.0, 200.0),
            to: point(300.0, 50.0),
            radii: vector(150.0, 150.0),
            x_rotation: -30.5,
            flags: ArcFlags {
                large_arc: true,
                sweep: false,
            },
        })),
        PathSegment::Close(LineSegment {
            from: point(300.0, 50.0),
            to: point(300.0, 200.0),
        }),
    ]
    .into();

    assert_eq!(
        path.to_string(),
        "M 300,200 L 150,200 A 150,150 -30.5 1,0 300,50 Z"
    );
}
