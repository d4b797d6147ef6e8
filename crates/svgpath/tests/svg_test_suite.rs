//! Path data from the paths-data-* files of the W3C SVG 1.1 test suite.

use svgpath::geom::{ArcFlags, ArcSegment, CubicBezierSegment, LineSegment, SvgArc};
use svgpath::math::{point, vector, Point};
use svgpath::{parse, Path, PathSegment};

fn line(from: Point, to: Point) -> PathSegment {
    PathSegment::Line(LineSegment { from, to })
}

fn close(from: Point, to: Point) -> PathSegment {
    PathSegment::Close(LineSegment { from, to })
}

fn same(a: &str, b: &str) {
    assert_eq!(parse(a).unwrap(), parse(b).unwrap(), "{:?} vs {:?}", a, b);
}

#[test]
fn paths_data_01() {
    let path = parse("M 100 100 L 300 100 L 200 300 z").unwrap();

    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(100.0, 100.0)),
            line(point(100.0, 100.0), point(300.0, 100.0)),
            line(point(300.0, 100.0), point(200.0, 300.0)),
            close(point(200.0, 300.0), point(100.0, 100.0)),
        ]
    );
}

#[test]
fn paths_data_02() {
    let path = parse("M600,800 C625,700 725,700 750,800 S875,900 900,800").unwrap();

    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(600.0, 800.0)),
            PathSegment::Cubic(CubicBezierSegment {
                from: point(600.0, 800.0),
                ctrl1: point(625.0, 700.0),
                ctrl2: point(725.0, 700.0),
                to: point(750.0, 800.0),
            }),
            PathSegment::Cubic(CubicBezierSegment {
                from: point(750.0, 800.0),
                ctrl1: point(775.0, 900.0),
                ctrl2: point(875.0, 900.0),
                to: point(900.0, 800.0),
            }),
        ]
    );
}

#[test]
fn paths_data_03() {
    let arc = |from: Point, ry: f64, to: Point| {
        PathSegment::Arc(ArcSegment::new(SvgArc {
            from,
            to,
            radii: vector(25.0, ry),
            x_rotation: -30.0,
            flags: ArcFlags {
                large_arc: false,
                sweep: true,
            },
        }))
    };

    let path = parse(
        "M600,350 l 50,-25
            a25,25 -30 0,1 50,-25 l 50,-25
            a25,50 -30 0,1 50,-25 l 50,-25
            a25,75 -30 0,1 50,-25 l 50,-25
            a25,100 -30 0,1 50,-25 l 50,-25",
    )
    .unwrap();

    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(600.0, 350.0)),
            line(point(600.0, 350.0), point(650.0, 325.0)),
            arc(point(650.0, 325.0), 25.0, point(700.0, 300.0)),
            line(point(700.0, 300.0), point(750.0, 275.0)),
            arc(point(750.0, 275.0), 50.0, point(800.0, 250.0)),
            line(point(800.0, 250.0), point(850.0, 225.0)),
            arc(point(850.0, 225.0), 75.0, point(900.0, 200.0)),
            line(point(900.0, 200.0), point(950.0, 175.0)),
            arc(point(950.0, 175.0), 100.0, point(1000.0, 150.0)),
            line(point(1000.0, 150.0), point(1050.0, 125.0)),
        ]
    );
}

#[test]
fn paths_data_12() {
    // A poly-bézier, and an initial smooth curve without anything to reflect.
    same(
        "M  100 100    C  100 20   200 20   200 100   S   300 180   300 100",
        "M 100,100 C 100,20 200,20 200,100 C 200,180 300,180 300,100",
    );
    same(
        "M  100 250    S  200 200   200 250     300 300   300 250",
        "M 100,250 C 100,250 200,200 200,250 C 200,300 300,300 300,250",
    );
}

#[test]
fn paths_data_13() {
    same(
        "   M  240.00000  156.00000    V  180.00000         200.00000 260.00000 300.00000   ",
        "M 240,156 L 240,180 L 240,200 L 240,260 L 240,300",
    );
}

#[test]
fn paths_data_14() {
    let path = parse(
        "   m   62.00000  56.00000    51.96152   90.00000   -103.92304         0.00000    51.96152  \
         -90.00000   z    m    0.00000   15.00000   38.97114   67.50000   -77.91228         0.00000   \
         38.97114  -67.50000   z  ",
    )
    .unwrap();

    // Relative coordinates accumulate rounding errors, the close-path still
    // goes back to the exact start of the sub-path.
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(62.0, 56.0)),
            line(point(62.0, 56.0), point(113.96152000000001, 146.0)),
            line(point(113.96152000000001, 146.0), point(10.038480000000007, 146.0)),
            line(point(10.038480000000007, 146.0), point(62.00000000000001, 56.0)),
            close(point(62.00000000000001, 56.0), point(62.0, 56.0)),
            PathSegment::Move(point(62.0, 71.0)),
            line(point(62.0, 71.0), point(100.97113999999999, 138.5)),
            line(point(100.97113999999999, 138.5), point(23.058859999999996, 138.5)),
            line(point(23.058859999999996, 138.5), point(62.029999999999994, 71.0)),
            close(point(62.029999999999994, 71.0), point(62.0, 71.0)),
        ]
    );

    let path = parse(
        "M  177.00000   56.00000    228.96152         146.00000   125.03848  146.00000    177.00000   \
         56.00000   Z    M  177.00000  71.00000   215.97114         138.50000   138.02886  138.50000   \
         177.00000  71.00000   Z  ",
    )
    .unwrap();

    assert_eq!(path.len(), 10);
    assert_eq!(path[4], close(point(177.0, 56.0), point(177.0, 56.0)));
    assert_eq!(path[5], PathSegment::Move(point(177.0, 71.0)));
}

#[test]
fn paths_data_15() {
    same("M100,120 L160,220 L40,220 z", "M100,120 160,220 40,220 z");
    same("M350,120 L410,220 L290,220 z", "m350,120 60,100 -120,0 z");
}

#[test]
fn paths_data_17() {
    same(
        "M 50 50 L 50 150 L 150 150 L 150 50 z",
        "M 50 50 L 50 150 L 150 150 L 150 50 Z",
    );
}

#[test]
fn paths_data_18() {
    same("M 20 40 H 40", "M 20 40\n                 H 40");
    same(
        "M 20 60 H 40",
        "
                  M
                  20
                  60
                  H
                  40
                  ",
    );
    same("M 20 80 H40", "M       20,80          H    40");
    same("M 20 100 H 40#90", "M 20 100 H 40");
    same("M 20 120 H 40.5 0.6", "M 20 120 H 40.5.6");
    same("M 20 140 h 10 -20", "M 20 140 h 10-20");
    same("M 20 160 H 40", "M 20 160 H 40#90");
}

#[test]
fn paths_data_19() {
    same("M20 20 H40 H60", "M20 20 H40 60");
    same("M20 40 h20 h20", "M20 40 h20 20");
    same("M120 20 V40 V60", "M120 20 V40 60");
    same("M140 20 v20 v20", "M140 20 v20 20");
    same("M220 20 L 240 20 L260 20", "M220 20 L 240 20 260 20 ");
    same("M220 40 l 20 0 l 20 0", "M220 40 l 20 0 20 0");
    same(
        "M50 150 C50 50 200 50 200 150 C200 50 350 50 350 150",
        "M50 150 C50 50 200 50 200 150 200 50 350 50 350 150",
    );
    same(
        "M50, 200 c0,-100 150,-100 150,0 c0,-100 150,-100 150,0",
        "M50, 200 c0,-100 150,-100 150,0 0,-100 150,-100 150,0",
    );
    same(
        "M50 250 S125 200 200 250 S275, 200 350 250",
        "M50 250 S125 200 200 250 275, 200 350 250",
    );
    same(
        "M50 275 s75 -50 150 0 s75, -50 150 0",
        "M50 275 s75 -50 150 0 75, -50 150 0",
    );
    same(
        "M50 300 Q 125 275 200 300 Q 275 325 350 300",
        "M50 300 Q 125 275 200 300 275 325 350 300",
    );
    same(
        "M50 325 q 75 -25 150 0 q 75 25 150 0",
        "M50 325 q 75 -25 150 0 75 25 150 0",
    );
    same("M425 25 T 425 75 T 425 125", "M425 25 T 425 75 425 125");
    same("M450 25 t 0 50 t 0 50", "M450 25 t 0 50 0 50");
    same(
        "M400,200 A25 25 0 0 0 425 150 A25 25 0 0 0 400 200",
        "M400,200 A25 25 0 0 0 425 150 25 25 0 0 0 400 200",
    );
    same(
        "M400,300 a25 25 0 0 0 25 -50 a25 25 0 0 0 -25 50",
        "M400,300 a25 25 0 0 0 25 -50 25 25 0 0 0 -25 50",
    );
}

#[test]
fn paths_data_20() {
    same(
        "M120,120 h25 a25,25 0 1,0 -25,25 z",
        "M120,120 h25 a25,25 0 10 -25,25z",
    );
    same(
        "M200,120 h-25 a25,25 0 1,1 25,25 z",
        "M200,120 h-25 a25,25 0 1125,25 z",
    );
    same(
        "M120,200 h25 a25,25 0 1,1 -25,-25 z",
        "M120,200 h25 a25,25 0 1 1-25,-25 z",
    );

    for src in &[
        "M280,120 h25 a25,25 0 6 0 -25,25 z",
        "M360,120 h-25 a25,25 0 1 -1 25,25 z",
        "M200,200 h-25 a25,2501 025,-25 z",
        "M280,200 h25 a25 25 0 1 7 -25 -25 z",
        "M360,200 h-25 a25,25 0 -1 0 25,-25 z",
    ] {
        assert!(parse(src).is_err(), "{:?}", src);
    }
}

#[test]
fn numbers() {
    // e or E, an optional plus sign, and at least +/-3.4e38 must be supported.
    let path = parse("M-3.4e38 3.4E+38L-3.4E-38,3.4e-38").unwrap();
    let expected: Path = vec![
        PathSegment::Move(point(-3.4e38, 3.4e38)),
        line(point(-3.4e38, 3.4e38), point(-3.4e-38, 3.4e-38)),
    ]
    .into();

    assert_eq!(path, expected);
}
