use svgpath::geom::LengthOptions;
use svgpath::math::point;
use svgpath::{parse, ParseError};

const PATHS: &[&str] = &[
    "M 100 100 L 300 100 L 200 300 z",
    "M100,200 C100,100 250,100 250,200 S400,300 400,200",
    "M200,300 Q400,50 600,300 T1000,300",
    "M300,200 h-150 a150,150 0 1,0 150,-150 z",
    "M275,175 v-150 a150,150 0 0,0 -150,150 L 275,175 z",
    "M600,350 l 50,-25 a25,25 -30 0,1 50,-25 l 50,-25 a25,50 -30 0,1 50,-25 l 50,-25",
    "m 62 56 51.96152 90 -103.92304 0 51.96152 -90 z m 0 15 38.97114 67.5 -77.91228 0 \
     38.97114 -67.5 z",
    "M 0 0 L 50 20 m 50 80 L 300 100 L 200 300 z",
    "M 5 1 v 7.344 A 3.574 3.574 0 003.5 8 3.515 3.515 0 000 11.5 C 0 13.421 1.579 15 3.5 15 \
     A 3.517 3.517 0 007 11.531 v -7.53 h 6 v 4.343 A 3.574 3.574 0 0011.5 8 3.515 3.515 0 008 \
     11.5 c 0 1.921 1.579 3.5 3.5 3.5 1.9 0 3.465 -1.546 3.5 -3.437 V 1 z",
    "m 1672.2372,-54.8161 a 14.5445,14.5445 0 0 0 -11.3152,23.6652 \
     l 27.2573,27.2572 27.2572,-27.2572 a 14.5445,14.5445 0 0 0 -11.3012,-23.634 \
     a 14.5445,14.5445 0 0 0 -11.414,5.4625 l -4.542,4.5420 l -4.5437,-4.5420 \
     a 14.5445,14.5445 0 0 0 -11.3984,-5.4937 z",
    "M 0 0 L 10 0 Z L 0 0",
    "L 10 0 Z",
    "M 0 0 L 10 0 Z L 20 0 L 20 20 Z",
    "M10.236,100.184",
    "",
];

#[test]
fn normalization_is_idempotent() {
    for src in PATHS {
        let once = parse(src).unwrap().d();
        let twice = parse(&once).unwrap().d();
        assert_eq!(once, twice, "{:?}", src);
    }
}

#[test]
fn normalization_preserves_geometry() {
    for src in PATHS {
        let mut original = parse(src).unwrap();
        let mut normalized = parse(&original.d()).unwrap();

        let a = original.length(&LengthOptions::DEFAULT);
        let b = normalized.length(&LengthOptions::DEFAULT);
        assert!((a - b).abs() < 1e-7, "{:?}: {} != {}", src, a, b);

        for i in 0..=10 {
            let t = i as f64 / 10.0;
            match (original.point(t), normalized.point(t)) {
                (Some(p1), Some(p2)) => {
                    assert!((p1 - p2).length() < 1e-7, "{:?} at {}", src, t)
                }
                (None, None) => {}
                other => panic!("{:?} at {}: {:?}", src, t, other),
            }
        }
    }
}

#[test]
fn normalized_output() {
    assert_eq!(parse("M10.236,100.184").unwrap().d(), "M 10.236,100.184");
    assert_eq!(parse("M 0. .1").unwrap().d(), "M 0,0.1");
    assert_eq!(parse("M 0..1").unwrap().d(), "M 0,0.1");
    assert_eq!(
        parse("M 100 100 L 300 100 L 200 300 z").unwrap().d(),
        "M 100,100 L 300,100 L 200,300 Z",
    );
    assert_eq!(
        parse("M200,300 Q400,50 600,300 T1000,300").unwrap().d(),
        "M 200,300 Q 400,50 600,300 T 1000,300",
    );
    assert_eq!(
        parse("M300,200 h-150 a150,150 0 1,0 150,-150 z").unwrap().d(),
        "M 300,200 L 150,200 A 150,150 0 1,0 300,50 Z",
    );
    // A path that draws outside of any sub-path.
    assert_eq!(parse("L 10 0 Z").unwrap().d(), "M 0,0 L 10,0 Z");
}

#[test]
fn quarter_points_of_a_circle() {
    let mut path = parse("M 0,0 A 100,100 0 0,0 200,0 A 100,100 0 0,0 0,0").unwrap();

    let expected = [
        (0.0, point(0.0, 0.0)),
        (0.25, point(100.0, 100.0)),
        (0.5, point(200.0, 0.0)),
        (0.75, point(100.0, -100.0)),
        (1.0, point(0.0, 0.0)),
    ];

    for &(t, p) in &expected {
        let actual = path.point(t).unwrap();
        assert!((actual - p).length() < 1e-7, "{}: {:?}", t, actual);
    }
}

#[test]
fn errors() {
    assert!(matches!(
        parse("M 100 100 L 200 200 Z 100 200"),
        Err(ParseError::MissingCommand { .. })
    ));
    assert!(matches!(parse("10 10"), Err(ParseError::MissingCommand { .. })));
    assert!(matches!(
        parse("M 100 100 L 200"),
        Err(ParseError::MissingArgument { command: 'L', .. })
    ));
    assert!(matches!(
        parse("M 0 0 a 25,25 0 1 -1 25,25"),
        Err(ParseError::Flag { src: '-', .. })
    ));

    let message = parse("M 0 0\nL 1").unwrap_err().to_string();
    assert_eq!(message, "Line 1 Column 2: Missing argument for command 'L'.");
}

#[test]
fn transforms() {
    use svgpath::geom::LineSegment;
    use svgpath::math::Transform;
    use svgpath::PathSegment;

    let scale = Transform::scale(0.1, 0.2);

    let line = LineSegment {
        from: point(0.0, 0.0),
        to: point(100.0, 100.0),
    };
    assert_eq!(
        PathSegment::Line(line).transformed(&scale),
        PathSegment::Line(LineSegment {
            from: point(0.0, 0.0),
            to: point(10.0, 20.0),
        })
    );

    let path = parse("M 750,100 L 250,900 L 1250,900 z").unwrap();
    assert_eq!(path.transformed(&scale).d(), "M 75,20 L 25,180 L 125,180 Z");

    // Arcs stay arcs.
    let path = parse("M 0,0 A 100,100 0 0,0 200,0").unwrap();
    let mut stretched = path.transformed(&Transform::scale(0.5, 2.0));
    let p = stretched.point(0.5).unwrap();
    assert!((p - point(50.0, 200.0)).length() < 1e-7, "{:?}", p);
}
