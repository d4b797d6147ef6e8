use crate::error::ParseError;
use crate::path::geom::{
    ArcFlags, ArcSegment, CubicBezierSegment, LineSegment, QuadraticBezierSegment, SvgArc,
};
use crate::path::math::{point, vector, Point};
use crate::path::{Path, PathSegment};
use crate::tokenizer::{Command, Token, Tokenizer};

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// The current position before the first command.
    ///
    /// A leading relative move-to is relative to this point.
    pub start: Point,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions {
        start: Point::new(0.0, 0.0),
    };

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builds a [`Path`] out of SVG path data.
///
/// Numbers that follow a command's arguments repeat the command, except after
/// a move-to where they are read as line-to arguments, and after a close-path
/// where they are an error.
///
/// ```
/// use svgpath_parser::{ParserOptions, PathParser, Tokenizer};
///
/// let mut parser = PathParser::new();
/// let path = parser
///     .parse(&ParserOptions::DEFAULT, &mut Tokenizer::new("M 0 0 L 10 0 10 10 z".chars()))
///     .unwrap();
///
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct PathParser {
    current_position: Point,
    subpath_start: Option<Point>,
    // A number read while looking for the next command, that is the first
    // argument of an implicitly repeated command.
    pending_number: Option<f64>,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter>(
        &mut self,
        options: &ParserOptions,
        src: &mut Tokenizer<Iter>,
    ) -> Result<Path, ParseError>
    where
        Iter: Iterator<Item = char> + Clone,
    {
        let mut path = Path::new();

        match self.parse_path(options, src, &mut path) {
            Ok(()) => {
                log::debug!("Parsed a path with {} segments", path.len());
                Ok(path)
            }
            Err(e) => {
                log::debug!("Failed to parse path data: {}", e);
                Err(e)
            }
        }
    }

    fn parse_path(
        &mut self,
        options: &ParserOptions,
        src: &mut Tokenizer<impl Iterator<Item = char> + Clone>,
        path: &mut Path,
    ) -> Result<(), ParseError> {
        self.current_position = options.start;
        self.subpath_start = None;
        self.pending_number = None;

        // The command numbers are applied to, and whether it is absolute.
        let mut state: Option<(Command, bool)> = None;

        while let Some(token) = src.next() {
            // The command of the previous iteration, which smooth curves look at.
            let last_command = state.map(|(command, _)| command);

            let (command, absolute) = match token {
                Token::Command { command, absolute } => (command, absolute),
                Token::Number(value) => match state {
                    Some(implicit) => {
                        self.pending_number = Some(value);
                        implicit
                    }
                    None => {
                        let (line, column) = src.token_position();
                        return Err(ParseError::MissingCommand { line, column });
                    }
                },
            };

            state = Some((command, absolute));

            let letter = command.letter(absolute);
            let from = self.current_position;

            // Drawing outside of a sub-path opens one at the current position.
            if self.subpath_start.is_none()
                && !matches!(command, Command::MoveTo | Command::ClosePath)
            {
                self.subpath_start = Some(from);
            }

            let segment = match command {
                Command::MoveTo => {
                    let to = self.parse_endpoint(absolute, letter, src)?;
                    self.subpath_start = Some(to);
                    state = Some((Command::LineTo, absolute));

                    PathSegment::Move(to)
                }
                Command::ClosePath => {
                    let to = self.subpath_start.take().unwrap_or(from);
                    self.current_position = to;
                    state = None;

                    PathSegment::Close(LineSegment { from, to })
                }
                Command::LineTo => {
                    let to = self.parse_endpoint(absolute, letter, src)?;

                    PathSegment::Line(LineSegment { from, to })
                }
                Command::HorizontalLineTo => {
                    let mut x = self.parse_number(letter, src)?;
                    if !absolute {
                        x += from.x;
                    }
                    let to = point(x, from.y);
                    self.current_position = to;

                    PathSegment::Line(LineSegment { from, to })
                }
                Command::VerticalLineTo => {
                    let mut y = self.parse_number(letter, src)?;
                    if !absolute {
                        y += from.y;
                    }
                    let to = point(from.x, y);
                    self.current_position = to;

                    PathSegment::Line(LineSegment { from, to })
                }
                Command::CubicTo => {
                    let ctrl1 = self.parse_point(absolute, letter, src)?;
                    let ctrl2 = self.parse_point(absolute, letter, src)?;
                    let to = self.parse_endpoint(absolute, letter, src)?;

                    PathSegment::Cubic(CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    })
                }
                Command::SmoothCubicTo => {
                    let prev_ctrl = match (last_command, path.last()) {
                        (
                            Some(Command::CubicTo | Command::SmoothCubicTo),
                            Some(PathSegment::Cubic(prev)),
                        ) => Some(prev.ctrl2),
                        _ => None,
                    };
                    let ctrl1 = self.get_smooth_ctrl(prev_ctrl);
                    let ctrl2 = self.parse_point(absolute, letter, src)?;
                    let to = self.parse_endpoint(absolute, letter, src)?;

                    PathSegment::Cubic(CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    })
                }
                Command::QuadraticTo => {
                    let ctrl = self.parse_point(absolute, letter, src)?;
                    let to = self.parse_endpoint(absolute, letter, src)?;

                    PathSegment::Quadratic(QuadraticBezierSegment { from, ctrl, to })
                }
                Command::SmoothQuadraticTo => {
                    let prev_ctrl = match (last_command, path.last()) {
                        (
                            Some(Command::QuadraticTo | Command::SmoothQuadraticTo),
                            Some(PathSegment::Quadratic(prev)),
                        ) => Some(prev.ctrl),
                        _ => None,
                    };
                    let ctrl = self.get_smooth_ctrl(prev_ctrl);
                    let to = self.parse_endpoint(absolute, letter, src)?;

                    PathSegment::Quadratic(QuadraticBezierSegment { from, ctrl, to })
                }
                Command::ArcTo => {
                    let rx = self.parse_number(letter, src)?;
                    let ry = self.parse_number(letter, src)?;
                    let x_rotation = self.parse_number(letter, src)?;
                    let large_arc = self.parse_flag(letter, src)?;
                    let sweep = self.parse_flag(letter, src)?;
                    let to = self.parse_endpoint(absolute, letter, src)?;

                    PathSegment::Arc(ArcSegment::new(SvgArc {
                        from,
                        to,
                        radii: vector(rx, ry),
                        x_rotation,
                        flags: ArcFlags { large_arc, sweep },
                    }))
                }
            };

            path.push(segment);
        }

        Ok(())
    }

    fn get_smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        if let Some(prev_ctrl) = prev_ctrl {
            self.current_position + (self.current_position - prev_ctrl)
        } else {
            self.current_position
        }
    }

    fn parse_endpoint(
        &mut self,
        absolute: bool,
        command: char,
        src: &mut Tokenizer<impl Iterator<Item = char> + Clone>,
    ) -> Result<Point, ParseError> {
        let position = self.parse_point(absolute, command, src)?;
        self.current_position = position;

        Ok(position)
    }

    fn parse_point(
        &mut self,
        absolute: bool,
        command: char,
        src: &mut Tokenizer<impl Iterator<Item = char> + Clone>,
    ) -> Result<Point, ParseError> {
        let mut x = self.parse_number(command, src)?;
        let mut y = self.parse_number(command, src)?;

        if !absolute {
            x += self.current_position.x;
            y += self.current_position.y;
        }

        Ok(point(x, y))
    }

    fn parse_number(
        &mut self,
        command: char,
        src: &mut Tokenizer<impl Iterator<Item = char> + Clone>,
    ) -> Result<f64, ParseError> {
        if let Some(value) = self.pending_number.take() {
            return Ok(value);
        }

        let (line, column) = match src.next() {
            Some(Token::Number(value)) => {
                return Ok(value);
            }
            Some(Token::Command { .. }) => src.token_position(),
            None => src.cursor_position(),
        };

        Err(ParseError::MissingArgument {
            command,
            line,
            column,
        })
    }

    fn parse_flag(
        &mut self,
        command: char,
        src: &mut Tokenizer<impl Iterator<Item = char> + Clone>,
    ) -> Result<bool, ParseError> {
        match src.next_flag() {
            Some(flag) => flag,
            None => {
                let (line, column) = src.cursor_position();
                Err(ParseError::MissingArgument {
                    command,
                    line,
                    column,
                })
            }
        }
    }
}

#[cfg(test)]
use crate::path::geom::LengthOptions;

#[cfg(test)]
fn parse(src: &str) -> Result<Path, ParseError> {
    PathParser::new().parse(&ParserOptions::DEFAULT, &mut Tokenizer::new(src.chars()))
}

#[cfg(test)]
fn line(from: Point, to: Point) -> PathSegment {
    PathSegment::Line(LineSegment { from, to })
}

#[cfg(test)]
fn close(from: Point, to: Point) -> PathSegment {
    PathSegment::Close(LineSegment { from, to })
}

#[cfg(test)]
fn cubic(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> PathSegment {
    PathSegment::Cubic(CubicBezierSegment {
        from,
        ctrl1,
        ctrl2,
        to,
    })
}

#[cfg(test)]
fn quadratic(from: Point, ctrl: Point, to: Point) -> PathSegment {
    PathSegment::Quadratic(QuadraticBezierSegment { from, ctrl, to })
}

#[cfg(test)]
fn arc(
    from: Point,
    radii: (f64, f64),
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: Point,
) -> PathSegment {
    PathSegment::Arc(ArcSegment::new(SvgArc {
        from,
        to,
        radii: vector(radii.0, radii.1),
        x_rotation,
        flags: ArcFlags { large_arc, sweep },
    }))
}

#[test]
fn empty() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("  \n ").unwrap().is_empty());
}

#[test]
fn simple_square() {
    let path = parse("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();

    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(0.0, 0.0)),
            line(point(0.0, 0.0), point(1.0, 0.0)),
            line(point(1.0, 0.0), point(1.0, 1.0)),
            line(point(1.0, 1.0), point(0.0, 1.0)),
            close(point(0.0, 1.0), point(0.0, 0.0)),
        ]
    );
}

#[test]
fn implicit_line_to() {
    assert_eq!(
        parse("M 100 200 L 200 100 L -100 -200").unwrap(),
        parse("M 100 200 L 200 100 -100 -200").unwrap(),
    );
    assert_eq!(
        parse("M100,120 L160,220 L40,220 z").unwrap(),
        parse("M100,120 160,220 40,220 z").unwrap(),
    );
    // Relative move-to followed by relative line-tos.
    assert_eq!(
        parse("m350,120 60,100 -120,0 z").unwrap().segments(),
        &[
            PathSegment::Move(point(350.0, 120.0)),
            line(point(350.0, 120.0), point(410.0, 220.0)),
            line(point(410.0, 220.0), point(290.0, 220.0)),
            close(point(290.0, 220.0), point(350.0, 120.0)),
        ]
    );
}

#[test]
fn smooth_cubic() {
    let path = parse("M100,200 C100,100 250,100 250,200 S400,300 400,200").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(100.0, 200.0)),
            cubic(
                point(100.0, 200.0),
                point(100.0, 100.0),
                point(250.0, 100.0),
                point(250.0, 200.0)
            ),
            cubic(
                point(250.0, 200.0),
                point(250.0, 300.0),
                point(400.0, 300.0),
                point(400.0, 200.0)
            ),
        ]
    );

    // Repeated smooth curves reflect the previous one, the first one doesn't
    // have anything to reflect.
    let path = parse("M  100 250    S  200 200   200 250     300 300   300 250").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(100.0, 250.0)),
            cubic(
                point(100.0, 250.0),
                point(100.0, 250.0),
                point(200.0, 200.0),
                point(200.0, 250.0)
            ),
            cubic(
                point(200.0, 250.0),
                point(200.0, 300.0),
                point(300.0, 300.0),
                point(300.0, 250.0)
            ),
        ]
    );

    let path = parse("M100,200 s 150,-100 150,0").unwrap();
    assert_eq!(
        path[1],
        cubic(
            point(100.0, 200.0),
            point(100.0, 200.0),
            point(250.0, 100.0),
            point(250.0, 200.0)
        ),
    );
}

#[test]
fn smooth_quadratic() {
    let path = parse("M200,300 Q400,50 600,300 T1000,300").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(200.0, 300.0)),
            quadratic(point(200.0, 300.0), point(400.0, 50.0), point(600.0, 300.0)),
            quadratic(point(600.0, 300.0), point(800.0, 550.0), point(1000.0, 300.0)),
        ]
    );

    let path = parse("M100,200 t 150,0").unwrap();
    assert_eq!(
        path[1],
        quadratic(point(100.0, 200.0), point(100.0, 200.0), point(250.0, 200.0)),
    );

    // A smooth quadratic after a cubic has nothing to reflect.
    let path = parse("M0,0 C10,10 20,10 30,0 T60,0").unwrap();
    assert_eq!(
        path[2],
        quadratic(point(30.0, 0.0), point(30.0, 0.0), point(60.0, 0.0)),
    );
}

#[test]
fn arcs() {
    let path = parse("M300,200 h-150 a150,150 0 1,0 150,-150 z").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(300.0, 200.0)),
            line(point(300.0, 200.0), point(150.0, 200.0)),
            arc(
                point(150.0, 200.0),
                (150.0, 150.0),
                0.0,
                true,
                false,
                point(300.0, 50.0)
            ),
            close(point(300.0, 50.0), point(300.0, 200.0)),
        ]
    );

    let path = parse("M600,350 l 50,-25 a25,25 -30 0,1 50,-25 l 50,-25").unwrap();
    assert_eq!(
        path[2],
        arc(
            point(650.0, 325.0),
            (25.0, 25.0),
            -30.0,
            false,
            true,
            point(700.0, 300.0)
        ),
    );
}

#[test]
fn arc_flags_without_separators() {
    assert_eq!(
        parse("M120,120 h25 a25,25 0 1,0 -25,25 z").unwrap(),
        parse("M120,120 h25 a25,25 0 10 -25,25z").unwrap(),
    );
    assert_eq!(
        parse("M200,120 h-25 a25,25 0 1,1 25,25 z").unwrap(),
        parse("M200,120 h-25 a25,25 0 1125,25 z").unwrap(),
    );
    assert_eq!(
        parse("M120,200 h25 a25,25 0 1,1 -25,-25 z").unwrap(),
        parse("M120,200 h25 a25,25 0 1 1-25,-25 z").unwrap(),
    );

    let path = parse(
        "M 5 1 v 7.344 A 3.574 3.574 0 003.5 8 3.515 3.515 0 000 11.5 C 0 13.421 1.579 15 3.5 15 \
         A 3.517 3.517 0 007 11.531 v -7.53 h 6 v 4.343 A 3.574 3.574 0 0011.5 8 3.515 3.515 0 008 11.5 \
         c 0 1.921 1.579 3.5 3.5 3.5 1.9 0 3.465 -1.546 3.5 -3.437 V 1 z",
    )
    .unwrap();

    assert_eq!(path.len(), 15);
    assert_eq!(path[13].to().y, 1.0);
    assert_eq!(
        path[2],
        arc(
            point(5.0, 1.0 + 7.344),
            (3.574, 3.574),
            0.0,
            false,
            false,
            point(3.5, 8.0)
        ),
    );
}

#[test]
fn invalid_flags() {
    let is_flag_error = |src: &str| matches!(parse(src), Err(ParseError::Flag { .. }));

    assert!(is_flag_error("M280,120 h25 a25,25 0 6 0 -25,25 z"));
    assert!(is_flag_error("M360,120 h-25 a25,25 0 1 -1 25,25 z"));
    assert!(is_flag_error("M200,200 h-25 a25,2501 025,-25 z"));
    assert!(is_flag_error("M280,200 h25 a25 25 0 1 7 -25 -25 z"));
    assert!(is_flag_error("M360,200 h-25 a25,25 0 -1 0 25,-25 z"));

    assert_eq!(
        parse("M 0 0 A 1 1 0 2 0 1 1"),
        Err(ParseError::Flag {
            src: '2',
            line: 0,
            column: 14
        })
    );
}

#[test]
fn horizontal_and_vertical() {
    let path =
        parse("   M  240.00000  56.00000    H  270.00000         300.00000 320.00000 400.00000   ")
            .unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(240.0, 56.0)),
            line(point(240.0, 56.0), point(270.0, 56.0)),
            line(point(270.0, 56.0), point(300.0, 56.0)),
            line(point(300.0, 56.0), point(320.0, 56.0)),
            line(point(320.0, 56.0), point(400.0, 56.0)),
        ]
    );

    assert_eq!(parse("M140 20 v20 v20").unwrap(), parse("M140 20 v20 20").unwrap());
    assert_eq!(parse("M20 40 h20 h20").unwrap(), parse("M20 40 h20 20").unwrap());
}

#[test]
fn sub_paths() {
    // After a close-path, a relative move-to starts from the start of the
    // sub-path that was closed.
    let path = parse("m 10 10 l 10 0 0 10 z m 0 15 l 5 5 z").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(10.0, 10.0)),
            line(point(10.0, 10.0), point(20.0, 10.0)),
            line(point(20.0, 10.0), point(20.0, 20.0)),
            close(point(20.0, 20.0), point(10.0, 10.0)),
            PathSegment::Move(point(10.0, 25.0)),
            line(point(10.0, 25.0), point(15.0, 30.0)),
            close(point(15.0, 30.0), point(10.0, 25.0)),
        ]
    );

    let path = parse("M 0 0 L 50 20 m 50 80 L 300 100 L 200 300 z").unwrap();
    assert_eq!(path[2], PathSegment::Move(point(100.0, 100.0)));
    assert_eq!(path[5], close(point(200.0, 300.0), point(100.0, 100.0)));
}

#[test]
fn close_without_move() {
    // The first drawing command opens a sub-path where it starts.
    let path = parse("L 10 0 Z Z").unwrap();
    assert_eq!(
        path.segments(),
        &[
            line(point(0.0, 0.0), point(10.0, 0.0)),
            close(point(10.0, 0.0), point(0.0, 0.0)),
            close(point(0.0, 0.0), point(0.0, 0.0)),
        ]
    );

    // Same thing after a close.
    let path = parse("M0 0 L10 0 Z L 20 0 L 20 20 Z").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(0.0, 0.0)),
            line(point(0.0, 0.0), point(10.0, 0.0)),
            close(point(10.0, 0.0), point(0.0, 0.0)),
            line(point(0.0, 0.0), point(20.0, 0.0)),
            line(point(20.0, 0.0), point(20.0, 20.0)),
            close(point(20.0, 20.0), point(0.0, 0.0)),
        ]
    );

    let options = ParserOptions::DEFAULT.with_start(point(5.0, 5.0));
    let path = PathParser::new()
        .parse(&options, &mut Tokenizer::new("h 10 Z".chars()))
        .unwrap();
    assert_eq!(path[1], close(point(15.0, 5.0), point(5.0, 5.0)));
}

#[test]
fn start_position() {
    let options = ParserOptions::DEFAULT.with_start(point(5.0, 5.0));
    let path = PathParser::new()
        .parse(&options, &mut Tokenizer::new("m 1 1 h 1".chars()))
        .unwrap();

    assert_eq!(path[0], PathSegment::Move(point(6.0, 6.0)));
    assert_eq!(path[1], line(point(6.0, 6.0), point(7.0, 6.0)));

    // Absolute commands ignore it.
    let path = PathParser::new()
        .parse(&options, &mut Tokenizer::new("M 1 1".chars()))
        .unwrap();
    assert_eq!(path[0], PathSegment::Move(point(1.0, 1.0)));
}

#[test]
fn unseparated_numbers() {
    assert_eq!(
        parse("M100,200c10-5,20-10,30-20").unwrap(),
        parse("M 100 200 c 10 -5 20 -10 30 -20").unwrap(),
    );
    assert_eq!(
        parse("M 20 120 H 40.5 0.6").unwrap(),
        parse("M 20 120 H 40.5.6").unwrap(),
    );
    assert_eq!(
        parse("M 20 140 h 10 -20").unwrap(),
        parse("M 20 140 h 10-20").unwrap(),
    );
    assert_eq!(parse("M 0.6.5").unwrap()[0], PathSegment::Move(point(0.6, 0.5)));
    assert_eq!(parse("M 0. .1").unwrap()[0], PathSegment::Move(point(0.0, 0.1)));
    assert_eq!(parse("M 0..1").unwrap()[0], PathSegment::Move(point(0.0, 0.1)));
}

#[test]
fn whitespace_and_comments() {
    assert_eq!(
        parse("M 20 40 H 40").unwrap(),
        parse("M 20 40\n                 H 40").unwrap(),
    );
    assert_eq!(
        parse("M 20 80 H40").unwrap(),
        parse("M       20,80          H    40").unwrap(),
    );
    assert_eq!(
        parse("M 20 100 H 40#90").unwrap(),
        parse("M 20 100 H 40").unwrap(),
    );
}

#[test]
fn scientific_notation() {
    let path = parse("M-3.4e38 3.4E+38L-3.4E-38,3.4e-38").unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Move(point(-3.4e38, 3.4e38)),
            line(point(-3.4e38, 3.4e38), point(-3.4e-38, 3.4e-38)),
        ]
    );

    parse("M 1e-9 0").unwrap();
    parse("M -1e11 0").unwrap();
    parse("M 1.e-9 1.4e-4z").unwrap();
    parse("M0 1.6e-9L0 1.4e-4").unwrap();
}

#[test]
fn missing_command() {
    assert_eq!(
        parse("M 100 100 L 200 200 Z 100 200"),
        Err(ParseError::MissingCommand {
            line: 0,
            column: 22
        })
    );
    assert_eq!(
        parse("\n 0 0 L 1 1"),
        Err(ParseError::MissingCommand { line: 1, column: 1 })
    );
}

#[test]
fn missing_argument() {
    assert_eq!(
        parse("M 10"),
        Err(ParseError::MissingArgument {
            command: 'M',
            line: 0,
            column: 3
        })
    );
    assert_eq!(
        parse("M 0 0 c 1 1 2 2 L 3 3"),
        Err(ParseError::MissingArgument {
            command: 'c',
            line: 0,
            column: 16
        })
    );
    assert!(matches!(
        parse("M 0 0 A 1 1 0 1"),
        Err(ParseError::MissingArgument { command: 'A', .. })
    ));
}

#[test]
fn error_message() {
    let error = parse("M 0 0 Z 1").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Line 0 Column 8: Expected a command, got a number."
    );
}

#[test]
fn parsed_lengths() {
    let mut path = parse("M 0,0 A 100,100 0 0,0 200,0 A 100,100 0 0,0 0,0").unwrap();
    let length = path.length(&LengthOptions::DEFAULT);
    assert!((length - 200.0 * std::f64::consts::PI).abs() < 1e-7);
}
