//! Splitting path data into commands and numbers.
//!
//! The tokenizer is lenient the way browsers are: numbers do not need to be
//! separated when the grammar makes the boundary unambiguous (`10-20` is two
//! numbers, and so is `40.5.6`), stray signs and dots are ignored, and any
//! other unexpected character starts a comment that runs until the next
//! command letter.

use crate::error::ParseError;

/// The ten path data commands, without their absolute/relative distinction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    MoveTo,
    ClosePath,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
}

impl Command {
    /// Returns the command for a letter of either case.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'M' => Command::MoveTo,
            'Z' => Command::ClosePath,
            'L' => Command::LineTo,
            'H' => Command::HorizontalLineTo,
            'V' => Command::VerticalLineTo,
            'C' => Command::CubicTo,
            'S' => Command::SmoothCubicTo,
            'Q' => Command::QuadraticTo,
            'T' => Command::SmoothQuadraticTo,
            'A' => Command::ArcTo,
            _ => {
                return None;
            }
        })
    }

    /// The letter of the command, upper case for absolute coordinates.
    pub fn letter(self, absolute: bool) -> char {
        let letter = match self {
            Command::MoveTo => 'M',
            Command::ClosePath => 'Z',
            Command::LineTo => 'L',
            Command::HorizontalLineTo => 'H',
            Command::VerticalLineTo => 'V',
            Command::CubicTo => 'C',
            Command::SmoothCubicTo => 'S',
            Command::QuadraticTo => 'Q',
            Command::SmoothQuadraticTo => 'T',
            Command::ArcTo => 'A',
        };

        if absolute {
            letter
        } else {
            letter.to_ascii_lowercase()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    Command { command: Command, absolute: bool },
    Number(f64),
}

/// An iterator over the tokens of some path data, keeping track of line and
/// column.
///
/// Arc flags can't be told apart from numbers without knowing where the
/// parser is in a command (`003.5` is two flags followed by `3.5`), so they
/// are read separately with [`Tokenizer::next_flag`].
pub struct Tokenizer<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    token_line: i32,
    token_col: i32,
    finished: bool,
    float_buffer: String,
}

impl<Iter: Iterator<Item = char> + Clone> Tokenizer<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let (line, col) = if current == '\n' { (1, -1) } else { (0, 0) };

        Tokenizer {
            src,
            current,
            line,
            col,
            token_line: line,
            token_col: col,
            finished,
            float_buffer: String::new(),
        }
    }

    /// Line and column of the character the tokenizer is looking at.
    pub fn cursor_position(&self) -> (i32, i32) {
        (self.line, self.col)
    }

    /// Line and column where the last token (or flag) started.
    pub fn token_position(&self) -> (i32, i32) {
        (self.token_line, self.token_col)
    }

    /// Reads a single `0` or `1` character as an arc flag.
    ///
    /// Returns `None` at the end of the input.
    pub fn next_flag(&mut self) -> Option<Result<bool, ParseError>> {
        self.skip_separators();
        if self.finished {
            return None;
        }

        self.start_token();

        let flag = match self.current {
            '0' => false,
            '1' => true,
            src => {
                return Some(Err(ParseError::Flag {
                    src,
                    line: self.line,
                    column: self.col,
                }));
            }
        };

        self.advance_one();

        Some(Ok(flag))
    }

    fn start_token(&mut self) {
        self.token_line = self.line;
        self.token_col = self.col;
    }

    fn skip_separators(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn skip_comment(&mut self) {
        while !self.finished && Command::from_char(self.current).is_none() {
            self.advance_one();
        }
    }

    fn skip_digits(&mut self) {
        while !self.finished && self.current.is_ascii_digit() {
            self.float_buffer.push(self.current);
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }

    // Whether a number starts at the current character: an optional sign
    // followed by a digit, or by a dot and a digit.
    fn at_number(&self) -> bool {
        if self.finished {
            return false;
        }

        let mut next = self.src.clone();
        let mut c = self.current;
        if c == '+' || c == '-' {
            c = match next.next() {
                Some(c) => c,
                None => return false,
            };
        }

        if c == '.' {
            return next.next().map_or(false, |c| c.is_ascii_digit());
        }

        c.is_ascii_digit()
    }

    // Whether the current `e` or `E` is followed by a well formed exponent.
    fn at_exponent(&self) -> bool {
        if self.current != 'e' && self.current != 'E' {
            return false;
        }

        let mut next = self.src.clone();
        match next.next() {
            Some('+') | Some('-') => next.next().map_or(false, |c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    // Expects `at_number()` to hold.
    fn read_number(&mut self) -> Option<f64> {
        self.float_buffer.clear();

        if self.current == '+' || self.current == '-' {
            self.float_buffer.push(self.current);
            self.advance_one();
        }

        self.skip_digits();

        if self.current == '.' {
            self.float_buffer.push('.');
            self.advance_one();
            self.skip_digits();
        }

        if self.at_exponent() {
            self.float_buffer.push('e');
            self.advance_one();

            if self.current == '+' || self.current == '-' {
                self.float_buffer.push(self.current);
                self.advance_one();
            }

            self.skip_digits();
        }

        self.float_buffer.parse::<f64>().ok()
    }
}

impl<Iter: Iterator<Item = char> + Clone> Iterator for Tokenizer<Iter> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_separators();
            if self.finished {
                return None;
            }

            self.start_token();

            let c = self.current;
            if let Some(command) = Command::from_char(c) {
                self.advance_one();
                return Some(Token::Command {
                    command,
                    absolute: c.is_ascii_uppercase(),
                });
            }

            if self.at_number() {
                if let Some(value) = self.read_number() {
                    return Some(Token::Number(value));
                }
                continue;
            }

            match c {
                // A sign or a dot that doesn't lead to digits.
                '+' | '-' | '.' => self.advance_one(),
                _ => self.skip_comment(),
            }
        }
    }
}

#[cfg(test)]
fn tokens(src: &str) -> Vec<Token> {
    Tokenizer::new(src.chars()).collect()
}

#[cfg(test)]
fn cmd(letter: char) -> Token {
    Token::Command {
        command: Command::from_char(letter).unwrap(),
        absolute: letter.is_ascii_uppercase(),
    }
}

#[cfg(test)]
use self::Token::Number as N;

#[test]
fn empty() {
    assert!(tokens("").is_empty());
    assert!(tokens(" \n\t, ").is_empty());
}

#[test]
fn commands_and_numbers() {
    assert_eq!(
        tokens("M 100 100 L 300 100 L 200 300 z"),
        vec![
            cmd('M'),
            N(100.0),
            N(100.0),
            cmd('L'),
            N(300.0),
            N(100.0),
            cmd('L'),
            N(200.0),
            N(300.0),
            cmd('z'),
        ]
    );

    assert_eq!(
        tokens("M 5 1 v 7.344 A 3.574 3.574 0 003.5 8"),
        vec![
            cmd('M'),
            N(5.0),
            N(1.0),
            cmd('v'),
            N(7.344),
            cmd('A'),
            N(3.574),
            N(3.574),
            N(0.0),
            N(3.5),
            N(8.0),
        ]
    );

    assert_eq!(
        tokens("M100,200c10-5,20-10,30-20"),
        vec![
            cmd('M'),
            N(100.0),
            N(200.0),
            cmd('c'),
            N(10.0),
            N(-5.0),
            N(20.0),
            N(-10.0),
            N(30.0),
            N(-20.0),
        ]
    );
}

#[test]
fn command_letters() {
    for letter in "MmZzLlHhVvCcSsQqTtAa".chars() {
        let command = Command::from_char(letter).unwrap();
        assert_eq!(command.letter(letter.is_ascii_uppercase()), letter);
    }

    assert_eq!(Command::from_char('x'), None);
    assert_eq!(Command::from_char('e'), None);
}

#[test]
fn unseparated_numbers() {
    assert_eq!(tokens("40.5.6"), vec![N(40.5), N(0.6)]);
    assert_eq!(tokens("10-20"), vec![N(10.0), N(-20.0)]);
    assert_eq!(tokens("0..1"), vec![N(0.0), N(0.1)]);
    assert_eq!(tokens("0. .1"), vec![N(0.0), N(0.1)]);
    assert_eq!(tokens("-.5+.5"), vec![N(-0.5), N(0.5)]);
}

#[test]
fn scientific_notation() {
    assert_eq!(tokens("1e-2 -1E3"), vec![N(1e-2), N(-1e3)]);
    assert_eq!(
        tokens("-3.4e38 3.4E+38,-3.4E-38"),
        vec![N(-3.4e38), N(3.4e38), N(-3.4e-38)]
    );
    assert_eq!(tokens("1.e-9 1.4e-4z"), vec![N(1e-9), N(1.4e-4), cmd('z')]);
}

#[test]
fn stray_characters() {
    // Lone signs and dots are skipped one at a time.
    assert_eq!(tokens("- 1 . 2 +"), vec![N(1.0), N(2.0)]);
    // Anything else is skipped up to the next command.
    assert_eq!(
        tokens("H 40#90 V 3"),
        vec![cmd('H'), N(40.0), cmd('V'), N(3.0)]
    );
    // An exponent marker without digits is not part of the number.
    assert_eq!(tokens("1e L 2"), vec![N(1.0), cmd('L'), N(2.0)]);
}

#[test]
fn flags() {
    let mut src = Tokenizer::new("3.574 0 003.5 8".chars());
    assert_eq!(src.next(), Some(N(3.574)));
    assert_eq!(src.next(), Some(N(0.0)));
    assert_eq!(src.next_flag(), Some(Ok(false)));
    assert_eq!(src.next_flag(), Some(Ok(false)));
    assert_eq!(src.next(), Some(N(3.5)));
    assert_eq!(src.next(), Some(N(8.0)));
    assert_eq!(src.next_flag(), None);

    let mut src = Tokenizer::new(" 1,1-25".chars());
    assert_eq!(src.next_flag(), Some(Ok(true)));
    assert_eq!(src.next_flag(), Some(Ok(true)));
    assert_eq!(src.next(), Some(N(-25.0)));

    let mut src = Tokenizer::new("1 7".chars());
    assert_eq!(src.next_flag(), Some(Ok(true)));
    assert_eq!(
        src.next_flag(),
        Some(Err(ParseError::Flag {
            src: '7',
            line: 0,
            column: 2
        }))
    );
}

#[test]
fn positions() {
    let mut tokenizer = Tokenizer::new("M 0\n  10,\n3".chars());
    // The parser only ever sees a mutable borrow of the tokenizer.
    let src = &mut tokenizer;
    src.next();
    assert_eq!(src.token_position(), (0, 0));
    assert_eq!(src.cursor_position(), (0, 1));
    src.next();
    assert_eq!(src.token_position(), (0, 2));
    src.next();
    assert_eq!(src.token_position(), (1, 2));
    src.next();
    assert_eq!(src.token_position(), (2, 0));
    assert_eq!(src.next(), None);
    assert_eq!(src.cursor_position(), (2, 0));
}
