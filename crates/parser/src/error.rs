use thiserror::Error;

/// An error produced while parsing path data.
///
/// Lines and columns start at zero.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected a command, got a number.")]
    MissingCommand { line: i32, column: i32 },
    #[error("Line {line} Column {column}: Missing argument for command {command:?}.")]
    MissingArgument {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected flag (0/1), got {src:?}.")]
    Flag { src: char, line: i32, column: i32 },
}
