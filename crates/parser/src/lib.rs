#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Parsing of SVG path data.
//!
//! The parser follows the path data grammar of SVG 1.1, including its more
//! obscure corners: implicitly repeated commands, numbers that are not
//! separated by anything, and arc flags written without separators.
//!
//! This crate is reexported in `svgpath`.
//!
//! # Examples
//!
//! ```
//! use svgpath_parser::parse;
//!
//! let path = parse("M 10,10 h 20 v 20 Z").unwrap();
//!
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.to_string(), "M 10,10 L 30,10 L 30,30 Z");
//!
//! let error = parse("M 10,10 Z 20,20").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Line 0 Column 10: Expected a command, got a number."
//! );
//! ```

pub use svgpath_path as path;

mod error;
mod parser;
pub mod tokenizer;

#[doc(inline)]
pub use crate::error::ParseError;
#[doc(inline)]
pub use crate::parser::{ParserOptions, PathParser};
#[doc(inline)]
pub use crate::tokenizer::{Command, Token, Tokenizer};

use crate::path::Path;

/// Parses path data with the default options.
pub fn parse(src: &str) -> Result<Path, ParseError> {
    parse_with_options(src, &ParserOptions::DEFAULT)
}

pub fn parse_with_options(src: &str, options: &ParserOptions) -> Result<Path, ParseError> {
    PathParser::new().parse(options, &mut Tokenizer::new(src.chars()))
}
