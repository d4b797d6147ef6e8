#![deny(bare_trait_objects)]

//! Reading, measuring and writing SVG path data.
//!
//! # Crates
//!
//! This meta-crate (`svgpath`) reexports the following sub-crates for convenience:
//!
//! * **svgpath_geom** - Line, bézier and elliptic arc segments: evaluation,
//!   derivatives, lengths and bounding boxes.
//! * **svgpath_path** - The `Path` container, sampling along the whole path
//!   and serialization to path data.
//! * **svgpath_parser** - The path data parser.
//!
//! Each `svgpath_<name>` crate is reexported as a `<name>` module in `svgpath`. For example:
//!
//! ```ignore
//! extern crate svgpath_geom;
//! use svgpath_geom::CubicBezierSegment;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate svgpath;
//! use svgpath::geom::CubicBezierSegment;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Measuring a path
//!
//! ```
//! use svgpath::geom::LengthOptions;
//! use svgpath::math::point;
//!
//! // Two half circles of radius 100.
//! let mut path = svgpath::parse("M 0,0 A 100,100 0 1,0 200,0 A 100,100 0 1,0 0,0").unwrap();
//!
//! let length = path.length(&LengthOptions::DEFAULT);
//! assert!((length - 200.0 * std::f64::consts::PI).abs() < 1e-7);
//!
//! // t is distributed along the path proportionally to the segment lengths.
//! let p = path.point(0.5).unwrap();
//! assert!((p - point(200.0, 0.0)).length() < 1e-7);
//! ```
//!
//! ## Normalizing path data
//!
//! ```
//! let path = svgpath::parse("m 100,100 c 0,-80 100,-80 100,0 s 100,80 100,0").unwrap();
//!
//! // The output uses absolute coordinates.
//! assert_eq!(
//!     path.d(),
//!     "M 100,100 C 100,20 200,20 200,100 S 300,180 300,100",
//! );
//! ```

pub extern crate svgpath_geom;
pub extern crate svgpath_parser;
pub extern crate svgpath_path;

pub use svgpath_geom as geom;
pub use svgpath_parser as parser;
pub use svgpath_path as path;

pub use path::math;
pub use path::{Path, PathSegment};
pub use parser::{parse, ParseError};
