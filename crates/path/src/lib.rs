#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Sequences of SVG path segments.
//!
//! A [`Path`] is an ordered, mutable sequence of [`PathSegment`]s, as
//! produced by parsing the `d` attribute of an SVG `<path>` element. It can
//! be measured and sampled as a whole, with the parameter `t` distributed
//! along the path proportionally to the length of each segment, and
//! serialized back into path data.
//!
//! This crate is reexported in `svgpath`.
//!
//! # Examples
//!
//! ```
//! use svgpath_path::{Path, PathSegment};
//! use svgpath_path::geom::{ArcFlags, ArcSegment, LengthOptions, SvgArc};
//! use svgpath_path::math::{point, vector};
//!
//! let half_circle = |from, to| {
//!     PathSegment::Arc(ArcSegment::new(SvgArc {
//!         from,
//!         to,
//!         radii: vector(100.0, 100.0),
//!         x_rotation: 0.0,
//!         flags: ArcFlags::default(),
//!     }))
//! };
//!
//! let mut path: Path = vec![
//!     PathSegment::Move(point(0.0, 0.0)),
//!     half_circle(point(0.0, 0.0), point(200.0, 0.0)),
//!     half_circle(point(200.0, 0.0), point(0.0, 0.0)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let circumference = path.length(&LengthOptions::DEFAULT);
//! assert!((circumference - 200.0 * std::f64::consts::PI).abs() < 1e-7);
//!
//! assert_eq!(
//!     path.to_string(),
//!     "M 0,0 A 100,100 0 0,0 200,0 A 100,100 0 0,0 0,0",
//! );
//! ```

pub use svgpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
pub mod path;
pub mod segment;
mod serializer;

#[doc(inline)]
pub use crate::error::PathError;
#[doc(inline)]
pub use crate::path::Path;
#[doc(inline)]
pub use crate::segment::PathSegment;
pub use crate::geom::{ArcFlags, LengthOptions};

pub mod math {
    //! f64 versions of the euclid types used everywhere. The other svgpath
    //! crates reexport them.

    pub use crate::geom::{
        point, vector, Angle, Box2D, Point, Rotation, Scale, Transform, Translation, Vector,
    };
}
