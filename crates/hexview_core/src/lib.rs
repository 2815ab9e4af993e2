//! hexview Core
//!
//! Foundational types shared by every hexview crate:
//!
//! - **Geometry**: points, sizes, rects and affine transforms in `f64`
//! - **Colors**: linear RGBA colors decoded from host color codes
//! - **Paths**: move/line/arc/close command lists with an optional stroke hint
//! - **Draw Context**: the clip/fill/stroke interface every backend implements
//! - **Values**: loosely typed host property values
//!
//! # Example
//!
//! ```rust
//! use hexview_core::{ArcDirection, Path, Point};
//!
//! let path = Path::new()
//!     .move_to(0.0, 0.0)
//!     .line_to(10.0, 0.0)
//!     .arc(Point::new(10.0, 5.0), 5.0, -std::f64::consts::FRAC_PI_2, 0.0, ArcDirection::Clockwise)
//!     .close();
//!
//! assert!(path.is_closed());
//! assert_eq!(path.arc_count(), 1);
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod value;

pub use color::{Brush, Color};
pub use draw::{
    arc_sweep, ArcDirection, ClipShape, DrawCommand, DrawContext, DrawContextExt, FillRule,
    LineCap, LineJoin, Path, PathCommand, RecordingContext, Stroke,
};
pub use error::GeometryError;
pub use geometry::{Affine2D, Point, Rect, Size};
pub use value::PropValue;
