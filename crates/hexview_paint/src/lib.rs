//! hexview Paint
//!
//! Shape construction on top of the hexview_core path types.
//!
//! # Features
//!
//! - Regular polygon outlines with rounded corners, inset for their stroke
//! - Cursor-tracking path builder
//! - SVG path data and a `DrawContext` that writes SVG documents
//!
//! # Example
//!
//! ```
//! use hexview_core::{Color, DrawContextExt, Rect, Size, Stroke};
//! use hexview_paint::{polygon_path, PolygonSpec, SvgContext};
//!
//! let spec = PolygonSpec::new(6, Rect::new(0.0, 0.0, 64.0, 64.0), 2.0, 4.0).unwrap();
//! let path = polygon_path(&spec);
//!
//! let mut svg = SvgContext::new(Size::new(64.0, 64.0));
//! svg.fill(&path, Color::from_hex(0x3366ff));
//! svg.stroke(&path, &Stroke::new(2.0), Color::BLACK);
//! let document = svg.finish();
//! assert!(document.contains("<path"));
//! ```

pub mod path;
pub mod polygon;
pub mod svg;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from hexview_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use hexview_core::{
    ArcDirection, Brush, ClipShape, Color, DrawContext, DrawContextExt, LineCap, LineJoin, Path,
    PathCommand, Point, Rect, Size, Stroke,
};

// ─────────────────────────────────────────────────────────────────────────────
// hexview_paint specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use path::PathBuilder;
pub use polygon::{polygon_path, PolygonMetrics, PolygonSpec, HEXAGON_SIDES, MAX_SIDES};
pub use svg::{path_data, SvgContext};
