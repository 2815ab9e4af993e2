//! Regular polygon outlines with rounded corners
//!
//! [`polygon_path`] turns a [`PolygonSpec`] into a closed outline that can be
//! used both as a fill/clip mask and as a stroke path. The outline is inset
//! so that a stroke of the requested width, centered on the path, stays inside
//! the bounding square, and every vertex is replaced by a circular fillet.
//!
//! The path is traced starting on the bottom edge, heading left, and turning
//! by `2π / sides` at each corner:
//!
//! ```text
//!        ____
//!       /    \
//!       \____/
//!          <-- start
//! ```
//!
//! # Example
//!
//! ```
//! use hexview_core::Rect;
//! use hexview_paint::{polygon_path, PolygonSpec};
//!
//! let spec = PolygonSpec::new(6, Rect::new(0.0, 0.0, 100.0, 100.0), 2.0, 8.0).unwrap();
//! let path = polygon_path(&spec);
//!
//! assert!(path.is_closed());
//! assert_eq!(path.line_count(), 6);
//! assert_eq!(path.arc_count(), 6);
//! ```

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use hexview_core::{ArcDirection, GeometryError, LineJoin, Path, Point, Rect, Stroke};

use crate::path::PathBuilder;

/// Number of sides of the default shape
pub const HEXAGON_SIDES: u32 = 6;

/// Largest accepted side count
pub const MAX_SIDES: u32 = 4096;

/// Validated input for [`polygon_path`]
///
/// The corner radius is not clamped. A radius whose fillet offset exceeds
/// half the side length yields a self-overlapping outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSpec {
    sides: u32,
    stroke_width: f64,
    corner_radius: f64,
    bounds: Rect,
}

impl PolygonSpec {
    /// Validate and create a spec
    pub fn new(
        sides: u32,
        bounds: Rect,
        stroke_width: f64,
        corner_radius: f64,
    ) -> Result<Self, GeometryError> {
        if sides < 3 {
            return Err(GeometryError::TooFewSides(sides));
        }
        if sides > MAX_SIDES {
            return Err(GeometryError::TooManySides {
                sides,
                max: MAX_SIDES,
            });
        }
        if !stroke_width.is_finite() || stroke_width < 0.0 {
            return Err(GeometryError::InvalidStrokeWidth(stroke_width));
        }
        if !corner_radius.is_finite() || corner_radius < 0.0 {
            return Err(GeometryError::InvalidCornerRadius(corner_radius));
        }
        let (width, height) = (bounds.width(), bounds.height());
        let origin_ok = bounds.x().is_finite() && bounds.y().is_finite();
        if !origin_ok || !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0
        {
            return Err(GeometryError::InvalidBounds { width, height });
        }

        Ok(Self {
            sides,
            stroke_width,
            corner_radius,
            bounds,
        })
    }

    /// Hexagon spec with sharp corners and no stroke
    pub fn hexagon(bounds: Rect) -> Result<Self, GeometryError> {
        Self::new(HEXAGON_SIDES, bounds, 0.0, 0.0)
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Derived measurements used to trace the outline
    pub fn metrics(&self) -> PolygonMetrics {
        let sides = self.sides as f64;
        let theta = TAU / sides;
        let half_turn = theta / 2.0;
        let offset = self.corner_radius * half_turn.tan();
        let square_width = self.bounds.min_side();

        let mut length = square_width - self.stroke_width;
        if self.sides % 4 != 0 {
            // Project onto the flat-to-flat axis. The offset term is part of
            // the established output and must stay as is.
            length = length * half_turn.cos() + offset / 2.0;
        }
        let side_length = length * half_turn.tan();

        let center = self.bounds.center();
        let start = Point::new(
            center.x + side_length / 2.0 - offset,
            center.y + length / 2.0,
        );

        PolygonMetrics {
            theta,
            offset,
            length,
            side_length,
            start,
        }
    }

    /// Whether the fillets are too large for the sides they sit on
    pub fn has_overlapping_fillets(&self) -> bool {
        let metrics = self.metrics();
        metrics.offset > metrics.side_length / 2.0
    }
}

/// Intermediate values of the outline construction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonMetrics {
    /// Exterior turn at each vertex
    pub theta: f64,
    /// Distance each edge is shortened at both ends to make room for a fillet
    pub offset: f64,
    /// Flat-to-flat extent of the outline
    pub length: f64,
    /// Edge length before fillet shortening
    pub side_length: f64,
    /// First point of the outline
    pub start: Point,
}

impl PolygonMetrics {
    /// Length of each straight edge between two fillets
    pub fn edge_length(&self) -> f64 {
        self.side_length - 2.0 * self.offset
    }
}

/// Build the closed outline of a regular polygon
///
/// The path starts with a `MoveTo`, alternates one straight edge and one
/// fillet arc per side, and ends with `Close`. A zero corner radius yields
/// zero-radius arcs, so the command layout does not depend on the radius.
/// The returned path carries a round-join stroke hint of the requested stroke
/// width.
pub fn polygon_path(spec: &PolygonSpec) -> Path {
    let metrics = spec.metrics();
    let radius = spec.corner_radius();
    let edge = metrics.edge_length();

    if spec.has_overlapping_fillets() {
        tracing::debug!(
            sides = spec.sides(),
            corner_radius = radius,
            side_length = metrics.side_length,
            "fillets overlap; outline will self-intersect"
        );
    }

    let mut point = metrics.start;
    let mut angle = PI;
    let mut builder = PathBuilder::new().move_to(point);

    for _ in 0..spec.sides() {
        point = point.polar_offset(edge, angle);
        builder = builder.line_to(point);

        let center = point.polar_offset(radius, angle + FRAC_PI_2);
        builder = builder.arc(
            center,
            radius,
            angle - FRAC_PI_2,
            angle + metrics.theta - FRAC_PI_2,
            ArcDirection::Clockwise,
        );

        point = builder.current_position();
        angle += metrics.theta;
    }

    let stroke = Stroke::new(spec.stroke_width()).with_join(LineJoin::Round);
    let path = builder.close().stroke_style(stroke).build();

    tracing::trace!(
        sides = spec.sides(),
        commands = path.commands().len(),
        "built polygon path"
    );
    path
}

impl PolygonSpec {
    /// Build the outline described by this spec
    pub fn to_path(&self) -> Path {
        polygon_path(self)
    }
}
