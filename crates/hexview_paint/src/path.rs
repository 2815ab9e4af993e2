//! Path building
//!
//! Core types are re-exported from hexview_core for a unified type system.
//! PathBuilder tracks the pen position so that producers can continue from
//! the end of an arc without recomputing it.

pub use hexview_core::{ArcDirection, Path, PathCommand, Point, Stroke};

/// Builder for constructing paths with fluent API
///
/// PathBuilder maintains cursor state so callers can read the current pen
/// position between commands.
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.path = self.path.move_to(point.x, point.y);
        self.current = point;
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.path = self.path.line_to(point.x, point.y);
        self.current = point;
        self
    }

    /// Append a circular arc; the pen ends on the arc's end point
    pub fn arc(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    ) -> Self {
        self.path = self
            .path
            .arc(center, radius, start_angle, end_angle, direction);
        self.current = center.polar_offset(radius, end_angle);
        self
    }

    pub fn close(mut self) -> Self {
        self.path = self.path.close();
        self
    }

    /// Attach the stroke style hint carried by the finished path
    pub fn stroke_style(mut self, stroke: Stroke) -> Self {
        self.path = self.path.with_stroke_style(stroke);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }

    /// Get the current cursor position
    pub fn current_position(&self) -> Point {
        self.current
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_cursor_follows_lines() {
        let builder = PathBuilder::new()
            .move_to(Point::new(1.0, 2.0))
            .line_to(Point::new(5.0, 2.0));
        assert_eq!(builder.current_position(), Point::new(5.0, 2.0));
    }

    #[test]
    fn test_cursor_lands_on_arc_end() {
        let builder = PathBuilder::new()
            .move_to(Point::new(0.0, -10.0))
            .arc(Point::ZERO, 10.0, -FRAC_PI_2, 0.0, ArcDirection::Clockwise);
        assert!(builder
            .current_position()
            .approx_eq(Point::new(10.0, 0.0), 1e-12));

        let builder = builder.arc(Point::ZERO, 10.0, 0.0, PI, ArcDirection::Clockwise);
        assert!(builder
            .current_position()
            .approx_eq(Point::new(-10.0, 0.0), 1e-12));
    }

    #[test]
    fn test_close_keeps_cursor() {
        let builder = PathBuilder::new()
            .move_to(Point::ZERO)
            .line_to(Point::new(3.0, 0.0))
            .close();
        assert_eq!(builder.current_position(), Point::new(3.0, 0.0));

        let path = builder.stroke_style(Stroke::new(2.0)).build();
        assert!(path.is_closed());
        assert_eq!(path.stroke_style().map(|s| s.width), Some(2.0));
    }
}
