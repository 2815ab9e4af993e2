//! Render targets for a hexagon view
//!
//! One outline is computed per redraw and shared by three targets: the mask
//! that clips the view, the background fill and the border stroke. The
//! border is drawn inside the mask, so the outer half of a stroke that pokes
//! past the outline is clipped away just like the fill.

use std::f64::consts::FRAC_PI_2;

use hexview_core::{
    Affine2D, Brush, ClipShape, DrawContext, GeometryError, LineJoin, Path, Rect, Stroke,
};
use hexview_paint::polygon_path;

use crate::style::HexagonStyle;

/// Background fill target
#[derive(Clone, Debug, PartialEq)]
pub struct FillTarget {
    pub path: Path,
    pub brush: Brush,
}

/// Border stroke target
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeTarget {
    pub path: Path,
    pub stroke: Stroke,
    pub brush: Brush,
}

/// Everything needed to draw one hexagon view
#[derive(Clone, Debug, PartialEq)]
pub struct RenderTargets {
    pub bounds: Rect,
    pub mask: ClipShape,
    pub fill: FillTarget,
    pub stroke: StrokeTarget,
}

/// Compute the oriented outline for `style` inside `bounds`
///
/// Horizontal views rotate the outline a quarter turn about the bounds
/// center.
pub fn outline(style: &HexagonStyle, bounds: Rect) -> Result<Path, GeometryError> {
    let spec = style.polygon_spec(bounds)?;
    let path = polygon_path(&spec);
    if style.is_horizontal {
        Ok(path.transformed(&Affine2D::rotation_around(FRAC_PI_2, bounds.center())))
    } else {
        Ok(path)
    }
}

impl RenderTargets {
    pub fn new(style: &HexagonStyle, bounds: Rect) -> Result<Self, GeometryError> {
        let path = outline(style, bounds)?;
        let stroke = path
            .stroke_style()
            .cloned()
            .unwrap_or_else(|| Stroke::new(style.border_width).with_join(LineJoin::Round));

        tracing::debug!(
            sides = style.sides,
            width = bounds.width(),
            height = bounds.height(),
            horizontal = style.is_horizontal,
            "computed hexagon render targets"
        );

        Ok(Self {
            bounds,
            mask: ClipShape::path(path.clone()),
            fill: FillTarget {
                path: path.clone(),
                brush: style.background_color.into(),
            },
            stroke: StrokeTarget {
                path,
                stroke,
                brush: style.border_color.into(),
            },
        })
    }

    /// Emit the targets into a draw context
    ///
    /// Order: push mask, fill, stroke, pop mask. The stroke is skipped when
    /// its width is zero.
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.push_clip(self.mask.clone());
        ctx.fill_path(&self.fill.path, self.fill.brush.clone());
        if self.stroke.stroke.width > 0.0 {
            ctx.stroke_path(&self.stroke.path, &self.stroke.stroke, self.stroke.brush.clone());
        }
        ctx.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexview_core::{Color, DrawCommand, Point, RecordingContext, Size};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_draw_order() {
        let style = HexagonStyle::new()
            .border_width(4.0)
            .border_color(Color::BLACK)
            .background_color(Color::RED);
        let targets = RenderTargets::new(&style, bounds()).unwrap();

        let mut ctx = RecordingContext::new(Size::square(100.0));
        targets.draw(&mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(&commands[0], DrawCommand::PushClip(ClipShape::Path { .. })));
        assert!(matches!(
            &commands[1],
            DrawCommand::FillPath { brush, .. } if brush.color() == Color::RED
        ));
        match &commands[2] {
            DrawCommand::StrokePath {
                stroke,
                brush,
                ..
            } => {
                assert_eq!(stroke.width, 4.0);
                assert_eq!(stroke.join, LineJoin::Round);
                assert_eq!(brush.color(), Color::BLACK);
            }
            other => panic!("expected stroke, got {:?}", other),
        }
        assert_eq!(commands[3], DrawCommand::PopClip);
        assert!(ctx.clip_stack().is_empty());
    }

    #[test]
    fn test_targets_share_outline() {
        let style = HexagonStyle::new().border_width(2.0).corner_radius(5.0);
        let targets = RenderTargets::new(&style, bounds()).unwrap();
        match &targets.mask {
            ClipShape::Path { path, .. } => {
                assert_eq!(path, &targets.fill.path);
                assert_eq!(path, &targets.stroke.path);
            }
            ClipShape::Rect(_) => panic!("mask must be a path"),
        }
    }

    #[test]
    fn test_zero_border_skips_stroke() {
        let targets = RenderTargets::new(&HexagonStyle::new(), bounds()).unwrap();
        let mut ctx = RecordingContext::new(Size::square(100.0));
        targets.draw(&mut ctx);
        assert_eq!(ctx.commands().len(), 3);
        assert!(!ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokePath { .. })));
    }

    #[test]
    fn test_invalid_sides_rejected() {
        let style = HexagonStyle::new().sides(2);
        assert_eq!(
            RenderTargets::new(&style, bounds()),
            Err(GeometryError::TooFewSides(2))
        );
    }

    #[test]
    fn test_horizontal_rotates_outline() {
        let vertical = outline(&HexagonStyle::new(), bounds()).unwrap();
        let horizontal = outline(&HexagonStyle::new().horizontal(true), bounds()).unwrap();

        // Default hexagon has vertices on the left and right
        let v_points = vertical.points();
        assert!(v_points.iter().any(|p| p.approx_eq(Point::new(0.0, 50.0), 1e-6)));
        assert!(v_points.iter().any(|p| p.approx_eq(Point::new(100.0, 50.0), 1e-6)));

        // Rotated hexagon has them on the top and bottom instead
        let h_points = horizontal.points();
        assert!(h_points.iter().any(|p| p.approx_eq(Point::new(50.0, 0.0), 1e-6)));
        assert!(h_points.iter().any(|p| p.approx_eq(Point::new(50.0, 100.0), 1e-6)));
        assert!(!h_points.iter().any(|p| p.approx_eq(Point::new(0.0, 50.0), 1e-6)));

        assert_eq!(horizontal.stroke_style(), vertical.stroke_style());
        assert_eq!(horizontal.arc_count(), 6);
    }
}
