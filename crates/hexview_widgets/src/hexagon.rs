//! Hexagon view
//!
//! [`HexagonView`] ties the style store to the render targets. Property
//! setters and layout passes mark the view dirty; the next [`draw`] rebuilds
//! the outline and clears the flag.
//!
//! [`draw`]: HexagonView::draw
//!
//! # Example
//!
//! ```
//! use hexview_core::{Rect, RecordingContext, Size};
//! use hexview_widgets::HexagonView;
//!
//! let mut view = HexagonView::new();
//! view.set_prop("borderWidth", 2.0);
//! view.set_prop("borderColor", "4278190080");
//! view.layout(Rect::new(0.0, 0.0, 80.0, 80.0));
//!
//! let mut ctx = RecordingContext::new(Size::square(80.0));
//! view.draw(&mut ctx).unwrap();
//! assert!(!view.needs_display());
//! ```

use hexview_core::{DrawContext, GeometryError, PropValue, Rect, Size};

use crate::render::RenderTargets;
use crate::style::{HexagonStyle, RecomputeNeeded, StyleField};

/// A regular polygon view driven by host properties
#[derive(Clone, Debug)]
pub struct HexagonView {
    style: HexagonStyle,
    bounds: Rect,
    dirty: bool,
}

impl Default for HexagonView {
    fn default() -> Self {
        Self::new()
    }
}

impl HexagonView {
    pub fn new() -> Self {
        Self::with_style(HexagonStyle::default())
    }

    /// Create a view with an initial style
    ///
    /// An explicit `size` in the style sizes the bounds immediately.
    pub fn with_style(style: HexagonStyle) -> Self {
        let bounds = match style.size {
            Some(size) => Size::square(size).to_rect(),
            None => Rect::ZERO,
        };
        Self {
            style,
            bounds,
            dirty: true,
        }
    }

    pub fn style(&self) -> &HexagonStyle {
        &self.style
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn needs_display(&self) -> bool {
        self.dirty
    }

    pub fn set_needs_display(&mut self) {
        self.dirty = true;
    }

    /// Set a property by host name
    ///
    /// Unknown names and rejected values are logged and leave the view
    /// unchanged.
    pub fn set_prop(&mut self, name: &str, value: impl Into<PropValue>) -> RecomputeNeeded {
        match StyleField::from_prop_name(name) {
            Some(field) => self.set(field, value),
            None => {
                tracing::warn!(prop = name, "ignoring unknown hexagon property");
                RecomputeNeeded::No
            }
        }
    }

    /// Set a property
    pub fn set(&mut self, field: StyleField, value: impl Into<PropValue>) -> RecomputeNeeded {
        match self.style.update(field, value.into()) {
            Ok(RecomputeNeeded::Yes) => {
                if field == StyleField::Size {
                    let side = self.style.size.unwrap_or_default();
                    self.bounds = Rect::from_origin_size(self.bounds.origin, Size::square(side));
                }
                self.dirty = true;
                RecomputeNeeded::Yes
            }
            Ok(RecomputeNeeded::No) => RecomputeNeeded::No,
            Err(err) => {
                tracing::warn!("rejected hexagon property: {}", err);
                RecomputeNeeded::No
            }
        }
    }

    /// Position the view
    ///
    /// Every layout pass schedules a redraw, even when the bounds are
    /// unchanged.
    pub fn layout(&mut self, bounds: Rect) {
        if bounds != self.bounds {
            tracing::debug!(
                width = bounds.width(),
                height = bounds.height(),
                "hexagon bounds changed"
            );
        }
        self.bounds = bounds;
        self.dirty = true;
    }

    /// Compute the current render targets without drawing
    pub fn render_targets(&self) -> Result<RenderTargets, GeometryError> {
        RenderTargets::new(&self.style, self.bounds)
    }

    /// Redraw into `ctx`
    ///
    /// On error nothing is drawn and the view stays dirty.
    pub fn draw(&mut self, ctx: &mut dyn DrawContext) -> Result<(), GeometryError> {
        let targets = self.render_targets()?;
        targets.draw(ctx);
        self.dirty = false;
        tracing::debug!("hexagon redrawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexview_core::{Color, DrawCommand, Point, RecordingContext};

    fn drawn(view: &mut HexagonView) -> RecordingContext {
        let mut ctx = RecordingContext::new(view.bounds().size());
        view.draw(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_new_view_is_dirty() {
        let view = HexagonView::new();
        assert!(view.needs_display());
        assert_eq!(view.bounds(), Rect::ZERO);
        assert_eq!(view.style().sides, 6);
    }

    #[test]
    fn test_draw_clears_dirty() {
        let mut view = HexagonView::new();
        view.layout(Rect::new(0.0, 0.0, 60.0, 60.0));
        let ctx = drawn(&mut view);
        assert!(!view.needs_display());
        assert_eq!(ctx.commands().len(), 3);
    }

    #[test]
    fn test_size_resizes_bounds() {
        let mut view = HexagonView::new();
        view.layout(Rect::new(10.0, 20.0, 30.0, 40.0));
        drawn(&mut view);

        assert_eq!(view.set_prop("size", 64), RecomputeNeeded::Yes);
        assert_eq!(view.bounds(), Rect::new(10.0, 20.0, 64.0, 64.0));
        assert!(view.needs_display());
    }

    #[test]
    fn test_size_in_initial_style() {
        let style = HexagonStyle {
            size: Some(48.0),
            ..HexagonStyle::default()
        };
        let view = HexagonView::with_style(style);
        assert_eq!(view.bounds(), Rect::new(0.0, 0.0, 48.0, 48.0));
    }

    #[test]
    fn test_rejected_values_keep_view_clean() {
        let mut view = HexagonView::new();
        view.layout(Rect::new(0.0, 0.0, 50.0, 50.0));
        drawn(&mut view);

        assert_eq!(view.set_prop("borderColor", "not-a-color"), RecomputeNeeded::No);
        assert_eq!(view.set_prop("glow", 3.0), RecomputeNeeded::No);
        assert_eq!(view.set_prop("isHorizontal", false), RecomputeNeeded::No);
        assert_eq!(view.set_prop("borderColor", PropValue::Null), RecomputeNeeded::No);
        assert!(!view.needs_display());
    }

    #[test]
    fn test_accepted_values_mark_dirty() {
        let mut view = HexagonView::new();
        view.layout(Rect::new(0.0, 0.0, 50.0, 50.0));
        drawn(&mut view);

        view.set(StyleField::BorderWidth, 3.0);
        assert!(view.needs_display());
        drawn(&mut view);

        view.set_prop("background_Color", "-65536");
        assert!(view.needs_display());
        assert_eq!(view.style().background_color, Color::RED);
    }

    #[test]
    fn test_layout_always_redraws() {
        let mut view = HexagonView::new();
        let bounds = Rect::new(0.0, 0.0, 50.0, 50.0);
        view.layout(bounds);
        drawn(&mut view);

        view.layout(bounds);
        assert!(view.needs_display());
    }

    #[test]
    fn test_invalid_geometry_stays_dirty() {
        let mut view = HexagonView::with_style(HexagonStyle::new().sides(2));
        view.layout(Rect::new(0.0, 0.0, 50.0, 50.0));

        let mut ctx = RecordingContext::new(Size::square(50.0));
        assert_eq!(view.draw(&mut ctx), Err(GeometryError::TooFewSides(2)));
        assert!(ctx.commands().is_empty());
        assert!(view.needs_display());
    }

    #[test]
    fn test_redraw_follows_style() {
        let mut view = HexagonView::new();
        view.layout(Rect::new(0.0, 0.0, 100.0, 100.0));
        view.set_prop("borderWidth", 10);

        let ctx = drawn(&mut view);
        let stroke_path = ctx.commands().iter().find_map(|c| match c {
            DrawCommand::StrokePath { path, stroke, .. } => Some((path.clone(), stroke.width)),
            _ => None,
        });
        let (path, width) = stroke_path.unwrap();
        assert_eq!(width, 10.0);

        // Inset by half the border on each side
        let right = path
            .points()
            .into_iter()
            .fold(f64::MIN, |acc, p: Point| acc.max(p.x));
        assert!((right - 95.0).abs() < 1e-6, "right vertex at {}", right);
    }
}
