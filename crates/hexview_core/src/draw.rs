//! Draw Context - Paths, Strokes and Recording
//!
//! The `DrawContext` trait is the seam between shape producers and the
//! backends that consume them (recording, SVG, tessellation). A producer
//! describes a frame as a sequence of clip/fill/stroke operations over
//! [`Path`] values; each backend interprets them in its own way.
//!
//! # Example
//!
//! ```
//! use hexview_core::{Color, DrawContext, DrawContextExt, Path, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
//! let path = Path::new().move_to(0.0, 0.0).line_to(100.0, 0.0).line_to(50.0, 80.0).close();
//!
//! ctx.fill(&path, Color::BLUE);
//! ctx.stroke(&path, &Stroke::new(2.0), Color::BLACK);
//!
//! assert_eq!(ctx.commands().len(), 2);
//! ```

use smallvec::SmallVec;
use std::f64::consts::TAU;

use crate::color::Brush;
use crate::geometry::{Affine2D, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f64,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit (for Miter joins)
    pub miter_limit: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

/// Fill rule for closed contours
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Sweep direction of a circular arc
///
/// Directions are named for the y-down drawing space: `Clockwise` sweeps
/// with increasing angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArcDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl ArcDirection {
    pub fn reversed(self) -> Self {
        match self {
            ArcDirection::Clockwise => ArcDirection::CounterClockwise,
            ArcDirection::CounterClockwise => ArcDirection::Clockwise,
        }
    }
}

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Circular arc around `center`
    ///
    /// If the current point is not the arc's start point, a straight line
    /// to the start point is implied.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// Signed sweep of an arc command in radians, `None` for other commands
    pub fn arc_sweep(&self) -> Option<f64> {
        match self {
            PathCommand::Arc {
                start_angle,
                end_angle,
                direction,
                ..
            } => Some(arc_sweep(*start_angle, *end_angle, *direction)),
            _ => None,
        }
    }
}

/// Signed sweep from `start` to `end` travelling in `direction`
///
/// The result lies in `[0, 2π)` for clockwise arcs and `(-2π, 0]` otherwise.
pub fn arc_sweep(start: f64, end: f64, direction: ArcDirection) -> f64 {
    let delta = (end - start).rem_euclid(TAU);
    match direction {
        ArcDirection::Clockwise => delta,
        ArcDirection::CounterClockwise if delta == 0.0 => 0.0,
        ArcDirection::CounterClockwise => delta - TAU,
    }
}

/// A vector path
///
/// A path may carry a stroke style hint for consumers that stroke it
/// directly instead of configuring their own stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    stroke_style: Option<Stroke>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            stroke_style: None,
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Circular arc around `center` from `start_angle` to `end_angle`
    pub fn arc(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Attach a stroke style hint
    pub fn with_stroke_style(mut self, stroke: Stroke) -> Self {
        self.stroke_style = Some(stroke);
        self
    }

    /// Stroke style hint recorded by the path's producer
    pub fn stroke_style(&self) -> Option<&Stroke> {
        self.stroke_style.as_ref()
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.x(), rect.y())
            .line_to(rect.x() + rect.width(), rect.y())
            .line_to(rect.x() + rect.width(), rect.y() + rect.height())
            .line_to(rect.x(), rect.y() + rect.height())
            .close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the last command closes the subpath
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Number of straight line commands
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::LineTo(_)))
            .count()
    }

    /// Number of arc commands
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::Arc { .. }))
            .count()
    }

    /// First point of the path
    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Pen position after the last drawing command, ignoring `Close`
    pub fn end_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Arc {
                center,
                radius,
                end_angle,
                ..
            } => Some(center.polar_offset(*radius, *end_angle)),
            PathCommand::Close => None,
        })
    }

    /// Every point the pen lands on, in drawing order
    ///
    /// Arc commands contribute their start and end points.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.commands.len() * 2);
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(*p),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => {
                    points.push(center.polar_offset(*radius, *start_angle));
                    points.push(center.polar_offset(*radius, *end_angle));
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Arcs contribute their full circle, so the result is conservative.
    pub fn bounds(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        let mut include = |p: Point| {
            bounds = Some(match bounds {
                Some(b) => b.expand_to_include(p),
                None => Rect::from_origin_size(p, Size::ZERO),
            });
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::Arc { center, radius, .. } => {
                    include(Point::new(center.x - radius, center.y - radius));
                    include(Point::new(center.x + radius, center.y + radius));
                }
                PathCommand::Close => {}
            }
        }

        bounds.unwrap_or(Rect::ZERO)
    }

    /// Apply a similarity transform (rotation, translation, uniform scale,
    /// reflection) to every command
    pub fn transformed(&self, transform: &Affine2D) -> Path {
        let det = transform.determinant();
        let scale = det.abs().sqrt();
        let angle_of = |angle: f64| {
            let (x, y) = transform.transform_vector(angle.cos(), angle.sin());
            y.atan2(x)
        };

        let commands = self
            .commands
            .iter()
            .map(|cmd| match cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(transform.transform_point(*p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(transform.transform_point(*p)),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    direction,
                } => {
                    let sweep = arc_sweep(*start_angle, *end_angle, *direction);
                    let start = angle_of(*start_angle);
                    let (sweep, direction) = if det < 0.0 {
                        (-sweep, direction.reversed())
                    } else {
                        (sweep, *direction)
                    };
                    PathCommand::Arc {
                        center: transform.transform_point(*center),
                        radius: radius * scale,
                        start_angle: start,
                        end_angle: start + sweep,
                        direction,
                    }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();

        Path {
            commands,
            stroke_style: self.stroke_style.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipping
// ─────────────────────────────────────────────────────────────────────────────

/// Shape used to restrict drawing
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// Axis-aligned rectangle clip
    Rect(Rect),
    /// Arbitrary path clip, filled with the given rule
    Path { path: Path, fill_rule: FillRule },
}

impl ClipShape {
    /// Create a rectangular clip
    pub fn rect(rect: Rect) -> Self {
        ClipShape::Rect(rect)
    }

    /// Create a path-based clip using the non-zero rule
    pub fn path(path: Path) -> Self {
        ClipShape::Path {
            path,
            fill_rule: FillRule::NonZero,
        }
    }

    /// Get the bounding rect of this clip shape
    pub fn bounds(&self) -> Rect {
        match self {
            ClipShape::Rect(rect) => *rect,
            ClipShape::Path { path, .. } => path.bounds(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// Rendering backend interface
pub trait DrawContext {
    /// Push a clip shape onto the stack
    fn push_clip(&mut self, shape: ClipShape);

    /// Pop the top clip from the stack
    fn pop_clip(&mut self);

    /// Fill a path with a brush
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.fill_path(&Path::rect(rect), brush);
    }

    /// Size of the drawing surface
    fn viewport_size(&self) -> Size;
}

/// Convenience methods over [`DrawContext`]
pub trait DrawContextExt: DrawContext {
    /// Fill a path with a color or brush
    fn fill<B: Into<Brush>>(&mut self, path: &Path, brush: B) {
        self.fill_path(path, brush.into());
    }

    /// Stroke a path with a color or brush
    fn stroke<B: Into<Brush>>(&mut self, path: &Path, stroke: &Stroke, brush: B) {
        self.stroke_path(path, stroke, brush.into());
    }

    /// Run `f` with `shape` pushed as clip
    fn with_clip<F: FnOnce(&mut Self)>(&mut self, shape: ClipShape, f: F)
    where
        Self: Sized,
    {
        self.push_clip(shape);
        f(self);
        self.pop_clip();
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushClip(ClipShape),
    PopClip,
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
    FillRect {
        rect: Rect,
        brush: Brush,
    },
}

impl DrawCommand {
    /// Replay this command into another context
    pub fn replay(&self, ctx: &mut dyn DrawContext) {
        match self {
            DrawCommand::PushClip(shape) => ctx.push_clip(shape.clone()),
            DrawCommand::PopClip => ctx.pop_clip(),
            DrawCommand::FillPath { path, brush } => ctx.fill_path(path, brush.clone()),
            DrawCommand::StrokePath {
                path,
                stroke,
                brush,
            } => ctx.stroke_path(path, stroke, brush.clone()),
            DrawCommand::FillRect { rect, brush } => ctx.fill_rect(*rect, brush.clone()),
        }
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clip_stack: SmallVec<[ClipShape; 4]>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            clip_stack: SmallVec::new(),
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Currently active clip shapes, innermost last
    pub fn clip_stack(&self) -> &[ClipShape] {
        &self.clip_stack
    }

    /// Replay all recorded commands into another context
    pub fn replay(&self, ctx: &mut dyn DrawContext) {
        for cmd in &self.commands {
            cmd.replay(ctx);
        }
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }
}

impl DrawContext for RecordingContext {
    fn push_clip(&mut self, shape: ClipShape) {
        self.commands.push(DrawCommand::PushClip(shape.clone()));
        self.clip_stack.push(shape);
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
        if self.clip_stack.pop().is_none() {
            tracing::warn!("pop_clip called with an empty clip stack");
        }
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.commands.push(DrawCommand::FillRect { rect, brush });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
