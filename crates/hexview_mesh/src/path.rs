//! Path tessellation
//!
//! Converts hexview paths into triangle meshes using lyon.

use hexview_core::{arc_sweep, Brush, Color, FillRule, Path, PathCommand, Point, Rect, Stroke};
use lyon::geom::{Arc, CubicBezierSegment};
use lyon::lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, StrokeOptions, StrokeTessellator,
    StrokeVertex, VertexBuffers,
};
use lyon::math::{point, vector, Angle};
use lyon::path::PathEvent;

/// Flattening tolerance, in drawing units
pub const TOLERANCE: f32 = 0.1;

/// A vertex for path rendering
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PathVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Tessellated path geometry
#[derive(Clone, Debug, Default)]
pub struct TessellatedPath {
    pub vertices: Vec<PathVertex>,
    pub indices: Vec<u32>,
}

impl TessellatedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Total area covered by the triangles
    pub fn area(&self) -> f64 {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                let [a, b, c] = [tri[0], tri[1], tri[2]]
                    .map(|i| self.vertices[i as usize].position.map(f64::from));
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
            })
            .sum()
    }

    /// Bounding rect of all vertices
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self
            .vertices
            .iter()
            .map(|v| Point::new(v.position[0] as f64, v.position[1] as f64));
        let first = iter.next()?;
        let start = Rect::from_origin_size(first, hexview_core::Size::ZERO);
        Some(iter.fold(start, |rect, p| rect.expand_to_include(p)))
    }
}

fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

/// Convert a hexview path to lyon path events
fn path_to_lyon_events(path: &Path) -> Vec<PathEvent> {
    let mut events = Vec::new();
    let mut first_point: Option<Point> = None;
    let mut current_point = Point::ZERO;

    // Starts a subpath at `at` unless one is already open
    fn ensure_begun(events: &mut Vec<PathEvent>, first: &mut Option<Point>, at: Point) {
        if first.is_none() {
            events.push(PathEvent::Begin { at: to_lyon(at) });
            *first = Some(at);
        }
    }

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                if let Some(first) = first_point.take() {
                    // End previous subpath
                    events.push(PathEvent::End {
                        last: to_lyon(current_point),
                        first: to_lyon(first),
                        close: false,
                    });
                }
                ensure_begun(&mut events, &mut first_point, *p);
                current_point = *p;
            }
            PathCommand::LineTo(p) => {
                // Implicit moveto at the current point
                ensure_begun(&mut events, &mut first_point, current_point);
                events.push(PathEvent::Line {
                    from: to_lyon(current_point),
                    to: to_lyon(*p),
                });
                current_point = *p;
            }
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                direction,
            } => {
                let from = center.polar_offset(*radius, *start_angle);
                if first_point.is_none() {
                    ensure_begun(&mut events, &mut first_point, from);
                } else if !current_point.approx_eq(from, 1e-9) {
                    events.push(PathEvent::Line {
                        from: to_lyon(current_point),
                        to: to_lyon(from),
                    });
                }
                current_point = from;

                let sweep = arc_sweep(*start_angle, *end_angle, *direction);
                if *radius <= 0.0 || sweep == 0.0 {
                    continue;
                }

                let arc = Arc {
                    center: to_lyon(*center),
                    radii: vector(*radius as f32, *radius as f32),
                    start_angle: Angle::radians(*start_angle as f32),
                    sweep_angle: Angle::radians(sweep as f32),
                    x_rotation: Angle::zero(),
                };
                // Chain the cubics from the exact pen position to avoid gaps
                let mut prev = to_lyon(from);
                arc.for_each_cubic_bezier(&mut |segment: &CubicBezierSegment<f32>| {
                    events.push(PathEvent::Cubic {
                        from: prev,
                        ctrl1: segment.ctrl1,
                        ctrl2: segment.ctrl2,
                        to: segment.to,
                    });
                    prev = segment.to;
                });
                current_point = Point::new(prev.x as f64, prev.y as f64);
            }
            PathCommand::Close => {
                if let Some(first) = first_point.take() {
                    events.push(PathEvent::End {
                        last: to_lyon(current_point),
                        first: to_lyon(first),
                        close: true,
                    });
                    current_point = first;
                }
            }
        }
    }

    // Close any remaining open subpath
    if let Some(first) = first_point {
        events.push(PathEvent::End {
            last: to_lyon(current_point),
            first: to_lyon(first),
            close: false,
        });
    }

    events
}

/// Tessellate a path for filling with the non-zero rule
pub fn tessellate_fill(path: &Path, brush: &Brush) -> TessellatedPath {
    tessellate_fill_with_rule(path, FillRule::NonZero, brush)
}

/// Tessellate a path for filling
pub fn tessellate_fill_with_rule(path: &Path, fill_rule: FillRule, brush: &Brush) -> TessellatedPath {
    let color = brush_to_color(brush);
    let events = path_to_lyon_events(path);

    if events.is_empty() {
        return TessellatedPath::new();
    }

    let mut geometry: VertexBuffers<PathVertex, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();

    let options = FillOptions::default()
        .with_tolerance(TOLERANCE)
        .with_fill_rule(match fill_rule {
            FillRule::NonZero => lyon::lyon_tessellation::FillRule::NonZero,
            FillRule::EvenOdd => lyon::lyon_tessellation::FillRule::EvenOdd,
        });

    let result = tessellator.tessellate(
        events.iter().cloned(),
        &options,
        &mut BuffersBuilder::new(&mut geometry, |vertex: FillVertex| PathVertex {
            position: vertex.position().to_array(),
            color: color.to_array(),
        }),
    );

    if let Err(err) = result {
        tracing::warn!("Path fill tessellation failed: {:?}", err);
        return TessellatedPath::new();
    }

    TessellatedPath {
        vertices: geometry.vertices,
        indices: geometry.indices,
    }
}

/// Tessellate a path for stroking
pub fn tessellate_stroke(path: &Path, stroke: &Stroke, brush: &Brush) -> TessellatedPath {
    let color = brush_to_color(brush);
    let events = path_to_lyon_events(path);

    if events.is_empty() || stroke.width <= 0.0 {
        return TessellatedPath::new();
    }

    let mut geometry: VertexBuffers<PathVertex, u32> = VertexBuffers::new();
    let mut tessellator = StrokeTessellator::new();

    let mut options = StrokeOptions::default()
        .with_line_width(stroke.width as f32)
        .with_tolerance(TOLERANCE);

    // Convert line cap
    options = options.with_line_cap(match stroke.cap {
        hexview_core::LineCap::Butt => lyon::lyon_tessellation::LineCap::Butt,
        hexview_core::LineCap::Round => lyon::lyon_tessellation::LineCap::Round,
        hexview_core::LineCap::Square => lyon::lyon_tessellation::LineCap::Square,
    });

    // Convert line join
    options = options.with_line_join(match stroke.join {
        hexview_core::LineJoin::Miter => lyon::lyon_tessellation::LineJoin::Miter,
        hexview_core::LineJoin::Round => lyon::lyon_tessellation::LineJoin::Round,
        hexview_core::LineJoin::Bevel => lyon::lyon_tessellation::LineJoin::Bevel,
    });

    // lyon rejects limits below 1
    options = options.with_miter_limit((stroke.miter_limit as f32).max(1.0));

    let result = tessellator.tessellate(
        events.iter().cloned(),
        &options,
        &mut BuffersBuilder::new(&mut geometry, |vertex: StrokeVertex| PathVertex {
            position: vertex.position().to_array(),
            color: color.to_array(),
        }),
    );

    if let Err(err) = result {
        tracing::warn!("Path stroke tessellation failed: {:?}", err);
        return TessellatedPath::new();
    }

    TessellatedPath {
        vertices: geometry.vertices,
        indices: geometry.indices,
    }
}

fn brush_to_color(brush: &Brush) -> Color {
    brush.color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexview_core::{ArcDirection, LineJoin};
    use hexview_paint::{polygon_path, PolygonSpec};

    #[test]
    fn test_tessellate_rect() {
        let path = Path::rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        let result = tessellate_fill(&path, &Color::RED.into());

        assert!(!result.is_empty());
        assert_eq!(result.triangle_count(), 2);
        assert!((result.area() - 10_000.0).abs() < 1e-3);
        assert_eq!(result.vertices[0].color, Color::RED.to_array());
    }

    #[test]
    fn test_tessellate_hexagon_area() {
        let spec = PolygonSpec::hexagon(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        let result = tessellate_fill(&polygon_path(&spec), &Color::BLUE.into());

        // Regular hexagon with circumradius 50
        let expected = 3.0 * 3f64.sqrt() / 2.0 * 50.0 * 50.0;
        assert!((result.area() - expected).abs() < 0.5, "area {}", result.area());
    }

    #[test]
    fn test_rounded_corners_shrink_area() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let sharp = tessellate_fill(
            &polygon_path(&PolygonSpec::new(4, bounds, 0.0, 0.0).unwrap()),
            &Color::BLACK.into(),
        );
        let rounded = tessellate_fill(
            &polygon_path(&PolygonSpec::new(4, bounds, 0.0, 20.0).unwrap()),
            &Color::BLACK.into(),
        );

        // Each corner loses r² - πr²/4
        let lost = 4.0 * (400.0 - std::f64::consts::PI * 100.0);
        // Flattening at TOLERANCE trims up to ~0.1 * arc length per corner
        assert!((sharp.area() - rounded.area() - lost).abs() < 15.0);
        assert!(rounded.triangle_count() > sharp.triangle_count());
    }

    #[test]
    fn test_tessellate_stroke_stays_in_bounds() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let path = polygon_path(&PolygonSpec::new(6, bounds, 6.0, 0.0).unwrap());
        let stroke = Stroke::new(6.0).with_join(LineJoin::Round);
        let result = tessellate_stroke(&path, &stroke, &Color::BLACK.into());

        assert!(!result.is_empty());
        let mesh_bounds = result.bounds().unwrap();
        assert!(mesh_bounds.x() >= -0.05 && mesh_bounds.y() >= -0.05);
        assert!(mesh_bounds.x() + mesh_bounds.width() <= 100.05);
        assert!(mesh_bounds.y() + mesh_bounds.height() <= 100.05);
    }

    #[test]
    fn test_zero_width_stroke_is_empty() {
        let path = Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(tessellate_stroke(&path, &Stroke::new(0.0), &Color::BLACK.into()).is_empty());
    }

    #[test]
    fn test_empty_path_is_empty() {
        assert!(tessellate_fill(&Path::new(), &Color::BLACK.into()).is_empty());
    }

    #[test]
    fn test_arc_events_chain_from_pen() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .arc(Point::new(20.0, 0.0), 5.0, std::f64::consts::PI, 0.0, ArcDirection::Clockwise)
            .close();
        let events = path_to_lyon_events(&path);

        assert!(matches!(events[0], PathEvent::Begin { .. }));
        // Connecting line to the arc start, then the arc itself
        assert!(matches!(events[1], PathEvent::Line { .. }));
        assert!(events[2..events.len() - 1]
            .iter()
            .all(|e| matches!(e, PathEvent::Cubic { .. })));
        assert!(matches!(
            events.last(),
            Some(PathEvent::End { close: true, .. })
        ));
    }

    #[test]
    fn test_zero_radius_arc_adds_no_events() {
        let path = Path::new()
            .move_to(1.0, 1.0)
            .line_to(5.0, 1.0)
            .arc(Point::new(5.0, 1.0), 0.0, 0.0, 1.0, ArcDirection::Clockwise)
            .close();
        assert_eq!(path_to_lyon_events(&path).len(), 3);
    }
}
