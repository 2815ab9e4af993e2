//! SVG output
//!
//! [`path_data`] serializes a [`Path`] into SVG path data, converting
//! center-parameterized arcs into SVG endpoint arcs. [`SvgContext`] is a
//! [`DrawContext`] that writes a standalone SVG document, turning clip
//! pushes into `<clipPath>` definitions.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use hexview_core::{
    arc_sweep, Brush, ClipShape, Color, DrawContext, FillRule, LineCap, LineJoin, Path,
    PathCommand, Point, Rect, Size, Stroke,
};
use smallvec::SmallVec;

/// Sweeps closer than this to a full turn are split in two
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Format a coordinate with at most four decimals and no trailing zeros
fn num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

fn point(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

/// Serialize a path into SVG path data
pub fn path_data(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(path.commands().len() + 1);
    let mut current: Option<Point> = None;
    let mut subpath_start = Point::ZERO;

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                parts.push(format!("M {}", point(*p)));
                current = Some(*p);
                subpath_start = *p;
            }
            PathCommand::LineTo(p) => {
                parts.push(format!("L {}", point(*p)));
                current = Some(*p);
            }
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                direction,
            } => {
                let from = center.polar_offset(*radius, *start_angle);
                match current {
                    None => {
                        parts.push(format!("M {}", point(from)));
                        subpath_start = from;
                    }
                    Some(pen) if !pen.approx_eq(from, 1e-9) => {
                        parts.push(format!("L {}", point(from)));
                    }
                    Some(_) => {}
                }

                let sweep = arc_sweep(*start_angle, *end_angle, *direction);
                if *radius > 0.0 && sweep != 0.0 {
                    let sweep_flag = u8::from(sweep > 0.0);
                    if sweep.abs() >= TAU - FULL_TURN_EPSILON {
                        // A full circle has coincident endpoints; go via the midpoint
                        let mid = center.polar_offset(*radius, start_angle + sweep / 2.0);
                        parts.push(format!(
                            "A {r} {r} 0 0 {s} {}",
                            point(mid),
                            r = num(*radius),
                            s = sweep_flag
                        ));
                    }
                    let to = center.polar_offset(*radius, start_angle + sweep);
                    let large_arc = u8::from(sweep.abs() > PI && sweep.abs() < TAU - FULL_TURN_EPSILON);
                    parts.push(format!(
                        "A {r} {r} 0 {l} {s} {}",
                        point(to),
                        r = num(*radius),
                        l = large_arc,
                        s = sweep_flag
                    ));
                    current = Some(to);
                } else {
                    current = Some(from);
                }
            }
            PathCommand::Close => {
                parts.push("Z".to_string());
                current = Some(subpath_start);
            }
        }
    }

    parts.join(" ")
}

fn color_attrs(kind: &str, color: Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    let mut attrs = format!("{}=\"rgb({},{},{})\"", kind, r, g, b);
    if color.a < 1.0 {
        let _ = write!(attrs, " {}-opacity=\"{}\"", kind, num(color.a as f64));
    }
    attrs
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let join = match stroke.join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
        LineJoin::Bevel => "bevel",
    };
    let cap = match stroke.cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    };
    let mut attrs = format!(
        "stroke-width=\"{}\" stroke-linejoin=\"{}\" stroke-linecap=\"{}\"",
        num(stroke.width),
        join,
        cap
    );
    if stroke.join == LineJoin::Miter {
        let _ = write!(attrs, " stroke-miterlimit=\"{}\"", num(stroke.miter_limit));
    }
    attrs
}

fn fill_rule_attr(rule: FillRule) -> &'static str {
    match rule {
        FillRule::NonZero => "nonzero",
        FillRule::EvenOdd => "evenodd",
    }
}

/// Draw context that writes an SVG document
pub struct SvgContext {
    size: Size,
    defs: Vec<String>,
    body: Vec<String>,
    open_groups: SmallVec<[usize; 4]>,
    next_clip_id: usize,
}

impl SvgContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            defs: Vec::new(),
            body: Vec::new(),
            open_groups: SmallVec::new(),
            next_clip_id: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.open_groups.len() + 1)
    }

    /// Close any open clip groups and return the document
    pub fn finish(mut self) -> String {
        if !self.open_groups.is_empty() {
            tracing::warn!(
                open = self.open_groups.len(),
                "closing unbalanced clip groups"
            );
        }
        while !self.open_groups.is_empty() {
            self.pop_clip();
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = num(self.size.width),
            h = num(self.size.height)
        );
        if !self.defs.is_empty() {
            out.push_str("  <defs>\n");
            for def in &self.defs {
                let _ = writeln!(out, "    {}", def);
            }
            out.push_str("  </defs>\n");
        }
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawContext for SvgContext {
    fn push_clip(&mut self, shape: ClipShape) {
        let id = self.next_clip_id;
        self.next_clip_id += 1;

        let inner = match &shape {
            ClipShape::Rect(rect) => format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
                num(rect.x()),
                num(rect.y()),
                num(rect.width()),
                num(rect.height())
            ),
            ClipShape::Path { path, fill_rule } => format!(
                "<path d=\"{}\" clip-rule=\"{}\"/>",
                path_data(path),
                fill_rule_attr(*fill_rule)
            ),
        };
        self.defs
            .push(format!("<clipPath id=\"clip{}\">{}</clipPath>", id, inner));

        let line = format!("{}<g clip-path=\"url(#clip{})\">", self.indent(), id);
        self.body.push(line);
        self.open_groups.push(id);
    }

    fn pop_clip(&mut self) {
        if self.open_groups.pop().is_none() {
            tracing::warn!("pop_clip called with an empty clip stack");
            return;
        }
        let line = format!("{}</g>", self.indent());
        self.body.push(line);
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        let line = format!(
            "{}<path d=\"{}\" {}/>",
            self.indent(),
            path_data(path),
            color_attrs("fill", brush.color())
        );
        self.body.push(line);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        let line = format!(
            "{}<path d=\"{}\" fill=\"none\" {} {}/>",
            self.indent(),
            path_data(path),
            color_attrs("stroke", brush.color()),
            stroke_attrs(stroke)
        );
        self.body.push(line);
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        let line = format!(
            "{}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            self.indent(),
            num(rect.x()),
            num(rect.y()),
            num(rect.width()),
            num(rect.height()),
            color_attrs("fill", brush.color())
        );
        self.body.push(line);
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{polygon_path, PolygonSpec};
    use hexview_core::{ArcDirection, DrawContextExt};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(2.50000001), "2.5");
        assert_eq!(num(-0.00001), "0");
        assert_eq!(num(93.30127018922193), "93.3013");
    }

    #[test]
    fn test_lines_and_close() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .line_to(10.0, 5.0)
            .close();
        assert_eq!(path_data(&path), "M 0 0 L 10 0 L 10 5 Z");
    }

    #[test]
    fn test_quarter_arc_clockwise() {
        let path = Path::new().move_to(10.0, 0.0).arc(
            Point::ZERO,
            10.0,
            0.0,
            FRAC_PI_2,
            ArcDirection::Clockwise,
        );
        assert_eq!(path_data(&path), "M 10 0 A 10 10 0 0 1 0 10");
    }

    #[test]
    fn test_large_counter_clockwise_arc() {
        let path = Path::new().move_to(10.0, 0.0).arc(
            Point::ZERO,
            10.0,
            0.0,
            FRAC_PI_2,
            ArcDirection::CounterClockwise,
        );
        assert_eq!(path_data(&path), "M 10 0 A 10 10 0 1 0 0 10");
    }

    #[test]
    fn test_arc_away_from_pen_gets_connecting_line() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .arc(Point::new(20.0, 0.0), 5.0, PI, 0.0, ArcDirection::Clockwise);
        assert_eq!(path_data(&path), "M 0 0 L 15 0 A 5 5 0 0 1 25 0");
    }

    #[test]
    fn test_zero_radius_arc_emits_nothing() {
        let path = Path::new()
            .move_to(1.0, 1.0)
            .arc(Point::new(1.0, 1.0), 0.0, 0.0, 1.0, ArcDirection::Clockwise)
            .close();
        assert_eq!(path_data(&path), "M 1 1 Z");
    }

    #[test]
    fn test_full_circle_is_split() {
        let path = Path::new()
            .move_to(5.0, 0.0)
            .arc(Point::ZERO, 5.0, 0.0, TAU, ArcDirection::CounterClockwise);
        // CounterClockwise with coincident angles is an empty sweep
        assert_eq!(path_data(&path), "M 5 0");

        let full = Path::new().move_to(5.0, 0.0).arc(
            Point::ZERO,
            5.0,
            0.0,
            TAU - 1e-12,
            ArcDirection::Clockwise,
        );
        assert_eq!(path_data(&full), "M 5 0 A 5 5 0 0 1 -5 0 A 5 5 0 0 1 5 0");
    }

    #[test]
    fn test_hexagon_path_data() {
        let spec = PolygonSpec::hexagon(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        let d = path_data(&polygon_path(&spec));
        assert_eq!(
            d,
            "M 75 93.3013 L 25 93.3013 L 0 50 L 25 6.6987 L 75 6.6987 L 100 50 L 75 93.3013 Z"
        );
    }

    #[test]
    fn test_svg_document_with_clip() {
        let path = Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut ctx = SvgContext::new(Size::new(10.0, 10.0));
        ctx.with_clip(ClipShape::path(path.clone()), |ctx| {
            ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED.into());
            ctx.stroke(
                &path,
                &Stroke::new(2.0).with_join(LineJoin::Round),
                Color::BLACK.with_alpha(0.5),
            );
        });
        let svg = ctx.finish();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\""));
        assert!(svg.contains("<clipPath id=\"clip0\"><path d=\"M 0 0 L 10 0 L 10 10 L 0 10 Z\" clip-rule=\"nonzero\"/></clipPath>"));
        assert!(svg.contains("<g clip-path=\"url(#clip0)\">"));
        assert!(svg.contains("fill=\"rgb(255,0,0)\""));
        assert!(svg.contains("stroke=\"rgb(0,0,0)\" stroke-opacity=\"0.5\""));
        assert!(svg.contains("stroke-linejoin=\"round\""));
        assert!(svg.contains("</g>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_finish_closes_unbalanced_groups() {
        let mut ctx = SvgContext::new(Size::new(4.0, 4.0));
        ctx.push_clip(ClipShape::rect(Rect::new(0.0, 0.0, 2.0, 2.0)));
        let svg = ctx.finish();
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }
}
