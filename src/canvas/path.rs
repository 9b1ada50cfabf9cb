//! Path data assembly for arcs and Bézier curves
//!
//! Builds the `d` attribute of a `<path>` element from a sequence of
//! segments. Operand groups are written as `x,y` pairs separated by spaces,
//! with the command letter glued to its first operand (`M10,10 C20,0 ...`).

use super::format::{one_zero, Point};

/// A segment in a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Elliptical arc to `end`
    ArcTo {
        radii: Point,
        rotation: i32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    /// Cubic Bézier curve with two control points
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Quadratic Bézier curve
    QuadraticTo { control: Point, end: Point },
    /// Smooth quadratic continuation; the control point is the reflection
    /// of the previous one
    SmoothQuadraticTo(Point),
}

impl PathSegment {
    fn write_d(&self, d: &mut String) {
        match self {
            PathSegment::MoveTo(p) => d.push_str(&format!("M{}", p)),
            PathSegment::ArcTo {
                radii,
                rotation,
                large_arc,
                sweep,
                end,
            } => {
                // A rx,ry x-axis-rotation large-arc-flag sweep-flag x,y
                d.push_str(&format!(
                    "A{} {} {} {} {}",
                    radii,
                    rotation,
                    one_zero(*large_arc),
                    one_zero(*sweep),
                    end
                ));
            }
            PathSegment::CubicTo {
                control1,
                control2,
                end,
            } => d.push_str(&format!("C{} {} {}", control1, control2, end)),
            PathSegment::QuadraticTo { control, end } => {
                d.push_str(&format!("Q{} {}", control, end))
            }
            PathSegment::SmoothQuadraticTo(end) => d.push_str(&format!("T{}", end)),
        }
    }
}

/// Ordered path segments, always starting with a move
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    /// Start a path at `start`
    pub fn starting_at(start: Point) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(start)],
        }
    }

    pub fn arc_to(
        mut self,
        radii: Point,
        rotation: i32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    ) -> Self {
        self.segments.push(PathSegment::ArcTo {
            radii,
            rotation,
            large_arc,
            sweep,
            end,
        });
        self
    }

    pub fn cubic_to(mut self, control1: Point, control2: Point, end: Point) -> Self {
        self.segments.push(PathSegment::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    pub fn quadratic_to(mut self, control: Point, end: Point) -> Self {
        self.segments.push(PathSegment::QuadraticTo { control, end });
        self
    }

    pub fn smooth_quadratic_to(mut self, end: Point) -> Self {
        self.segments.push(PathSegment::SmoothQuadraticTo(end));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            seg.write_d(&mut d);
        }
        d
    }

    /// Opening of a `<path>` element up to (and including) the closing quote
    /// of its `d` attribute, followed by a separating space
    pub fn to_path_open(&self) -> String {
        format!(r#"<path d="{}" "#, self.to_svg_d())
    }
}
