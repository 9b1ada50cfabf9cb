//! SVG element emission

use std::io::Write;

use crate::error::CanvasError;

use super::format::{
    comment_text, dim, end_style, escape_xml, group, href, loc, point_list, style_attr, Point,
};
use super::path::PathData;
use super::CanvasConfig;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Writes SVG elements to a sink, one element per call
///
/// Every call writes immediately; nothing is buffered here. Nesting of
/// groups, defs and links is left to the caller, as is calling [`start`]
/// first and [`end`] last.
///
/// [`start`]: Canvas::start
/// [`end`]: Canvas::end
///
/// # Example
///
/// ```rust
/// use svg_canvas::Canvas;
///
/// let mut canvas = Canvas::new(Vec::new());
/// canvas.start(100, 50).unwrap();
/// canvas.circle(50, 25, 20, &["fill:blue"]).unwrap();
/// canvas.end().unwrap();
///
/// let svg = String::from_utf8(canvas.into_inner()).unwrap();
/// assert!(svg.contains(r#"<circle cx="50" cy="25" r="20" style="fill:blue"/>"#));
/// ```
pub struct Canvas<W: Write> {
    writer: W,
    config: CanvasConfig,
}

impl<W: Write> Canvas<W> {
    /// Create a canvas writing to `writer` with default configuration
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, CanvasConfig::default())
    }

    /// Create a canvas with a custom configuration
    pub fn with_config(writer: W, config: CanvasConfig) -> Self {
        Self { writer, config }
    }

    /// Configuration this canvas writes with
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Borrow the sink, e.g. to inspect a buffer mid-document
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, fragment: &str) -> Result<(), CanvasError> {
        log::trace!("emit {}", fragment.trim_end());
        self.writer.write_all(fragment.as_bytes())?;
        Ok(())
    }

    /// Element with escaped text content
    fn text_element(&mut self, tag: &str, attrs: &str, content: &str) -> Result<(), CanvasError> {
        let fragment = format!("<{tag}{attrs}>{}</{tag}>\n", escape_xml(content));
        self.emit(&fragment)
    }

    // Structure, metadata and links

    /// Begin the document: XML declaration and the root `<svg>` tag
    pub fn start(&mut self, width: i32, height: i32) -> Result<(), CanvasError> {
        log::debug!("starting SVG document {}x{}", width, height);
        let mut head = format!(
            "<?xml version=\"1.0\"?>\n<svg xmlns=\"{SVG_NS}\"\n     xmlns:xlink=\"{XLINK_NS}\"\n     width=\"{width}\" height=\"{height}\">\n"
        );
        if let Some(comment) = &self.config.generator_comment {
            head.push_str(&format!("<!-- {} -->\n", comment_text(comment)));
        }
        self.emit(&head)
    }

    /// Close the root element
    pub fn end(&mut self) -> Result<(), CanvasError> {
        log::debug!("ending SVG document");
        self.emit("</svg>\n")
    }

    /// Begin a group with the given CSS style
    pub fn group_with_style(&mut self, style: &str) -> Result<(), CanvasError> {
        self.emit(&format!("{}\n", group("style", style)))
    }

    /// Begin a group with the given transform
    pub fn group_with_transform(&mut self, transform: &str) -> Result<(), CanvasError> {
        self.emit(&format!("{}\n", group("transform", transform)))
    }

    /// Begin a group with the given id
    pub fn group_with_id(&mut self, id: &str) -> Result<(), CanvasError> {
        self.emit(&format!("{}\n", group("id", id)))
    }

    /// End the innermost group
    pub fn group_end(&mut self) -> Result<(), CanvasError> {
        self.emit("</g>\n")
    }

    pub fn defs_begin(&mut self) -> Result<(), CanvasError> {
        self.emit("<defs>\n")
    }

    pub fn defs_end(&mut self) -> Result<(), CanvasError> {
        self.emit("</defs>\n")
    }

    /// `<desc>` element; the text is escaped
    pub fn description(&mut self, text: &str) -> Result<(), CanvasError> {
        self.text_element("desc", "", text)
    }

    /// `<title>` element; the text is escaped
    pub fn title(&mut self, text: &str) -> Result<(), CanvasError> {
        self.text_element("title", "", text)
    }

    /// Begin a hyperlink
    pub fn link_begin(&mut self, link: &str, title: &str) -> Result<(), CanvasError> {
        self.emit(&format!(
            "<a {} xlink:title=\"{}\">\n",
            href(link),
            title
        ))
    }

    pub fn link_end(&mut self) -> Result<(), CanvasError> {
        self.emit("</a>\n")
    }

    /// Place the element referenced by `link` at `x`,`y`
    pub fn use_element(
        &mut self,
        x: i32,
        y: i32,
        link: &str,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!(
            "<use {} {} {}",
            loc(x, y),
            href(link),
            end_style(style)
        ))
    }

    // Shapes

    /// Circle centered at `cx`,`cy` with radius `r`
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, style: &[&str]) -> Result<(), CanvasError> {
        self.emit(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}"#,
            cx,
            cy,
            r,
            end_style(style)
        ))
    }

    /// Ellipse centered at `cx`,`cy` with radii `rx` and `ry`
    pub fn ellipse(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}"#,
            cx,
            cy,
            rx,
            ry,
            end_style(style)
        ))
    }

    /// Rectangle with its upper-left corner at `x`,`y`
    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!("<rect {} {}", dim(x, y, w, h), end_style(style)))
    }

    /// Rectangle with rounded corners of radii `rx`, `ry`
    #[allow(clippy::too_many_arguments)]
    pub fn round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        rx: i32,
        ry: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!(
            r#"<rect {} rx="{}" ry="{}" {}"#,
            dim(x, y, w, h),
            rx,
            ry,
            end_style(style)
        ))
    }

    pub fn square(&mut self, x: i32, y: i32, side: i32, style: &[&str]) -> Result<(), CanvasError> {
        self.rect(x, y, side, side, style)
    }

    /// Closed shape through the points `(xs[i], ys[i])`
    ///
    /// Sequences of different length yield an empty point list.
    pub fn polygon(&mut self, xs: &[i32], ys: &[i32], style: &[&str]) -> Result<(), CanvasError> {
        self.poly("polygon", xs, ys, style)
    }

    /// Open chain of segments through the points `(xs[i], ys[i])`
    pub fn polyline(&mut self, xs: &[i32], ys: &[i32], style: &[&str]) -> Result<(), CanvasError> {
        self.poly("polyline", xs, ys, style)
    }

    fn poly(
        &mut self,
        tag: &str,
        xs: &[i32],
        ys: &[i32],
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!(
            r#"<{} points="{}" {}"#,
            tag,
            point_list(xs, ys),
            end_style(style)
        ))
    }

    pub fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}"#,
            x1,
            y1,
            x2,
            y2,
            end_style(style)
        ))
    }

    /// Image referenced by `link`, placed with its upper-left corner at `x`,`y`
    pub fn image(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        link: &str,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        self.emit(&format!(
            "<image {} {} {}",
            dim(x, y, w, h),
            href(link),
            end_style(style)
        ))
    }

    /// Text at `x`,`y`. Only the first style token is used.
    pub fn text(&mut self, x: i32, y: i32, text: &str, style: &[&str]) -> Result<(), CanvasError> {
        let attrs = match style.first() {
            Some(css) => format!(" {} {}", loc(x, y), style_attr(css)),
            None => format!(" {} ", loc(x, y)),
        };
        self.text_element("text", &attrs, text)
    }

    // Paths

    /// Elliptical arc from `sx`,`sy` to `ex`,`ey` with radii `rx`,`ry`
    ///
    /// `large_arc` selects the arc spanning 180 degrees or more; `sweep`
    /// selects the positive-angle (clockwise) direction.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        sx: i32,
        sy: i32,
        rx: i32,
        ry: i32,
        rotation: i32,
        large_arc: bool,
        sweep: bool,
        ex: i32,
        ey: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        let path = PathData::starting_at(Point::new(sx, sy)).arc_to(
            Point::new(rx, ry),
            rotation,
            large_arc,
            sweep,
            Point::new(ex, ey),
        );
        self.path(&path, style)
    }

    /// Cubic Bézier from `sx`,`sy` to `ex`,`ey` with two control points
    #[allow(clippy::too_many_arguments)]
    pub fn cubic_bezier(
        &mut self,
        sx: i32,
        sy: i32,
        c1x: i32,
        c1y: i32,
        c2x: i32,
        c2y: i32,
        ex: i32,
        ey: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        let path = PathData::starting_at(Point::new(sx, sy)).cubic_to(
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
            Point::new(ex, ey),
        );
        self.path(&path, style)
    }

    /// Quadratic Bézier from `sx`,`sy` through control `cx`,`cy` to `ex`,`ey`,
    /// continued smoothly to `tx`,`ty`
    #[allow(clippy::too_many_arguments)]
    pub fn quadratic_bezier(
        &mut self,
        sx: i32,
        sy: i32,
        cx: i32,
        cy: i32,
        ex: i32,
        ey: i32,
        tx: i32,
        ty: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        let path = PathData::starting_at(Point::new(sx, sy))
            .quadratic_to(Point::new(cx, cy), Point::new(ex, ey))
            .smooth_quadratic_to(Point::new(tx, ty));
        self.path(&path, style)
    }

    /// Arbitrary path assembled with [`PathData`]
    pub fn path(&mut self, path: &PathData, style: &[&str]) -> Result<(), CanvasError> {
        self.emit(&format!("{}{}", path.to_path_open(), end_style(style)))
    }

    // Utility

    /// Lattice of lines over `w`x`h` at `x`,`y`, one every `spacing` units
    ///
    /// Lines start at `x` (resp. `y`) and continue through the first
    /// position at or beyond the far edge, so the last line may land past
    /// it. With a style token the lattice is wrapped in a styled group.
    /// A non-positive spacing draws nothing, as does a negative extent on
    /// that axis.
    pub fn grid(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        spacing: i32,
        style: &[&str],
    ) -> Result<(), CanvasError> {
        if spacing <= 0 {
            log::warn!("grid spacing {} is not positive, drawing nothing", spacing);
            return Ok(());
        }

        if let Some(css) = style.first() {
            self.group_with_style(css)?;
        }

        let right = x.saturating_add(w);
        let bottom = y.saturating_add(h);

        for ix in lattice(x, right, spacing) {
            self.line(ix, y, ix, bottom, &[])?;
        }
        for iy in lattice(y, bottom, spacing) {
            self.line(x, iy, right, iy, &[])?;
        }

        if !style.is_empty() {
            self.group_end()?;
        }
        Ok(())
    }
}

/// Positions `from`, `from + step`, ... through the first one `>= to`;
/// nothing when `to` lies before `from`
fn lattice(from: i32, to: i32, step: i32) -> impl Iterator<Item = i32> {
    let mut next = if to < from { None } else { Some(from) };
    std::iter::from_fn(move || {
        let current = next?;
        next = if current >= to {
            None
        } else {
            current.checked_add(step)
        };
        Some(current)
    })
}
