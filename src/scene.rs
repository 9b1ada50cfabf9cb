//! Scene files: a TOML description of one SVG document
//!
//! ```toml
//! [canvas]
//! width = 200
//! height = 100
//!
//! [palette]
//! brand = "#336699"
//!
//! [[element]]
//! kind = "circle"
//! cx = 50
//! cy = 50
//! r = 20
//! fill = "brand"
//! opacity = 0.5
//!
//! [[element]]
//! kind = "text"
//! x = 100
//! y = 50
//! content = "hello"
//! style = ["font-size:12px"]
//! ```
//!
//! Elements are drawn in order between the document start and end. Each
//! `kind` names one canvas operation; `style` holds raw style tokens and
//! `fill` names a palette color appended as a final `rgb`/`rgba` token.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::canvas::{Canvas, CanvasConfig};
use crate::error::CanvasError;
use crate::palette::{Palette, PaletteError};

/// Errors that can occur when loading or rendering a scene
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid scene palette: {0}")]
    Palette(#[from] PaletteError),
    #[error("unknown color token '{token}'")]
    UnknownColor { token: String },
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Document dimensions and canvas options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneCanvas {
    pub width: i32,
    pub height: i32,
    #[serde(flatten)]
    pub config: CanvasConfig,
}

/// A complete scene
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    pub canvas: SceneCanvas,
    /// Extra colors (token -> hex), layered over the caller's palette
    #[serde(default)]
    pub palette: HashMap<String, String>,
    #[serde(default, rename = "element")]
    pub elements: Vec<SceneElement>,
}

/// One drawing call with its styling
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneElement {
    #[serde(flatten)]
    pub shape: Element,
    #[serde(default)]
    pub style: Vec<String>,
    /// Palette token used as fill color
    pub fill: Option<String>,
    /// Fill opacity, only meaningful together with `fill`
    pub opacity: Option<f64>,
}

/// The canvas operation an element maps to
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    GroupStyle {
        css: String,
    },
    GroupTransform {
        transform: String,
    },
    GroupId {
        id: String,
    },
    GroupEnd,
    Defs,
    DefsEnd,
    Desc {
        text: String,
    },
    Title {
        text: String,
    },
    Link {
        href: String,
        #[serde(default)]
        title: String,
    },
    LinkEnd,
    Use {
        x: i32,
        y: i32,
        href: String,
    },
    Circle {
        cx: i32,
        cy: i32,
        r: i32,
    },
    Ellipse {
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    RoundRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rx: i32,
        ry: i32,
    },
    Square {
        x: i32,
        y: i32,
        side: i32,
    },
    Polygon {
        xs: Vec<i32>,
        ys: Vec<i32>,
    },
    Polyline {
        xs: Vec<i32>,
        ys: Vec<i32>,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Image {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        href: String,
    },
    Text {
        x: i32,
        y: i32,
        content: String,
    },
    Arc {
        sx: i32,
        sy: i32,
        rx: i32,
        ry: i32,
        #[serde(default)]
        rotation: i32,
        #[serde(default)]
        large_arc: bool,
        #[serde(default)]
        sweep: bool,
        ex: i32,
        ey: i32,
    },
    CubicBezier {
        sx: i32,
        sy: i32,
        c1x: i32,
        c1y: i32,
        c2x: i32,
        c2y: i32,
        ex: i32,
        ey: i32,
    },
    QuadraticBezier {
        sx: i32,
        sy: i32,
        cx: i32,
        cy: i32,
        ex: i32,
        ey: i32,
        tx: i32,
        ty: i32,
    },
    Grid {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        spacing: i32,
    },
}

impl Scene {
    /// Load scene from TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load scene from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// `base` with this scene's own colors layered on top
    pub fn resolve_palette(&self, base: &Palette) -> Result<Palette, SceneError> {
        let mut palette = base.clone();
        if !self.palette.is_empty() {
            palette.merge(Palette::from_hex_map(self.palette.clone())?);
        }
        Ok(palette)
    }

    /// Draw the whole document onto `canvas`
    pub fn render<W: Write>(
        &self,
        canvas: &mut Canvas<W>,
        palette: &Palette,
    ) -> Result<(), SceneError> {
        let palette = self.resolve_palette(palette)?;
        log::debug!(
            "rendering scene {}x{} with {} elements",
            self.canvas.width,
            self.canvas.height,
            self.elements.len()
        );

        canvas.start(self.canvas.width, self.canvas.height)?;
        for element in &self.elements {
            element.draw(canvas, &palette)?;
        }
        canvas.end()?;
        Ok(())
    }
}

impl SceneElement {
    /// Style tokens in call order, with the palette fill last
    ///
    /// `opacity` only scales a palette fill; on its own it is ignored.
    pub fn style_tokens(&self, palette: &Palette) -> Result<Vec<String>, SceneError> {
        let mut tokens = self.style.clone();
        if let (Some(alpha), None) = (self.opacity, &self.fill) {
            log::warn!("opacity {} has no fill to apply to, ignoring it", alpha);
        }
        if let Some(token) = &self.fill {
            let color = palette
                .resolve(token)
                .ok_or_else(|| SceneError::UnknownColor {
                    token: token.clone(),
                })?;
            tokens.push(match self.opacity {
                Some(alpha) => color.fill_with_opacity(alpha),
                None => color.fill(),
            });
        }
        Ok(tokens)
    }

    /// Issue the canvas call for this element
    pub fn draw<W: Write>(
        &self,
        canvas: &mut Canvas<W>,
        palette: &Palette,
    ) -> Result<(), SceneError> {
        let tokens = self.style_tokens(palette)?;
        let style: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let style = style.as_slice();

        match &self.shape {
            Element::GroupStyle { css } => canvas.group_with_style(css)?,
            Element::GroupTransform { transform } => canvas.group_with_transform(transform)?,
            Element::GroupId { id } => canvas.group_with_id(id)?,
            Element::GroupEnd => canvas.group_end()?,
            Element::Defs => canvas.defs_begin()?,
            Element::DefsEnd => canvas.defs_end()?,
            Element::Desc { text } => canvas.description(text)?,
            Element::Title { text } => canvas.title(text)?,
            Element::Link { href, title } => canvas.link_begin(href, title)?,
            Element::LinkEnd => canvas.link_end()?,
            Element::Use { x, y, href } => canvas.use_element(*x, *y, href, style)?,
            Element::Circle { cx, cy, r } => canvas.circle(*cx, *cy, *r, style)?,
            Element::Ellipse { cx, cy, rx, ry } => canvas.ellipse(*cx, *cy, *rx, *ry, style)?,
            Element::Rect {
                x,
                y,
                width,
                height,
            } => canvas.rect(*x, *y, *width, *height, style)?,
            Element::RoundRect {
                x,
                y,
                width,
                height,
                rx,
                ry,
            } => canvas.round_rect(*x, *y, *width, *height, *rx, *ry, style)?,
            Element::Square { x, y, side } => canvas.square(*x, *y, *side, style)?,
            Element::Polygon { xs, ys } => canvas.polygon(xs, ys, style)?,
            Element::Polyline { xs, ys } => canvas.polyline(xs, ys, style)?,
            Element::Line { x1, y1, x2, y2 } => canvas.line(*x1, *y1, *x2, *y2, style)?,
            Element::Image {
                x,
                y,
                width,
                height,
                href,
            } => canvas.image(*x, *y, *width, *height, href, style)?,
            Element::Text { x, y, content } => canvas.text(*x, *y, content, style)?,
            Element::Arc {
                sx,
                sy,
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                ex,
                ey,
            } => canvas.arc(
                *sx, *sy, *rx, *ry, *rotation, *large_arc, *sweep, *ex, *ey, style,
            )?,
            Element::CubicBezier {
                sx,
                sy,
                c1x,
                c1y,
                c2x,
                c2y,
                ex,
                ey,
            } => canvas.cubic_bezier(*sx, *sy, *c1x, *c1y, *c2x, *c2y, *ex, *ey, style)?,
            Element::QuadraticBezier {
                sx,
                sy,
                cx,
                cy,
                ex,
                ey,
                tx,
                ty,
            } => canvas.quadratic_bezier(*sx, *sy, *cx, *cy, *ex, *ey, *tx, *ty, style)?,
            Element::Grid {
                x,
                y,
                width,
                height,
                spacing,
            } => canvas.grid(*x, *y, *width, *height, *spacing, style)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_scene() {
        let scene = Scene::from_str("[canvas]\nwidth = 10\nheight = 20\n").expect("Should parse");
        assert_eq!(scene.canvas.width, 10);
        assert_eq!(scene.canvas.height, 20);
        assert_eq!(scene.canvas.config, CanvasConfig::default());
        assert!(scene.elements.is_empty());
    }

    #[test]
    fn test_parse_elements_in_order() {
        let scene = Scene::from_str(
            r#"
[canvas]
width = 100
height = 100
generator_comment = "test"

[[element]]
kind = "group_id"
id = "layer"

[[element]]
kind = "circle"
cx = 1
cy = 2
r = 3
style = ["stroke:red"]

[[element]]
kind = "group_end"
"#,
        )
        .expect("Should parse");

        assert_eq!(
            scene.canvas.config.generator_comment,
            Some("test".to_string())
        );
        assert_eq!(scene.elements.len(), 3);
        assert_eq!(
            scene.elements[0].shape,
            Element::GroupId {
                id: "layer".to_string()
            }
        );
        assert_eq!(
            scene.elements[1].shape,
            Element::Circle { cx: 1, cy: 2, r: 3 }
        );
        assert_eq!(scene.elements[1].style, vec!["stroke:red".to_string()]);
        assert_eq!(scene.elements[2].shape, Element::GroupEnd);
    }

    #[test]
    fn test_arc_flags_default_to_false() {
        let scene = Scene::from_str(
            r#"
[canvas]
width = 1
height = 1

[[element]]
kind = "arc"
sx = 0
sy = 0
rx = 5
ry = 5
ex = 10
ey = 0
"#,
        )
        .expect("Should parse");
        assert_eq!(
            scene.elements[0].shape,
            Element::Arc {
                sx: 0,
                sy: 0,
                rx: 5,
                ry: 5,
                rotation: 0,
                large_arc: false,
                sweep: false,
                ex: 10,
                ey: 0,
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let result = Scene::from_str(
            "[canvas]\nwidth = 1\nheight = 1\n[[element]]\nkind = \"hexagon\"\n",
        );
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_style_tokens_append_palette_fill() {
        let element = SceneElement {
            shape: Element::GroupEnd,
            style: vec!["stroke:black".to_string()],
            fill: Some("accent-1".to_string()),
            opacity: None,
        };
        let tokens = element.style_tokens(&Palette::default()).unwrap();
        assert_eq!(tokens, vec!["stroke:black", "fill:rgb(33,150,243)"]);
    }

    #[test]
    fn test_style_tokens_with_opacity() {
        let element = SceneElement {
            shape: Element::GroupEnd,
            style: vec![],
            fill: Some("status-error".to_string()),
            opacity: Some(0.5),
        };
        let tokens = element.style_tokens(&Palette::default()).unwrap();
        assert_eq!(tokens, vec!["fill-opacity:0.50; fill:rgb(244,67,54)"]);
    }

    #[test]
    fn test_unknown_fill_token() {
        let element = SceneElement {
            shape: Element::GroupEnd,
            style: vec![],
            fill: Some("nope".to_string()),
            opacity: None,
        };
        let err = element.style_tokens(&Palette::default()).unwrap_err();
        assert!(matches!(err, SceneError::UnknownColor { ref token } if token == "nope"));
    }

    #[test]
    fn test_opacity_without_fill_is_ignored() {
        let element = SceneElement {
            shape: Element::GroupEnd,
            style: vec!["stroke:black".to_string()],
            fill: None,
            opacity: Some(0.5),
        };
        let tokens = element.style_tokens(&Palette::default()).unwrap();
        assert_eq!(tokens, vec!["stroke:black".to_string()]);
    }

    #[test]
    fn test_scene_palette_layers_over_base() {
        let scene = Scene::from_str(
            "[canvas]\nwidth = 1\nheight = 1\n[palette]\naccent-1 = \"#000\"\n",
        )
        .unwrap();
        let palette = scene.resolve_palette(&Palette::default()).unwrap();
        assert_eq!(palette.resolve("accent-1").map(|c| c.fill()), Some("fill:rgb(0,0,0)".to_string()));
        assert!(palette.resolve("status-error").is_some());
    }
}
