//! svg-canvas - a streaming SVG generator
//!
//! Drawing primitives (shapes, paths, text, groups, links) that each write one
//! SVG element to an output sink as soon as they are called.
//!
//! # Example
//!
//! ```rust
//! use svg_canvas::{rgb, Canvas};
//!
//! let mut canvas = Canvas::new(Vec::new());
//! canvas.start(200, 100).unwrap();
//! canvas.rect(10, 10, 80, 40, &[rgb(255, 0, 0).as_str()]).unwrap();
//! canvas.text(20, 70, "Hello & welcome", &[]).unwrap();
//! canvas.end().unwrap();
//!
//! let svg = String::from_utf8(canvas.into_inner()).unwrap();
//! assert!(svg.contains(r#"style="fill:rgb(255,0,0)""#));
//! assert!(svg.contains("Hello &amp; welcome"));
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod palette;
pub mod scene;

pub use canvas::{Canvas, CanvasConfig, Point};
pub use color::{rgb, rgba};
pub use error::CanvasError;
pub use palette::{Palette, PaletteError, Rgb};
pub use scene::{Scene, SceneError};

/// Render a TOML scene to an SVG string with the default palette
///
/// # Example
///
/// ```rust
/// use svg_canvas::render_scene;
///
/// let svg = render_scene(r#"
///     [canvas]
///     width = 100
///     height = 100
///
///     [[element]]
///     kind = "square"
///     x = 10
///     y = 10
///     side = 20
///     fill = "accent-1"
/// "#).unwrap();
///
/// assert!(svg.contains(r#"width="100" height="100""#));
/// assert!(svg.contains("<rect"));
/// ```
pub fn render_scene(source: &str) -> Result<String, SceneError> {
    render_scene_with_palette(source, &Palette::default())
}

/// Render a TOML scene to an SVG string, resolving fills through `palette`
pub fn render_scene_with_palette(source: &str, palette: &Palette) -> Result<String, SceneError> {
    let scene = Scene::from_str(source)?;
    let mut canvas = Canvas::with_config(Vec::new(), scene.canvas.config.clone());
    scene.render(&mut canvas, palette)?;
    // Every fragment was formatted from &str, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&canvas.into_inner()).into_owned())
}
