//! Streaming SVG canvas
//!
//! A [`Canvas`] wraps any `std::io::Write` sink and writes one SVG element
//! per call, in call order.

pub mod config;
pub mod format;
pub mod path;
pub mod svg;

pub use config::CanvasConfig;
pub use format::Point;
pub use svg::Canvas;
