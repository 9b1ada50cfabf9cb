//! Fill color style fragments
//!
//! The returned strings are CSS declarations meant to be passed as style
//! tokens to any shape call.

/// `fill:rgb(r,g,b)`
pub fn rgb(r: i32, g: i32, b: i32) -> String {
    format!("fill:rgb({},{},{})", r, g, b)
}

/// `fill-opacity:A; fill:rgb(r,g,b)` with `A` fixed to two decimals
pub fn rgba(r: i32, g: i32, b: i32, alpha: f64) -> String {
    format!("fill-opacity:{:.2}; {}", alpha, rgb(r, g, b))
}
