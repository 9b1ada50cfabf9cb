//! Named color palettes
//!
//! A palette maps symbolic color tokens (`accent-1`, `status-error`, ...) to
//! concrete RGB values, so scene files can say `fill = "accent-1"` and be
//! re-colored by swapping the palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::color::{rgb, rgba};

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid color '{value}' for token '{token}': expected #rgb or #rrggbb")]
    InvalidColor { token: String, value: String },
}

/// An RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                Some(Self::new(channel(0).ok()?, channel(1).ok()?, channel(2).ok()?))
            }
            _ => None,
        }
    }

    /// Opaque fill style token
    pub fn fill(&self) -> String {
        rgb(self.r.into(), self.g.into(), self.b.into())
    }

    /// Fill style token with opacity
    pub fn fill_with_opacity(&self, alpha: f64) -> String {
        rgba(self.r.into(), self.g.into(), self.b.into(), alpha)
    }
}

/// A palette mapping color tokens to RGB values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Color mappings: token name -> color
    pub colors: HashMap<String, Rgb>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette - neutral grays with blue accent and orange secondary
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
foreground-1 = "#333333"
foreground-2 = "#666666"
foreground-3 = "#999999"

background-1 = "#ffffff"
background-2 = "#f5f5f5"

accent-1 = "#2196f3"
accent-light = "#e3f2fd"
accent-dark = "#1565c0"

secondary-1 = "#ff9800"
secondary-dark = "#e65100"

status-success = "#4caf50"
status-warning = "#ff9800"
status-error = "#f44336"
"##;

impl Palette {
    /// A palette with no colors
    pub fn empty() -> Self {
        Self {
            name: None,
            colors: HashMap::new(),
        }
    }

    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        Ok(Palette {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parse_colors(parsed.colors)?,
        })
    }

    /// Build a palette from token -> hex color pairs
    pub fn from_hex_map(colors: HashMap<String, String>) -> Result<Self, PaletteError> {
        Ok(Palette {
            name: None,
            colors: parse_colors(colors)?,
        })
    }

    /// Resolve a color token
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<Rgb> {
        self.colors.get(token).copied()
    }

    /// Add every color of `other`, replacing tokens defined in both
    pub fn merge(&mut self, other: Palette) {
        if other.name.is_some() {
            self.name = other.name;
        }
        self.colors.extend(other.colors);
    }
}

fn parse_colors(colors: HashMap<String, String>) -> Result<HashMap<String, Rgb>, PaletteError> {
    colors
        .into_iter()
        .map(|(token, value)| match Rgb::from_hex(&value) {
            Some(color) => Ok((token, color)),
            None => Err(PaletteError::InvalidColor { token, value }),
        })
        .collect()
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.name, Some("default".to_string()));
        assert_eq!(palette.resolve("accent-1"), Some(Rgb::new(0x21, 0x96, 0xf3)));
        assert_eq!(palette.resolve("nonexistent"), None);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#0f8"), Some(Rgb::new(0, 255, 136)));
        assert_eq!(Rgb::from_hex("ff0000"), None);
        assert_eq!(Rgb::from_hex("#ff00"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#é00"), None);
    }

    #[test]
    fn test_fill_styles() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.fill(), "fill:rgb(255,0,0)");
        assert_eq!(
            red.fill_with_opacity(0.25),
            "fill-opacity:0.25; fill:rgb(255,0,0)"
        );
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Test Theme"

[colors]
accent-1 = "#000000"
"##;
        let palette = Palette::from_str(toml_str).expect("Should parse");
        assert_eq!(palette.name, Some("Test Theme".to_string()));
        assert_eq!(palette.resolve("accent-1"), Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_invalid_color_error() {
        let result = Palette::from_str("[colors]\nbad = \"red\"\n");
        assert!(matches!(
            result,
            Err(PaletteError::InvalidColor { ref token, .. }) if token == "bad"
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Palette::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(PaletteError::ParseError(_))));
    }

    #[test]
    fn test_merge_overrides() {
        let mut palette = Palette::default();
        let other = Palette::from_str("[colors]\naccent-1 = \"#010203\"\nextra = \"#fff\"\n")
            .expect("Should parse");
        palette.merge(other);
        assert_eq!(palette.name, Some("default".to_string()));
        assert_eq!(palette.resolve("accent-1"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(palette.resolve("extra"), Some(Rgb::new(255, 255, 255)));
        assert!(palette.resolve("status-error").is_some());
    }
}
