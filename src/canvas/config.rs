//! Configuration for SVG document output

use serde::{Deserialize, Deserializer};

const DEFAULT_COMMENT: &str = "Generated by svg-canvas";

/// Configuration options for a canvas
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Comment written right after the root `<svg>` tag
    ///
    /// TOML has no null, so an empty string turns the comment off.
    #[serde(deserialize_with = "empty_as_none")]
    pub generator_comment: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            generator_comment: Some(DEFAULT_COMMENT.to_string()),
        }
    }
}

impl CanvasConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator comment
    pub fn with_generator_comment(mut self, comment: impl Into<String>) -> Self {
        self.generator_comment = Some(comment.into());
        self
    }

    /// Omit the generator comment
    pub fn without_generator_comment(mut self) -> Self {
        self.generator_comment = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CanvasConfig::default();
        assert_eq!(
            config.generator_comment,
            Some("Generated by svg-canvas".to_string())
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = CanvasConfig::new().with_generator_comment("made by hand");
        assert_eq!(config.generator_comment, Some("made by hand".to_string()));

        let config = config.without_generator_comment();
        assert_eq!(config.generator_comment, None);
    }

    #[test]
    fn test_deserialize_missing_fields_uses_defaults() {
        let config: CanvasConfig = toml::from_str("").unwrap();
        assert_eq!(config, CanvasConfig::default());
    }

    #[test]
    fn test_deserialize_empty_comment_disables_it() {
        let config: CanvasConfig = toml::from_str("generator_comment = \"\"").unwrap();
        assert_eq!(config.generator_comment, None);

        let config: CanvasConfig = toml::from_str("generator_comment = \"mine\"").unwrap();
        assert_eq!(config.generator_comment, Some("mine".to_string()));
    }
}
