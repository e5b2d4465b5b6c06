//! Config schema and validation.

use serde::{Deserialize, Serialize};
use starfolio_core::{AnimationSpeed, ColorTheme, DEFAULT_STAR_COUNT};

use crate::ConfigError;

/// Largest accepted star batch.
const MAX_STAR_COUNT: usize = 2000;

/// Longest accepted delay between typewriter steps.
const MAX_TYPEWRITER_SPEED_MS: u64 = 5000;

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stars per generated batch.
    pub star_count: usize,
    /// Delay between typewriter reveal steps in milliseconds.
    pub typewriter_speed_ms: u64,
    /// Scroll offset (distance units) above which the scroll hint hides.
    pub scroll_hint_threshold: f32,
    pub color_theme: ColorTheme,
    pub animation_speed: AnimationSpeed,
    /// Capture mouse input for the cursor, wheel scrolling and clicks.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            typewriter_speed_ms: 80,
            scroll_hint_threshold: 100.0,
            color_theme: ColorTheme::default(),
            animation_speed: AnimationSpeed::default(),
            mouse: true,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self)
            .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_STAR_COUNT).contains(&self.star_count) {
            return Err(ConfigError::Invalid(format!(
                "star_count must be between 1 and {MAX_STAR_COUNT}, got {}",
                self.star_count
            )));
        }
        if self.typewriter_speed_ms > MAX_TYPEWRITER_SPEED_MS {
            return Err(ConfigError::Invalid(format!(
                "typewriter_speed_ms must be at most {MAX_TYPEWRITER_SPEED_MS}, got {}",
                self.typewriter_speed_ms
            )));
        }
        if !self.scroll_hint_threshold.is_finite() || self.scroll_hint_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scroll_hint_threshold must be a non-negative number, got {}",
                self.scroll_hint_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let config = Config::default();
        assert_eq!(config.star_count, 150);
        assert_eq!(config.typewriter_speed_ms, 80);
        assert_eq!(config.scroll_hint_threshold, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            color_theme = "aurora"
            animation_speed = "fast"
            "#,
        )
        .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Aurora);
        assert_eq!(config.animation_speed, AnimationSpeed::Fast);
        assert_eq!(config.star_count, 150);
        assert!(config.mouse);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            Config::from_toml("star_count = 5000"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("typewriter_speed_ms = 99999"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("scroll_hint_threshold = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(matches!(
            Config::from_toml(r#"color_theme = "plaid""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = Config {
            star_count: 300,
            color_theme: ColorTheme::Ember,
            ..Config::default()
        };
        assert_eq!(Config::from_toml(&config.to_toml()).unwrap(), config);
    }
}
