//! Colour themes and animation speed presets.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colour theme for the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Nebula,
    Aurora,
    Ember,
    Mono,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(&self) -> Self {
        match self {
            ColorTheme::Nebula => ColorTheme::Aurora,
            ColorTheme::Aurora => ColorTheme::Ember,
            ColorTheme::Ember => ColorTheme::Mono,
            ColorTheme::Mono => ColorTheme::Nebula,
        }
    }

    /// Human readable theme name.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Nebula => "nebula",
            ColorTheme::Aurora => "aurora",
            ColorTheme::Ember => "ember",
            ColorTheme::Mono => "mono",
        }
    }

    /// Left, middle and right stops of the title gradient.
    pub fn title_gradient(self) -> [Color; 3] {
        match self {
            ColorTheme::Nebula => [
                Color::Rgb(96, 165, 250),
                Color::Rgb(192, 132, 252),
                Color::Rgb(244, 114, 182),
            ],
            ColorTheme::Aurora => [
                Color::Rgb(74, 222, 128),
                Color::Rgb(34, 211, 238),
                Color::Rgb(96, 165, 250),
            ],
            ColorTheme::Ember => [
                Color::Rgb(250, 204, 21),
                Color::Rgb(251, 146, 60),
                Color::Rgb(248, 113, 113),
            ],
            ColorTheme::Mono => [
                Color::Rgb(250, 250, 250),
                Color::Rgb(212, 212, 216),
                Color::Rgb(161, 161, 170),
            ],
        }
    }

    /// Top, middle and bottom stops of the page backdrop as RGB triples.
    pub fn backdrop(self) -> [(u8, u8, u8); 3] {
        match self {
            ColorTheme::Nebula => [(30, 27, 75), (59, 7, 100), (0, 0, 0)],
            ColorTheme::Aurora => [(4, 47, 46), (8, 51, 68), (0, 0, 0)],
            ColorTheme::Ember => [(69, 10, 10), (67, 20, 7), (0, 0, 0)],
            ColorTheme::Mono => [(39, 39, 42), (24, 24, 27), (0, 0, 0)],
        }
    }

    /// Accent used for key hints and the scroll hint border.
    pub fn accent(self) -> Color {
        self.title_gradient()[1]
    }
}

/// Speed preset for background animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Full twinkle cycle of a star.
    pub fn star_twinkle_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 4500,
            AnimationSpeed::Medium => 3000,
            AnimationSpeed::Fast => 1800,
        }
    }

    /// Time for a nebula glow to complete one drift loop.
    pub fn nebula_drift_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 60_000,
            AnimationSpeed::Medium => 40_000,
            AnimationSpeed::Fast => 20_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..4 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Nebula);
    }

    #[test]
    fn faster_speed_twinkles_faster() {
        assert!(
            AnimationSpeed::Fast.star_twinkle_period_ms()
                < AnimationSpeed::Slow.star_twinkle_period_ms()
        );
    }

    #[test]
    fn backdrop_fades_to_black() {
        for theme in [
            ColorTheme::Nebula,
            ColorTheme::Aurora,
            ColorTheme::Ember,
            ColorTheme::Mono,
        ] {
            assert_eq!(theme.backdrop()[2], (0, 0, 0));
        }
    }
}
