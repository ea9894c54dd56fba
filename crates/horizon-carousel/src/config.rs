//! Carousel configuration.
//!
//! A [`CarouselConfig`] collects every tunable of a carousel in one serde
//! struct so it can be loaded from TOML. Missing keys fall back to defaults.
//!
//! ```toml
//! animation_duration_ms = 350
//! auto_rotate = true
//! rotate_interval_ms = 4000
//! easing = "easeOutCubic"
//!
//! [indicator]
//! size = 10.0
//! ```
//!
//! A custom curve is given as a table instead of a name:
//!
//! ```toml
//! easing = { x1 = 0.25, y1 = 0.1, x2 = 0.25, y2 = 1.0 }
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_carousel_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};
use crate::widget::animation::{BezierCurve, CurveSampler, EasingChoice, TransitionController};

/// Geometry of the page indicator dots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorStyle {
    /// Dot diameter.
    pub size: f32,
    /// Gap between neighbouring dots.
    pub spacing: f32,
    /// Distance from the bottom edge to the top of the dot row.
    pub bottom_offset: f32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            size: 8.0,
            spacing: 8.0,
            bottom_offset: 35.0,
        }
    }
}

/// Every carousel setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Slide duration in milliseconds.
    pub animation_duration_ms: u64,
    /// Curve sampling step, in `(0, 1)`.
    pub smoothness: f64,
    /// Advance automatically.
    pub auto_rotate: bool,
    /// Time between automatic advances, in milliseconds.
    pub rotate_interval_ms: u64,
    /// Draw the page indicator dots.
    pub show_indicators: bool,
    /// Draw the previous/next chevrons.
    pub show_buttons: bool,
    /// Fraction of the width, from each edge, that reacts to taps.
    pub tap_zone: f32,
    /// Horizontal margin of the chevrons.
    pub button_margin: f32,
    /// Chevron color as `0xRRGGBB`.
    pub button_color: u32,
    /// Indicator color as `0xRRGGBB`.
    pub indicator_color: u32,
    /// Easing, by name or control points.
    pub easing: EasingChoice,
    /// Indicator geometry.
    pub indicator: IndicatorStyle,
}

impl CarouselConfig {
    /// Default tap zone: one third of the width on each side.
    pub const DEFAULT_TAP_ZONE: f32 = 1.0 / 3.0;

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| CarouselError::io(path, err))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            "loaded carousel configuration"
        );
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check every value against its domain.
    pub fn validate(&self) -> Result<()> {
        if self.animation_duration_ms == 0 {
            return Err(CarouselError::invalid_argument(
                "animation_duration_ms must be greater than zero",
            ));
        }
        CurveSampler::new(self.smoothness)?;
        if self.rotate_interval_ms == 0 {
            return Err(CarouselError::invalid_argument(
                "rotate_interval_ms must be greater than zero",
            ));
        }
        if !(self.tap_zone > 0.0 && self.tap_zone <= 0.5) {
            return Err(CarouselError::invalid_argument(format!(
                "tap_zone must be in (0, 0.5], got {}",
                self.tap_zone
            )));
        }
        let style = &self.indicator;
        for (name, value) in [
            ("indicator.size", style.size),
            ("indicator.spacing", style.spacing),
            ("indicator.bottom_offset", style.bottom_offset),
            ("button_margin", self.button_margin),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CarouselError::invalid_argument(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Slide duration.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Time between automatic advances.
    pub fn rotate_interval(&self) -> Duration {
        Duration::from_millis(self.rotate_interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: TransitionController::DEFAULT_DURATION.as_millis() as u64,
            smoothness: BezierCurve::DEFAULT_SMOOTHNESS,
            auto_rotate: false,
            rotate_interval_ms: 5000,
            show_indicators: true,
            show_buttons: true,
            tap_zone: Self::DEFAULT_TAP_ZONE,
            button_margin: 8.0,
            button_color: 0xFFFFFF,
            indicator_color: 0xFFFFFF,
            easing: EasingChoice::default(),
            indicator: IndicatorStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::animation::{Easing, EasingPreset};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.animation_duration(), Duration::from_millis(500));
        assert_eq!(config.rotate_interval(), Duration::from_secs(5));
        assert_eq!(config.easing, EasingChoice::Named(Easing::EaseInOutBack));
        assert_eq!(config.smoothness, 0.07);
        assert!(!config.auto_rotate);
        assert!(config.show_indicators && config.show_buttons);
        assert_eq!(config.indicator, IndicatorStyle::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CarouselConfig::from_toml_str(
            r#"
            animation_duration_ms = 350
            easing = "easeOutCubic"

            [indicator]
            size = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(config.animation_duration_ms, 350);
        assert_eq!(config.easing, EasingChoice::Named(Easing::EaseOutCubic));
        assert_eq!(config.indicator.size, 10.0);
        assert_eq!(config.indicator.spacing, 8.0);
        assert_eq!(config.rotate_interval_ms, 5000);
    }

    #[test]
    fn test_custom_easing_table() {
        let config = CarouselConfig::from_toml_str(
            "easing = { x1 = 0.25, y1 = 0.1, x2 = 0.25, y2 = 1.0 }",
        )
        .unwrap();
        assert_eq!(
            config.easing,
            EasingChoice::Custom(EasingPreset::new(0.25, 0.1, 0.25, 1.0))
        );
    }

    #[test]
    fn test_round_trip() {
        let config = CarouselConfig {
            auto_rotate: true,
            tap_zone: 0.25,
            easing: EasingChoice::Named(Easing::EaseInOutExpo),
            ..CarouselConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(CarouselConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation() {
        let cases = [
            "animation_duration_ms = 0",
            "smoothness = 1.0",
            "smoothness = 0.0",
            "smoothness = 1e-300",
            "rotate_interval_ms = 0",
            "tap_zone = 0.0",
            "tap_zone = 0.75",
            "button_margin = -1.0",
            "[indicator]\nsize = -2.0",
        ];
        for text in cases {
            let err = CarouselConfig::from_toml_str(text).unwrap_err();
            assert!(err.is_invalid_argument(), "{text}: {err}");
        }
    }

    #[test]
    fn test_unknown_easing_name_is_a_parse_error() {
        let err = CarouselConfig::from_toml_str("easing = \"bounce\"").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auto_rotate = true").unwrap();
        writeln!(file, "rotate_interval_ms = 1500").unwrap();

        let config = CarouselConfig::load(file.path()).unwrap();
        assert!(config.auto_rotate);
        assert_eq!(config.rotate_interval(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CarouselConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CarouselError::Io { .. }));
    }
}
