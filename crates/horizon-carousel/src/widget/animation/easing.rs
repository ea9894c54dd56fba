//! Easing presets for carousel transitions.
//!
//! Every preset is a pair of interior control points of a cubic Bézier curve
//! whose endpoints are fixed at `(0, 0)` and `(1, 1)`, the same
//! parameterization CSS uses for `cubic-bezier(x1, y1, x2, y2)`. The named
//! values are the standard ones from the easing-function literature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Interior control points of a cubic easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EasingPreset {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl EasingPreset {
    /// Create a custom preset.
    #[inline]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The control points as a tuple.
    #[inline]
    pub fn to_tuple(self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }
}

impl Default for EasingPreset {
    fn default() -> Self {
        Easing::default().preset()
    }
}

impl From<(f64, f64, f64, f64)> for EasingPreset {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<Easing> for EasingPreset {
    fn from(easing: Easing) -> Self {
        easing.preset()
    }
}

/// The named easing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    /// Overshoots on both ends; the carousel default.
    #[default]
    EaseInOutBack,
}

impl Easing {
    /// Every catalog entry, in catalog order.
    pub const ALL: [Easing; 20] = [
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
    ];

    /// The control points for this easing.
    pub const fn preset(self) -> EasingPreset {
        match self {
            Easing::EaseInSine => EasingPreset::new(0.47, 0.0, 0.745, 0.715),
            Easing::EaseOutSine => EasingPreset::new(0.39, 0.575, 0.565, 1.0),
            Easing::EaseInOutSine => EasingPreset::new(0.445, 0.05, 0.55, 0.95),
            Easing::EaseInQuad => EasingPreset::new(0.55, 0.085, 0.68, 0.53),
            Easing::EaseOutQuad => EasingPreset::new(0.25, 0.46, 0.45, 0.94),
            Easing::EaseInOutQuad => EasingPreset::new(0.455, 0.03, 0.515, 0.955),
            Easing::EaseInCubic => EasingPreset::new(0.55, 0.055, 0.675, 0.19),
            Easing::EaseOutCubic => EasingPreset::new(0.215, 0.61, 0.355, 1.0),
            Easing::EaseInQuart => EasingPreset::new(0.895, 0.03, 0.685, 0.22),
            Easing::EaseOutQuart => EasingPreset::new(0.165, 0.84, 0.44, 1.0),
            Easing::EaseInQuint => EasingPreset::new(0.755, 0.05, 0.855, 0.06),
            Easing::EaseOutQuint => EasingPreset::new(0.23, 1.0, 0.32, 1.0),
            Easing::EaseInExpo => EasingPreset::new(0.95, 0.05, 0.795, 0.035),
            Easing::EaseOutExpo => EasingPreset::new(0.19, 1.0, 0.22, 1.0),
            Easing::EaseInOutExpo => EasingPreset::new(1.0, 0.0, 0.0, 1.0),
            Easing::EaseInCirc => EasingPreset::new(0.6, 0.04, 0.98, 0.335),
            Easing::EaseInOutCirc => EasingPreset::new(0.785, 0.135, 0.15, 0.86),
            Easing::EaseInBack => EasingPreset::new(0.6, -0.28, 0.735, 0.045),
            Easing::EaseOutBack => EasingPreset::new(0.175, 0.885, 0.32, 1.275),
            Easing::EaseInOutBack => EasingPreset::new(0.68, -0.55, 0.265, 1.55),
        }
    }

    /// The conventional camelCase name, e.g. `"easeInOutBack"`.
    pub const fn name(self) -> &'static str {
        match self {
            Easing::EaseInSine => "easeInSine",
            Easing::EaseOutSine => "easeOutSine",
            Easing::EaseInOutSine => "easeInOutSine",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInExpo => "easeInExpo",
            Easing::EaseOutExpo => "easeOutExpo",
            Easing::EaseInOutExpo => "easeInOutExpo",
            Easing::EaseInCirc => "easeInCirc",
            Easing::EaseInOutCirc => "easeInOutCirc",
            Easing::EaseInBack => "easeInBack",
            Easing::EaseOutBack => "easeOutBack",
            Easing::EaseInOutBack => "easeInOutBack",
        }
    }

    /// Look up an easing by name.
    ///
    /// Matching ignores ASCII case and `-`/`_` separators, so
    /// `"easeInOutBack"`, `"ease-in-out-back"` and `"EASE_IN_OUT_BACK"` all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .into_iter()
            .find(|easing| normalize(easing.name()) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| CarouselError::invalid_argument(format!("unknown easing '{s}'")))
    }
}

/// An easing selected either by catalog name or by explicit control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingChoice {
    /// A catalog entry.
    Named(Easing),
    /// User-defined control points.
    Custom(EasingPreset),
}

impl EasingChoice {
    /// Resolve to control points.
    pub fn preset(self) -> EasingPreset {
        match self {
            EasingChoice::Named(easing) => easing.preset(),
            EasingChoice::Custom(preset) => preset,
        }
    }
}

impl Default for EasingChoice {
    fn default() -> Self {
        EasingChoice::Named(Easing::default())
    }
}

impl From<Easing> for EasingChoice {
    fn from(easing: Easing) -> Self {
        EasingChoice::Named(easing)
    }
}

impl From<EasingPreset> for EasingChoice {
    fn from(preset: EasingPreset) -> Self {
        EasingChoice::Custom(preset)
    }
}
