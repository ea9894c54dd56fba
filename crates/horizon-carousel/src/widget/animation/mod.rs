//! Animation support for carousel slides.
//!
//! This module provides Bézier easing curves, the named easing catalog, and
//! the transition state machine that moves panels during a slide.
//!
//! # Easing Curves
//!
//! An easing curve maps a normalized time `t` (0.0 to 1.0) to animation
//! progress. Progress usually stays in `[0, 1]`, but "back" curves overshoot.
//!
//! # Example
//!
//! ```
//! use horizon_carousel::widget::animation::{BezierCurve, Easing};
//!
//! let curve = BezierCurve::from_preset(Easing::EaseOutCubic.preset()).unwrap();
//! let eased = curve.progress_at(0.5).unwrap();
//! assert!(eased > 0.5);
//! ```

mod bezier;
mod easing;
mod transition;

pub use bezier::{BezierCurve, CurveSampler, Point2D};
pub use easing::{Easing, EasingChoice, EasingPreset};
pub use transition::{
    PanelRole, Participant, SlideDirection, TickOutcome, TransitionController, TransitionState,
};
