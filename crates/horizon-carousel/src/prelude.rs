//! Prelude module for Horizon Carousel.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_carousel::prelude::*;
//! ```
//!
//! This provides access to:
//! - The carousel widget and its panels (`Carousel`, `PanelFrame`, `Panel`)
//! - Easing and transitions (`Easing`, `EasingPreset`, `BezierCurve`, `SlideDirection`)
//! - Signals and the update loop (`Signal`, `UpdateLoop`, `TickControl`)
//! - Geometry types (`Point`, `Size`, `Rect`)

// ============================================================================
// Signal/Slot and Update Loop
// ============================================================================

pub use horizon_carousel_core::{ConnectionId, Signal, TickControl, UpdateLoop};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::Carousel;
pub use crate::widget::{CarouselEvent, Panel, PanelFrame, PanelHost};

// ============================================================================
// Animation
// ============================================================================

pub use crate::widget::animation::{
    BezierCurve, Easing, EasingChoice, EasingPreset, SlideDirection, TickOutcome,
    TransitionController,
};

// ============================================================================
// Geometry
// ============================================================================

pub use crate::widget::{Point, Rect, Size};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::CarouselConfig;
pub use crate::error::CarouselError;
