//! Logging facilities for Horizon Carousel.
//!
//! Horizon Carousel uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_carousel=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so a filter such as
//! `horizon_carousel::transition=trace` isolates the animation state machine.

/// Span names used throughout Horizon Carousel for tracing.
pub mod span_names {
    /// Update loop dispatch span.
    pub const UPDATE_LOOP: &str = "horizon_carousel::update_loop";
    /// Curve sampling span.
    pub const CURVE_SAMPLING: &str = "horizon_carousel::curve_sampling";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_carousel_core";
    /// Update loop (tick dispatch) target.
    pub const TICK: &str = "horizon_carousel_core::tick";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_carousel_core::signal";
    /// Bézier curve construction and lookup target.
    pub const BEZIER: &str = "horizon_carousel::bezier";
    /// Transition state machine target.
    pub const TRANSITION: &str = "horizon_carousel::transition";
    /// Carousel widget target.
    pub const CAROUSEL: &str = "horizon_carousel::carousel";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_carousel::config";
    /// Performance span target.
    pub const PERF: &str = "horizon_carousel::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::TICK, targets::SIGNAL] {
            assert!(target.starts_with(targets::CORE));
        }
        for target in [
            targets::BEZIER,
            targets::TRANSITION,
            targets::CAROUSEL,
            targets::CONFIG,
            targets::PERF,
        ] {
            assert!(target.starts_with("horizon_carousel::"));
        }
    }
}
