//! Horizon Carousel - a sliding panel carousel with Bézier easing.
//!
//! This is the widget crate. It re-exports the foundation from
//! `horizon-carousel-core` (signals, the update loop, logging).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use horizon_carousel::prelude::*;
//! use parking_lot::Mutex;
//!
//! let carousel = Arc::new(Mutex::new(Carousel::new(Rect::new(0.0, 0.0, 800.0, 600.0))));
//! {
//!     let mut carousel = carousel.lock();
//!     carousel.add_panels([PanelFrame::new("intro"), PanelFrame::new("details")]);
//!     carousel.set_easing(Easing::EaseOutCubic).unwrap();
//! }
//!
//! // Let the host's update loop drive the animation
//! let mut update_loop = UpdateLoop::new();
//! let driven = Arc::clone(&carousel);
//! update_loop.add_listener(move |delta| {
//!     driven.lock().tick(delta);
//!     TickControl::Continue
//! });
//!
//! carousel.lock().handle_tap(790.0);
//! for _ in 0..40 {
//!     update_loop.dispatch(Duration::from_millis(16));
//! }
//! assert!(!carousel.lock().is_animating());
//! assert_eq!(carousel.lock().active_index(), 1);
//! ```

pub use horizon_carousel_core::*;

pub mod config;
mod error;
pub mod prelude;
pub mod widget;

pub use config::{CarouselConfig, IndicatorStyle};
pub use error::{CarouselError, Result};
