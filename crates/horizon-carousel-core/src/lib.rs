//! Core systems for Horizon Carousel.
//!
//! This crate provides the foundational components the carousel widget is
//! built on:
//!
//! - **Update Loop**: Periodic tick dispatch to animation listeners
//! - **Signal/Slot System**: Type-safe change notification
//! - **Logging**: Tracing targets and performance spans
//!
//! # Update Loop Example
//!
//! ```
//! use horizon_carousel_core::{TickControl, UpdateLoop};
//! use std::time::Duration;
//!
//! let mut update_loop = UpdateLoop::new();
//!
//! // A listener that stops itself after one second of animation
//! let mut elapsed = Duration::ZERO;
//! update_loop.add_listener(move |delta| {
//!     elapsed += delta;
//!     if elapsed >= Duration::from_secs(1) {
//!         TickControl::Remove
//!     } else {
//!         TickControl::Continue
//!     }
//! });
//!
//! // The host calls this once per frame
//! update_loop.dispatch(Duration::from_millis(16));
//! ```

mod error;
pub mod logging;
pub mod signal;
mod tick;

pub use error::{CoreError, Result, TickError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use tick::{ListenerId, TickControl, UpdateLoop};
