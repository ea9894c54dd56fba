//! Widget system for Horizon Carousel.
//!
//! This module provides the pieces a carousel is built from:
//!
//! - [`Panel`] trait: A child view whose geometry the carousel drives
//! - [`PanelHost`] trait: The index-addressable panel collection animations operate on
//! - Geometry types ([`Point`], [`Size`], [`Rect`])
//! - [`CarouselEvent`]: Input the host forwards to the carousel
//! - [`animation`]: Easing curves and the slide state machine
//! - [`widgets`]: The [`Carousel`](widgets::Carousel) container itself
//!
//! # Custom Panels
//!
//! Any type that can report and accept its geometry can live in a carousel:
//!
//! ```
//! use horizon_carousel::widget::{Panel, Rect};
//! use horizon_carousel::widget::widgets::Carousel;
//!
//! struct ImagePanel {
//!     path: String,
//!     rect: Rect,
//! }
//!
//! impl Panel for ImagePanel {
//!     fn geometry(&self) -> Rect { self.rect }
//!     fn set_geometry(&mut self, rect: Rect) { self.rect = rect; }
//! }
//!
//! let mut carousel = Carousel::new(Rect::new(0.0, 0.0, 640.0, 480.0));
//! carousel.add_panel(ImagePanel { path: "a.png".into(), rect: Rect::ZERO });
//! assert_eq!(carousel.panel(0).unwrap().rect.width(), 640.0);
//! ```

pub mod animation;
mod events;
mod geometry;
mod panel;
pub mod widgets;

pub use events::{CarouselEvent, EventBase, ResizeEvent, TapEvent};
pub use geometry::{Point, Rect, Size};
pub use panel::{Panel, PanelFrame, PanelHost, PanelStrip};
