//! Standard widgets for Horizon Carousel.
//!
//! - [`Carousel`]: Slides between panels one at a time

mod carousel;

pub use carousel::{ButtonLayout, Carousel, IndicatorLayout};
