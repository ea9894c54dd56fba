//! Carousel event types.
//!
//! Hosts translate their own input into these events and hand them to
//! [`Carousel::handle_event`](crate::widget::widgets::Carousel::handle_event).
//! A handled event is marked accepted so the host can stop propagating it.
//!
//! ```
//! use horizon_carousel::widget::{CarouselEvent, Point, Rect};
//! use horizon_carousel::widget::widgets::Carousel;
//! use horizon_carousel::widget::PanelFrame;
//!
//! let mut carousel = Carousel::new(Rect::new(0.0, 0.0, 300.0, 200.0));
//! carousel.add_panel(PanelFrame::new("one"));
//! carousel.add_panel(PanelFrame::new("two"));
//!
//! // A press in the right third slides forward
//! let mut event = CarouselEvent::tap(Point::new(290.0, 100.0));
//! assert!(carousel.handle_event(&mut event));
//! assert!(event.is_accepted());
//! ```

use super::animation::SlideDirection;
use super::geometry::{Point, Size};

/// Common data for all carousel events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A press or touch on the carousel.
#[derive(Debug, Clone, Copy)]
pub struct TapEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in carousel-local coordinates.
    pub local_pos: Point,
}

impl TapEvent {
    /// Create a new tap event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Resize event, sent when the carousel's size changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The old size.
    pub old_size: Size,
    /// The new size.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// Events a carousel responds to.
#[derive(Debug, Clone, Copy)]
pub enum CarouselEvent {
    /// Request a forward slide.
    Forward(EventBase),
    /// Request a backward slide.
    Backward(EventBase),
    /// A tap, classified by edge zone.
    Tap(TapEvent),
    /// The carousel was resized.
    Resize(ResizeEvent),
}

impl CarouselEvent {
    /// A forward slide request.
    pub fn forward() -> Self {
        Self::Forward(EventBase::new())
    }

    /// A backward slide request.
    pub fn backward() -> Self {
        Self::Backward(EventBase::new())
    }

    /// A slide request in the given direction.
    pub fn slide(direction: SlideDirection) -> Self {
        match direction {
            SlideDirection::Forward => Self::forward(),
            SlideDirection::Backward => Self::backward(),
        }
    }

    /// A tap at `local_pos`.
    pub fn tap(local_pos: Point) -> Self {
        Self::Tap(TapEvent::new(local_pos))
    }

    /// A resize from `old_size` to `new_size`.
    pub fn resize(old_size: Size, new_size: Size) -> Self {
        Self::Resize(ResizeEvent::new(old_size, new_size))
    }

    fn base(&self) -> &EventBase {
        match self {
            Self::Forward(base) | Self::Backward(base) => base,
            Self::Tap(e) => &e.base,
            Self::Resize(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Forward(base) | Self::Backward(base) => base,
            Self::Tap(e) => &mut e.base,
            Self::Resize(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}
