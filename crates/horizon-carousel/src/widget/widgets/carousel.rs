//! Carousel widget implementation.
//!
//! This module provides [`Carousel`], a container that shows one panel at a
//! time and slides between panels with an eased horizontal animation.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_carousel::widget::widgets::Carousel;
//! use horizon_carousel::widget::{Panel, PanelFrame, Rect};
//!
//! let mut carousel = Carousel::new(Rect::new(0.0, 0.0, 320.0, 240.0));
//! carousel.add_panels([PanelFrame::new("a"), PanelFrame::new("b"), PanelFrame::new("c")]);
//!
//! // Connect to page changes
//! carousel.current_changed.connect(|&index| {
//!     println!("Sliding to panel {index}");
//! });
//!
//! // A tap on the right edge slides forward
//! assert!(carousel.handle_tap(310.0));
//! assert_eq!(carousel.active_index(), 1);
//!
//! // The host drives the animation from its update loop
//! while carousel.is_animating() {
//!     carousel.tick(Duration::from_millis(16));
//! }
//! assert_eq!(carousel.panel(1).unwrap().geometry().x(), 0.0);
//! ```

use std::time::Duration;

use horizon_carousel_core::Signal;
use horizon_carousel_core::logging::targets;

use crate::config::{CarouselConfig, IndicatorStyle};
use crate::error::{CarouselError, Result};
use crate::widget::animation::{EasingPreset, SlideDirection, TickOutcome, TransitionController};
use crate::widget::events::CarouselEvent;
use crate::widget::geometry::{Rect, Size};
use crate::widget::panel::{Panel, PanelFrame, PanelHost, PanelStrip};

/// Placement of the page indicator dots.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorLayout {
    /// One rect per panel, left to right.
    pub dots: Vec<Rect>,
    /// Index of the highlighted dot.
    pub active: usize,
}

impl IndicatorLayout {
    /// The highlighted dot.
    pub fn active_dot(&self) -> Option<Rect> {
        self.dots.get(self.active).copied()
    }
}

/// Placement of the previous/next chevrons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    /// The chevron on the left edge.
    pub backward: Rect,
    /// The chevron on the right edge.
    pub forward: Rect,
}

/// A container that shows one panel at a time and slides between them.
///
/// Panels are laid out to fill the viewport. The active panel sits at
/// `x = 0`; the others wait off the right edge until a slide brings them in.
///
/// # Features
///
/// - Eased slides driven by [`tick`](Self::tick)
/// - Edge taps that slide forward or backward
/// - Optional automatic rotation
/// - Indicator and button geometry for the host to draw
///
/// # Signals
///
/// - `current_changed(usize)`: Emitted when the active index changes
/// - `transition_started(SlideDirection)`: Emitted when a slide begins
/// - `transition_finished(usize)`: Emitted when a slide settles
pub struct Carousel<P: Panel = PanelFrame> {
    /// Panels and viewport.
    strip: PanelStrip<P>,

    /// Slide state machine.
    controller: TransitionController,

    /// Automatic rotation.
    auto_rotate: bool,
    rotate_interval: Duration,
    rotate_elapsed: Duration,

    /// Fraction of the width, from each edge, that reacts to taps.
    tap_zone: f32,

    show_indicators: bool,
    indicator_style: IndicatorStyle,
    indicator_color: u32,

    show_buttons: bool,
    button_margin: f32,
    button_color: u32,

    /// Signal emitted when the active index changes.
    pub current_changed: Signal<usize>,

    /// Signal emitted when a slide begins.
    pub transition_started: Signal<SlideDirection>,

    /// Signal emitted when a slide settles, with the active index.
    pub transition_finished: Signal<usize>,
}

impl<P: Panel> Carousel<P> {
    /// Create an empty carousel filling `viewport`.
    pub fn new(viewport: Rect) -> Self {
        let defaults = CarouselConfig::default();
        Self {
            strip: PanelStrip::new(viewport),
            controller: TransitionController::new(),
            auto_rotate: defaults.auto_rotate,
            rotate_interval: defaults.rotate_interval(),
            rotate_elapsed: Duration::ZERO,
            tap_zone: defaults.tap_zone,
            show_indicators: defaults.show_indicators,
            indicator_style: defaults.indicator,
            indicator_color: defaults.indicator_color,
            show_buttons: defaults.show_buttons,
            button_margin: defaults.button_margin,
            button_color: defaults.button_color,
            current_changed: Signal::new(),
            transition_started: Signal::new(),
            transition_finished: Signal::new(),
        }
    }

    /// Create an empty carousel from a configuration.
    pub fn from_config(viewport: Rect, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;

        let mut carousel = Self::new(viewport);
        carousel.controller.set_smoothness(config.smoothness)?;
        carousel.controller.set_easing(config.easing.preset())?;
        carousel
            .controller
            .set_animation_duration(config.animation_duration())?;
        carousel.auto_rotate = config.auto_rotate;
        carousel.rotate_interval = config.rotate_interval();
        carousel.tap_zone = config.tap_zone;
        carousel.show_indicators = config.show_indicators;
        carousel.indicator_style = config.indicator;
        carousel.indicator_color = config.indicator_color;
        carousel.show_buttons = config.show_buttons;
        carousel.button_margin = config.button_margin;
        carousel.button_color = config.button_color;
        Ok(carousel)
    }

    // =========================================================================
    // Panel Management
    // =========================================================================

    /// Append a panel.
    ///
    /// The first panel fills the viewport; later ones wait off the right edge.
    /// Returns the index of the new panel.
    pub fn add_panel(&mut self, mut panel: P) -> usize {
        self.finish_transition();

        let index = self.strip.panels().len();
        let x = if index == 0 {
            0.0
        } else {
            self.strip.viewport_width()
        };
        panel.set_geometry(self.strip.slot_at(x));
        self.strip.panels_mut().push(panel);
        self.strip.request_repaint();

        tracing::trace!(target: targets::CAROUSEL, index, "panel added");
        index
    }

    /// Append several panels.
    pub fn add_panels(&mut self, panels: impl IntoIterator<Item = P>) {
        for panel in panels {
            self.add_panel(panel);
        }
    }

    /// Insert a panel at `index`, clamped to the panel count.
    ///
    /// The active panel stays active; its index shifts if the new panel is
    /// inserted before it. Returns the actual insertion index.
    pub fn insert_panel(&mut self, index: usize, mut panel: P) -> usize {
        self.finish_transition();

        let count = self.strip.panels().len();
        let index = index.min(count);
        let x = if count == 0 {
            0.0
        } else {
            self.strip.viewport_width()
        };
        panel.set_geometry(self.strip.slot_at(x));
        self.strip.panels_mut().insert(index, panel);

        let active = self.controller.active_index();
        if count > 0 && index <= active {
            self.controller.set_active_index(active + 1);
            self.current_changed.emit(active + 1);
        }
        self.strip.request_repaint();

        tracing::trace!(target: targets::CAROUSEL, index, "panel inserted");
        index
    }

    /// Remove the panel at `index`.
    ///
    /// Removing the active panel activates its successor (or the new last
    /// panel). Returns the removed panel, if any.
    pub fn remove_panel(&mut self, index: usize) -> Option<P> {
        self.finish_transition();

        if index >= self.strip.panels().len() {
            return None;
        }
        let panel = self.strip.panels_mut().remove(index);
        let count = self.strip.panels().len();

        let active = self.controller.active_index();
        if index < active {
            self.controller.set_active_index(active - 1);
            self.current_changed.emit(active - 1);
        } else if index == active && count > 0 {
            let new_active = active.min(count - 1);
            self.controller.set_active_index(new_active);
            self.layout_panels();
            self.current_changed.emit(new_active);
        }
        self.strip.request_repaint();

        tracing::trace!(target: targets::CAROUSEL, index, "panel removed");
        Some(panel)
    }

    /// Replace the panel at `index`.
    ///
    /// The new panel takes over the old panel's geometry. Returns the old
    /// panel, or `None` (dropping `panel`) when `index` is out of range.
    pub fn set_panel(&mut self, index: usize, mut panel: P) -> Option<P> {
        self.finish_transition();

        let slot = self.strip.panels_mut().get_mut(index)?;
        panel.set_geometry(slot.geometry());
        let old = std::mem::replace(slot, panel);
        self.strip.request_repaint();
        Some(old)
    }

    /// Get the panel at `index`.
    pub fn panel(&self, index: usize) -> Option<&P> {
        self.strip.panels().get(index)
    }

    /// Get mutable access to the panel at `index`.
    pub fn panel_mut(&mut self, index: usize) -> Option<&mut P> {
        self.strip.panels_mut().get_mut(index)
    }

    /// All panels, in order.
    pub fn panels(&self) -> &[P] {
        self.strip.panels()
    }

    /// Get the number of panels.
    pub fn panel_count(&self) -> usize {
        self.strip.panel_count()
    }

    /// Check if the carousel has no panels.
    pub fn is_empty(&self) -> bool {
        self.strip.panels().is_empty()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The visible area.
    pub fn viewport(&self) -> Rect {
        self.strip.viewport()
    }

    /// Resize the carousel.
    ///
    /// Every panel is resized to the viewport; the active one is placed at
    /// `x = 0` and the others off the right edge.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.finish_transition();
        self.strip.set_viewport(viewport);
        self.layout_panels();
        self.strip.request_repaint();
    }

    fn layout_panels(&mut self) {
        let active = self.controller.active_index();
        let resting = self.strip.slot_at(self.strip.viewport_width());
        let current = self.strip.slot_at(0.0);
        for (index, panel) in self.strip.panels_mut().iter_mut().enumerate() {
            panel.set_geometry(if index == active { current } else { resting });
        }
    }

    // =========================================================================
    // Current Panel
    // =========================================================================

    /// The active panel index.
    ///
    /// While a slide runs this is the panel being slid to.
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Jump to a panel without animating.
    ///
    /// A running slide is finished first. Returns `false` if `index` is out
    /// of range.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if index >= self.strip.panels().len() {
            return false;
        }
        self.finish_transition();

        let changed = index != self.controller.active_index();
        self.controller.set_active_index(index);
        self.layout_panels();
        self.strip.request_repaint();
        if changed {
            self.current_changed.emit(index);
        }
        true
    }

    // =========================================================================
    // Slides
    // =========================================================================

    /// Start a slide in `direction`.
    ///
    /// Returns `false` when a slide is already running or there is no panel
    /// that way.
    pub fn slide(&mut self, direction: SlideDirection) -> bool {
        if !self.controller.begin(direction, &mut self.strip) {
            return false;
        }
        let active = self.controller.active_index();
        tracing::debug!(
            target: targets::CAROUSEL,
            ?direction,
            active,
            "slide requested"
        );
        self.transition_started.emit(direction);
        self.current_changed.emit(active);
        true
    }

    /// Handle a tap at horizontal position `x`.
    ///
    /// Taps in the right zone slide forward, taps in the left zone slide
    /// backward. Any edge tap restarts the auto-rotate countdown. Returns
    /// `true` if a slide began.
    pub fn handle_tap(&mut self, x: f32) -> bool {
        let width = self.strip.viewport_width();
        let count = self.strip.panels().len();
        let active = self.controller.active_index();

        if x >= width * (1.0 - self.tap_zone) {
            self.rotate_elapsed = Duration::ZERO;
            active + 1 < count && self.slide(SlideDirection::Forward)
        } else if x <= width * self.tap_zone {
            self.rotate_elapsed = Duration::ZERO;
            active > 0 && self.slide(SlideDirection::Backward)
        } else {
            false
        }
    }

    /// Handle a carousel event.
    ///
    /// Returns `true` and accepts the event if it was handled.
    pub fn handle_event(&mut self, event: &mut CarouselEvent) -> bool {
        let handled = match event {
            CarouselEvent::Forward(_) => self.slide(SlideDirection::Forward),
            CarouselEvent::Backward(_) => self.slide(SlideDirection::Backward),
            CarouselEvent::Tap(tap) => self.handle_tap(tap.local_pos.x),
            CarouselEvent::Resize(resize) => {
                let viewport = self.strip.viewport().with_size(resize.new_size);
                self.set_viewport(viewport);
                true
            }
        };
        if handled {
            event.accept();
        }
        handled
    }

    /// Advance animations by `delta`.
    ///
    /// Call this from the host's update loop.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        let outcome = self.tick_controller(delta);
        self.advance_rotation(delta);
        outcome
    }

    fn advance_rotation(&mut self, delta: Duration) {
        if !self.auto_rotate {
            return;
        }
        let count = self.strip.panels().len();
        if count == 0 || self.controller.active_index() + 1 >= count {
            return;
        }

        self.rotate_elapsed = self.rotate_elapsed.saturating_add(delta);
        if self.rotate_elapsed >= self.rotate_interval {
            tracing::trace!(target: targets::CAROUSEL, "auto rotation");
            // Same as a tap on the right edge
            self.handle_tap(self.strip.viewport_width());
        }
    }

    /// Jump a running slide to its end.
    fn finish_transition(&mut self) {
        if self.controller.is_animating() {
            let duration = self.controller.animation_duration();
            self.tick_controller(duration);
        }
    }

    fn tick_controller(&mut self, delta: Duration) -> TickOutcome {
        let outcome = self.controller.tick(delta, &mut self.strip);
        if let TickOutcome::Finished { active_index } = outcome {
            self.transition_finished.emit(active_index);
        }
        outcome
    }

    /// Check if a slide is running.
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// The slide state machine.
    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    // =========================================================================
    // Animation Settings
    // =========================================================================

    /// The current easing control points.
    pub fn easing(&self) -> EasingPreset {
        self.controller.easing_preset()
    }

    /// Set the easing. Takes effect immediately.
    pub fn set_easing(&mut self, easing: impl Into<EasingPreset>) -> Result<()> {
        self.controller.set_easing(easing)
    }

    /// Set easing using builder pattern.
    pub fn with_easing(mut self, easing: impl Into<EasingPreset>) -> Result<Self> {
        self.set_easing(easing)?;
        Ok(self)
    }

    /// Get the slide duration.
    pub fn animation_duration(&self) -> Duration {
        self.controller.animation_duration()
    }

    /// Set the slide duration.
    pub fn set_animation_duration(&mut self, duration: Duration) -> Result<()> {
        self.controller.set_animation_duration(duration)
    }

    // =========================================================================
    // Auto Rotation
    // =========================================================================

    /// Check if automatic rotation is enabled.
    pub fn is_auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Enable or disable automatic rotation.
    ///
    /// Enabling restarts the countdown.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if enabled && !self.auto_rotate {
            self.rotate_elapsed = Duration::ZERO;
        }
        self.auto_rotate = enabled;
    }

    /// Get the time between automatic advances.
    pub fn rotate_interval(&self) -> Duration {
        self.rotate_interval
    }

    /// Set the time between automatic advances. Zero is rejected.
    pub fn set_rotate_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(CarouselError::invalid_argument(
                "rotate interval must be greater than zero",
            ));
        }
        self.rotate_interval = interval;
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Get the tap zone fraction.
    pub fn tap_zone(&self) -> f32 {
        self.tap_zone
    }

    /// Set the fraction of the width, from each edge, that reacts to taps.
    ///
    /// Must be in `(0, 0.5]`.
    pub fn set_tap_zone(&mut self, zone: f32) -> Result<()> {
        if !(zone > 0.0 && zone <= 0.5) {
            return Err(CarouselError::invalid_argument(format!(
                "tap zone must be in (0, 0.5], got {zone}"
            )));
        }
        self.tap_zone = zone;
        Ok(())
    }

    // =========================================================================
    // Indicators
    // =========================================================================

    /// Check if indicators are shown.
    pub fn shows_indicators(&self) -> bool {
        self.show_indicators
    }

    /// Show or hide the indicators.
    pub fn set_show_indicators(&mut self, show: bool) {
        self.show_indicators = show;
        self.strip.request_repaint();
    }

    /// Get the indicator geometry.
    pub fn indicator_style(&self) -> IndicatorStyle {
        self.indicator_style
    }

    /// Set the indicator geometry.
    pub fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.indicator_style = style;
        self.strip.request_repaint();
    }

    /// Get the indicator color as `0xRRGGBB`.
    pub fn indicator_color(&self) -> u32 {
        self.indicator_color
    }

    /// Set the indicator color as `0xRRGGBB`.
    pub fn set_indicator_color(&mut self, color: u32) {
        self.indicator_color = color;
        self.strip.request_repaint();
    }

    /// Top of the indicator row.
    fn indicator_y(&self) -> f32 {
        self.strip.viewport().height() - self.indicator_style.bottom_offset
    }

    /// Where to draw the indicator dots.
    ///
    /// The row is centered horizontally. Returns `None` when indicators are
    /// hidden or there are no panels.
    pub fn indicator_layout(&self) -> Option<IndicatorLayout> {
        let count = self.strip.panels().len();
        if !self.show_indicators || count == 0 {
            return None;
        }

        let IndicatorStyle { size, spacing, .. } = self.indicator_style;
        let pitch = size + spacing;
        let total = count as f32 * pitch - spacing;
        let x0 = (self.strip.viewport_width() - total) / 2.0;
        let y = self.indicator_y();

        let dots = (0..count)
            .map(|i| Rect::new(x0 + i as f32 * pitch, y, size, size))
            .collect();
        Some(IndicatorLayout {
            dots,
            active: self.controller.active_index(),
        })
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    /// Check if buttons are shown.
    pub fn shows_buttons(&self) -> bool {
        self.show_buttons
    }

    /// Show or hide the buttons.
    pub fn set_show_buttons(&mut self, show: bool) {
        self.show_buttons = show;
        self.strip.request_repaint();
    }

    /// Get the button color as `0xRRGGBB`.
    pub fn button_color(&self) -> u32 {
        self.button_color
    }

    /// Set the button color as `0xRRGGBB`.
    pub fn set_button_color(&mut self, color: u32) {
        self.button_color = color;
        self.strip.request_repaint();
    }

    /// Get the button margin.
    pub fn button_margin(&self) -> f32 {
        self.button_margin
    }

    /// Set the horizontal margin between the buttons and the edges.
    pub fn set_button_margin(&mut self, margin: f32) {
        self.button_margin = margin;
        self.strip.request_repaint();
    }

    /// Where to draw the chevrons, given the glyph size.
    ///
    /// Both chevrons are vertically centered in the area above the indicator
    /// row. Returns `None` when buttons are hidden.
    pub fn button_layout(&self, glyph: Size) -> Option<ButtonLayout> {
        if !self.show_buttons {
            return None;
        }

        let center = (self.indicator_y() - glyph.height) / 2.0;
        let top = center - glyph.height / 2.0;
        let width = self.strip.viewport_width();
        Some(ButtonLayout {
            backward: Rect::new(self.button_margin, top, glyph.width, glyph.height),
            forward: Rect::new(
                width - glyph.width - self.button_margin,
                top,
                glyph.width,
                glyph.height,
            ),
        })
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Check if a repaint was requested since the last
    /// [`take_repaint_request`](Self::take_repaint_request).
    pub fn needs_repaint(&self) -> bool {
        self.strip.repaint_requested()
    }

    /// Return and clear the repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        self.strip.take_repaint_request()
    }
}

static_assertions::assert_impl_all!(Carousel: Send, Sync);
