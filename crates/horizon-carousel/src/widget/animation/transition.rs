//! Slide transition state machine.
//!
//! A [`TransitionController`] moves up to three panels horizontally while a
//! slide is running: the panel leaving the viewport, the panel entering it,
//! and an optional trailing panel chained behind the incoming one so that
//! overshooting curves never expose an empty gap. Panel positions are a
//! function of eased progress, which the controller reads from its
//! [`BezierCurve`].
//!
//! The controller never owns panels. Every call that touches geometry takes
//! the [`PanelHost`] that does.

use std::sync::Arc;
use std::time::Duration;

use horizon_carousel_core::logging::targets;

use crate::error::{CarouselError, Result};
use crate::widget::panel::PanelHost;

use super::bezier::BezierCurve;
use super::easing::EasingPreset;

/// Direction of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    /// Advance to the next panel.
    Forward,
    /// Return to the previous panel.
    Backward,
}

impl SlideDirection {
    /// Left edge of the incoming panel at the given eased progress.
    pub fn incoming_x(self, progress: f64, width: f32) -> f32 {
        let width = f64::from(width);
        let x = match self {
            SlideDirection::Forward => -(progress * width - width),
            SlideDirection::Backward => progress * width - width,
        };
        x as f32
    }
}

/// The part a panel plays in a running slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelRole {
    /// The panel that was active when the slide began.
    Outgoing,
    /// The panel becoming active.
    Incoming,
    /// The panel after the incoming one, chained behind it.
    Trailing,
}

impl PanelRole {
    /// Left edge for a panel in this role.
    ///
    /// Every role is positioned relative to the incoming panel's left edge.
    /// `own_width` is the width of the panel being placed.
    pub fn offset(
        self,
        direction: SlideDirection,
        incoming_x: f32,
        incoming_width: f32,
        own_width: f32,
    ) -> f32 {
        match (direction, self) {
            (_, PanelRole::Incoming) => incoming_x,
            (SlideDirection::Forward, PanelRole::Outgoing) => incoming_x - own_width,
            (SlideDirection::Forward, PanelRole::Trailing) => incoming_x + incoming_width,
            (SlideDirection::Backward, PanelRole::Outgoing) => incoming_x + incoming_width,
            (SlideDirection::Backward, PanelRole::Trailing) => incoming_x - own_width,
        }
    }
}

/// A panel taking part in a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    /// What the panel does in the slide.
    pub role: PanelRole,
    /// Index of the panel in its host.
    pub index: usize,
}

/// Current state of a transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransitionState {
    /// No slide in progress.
    #[default]
    Idle,
    /// A slide is running.
    Running {
        /// Direction of the slide.
        direction: SlideDirection,
        /// Time accumulated from ticks since the slide began.
        elapsed: Duration,
        /// Outgoing, incoming and (optionally) trailing panels, in that order.
        participants: Vec<Participant>,
    },
}

impl TransitionState {
    /// Check if a slide is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }
}

/// Result of delivering one tick to a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing was running; the tick was ignored.
    Idle,
    /// The slide advanced and is still running.
    Running {
        /// Eased progress after this tick.
        progress: f64,
    },
    /// The slide reached its duration and stopped.
    Finished {
        /// The now settled active index.
        active_index: usize,
    },
}

/// Drives slide transitions between the panels of a [`PanelHost`].
///
/// # Active index contract
///
/// [`begin`](Self::begin) updates the active index immediately. While a slide
/// is running, [`active_index`](Self::active_index) names the panel being
/// slid *to*, not the one most visible on screen.
#[derive(Debug, Clone)]
pub struct TransitionController {
    curve: Arc<BezierCurve>,
    easing: EasingPreset,
    smoothness: f64,
    duration: Duration,
    state: TransitionState,
    active_index: usize,
}

impl TransitionController {
    /// Default slide duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

    /// Create an idle controller with the default easing and duration.
    pub fn new() -> Self {
        Self {
            curve: Arc::new(BezierCurve::default()),
            easing: EasingPreset::default(),
            smoothness: BezierCurve::DEFAULT_SMOOTHNESS,
            duration: Self::DEFAULT_DURATION,
            state: TransitionState::Idle,
            active_index: 0,
        }
    }

    /// Create an idle controller with a specific easing.
    pub fn with_easing(easing: impl Into<EasingPreset>) -> Result<Self> {
        let mut controller = Self::new();
        controller.set_easing(easing)?;
        Ok(controller)
    }

    // =========================================================================
    // Easing
    // =========================================================================

    /// The control points of the current easing.
    #[inline]
    pub fn easing_preset(&self) -> EasingPreset {
        self.easing
    }

    /// A handle to the current curve.
    ///
    /// The handle stays valid after the easing changes; it keeps describing
    /// the curve that was current when it was taken.
    pub fn curve(&self) -> Arc<BezierCurve> {
        Arc::clone(&self.curve)
    }

    /// Replace the easing.
    ///
    /// The new curve takes effect immediately, including for a slide that is
    /// already running.
    pub fn set_easing(&mut self, easing: impl Into<EasingPreset>) -> Result<()> {
        let easing = easing.into();
        self.curve = Arc::new(self.build_curve(easing, self.smoothness)?);
        self.easing = easing;
        tracing::debug!(
            target: targets::TRANSITION,
            x1 = easing.x1, y1 = easing.y1, x2 = easing.x2, y2 = easing.y2,
            "easing changed"
        );
        Ok(())
    }

    /// The sampling step used for the curve.
    #[inline]
    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// Rebuild the curve with a different sampling step.
    pub fn set_smoothness(&mut self, smoothness: f64) -> Result<()> {
        self.curve = Arc::new(self.build_curve(self.easing, smoothness)?);
        self.smoothness = smoothness;
        Ok(())
    }

    fn build_curve(&self, easing: EasingPreset, smoothness: f64) -> Result<BezierCurve> {
        BezierCurve::with_smoothness(easing.x1, easing.y1, easing.x2, easing.y2, smoothness)
    }

    // =========================================================================
    // Timing
    // =========================================================================

    /// How long a slide takes.
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        self.duration
    }

    /// Set how long a slide takes. Zero is rejected.
    pub fn set_animation_duration(&mut self, duration: Duration) -> Result<()> {
        if duration.is_zero() {
            return Err(CarouselError::invalid_argument(
                "animation duration must be greater than zero",
            ));
        }
        self.duration = duration;
        Ok(())
    }

    /// Eased progress at `time` into a slide.
    ///
    /// No clamping: times past the duration fail like any other fraction
    /// outside `[0, 1]`.
    pub fn progression(&self, time: Duration) -> Result<f64> {
        self.curve
            .progress_at(time.as_secs_f64() / self.duration.as_secs_f64())
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The active panel index (the target panel while a slide runs).
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Jump to an index without animating.
    ///
    /// Ignored while a slide is running.
    pub fn set_active_index(&mut self, index: usize) {
        if self.state.is_running() {
            tracing::trace!(
                target: targets::TRANSITION,
                index,
                "index change ignored while animating"
            );
            return;
        }
        self.active_index = index;
    }

    /// The full state.
    #[inline]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Whether a slide is running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_running()
    }

    /// Direction of the running slide.
    pub fn direction(&self) -> Option<SlideDirection> {
        match &self.state {
            TransitionState::Running { direction, .. } => Some(*direction),
            TransitionState::Idle => None,
        }
    }

    /// Time accumulated in the running slide, zero when idle.
    pub fn elapsed(&self) -> Duration {
        match &self.state {
            TransitionState::Running { elapsed, .. } => *elapsed,
            TransitionState::Idle => Duration::ZERO,
        }
    }

    /// Panels taking part in the running slide.
    pub fn participants(&self) -> &[Participant] {
        match &self.state {
            TransitionState::Running { participants, .. } => participants,
            TransitionState::Idle => &[],
        }
    }

    // =========================================================================
    // Driving
    // =========================================================================

    /// Start a slide.
    ///
    /// Returns `false` without touching anything when the host has fewer than
    /// two panels, when a slide is already running, or when there is no panel
    /// in `direction`. Otherwise the incoming and trailing panels are moved
    /// to their start positions, the active index moves to the incoming
    /// panel, and a repaint is requested.
    pub fn begin<H: PanelHost + ?Sized>(&mut self, direction: SlideDirection, host: &mut H) -> bool {
        let count = host.panel_count();
        if count < 2 || self.state.is_running() {
            tracing::trace!(
                target: targets::TRANSITION,
                ?direction,
                count,
                animating = self.state.is_running(),
                "begin ignored"
            );
            return false;
        }

        let outgoing = self.active_index;
        let (incoming, trailing) = match direction {
            SlideDirection::Forward => {
                let incoming = outgoing + 1;
                (incoming, Some(incoming + 1).filter(|&index| index < count))
            }
            SlideDirection::Backward => match outgoing.checked_sub(1) {
                Some(incoming) => (incoming, incoming.checked_sub(1)),
                None => (count, None),
            },
        };
        let Some(incoming_rect) = host.panel_geometry(incoming) else {
            tracing::trace!(
                target: targets::TRANSITION,
                ?direction,
                active = outgoing,
                "no panel in that direction"
            );
            return false;
        };

        let incoming_x = match direction {
            SlideDirection::Forward => -incoming_rect.width(),
            // Flush with the right edge; the first step moves it into view.
            SlideDirection::Backward => host.viewport_width(),
        };
        host.set_panel_geometry(incoming, incoming_rect.with_x(incoming_x));

        let mut participants = vec![
            Participant {
                role: PanelRole::Outgoing,
                index: outgoing,
            },
            Participant {
                role: PanelRole::Incoming,
                index: incoming,
            },
        ];
        if let Some(index) = trailing
            && let Some(rect) = host.panel_geometry(index)
        {
            let x = match direction {
                SlideDirection::Forward => -incoming_x - rect.width(),
                SlideDirection::Backward => incoming_x + incoming_rect.width(),
            };
            host.set_panel_geometry(index, rect.with_x(x));
            participants.push(Participant {
                role: PanelRole::Trailing,
                index,
            });
        }

        self.active_index = incoming;
        self.state = TransitionState::Running {
            direction,
            elapsed: Duration::ZERO,
            participants,
        };
        host.request_repaint();

        tracing::debug!(
            target: targets::TRANSITION,
            ?direction,
            from = outgoing,
            to = incoming,
            trailing = ?trailing,
            "transition started"
        );
        true
    }

    /// Advance the running slide by `delta`.
    ///
    /// Once the accumulated time reaches the duration, panels are placed at
    /// their end positions and the controller returns to idle. Ticks while
    /// idle are ignored.
    pub fn tick<H: PanelHost + ?Sized>(&mut self, delta: Duration, host: &mut H) -> TickOutcome {
        let elapsed = match &mut self.state {
            TransitionState::Idle => return TickOutcome::Idle,
            TransitionState::Running { elapsed, .. } => {
                *elapsed = elapsed.saturating_add(delta);
                *elapsed
            }
        };

        if elapsed >= self.duration {
            self.single_step(self.duration, host);
            self.state = TransitionState::Idle;
            tracing::debug!(
                target: targets::TRANSITION,
                active = self.active_index,
                "transition finished"
            );
            return TickOutcome::Finished {
                active_index: self.active_index,
            };
        }

        let progress = self.single_step(elapsed, host);
        TickOutcome::Running { progress }
    }

    /// Place every participant for `time` into the slide.
    fn single_step<H: PanelHost + ?Sized>(&self, time: Duration, host: &mut H) -> f64 {
        let TransitionState::Running {
            direction,
            participants,
            ..
        } = &self.state
        else {
            return 0.0;
        };

        let fraction = time.as_secs_f64() / self.duration.as_secs_f64();
        let progress = self.curve.progress_at(fraction).unwrap_or_else(|err| {
            tracing::warn!(
                target: targets::TRANSITION,
                fraction,
                error = %err,
                "easing lookup failed, falling back to linear progress"
            );
            fraction
        });

        let width = host.viewport_width();
        let incoming_x = direction.incoming_x(progress, width);
        let incoming_width = participants
            .iter()
            .find(|participant| participant.role == PanelRole::Incoming)
            .and_then(|participant| host.panel_geometry(participant.index))
            .map_or(width, |rect| rect.width());

        for participant in participants {
            if let Some(rect) = host.panel_geometry(participant.index) {
                let x = participant
                    .role
                    .offset(*direction, incoming_x, incoming_width, rect.width());
                host.set_panel_geometry(participant.index, rect.with_x(x));
            }
        }
        host.request_repaint();

        tracing::trace!(
            target: targets::TRANSITION,
            ?time,
            progress,
            incoming_x,
            "step"
        );
        progress
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(TransitionController: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::animation::Easing;
    use crate::widget::geometry::Rect;
    use crate::widget::panel::{Panel, PanelFrame, PanelStrip};

    fn strip(count: usize) -> PanelStrip<PanelFrame> {
        let mut strip = PanelStrip::new(Rect::new(0.0, 0.0, 100.0, 60.0));
        for i in 0..count {
            let x = if i == 0 { 0.0 } else { 100.0 };
            let panel = PanelFrame::with_geometry(format!("panel {i}"), strip.slot_at(x));
            strip.panels_mut().push(panel);
        }
        strip
    }

    fn x_of(strip: &PanelStrip<PanelFrame>, index: usize) -> f32 {
        strip.panels()[index].geometry().x()
    }

    #[test]
    fn test_defaults() {
        let controller = TransitionController::new();
        assert_eq!(controller.animation_duration(), Duration::from_millis(500));
        assert_eq!(controller.easing_preset(), Easing::EaseInOutBack.preset());
        assert_eq!(controller.active_index(), 0);
        assert!(!controller.is_animating());
        assert_eq!(controller.direction(), None);
        assert!(controller.participants().is_empty());
    }

    #[test]
    fn test_forward_begin_prepositions_panels() {
        let mut strip = strip(3);
        let mut controller = TransitionController::new();

        assert!(controller.begin(SlideDirection::Forward, &mut strip));
        assert_eq!(controller.active_index(), 1);
        assert_eq!(controller.direction(), Some(SlideDirection::Forward));
        assert_eq!(controller.elapsed(), Duration::ZERO);
        assert_eq!(x_of(&strip, 1), -100.0);
        // panel[1].width - panel[2].width
        assert_eq!(x_of(&strip, 2), 0.0);
        assert!(strip.take_repaint_request());

        let roles: Vec<_> = controller.participants().iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![PanelRole::Outgoing, PanelRole::Incoming, PanelRole::Trailing]
        );
    }

    #[test]
    fn test_forward_completes_in_one_tick() {
        let mut strip = strip(3);
        let mut controller = TransitionController::new();
        controller.begin(SlideDirection::Forward, &mut strip);

        let outcome = controller.tick(controller.animation_duration(), &mut strip);
        assert_eq!(outcome, TickOutcome::Finished { active_index: 1 });
        assert!(!controller.is_animating());
        assert_eq!(controller.direction(), None);

        assert_eq!(x_of(&strip, 0), -100.0);
        assert_eq!(x_of(&strip, 1), 0.0);
        assert_eq!(x_of(&strip, 2), 100.0);
    }

    #[test]
    fn test_backward_slide() {
        let mut strip = strip(3);
        let mut controller = TransitionController::new();
        controller.set_active_index(2);

        assert!(controller.begin(SlideDirection::Backward, &mut strip));
        assert_eq!(controller.active_index(), 1);
        // Incoming waits just off the right edge, trailing behind it
        assert_eq!(x_of(&strip, 1), 100.0);
        assert_eq!(x_of(&strip, 0), 200.0);

        controller.tick(Duration::from_secs(2), &mut strip);
        assert_eq!(x_of(&strip, 1), 0.0);
        assert_eq!(x_of(&strip, 2), 100.0);
        assert_eq!(x_of(&strip, 0), -100.0);
    }

    #[test]
    fn test_two_panels_have_no_trailing() {
        let mut strip = strip(2);
        let mut controller = TransitionController::new();
        assert!(controller.begin(SlideDirection::Forward, &mut strip));
        assert_eq!(controller.participants().len(), 2);
    }

    #[test]
    fn test_begin_while_animating_is_noop() {
        let mut strip = strip(3);
        let mut controller = TransitionController::new();
        controller.begin(SlideDirection::Forward, &mut strip);
        controller.tick(Duration::from_millis(100), &mut strip);

        let before = controller.state().clone();
        assert!(!controller.begin(SlideDirection::Backward, &mut strip));
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.elapsed(), Duration::from_millis(100));
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn test_single_panel_is_noop() {
        let mut strip = strip(1);
        let mut controller = TransitionController::new();
        for direction in [SlideDirection::Forward, SlideDirection::Backward] {
            assert!(!controller.begin(direction, &mut strip));
            assert!(!controller.is_animating());
        }
        assert_eq!(x_of(&strip, 0), 0.0);
        assert!(!strip.repaint_requested());
    }

    #[test]
    fn test_no_panel_in_direction_is_noop() {
        let mut strip = strip(3);
        let mut controller = TransitionController::new();
        assert!(!controller.begin(SlideDirection::Backward, &mut strip));

        controller.set_active_index(2);
        assert!(!controller.begin(SlideDirection::Forward, &mut strip));
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut strip = strip(2);
        let mut controller = TransitionController::new();
        assert_eq!(
            controller.tick(Duration::from_millis(16), &mut strip),
            TickOutcome::Idle
        );
        assert!(!strip.repaint_requested());
    }

    #[test]
    fn test_intermediate_ticks_follow_curve() {
        let mut strip = strip(3);
        let mut controller = TransitionController::with_easing(Easing::EaseOutQuad).unwrap();
        controller.begin(SlideDirection::Forward, &mut strip);

        let outcome = controller.tick(Duration::from_millis(250), &mut strip);
        let expected = controller.progression(Duration::from_millis(250)).unwrap();
        assert_eq!(outcome, TickOutcome::Running { progress: expected });

        let incoming_x = SlideDirection::Forward.incoming_x(expected, 100.0);
        assert_eq!(x_of(&strip, 1), incoming_x);
        assert_eq!(x_of(&strip, 0), incoming_x - 100.0);
        assert_eq!(x_of(&strip, 2), incoming_x + 100.0);

        // Large deltas are clamped to the duration
        let outcome = controller.tick(Duration::from_secs(60), &mut strip);
        assert_eq!(outcome, TickOutcome::Finished { active_index: 1 });
    }

    #[test]
    fn test_finish_at_exact_duration() {
        let mut strip = strip(2);
        let mut controller = TransitionController::new();
        controller.begin(SlideDirection::Forward, &mut strip);

        assert!(matches!(
            controller.tick(Duration::from_millis(499), &mut strip),
            TickOutcome::Running { .. }
        ));
        assert!(matches!(
            controller.tick(Duration::from_millis(1), &mut strip),
            TickOutcome::Finished { .. }
        ));
    }

    #[test]
    fn test_role_offsets() {
        let forward = SlideDirection::Forward;
        let backward = SlideDirection::Backward;
        assert_eq!(PanelRole::Incoming.offset(forward, 30.0, 100.0, 80.0), 30.0);
        assert_eq!(PanelRole::Outgoing.offset(forward, 30.0, 100.0, 80.0), -50.0);
        assert_eq!(PanelRole::Trailing.offset(forward, 30.0, 100.0, 80.0), 130.0);
        assert_eq!(PanelRole::Outgoing.offset(backward, 30.0, 100.0, 80.0), 130.0);
        assert_eq!(PanelRole::Trailing.offset(backward, 30.0, 100.0, 80.0), -50.0);
    }

    #[test]
    fn test_incoming_x_endpoints() {
        assert_eq!(SlideDirection::Forward.incoming_x(0.0, 100.0), 100.0);
        assert_eq!(SlideDirection::Forward.incoming_x(1.0, 100.0), 0.0);
        assert_eq!(SlideDirection::Backward.incoming_x(0.0, 100.0), -100.0);
        assert_eq!(SlideDirection::Backward.incoming_x(1.0, 100.0), 0.0);
    }

    #[test]
    fn test_set_easing_swaps_curve() {
        let mut controller = TransitionController::new();
        let old = controller.curve();

        controller.set_easing(Easing::EaseInSine).unwrap();
        assert_eq!(controller.easing_preset(), Easing::EaseInSine.preset());
        assert!(!Arc::ptr_eq(&old, &controller.curve()));
        // The old handle still describes the old curve
        assert_eq!(*old, BezierCurve::default());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut controller = TransitionController::new();
        assert!(controller.set_animation_duration(Duration::ZERO).is_err());
        assert!(controller.set_smoothness(1.0).is_err());
        assert!(controller
            .set_easing(EasingPreset::new(f64::NAN, 0.0, 1.0, 1.0))
            .is_err());
        // Failures leave the controller unchanged
        assert_eq!(controller.animation_duration(), Duration::from_millis(500));
        assert_eq!(controller.smoothness(), BezierCurve::DEFAULT_SMOOTHNESS);
        assert_eq!(controller.easing_preset(), EasingPreset::default());
    }

    #[test]
    fn test_progression_does_not_clamp() {
        let controller = TransitionController::new();
        assert_eq!(controller.progression(Duration::ZERO).unwrap(), 0.0);
        assert_eq!(controller.progression(Duration::from_millis(500)).unwrap(), 1.0);
        assert!(controller.progression(Duration::from_millis(501)).is_err());
    }
}
