//! Update loop for Horizon Carousel.
//!
//! The host application drives animations by dispatching the time elapsed
//! since the previous frame to every registered update listener. All
//! listeners run on the dispatching thread, one after another, so state they
//! touch needs no further locking.

use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TickError};
use crate::logging::{PerfSpan, span_names, targets};

new_key_type! {
    /// A unique identifier for an update listener.
    pub struct ListenerId;
}

/// What a listener wants after handling a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickControl {
    /// Keep receiving ticks.
    #[default]
    Continue,
    /// Unsubscribe; the listener is dropped after this tick.
    Remove,
}

type Listener = Box<dyn FnMut(Duration) -> TickControl + Send>;

/// Dispatches periodic ticks to registered listeners.
///
/// Listeners are invoked in registration order.
pub struct UpdateLoop {
    /// All registered listeners.
    listeners: SlotMap<ListenerId, Listener>,
    /// Registration order.
    order: Vec<ListenerId>,
    /// Instant of the previous [`dispatch_at`](Self::dispatch_at) call.
    last_dispatch: Option<Instant>,
    /// Sum of all dispatched deltas.
    total_elapsed: Duration,
}

impl UpdateLoop {
    /// Create an empty update loop.
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: Vec::new(),
            last_dispatch: None,
            total_elapsed: Duration::ZERO,
        }
    }

    /// Register a listener that receives every subsequent tick delta.
    ///
    /// Returns the listener ID that can be used to remove it.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Duration) -> TickControl + Send + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        self.order.push(id);
        tracing::trace!(target: targets::TICK, ?id, "listener added");
        id
    }

    /// Remove a listener.
    ///
    /// Returns `Ok(())` if the listener was found and removed, or an error if not found.
    pub fn remove_listener(&mut self, id: ListenerId) -> Result<()> {
        if self.listeners.remove(id).is_some() {
            self.order.retain(|&other| other != id);
            tracing::trace!(target: targets::TICK, ?id, "listener removed");
            Ok(())
        } else {
            Err(TickError::InvalidListenerId.into())
        }
    }

    /// Check if a listener is still registered.
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(id)
    }

    /// Get the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total time dispatched since this loop was created.
    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Deliver one tick carrying `delta` to every listener.
    ///
    /// Listeners that return [`TickControl::Remove`] are unsubscribed.
    /// Returns the number of listeners that were invoked.
    #[tracing::instrument(skip(self), target = "horizon_carousel_core::tick", level = "trace")]
    pub fn dispatch(&mut self, delta: Duration) -> usize {
        let _span = PerfSpan::new(span_names::UPDATE_LOOP);
        self.total_elapsed += delta;

        let mut invoked = 0;
        let mut finished = Vec::new();
        for &id in &self.order {
            let Some(listener) = self.listeners.get_mut(id) else {
                continue;
            };
            invoked += 1;
            if listener(delta) == TickControl::Remove {
                finished.push(id);
            }
        }

        for id in finished {
            tracing::trace!(target: targets::TICK, ?id, "listener unsubscribed");
            self.listeners.remove(id);
            self.order.retain(|&other| other != id);
        }

        invoked
    }

    /// Deliver a tick measured against the previous call to this method.
    ///
    /// The first call delivers a zero delta.
    pub fn dispatch_at(&mut self, now: Instant) -> usize {
        let delta = self
            .last_dispatch
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_dispatch = Some(now);
        self.dispatch(delta)
    }
}

impl Default for UpdateLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UpdateLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateLoop")
            .field("listeners", &self.listeners.len())
            .field("total_elapsed", &self.total_elapsed)
            .finish()
    }
}

static_assertions::assert_impl_all!(UpdateLoop: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    #[test]
    fn test_dispatch_delivers_delta() {
        let mut update_loop = UpdateLoop::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        update_loop.add_listener(move |delta| {
            received_clone.lock().push(delta);
            TickControl::Continue
        });

        assert_eq!(update_loop.dispatch(Duration::from_millis(16)), 1);
        assert_eq!(update_loop.dispatch(Duration::from_millis(17)), 1);

        assert_eq!(
            *received.lock(),
            vec![Duration::from_millis(16), Duration::from_millis(17)]
        );
        assert_eq!(update_loop.total_elapsed(), Duration::from_millis(33));
    }

    #[test]
    fn test_listener_unsubscribes_itself() {
        let mut update_loop = UpdateLoop::new();
        let mut remaining = 2;
        let id = update_loop.add_listener(move |_| {
            remaining -= 1;
            if remaining == 0 {
                TickControl::Remove
            } else {
                TickControl::Continue
            }
        });

        update_loop.dispatch(Duration::from_millis(10));
        assert!(update_loop.is_registered(id));
        update_loop.dispatch(Duration::from_millis(10));
        assert!(!update_loop.is_registered(id));
        assert_eq!(update_loop.dispatch(Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_remove_listener() {
        let mut update_loop = UpdateLoop::new();
        let id = update_loop.add_listener(|_| TickControl::Continue);
        assert_eq!(update_loop.listener_count(), 1);

        assert!(update_loop.remove_listener(id).is_ok());
        assert!(update_loop.remove_listener(id).is_err());
        assert_eq!(update_loop.listener_count(), 0);
    }

    #[test]
    fn test_registration_order() {
        let mut update_loop = UpdateLoop::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let order = order.clone();
            update_loop.add_listener(move |_| {
                order.lock().push(name);
                TickControl::Continue
            });
        }

        update_loop.dispatch(Duration::ZERO);
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dispatch_at_measures_delta() {
        let mut update_loop = UpdateLoop::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        update_loop.add_listener(move |delta| {
            received_clone.lock().push(delta);
            TickControl::Continue
        });

        let start = Instant::now();
        update_loop.dispatch_at(start);
        update_loop.dispatch_at(start + Duration::from_millis(20));

        assert_eq!(
            *received.lock(),
            vec![Duration::ZERO, Duration::from_millis(20)]
        );
    }
}
