//! Shared proximity dispatcher.
//!
//! One dispatcher per process bridges the host's viewport-proximity
//! primitive and all mounted image instances: instances subscribe with a
//! target handle and a callback, the host delivers intersection entries, and
//! each callback fires at most once before its registration is removed.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::domain::ports::{IntersectionEntry, ProximityObserverPort, TargetHandle};

/// Default "near viewport" margin in density-independent units.
pub const DEFAULT_PROXIMITY_MARGIN: u32 = 200;

/// Callback invoked once when a subscribed target nears the viewport.
pub type VisibilityCallback = Box<dyn FnMut() + Send>;

struct Listener {
    target: TargetHandle,
    callback: VisibilityCallback,
}

/// Registry of pending visibility subscriptions over a proximity port.
pub struct ProximityDispatcher {
    port: Arc<dyn ProximityObserverPort>,
    listeners: Mutex<Vec<Listener>>,
    margin: u32,
}

impl ProximityDispatcher {
    /// Creates a dispatcher over the host's proximity port.
    #[must_use]
    pub fn new(port: Arc<dyn ProximityObserverPort>, margin: u32) -> Self {
        Self {
            port,
            listeners: Mutex::new(Vec::new()),
            margin,
        }
    }

    /// The proximity margin the host primitive should observe with.
    #[must_use]
    pub const fn margin(&self) -> u32 {
        self.margin
    }

    /// Registers a callback for a target and starts observation.
    pub fn subscribe(&self, target: TargetHandle, callback: VisibilityCallback) {
        self.port.observe(target);
        let mut listeners = self.listeners.lock();
        listeners.push(Listener { target, callback });
        debug!(handle = %target, pending = listeners.len(), "Subscribed to proximity events");
    }

    /// Removes a target's registration and stops observation.
    ///
    /// Required on instance teardown: a registration left behind would fire
    /// against a destroyed instance. No-op when the target already fired or
    /// was never subscribed.
    pub fn unsubscribe(&self, target: TargetHandle) {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|listener| listener.target != target);
        let removed = before != listeners.len();
        drop(listeners);

        if removed {
            self.port.unobserve(target);
            debug!(handle = %target, "Unsubscribed from proximity events");
        }
    }

    /// Delivers intersection entries from the host primitive.
    ///
    /// For every entry that intersects (boolean signal or positive ratio),
    /// the matching registration is removed, the target unobserved, and the
    /// callback invoked, in that order and at most once per target.
    pub fn deliver(&self, entries: &[IntersectionEntry]) {
        let mut fired = Vec::new();
        {
            let mut listeners = self.listeners.lock();
            for entry in entries {
                if !entry.intersects() {
                    trace!(handle = %entry.target, "Non-intersecting entry ignored");
                    continue;
                }
                let mut index = 0;
                while index < listeners.len() {
                    if listeners[index].target == entry.target {
                        fired.push(listeners.swap_remove(index));
                    } else {
                        index += 1;
                    }
                }
            }
        }

        for mut listener in fired {
            self.port.unobserve(listener.target);
            debug!(handle = %listener.target, "Target entered proximity margin");
            (listener.callback)();
        }
    }

    /// Number of registrations still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl std::fmt::Debug for ProximityDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProximityDispatcher")
            .field("margin", &self.margin)
            .field("pending", &self.pending_count())
            .finish_non_exhaustive()
    }
}
