//! Shared image context.
//!
//! The seen cache and proximity observer live in one explicit context
//! object constructed once per process (or once per test) and shared by all
//! image instances, rather than in module-level singletons. The dispatcher
//! is built lazily, on first subscription, behind a one-time-construction
//! guard.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::domain::ports::{HostCapabilities, ProximityObserverPort, TargetHandle};
use crate::infrastructure::config::Defaults;
use crate::infrastructure::dispatcher::ProximityDispatcher;
use crate::infrastructure::seen_cache::SeenCache;

/// Port stand-in for hosts without a proximity primitive. Never consulted:
/// capabilities gating keeps instances off the dispatcher entirely.
#[derive(Debug)]
struct NoopProximityObserver;

impl ProximityObserverPort for NoopProximityObserver {
    fn observe(&self, _target: TargetHandle) {}
    fn unobserve(&self, _target: TargetHandle) {}
}

/// Process-wide collaborators shared by all image instances.
pub struct ImageContext {
    capabilities: HostCapabilities,
    defaults: Defaults,
    seen: SeenCache,
    port: Arc<dyn ProximityObserverPort>,
    dispatcher: OnceLock<ProximityDispatcher>,
}

impl ImageContext {
    /// Creates a context over the host's proximity port.
    #[must_use]
    pub fn new(
        capabilities: HostCapabilities,
        defaults: Defaults,
        port: Arc<dyn ProximityObserverPort>,
    ) -> Self {
        Self {
            capabilities,
            defaults,
            seen: SeenCache::new(),
            port,
            dispatcher: OnceLock::new(),
        }
    }

    /// Context for an interactive host lacking a proximity primitive.
    /// Every instance loads eagerly.
    #[must_use]
    pub fn without_proximity(defaults: Defaults) -> Self {
        Self::new(
            HostCapabilities::without_proximity(),
            defaults,
            Arc::new(NoopProximityObserver),
        )
    }

    /// Context for a non-interactive pre-render pass. No fetch is attempted.
    #[must_use]
    pub fn prerender(defaults: Defaults) -> Self {
        Self::new(
            HostCapabilities::prerender(),
            defaults,
            Arc::new(NoopProximityObserver),
        )
    }

    /// Host capabilities probed at construction.
    #[must_use]
    pub const fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    /// Process-wide defaults.
    #[must_use]
    pub const fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// The seen-URL cache.
    #[must_use]
    pub const fn seen_cache(&self) -> &SeenCache {
        &self.seen
    }

    /// The shared dispatcher, constructed on first use.
    pub fn dispatcher(&self) -> &ProximityDispatcher {
        self.dispatcher.get_or_init(|| {
            debug!(
                margin = self.defaults.proximity_margin,
                "Constructing proximity dispatcher"
            );
            ProximityDispatcher::new(Arc::clone(&self.port), self.defaults.proximity_margin)
        })
    }

    /// The dispatcher, if any subscription has forced its construction yet.
    #[must_use]
    pub fn dispatcher_if_built(&self) -> Option<&ProximityDispatcher> {
        self.dispatcher.get()
    }
}

impl std::fmt::Debug for ImageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageContext")
            .field("capabilities", &self.capabilities)
            .field("defaults", &self.defaults)
            .field("dispatcher_built", &self.dispatcher.get().is_some())
            .finish_non_exhaustive()
    }
}
