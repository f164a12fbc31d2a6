//! Visibility-gated load controller.
//!
//! One controller per mounted image instance. It decides at mount time
//! whether lazy gating applies, flips visibility when the shared dispatcher
//! reports proximity, and sequences the fade-in flags as load and error
//! events arrive from the host. All transitions happen on the host's event
//! loop; callbacks never run concurrently, only interleaved.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::application::context::ImageContext;
use crate::domain::errors::ConfigError;
use crate::domain::load_state::{LoadPhase, LoadState};
use crate::domain::ports::TargetHandle;
use crate::domain::request::RenderRequest;

/// Callback invoked after the image load completes.
pub type LoadCallback = Box<dyn Fn() + Send>;

/// Callback invoked with the host's load error message.
pub type ErrorCallback = Box<dyn Fn(&str) + Send>;

/// Per-instance load state machine.
pub struct LoadController {
    request: RenderRequest,
    handle: TargetHandle,
    state: Arc<Mutex<LoadState>>,
    context: Arc<ImageContext>,
    attached: AtomicBool,
    on_load: Option<LoadCallback>,
    on_error: Option<ErrorCallback>,
}

impl LoadController {
    /// Mounts a controller for a request, running the initialization policy
    /// synchronously:
    ///
    /// - without a proximity primitive the instance is eagerly visible;
    /// - a request seen before in this process is also eagerly visible
    ///   (the host's cache makes it cheap) and will suppress fade-in;
    /// - otherwise the instance starts hidden and waits for the dispatcher;
    /// - a non-interactive pre-render pass forces hidden and unloaded
    ///   regardless, since no real fetch should happen there.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the request fails validation.
    pub fn mount(
        request: RenderRequest,
        context: Arc<ImageContext>,
        fade_in: bool,
    ) -> Result<Self, ConfigError> {
        request.validate()?;

        let capabilities = context.capabilities();
        let seen_before = context.seen_cache().check(&request);

        let mut state = LoadState {
            is_visible: true,
            img_loaded: true,
            proximity_supported: false,
            fade_in,
            render_fallback: fade_in,
            seen_before,
            error: None,
        };

        if !seen_before && capabilities.interactive && capabilities.proximity {
            state.is_visible = false;
            state.img_loaded = false;
            state.proximity_supported = true;
        }

        if !capabilities.interactive {
            state.is_visible = false;
            state.img_loaded = false;
        }

        let handle = TargetHandle::new();
        debug!(
            handle = %handle,
            image = %request.image_name,
            seen_before,
            lazy = state.proximity_supported,
            "Mounted load controller"
        );

        Ok(Self {
            request,
            handle,
            state: Arc::new(Mutex::new(state)),
            context,
            attached: AtomicBool::new(false),
            on_load: None,
            on_error: None,
        })
    }

    /// Mounts with the context's default fade-in setting.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the request fails validation.
    pub fn mount_with_defaults(
        request: RenderRequest,
        context: Arc<ImageContext>,
    ) -> Result<Self, ConfigError> {
        let fade_in = context.defaults().fade_in;
        Self::mount(request, context, fade_in)
    }

    /// Sets the callback invoked after a successful load.
    #[must_use]
    pub fn with_on_load(mut self, callback: LoadCallback) -> Self {
        self.on_load = Some(callback);
        self
    }

    /// Sets the callback receiving load failures.
    #[must_use]
    pub fn with_on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Registers this instance with the shared dispatcher.
    ///
    /// The host calls this once its element exists (the mirror of attaching
    /// a ref). No-op unless the mount policy armed lazy gating.
    pub fn attach(&self) {
        if !self.state.lock().proximity_supported {
            return;
        }
        if self.attached.swap(true, Ordering::SeqCst) {
            return;
        }

        let shared = Arc::clone(&self.state);
        let handle = self.handle;
        self.context.dispatcher().subscribe(
            handle,
            Box::new(move || {
                shared.lock().is_visible = true;
                debug!(handle = %handle, "Image became visible");
            }),
        );
    }

    /// The host element handle used with the dispatcher.
    #[must_use]
    pub const fn handle(&self) -> TargetHandle {
        self.handle
    }

    /// The request this controller was mounted with.
    #[must_use]
    pub const fn request(&self) -> &RenderRequest {
        &self.request
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state.lock().clone()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.state.lock().phase()
    }

    /// Whether the host should attach the real image source now. The fetch
    /// must not start before this returns true.
    #[must_use]
    pub fn should_attach_source(&self) -> bool {
        self.state.lock().is_visible
    }

    /// Handles the host's successful-load event.
    ///
    /// A request seen before is displayed instantly: fade-in is forced off
    /// on completion.
    pub fn notify_loaded(&self) {
        {
            let mut state = self.state.lock();
            state.img_loaded = true;
            if state.seen_before {
                state.fade_in = false;
            }
            debug!(handle = %self.handle, "Image load completed");
        }
        if let Some(callback) = &self.on_load {
            callback();
        }
    }

    /// Handles the host's error event. Terminal; no retry is attempted.
    pub fn notify_error(&self, message: impl Into<String>) {
        let message = message.into();
        {
            let mut state = self.state.lock();
            debug!(handle = %self.handle, error = %message, "Image load failed");
            state.error = Some(message.clone());
        }
        if let Some(callback) = &self.on_error {
            callback(&message);
        }
    }
}

impl Drop for LoadController {
    fn drop(&mut self) {
        // A registration left behind would invoke a callback against a dead
        // instance. Unsubscribe is a no-op if the callback already fired.
        if self.state.lock().proximity_supported
            && let Some(dispatcher) = self.context.dispatcher_if_built()
        {
            dispatcher.unsubscribe(self.handle);
        }
    }
}

impl std::fmt::Debug for LoadController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadController")
            .field("handle", &self.handle)
            .field("image", &self.request.image_name)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::ImageDescriptor;
    use crate::domain::ports::{HostCapabilities, IntersectionEntry, MockProximityObserverPort};
    use crate::infrastructure::config::Defaults;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn request(name: &str) -> RenderRequest {
        RenderRequest::new("demo", name, ImageDescriptor::fixed(100, 50))
    }

    fn interactive_context() -> Arc<ImageContext> {
        let mut port = MockProximityObserverPort::new();
        port.expect_observe().return_const(());
        port.expect_unobserve().return_const(());
        Arc::new(ImageContext::new(
            HostCapabilities::interactive(),
            Defaults::default(),
            Arc::new(port),
        ))
    }

    fn visible_entry(target: TargetHandle) -> IntersectionEntry {
        IntersectionEntry {
            target,
            is_intersecting: Some(true),
            intersection_ratio: 1.0,
        }
    }

    #[test]
    fn test_fresh_request_starts_hidden_and_gated() {
        let context = interactive_context();
        let controller = LoadController::mount(request("cat.jpg"), context, true).unwrap();

        let state = controller.state();
        assert!(!state.is_visible);
        assert!(!state.img_loaded);
        assert!(state.proximity_supported);
        assert!(!state.seen_before);
        assert_eq!(controller.phase(), LoadPhase::Hidden);
        assert!(!controller.should_attach_source());
    }

    #[test]
    fn test_seen_request_bypasses_lazy_gating() {
        let context = interactive_context();
        let first =
            LoadController::mount(request("cat.jpg"), Arc::clone(&context), true).unwrap();
        drop(first);

        let second = LoadController::mount(request("cat.jpg"), context, true).unwrap();
        let state = second.state();
        assert!(state.seen_before);
        assert!(state.is_visible);
        assert!(!state.proximity_supported);
        // Fade-in stays armed until load completes.
        assert!(state.fade_in);
    }

    #[test]
    fn test_seen_request_suppresses_fade_in_on_load() {
        let context = interactive_context();
        drop(LoadController::mount(request("cat.jpg"), Arc::clone(&context), true).unwrap());

        let controller = LoadController::mount(request("cat.jpg"), context, true).unwrap();
        controller.notify_loaded();

        let state = controller.state();
        assert!(state.img_loaded);
        assert!(!state.fade_in);
        assert_eq!(controller.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_no_proximity_primitive_loads_eagerly() {
        let context = Arc::new(ImageContext::without_proximity(Defaults::default()));
        let controller = LoadController::mount(request("cat.jpg"), context, true).unwrap();

        let state = controller.state();
        assert!(state.is_visible);
        assert!(!state.proximity_supported);
        assert!(controller.should_attach_source());
    }

    #[test]
    fn test_prerender_forces_hidden_and_unloaded() {
        let context = Arc::new(ImageContext::prerender(Defaults::default()));
        let controller = LoadController::mount(request("cat.jpg"), context, true).unwrap();

        let state = controller.state();
        assert!(!state.is_visible);
        assert!(!state.img_loaded);
        assert!(!state.proximity_supported);
        assert!(!controller.should_attach_source());
    }

    #[test]
    fn test_proximity_event_makes_visible() {
        let context = interactive_context();
        let controller =
            LoadController::mount(request("cat.jpg"), Arc::clone(&context), true).unwrap();
        controller.attach();

        assert_eq!(controller.phase(), LoadPhase::Hidden);
        context
            .dispatcher()
            .deliver(&[visible_entry(controller.handle())]);

        assert_eq!(controller.phase(), LoadPhase::Visible);
        assert!(controller.should_attach_source());
    }

    #[test]
    fn test_full_lifecycle_to_loaded() {
        let context = interactive_context();
        let loads = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&loads);
        let controller = LoadController::mount(request("cat.jpg"), Arc::clone(&context), true)
            .unwrap()
            .with_on_load(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        controller.attach();

        context
            .dispatcher()
            .deliver(&[visible_entry(controller.handle())]);
        controller.notify_loaded();

        assert_eq!(controller.phase(), LoadPhase::Loaded);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        // Fresh requests keep their fade-in.
        assert!(controller.state().fade_in);
    }

    #[test]
    fn test_error_is_terminal_and_passed_through() {
        let context = interactive_context();
        let errors = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&errors);
        let controller = LoadController::mount(request("cat.jpg"), Arc::clone(&context), true)
            .unwrap()
            .with_on_error(Box::new(move |message| {
                sink.lock().push(message.to_string());
            }));
        controller.attach();

        context
            .dispatcher()
            .deliver(&[visible_entry(controller.handle())]);
        controller.notify_error("HTTP 404");

        assert_eq!(controller.phase(), LoadPhase::Errored("HTTP 404".into()));
        assert_eq!(errors.lock().as_slice(), ["HTTP 404".to_string()]);
    }

    #[test]
    fn test_unfired_instance_stays_hidden() {
        let context = interactive_context();
        let controller =
            LoadController::mount(request("cat.jpg"), Arc::clone(&context), true).unwrap();
        controller.attach();

        // No proximity event ever arrives.
        assert_eq!(controller.phase(), LoadPhase::Hidden);
        assert_eq!(context.dispatcher().pending_count(), 1);
    }

    #[test]
    fn test_attach_registers_once() {
        let context = interactive_context();
        let controller =
            LoadController::mount(request("cat.jpg"), Arc::clone(&context), true).unwrap();
        controller.attach();
        controller.attach();
        assert_eq!(context.dispatcher().pending_count(), 1);
    }

    #[test]
    fn test_drop_removes_dispatcher_registration() {
        let context = interactive_context();
        let controller =
            LoadController::mount(request("cat.jpg"), Arc::clone(&context), true).unwrap();
        controller.attach();
        let handle = controller.handle();
        assert_eq!(context.dispatcher().pending_count(), 1);

        drop(controller);
        assert_eq!(context.dispatcher().pending_count(), 0);

        // A late event against the dead target is ignored.
        context.dispatcher().deliver(&[visible_entry(handle)]);
    }

    #[test]
    fn test_drop_without_attach_never_builds_dispatcher() {
        let context = Arc::new(ImageContext::prerender(Defaults::default()));
        let controller = LoadController::mount(request("cat.jpg"), Arc::clone(&context), true)
            .unwrap();
        drop(controller);
        assert!(context.dispatcher_if_built().is_none());
    }

    #[test]
    fn test_invalid_request_fails_fast() {
        let context = interactive_context();
        let result = LoadController::mount(request(""), context, true);
        assert!(matches!(result, Err(ConfigError::MissingImageName)));
    }

    #[test]
    fn test_mount_with_defaults_uses_context_fade_in() {
        let defaults = Defaults {
            fade_in: false,
            ..Defaults::default()
        };
        let context = Arc::new(ImageContext::without_proximity(defaults));
        let controller = LoadController::mount_with_defaults(request("cat.jpg"), context).unwrap();

        let state = controller.state();
        assert!(!state.fade_in);
        assert!(!state.render_fallback);
    }
}
