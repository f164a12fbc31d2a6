//! Per-instance load state.

/// Mutable state of one image instance, driven by the load controller and
/// read by the presentation derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    /// Whether the instance is (or is treated as) near the viewport. The
    /// real image source is only handed to the host while this is true.
    pub is_visible: bool,
    /// Whether the real image finished loading.
    pub img_loaded: bool,
    /// Whether this instance registered with the proximity dispatcher.
    pub proximity_supported: bool,
    /// Whether the final image fades in over the placeholder.
    pub fade_in: bool,
    /// Whether static fallback markup should be rendered. Tracks the
    /// fade-in setting requested at configuration time.
    pub render_fallback: bool,
    /// Whether this exact request was constructed before in this process.
    pub seen_before: bool,
    /// Terminal load failure, as reported by the host's error event.
    pub error: Option<String>,
}

impl LoadState {
    /// Derives the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        if let Some(message) = &self.error {
            return LoadPhase::Errored(message.clone());
        }
        if self.is_visible && self.img_loaded {
            return LoadPhase::Loaded;
        }
        if self.is_visible {
            return LoadPhase::Visible;
        }
        LoadPhase::Hidden
    }
}

/// Lifecycle phase of an image instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Waiting for the proximity dispatcher; no fetch started.
    Hidden,
    /// Near the viewport; the host may attach the real image source.
    Visible,
    /// The real image loaded. Terminal success state.
    Loaded,
    /// The load failed. Terminal failure state, no retry.
    Errored(String),
}

impl LoadPhase {
    /// Returns true for the terminal success phase.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Returns true for the terminal failure phase.
    #[must_use]
    pub const fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }
}
