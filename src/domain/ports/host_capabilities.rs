//! Host environment capabilities.

/// What the host environment can do, probed once at context construction.
///
/// An interactive host without a proximity primitive loads images eagerly;
/// a non-interactive host (a pre-render pass) never starts a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether a user-facing viewport exists at all. False during
    /// pre-render / server-side passes.
    pub interactive: bool,
    /// Whether a viewport-proximity primitive is available.
    pub proximity: bool,
}

impl HostCapabilities {
    /// Interactive host with a proximity primitive.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            interactive: true,
            proximity: true,
        }
    }

    /// Interactive host without a proximity primitive. Images load eagerly.
    #[must_use]
    pub const fn without_proximity() -> Self {
        Self {
            interactive: true,
            proximity: false,
        }
    }

    /// Non-interactive pre-render pass. No fetch is attempted.
    #[must_use]
    pub const fn prerender() -> Self {
        Self {
            interactive: false,
            proximity: false,
        }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::interactive()
    }
}
