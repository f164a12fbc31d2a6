//! Proximity observation port definition.

use uuid::Uuid;

/// Opaque handle identifying one observed host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(Uuid);

impl TargetHandle {
    /// Creates a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TargetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observation report delivered by the host's proximity primitive.
///
/// Some hosts lack the boolean intersecting signal; a positive intersection
/// ratio is accepted in its place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Observed element.
    pub target: TargetHandle,
    /// Boolean intersecting signal, when the host provides one.
    pub is_intersecting: Option<bool>,
    /// Fraction of the target inside the proximity margin.
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    /// Whether this entry counts as an intersection.
    #[must_use]
    pub fn intersects(&self) -> bool {
        self.is_intersecting == Some(true) || self.intersection_ratio > 0.0
    }
}

/// Port for the host's viewport-proximity primitive.
///
/// The contract mirrors an intersection observer: after `observe`, the host
/// reports entries for the target (delivered to the shared dispatcher) until
/// `unobserve` is called. The dispatcher guarantees each observed target is
/// unobserved after its first intersection.
#[cfg_attr(test, mockall::automock)]
pub trait ProximityObserverPort: Send + Sync {
    /// Starts observing a target.
    fn observe(&self, target: TargetHandle);

    /// Stops observing a target. Must tolerate unknown targets.
    fn unobserve(&self, target: TargetHandle);
}
