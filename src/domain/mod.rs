//! Domain layer with core business entities and port definitions.

/// Image sizing descriptors.
pub mod descriptor;
/// Transformation directive variants.
pub mod directives;
/// Error types.
pub mod errors;
/// Per-instance load state and lifecycle phases.
pub mod load_state;
/// Port definitions.
pub mod ports;
/// Render request entity.
pub mod request;

pub use descriptor::{DEFAULT_FLUID_STEP, ImageDescriptor};
pub use directives::{Background, Directive};
pub use errors::ConfigError;
pub use load_state::{LoadPhase, LoadState};
pub use ports::{HostCapabilities, IntersectionEntry, ProximityObserverPort, TargetHandle};
pub use request::RenderRequest;
