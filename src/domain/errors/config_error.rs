//! Configuration error types.

use thiserror::Error;

/// Configuration error variants.
///
/// Raised by fail-fast validation of render requests. Load failures are not
/// crate errors: the host's error event is passed through as a plain message
/// and parked in the terminal `Errored` phase.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("image name is required")]
    MissingImageName,

    #[error("cloud name is required and no environment default is set")]
    MissingCloudName,

    #[error("required dimension `{field}` is missing or zero")]
    MissingDimension { field: &'static str },
}

impl ConfigError {
    /// Creates a missing dimension error.
    #[must_use]
    pub const fn missing_dimension(field: &'static str) -> Self {
        Self::MissingDimension { field }
    }
}
