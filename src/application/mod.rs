//! Application layer with the shared context and load controller.

/// Shared image context.
pub mod context;
/// Visibility-gated load controller.
pub mod controller;

pub use context::ImageContext;
pub use controller::{ErrorCallback, LoadCallback, LoadController};
