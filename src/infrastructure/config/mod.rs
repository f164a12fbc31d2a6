//! Application configuration.

pub mod defaults;

pub use defaults::{Defaults, ENV_CLOUD_NAME, ENV_CLOUD_NAME_FALLBACK};
