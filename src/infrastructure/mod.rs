//! Infrastructure layer with external service adapters.

/// Cloudinary URL grammar (transform segments, breakpoints).
pub mod cloudinary;
/// Application configuration.
pub mod config;
/// Shared proximity dispatcher.
pub mod dispatcher;
/// Seen-URL memo backing the dedup check.
pub mod seen_cache;

pub use cloudinary::{
    SrcSet, SrcSetEntry, fixed_srcset, fluid_srcset, placeholder_url, primary_url, srcset,
    transform_segment, transform_segment_parts,
};
pub use config::{Defaults, ENV_CLOUD_NAME, ENV_CLOUD_NAME_FALLBACK};
pub use dispatcher::{DEFAULT_PROXIMITY_MARGIN, ProximityDispatcher, VisibilityCallback};
pub use seen_cache::{SeenCache, SeenCacheStats};
