//! Cloudinary URL grammar.
//!
//! This module provides:
//! - Transformation segment synthesis from typed directives
//! - Primary and blur-placeholder upload URLs
//! - Responsive breakpoint (srcset) generation

pub mod srcset;
pub mod transform;

pub use srcset::{SrcSet, SrcSetEntry, fixed_srcset, fluid_srcset, srcset};
pub use transform::{
    CDN_HOST, DEFAULT_CROP, PLACEHOLDER_TRANSFORM, UNCONSTRAINED_CROP, placeholder_url,
    primary_url, sized_segment, transform_segment, transform_segment_parts, upload_url,
};
