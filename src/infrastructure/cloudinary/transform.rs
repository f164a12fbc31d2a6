//! Cloudinary transformation segment and URL synthesis.
//!
//! Builds the `<format>,<quality>,<crop>` transformation path segment and the
//! absolute upload URLs derived from it. All functions are pure; malformed
//! directives degrade to empty tokens instead of failing.

use crate::domain::descriptor::ImageDescriptor;
use crate::domain::directives::Directive;
use crate::domain::request::RenderRequest;

/// Cloudinary delivery hostname.
pub const CDN_HOST: &str = "res.cloudinary.com";

/// Default crop token for sized images.
pub const DEFAULT_CROP: &str = "c_lfill";

/// Default crop token for fluid images with no height constraint.
pub const UNCONSTRAINED_CROP: &str = "c_scale";

/// Transformation applied to the low-resolution blur placeholder.
pub const PLACEHOLDER_TRANSFORM: &str = "c_scale,w_20,f_auto";

/// Resolves the format directive to a URL token. Empty when `Off`.
#[must_use]
pub fn format_token(format: &Directive) -> String {
    match format {
        Directive::Auto => "f_auto".to_string(),
        Directive::Off => String::new(),
        Directive::Literal(value) => value.clone(),
    }
}

/// Resolves the quality directive to a URL token. Empty when `Off`.
///
/// A literal already containing `q_auto` is rewritten to `q_auto:<literal>`,
/// accepting a bare quality level such as `q_auto` plus `eco`. The rewrite is
/// applied even when the literal already starts with `q_auto:`, producing a
/// doubled prefix; consumers relying on the rewrite see it unconditionally.
#[must_use]
pub fn quality_token(quality: &Directive) -> String {
    match quality {
        Directive::Auto => "q_auto".to_string(),
        Directive::Off => String::new(),
        Directive::Literal(value) => {
            if value.contains("q_auto") {
                format!("q_auto:{value}")
            } else {
                value.clone()
            }
        }
    }
}

/// Builds the comma-joined transformation segment from its parts.
///
/// Token order is fixed (format, quality, crop/user params) and empty tokens
/// are dropped. When no explicit params are given, the crop token defaults to
/// [`DEFAULT_CROP`], or [`UNCONSTRAINED_CROP`] for a fluid descriptor without
/// a height constraint.
#[must_use]
pub fn transform_segment_parts(
    format: &Directive,
    quality: &Directive,
    url_params: Option<&str>,
    fluid_unconstrained: bool,
) -> String {
    let crop = match url_params {
        Some(params) if !params.is_empty() => params.to_string(),
        _ => {
            if fluid_unconstrained {
                UNCONSTRAINED_CROP.to_string()
            } else {
                DEFAULT_CROP.to_string()
            }
        }
    };

    let tokens = [format_token(format), quality_token(quality), crop];
    tokens
        .iter()
        .filter(|token| !token.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the transformation segment for a request.
#[must_use]
pub fn transform_segment(request: &RenderRequest) -> String {
    transform_segment_parts(
        &request.format,
        &request.quality,
        request.url_params.as_deref(),
        request.descriptor.is_unconstrained_fluid(),
    )
}

/// Appends the descriptor's size parameters to a transformation segment.
///
/// Fixed descriptors always carry both dimensions; fluid descriptors carry
/// the max width and, only when constrained, the height.
#[must_use]
pub fn sized_segment(segment: &str, descriptor: &ImageDescriptor) -> String {
    match *descriptor {
        ImageDescriptor::Fixed { width, height } => {
            format!("{segment},w_{width},h_{height}")
        }
        ImageDescriptor::Fluid {
            max_width, height, ..
        } => {
            if height > 0 {
                format!("{segment},w_{max_width},h_{height}")
            } else {
                format!("{segment},w_{max_width}")
            }
        }
    }
}

/// Builds an absolute upload URL from finished transformation parameters.
///
/// The version slot is emitted verbatim: an empty version yields a double
/// slash, which Cloudinary resolves to the latest asset.
#[must_use]
pub fn upload_url(cloud_name: &str, params: &str, version: &str, image_name: &str) -> String {
    format!("https://{CDN_HOST}/{cloud_name}/image/upload/{params}/{version}/{image_name}")
}

/// Builds the primary (largest) URL for a request, size suffix included.
#[must_use]
pub fn primary_url(request: &RenderRequest) -> String {
    let params = sized_segment(&transform_segment(request), &request.descriptor);
    upload_url(
        &request.cloud_name,
        &params,
        &request.version,
        &request.image_name,
    )
}

/// Builds the low-resolution blur placeholder URL for a request.
#[must_use]
pub fn placeholder_url(request: &RenderRequest) -> String {
    upload_url(
        &request.cloud_name,
        PLACEHOLDER_TRANSFORM,
        &request.version,
        &request.image_name,
    )
}
