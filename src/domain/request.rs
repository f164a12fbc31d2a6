//! Render request entity.

use serde::{Deserialize, Serialize};

use crate::domain::descriptor::ImageDescriptor;
use crate::domain::directives::{Background, Directive};
use crate::domain::errors::ConfigError;

/// Everything the URL builder needs to produce sources for one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Cloudinary cloud (account) name.
    pub cloud_name: String,
    /// Image public identifier. Required, never defaulted.
    pub image_name: String,
    /// Version tag inserted between transformation and image name.
    /// Defaults to an empty string, which yields a double slash in the URL
    /// and resolves to the latest asset.
    #[serde(default)]
    pub version: String,
    /// Sizing descriptor.
    pub descriptor: ImageDescriptor,
    /// Explicit transformation parameters replacing the default crop token.
    #[serde(default)]
    pub url_params: Option<String>,
    /// Format directive (`f_auto` when `Auto`).
    #[serde(default)]
    pub format: Directive,
    /// Quality directive (`q_auto` when `Auto`).
    #[serde(default)]
    pub quality: Directive,
    /// Background layer behind the placeholder.
    #[serde(default)]
    pub background: Background,
}

impl RenderRequest {
    /// Creates a request with default directives (format and quality `Auto`,
    /// no explicit params, empty version, no background color).
    #[must_use]
    pub fn new(
        cloud_name: impl Into<String>,
        image_name: impl Into<String>,
        descriptor: ImageDescriptor,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            image_name: image_name.into(),
            version: String::new(),
            descriptor,
            url_params: None,
            format: Directive::Auto,
            quality: Directive::Auto,
            background: Background::None,
        }
    }

    /// Sets the version tag.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets explicit transformation parameters.
    #[must_use]
    pub fn with_url_params(mut self, params: impl Into<String>) -> Self {
        self.url_params = Some(params.into());
        self
    }

    /// Sets the format directive.
    #[must_use]
    pub fn with_format(mut self, format: Directive) -> Self {
        self.format = format;
        self
    }

    /// Sets the quality directive.
    #[must_use]
    pub fn with_quality(mut self, quality: Directive) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the background layer.
    #[must_use]
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Fail-fast validation of required fields.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingImageName`] when the image identifier is
    /// empty, and propagates descriptor dimension errors. Format and quality
    /// never fail: the URL grammar degrades malformed directives to empty
    /// tokens, so there is nothing to validate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_name.is_empty() {
            return Err(ConfigError::MissingImageName);
        }
        self.descriptor.validate()
    }
}
