//! Environment-backed defaults.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::directives::Directive;
use crate::domain::errors::ConfigError;
use crate::infrastructure::dispatcher::DEFAULT_PROXIMITY_MARGIN;

/// Primary environment variable holding the default cloud name.
pub const ENV_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";

/// Fallback environment variable for the default cloud name.
pub const ENV_CLOUD_NAME_FALLBACK: &str = "CLOUD_NAME";

const fn default_true() -> bool {
    true
}

const fn default_margin() -> u32 {
    DEFAULT_PROXIMITY_MARGIN
}

/// Process-wide defaults applied to image instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Default cloud (account) name, usually read from the environment.
    #[serde(default)]
    pub cloud_name: Option<String>,

    /// Whether final images fade in over their placeholder.
    #[serde(default = "default_true")]
    pub fade_in: bool,

    /// Default format directive.
    #[serde(default)]
    pub format: Directive,

    /// Default quality directive.
    #[serde(default)]
    pub quality: Directive,

    /// Proximity margin handed to the dispatcher, in density-independent
    /// units.
    #[serde(default = "default_margin")]
    pub proximity_margin: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            cloud_name: None,
            fade_in: true,
            format: Directive::Auto,
            quality: Directive::Auto,
            proximity_margin: DEFAULT_PROXIMITY_MARGIN,
        }
    }
}

impl Defaults {
    /// Loads defaults, reading the cloud name from the environment once.
    ///
    /// `CLOUDINARY_CLOUD_NAME` wins over `CLOUD_NAME`; a `.env` file is
    /// honored when present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let cloud_name = std::env::var(ENV_CLOUD_NAME)
            .or_else(|_| std::env::var(ENV_CLOUD_NAME_FALLBACK))
            .ok();
        if let Some(name) = &cloud_name {
            debug!(cloud_name = %name, "Using environment cloud name default");
        }
        Self {
            cloud_name,
            ..Self::default()
        }
    }

    /// Sets the default cloud name.
    #[must_use]
    pub fn with_cloud_name(mut self, cloud_name: impl Into<String>) -> Self {
        self.cloud_name = Some(cloud_name.into());
        self
    }

    /// The effective cloud name.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingCloudName`] when neither the defaults
    /// nor the environment provided one.
    pub fn cloud_name(&self) -> Result<&str, ConfigError> {
        self.cloud_name
            .as_deref()
            .ok_or(ConfigError::MissingCloudName)
    }
}
