//! Transformation directives.
//!
//! Format, quality, and background options each accept an automatic mode,
//! an off switch, or a literal Cloudinary token. They are modeled as tagged
//! variants so the URL grammar stays checkable at compile time.

use serde::{Deserialize, Serialize};

/// A format or quality directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    /// Let the CDN pick automatically (`f_auto` / `q_auto`).
    #[default]
    Auto,
    /// Omit the token entirely.
    Off,
    /// Use the given string verbatim (subject to the quality rewrite rule).
    Literal(String),
}

impl Directive {
    /// Creates a literal directive.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Returns true when the directive is `Auto`.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<bool> for Directive {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Auto } else { Self::Off }
    }
}

impl From<&str> for Directive {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

/// Background layer behind the placeholder.
///
/// When a background is configured the host paints a solid color instead of
/// the blurred low-resolution placeholder image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// No background color; the blurred placeholder image is used.
    #[default]
    None,
    /// Default background color (`lightgray`).
    Auto,
    /// Explicit CSS color value.
    Color(String),
}

impl Background {
    /// Creates an explicit color background.
    #[must_use]
    pub fn color(value: impl Into<String>) -> Self {
        Self::Color(value.into())
    }

    /// Resolved CSS color, or `None` when the blurred placeholder applies.
    #[must_use]
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Auto => Some("lightgray"),
            Self::Color(value) => Some(value),
        }
    }
}
