//! Image sizing descriptors.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigError;

/// Default breakpoint step (and smallest breakpoint width) for fluid images.
pub const DEFAULT_FLUID_STEP: u32 = 150;

const fn default_step() -> u32 {
    DEFAULT_FLUID_STEP
}

/// Declarative sizing for an image: either a fixed pixel box rendered at
/// density multiples, or a fluid image that scales with its container up to
/// a maximum width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDescriptor {
    /// Fixed-size image. Breakpoints are generated at 1x and 2x density.
    Fixed {
        /// Rendered width in pixels. Must be positive.
        width: u32,
        /// Rendered height in pixels. Must be positive.
        height: u32,
    },
    /// Fluid (responsive) image. Breakpoints step up to `max_width`.
    Fluid {
        /// Largest width the image will be rendered at. Must be positive.
        max_width: u32,
        /// Target height. Zero means the aspect ratio is unconstrained and
        /// breakpoints carry no height parameter.
        #[serde(default)]
        height: u32,
        /// Distance between consecutive breakpoint widths.
        #[serde(default = "default_step")]
        step: u32,
    },
}

impl ImageDescriptor {
    /// Creates a fixed descriptor.
    #[must_use]
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self::Fixed { width, height }
    }

    /// Creates a fluid descriptor with the default step.
    #[must_use]
    pub const fn fluid(max_width: u32, height: u32) -> Self {
        Self::Fluid {
            max_width,
            height,
            step: DEFAULT_FLUID_STEP,
        }
    }

    /// Sets the breakpoint step on a fluid descriptor. No-op for fixed.
    #[must_use]
    pub const fn with_step(mut self, new_step: u32) -> Self {
        if let Self::Fluid { ref mut step, .. } = self {
            *step = new_step;
        }
        self
    }

    /// Returns true for the fluid variant.
    #[must_use]
    pub const fn is_fluid(&self) -> bool {
        matches!(self, Self::Fluid { .. })
    }

    /// Returns true for a fluid descriptor with no height constraint.
    /// Such images default to `c_scale` instead of `c_lfill` cropping.
    #[must_use]
    pub const fn is_unconstrained_fluid(&self) -> bool {
        matches!(self, Self::Fluid { height: 0, .. })
    }

    /// Aspect ratio of a constrained fluid descriptor, oriented so the longer
    /// dimension is the numerator (the ratio is always >= 1).
    ///
    /// Returns `None` for fixed descriptors and for unconstrained fluid ones.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        match *self {
            Self::Fluid { max_width, height, .. } if height > 0 => {
                if height > max_width {
                    Some(f64::from(height) / f64::from(max_width))
                } else {
                    Some(f64::from(max_width) / f64::from(height))
                }
            }
            _ => None,
        }
    }

    /// Validates required dimensions.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a required dimension is zero: width or
    /// height on `Fixed`, `max_width` or `step` on `Fluid`. These never
    /// silently default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Fixed { width, height } => {
                if width == 0 {
                    return Err(ConfigError::missing_dimension("width"));
                }
                if height == 0 {
                    return Err(ConfigError::missing_dimension("height"));
                }
                Ok(())
            }
            Self::Fluid { max_width, step, .. } => {
                if max_width == 0 {
                    return Err(ConfigError::missing_dimension("max_width"));
                }
                if step == 0 {
                    return Err(ConfigError::missing_dimension("step"));
                }
                Ok(())
            }
        }
    }
}
