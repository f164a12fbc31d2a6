//! Presentation layer with style derivation and fallback markup.

/// Static fallback markup.
pub mod fallback;
/// Opacity and transition derivation.
pub mod style;

pub use fallback::FallbackImage;
pub use style::{
    BackgroundStyle, LayerStyle, Transition, background_style, image_style, placeholder_alt,
    placeholder_style,
};
