//! Opacity and transition derivation.
//!
//! Pure functions of the load state, consumed by the host's rendering layer.
//! The asymmetric transition delays (0.25s while unloaded, 0.5s after load)
//! keep the placeholder fade-out overlapping the final image fade-in, so the
//! two layers are never simultaneously invisible.

use crate::domain::descriptor::ImageDescriptor;
use crate::domain::directives::Background;
use crate::domain::load_state::LoadState;

/// An opacity transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Transition duration in seconds.
    pub duration_secs: f32,
    /// Transition delay in seconds.
    pub delay_secs: f32,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "opacity {}s", self.duration_secs)
    }
}

/// Computed style for one stacked image layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    /// Layer opacity, 0 or 1.
    pub opacity: f32,
    /// Opacity transition, when one applies.
    pub transition: Option<Transition>,
}

/// Style for the blurred low-resolution placeholder layer.
#[must_use]
pub fn placeholder_style(state: &LoadState) -> LayerStyle {
    LayerStyle {
        opacity: if state.img_loaded { 0.0 } else { 1.0 },
        transition: Some(Transition {
            duration_secs: 0.5,
            delay_secs: if state.img_loaded { 0.5 } else { 0.25 },
        }),
    }
}

/// Style for the final image layer.
#[must_use]
pub fn image_style(state: &LoadState) -> LayerStyle {
    LayerStyle {
        opacity: if state.img_loaded || !state.fade_in {
            1.0
        } else {
            0.0
        },
        transition: state.fade_in.then_some(Transition {
            duration_secs: 0.5,
            delay_secs: 0.0,
        }),
    }
}

/// Computed style for the solid background placeholder layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    /// Resolved CSS color.
    pub color: String,
    /// Layer opacity, 0 or 1.
    pub opacity: f32,
    /// Fade-out delay in seconds.
    pub delay_secs: f32,
}

/// Style for the solid background placeholder, when one is configured.
///
/// Fluid images fade the background out slightly later (0.35s) than fixed
/// ones (0.25s).
#[must_use]
pub fn background_style(
    state: &LoadState,
    descriptor: &ImageDescriptor,
    background: &Background,
) -> Option<BackgroundStyle> {
    let color = background.resolve()?;
    Some(BackgroundStyle {
        color: color.to_string(),
        opacity: if state.img_loaded { 0.0 } else { 1.0 },
        delay_secs: if descriptor.is_fluid() { 0.35 } else { 0.25 },
    })
}

/// Alt text for the placeholder layer. Cleared once the real image is
/// visible so screen readers do not announce the image twice.
#[must_use]
pub fn placeholder_alt<'a>(state: &LoadState, alt: &'a str) -> &'a str {
    if state.is_visible { "" } else { alt }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(is_visible: bool, img_loaded: bool, fade_in: bool) -> LoadState {
        LoadState {
            is_visible,
            img_loaded,
            fade_in,
            ..LoadState::default()
        }
    }

    #[test]
    fn test_placeholder_fades_out_after_load() {
        let before = placeholder_style(&state(true, false, true));
        assert_eq!(before.opacity, 1.0);
        assert_eq!(before.transition.unwrap().delay_secs, 0.25);

        let after = placeholder_style(&state(true, true, true));
        assert_eq!(after.opacity, 0.0);
        assert_eq!(after.transition.unwrap().delay_secs, 0.5);
    }

    #[test]
    fn test_placeholder_delay_shorter_while_unloaded() {
        // Prevents the flash where both layers are invisible at once.
        let unloaded = placeholder_style(&state(true, false, true));
        let loaded = placeholder_style(&state(true, true, true));
        assert!(
            unloaded.transition.unwrap().delay_secs < loaded.transition.unwrap().delay_secs
        );
    }

    #[test]
    fn test_image_hidden_until_loaded_when_fading() {
        let hidden = image_style(&state(true, false, true));
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.transition.unwrap().to_string(), "opacity 0.5s");

        let shown = image_style(&state(true, true, true));
        assert_eq!(shown.opacity, 1.0);
    }

    #[test]
    fn test_image_shown_instantly_without_fade_in() {
        let style = image_style(&state(true, false, false));
        assert_eq!(style.opacity, 1.0);
        assert!(style.transition.is_none());
    }

    #[test]
    fn test_background_style_resolution() {
        let desc = ImageDescriptor::fluid(300, 0);
        assert!(background_style(&state(true, false, true), &desc, &Background::None).is_none());

        let style =
            background_style(&state(true, false, true), &desc, &Background::Auto).unwrap();
        assert_eq!(style.color, "lightgray");
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.delay_secs, 0.35);

        let fixed = ImageDescriptor::fixed(100, 50);
        let style =
            background_style(&state(true, true, true), &fixed, &Background::color("#333"))
                .unwrap();
        assert_eq!(style.color, "#333");
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.delay_secs, 0.25);
    }

    #[test]
    fn test_placeholder_alt_suppressed_when_visible() {
        assert_eq!(placeholder_alt(&state(false, false, true), "A cat"), "A cat");
        assert_eq!(placeholder_alt(&state(true, false, true), "A cat"), "");
    }
}
