//! Static fallback markup.
//!
//! When fade-in is requested, the host keeps a static `<img>` rendition for
//! environments where the dynamic loader never runs (scripting disabled, or
//! markup served straight from a pre-render pass).

/// Builder for the static fallback image markup.
#[derive(Debug, Clone, Default)]
pub struct FallbackImage {
    src: String,
    alt: String,
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    opacity: Option<f32>,
    transition_delay_secs: Option<f32>,
}

impl FallbackImage {
    /// Creates a fallback for a source URL.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    /// Sets the alt text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Sets the title attribute.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets explicit width and height attributes.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Overrides the default opacity (1).
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Overrides the default transition delay (0.5s).
    #[must_use]
    pub const fn with_transition_delay(mut self, delay_secs: f32) -> Self {
        self.transition_delay_secs = Some(delay_secs);
        self
    }

    /// Renders the markup string.
    ///
    /// Width, height, and title attributes are omitted when unset so the
    /// markup never carries empty values; src and alt are always emitted,
    /// empty or not.
    #[must_use]
    pub fn markup(&self) -> String {
        let mut attrs = String::new();
        if let Some(width) = self.width {
            attrs.push_str(&format!("width=\"{width}\" "));
        }
        if let Some(height) = self.height {
            attrs.push_str(&format!("height=\"{height}\" "));
        }
        attrs.push_str(&format!("src=\"{}\" ", self.src));
        attrs.push_str(&format!("alt=\"{}\" ", self.alt));
        if let Some(title) = &self.title
            && !title.is_empty()
        {
            attrs.push_str(&format!("title=\"{title}\" "));
        }

        let opacity = self.opacity.unwrap_or(1.0);
        let delay = self.transition_delay_secs.unwrap_or(0.5);
        format!(
            "<img {attrs}style=\"position:absolute;top:0;left:0;\
             transition:opacity 0.5s;transition-delay:{delay}s;opacity:{opacity};\
             width:100%;height:100%;object-fit:cover;object-position:center\"/>"
        )
    }
}
