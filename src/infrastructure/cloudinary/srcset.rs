//! Responsive breakpoint (srcset) generation.

use crate::domain::descriptor::{DEFAULT_FLUID_STEP, ImageDescriptor};
use crate::domain::request::RenderRequest;

use super::transform::{transform_segment, upload_url};

/// One breakpoint: a URL plus its density or width descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcSetEntry {
    /// Absolute upload URL for this breakpoint.
    pub url: String,
    /// Density (`2x`) or width (`450w`) descriptor.
    pub descriptor: String,
}

impl std::fmt::Display for SrcSetEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.url, self.descriptor)
    }
}

/// Ordered breakpoint set for a responsive source attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcSet {
    entries: Vec<SrcSetEntry>,
}

impl SrcSet {
    /// The breakpoints, smallest first.
    #[must_use]
    pub fn entries(&self) -> &[SrcSetEntry] {
        &self.entries
    }

    /// Number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no breakpoints were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for SrcSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{joined}")
    }
}

/// Generates the two fixed-size breakpoints at 1x and 2x density.
///
/// Callers must pass a request with a fixed descriptor; a fluid request
/// yields an empty set.
#[must_use]
pub fn fixed_srcset(request: &RenderRequest) -> SrcSet {
    let ImageDescriptor::Fixed { width, height } = request.descriptor else {
        return SrcSet {
            entries: Vec::new(),
        };
    };

    let segment = transform_segment(request);
    let entries = (1..3u32)
        .map(|density| {
            let params = format!("{segment},w_{},h_{}", width * density, height * density);
            SrcSetEntry {
                url: upload_url(
                    &request.cloud_name,
                    &params,
                    &request.version,
                    &request.image_name,
                ),
                descriptor: format!("{density}x"),
            }
        })
        .collect();

    SrcSet { entries }
}

/// Generates fluid breakpoints from 150 up to the max width.
///
/// Widths start at 150 and advance by the descriptor's step while below
/// `max_width`; when the height is constrained, each step's height is
/// `ceil(width * aspect_ratio)`. A final entry at exactly `max_width` with
/// the full descriptor height is always appended, so the largest breakpoint
/// is never skipped; for `max_width < 150` it is the only entry.
///
/// Callers must pass a request with a fluid descriptor; a fixed request
/// yields an empty set.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fluid_srcset(request: &RenderRequest) -> SrcSet {
    let ImageDescriptor::Fluid {
        max_width,
        height,
        step,
    } = request.descriptor
    else {
        return SrcSet {
            entries: Vec::new(),
        };
    };

    let segment = transform_segment(request);
    let aspect = request.descriptor.aspect_ratio();
    let mut entries = Vec::new();

    let mut width = DEFAULT_FLUID_STEP;
    while width < max_width {
        let params = aspect.map_or_else(
            || format!("{segment},w_{width}"),
            |ratio| {
                let stepped_height = (f64::from(width) * ratio).ceil() as u32;
                format!("{segment},w_{width},h_{stepped_height}")
            },
        );
        entries.push(SrcSetEntry {
            url: upload_url(
                &request.cloud_name,
                &params,
                &request.version,
                &request.image_name,
            ),
            descriptor: format!("{width}w"),
        });
        width += step;
    }

    let final_params = if height > 0 {
        format!("{segment},w_{max_width},h_{height}")
    } else {
        format!("{segment},w_{max_width}")
    };
    entries.push(SrcSetEntry {
        url: upload_url(
            &request.cloud_name,
            &final_params,
            &request.version,
            &request.image_name,
        ),
        descriptor: format!("{max_width}w"),
    });

    SrcSet { entries }
}

/// Generates the breakpoint set matching the request's descriptor kind.
#[must_use]
pub fn srcset(request: &RenderRequest) -> SrcSet {
    if request.descriptor.is_fluid() {
        fluid_srcset(request)
    } else {
        fixed_srcset(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directives::Directive;

    fn fixed_request() -> RenderRequest {
        RenderRequest::new("demo", "cat.jpg", ImageDescriptor::fixed(100, 50)).with_version("v1")
    }

    fn fluid_request(max_width: u32, height: u32) -> RenderRequest {
        RenderRequest::new("demo", "cat.jpg", ImageDescriptor::fluid(max_width, height))
            .with_version("v1")
    }

    #[test]
    fn test_fixed_srcset_two_densities() {
        let set = fixed_srcset(&fixed_request());
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].descriptor, "1x");
        assert_eq!(set.entries()[1].descriptor, "2x");
        assert_eq!(
            set.entries()[0].url,
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,c_lfill,w_100,h_50/v1/cat.jpg"
        );
        assert_eq!(
            set.entries()[1].url,
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,c_lfill,w_200,h_100/v1/cat.jpg"
        );
    }

    #[test]
    fn test_fixed_srcset_joined() {
        let set = fixed_srcset(&fixed_request());
        let joined = set.to_string();
        assert!(joined.contains("w_100,h_50/v1/cat.jpg 1x,https://"));
        assert!(joined.ends_with(" 2x"));
    }

    #[test]
    fn test_fluid_srcset_steps_and_forced_final() {
        let set = fluid_srcset(&fluid_request(500, 0));
        let widths: Vec<&str> = set
            .entries()
            .iter()
            .map(|entry| entry.descriptor.as_str())
            .collect();
        assert_eq!(widths, vec!["150w", "300w", "450w", "500w"]);
    }

    #[test]
    fn test_fluid_srcset_stepped_heights_use_aspect() {
        // 500x250 -> aspect 2, so every stepped height is width * 2.
        let set = fluid_srcset(&fluid_request(500, 250));
        assert!(set.entries()[0].url.contains(",w_150,h_300/"));
        assert!(set.entries()[1].url.contains(",w_300,h_600/"));
        assert!(set.entries()[2].url.contains(",w_450,h_900/"));
        // The forced final entry carries the descriptor height, not a
        // computed one.
        assert!(set.entries()[3].url.contains(",w_500,h_250/"));
    }

    #[test]
    fn test_fluid_srcset_below_first_breakpoint() {
        let set = fluid_srcset(&fluid_request(100, 0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].descriptor, "100w");
    }

    #[test]
    fn test_fluid_srcset_final_appended_even_on_step_alignment() {
        // 450 = 150 * 3: the loop emits 150w and 300w, then the forced final
        // lands at 450w exactly once.
        let set = fluid_srcset(&fluid_request(450, 0));
        let widths: Vec<&str> = set
            .entries()
            .iter()
            .map(|entry| entry.descriptor.as_str())
            .collect();
        assert_eq!(widths, vec!["150w", "300w", "450w"]);
    }

    #[test]
    fn test_fluid_srcset_custom_step() {
        let request = RenderRequest::new(
            "demo",
            "cat.jpg",
            ImageDescriptor::fluid(500, 0).with_step(200),
        );
        let set = fluid_srcset(&request);
        let widths: Vec<&str> = set
            .entries()
            .iter()
            .map(|entry| entry.descriptor.as_str())
            .collect();
        // The first breakpoint is always 150; only the increment changes.
        assert_eq!(widths, vec!["150w", "350w", "500w"]);
    }

    #[test]
    fn test_fluid_srcset_unconstrained_has_no_heights() {
        let set = fluid_srcset(&fluid_request(400, 0));
        for entry in set.entries() {
            assert!(!entry.url.contains(",h_"));
        }
    }

    #[test]
    fn test_srcset_dispatches_on_descriptor() {
        assert_eq!(srcset(&fixed_request()).len(), 2);
        assert_eq!(srcset(&fluid_request(500, 0)).len(), 4);
    }

    #[test]
    fn test_mismatched_descriptor_yields_empty() {
        assert!(fixed_srcset(&fluid_request(500, 0)).is_empty());
        assert!(fluid_srcset(&fixed_request()).is_empty());
    }

    #[test]
    fn test_segment_flows_into_breakpoints() {
        let request = fluid_request(300, 0).with_quality(Directive::Off);
        let set = fluid_srcset(&request);
        assert!(set.entries()[0].url.contains("/f_auto,c_scale,w_150/"));
    }
}
