//! Cloudfade - A lazy-loading, fade-in responsive image engine for Cloudinary.
//!
//! This crate provides the headless core of a responsive image component:
//! it synthesizes Cloudinary transformation URLs and srcset breakpoint sets
//! from typed image descriptors, and drives a small visibility-gated state
//! machine deciding when the full-resolution image is fetched and how the
//! placeholder cross-fades into it. Rendering and viewport observation stay
//! with the host, wired in through ports and events.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the load controller and shared context.
pub mod application;
/// Domain layer containing descriptors, directives, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing URL synthesis, the seen cache, the
/// proximity dispatcher, and configuration.
pub mod infrastructure;
/// Presentation layer containing style derivation and fallback markup.
pub mod presentation;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "cloudfade";
