//! Semantic design-token palette shared by the Monora component library and its tooling.
//!
//! This crate is intentionally runtime-agnostic. It enumerates the semantic roles (colors,
//! radii, shadows, spacing, typography, motion) together with their light and dark values, and
//! exposes a read-only [`TokenRegistry`] for documentation consumers. Component resolution never
//! reads these values: class tokens reference them symbolically and the markup layer binds them
//! through CSS custom properties.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod color;
mod motion;
mod registry;
mod scale;
mod theme;
mod typography;

pub use color::ColorRole;
pub use motion::Animation;
pub use registry::{registry, TokenEntry, TokenError, TokenGroup, TokenRegistry};
pub use scale::{Radius, Shadow, Spacing};
pub use theme::{ThemeMode, ThemeSource, ThemedValue};
pub use typography::{FontSize, FontWeight, Heading};
