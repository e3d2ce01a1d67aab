//! Primitive design tokens for the Freela marketing site.
//!
//! Categories:
//! - colors (brand families, neutrals, semantic states, glass overlays)
//! - spacing (4px grid)
//! - typography (families, weights, size scale)
//! - animation (durations, easings, springs, presets)
//! - shadows (elevation levels, brand glows)
//! - layout (breakpoints, z-index, radii, container)
//!
//! The aggregated tree is built once and shared read-only. Lookups never
//! fail; a missing path resolves to a per-category fallback and logs a
//! warning.

pub mod animation;
pub mod colors;
pub mod css;
pub mod framework;
pub mod layout;
pub mod shadows;
pub mod spacing;
pub mod tree;
pub mod typography;
pub mod validate;

pub use css::{generate_all_css_vars, generate_css_vars, DEFAULT_PREFIX};
pub use framework::{framework_config, to_framework_config};
pub use tree::{build_token_tree, fallback_for, get_token, lookup, tokens, Lookup};
pub use validate::{validate_tokens, validate_tree, ValidationReport};
