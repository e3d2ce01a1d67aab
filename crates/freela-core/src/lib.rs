//! Core types for the Freela design system.
//!
//! This crate provides the foundational types used by the token and theme crates:
//! - Token value types (colors, lengths, curves, shadows)
//! - Token paths and the nested, read-only token tree
//! - Error types

pub mod errors;
pub mod tokens;
pub mod types;

pub use errors::*;
pub use tokens::*;
pub use types::*;
