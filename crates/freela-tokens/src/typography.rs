//! Typography tokens: font stacks, weights, and the type scale.

use std::sync::LazyLock;

use freela_core::{Token, TokenGroup};
use indexmap::IndexMap;

pub const CATEGORY: &str = "typography";

/// Documented order of the type scale, smallest first.
pub const SCALE_ORDER: [&str; 11] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl",
];

/// One step of the type scale.
#[derive(Debug, Clone, Copy)]
pub struct TypeStep {
    pub name: &'static str,
    /// Font size in pixels.
    pub size: f64,
    /// Unitless line height.
    pub line_height: f64,
    /// Letter spacing in em.
    pub letter_spacing: f64,
}

// Display sizes get tighter leading and negative tracking.
pub const SCALE: [TypeStep; 11] = [
    TypeStep { name: "xs", size: 12.0, line_height: 1.6, letter_spacing: 0.025 },
    TypeStep { name: "sm", size: 14.0, line_height: 1.6, letter_spacing: 0.01 },
    TypeStep { name: "base", size: 16.0, line_height: 1.5, letter_spacing: 0.0 },
    TypeStep { name: "lg", size: 18.0, line_height: 1.5, letter_spacing: 0.0 },
    TypeStep { name: "xl", size: 20.0, line_height: 1.4, letter_spacing: -0.01 },
    TypeStep { name: "2xl", size: 24.0, line_height: 1.35, letter_spacing: -0.015 },
    TypeStep { name: "3xl", size: 30.0, line_height: 1.3, letter_spacing: -0.02 },
    TypeStep { name: "4xl", size: 36.0, line_height: 1.25, letter_spacing: -0.025 },
    TypeStep { name: "5xl", size: 48.0, line_height: 1.15, letter_spacing: -0.03 },
    TypeStep { name: "6xl", size: 60.0, line_height: 1.1, letter_spacing: -0.035 },
    TypeStep { name: "7xl", size: 72.0, line_height: 1.05, letter_spacing: -0.04 },
];

pub const FONT_FAMILIES: [(&str, &str); 3] = [
    ("sans", "Inter, system-ui, -apple-system, sans-serif"),
    ("display", "Poppins, Inter, system-ui, sans-serif"),
    ("mono", "JetBrains Mono, ui-monospace, monospace"),
];

pub const FONT_WEIGHTS: [(&str, f64); 6] = [
    ("light", 300.0),
    ("normal", 400.0),
    ("medium", 500.0),
    ("semibold", 600.0),
    ("bold", 700.0),
    ("extrabold", 800.0),
];

/// Base text size, also the lookup fallback.
pub const BASE_SIZE: f64 = 16.0;

static TYPOGRAPHY: LazyLock<TokenGroup> = LazyLock::new(build);

pub fn tokens() -> &'static TokenGroup {
    &TYPOGRAPHY
}

fn build() -> TokenGroup {
    let families = FONT_FAMILIES
        .iter()
        .fold(TokenGroup::new(), |group, (name, stack)| {
            group.with(*name, Token::text(*stack))
        });

    let weights = FONT_WEIGHTS
        .iter()
        .fold(TokenGroup::new(), |group, (name, weight)| {
            group.with(*name, Token::number(*weight))
        });

    let sizes = SCALE.iter().fold(TokenGroup::new(), |group, step| {
        group.with_group(
            step.name,
            TokenGroup::new()
                .with("size", Token::px(step.size))
                .with("lineHeight", Token::number(step.line_height))
                .with("letterSpacing", Token::em(step.letter_spacing)),
        )
    });

    TokenGroup::new()
        .with_group("fontFamily", families)
        .with_group("fontWeight", weights)
        .with_group("fontSize", sizes)
}

/// Look up a typography token (e.g. `fontSize.xl.size`).
///
/// Missing paths fall back to the base size (`16px`).
pub fn get(path: &str) -> Token {
    crate::tree::category_lookup(CATEGORY, tokens(), path)
}

/// A font stack split into its individual families.
pub fn font_stack(name: &str) -> Vec<String> {
    tokens()
        .token_at(&["fontFamily", name])
        .and_then(Token::as_text)
        .map(|stack| stack.split(',').map(|f| f.trim().to_string()).collect())
        .unwrap_or_default()
}

pub fn generate_typography_vars(prefix: &str) -> IndexMap<String, String> {
    crate::css::category_vars(prefix, CATEGORY, tokens())
}
