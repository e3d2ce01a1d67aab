//! Color tokens: brand families, neutrals, semantic states and glass overlays.

use std::sync::LazyLock;

use freela_core::{Token, TokenGroup};
use indexmap::IndexMap;

/// Category name under the tree root.
pub const CATEGORY: &str = "colors";

/// Shade keys every color family carries, lightest first.
pub const SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Brand family keys under `colors.brand`.
pub const BRANDS: [&str; 3] = ["freela", "empresa", "agencia"];

/// Semantic state keys under `colors.semantic`.
pub const SEMANTIC_STATES: [&str; 4] = ["success", "warning", "error", "info"];

/// Variant keys of each semantic state.
pub const SEMANTIC_VARIANTS: [&str; 3] = ["light", "main", "dark"];

/// Freelancer-facing pink/rose family.
pub const FREELA: [&str; 11] = [
    "#fef1f3", "#fde3e8", "#fbccd6", "#f7a1b4", "#f2728f", "#ec4464", "#d82550", "#b61a42",
    "#98193d", "#821839", "#48081b",
];

/// Company-facing blue family.
pub const EMPRESA: [&str; 11] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a", "#172554",
];

/// Agency-facing violet family.
pub const AGENCIA: [&str; 11] = [
    "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
    "#5b21b6", "#4c1d95", "#2e1065",
];

pub const NEUTRAL: [&str; 11] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827", "#030712",
];

const SEMANTIC: [(&str, [&str; 3]); 4] = [
    ("success", ["#dcfce7", "#22c55e", "#15803d"]),
    ("warning", ["#fef3c7", "#f59e0b", "#b45309"]),
    ("error", ["#fee2e2", "#ef4444", "#b91c1c"]),
    ("info", ["#e0f2fe", "#0ea5e9", "#0369a1"]),
];

const GLASS: [(&str, &str); 4] = [
    ("light", "rgba(255, 255, 255, 0.1)"),
    ("medium", "rgba(255, 255, 255, 0.2)"),
    ("dark", "rgba(0, 0, 0, 0.2)"),
    ("border", "rgba(255, 255, 255, 0.18)"),
];

static COLORS: LazyLock<TokenGroup> = LazyLock::new(build);

/// The frozen color category.
pub fn tokens() -> &'static TokenGroup {
    &COLORS
}

/// A color family (shade → hex) as a token group.
pub fn family(hexes: &[&str]) -> TokenGroup {
    SHADES
        .iter()
        .zip(hexes)
        .fold(TokenGroup::new(), |group, (shade, hex)| {
            group.with(*shade, Token::color(*hex))
        })
}

/// The shade family of a brand, if the brand exists.
pub fn brand_family(brand: &str) -> Option<&'static TokenGroup> {
    tokens().group_at(&["brand", brand])
}

fn build() -> TokenGroup {
    let brand = TokenGroup::new()
        .with_group("freela", family(&FREELA))
        .with_group("empresa", family(&EMPRESA))
        .with_group("agencia", family(&AGENCIA));

    let semantic = SEMANTIC
        .iter()
        .fold(TokenGroup::new(), |group, (state, values)| {
            let variants = SEMANTIC_VARIANTS
                .iter()
                .zip(values)
                .fold(TokenGroup::new(), |g, (variant, hex)| {
                    g.with(*variant, Token::color(*hex))
                });
            group.with_group(*state, variants)
        });

    let glass = GLASS
        .iter()
        .fold(TokenGroup::new(), |group, (name, rgba)| {
            group.with(*name, Token::color(*rgba))
        });

    TokenGroup::new()
        .with_group("brand", brand)
        .with_group("neutral", family(&NEUTRAL))
        .with_group("semantic", semantic)
        .with_group(
            "base",
            TokenGroup::new()
                .with("white", Token::color("#ffffff"))
                .with("black", Token::color("#000000")),
        )
        .with_group("glass", glass)
}

/// Look up a color relative to the category (e.g. `brand.freela.500`).
///
/// Missing paths fall back to `#000000` and log a warning.
pub fn get(path: &str) -> Token {
    crate::tree::category_lookup(CATEGORY, tokens(), path)
}

/// CSS custom properties for every color token.
pub fn generate_colors_vars(prefix: &str) -> IndexMap<String, String> {
    crate::css::category_vars(prefix, CATEGORY, tokens())
}
