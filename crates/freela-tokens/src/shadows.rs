//! Shadow tokens: elevation levels, brand glows and an inner shadow.

use std::sync::LazyLock;

use freela_core::{Color, Shadow, ShadowLayer, Token, TokenGroup};
use indexmap::IndexMap;

pub const CATEGORY: &str = "shadows";

/// Framework-facing names for elevation levels 1 through 5.
pub const ELEVATION_NAMES: [&str; 5] = ["sm", "md", "lg", "xl", "2xl"];

const fn black(alpha: f32) -> Color {
    Color::rgba(0, 0, 0, alpha)
}

static ELEVATION: [&[ShadowLayer]; 5] = [
    &[ShadowLayer::new(0.0, 1.0, 2.0, 0.0, black(0.05))],
    &[
        ShadowLayer::new(0.0, 4.0, 6.0, -1.0, black(0.1)),
        ShadowLayer::new(0.0, 2.0, 4.0, -2.0, black(0.1)),
    ],
    &[
        ShadowLayer::new(0.0, 10.0, 15.0, -3.0, black(0.1)),
        ShadowLayer::new(0.0, 4.0, 6.0, -4.0, black(0.1)),
    ],
    &[
        ShadowLayer::new(0.0, 20.0, 25.0, -5.0, black(0.1)),
        ShadowLayer::new(0.0, 8.0, 10.0, -6.0, black(0.1)),
    ],
    &[ShadowLayer::new(0.0, 25.0, 50.0, -12.0, black(0.25))],
];

const GLOWS: [(&str, Color); 3] = [
    ("freela", Color::rgba(236, 68, 100, 0.4)),
    ("empresa", Color::rgba(59, 130, 246, 0.4)),
    ("agencia", Color::rgba(139, 92, 246, 0.4)),
];

static SHADOWS: LazyLock<TokenGroup> = LazyLock::new(build);

pub fn tokens() -> &'static TokenGroup {
    &SHADOWS
}

fn build() -> TokenGroup {
    let elevation = ELEVATION
        .iter()
        .enumerate()
        .fold(TokenGroup::new(), |group, (i, layers)| {
            group.with(
                (i + 1).to_string(),
                Token::Shadow(Shadow::new(layers.iter().copied())),
            )
        });

    let glow = GLOWS
        .iter()
        .fold(TokenGroup::new(), |group, (brand, color)| {
            group.with(
                *brand,
                Token::Shadow(Shadow::new([ShadowLayer::new(0.0, 0.0, 20.0, 0.0, *color)])),
            )
        });

    let inner = Shadow::new([ShadowLayer::new(0.0, 2.0, 4.0, 0.0, black(0.05)).inset()]);

    TokenGroup::new()
        .with_group("elevation", elevation)
        .with_group("glow", glow)
        .with("inner", Token::Shadow(inner))
}

/// Look up a shadow (e.g. `elevation.3`). Missing paths fall back to `none`.
pub fn get(path: &str) -> Token {
    crate::tree::category_lookup(CATEGORY, tokens(), path)
}

pub fn generate_shadows_vars(prefix: &str) -> IndexMap<String, String> {
    crate::css::category_vars(prefix, CATEGORY, tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_grows_with_level() {
        let levels: Vec<&Shadow> = (1..=5)
            .map(|level| {
                tokens()
                    .token_at(&["elevation".to_string(), level.to_string()])
                    .and_then(Token::as_shadow)
                    .unwrap()
            })
            .collect();
        for pair in levels.windows(2) {
            let lower = pair[0].primary_layer().unwrap();
            let higher = pair[1].primary_layer().unwrap();
            assert!(higher.blur > lower.blur);
            assert!(higher.offset_y > lower.offset_y);
        }
    }

    #[test]
    fn test_shadow_css() {
        assert_eq!(get("elevation.1").to_css(), "0 1px 2px 0 rgba(0, 0, 0, 0.05)");
        assert_eq!(get("glow.freela").to_css(), "0 0 20px 0 rgba(236, 68, 100, 0.4)");
        assert_eq!(get("inner").to_css(), "inset 0 2px 4px 0 rgba(0, 0, 0, 0.05)");
    }

    #[test]
    fn test_missing_shadow_falls_back_to_none() {
        assert_eq!(get("elevation.9").to_css(), "none");
    }
}
