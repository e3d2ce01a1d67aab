//! Layout scales: breakpoints, stacking order, corner radii and the page container.

use std::sync::LazyLock;

use freela_core::{Token, TokenGroup};
use indexmap::IndexMap;

pub const CATEGORY: &str = "layout";

pub const BREAKPOINTS: [(&str, f64); 5] = [
    ("sm", 640.0),
    ("md", 768.0),
    ("lg", 1024.0),
    ("xl", 1280.0),
    ("2xl", 1536.0),
];

pub const Z_INDEX: [(&str, f64); 6] = [
    ("base", 0.0),
    ("dropdown", 1000.0),
    ("sticky", 1100.0),
    ("overlay", 1300.0),
    ("modal", 1400.0),
    ("toast", 1500.0),
];

pub const RADII: [(&str, f64); 7] = [
    ("none", 0.0),
    ("sm", 4.0),
    ("md", 8.0),
    ("lg", 12.0),
    ("xl", 16.0),
    ("2xl", 24.0),
    ("full", 9999.0),
];

static LAYOUT: LazyLock<TokenGroup> = LazyLock::new(|| {
    let px_group = |entries: &[(&str, f64)]| {
        entries
            .iter()
            .fold(TokenGroup::new(), |group, (name, px)| group.with(*name, Token::px(*px)))
    };

    let z_index = Z_INDEX
        .iter()
        .fold(TokenGroup::new(), |group, (name, z)| group.with(*name, Token::number(*z)));

    TokenGroup::new()
        .with_group("breakpoints", px_group(&BREAKPOINTS))
        .with_group("zIndex", z_index)
        .with_group("radius", px_group(&RADII))
        .with_group(
            "container",
            TokenGroup::new()
                .with("padding", Token::rem(1.0))
                .with("maxWidth", Token::px(1280.0)),
        )
});

pub fn tokens() -> &'static TokenGroup {
    &LAYOUT
}

/// Look up a layout token (e.g. `breakpoints.md`). Missing paths fall back to `0`.
pub fn get(path: &str) -> Token {
    crate::tree::category_lookup(CATEGORY, tokens(), path)
}

pub fn generate_layout_vars(prefix: &str) -> IndexMap<String, String> {
    crate::css::category_vars(prefix, CATEGORY, tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_ascend() {
        for pair in BREAKPOINTS.windows(2) {
            assert!(pair[1].1 > pair[0].1);
        }
        assert_eq!(get("breakpoints.md").to_css(), "768px");
    }

    #[test]
    fn test_container_and_z_index() {
        assert_eq!(get("container.padding").to_css(), "1rem");
        assert_eq!(get("zIndex.modal").to_css(), "1400");
        assert_eq!(get("zIndex.missing").to_css(), "0");
    }
}
