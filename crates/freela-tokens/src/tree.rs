//! Token aggregation and full-path lookup.

use std::sync::LazyLock;

use freela_core::{Shadow, Token, TokenGroup, TokenTree};
use tracing::warn;

use crate::{animation, colors, layout, shadows, spacing, typography};

static TOKENS: LazyLock<TokenTree> = LazyLock::new(build_token_tree);

/// Merge every primitive category into one tree, in documentation order.
pub fn build_token_tree() -> TokenTree {
    TokenTree::from_categories([
        (colors::CATEGORY, colors::tokens().clone()),
        (spacing::CATEGORY, spacing::tokens().clone()),
        (typography::CATEGORY, typography::tokens().clone()),
        (animation::CATEGORY, animation::tokens().clone()),
        (shadows::CATEGORY, shadows::tokens().clone()),
        (layout::CATEGORY, layout::tokens().clone()),
    ])
}

/// The process-wide token tree, built on first use.
pub fn tokens() -> &'static TokenTree {
    &TOKENS
}

/// The value returned for a missing token, chosen by category.
///
/// Colors and unknown categories resolve to black so a missing token
/// degrades visually instead of failing.
pub fn fallback_for(category: &str) -> Token {
    match category {
        spacing::CATEGORY => Token::px(0.0),
        typography::CATEGORY => Token::px(typography::BASE_SIZE),
        animation::CATEGORY => Token::ms(animation::DEFAULT_DURATION),
        shadows::CATEGORY => Token::Shadow(Shadow::none()),
        layout::CATEGORY => Token::number(0.0),
        _ => Token::color("#000000"),
    }
}

/// Outcome of a token lookup that never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Token),
    Fallback { token: Token, missing: String },
}

impl<'a> Lookup<'a> {
    pub fn token(&self) -> &Token {
        match self {
            Lookup::Found(token) => token,
            Lookup::Fallback { token, .. } => token,
        }
    }

    pub fn into_token(self) -> Token {
        match self {
            Lookup::Found(token) => token.clone(),
            Lookup::Fallback { token, .. } => token,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback { .. })
    }
}

/// Resolve a full dot path in `tree`, falling back by category on a miss.
pub fn lookup<'a>(tree: &'a TokenTree, path: &str) -> Lookup<'a> {
    match tree.resolve(path) {
        Ok(token) => Lookup::Found(token),
        Err(err) => {
            let category = path.split('.').next().unwrap_or_default();
            let token = fallback_for(category);
            warn!(%path, fallback = %token, "design token lookup failed: {}", err);
            Lookup::Fallback {
                token,
                missing: path.to_string(),
            }
        }
    }
}

/// Resolve a full dot path (e.g. `colors.brand.freela.500`) in the default tree.
pub fn get_token(path: &str) -> Token {
    lookup(tokens(), path).into_token()
}

pub(crate) fn category_lookup(category: &str, group: &TokenGroup, path: &str) -> Token {
    match group.lookup(path) {
        Some(token) => token.clone(),
        None => {
            let token = fallback_for(category);
            warn!(%category, %path, fallback = %token, "design token not found");
            token
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_token_examples() {
        assert_eq!(get_token("spacing.4").to_css(), "16px");
        assert_eq!(get_token("colors.brand.freela.500").to_css(), "#ec4464");
    }

    #[test]
    fn test_missing_path_records_one_fallback() {
        let result = lookup(tokens(), "nonexistent.path");
        assert_eq!(
            result,
            Lookup::Fallback {
                token: Token::color("#000000"),
                missing: "nonexistent.path".to_string(),
            }
        );
        assert_eq!(get_token("nonexistent.path").to_css(), "#000000");
    }

    #[test]
    fn test_group_path_falls_back() {
        let result = lookup(tokens(), "colors.brand.freela");
        assert!(result.is_fallback());
        assert_eq!(result.token().to_css(), "#000000");
    }

    #[test]
    fn test_category_fallbacks() {
        assert_eq!(get_token("spacing.999").to_css(), "0px");
        assert_eq!(get_token("typography.fontSize.giant.size").to_css(), "16px");
        assert_eq!(get_token("animation.duration.eternal").to_css(), "300ms");
        assert_eq!(get_token("shadows.elevation.42").to_css(), "none");
    }

    #[test]
    fn test_tree_contains_every_category() {
        let names: Vec<&str> = tokens().categories().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["colors", "spacing", "typography", "animation", "shadows", "layout"]
        );
        assert_eq!(tokens(), &build_token_tree());
    }

    proptest! {
        #[test]
        fn test_lookup_never_panics(path in "[a-z0-9.]{0,40}") {
            let result = lookup(tokens(), &path);
            if let Lookup::Found(token) = result {
                prop_assert_eq!(Some(token), tokens().get(&path));
            }
        }

        #[test]
        fn test_every_spacing_step_resolves(step in prop::sample::select(spacing::SCALE.to_vec())) {
            let token = get_token(&format!("spacing.{}", step));
            prop_assert_eq!(token.to_css(), format!("{}px", step * 4));
        }
    }
}
