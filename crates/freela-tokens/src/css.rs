//! CSS custom property generation.
//!
//! Every leaf becomes one declaration named
//! `--<prefix>-<category>-<path segments joined by '-'>`, with camelCase
//! segments converted to kebab-case.

use convert_case::{Boundary, Case, Converter};
use freela_core::{TokenGroup, TokenTree};
use indexmap::IndexMap;

use crate::tree::tokens;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "ds";

fn kebab() -> Converter {
    Converter::new()
        .set_boundaries(&[Boundary::LowerUpper])
        .to_case(Case::Kebab)
}

/// Build a custom property name from a prefix and path segments.
pub fn var_name<S: AsRef<str>>(prefix: &str, segments: &[S]) -> String {
    let conv = kebab();
    let mut name = String::from("--");
    if !prefix.is_empty() {
        name.push_str(prefix);
        name.push('-');
    }
    let joined: Vec<String> = segments.iter().map(|s| conv.convert(s.as_ref())).collect();
    name.push_str(&joined.join("-"));
    name
}

/// Flatten one category into custom property name → CSS value.
pub fn category_vars(prefix: &str, category: &str, group: &TokenGroup) -> IndexMap<String, String> {
    group
        .flatten()
        .into_iter()
        .map(|(segments, token)| {
            let mut path = Vec::with_capacity(segments.len() + 1);
            path.push(category);
            path.extend(segments);
            (var_name(prefix, &path), token.to_css())
        })
        .collect()
}

/// Flatten every category of `tree`.
pub fn tree_vars(tree: &TokenTree, prefix: &str) -> IndexMap<String, String> {
    let mut vars = IndexMap::with_capacity(tree.leaf_count());
    for (category, group) in tree.categories() {
        vars.extend(category_vars(prefix, category, group));
    }
    vars
}

/// Render declarations as a `:root { ... }` block.
pub fn render_root(vars: &IndexMap<String, String>) -> String {
    let mut lines = Vec::with_capacity(vars.len() + 2);
    lines.push(":root {".to_string());
    for (name, value) in vars {
        lines.push(format!("  {}: {};", name, value));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// The `:root` block for any tree.
pub fn generate_css_vars(tree: &TokenTree, prefix: &str) -> String {
    render_root(&tree_vars(tree, prefix))
}

/// The `:root` block for the default tree with the default prefix.
pub fn generate_all_css_vars() -> String {
    generate_css_vars(tokens(), DEFAULT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freela_core::Token;

    #[test]
    fn test_var_name() {
        assert_eq!(
            var_name("ds", &["colors", "brand", "freela", "500"]),
            "--ds-colors-brand-freela-500"
        );
        assert_eq!(
            var_name("", &["animation", "easing", "easeInOut"]),
            "--animation-easing-ease-in-out"
        );
        assert_eq!(var_name("ds", &["layout", "radius", "2xl"]), "--ds-layout-radius-2xl");
    }

    #[test]
    fn test_one_declaration_per_leaf() {
        let css = generate_all_css_vars();
        let declarations = css.lines().filter(|l| l.trim_start().starts_with("--")).count();
        assert_eq!(declarations, tokens().leaf_count());
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_names_are_unique() {
        let vars = tree_vars(tokens(), DEFAULT_PREFIX);
        assert_eq!(vars.len(), tokens().leaf_count());
    }

    #[test]
    fn test_category_generators_cover_the_tree() {
        use crate::{animation, colors, layout, shadows, spacing, typography};

        let mut vars = IndexMap::new();
        vars.extend(colors::generate_colors_vars("ds"));
        vars.extend(spacing::generate_spacing_vars("ds"));
        vars.extend(typography::generate_typography_vars("ds"));
        vars.extend(animation::generate_animation_vars("ds"));
        vars.extend(shadows::generate_shadows_vars("ds"));
        vars.extend(layout::generate_layout_vars("ds"));
        assert_eq!(vars, tree_vars(tokens(), "ds"));
    }

    #[test]
    fn test_render_small_tree() {
        let tree = TokenTree::from_categories([
            (
                "colors",
                TokenGroup::new().with_group(
                    "brand",
                    TokenGroup::new().with_group(
                        "freela",
                        TokenGroup::new().with("500", Token::color("#ec4464")),
                    ),
                ),
            ),
            ("spacing", TokenGroup::new().with("4", Token::px(16.0))),
            (
                "animation",
                TokenGroup::new().with_group(
                    "duration",
                    TokenGroup::new().with("fast", Token::ms(150)),
                ),
            ),
        ]);

        insta::assert_snapshot!(generate_css_vars(&tree, "fl"), @r###"
        :root {
          --fl-colors-brand-freela-500: #ec4464;
          --fl-spacing-4: 16px;
          --fl-animation-duration-fast: 150ms;
        }
        "###);
    }
}
