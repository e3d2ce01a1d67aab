//! Per-brand component styles projected from the token tree.
//!
//! Every brand produces the same shape; only values differ. Missing tokens
//! in a custom tree resolve through the token fallbacks, so building a
//! theme never fails once the brand is known.

use freela_core::{Color, ThemeError, TokenTree};
use freela_tokens::colors::SHADES;
use freela_tokens::{lookup, tokens};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::brand::Brand;

/// Component style dictionary for one brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip)]
    pub brand: Brand,
    pub colors: ThemeColors,
    pub button: ButtonStyles,
    pub input: InputStyle,
    pub card: CardStyle,
    pub badge: BadgeStyle,
    pub gradients: Gradients,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// The brand family, shade → value.
    pub primary: IndexMap<String, String>,
    pub neutral: IndexMap<String, String>,
    pub background: String,
    pub foreground: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyles {
    pub primary: ButtonVariant,
    pub secondary: ButtonVariant,
    pub ghost: ButtonVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonVariant {
    pub background: String,
    pub background_hover: String,
    pub background_active: String,
    pub text: String,
    pub border: String,
    pub shadow: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyle {
    pub background: String,
    pub border: String,
    pub border_focus: String,
    pub focus_ring: String,
    pub placeholder: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub background: String,
    pub border: String,
    pub shadow: String,
    pub shadow_hover: String,
    pub glass_background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStyle {
    pub background: String,
    pub text: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradients {
    pub primary: String,
    pub hero: String,
    pub text: String,
}

const TRANSPARENT: &str = "transparent";
const FOCUS_RING_ALPHA: f32 = 0.5;

/// Reads token values for one brand.
struct Resolver<'a> {
    tree: &'a TokenTree,
    brand: Brand,
}

impl Resolver<'_> {
    fn css(&self, path: &str) -> String {
        lookup(self.tree, path).into_token().to_css()
    }

    fn primary(&self, shade: &str) -> String {
        self.css(&format!("colors.brand.{}.{}", self.brand, shade))
    }

    fn neutral(&self, shade: &str) -> String {
        self.css(&format!("colors.neutral.{}", shade))
    }

    fn primary_alpha(&self, shade: &str, alpha: f32) -> String {
        let value = self.primary(shade);
        Color::parse(&value)
            .map(|c| c.with_alpha(alpha).to_css())
            .unwrap_or(value)
    }

    fn family(&self, shade: impl Fn(&str) -> String) -> IndexMap<String, String> {
        SHADES.iter().map(|s| (s.to_string(), shade(s))).collect()
    }

    fn gradient(&self, angle: u16, from: &str, to: &str) -> String {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            angle,
            self.primary(from),
            self.primary(to)
        )
    }
}

impl Theme {
    /// Project `tree` into the component styles of `brand`.
    pub fn build(brand: Brand, tree: &TokenTree) -> Self {
        let r = Resolver { tree, brand };
        let white = r.css("colors.base.white");

        let colors = ThemeColors {
            primary: r.family(|s| r.primary(s)),
            neutral: r.family(|s| r.neutral(s)),
            background: white.clone(),
            foreground: r.neutral("900"),
            muted: r.neutral("500"),
        };

        let button = ButtonStyles {
            primary: ButtonVariant {
                background: r.primary("500"),
                background_hover: r.primary("600"),
                background_active: r.primary("700"),
                text: white.clone(),
                border: TRANSPARENT.to_string(),
                shadow: r.css(&format!("shadows.glow.{}", brand)),
            },
            secondary: ButtonVariant {
                background: white.clone(),
                background_hover: r.primary("50"),
                background_active: r.primary("100"),
                text: r.primary("600"),
                border: r.primary("200"),
                shadow: r.css("shadows.elevation.1"),
            },
            ghost: ButtonVariant {
                background: TRANSPARENT.to_string(),
                background_hover: r.primary("50"),
                background_active: r.primary("100"),
                text: r.primary("600"),
                border: TRANSPARENT.to_string(),
                shadow: "none".to_string(),
            },
        };

        let input = InputStyle {
            background: white.clone(),
            border: r.neutral("300"),
            border_focus: r.primary("500"),
            focus_ring: r.primary_alpha("500", FOCUS_RING_ALPHA),
            placeholder: r.neutral("400"),
            text: r.neutral("900"),
        };

        let card = CardStyle {
            background: white,
            border: r.neutral("200"),
            shadow: r.css("shadows.elevation.2"),
            shadow_hover: r.css("shadows.elevation.4"),
            glass_background: r.css("colors.glass.light"),
        };

        let badge = BadgeStyle {
            background: r.primary("100"),
            text: r.primary("700"),
            border: r.primary("200"),
        };

        let gradients = Gradients {
            primary: r.gradient(135, "500", "700"),
            hero: r.gradient(135, "600", "900"),
            text: r.gradient(90, "500", "400"),
        };

        Theme {
            brand,
            colors,
            button,
            input,
            card,
            badge,
            gradients,
        }
    }

    /// The theme as a nested JSON object.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Every style value keyed by its dot path (e.g. `button.primary.background`).
    pub fn flatten(&self) -> serde_json::Result<IndexMap<String, String>> {
        let mut out = IndexMap::new();
        flatten_value(&self.to_value()?, &mut String::new(), &mut out);
        Ok(out)
    }

    /// A single style value by dot path. `Ok(None)` when the path names a
    /// section or nothing at all.
    pub fn get(&self, path: &str) -> serde_json::Result<Option<String>> {
        let pointer = format!("/{}", path.replace('.', "/"));
        let value = self.to_value()?;
        Ok(value
            .pointer(&pointer)
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}

fn flatten_value(value: &Value, prefix: &mut String, out: &mut IndexMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                flatten_value(child, prefix, out);
                prefix.truncate(len);
            }
        }
        Value::String(s) => {
            out.insert(prefix.clone(), s.clone());
        }
        other => {
            out.insert(prefix.clone(), other.to_string());
        }
    }
}

/// Build the theme for a brand name over the default token tree.
pub fn build_theme(name: &str) -> Result<Theme, ThemeError> {
    let brand: Brand = name.parse()?;
    Ok(Theme::build(brand, tokens()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_set(theme: &Theme) -> Vec<String> {
        theme.flatten().unwrap().into_keys().collect()
    }

    #[test]
    fn test_themes_share_shape() {
        let freela = build_theme("freela").unwrap();
        let empresa = build_theme("empresa").unwrap();
        let agencia = build_theme("agencia").unwrap();

        assert_eq!(key_set(&freela), key_set(&empresa));
        assert_eq!(key_set(&freela), key_set(&agencia));
        assert_ne!(freela, empresa);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        assert_eq!(
            build_theme("acme"),
            Err(ThemeError::UnknownTheme {
                name: "acme".to_string()
            })
        );
    }

    #[test]
    fn test_freela_values() {
        let theme = build_theme("freela").unwrap();
        assert_eq!(theme.brand, Brand::Freela);
        assert_eq!(theme.button.primary.background, "#ec4464");
        assert_eq!(theme.button.primary.background_hover, "#d82550");
        assert_eq!(
            theme.button.primary.shadow,
            "0 0 20px 0 rgba(236, 68, 100, 0.4)"
        );
        assert_eq!(theme.input.focus_ring, "rgba(236, 68, 100, 0.5)");
        assert_eq!(theme.card.glass_background, "rgba(255, 255, 255, 0.1)");
        assert_eq!(
            theme.gradients.primary,
            "linear-gradient(135deg, #ec4464 0%, #b61a42 100%)"
        );
        assert_eq!(theme.colors.primary["500"], "#ec4464");
    }

    #[test]
    fn test_empresa_uses_blue_family() {
        let theme = build_theme("empresa").unwrap();
        assert_eq!(theme.button.primary.background, "#3b82f6");
        assert_eq!(theme.badge.text, "#1d4ed8");
    }

    #[test]
    fn test_value_keys_are_camel_case() {
        let value = build_theme("agencia").unwrap().to_value().unwrap();
        assert!(value["button"]["primary"].get("backgroundHover").is_some());
        assert!(value["input"].get("focusRing").is_some());
        assert!(value["card"].get("glassBackground").is_some());
        assert!(value.get("brand").is_none());
    }

    #[test]
    fn test_get_by_path() {
        let theme = build_theme("agencia").unwrap();
        assert_eq!(
            theme.get("button.primary.background").unwrap().as_deref(),
            Some("#8b5cf6")
        );
        assert_eq!(
            theme.get("colors.primary.50").unwrap().as_deref(),
            Some("#f5f3ff")
        );
        assert_eq!(theme.get("button.primary").unwrap(), None);
        assert_eq!(theme.get("nope").unwrap(), None);
    }

    #[test]
    fn test_flatten_covers_every_section() {
        let theme = build_theme("freela").unwrap();
        let value = theme.to_value().unwrap();
        let sections: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            sections,
            ["colors", "button", "input", "card", "badge", "gradients"]
        );

        let flat = theme.flatten().unwrap();
        for section in sections {
            let prefix = format!("{}.", section);
            assert!(flat.keys().any(|key| key.starts_with(&prefix)), "{}", section);
        }
        assert!(flat.values().all(|value| !value.is_empty()));
        assert_eq!(flat["button.primary.background"], "#ec4464");
    }

    #[test]
    fn test_empty_tree_keeps_shape() {
        let fallback = Theme::build(Brand::Empresa, &TokenTree::default());
        let full = build_theme("empresa").unwrap();
        assert_eq!(key_set(&fallback), key_set(&full));
        assert_eq!(fallback.button.primary.background, "#000000");
        assert_eq!(fallback.button.primary.shadow, "none");
    }
}
