//! Projection of the token tree into a utility-CSS framework configuration
//! (Tailwind `theme.extend` shape).

use convert_case::{Case, Casing};
use freela_core::{Token, TokenGroup, TokenNode, TokenTree};
use serde_json::{json, Map, Value};

use crate::tree::tokens;
use crate::{animation, shadows};

/// Nested group as a JSON object of CSS strings.
fn group_to_json(group: &TokenGroup) -> Value {
    let map: Map<String, Value> = group
        .iter()
        .map(|(key, node)| {
            let value = match node {
                TokenNode::Leaf(token) => Value::String(token.to_css()),
                TokenNode::Group(child) => group_to_json(child),
            };
            (key.clone(), value)
        })
        .collect();
    Value::Object(map)
}

fn group_or_empty(tree: &TokenTree, path: &[&str]) -> Value {
    tree.root()
        .group_at(path)
        .map(group_to_json)
        .unwrap_or_else(|| Value::Object(Map::new()))
}

fn leaves_to_json<F>(group: Option<&TokenGroup>, mut f: F) -> Value
where
    F: FnMut(&str, &Token) -> Option<(String, Value)>,
{
    let map: Map<String, Value> = group
        .into_iter()
        .flat_map(|g| g.leaves())
        .filter_map(|(key, token)| f(key, token))
        .collect();
    Value::Object(map)
}

fn font_families(tree: &TokenTree) -> Value {
    leaves_to_json(tree.root().group_at(&["typography", "fontFamily"]), |name, token| {
        let stack: Vec<Value> = token
            .as_text()?
            .split(',')
            .map(|f| Value::String(f.trim().to_string()))
            .collect();
        Some((name.to_string(), Value::Array(stack)))
    })
}

fn font_sizes(tree: &TokenTree) -> Value {
    let mut map = Map::new();
    if let Some(sizes) = tree.root().group_at(&["typography", "fontSize"]) {
        for (name, node) in sizes.iter() {
            let Some(step) = node.as_group() else { continue };
            let Some(size) = step.get("size").and_then(TokenNode::as_leaf) else {
                continue;
            };
            let mut extra = Map::new();
            for (key, token) in step.leaves().filter(|(k, _)| *k != "size") {
                extra.insert(key.to_string(), Value::String(token.to_css()));
            }
            map.insert(
                name.clone(),
                json!([size.to_css(), Value::Object(extra)]),
            );
        }
    }
    Value::Object(map)
}

fn box_shadows(tree: &TokenTree) -> Value {
    let mut map = Map::new();
    let Some(group) = tree.category(shadows::CATEGORY) else {
        return Value::Object(map);
    };

    if let Some(elevation) = group.group_at(&["elevation"]) {
        for (key, token) in elevation.leaves() {
            let name = key
                .parse::<usize>()
                .ok()
                .and_then(|level| shadows::ELEVATION_NAMES.get(level.wrapping_sub(1)))
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("elevation-{}", key));
            map.insert(name, Value::String(token.to_css()));
        }
    }
    if let Some(glow) = group.group_at(&["glow"]) {
        for (brand, token) in glow.leaves() {
            map.insert(format!("glow-{}", brand), Value::String(token.to_css()));
        }
    }
    for (key, token) in group.leaves() {
        map.insert(key.to_string(), Value::String(token.to_css()));
    }
    Value::Object(map)
}

/// Keyframe sets referenced by the tree's animation presets.
fn keyframes(tree: &TokenTree) -> Value {
    let used: Vec<&str> = tree
        .root()
        .group_at(&["animation", "presets"])
        .into_iter()
        .flat_map(|g| g.leaves())
        .filter_map(|(_, token)| token.as_text()?.split_whitespace().next())
        .collect();

    let map: Map<String, Value> = animation::KEYFRAMES
        .iter()
        .filter(|(name, _)| used.contains(name))
        .map(|(name, frames)| {
            let steps: Map<String, Value> = frames
                .iter()
                .map(|(offset, props)| {
                    let props: Map<String, Value> = props
                        .iter()
                        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                        .collect();
                    (offset.to_string(), Value::Object(props))
                })
                .collect();
            (name.to_string(), Value::Object(steps))
        })
        .collect();
    Value::Object(map)
}

fn css_leaves(tree: &TokenTree, path: &[&str]) -> Value {
    leaves_to_json(tree.root().group_at(path), |name, token| {
        Some((name.to_string(), Value::String(token.to_css())))
    })
}

/// Framework configuration for any tree.
pub fn framework_config(tree: &TokenTree) -> Value {
    let transition_timing =
        leaves_to_json(tree.root().group_at(&["animation", "easing"]), |name, token| {
            Some((name.to_case(Case::Kebab), Value::String(token.to_css())))
        });

    let container_padding = tree
        .get("layout.container.padding")
        .map(Token::to_css)
        .unwrap_or_else(|| "1rem".to_string());
    let mut container = json!({ "center": true, "padding": container_padding });
    if let Some(max_width) = tree.get("layout.container.maxWidth") {
        container["maxWidth"] = Value::String(max_width.to_css());
    }

    json!({
        "colors": group_or_empty(tree, &["colors"]),
        "spacing": group_or_empty(tree, &["spacing"]),
        "fontFamily": font_families(tree),
        "fontSize": font_sizes(tree),
        "fontWeight": css_leaves(tree, &["typography", "fontWeight"]),
        "boxShadow": box_shadows(tree),
        "animation": group_or_empty(tree, &["animation", "presets"]),
        "keyframes": keyframes(tree),
        "transitionDuration": css_leaves(tree, &["animation", "duration"]),
        "transitionTimingFunction": transition_timing,
        "zIndex": css_leaves(tree, &["layout", "zIndex"]),
        "screens": group_or_empty(tree, &["layout", "breakpoints"]),
        "container": container,
        "borderRadius": group_or_empty(tree, &["layout", "radius"]),
    })
}

/// Framework configuration for the default tree.
pub fn to_framework_config() -> Value {
    framework_config(tokens())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typography;

    const REQUIRED_KEYS: [&str; 12] = [
        "colors",
        "spacing",
        "fontFamily",
        "fontSize",
        "fontWeight",
        "boxShadow",
        "animation",
        "transitionDuration",
        "transitionTimingFunction",
        "zIndex",
        "screens",
        "container",
    ];

    #[test]
    fn test_config_has_framework_keys() {
        let config = to_framework_config();
        for key in REQUIRED_KEYS {
            assert!(config.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_config_values() {
        let config = to_framework_config();
        assert_eq!(config["colors"]["brand"]["freela"]["500"], "#ec4464");
        assert_eq!(config["spacing"]["4"], "16px");
        assert_eq!(config["fontSize"]["xl"][0], "20px");
        assert_eq!(config["fontSize"]["xl"][1]["lineHeight"], "1.4");
        assert_eq!(config["fontFamily"]["sans"][0], "Inter");
        assert_eq!(config["fontWeight"]["bold"], "700");
        assert_eq!(config["boxShadow"]["sm"], "0 1px 2px 0 rgba(0, 0, 0, 0.05)");
        assert_eq!(config["boxShadow"]["glow-freela"], "0 0 20px 0 rgba(236, 68, 100, 0.4)");
        assert_eq!(config["transitionDuration"]["fast"], "150ms");
        assert_eq!(
            config["transitionTimingFunction"]["ease-in-out"],
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
        assert_eq!(config["zIndex"]["modal"], "1400");
        assert_eq!(config["screens"]["md"], "768px");
        assert_eq!(config["container"]["center"], true);
        assert_eq!(config["container"]["padding"], "1rem");
        assert_eq!(config["keyframes"]["fadeIn"]["0%"]["opacity"], "0");
    }

    #[test]
    fn test_every_elevation_maps_to_a_name() {
        let config = to_framework_config();
        for name in shadows::ELEVATION_NAMES {
            assert!(config["boxShadow"].get(name).is_some());
        }
        assert!(config["boxShadow"].get("inner").is_some());
    }

    #[test]
    fn test_empty_tree_yields_empty_sections() {
        let config = framework_config(&TokenTree::default());
        assert_eq!(config["colors"], json!({}));
        assert_eq!(config["fontSize"], json!({}));
        assert_eq!(config["keyframes"], json!({}));
        assert_eq!(config["container"]["padding"], "1rem");
    }

    #[test]
    fn test_type_scale_order_is_preserved() {
        let config = to_framework_config();
        let names: Vec<&str> = config["fontSize"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, typography::SCALE_ORDER);
    }

    #[test]
    fn test_keyframes_follow_tree_presets() {
        let tree = TokenTree::from_categories([(
            "animation",
            TokenGroup::new().with_group(
                "presets",
                TokenGroup::new().with("fade-in", Token::text("fadeIn 300ms linear both")),
            ),
        )]);
        let config = framework_config(&tree);
        let names: Vec<&String> = config["keyframes"].as_object().unwrap().keys().collect();
        assert_eq!(names, vec!["fadeIn"]);

        let full = to_framework_config();
        assert_eq!(
            full["keyframes"].as_object().unwrap().len(),
            animation::KEYFRAMES.len()
        );
    }
}
