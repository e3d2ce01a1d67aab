//! Token validation.
//!
//! Checks are documented and deliberately non-exhaustive. Structural
//! problems (missing keys, malformed values, broken scales) are errors;
//! stylistic drift (off-grid spacing, loosening leading) is a warning.
//! Validation never panics and never mutates the tree.

use std::sync::LazyLock;

use freela_core::{Token, TokenGroup, TokenKind, TokenTree};
use regex::Regex;
use serde::Serialize;

use crate::tree::tokens;
use crate::{animation, colors, shadows, spacing, typography};

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(#[0-9a-fA-F]{6}|rgba\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*(0|1|0?\.\d+|1\.0+)\s*\))$",
    )
    .expect("color pattern is a valid regex")
});

/// Result of validating a token tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

/// A path every complete token tree must define, with its expected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredToken {
    pub path: String,
    pub kind: TokenKind,
}

impl RequiredToken {
    fn new(path: String, kind: TokenKind) -> Self {
        Self { path, kind }
    }
}

/// Paths checked for presence and kind.
pub fn required_paths() -> Vec<RequiredToken> {
    let mut required = Vec::new();

    for brand in colors::BRANDS {
        for shade in colors::SHADES {
            required.push(RequiredToken::new(
                format!("colors.brand.{}.{}", brand, shade),
                TokenKind::Color,
            ));
        }
    }
    for shade in colors::SHADES {
        required.push(RequiredToken::new(format!("colors.neutral.{}", shade), TokenKind::Color));
    }
    for state in colors::SEMANTIC_STATES {
        for variant in colors::SEMANTIC_VARIANTS {
            required.push(RequiredToken::new(
                format!("colors.semantic.{}.{}", state, variant),
                TokenKind::Color,
            ));
        }
    }
    for base in ["white", "black"] {
        required.push(RequiredToken::new(format!("colors.base.{}", base), TokenKind::Color));
    }

    for step in [0, 1, 2, 4, 8, 16] {
        required.push(RequiredToken::new(format!("spacing.{}", step), TokenKind::Length));
    }

    required.push(RequiredToken::new(
        "typography.fontFamily.sans".to_string(),
        TokenKind::Text,
    ));
    for weight in ["normal", "bold"] {
        required.push(RequiredToken::new(
            format!("typography.fontWeight.{}", weight),
            TokenKind::Number,
        ));
    }
    for name in typography::SCALE_ORDER {
        required.push(RequiredToken::new(
            format!("typography.fontSize.{}.size", name),
            TokenKind::Length,
        ));
        required.push(RequiredToken::new(
            format!("typography.fontSize.{}.lineHeight", name),
            TokenKind::Number,
        ));
        required.push(RequiredToken::new(
            format!("typography.fontSize.{}.letterSpacing", name),
            TokenKind::Length,
        ));
    }

    for duration in ["fast", "normal", "slow"] {
        required.push(RequiredToken::new(
            format!("animation.duration.{}", duration),
            TokenKind::Duration,
        ));
    }
    for easing in ["linear", "easeOut", "easeInOut"] {
        required.push(RequiredToken::new(
            format!("animation.easing.{}", easing),
            TokenKind::Curve,
        ));
    }

    for level in 1..=shadows::ELEVATION_NAMES.len() {
        required.push(RequiredToken::new(
            format!("shadows.elevation.{}", level),
            TokenKind::Shadow,
        ));
    }

    required
}

/// Validate the default token tree.
pub fn validate_tokens() -> ValidationReport {
    validate_tree(tokens())
}

/// Validate any token tree.
pub fn validate_tree(tree: &TokenTree) -> ValidationReport {
    let mut report = ValidationReport::new();

    check_required(tree, &mut report);
    if let Some(group) = tree.category(colors::CATEGORY) {
        check_colors(group, &mut report);
    }
    if let Some(group) = tree.category(spacing::CATEGORY) {
        check_spacing(group, &mut report);
    }
    if let Some(group) = tree.category(typography::CATEGORY) {
        check_typography(group, &mut report);
    }
    if let Some(group) = tree.category(animation::CATEGORY) {
        check_animation(group, &mut report);
    }
    if let Some(group) = tree.category(shadows::CATEGORY) {
        check_shadows(group, &mut report);
    }

    report.finish()
}

fn check_required(tree: &TokenTree, report: &mut ValidationReport) {
    for required in required_paths() {
        if let Err(e) = tree.resolve_as(&required.path, required.kind) {
            report.error(e.to_string());
        }
    }
}

fn check_colors(group: &TokenGroup, report: &mut ValidationReport) {
    for (segments, token) in group.flatten() {
        let path = format!("{}.{}", colors::CATEGORY, segments.join("."));
        match token {
            Token::Color(value) if COLOR_PATTERN.is_match(value) => {}
            Token::Color(value) => {
                report.error(format!("{}: {:?} is not a 6-digit hex or rgba() color", path, value))
            }
            other => report.error(format!("{}: expected a color, found a {}", path, other.kind())),
        }
    }
}

fn check_spacing(group: &TokenGroup, report: &mut ValidationReport) {
    let mut steps: Vec<(f64, f64, &str)> = Vec::with_capacity(group.len());

    for (key, token) in group.leaves() {
        let path = format!("{}.{}", spacing::CATEGORY, key);
        let Ok(step) = key.parse::<f64>() else {
            report.error(format!("{}: spacing key is not numeric", path));
            continue;
        };
        let px = match token.as_length().and_then(|l| l.to_px()) {
            Some(px) => px,
            None => {
                report.error(format!("{}: expected a pixel length, found {}", path, token));
                continue;
            }
        };
        if px < 0.0 || px.fract() != 0.0 {
            report.error(format!("{}: {}px is not a non-negative whole pixel count", path, px));
            continue;
        }
        if px % spacing::SUB_UNIT != 0.0 {
            report.warn(format!(
                "{}: {}px is not aligned to the {}px grid",
                path,
                px,
                spacing::SUB_UNIT
            ));
        }
        steps.push((step, px, key));
    }

    steps.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in steps.windows(2) {
        let (_, lower, lower_key) = pair[0];
        let (_, higher, higher_key) = pair[1];
        if higher <= lower {
            report.error(format!(
                "spacing.{} ({}px) does not increase over spacing.{} ({}px)",
                higher_key, higher, lower_key, lower
            ));
        }
    }
}

fn check_typography(group: &TokenGroup, report: &mut ValidationReport) {
    let Some(sizes) = group.group_at(&["fontSize"]) else {
        return;
    };

    for key in sizes.keys() {
        if !typography::SCALE_ORDER.contains(&key) {
            report.warn(format!(
                "typography.fontSize.{}: not part of the documented scale order",
                key
            ));
        }
    }

    struct Step<'a> {
        name: &'a str,
        size: Option<f64>,
        line_height: Option<f64>,
        letter_spacing: Option<f64>,
    }

    let steps: Vec<Step<'_>> = typography::SCALE_ORDER
        .iter()
        .copied()
        .filter_map(|name| {
            let step = sizes.group_at(&[name])?;
            Some(Step {
                name,
                size: step
                    .token_at(&["size"])
                    .and_then(Token::as_length)
                    .and_then(|l| l.to_px()),
                line_height: step.token_at(&["lineHeight"]).and_then(Token::as_number),
                letter_spacing: step
                    .token_at(&["letterSpacing"])
                    .and_then(Token::as_length)
                    .map(|l| l.value),
            })
        })
        .collect();

    for pair in steps.windows(2) {
        let (lower, higher) = (&pair[0], &pair[1]);
        if let (Some(a), Some(b)) = (lower.size, higher.size) {
            if b <= a {
                report.error(format!(
                    "typography.fontSize.{} ({}px) must be larger than {} ({}px)",
                    higher.name, b, lower.name, a
                ));
            }
        }
        if let (Some(a), Some(b)) = (lower.line_height, higher.line_height) {
            if b > a {
                report.warn(format!(
                    "typography.fontSize.{}: line height {} is looser than {} ({})",
                    higher.name, b, lower.name, a
                ));
            }
        }
        if let (Some(a), Some(b)) = (lower.letter_spacing, higher.letter_spacing) {
            if b > a {
                report.warn(format!(
                    "typography.fontSize.{}: letter spacing {}em is wider than {} ({}em)",
                    higher.name, b, lower.name, a
                ));
            }
        }
    }
}

fn check_animation(group: &TokenGroup, report: &mut ValidationReport) {
    let (min, max) = animation::DURATION_RANGE;

    if let Some(durations) = group.group_at(&["duration"]) {
        for (key, token) in durations.leaves() {
            match token.as_duration() {
                Some(ms) if (min..=max).contains(&ms) => {}
                Some(ms) => report.error(format!(
                    "animation.duration.{}: {}ms is outside [{}ms, {}ms]",
                    key, ms, min, max
                )),
                None => report.error(format!(
                    "animation.duration.{}: expected a duration, found a {}",
                    key,
                    token.kind()
                )),
            }
        }
    }

    if let Some(easings) = group.group_at(&["easing"]) {
        for (key, token) in easings.leaves() {
            match token.as_curve() {
                Some(c) if (0.0..=1.0).contains(&c.x1) && (0.0..=1.0).contains(&c.x2) => {}
                Some(c) => report.error(format!(
                    "animation.easing.{}: x control points must lie in [0, 1] ({})",
                    key, c
                )),
                None => report.error(format!(
                    "animation.easing.{}: expected a curve, found a {}",
                    key,
                    token.kind()
                )),
            }
        }
    }

    if let Some(springs) = group.group_at(&["spring"]) {
        let (low, high) = animation::SPRING_RATIO_RANGE;
        for (key, node) in springs.iter() {
            let Some(spring) = node.as_group() else {
                report.error(format!("animation.spring.{}: expected a spring group", key));
                continue;
            };
            let stiffness = spring.token_at(&["stiffness"]).and_then(Token::as_number);
            let damping = spring.token_at(&["damping"]).and_then(Token::as_number);
            match (stiffness, damping) {
                (Some(s), Some(d)) if s > 0.0 => {
                    let ratio = d / s;
                    if ratio <= low || ratio >= high {
                        report.error(format!(
                            "animation.spring.{}: damping/stiffness ratio {:.3} is outside ({}, {})",
                            key, ratio, low, high
                        ));
                    }
                }
                (Some(_), Some(_)) => report.error(format!(
                    "animation.spring.{}: stiffness must be positive",
                    key
                )),
                _ => report.error(format!(
                    "animation.spring.{}: stiffness and damping are required numbers",
                    key
                )),
            }
        }
    }
}

fn check_shadows(group: &TokenGroup, report: &mut ValidationReport) {
    let Some(elevation) = group.group_at(&["elevation"]) else {
        return;
    };

    let mut levels: Vec<(u32, f64, f64)> = Vec::with_capacity(elevation.len());
    for (key, token) in elevation.leaves() {
        let Ok(level) = key.parse::<u32>() else {
            report.error(format!("shadows.elevation.{}: level is not a number", key));
            continue;
        };
        match token.as_shadow().and_then(|s| s.primary_layer()) {
            Some(layer) => levels.push((level, layer.blur, layer.offset_y.abs())),
            None => report.error(format!("shadows.elevation.{}: expected a non-empty shadow", key)),
        }
    }

    levels.sort_by_key(|(level, _, _)| *level);
    for pair in levels.windows(2) {
        let (low_level, low_blur, low_offset) = pair[0];
        let (high_level, high_blur, high_offset) = pair[1];
        if high_blur <= low_blur || high_offset <= low_offset {
            report.error(format!(
                "shadows.elevation.{} (blur {}, offset {}) must exceed level {} (blur {}, offset {})",
                high_level, high_blur, high_offset, low_level, low_blur, low_offset
            ));
        }
    }
}
