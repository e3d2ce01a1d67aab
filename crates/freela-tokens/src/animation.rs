//! Motion tokens: durations, easing curves, spring configs and named presets.

use std::sync::LazyLock;

use freela_core::{CubicBezier, Token, TokenGroup};
use indexmap::IndexMap;

pub const CATEGORY: &str = "animation";

/// Inclusive bounds for any duration token, in milliseconds.
pub const DURATION_RANGE: (u32, u32) = (50, 1200);

/// Exclusive bounds for a spring's damping-to-stiffness ratio.
pub const SPRING_RATIO_RANGE: (f64, f64) = (0.1, 3.0);

/// Fallback duration.
pub const DEFAULT_DURATION: u32 = 300;

pub const DURATIONS: [(&str, u32); 6] = [
    ("instant", 50),
    ("fast", 150),
    ("normal", 300),
    ("slow", 500),
    ("slower", 700),
    ("slowest", 1000),
];

pub const EASINGS: [(&str, CubicBezier); 5] = [
    ("linear", CubicBezier::LINEAR),
    ("easeIn", CubicBezier::new(0.4, 0.0, 1.0, 1.0)),
    ("easeOut", CubicBezier::new(0.0, 0.0, 0.2, 1.0)),
    ("easeInOut", CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
    ("spring", CubicBezier::new(0.34, 1.56, 0.64, 1.0)),
];

/// A damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub fn ratio(&self) -> f64 {
        self.damping / self.stiffness
    }
}

pub const SPRINGS: [(&str, Spring); 4] = [
    ("gentle", Spring { stiffness: 120.0, damping: 20.0, mass: 1.0 }),
    ("snappy", Spring { stiffness: 300.0, damping: 35.0, mass: 1.0 }),
    ("bouncy", Spring { stiffness: 200.0, damping: 22.0, mass: 1.0 }),
    ("slow", Spring { stiffness: 60.0, damping: 24.0, mass: 1.5 }),
];

/// A named animation built from a keyframe set, a duration and an easing.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub keyframes: &'static str,
    pub duration: &'static str,
    pub easing: &'static str,
    pub infinite: bool,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "fade-in",
        keyframes: "fadeIn",
        duration: "normal",
        easing: "easeOut",
        infinite: false,
    },
    Preset {
        name: "slide-up",
        keyframes: "slideUp",
        duration: "slow",
        easing: "easeOut",
        infinite: false,
    },
    Preset {
        name: "scale-in",
        keyframes: "scaleIn",
        duration: "fast",
        easing: "spring",
        infinite: false,
    },
    Preset {
        name: "pulse-glow",
        keyframes: "pulseGlow",
        duration: "slowest",
        easing: "easeInOut",
        infinite: true,
    },
];

/// Keyframe sets referenced by [`PRESETS`]: `(name, [(offset, [(property, value)])])`.
pub const KEYFRAMES: [(&str, &[(&str, &[(&str, &str)])]); 4] = [
    (
        "fadeIn",
        &[("0%", &[("opacity", "0")]), ("100%", &[("opacity", "1")])],
    ),
    (
        "slideUp",
        &[
            ("0%", &[("opacity", "0"), ("transform", "translateY(24px)")]),
            ("100%", &[("opacity", "1"), ("transform", "translateY(0)")]),
        ],
    ),
    (
        "scaleIn",
        &[
            ("0%", &[("opacity", "0"), ("transform", "scale(0.95)")]),
            ("100%", &[("opacity", "1"), ("transform", "scale(1)")]),
        ],
    ),
    (
        "pulseGlow",
        &[
            ("0%, 100%", &[("opacity", "1")]),
            ("50%", &[("opacity", "0.6")]),
        ],
    ),
];

static ANIMATION: LazyLock<TokenGroup> = LazyLock::new(build);

pub fn tokens() -> &'static TokenGroup {
    &ANIMATION
}

fn duration_ms(name: &str) -> u32 {
    DURATIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, ms)| *ms)
        .unwrap_or(DEFAULT_DURATION)
}

fn easing(name: &str) -> CubicBezier {
    EASINGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or(CubicBezier::LINEAR)
}

impl Preset {
    /// Shorthand `animation` value, e.g. `fadeIn 300ms cubic-bezier(0, 0, 0.2, 1) both`.
    pub fn to_css(&self) -> String {
        let iteration = if self.infinite { "infinite" } else { "both" };
        format!(
            "{} {}ms {} {}",
            self.keyframes,
            duration_ms(self.duration),
            easing(self.easing),
            iteration
        )
    }
}

fn build() -> TokenGroup {
    let durations = DURATIONS
        .iter()
        .fold(TokenGroup::new(), |group, (name, ms)| group.with(*name, Token::ms(*ms)));

    let easings = EASINGS
        .iter()
        .fold(TokenGroup::new(), |group, (name, curve)| {
            group.with(*name, Token::Curve(*curve))
        });

    let springs = SPRINGS
        .iter()
        .fold(TokenGroup::new(), |group, (name, spring)| {
            group.with_group(
                *name,
                TokenGroup::new()
                    .with("stiffness", Token::number(spring.stiffness))
                    .with("damping", Token::number(spring.damping))
                    .with("mass", Token::number(spring.mass)),
            )
        });

    let presets = PRESETS
        .iter()
        .fold(TokenGroup::new(), |group, preset| {
            group.with(preset.name, Token::text(preset.to_css()))
        });

    TokenGroup::new()
        .with_group("duration", durations)
        .with_group("easing", easings)
        .with_group("spring", springs)
        .with_group("presets", presets)
}

/// Look up a motion token (e.g. `duration.fast`). Missing paths fall back to `300ms`.
pub fn get(path: &str) -> Token {
    crate::tree::category_lookup(CATEGORY, tokens(), path)
}

pub fn generate_animation_vars(prefix: &str) -> IndexMap<String, String> {
    crate::css::category_vars(prefix, CATEGORY, tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_within_range() {
        for (name, ms) in DURATIONS {
            assert!(
                (DURATION_RANGE.0..=DURATION_RANGE.1).contains(&ms),
                "{} = {}ms",
                name,
                ms
            );
        }
    }

    #[test]
    fn test_spring_ratios_bounded() {
        for (name, spring) in SPRINGS {
            let ratio = spring.ratio();
            assert!(
                ratio > SPRING_RATIO_RANGE.0 && ratio < SPRING_RATIO_RANGE.1,
                "{} ratio {}",
                name,
                ratio
            );
        }
    }

    #[test]
    fn test_preset_css() {
        assert_eq!(
            get("presets.fade-in").to_css(),
            "fadeIn 300ms cubic-bezier(0, 0, 0.2, 1) both"
        );
        assert_eq!(
            get("presets.pulse-glow").to_css(),
            "pulseGlow 1000ms cubic-bezier(0.4, 0, 0.2, 1) infinite"
        );
    }

    #[test]
    fn test_every_preset_has_keyframes() {
        for preset in PRESETS {
            assert!(KEYFRAMES.iter().any(|(name, _)| *name == preset.keyframes));
        }
    }

    #[test]
    fn test_missing_animation_falls_back_to_normal() {
        assert_eq!(get("duration.glacial"), Token::ms(300));
    }
}
