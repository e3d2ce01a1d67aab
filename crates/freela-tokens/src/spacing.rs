//! Spacing scale.
//!
//! Keys are multiples of the 4px sub-unit: `spacing.N` is `N * 4` pixels, so
//! even keys land on the 8px grid.

use std::sync::LazyLock;

use freela_core::{Token, TokenGroup};
use indexmap::IndexMap;

pub const CATEGORY: &str = "spacing";

/// Size of one spacing step in pixels.
pub const SUB_UNIT: f64 = 4.0;

/// Scale keys, ascending.
pub const SCALE: [u32; 30] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60,
    64, 72, 80, 96,
];

static SPACING: LazyLock<TokenGroup> = LazyLock::new(|| {
    SCALE.iter().fold(TokenGroup::new(), |group, step| {
        group.with(step.to_string(), Token::px(f64::from(*step) * SUB_UNIT))
    })
});

/// The frozen spacing category.
pub fn tokens() -> &'static TokenGroup {
    &SPACING
}

/// Look up a spacing step (e.g. `4`). Missing steps fall back to `0px`.
pub fn get(path: &str) -> Token {
    crate::tree::category_lookup(CATEGORY, tokens(), path)
}

pub fn generate_spacing_vars(prefix: &str) -> IndexMap<String, String> {
    crate::css::category_vars(prefix, CATEGORY, tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_four_is_sixteen_px() {
        assert_eq!(get("4").to_css(), "16px");
        assert_eq!(get("0").to_css(), "0px");
        assert_eq!(get("96").to_css(), "384px");
    }

    #[test]
    fn test_scale_strictly_increases() {
        let mut entries: Vec<(f64, f64)> = tokens()
            .leaves()
            .map(|(k, t)| (k.parse().unwrap(), t.as_length().unwrap().value))
            .collect();
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in entries.windows(2) {
            assert!(pair[1].1 > pair[0].1, "{:?} !> {:?}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_values_are_grid_aligned() {
        for (_, token) in tokens().leaves() {
            let px = token.as_length().unwrap().value;
            assert_eq!(px % SUB_UNIT, 0.0);
        }
    }

    #[test]
    fn test_missing_step_falls_back_to_zero() {
        assert_eq!(get("13").to_css(), "0px");
    }
}
