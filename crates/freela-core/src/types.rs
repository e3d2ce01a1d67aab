//! Value types carried by design tokens.

use smallvec::SmallVec;
use std::fmt;

/// Format a number the way CSS expects it: no trailing `.0`, no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// An sRGB color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from hex string (e.g., "#EC4464" or "ec4464").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// Parse either a hex color or an `rgba(r, g, b, a)` literal.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }

        let inner = value.strip_prefix("rgba(")?.strip_suffix(')')?;
        let parts: SmallVec<[&str; 4]> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let r = parts[0].parse().ok()?;
        let g = parts[1].parse().ok()?;
        let b = parts[2].parse().ok()?;
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        Some(Self::rgba(r, g, b, a))
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Lowercase `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS literal: hex when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            self.to_hex()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// A length value with unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn px(value: f64) -> Self {
        Self { value, unit: LengthUnit::Px }
    }

    pub const fn em(value: f64) -> Self {
        Self { value, unit: LengthUnit::Em }
    }

    pub const fn rem(value: f64) -> Self {
        Self { value, unit: LengthUnit::Rem }
    }

    pub const fn percent(value: f64) -> Self {
        Self { value, unit: LengthUnit::Percent }
    }

    /// Pixel value, if the length is absolute.
    pub fn to_px(&self) -> Option<f64> {
        match self.unit {
            LengthUnit::Px => Some(self.value),
            LengthUnit::Rem => Some(self.value * 16.0),
            LengthUnit::Em | LengthUnit::Percent => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

/// Length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    /// CSS pixels
    Px,
    /// Relative to element font size
    Em,
    /// Relative to root font size (16px)
    Rem,
    /// Percentage of parent
    Percent,
}

impl LengthUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Percent => "%",
        }
    }
}

/// A cubic-bezier timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            format_number(self.x1),
            format_number(self.y1),
            format_number(self.x2),
            format_number(self.y2)
        )
    }
}

/// One layer of a box shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowLayer {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Color,
    pub inset: bool,
}

impl ShadowLayer {
    pub const fn new(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub const fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn px(v: f64) -> String {
            if v == 0.0 {
                "0".to_string()
            } else {
                format!("{}px", v)
            }
        }

        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {} {} {} {}",
            px(self.offset_x),
            px(self.offset_y),
            px(self.blur),
            px(self.spread),
            self.color
        )
    }
}

/// A (possibly layered) box shadow. No layers renders as `none`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub layers: SmallVec<[ShadowLayer; 2]>,
}

impl Shadow {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(layers: impl IntoIterator<Item = ShadowLayer>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    /// The layer with the largest blur, which dominates perceived elevation.
    pub fn primary_layer(&self) -> Option<&ShadowLayer> {
        self.layers
            .iter()
            .max_by(|a, b| a.blur.total_cmp(&b.blur))
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return f.write_str("none");
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#EC4464").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xec, 0x44, 0x64));
        assert_eq!(c.to_hex(), "#ec4464");
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn test_color_parse_rgba() {
        let c = Color::parse("rgba(255, 255, 255, 0.1)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 255, 255));
        assert!((c.a - 0.1).abs() < f32::EPSILON);
        assert!(Color::parse("rgba(256, 0, 0, 1)").is_none());
        assert!(Color::parse("rgba(0, 0, 0, 2)").is_none());
        assert!(Color::parse("hsl(0, 0%, 0%)").is_none());
    }

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::rgb(236, 68, 100).to_css(), "#ec4464");
        assert_eq!(
            Color::rgb(236, 68, 100).with_alpha(0.5).to_css(),
            "rgba(236, 68, 100, 0.5)"
        );
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::px(16.0).to_string(), "16px");
        assert_eq!(Length::px(0.0).to_string(), "0px");
        assert_eq!(Length::em(-0.025).to_string(), "-0.025em");
        assert_eq!(Length::rem(1.5).to_px(), Some(24.0));
        assert_eq!(Length::percent(100.0).to_string(), "100%");
    }

    #[test]
    fn test_cubic_bezier_display() {
        let curve = CubicBezier::new(0.4, 0.0, 0.2, 1.0);
        assert_eq!(curve.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn test_shadow_display() {
        let shadow = Shadow::new([
            ShadowLayer::new(0.0, 4.0, 6.0, -1.0, Color::BLACK.with_alpha(0.1)),
            ShadowLayer::new(0.0, 2.0, 4.0, -2.0, Color::BLACK.with_alpha(0.1)),
        ]);
        assert_eq!(
            shadow.to_string(),
            "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)"
        );
        assert_eq!(shadow.primary_layer().unwrap().blur, 6.0);
        assert_eq!(Shadow::none().to_string(), "none");
    }

    #[test]
    fn test_inset_shadow_display() {
        let layer = ShadowLayer::new(0.0, 2.0, 4.0, 0.0, Color::BLACK.with_alpha(0.05)).inset();
        assert_eq!(layer.to_string(), "inset 0 2px 4px 0 rgba(0, 0, 0, 0.05)");
    }
}
