//! The fixed set of site brands.

use std::fmt;
use std::str::FromStr;

use freela_core::ThemeError;
use serde::{Deserialize, Serialize};

/// A brand identity with its own primary color family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Freelancers looking for hospitality gigs.
    #[default]
    Freela,
    /// Companies hiring staff.
    Empresa,
    /// Staffing agencies.
    Agencia,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::Freela, Brand::Empresa, Brand::Agencia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Freela => "freela",
            Brand::Empresa => "empresa",
            Brand::Agencia => "agencia",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = ThemeError;

    /// Exact, case-sensitive match against the three brand identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .into_iter()
            .find(|brand| brand.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownTheme {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_round_trip() {
        for brand in Brand::ALL {
            assert_eq!(brand.to_string().parse::<Brand>().unwrap(), brand);
        }
    }

    #[test]
    fn test_brand_names_match_color_families() {
        let names: Vec<&str> = Brand::ALL.iter().map(Brand::as_str).collect();
        assert_eq!(names, freela_tokens::colors::BRANDS);
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(
            "acme".parse::<Brand>(),
            Err(ThemeError::UnknownTheme {
                name: "acme".to_string()
            })
        );
        assert!("Freela".parse::<Brand>().is_err());
        assert!("".parse::<Brand>().is_err());
    }
}
