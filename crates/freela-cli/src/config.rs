//! `freela.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use freela_theme::{Brand, ProviderOptions, DEFAULT_STORAGE_KEY};
use serde::Deserialize;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "freela.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub css: CssConfig,
    pub framework: FrameworkConfig,
    pub theme: ThemeConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    pub prefix: String,
    pub output: Option<PathBuf>,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            prefix: freela_tokens::DEFAULT_PREFIX.to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            output: None,
            pretty: true,
        }
    }
}

/// `[theme]`. The stylesheet prefix belongs to `[css]`, so it is not accepted here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(rename = "default", alias = "default_brand")]
    pub default_brand: Brand,
    /// JSON file holding the persisted selection.
    pub storage: PathBuf,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_brand: Brand::default(),
            storage: PathBuf::from(".freela/theme.json"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid configuration")
    }

    /// Load `path`, or `freela.toml` if present, or the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Provider options from `[theme]` with the stylesheet prefix from `[css]`.
    pub fn provider_options(&self) -> ProviderOptions {
        ProviderOptions {
            storage_key: self.theme.storage_key.clone(),
            default_brand: self.theme.default_brand,
            css_prefix: self.css.prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.css.prefix, "ds");
        assert!(config.framework.pretty);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.theme.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.theme.default_brand, Brand::Freela);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [css]
            prefix = "fl"
            output = "dist/tokens.css"

            [framework]
            pretty = false

            [theme]
            default = "empresa"
            storage = "state/theme.json"
            storage_key = "brand"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.css.output, Some(PathBuf::from("dist/tokens.css")));
        assert!(!config.framework.pretty);
        assert_eq!(config.theme.storage, PathBuf::from("state/theme.json"));
        assert_eq!(config.log.level, "debug");

        let options = config.provider_options();
        assert_eq!(options.default_brand, Brand::Empresa);
        assert_eq!(options.storage_key, "brand");
        assert_eq!(options.css_prefix, "fl");
    }

    #[test]
    fn test_unknown_default_brand_is_rejected() {
        assert!(Config::from_toml("[theme]\ndefault = \"acme\"").is_err());
    }

    #[test]
    fn test_theme_section_rejects_css_prefix() {
        let err = Config::from_toml("[css]\nprefix = \"fl\"\n\n[theme]\ncss_prefix = \"x\"")
            .unwrap_err();
        assert!(format!("{:#}", err).contains("css_prefix"));

        let config = Config::from_toml("[css]\nprefix = \"fl\"").unwrap();
        assert_eq!(config.provider_options().css_prefix, "fl");
    }

    #[test]
    fn test_default_brand_spellings() {
        let config = Config::from_toml("[theme]\ndefault_brand = \"agencia\"").unwrap();
        assert_eq!(config.provider_options().default_brand, Brand::Agencia);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freela.toml");
        fs::write(&path, "[css]\nprefix = \"x\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.css.prefix, "x");
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
