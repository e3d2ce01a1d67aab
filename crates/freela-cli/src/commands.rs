//! Subcommand implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use freela_theme::{build_theme, JsonFileStorage, StyleRoot, ThemeProvider};
use freela_tokens::{
    generate_css_vars, lookup, tokens, validate_tokens, Lookup, ValidationReport,
};
use tracing::info;

use crate::config::Config;

/// Print `contents`, or write it to `output` when one is set.
pub fn emit(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => println!("{}", contents),
    }
    Ok(())
}

pub fn css(prefix: &str) -> String {
    generate_css_vars(tokens(), prefix)
}

pub fn framework(pretty: bool) -> anyhow::Result<String> {
    let config = freela_tokens::to_framework_config();
    let text = if pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    Ok(text)
}

/// Validation outcome rendered for people or as JSON.
pub fn validate(json: bool) -> anyhow::Result<(ValidationReport, String)> {
    let report = validate_tokens();
    let text = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        render_report(&report)
    };
    Ok((report, text))
}

fn render_report(report: &ValidationReport) -> String {
    let mut lines = Vec::new();
    for error in &report.errors {
        lines.push(format!("error: {}", error));
    }
    for warning in &report.warnings {
        lines.push(format!("warning: {}", warning));
    }
    lines.push(format!(
        "{} ({} errors, {} warnings)",
        if report.valid { "valid" } else { "invalid" },
        report.errors.len(),
        report.warnings.len()
    ));
    lines.join("\n")
}

/// Resolve a token path. With `strict`, a missing path is an error instead of a fallback.
pub fn get(path: &str, strict: bool) -> anyhow::Result<String> {
    match lookup(tokens(), path) {
        Lookup::Found(token) => Ok(token.to_css()),
        Lookup::Fallback { missing, .. } if strict => bail!("no design token at {}", missing),
        Lookup::Fallback { token, .. } => Ok(token.to_css()),
    }
}

/// A brand's component styles, as dot paths or JSON.
pub fn theme_show(name: &str, json: bool) -> anyhow::Result<String> {
    let theme = build_theme(name)?;
    if json {
        return Ok(serde_json::to_string_pretty(&theme.to_value()?)?);
    }
    let lines: Vec<String> = theme
        .flatten()?
        .into_iter()
        .map(|(path, value)| format!("{} = {}", path, value))
        .collect();
    Ok(lines.join("\n"))
}

fn provider(config: &Config) -> ThemeProvider<'static, JsonFileStorage, StyleRoot> {
    let storage = JsonFileStorage::new(&config.theme.storage);
    let mut provider =
        ThemeProvider::new(storage, StyleRoot::new(), tokens(), config.provider_options());
    provider.mount();
    provider
}

/// The persisted brand, optionally with the root properties it applies.
pub fn theme_current(config: &Config, with_css: bool) -> String {
    let provider = provider(config);
    if with_css {
        format!("{}\n{}", provider.active(), provider.root().to_css())
    } else {
        provider.active().to_string()
    }
}

pub fn theme_set(config: &Config, name: &str) -> anyhow::Result<String> {
    let mut provider = provider(config);
    let brand = provider.set_theme(name)?;
    info!(brand = %brand, storage = %config.theme.storage.display(), "theme selected");
    Ok(brand.to_string())
}

pub fn theme_clear(config: &Config) -> String {
    let mut provider = provider(config);
    provider.clear_persisted().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.theme.storage = dir.join("theme.json");
        config
    }

    #[test]
    fn test_css_prefix() {
        let out = css("fl");
        assert!(out.contains("--fl-spacing-4: 16px;"));
        assert!(out.contains("--fl-colors-brand-freela-500: #ec4464;"));
    }

    #[test]
    fn test_framework_json_parses() {
        let compact = framework(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["spacing"]["4"], "16px");
        assert!(!compact.contains('\n'));
        assert!(framework(true).unwrap().contains('\n'));
    }

    #[test]
    fn test_validate_summary() {
        let (report, text) = validate(false).unwrap();
        assert!(report.valid);
        assert_eq!(text, "valid (0 errors, 0 warnings)");

        let (_, json) = validate(true).unwrap();
        assert!(json.contains("\"valid\": true"));
    }

    #[test]
    fn test_get() {
        assert_eq!(get("spacing.4", false).unwrap(), "16px");
        assert_eq!(get("nonexistent.path", false).unwrap(), "#000000");
        assert!(get("nonexistent.path", true).is_err());
    }

    #[test]
    fn test_theme_show() {
        let text = theme_show("empresa", false).unwrap();
        assert!(text.contains("button.primary.background = #3b82f6"));
        assert!(theme_show("acme", false).is_err());
        assert!(theme_show("freela", true).unwrap().starts_with('{'));
    }

    #[test]
    fn test_theme_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        assert_eq!(theme_current(&config, false), "freela");
        assert_eq!(theme_set(&config, "agencia").unwrap(), "agencia");
        assert_eq!(theme_current(&config, false), "agencia");
        assert!(theme_current(&config, true).contains("--ds-colors-primary-500: #8b5cf6;"));

        assert!(theme_set(&config, "acme").is_err());
        assert_eq!(theme_current(&config, false), "agencia");

        assert_eq!(theme_clear(&config), "freela");
        assert_eq!(theme_current(&config, false), "freela");
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("out").join("tokens.css");
        emit(":root {\n}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ":root {\n}");
    }
}
