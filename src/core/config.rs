//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::scroll::DEFAULT_SCROLL_THRESHOLD;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PageConfig {
    pub scroll_threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AssetsConfig {
    pub resume: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xpwvjjrg";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub form_endpoint: String,
    pub scroll_threshold: u32,
    pub resume: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            resume: None,
        }
    }
}

/// Overrides taken from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub resume: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [contact]
# endpoint = "https://formspree.io/f/xpwvjjrg"   # Or set FOLIO_FORM_ENDPOINT env var

# [page]
# scroll_threshold = 400                          # Offset (16 units per row) that reveals "Top"

# [assets]
# resume = "~/Documents/resume.pdf"               # Path or URL; or set FOLIO_RESUME env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let form_endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("FOLIO_FORM_ENDPOINT"))
        .or_else(|| config.contact.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_FORM_ENDPOINT.to_string());

    // Resume: CLI → env → config → none
    let resume = cli
        .resume
        .clone()
        .or_else(|| env("FOLIO_RESUME"))
        .or_else(|| config.assets.resume.clone());

    ResolvedConfig {
        form_endpoint,
        scroll_threshold: config
            .page
            .scroll_threshold
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD),
        resume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = FolioConfig::default();
        assert!(config.contact.endpoint.is_none());
        assert!(config.page.scroll_threshold.is_none());
        assert!(config.assets.resume.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&FolioConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.form_endpoint, "https://formspree.io/f/xpwvjjrg");
        assert_eq!(resolved.scroll_threshold, 400);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FolioConfig {
            contact: ContactConfig {
                endpoint: Some("https://example.com/f/abc".to_string()),
            },
            page: PageConfig {
                scroll_threshold: Some(160),
            },
            assets: AssetsConfig {
                resume: Some("/tmp/resume.pdf".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.form_endpoint, "https://example.com/f/abc");
        assert_eq!(resolved.scroll_threshold, 160);
        assert_eq!(resolved.resume.as_deref(), Some("/tmp/resume.pdf"));
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = FolioConfig {
            contact: ContactConfig {
                endpoint: Some("https://from-config".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| {
            (key == "FOLIO_FORM_ENDPOINT").then(|| "https://from-env".to_string())
        });
        assert_eq!(resolved.form_endpoint, "https://from-env");
    }

    #[test]
    fn test_cli_wins_over_env() {
        let cli = CliOverrides {
            endpoint: Some("https://from-cli".to_string()),
            resume: Some("cli.pdf".to_string()),
        };
        let resolved = resolve_with_env(&FolioConfig::default(), &cli, |_| {
            Some("from-env".to_string())
        });
        assert_eq!(resolved.form_endpoint, "https://from-cli");
        assert_eq!(resolved.resume.as_deref(), Some("cli.pdf"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[page]
scroll_threshold = 200
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.page.scroll_threshold, Some(200));
        assert!(config.contact.endpoint.is_none());
        assert!(config.assets.resume.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[contact]
endpoint = "https://formspree.io/f/test"

[page]
scroll_threshold = 400

[assets]
resume = "https://example.com/resume.pdf"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://formspree.io/f/test")
        );
        assert_eq!(
            config.assets.resume.as_deref(),
            Some("https://example.com/resume.pdf")
        );
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "[page]\nscroll_threshold = \"lots\"\n").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("folio-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.contact.endpoint.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [contact]"));
        // The generated file is all comments and parses back to defaults
        let reparsed: FolioConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.page.scroll_threshold.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
