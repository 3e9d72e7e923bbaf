//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.catalog-nav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::catalog::FilterId;
use crate::core::filter::OfferVocabulary;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub offers: OffersConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_section: Option<FilterId>,
    pub debounce_ms: Option<u64>,
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OffersConfig {
    pub keywords: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_DATA_FILE: &str = "catalog.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_section: FilterId,
    pub debounce: Duration,
    pub data_file: PathBuf,
    pub offer_vocabulary: OfferVocabulary,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub section: Option<FilterId>,
    pub data_file: Option<PathBuf>,
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

/// Returns the path to `~/.catalog-nav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".catalog-nav").join("config.toml"))
}

/// Load config from `~/.catalog-nav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<NavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# catalog-nav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_section = "all"     # "all", "sessions", "offers" or "shop"
# debounce_ms = 300           # Quiet period before a search is applied
# data_file = "catalog.json"  # Or set CATALOG_NAV_DATA env var

# [offers]
# Name fragments that mark a non-product item as an offer.
# keywords = ["carte", "abonnement"]
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
pub fn resolve(config: &NavConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with env lookups going through `env`.
pub fn resolve_with<F>(config: &NavConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Section: CLI → env → config → default
    let default_section = cli
        .section
        .or_else(|| env("CATALOG_NAV_SECTION").map(FilterId::from))
        .or(config.general.default_section)
        .unwrap_or_default();

    // Data file: CLI → env → config → default
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env("CATALOG_NAV_DATA").map(PathBuf::from))
        .or_else(|| config.general.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let debounce = Duration::from_millis(
        config.general.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
    );

    let offer_vocabulary = match &config.offers.keywords {
        Some(keywords) => OfferVocabulary::new(keywords),
        None => OfferVocabulary::default(),
    };

    ResolvedConfig {
        default_section,
        debounce,
        data_file,
        offer_vocabulary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn studio_config() -> NavConfig {
        NavConfig {
            general: GeneralConfig {
                default_section: Some(FilterId::Offers),
                data_file: Some("studio.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config = NavConfig::default();
        assert!(config.general.default_section.is_none());
        assert!(config.offers.keywords.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = NavConfig::default();
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_section, FilterId::All);
        assert_eq!(resolved.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(resolved.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        assert_eq!(resolved.offer_vocabulary, OfferVocabulary::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = NavConfig {
            general: GeneralConfig {
                default_section: Some(FilterId::Offers),
                debounce_ms: Some(150),
                data_file: Some("studio.json".to_string()),
            },
            offers: OffersConfig {
                keywords: Some(vec!["Pass".to_string()]),
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_section, FilterId::Offers);
        assert_eq!(resolved.data_file, PathBuf::from("studio.json"));
        assert_eq!(resolved.debounce, Duration::from_millis(150));
        assert!(resolved.offer_vocabulary.matches("Yoga pass"));
        assert!(!resolved.offer_vocabulary.matches("Carte 10 séances"));
    }

    #[test]
    fn test_resolve_env_overrides_config() {
        let env = |key: &str| match key {
            "CATALOG_NAV_SECTION" => Some("sessions".to_string()),
            "CATALOG_NAV_DATA" => Some("/tmp/env.json".to_string()),
            _ => None,
        };
        let resolved = resolve_with(&studio_config(), &CliOverrides::default(), env);
        assert_eq!(resolved.default_section, FilterId::Sessions);
        assert_eq!(resolved.data_file, PathBuf::from("/tmp/env.json"));
    }

    #[test]
    fn test_resolve_unknown_env_section_is_all() {
        let env = |key: &str| (key == "CATALOG_NAV_SECTION").then(|| "coach".to_string());
        let resolved = resolve_with(&studio_config(), &CliOverrides::default(), env);
        assert_eq!(resolved.default_section, FilterId::All);
        // Untouched tiers still come from the file
        assert_eq!(resolved.data_file, PathBuf::from("studio.json"));
    }

    #[test]
    fn test_resolve_cli_wins_over_env_and_config() {
        let env = |key: &str| match key {
            "CATALOG_NAV_SECTION" => Some("sessions".to_string()),
            "CATALOG_NAV_DATA" => Some("/tmp/env.json".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            section: Some(FilterId::Shop),
            data_file: Some(PathBuf::from("cli.json")),
        };
        let resolved = resolve_with(&studio_config(), &cli, env);
        assert_eq!(resolved.default_section, FilterId::Shop);
        assert_eq!(resolved.data_file, PathBuf::from("cli.json"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_section = "sessions"
debounce_ms = 500
data_file = "/srv/catalog.json"

[offers]
keywords = ["carte", "abonnement", "pass"]
"#;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_section, Some(FilterId::Sessions));
        assert_eq!(config.general.debounce_ms, Some(500));
        assert_eq!(config.general.data_file.as_deref(), Some("/srv/catalog.json"));
        assert_eq!(config.offers.keywords.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_unknown_section_in_toml_is_all() {
        let config: NavConfig =
            toml::from_str("[general]\ndefault_section = \"coach\"\n").unwrap();
        assert_eq!(config.general.default_section, Some(FilterId::All));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
debounce_ms = 100
"#;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.debounce_ms, Some(100));
        assert!(config.general.default_section.is_none());
        assert!(config.offers.keywords.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let path = std::env::temp_dir()
            .join(format!("catalog-nav-bad-{}.toml", std::process::id()));
        fs::write(&path, "[general\ndebounce_ms = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("catalog-nav-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
