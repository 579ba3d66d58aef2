//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cockpit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::table::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CockpitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_path: Option<String>,
    pub theme: Option<Theme>,
    pub sidebar_open: Option<bool>,
    pub default_title: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TableConfig {
    pub page_size: Option<usize>,
    pub page_size_options: Option<Vec<usize>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub secret_key: Option<String>,
    pub profile_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_PATH: &str = "/";
pub const DEFAULT_TITLE: &str = "Dashboard";
const DEFAULT_SECRET_KEY: &str = "cockpit-local-profile-key";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_path: String,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub default_title: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub secret_key: String,
    pub profile_dir: Option<PathBuf>,
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

/// Returns the path to `~/.cockpit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cockpit").join("config.toml"))
}

/// Load config from `~/.cockpit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CockpitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CockpitConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CockpitConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CockpitConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CockpitConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CockpitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Cockpit Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_path = "/"                 # Or set COCKPIT_START_PATH
# theme = "light"                  # "light" or "dark"
# sidebar_open = true
# default_title = "Dashboard"      # Title for pages not in the menu

# [table]
# page_size = 10
# page_size_options = [5, 10, 20, 50]

# [auth]
# secret_key = "change-me"         # Or set COCKPIT_SECRET_KEY
# profile_dir = "/path/to/dir"     # Defaults to ~/.cockpit
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
///
/// `cli_start_path` and `cli_theme` are from CLI flags (None = not specified).
pub fn resolve(
    config: &CockpitConfig,
    cli_start_path: Option<&str>,
    cli_theme: Option<Theme>,
) -> ResolvedConfig {
    // Start path: CLI → env → config → default
    let start_path = cli_start_path
        .map(|s| s.to_string())
        .or_else(|| std::env::var("COCKPIT_START_PATH").ok())
        .or_else(|| config.general.start_path.clone())
        .unwrap_or_else(|| DEFAULT_START_PATH.to_string());

    let theme = cli_theme.or(config.general.theme).unwrap_or_default();

    // Secret: env → config → default
    let secret_key = std::env::var("COCKPIT_SECRET_KEY")
        .ok()
        .or_else(|| config.auth.secret_key.clone())
        .unwrap_or_else(|| {
            warn!("No secret key configured, using the built-in default");
            DEFAULT_SECRET_KEY.to_string()
        });

    let page_size_options = config
        .table
        .page_size_options
        .clone()
        .unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());

    ResolvedConfig {
        start_path,
        theme,
        sidebar_open: config.general.sidebar_open.unwrap_or(true),
        default_title: config
            .general
            .default_title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        page_size: config.table.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        page_size_options,
        secret_key,
        profile_dir: config.auth.profile_dir.as_ref().map(PathBuf::from),
    }
}
