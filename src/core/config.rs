//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navindex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Relative paths in the file are resolved against `~/.navindex/`.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavIndexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub tree_file: Option<String>,
    pub events_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub tree_file: Option<&'a Path>,
    pub events_file: Option<&'a Path>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TREE_FILE: &str = "nav_tree.json";
pub const DEFAULT_LOG_FILE: &str = "navindex.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tree_file: PathBuf,
    pub events_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
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

/// Returns `~/.navindex/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navindex"))
}

/// Returns the path to `~/.navindex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.navindex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavIndexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavIndexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavIndexConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavIndexConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<NavIndexConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# navindex configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.
# Relative paths are resolved against ~/.navindex/.

# [general]
# tree_file = "nav_tree.json"        # Or set NAVINDEX_TREE env var
# events_file = "events.json"        # Or set NAVINDEX_EVENTS env var
# log_file = "navindex.log"
# log_level = "info"                 # "error", "warn", "info", "debug", "trace", "off"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NavIndexConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Tree file: CLI → env → config → default
    let tree_file = cli
        .tree_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("NAVINDEX_TREE").ok().map(PathBuf::from))
        .or_else(|| config.general.tree_file.as_deref().map(in_config_dir))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TREE_FILE));

    // Events file: CLI → env → config (no default, replay is optional)
    let events_file = cli
        .events_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("NAVINDEX_EVENTS").ok().map(PathBuf::from))
        .or_else(|| config.general.events_file.as_deref().map(in_config_dir));

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(in_config_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .map(str::to_string)
        .or_else(|| std::env::var("NAVINDEX_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        tree_file,
        events_file,
        log_file,
        log_level,
    }
}

/// Config-file paths are relative to `~/.navindex/` unless absolute.
fn in_config_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}
