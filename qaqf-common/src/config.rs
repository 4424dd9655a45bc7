//! Configuration loading and settings resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable TOML file never stops startup; the service logs a
//! warning and continues with defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Default HTTP port for the course generator service
pub const DEFAULT_PORT: u16 = 5730;

/// Default content-generation endpoint
pub const DEFAULT_GENERATION_ENDPOINT: &str = "http://127.0.0.1:5000/api/ai/generate-content";

/// Default outbound request timeout for the generation endpoint
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;

/// Default idle time before a wizard session is evicted
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 3600;

/// Default cap on live wizard sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Crates whose log level a bare `logging.level` applies to
const LOG_TARGETS: [&str; 3] = ["qaqf_cg", "qaqf_common", "tower_http"];

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "QAQF_CONFIG";
/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "QAQF_CG_PORT";
/// Environment variable overriding the generation endpoint
pub const GENERATION_ENDPOINT_ENV: &str = "QAQF_GENERATION_ENDPOINT";
/// Environment variable carrying the generation bearer token
pub const GENERATION_TOKEN_ENV: &str = "QAQF_GENERATION_TOKEN";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote content-generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Wizard session retention
    #[serde(default)]
    pub sessions: SessionsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Bare level ("debug") applied to the service crates, or a full
    /// `EnvFilter` directive string ("qaqf_cg=debug,tower_http=warn") used as-is
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `[generation]` table of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Full URL of the content-generation endpoint
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token sent when the caller supplies none
    #[serde(default)]
    pub api_token: Option<String>,

    /// Outbound request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// `[sessions]` table of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Seconds a wizard may sit untouched before it is evicted
    #[serde(default)]
    pub idle_timeout_secs: Option<u64>,

    /// Maximum live wizards; the least recently used is dropped beyond it
    #[serde(default)]
    pub max_sessions: Option<usize>,
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Load the TOML config if one can be found, otherwise defaults
///
/// Lookup order: explicit path, then `QAQF_CONFIG`, then
/// `<config dir>/qaqf/qaqf-cg.toml`.
pub fn load_or_default(explicit: Option<&Path>) -> TomlConfig {
    let Some(path) = locate_config_file(explicit) else {
        info!("No config file found, using built-in defaults");
        return TomlConfig::default();
    };

    match load_toml_config(&path) {
        Ok(config) => {
            info!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            warn!(
                "Failed to load config file {}: {}. Using built-in defaults",
                path.display(),
                e
            );
            TomlConfig::default()
        }
    }
}

/// Find the config file path to use, if any
///
/// An explicit path or `QAQF_CONFIG` is returned as-is so that a typo is
/// reported when loading; the platform default is only returned if it exists.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_path().filter(|p| p.exists())
}

/// Platform config location: `~/.config/qaqf/qaqf-cg.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("qaqf").join("qaqf-cg.toml"))
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub generation_endpoint: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved service settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub port: u16,
    pub generation_endpoint: String,
    pub generation_token: Option<String>,
    pub generation_timeout: Duration,
    pub session_idle_timeout: Duration,
    pub max_sessions: usize,
    pub log_level: String,
}

impl ServiceSettings {
    /// Resolve every setting against CLI → ENV → TOML → default
    pub fn resolve(cli: &CliOverrides, toml: &TomlConfig) -> Result<Self> {
        let port = match cli.port {
            Some(port) => port,
            None => match env_value(PORT_ENV) {
                Some(raw) => raw.parse::<u16>().map_err(|e| {
                    Error::Config(format!("{} must be a port number, got {:?}: {}", PORT_ENV, raw, e))
                })?,
                None => toml.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let generation_endpoint = cli
            .generation_endpoint
            .clone()
            .or_else(|| env_value(GENERATION_ENDPOINT_ENV))
            .or_else(|| toml.generation.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_GENERATION_ENDPOINT.to_string());
        validate_endpoint(&generation_endpoint)?;

        let generation_token = env_value(GENERATION_TOKEN_ENV)
            .or_else(|| toml.generation.api_token.clone())
            .filter(|t| !t.trim().is_empty());

        let timeout_secs = toml
            .generation
            .timeout_secs
            .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::Config(
                "generation.timeout_secs must be greater than zero".to_string(),
            ));
        }

        let idle_secs = toml
            .sessions
            .idle_timeout_secs
            .unwrap_or(DEFAULT_SESSION_IDLE_SECS);
        if idle_secs == 0 {
            return Err(Error::Config(
                "sessions.idle_timeout_secs must be greater than zero".to_string(),
            ));
        }

        let max_sessions = toml.sessions.max_sessions.unwrap_or(DEFAULT_MAX_SESSIONS);
        if max_sessions == 0 {
            return Err(Error::Config(
                "sessions.max_sessions must be greater than zero".to_string(),
            ));
        }

        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| toml.logging.level.clone());

        Ok(Self {
            port,
            generation_endpoint,
            generation_token,
            generation_timeout: Duration::from_secs(timeout_secs),
            session_idle_timeout: Duration::from_secs(idle_secs),
            max_sessions,
            log_level,
        })
    }
}

/// Endpoint must be an absolute http(s) URL
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let trimmed = endpoint.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "generation endpoint must be an http(s) URL, got {:?}",
            endpoint
        )))
    }
}

/// `EnvFilter` directives used when `RUST_LOG` is unset
///
/// A bare level is applied to each service crate; anything containing a
/// target (`=`) or several directives (`,`) is passed through unchanged.
pub fn log_filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
