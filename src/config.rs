//! Configuration loading.
//!
//! Loads from `./outreach.toml` (or `$OUTREACH_CONFIG_PATH`).
//! Precedence: env vars > config file > defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::providers::anthropic::ANTHROPIC_API_BASE;

// ── Top-level config ────────────────────────────────────────────

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutreachConfig {
    /// HTTP listener settings (`[server]`).
    pub server: ServerConfig,
    /// Model invocation settings (`[generation]`).
    pub generation: GenerationConfig,
    /// Log output settings (`[logging]`).
    pub logging: LoggingConfig,
    /// File the values were read from; `None` when running on defaults.
    #[serde(skip)]
    source: Option<PathBuf>,
    /// Env overrides that were set but could not be parsed.
    #[serde(skip)]
    ignored_overrides: Vec<&'static str>,
}

impl OutreachConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// An explicit `path` wins over `$OUTREACH_CONFIG_PATH`. A missing file
    /// yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the resulting values fail validation.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`OutreachConfig::load`] with a custom env resolver (for testing).
    ///
    /// # Errors
    ///
    /// See [`OutreachConfig::load`].
    pub fn load_with(
        path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let path = path.unwrap_or_else(|| config_path_with(&env));
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let mut config = Self::from_toml(&contents)?;
                config.source = Some(path);
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "failed to read config file {}: {e}",
                    path.display()
                ))
            }
        };
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string into config.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has wrongly typed keys.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: OutreachConfig =
            toml::from_str(toml_str).context("failed to parse config TOML")?;
        Ok(config)
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability (avoids `set_var` in tests).
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("OUTREACH_BIND_ADDR") {
            self.server.bind_addr = v;
        }

        if let Some(v) = env("OUTREACH_MODEL") {
            self.generation.model = v;
        }
        if let Some(v) = env("OUTREACH_MAX_TOKENS") {
            match v.parse() {
                Ok(n) => self.generation.max_tokens = n,
                Err(_) => self.ignored_overrides.push("OUTREACH_MAX_TOKENS"),
            }
        }
        if let Some(v) = env("OUTREACH_API_BASE") {
            self.generation.api_base = v;
        }

        if let Some(v) = env("OUTREACH_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = env("OUTREACH_LOGS_DIR") {
            self.logging.logs_dir = Some(PathBuf::from(v));
        }
    }

    /// Config file the values came from, if one was found.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Env overrides that were present but unparsable, and therefore ignored.
    pub fn ignored_overrides(&self) -> &[&'static str] {
        &self.ignored_overrides
    }

    /// Report where the config came from and any ignored overrides.
    ///
    /// Loading happens before a subscriber exists, so callers emit this once
    /// logging is up.
    pub fn log_load_summary(&self) {
        match &self.source {
            Some(path) => tracing::info!(path = %path.display(), "loaded config from file"),
            None => tracing::info!("no config file found, using defaults"),
        }
        for var in &self.ignored_overrides {
            tracing::warn!(var = *var, "ignoring invalid env override");
        }
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable bind address or API base URL, an
    /// empty model name, or a zero token budget.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        url::Url::parse(&self.generation.api_base).with_context(|| {
            format!("invalid generation.api_base: {}", self.generation.api_base)
        })?;
        if self.generation.model.trim().is_empty() {
            anyhow::bail!("generation.model must not be empty");
        }
        if self.generation.max_tokens == 0 {
            anyhow::bail!("generation.max_tokens must be greater than zero");
        }
        Ok(())
    }
}

/// Resolve the config path: `$OUTREACH_CONFIG_PATH` or `./outreach.toml`.
fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    env("OUTREACH_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("outreach.toml"))
}

// ── Server config ───────────────────────────────────────────────

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, `host:port`.
    pub bind_addr: String,
}

impl ServerConfig {
    /// Parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `bind_addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr: {}", self.bind_addr))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

// ── Generation config ───────────────────────────────────────────

/// Fixed model invocation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Pinned model identifier.
    pub model: String,
    /// Maximum output tokens per call.
    pub max_tokens: u32,
    /// Messages endpoint.
    pub api_base: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 2500,
            api_base: ANTHROPIC_API_BASE.to_string(),
        }
    }
}

// ── Logging config ──────────────────────────────────────────────

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// When set, JSON logs are also written here with daily rotation.
    pub logs_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            logs_dir: None,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
