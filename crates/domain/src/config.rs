use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Window for the single rusers call. Classic rusers waits one second;
    /// exceeding this is the only call-stage failure that is reported
    /// instead of degrading to an empty result.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    /// Window for the portmapper lookup during session establishment.
    #[serde(default = "default_portmap_timeout_ms")]
    pub portmap_timeout_ms: u64,

    /// Window for the forward hostname lookup.
    #[serde(default = "default_resolve_timeout_ms")]
    pub resolve_timeout_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: default_call_timeout_ms(),
            portmap_timeout_ms: default_portmap_timeout_ms(),
            resolve_timeout_ms: default_resolve_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
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

fn default_call_timeout_ms() -> u64 {
    1000
}
fn default_portmap_timeout_ms() -> u64 {
    5000
}
fn default_resolve_timeout_ms() -> u64 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rusers.toml in current directory
    /// 3. /etc/rusers/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("rusers.toml").exists() {
            Self::from_file("rusers.toml")?
        } else if std::path::Path::new("/etc/rusers/config.toml").exists() {
            Self::from_file("/etc/rusers/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.call_timeout_ms {
            self.query.call_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.call_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "call timeout cannot be 0".to_string(),
            ));
        }
        if self.query.portmap_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "portmap timeout cannot be 0".to_string(),
            ));
        }
        if self.query.resolve_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolve timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub call_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
