//! Config is the module to handle the optional `signin.toml` file.
//! Every key is optional, a missing file gives the defaults.
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use crate::auth::DEFAULT_LOGIN_DELAY;

pub const DEFAULT_FILE_NAME: &str = "signin.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overridden by the LOG_LEVEL environment variable.
    pub log_level: Option<String>,
    /// Duration of the simulated login request.
    pub login_delay_ms: u64,
    pub window: WindowConfig,
    pub panel: PanelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            login_delay_ms: DEFAULT_LOGIN_DELAY.as_millis() as u64,
            window: WindowConfig::default(),
            panel: PanelConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 650.0,
        }
    }
}

/// Text of the decorative panel next to the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    pub tagline: String,
    pub details: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Secure Access".to_string(),
            tagline: "Your data is protected with enterprise-grade security and encryption"
                .to_string(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Reading config file: {0}")]
    ReadingFile(String),
    #[error("Parsing config file: {0}")]
    Parsing(String),
    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadingFile(e.to_string())),
        };
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parsing(e.to_string()))?;
        config.log_level()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.log_level
            .as_deref()
            .map(|l| {
                LevelFilter::from_str(l).map_err(|_| ConfigError::InvalidLogLevel(l.to_string()))
            })
            .transpose()
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
