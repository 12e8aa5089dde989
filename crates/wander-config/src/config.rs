use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: String,
    pub llm: LlmSettings,
    pub advisor: AdvisorSettings,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            llm: LlmSettings::default(),
            advisor: AdvisorSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Read a config value by dotted key
    pub fn get_value(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["version"] => Some(self.version.clone()),
            ["llm", "enabled"] => Some(self.llm.enabled.to_string()),
            ["llm", "base_url"] => Some(self.llm.base_url.clone()),
            ["llm", "model"] => Some(self.llm.model.clone()),
            ["llm", "api_key_env"] => Some(self.llm.api_key_env.clone()),
            ["llm", "temperature"] => Some(self.llm.temperature.to_string()),
            ["llm", "max_tokens"] => Some(self.llm.max_tokens.to_string()),
            ["llm", "timeout_seconds"] => Some(self.llm.timeout_seconds.to_string()),
            ["advisor", "default_budget"] => Some(self.advisor.default_budget.to_string()),
            ["advisor", "frugal_budget"] => Some(self.advisor.frugal_budget.to_string()),
            ["advisor", "default_group_size"] => Some(self.advisor.default_group_size.to_string()),
            ["advisor", "default_duration_days"] => {
                Some(self.advisor.default_duration_days.to_string())
            }
            ["advisor", "weekend_duration_days"] => {
                Some(self.advisor.weekend_duration_days.to_string())
            }
            ["advisor", "duration_tolerance_days"] => {
                Some(self.advisor.duration_tolerance_days.to_string())
            }
            ["advisor", "max_recommendations"] => {
                Some(self.advisor.max_recommendations.to_string())
            }
            ["advisor", "featured_fallback_count"] => {
                Some(self.advisor.featured_fallback_count.to_string())
            }
            ["logging", "level"] => Some(self.logging.level.to_string()),
            ["logging", "file"] => self.logging.file.clone(),
            _ => None,
        }
    }

    /// Write a config value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["llm", "enabled"] => self.llm.enabled = parse_value(key, value)?,
            ["llm", "base_url"] => self.llm.base_url = value.to_string(),
            ["llm", "model"] => self.llm.model = value.to_string(),
            ["llm", "api_key_env"] => self.llm.api_key_env = value.to_string(),
            ["llm", "temperature"] => self.llm.temperature = parse_value(key, value)?,
            ["llm", "max_tokens"] => self.llm.max_tokens = parse_value(key, value)?,
            ["llm", "timeout_seconds"] => self.llm.timeout_seconds = parse_value(key, value)?,
            ["advisor", "default_budget"] => self.advisor.default_budget = parse_value(key, value)?,
            ["advisor", "frugal_budget"] => self.advisor.frugal_budget = parse_value(key, value)?,
            ["advisor", "default_group_size"] => {
                self.advisor.default_group_size = parse_value(key, value)?
            }
            ["advisor", "default_duration_days"] => {
                self.advisor.default_duration_days = parse_value(key, value)?
            }
            ["advisor", "weekend_duration_days"] => {
                self.advisor.weekend_duration_days = parse_value(key, value)?
            }
            ["advisor", "duration_tolerance_days"] => {
                self.advisor.duration_tolerance_days = parse_value(key, value)?
            }
            ["advisor", "max_recommendations"] => {
                self.advisor.max_recommendations = parse_value(key, value)?
            }
            ["advisor", "featured_fallback_count"] => {
                self.advisor.featured_fallback_count = parse_value(key, value)?
            }
            ["logging", "level"] => self.logging.level = value.parse()?,
            ["logging", "file"] => self.logging.file = Some(value.to_string()),
            _ => return Err(ConfigError::KeyNotFound(key.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("invalid value for {key}: {value}")))
}

/// Remote assistant settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmSettings {
    /// Whether to try the remote assistant at all
    pub enabled: bool,
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Model to request
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "WANDER_API_KEY".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_seconds: 60,
        }
    }
}

/// Local pipeline defaults and limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorSettings {
    /// Budget assumed when the query names none
    pub default_budget: u32,
    /// Budget assumed when the query says "cheap"
    pub frugal_budget: u32,
    pub default_group_size: u32,
    pub default_duration_days: u32,
    pub weekend_duration_days: u32,
    pub duration_tolerance_days: u32,
    pub max_recommendations: usize,
    pub featured_fallback_count: usize,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            default_budget: 50_000,
            frugal_budget: 20_000,
            default_group_size: 8,
            default_duration_days: 7,
            weekend_duration_days: 3,
            duration_tolerance_days: 2,
            max_recommendations: 4,
            featured_fallback_count: 3,
        }
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("invalid log level: {s}"))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
