use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Mood tracker service configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// HTTP listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// JSON file holding the mood document
  #[serde(default = "default_data_file")]
  pub data_file: PathBuf,

  /// Origins allowed to make cross-origin requests
  #[serde(default = "default_allowed_origins")]
  pub allowed_origins: Vec<String>,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:8000".to_string()
}

fn default_data_file() -> PathBuf {
  PathBuf::from("mood_data.json")
}

fn default_allowed_origins() -> Vec<String> {
  vec![
    "http://localhost:5173".to_string(),
    "http://localhost:3000".to_string(),
    "http://127.0.0.1:5173".to_string(),
  ]
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      data_file: default_data_file(),
      allowed_origins: default_allowed_origins(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
    let config_str = fs::read_to_string(path)
      .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

    let config: Config = toml::from_str(&config_str)
      .map_err(|e| format!("Failed to parse config file '{}': {}", path, e))?;

    config.validate()?;

    Ok(config)
  }

  /// Check fields that serde cannot check on its own
  pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
    if self.data_file.as_os_str().is_empty() {
      return Err("data_file must not be empty".into());
    }

    for origin in &self.allowed_origins {
      HeaderValue::from_str(origin)
        .map_err(|e| format!("Invalid allowed origin '{}': {}", origin, e))?;
    }

    Ok(())
  }

  /// Allowed origins as header values, ready for the CORS layer
  pub fn origin_headers(&self) -> Vec<HeaderValue> {
    self
      .allowed_origins
      .iter()
      .filter_map(|origin| HeaderValue::from_str(origin).ok())
      .collect()
  }
}
