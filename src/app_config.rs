// Centralized configuration management for the phishing detector
// Load ALL env vars ONCE at startup, then hand the values to whoever needs them

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Default VirusTotal v2 URL report endpoint
pub const DEFAULT_VIRUSTOTAL_URL: &str = "https://www.virustotal.com/vtapi/v2/url/report";

/// Identifying client header sent with every reputation lookup
pub const VIRUSTOTAL_USER_AGENT: &str = "PhishDetector/1.0";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Server
    pub bind_address: String,
    pub environment: Environment,
    pub rust_log: String,

    // Security
    pub cors_allowed_origins: Vec<String>,

    // Reputation service
    pub virustotal: VirusTotalConfig,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// VirusTotal reputation lookup configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct VirusTotalConfig {
    /// `None` disables the lookup; every URL is then reported as not blacklisted
    pub api_key: Option<String>,
    pub api_url: String,
    pub user_agent: String,
    /// `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

// Keep the key out of debug logs
impl std::fmt::Debug for VirusTotalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirusTotalConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for VirusTotalConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_VIRUSTOTAL_URL.to_string(),
            user_agent: VIRUSTOTAL_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl VirusTotalConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Helper function to get optional env var with default
        let get_or_default = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        // Helper function to get an optional, non-blank env var
        let get_optional = |key: &str| -> Option<String> {
            env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_address = get_or_default("BIND_ADDRESS", "0.0.0.0:8080");

        let environment = Environment::from(get_or_default("ENVIRONMENT", "development"));
        let rust_log = get_or_default("RUST_LOG", "phish_detector=info,tower_http=info");

        let cors_allowed_origins = get_or_default("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_secs = match get_optional("VIRUSTOTAL_TIMEOUT_SECS") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue(
                    "VIRUSTOTAL_TIMEOUT_SECS".to_string(),
                    "not a valid u64".to_string(),
                )
            })?),
            None => None,
        };

        let virustotal = VirusTotalConfig {
            api_key: get_optional("VIRUSTOTAL_API_KEY"),
            api_url: get_or_default("VIRUSTOTAL_API_URL", DEFAULT_VIRUSTOTAL_URL),
            user_agent: VIRUSTOTAL_USER_AGENT.to_string(),
            timeout_secs,
        };

        Ok(AppConfig {
            bind_address,
            environment,
            rust_log,
            cors_allowed_origins,
            virustotal,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            environment: Environment::Development,
            rust_log: "phish_detector=info,tower_http=info".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            virustotal: VirusTotalConfig::default(),
        }
    }
}
