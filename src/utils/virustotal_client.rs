// VirusTotal URL reputation client
// One GET against the v2 report endpoint; every failure degrades to "not malicious"

use crate::app_config::VirusTotalConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum VirusTotalError {
    #[error("VIRUSTOTAL_API_KEY is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// The part of the v2 URL report we care about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlReport {
    /// Number of engines that flagged the URL; absent when the URL is unknown
    #[serde(default)]
    pub positives: Option<i64>,
}

impl UrlReport {
    pub fn is_malicious(&self) -> bool {
        self.positives.unwrap_or(0) > 0
    }
}

// =============================================================================
// LOOKUP SEAM
// =============================================================================

/// Anything that can tell whether a URL is on a reputation blacklist.
///
/// Implementations never fail: errors are logged and reported as `false`.
#[async_trait]
pub trait ReputationLookup: Send + Sync {
    async fn is_blacklisted(&self, url: &str) -> bool;
}

// =============================================================================
// VIRUSTOTAL CLIENT
// =============================================================================

pub struct VirusTotalClient {
    config: VirusTotalConfig,
    http_client: reqwest::Client,
}

impl VirusTotalClient {
    /// Build a client with a reusable connection pool.
    ///
    /// No timeout is set unless `timeout_secs` is configured.
    pub fn new(config: VirusTotalConfig) -> Result<Self, VirusTotalError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Query the report endpoint and report whether any engine flagged the URL
    pub async fn lookup(&self, url: &str) -> Result<bool, VirusTotalError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(VirusTotalError::MissingApiKey)?;

        let response = self
            .http_client
            .get(&self.config.api_url)
            .query(&[("apikey", api_key), ("resource", url)])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(VirusTotalError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let report: UrlReport =
            serde_json::from_str(&body).map_err(|e| VirusTotalError::Parse(e.to_string()))?;

        debug!(
            "VirusTotal report for {}: positives={:?}",
            url, report.positives
        );

        Ok(report.is_malicious())
    }

    /// Fail-open wrapper around [`lookup`](Self::lookup)
    pub async fn check(&self, url: &str) -> bool {
        match self.lookup(url).await {
            Ok(flagged) => {
                if flagged {
                    warn!("VirusTotal flagged URL as malicious: {}", url);
                }
                flagged
            },
            Err(VirusTotalError::MissingApiKey) => {
                warn!("VIRUSTOTAL_API_KEY not configured, skipping reputation check");
                false
            },
            Err(VirusTotalError::UnexpectedStatus(code)) => {
                error!("VirusTotal API error: {}", code);
                false
            },
            Err(e) => {
                error!("Error checking VirusTotal: {}", e);
                false
            },
        }
    }
}

#[async_trait]
impl ReputationLookup for VirusTotalClient {
    async fn is_blacklisted(&self, url: &str) -> bool {
        self.check(url).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
