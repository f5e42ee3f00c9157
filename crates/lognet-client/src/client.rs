//! The logging service client.

use std::time::Duration;

use chrono::Local;
use lognet_core::{ApiSettings, LogEntry, LogLevel};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::outcome::Outcome;

/// Configuration for the logging client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Ping/log path configuration, matching the server's.
    pub api: ApiSettings,
    /// Per-request timeout. Calls are single-shot; there are no retries.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Set the API path settings.
    #[must_use]
    pub fn with_api(mut self, api: ApiSettings) -> Self {
        self.api = api;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for a remote logging service.
///
/// A constructed client implies the service was reachable at construction
/// time; [`Client::connect`] fails otherwise. There is no ongoing health
/// monitoring afterwards.
#[derive(Debug, Clone)]
pub struct Client {
    id: String,
    endpoint: String,
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Connects to a logging service, verifying reachability with a ping.
    ///
    /// A trailing slash on `endpoint` is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unreachable`] if the ping gets no response or
    /// a non-2xx status.
    pub async fn connect(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let endpoint = normalize_endpoint(&endpoint.into());
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let client = Self {
            id: id.into(),
            endpoint,
            config,
            http,
        };

        match client.ping().await {
            Ok(Outcome::Success) => {
                debug!(id = %client.id, endpoint = %client.endpoint, "logging service reachable");
                Ok(client)
            }
            Ok(Outcome::Failure(_)) => Err(ClientError::Unreachable {
                endpoint: client.endpoint,
                source: None,
            }),
            Err(ClientError::Request(source)) => Err(ClientError::Unreachable {
                endpoint: client.endpoint,
                source: Some(source),
            }),
            Err(other) => Err(other),
        }
    }

    /// The client's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The normalized base endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Pings the service on the configured ping path.
    ///
    /// # Errors
    ///
    /// Returns an error only on a network-level failure; a non-2xx
    /// response classifies as [`Outcome::Failure`].
    pub async fn ping(&self) -> Result<Outcome> {
        let path = self.config.api.ping_path.clone();
        self.ping_at(&path).await
    }

    /// Pings the service on an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error only on a network-level failure.
    pub async fn ping_at(&self, path: &str) -> Result<Outcome> {
        let response = self.http.get(self.url(path)).send().await?;
        Outcome::classify(response).await
    }

    /// Submits a log message at the given level on the configured log path.
    ///
    /// The entry carries the client's identifier and an ISO-8601 timestamp
    /// from the client's clock.
    ///
    /// # Errors
    ///
    /// Returns an error only on a network-level failure; a non-2xx
    /// response classifies as [`Outcome::Failure`].
    pub async fn log(&self, message: &str, level: LogLevel) -> Result<Outcome> {
        let path = self.config.api.log_path.clone();
        self.log_at(message, level, &path).await
    }

    /// Submits a log message on an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error only on a network-level failure.
    pub async fn log_at(&self, message: &str, level: LogLevel, path: &str) -> Result<Outcome> {
        let entry = LogEntry {
            id: self.id.clone(),
            timestamp: Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            level: level.as_str().to_string(),
            message: message.to_string(),
        };

        let response = self.http.post(self.url(path)).json(&entry).send().await?;
        let outcome = Outcome::classify(response).await?;
        debug!(id = %self.id, %level, success = outcome.is_success(), "submitted log entry");
        Ok(outcome)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint)
    }
}

/// Strips a single trailing slash, matching how the server mounts paths.
fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.strip_suffix('/').unwrap_or(endpoint).to_string()
}
