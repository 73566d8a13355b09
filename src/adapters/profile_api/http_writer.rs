//! Profile API adapter backed by reqwest.
//!
//! Writes risk results with `PUT {base_url}/auth/profile`, authenticated by
//! the caller's bearer token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::config::ProfileApiConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ProfileRiskUpdate, RiskProfileWriter};

/// Path of the profile update endpoint, relative to the API base URL.
const PROFILE_PATH: &str = "/auth/profile";

/// Configuration for the HTTP profile writer.
#[derive(Debug, Clone)]
pub struct HttpProfileWriterConfig {
    /// Base URL of the backend API (e.g. `http://localhost:8000`).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpProfileWriterConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ProfileApiConfig> for HttpProfileWriterConfig {
    fn from(config: &ProfileApiConfig) -> Self {
        Self::new(config.base_url.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs))
    }
}

/// `RiskProfileWriter` that talks to the backend profile API.
pub struct HttpRiskProfileWriter {
    config: HttpProfileWriterConfig,
    client: Client,
}

impl HttpRiskProfileWriter {
    pub fn new(config: HttpProfileWriterConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    fn profile_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), PROFILE_PATH)
    }

    async fn handle_response_status(&self, response: Response) -> Result<(), DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "Profile API rejected risk update");

        let err = match status {
            StatusCode::UNAUTHORIZED => {
                DomainError::new(ErrorCode::Unauthorized, "Profile API rejected the access token")
            }
            StatusCode::FORBIDDEN => {
                DomainError::new(ErrorCode::Forbidden, "Not allowed to update this profile")
            }
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Profile API rejected the update: {}", body),
            ),
            _ => DomainError::new(
                ErrorCode::ExternalService,
                format!("Unexpected status {} from profile API", status),
            ),
        };

        Err(err.with_detail("status", status.as_u16().to_string()))
    }
}

#[async_trait]
impl RiskProfileWriter for HttpRiskProfileWriter {
    async fn save_risk_profile(
        &self,
        access_token: &SecretString,
        update: &ProfileRiskUpdate,
    ) -> Result<(), DomainError> {
        let url = self.profile_url();
        tracing::debug!(url = %url, risk_score = update.risk_score, "Sending risk profile update");

        let response = self
            .client
            .put(&url)
            .bearer_auth(access_token.expose_secret())
            .json(update)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::new(
                        ErrorCode::Timeout,
                        format!(
                            "Profile API timed out after {}s",
                            self.config.timeout.as_secs()
                        ),
                    )
                } else if e.is_connect() {
                    DomainError::new(
                        ErrorCode::ExternalService,
                        format!("Connection to profile API failed: {}", e),
                    )
                } else {
                    DomainError::new(ErrorCode::ExternalService, e.to_string())
                }
            })?;

        self.handle_response_status(response).await
    }
}
