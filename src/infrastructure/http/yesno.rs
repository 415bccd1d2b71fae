//! yesno.wtf client.

use async_trait::async_trait;
use tracing::info;
use url::Url;

use super::{describe_failure, endpoint, transport_failure};
use crate::config::Config;
use crate::domain::entities::{ForcedAnswer, YesNoAnswer};
use crate::domain::providers::YesNoOracle;
use crate::error::OracleError;

/// [`YesNoOracle`] backed by `GET {base}/api[?force=yes|no]`.
pub struct YesNoClient {
    http: reqwest::Client,
    api_url: Url,
}

impl YesNoClient {
    pub fn new(http: reqwest::Client, api_url: Url) -> Self {
        Self { http, api_url }
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `YESNO_BASE_URL` is not a valid URL.
    pub fn from_config(http: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(http, endpoint(&config.yesno_base_url, "api")?))
    }
}

#[async_trait]
impl YesNoOracle for YesNoClient {
    async fn ask(&self, force: Option<ForcedAnswer>) -> Result<YesNoAnswer, OracleError> {
        let mut request = self.http.get(self.api_url.clone());
        if let Some(force) = force {
            request = request.query(&[("force", force.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| OracleError::UpstreamUnavailable {
                reason: transport_failure(e),
            })?;

        info!(status = %response.status(), "Yes/no oracle response");

        if !response.status().is_success() {
            return Err(OracleError::UpstreamUnavailable {
                reason: describe_failure("yes/no oracle", response).await,
            });
        }

        response
            .json()
            .await
            .map_err(|e| OracleError::UpstreamUnavailable {
                reason: format!("invalid response body: {}", transport_failure(e)),
            })
    }
}
