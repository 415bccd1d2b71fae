//! Shared application state injected into every handler.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{OracleService, TarotService};
use crate::config::Config;
use crate::infrastructure::http::{AnthropicClient, PixabayClient, YesNoClient, build_http_client};

pub type AppTarotService = TarotService<PixabayClient, AnthropicClient>;
pub type AppOracleService = OracleService<YesNoClient>;

/// Read-only state shared across requests.
///
/// Services hold no mutable data, so cloning the state only bumps reference
/// counts.
#[derive(Clone)]
pub struct AppState {
    pub tarot_service: Arc<AppTarotService>,
    pub oracle_service: Arc<AppOracleService>,
    /// Whether 500 responses include the failure cause.
    pub expose_error_detail: bool,
}

impl AppState {
    pub fn new(
        tarot_service: Arc<AppTarotService>,
        oracle_service: Arc<AppOracleService>,
        expose_error_detail: bool,
    ) -> Self {
        Self {
            tarot_service,
            oracle_service,
            expose_error_detail,
        }
    }

    /// Wires the upstream clients and services from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or an upstream base
    /// URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_http_client(config)?;

        let images = Arc::new(PixabayClient::from_config(http.clone(), config)?);
        let narrator = Arc::new(AnthropicClient::from_config(http.clone(), config)?);
        let oracle = Arc::new(YesNoClient::from_config(http, config)?);

        Ok(Self::new(
            Arc::new(TarotService::new(images, narrator)),
            Arc::new(OracleService::new(oracle)),
            config.expose_error_detail,
        ))
    }
}
