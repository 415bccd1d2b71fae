//! HTTP clients for the external APIs.
//!
//! All clients share one pooled [`reqwest::Client`] built by
//! [`build_http_client`]. Each call is a single attempt; failures are mapped
//! to the domain error types and never retried.

mod anthropic;
mod pixabay;
mod yesno;

pub use anthropic::AnthropicClient;
pub use pixabay::PixabayClient;
pub use yesno::YesNoClient;

use crate::config::Config;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_seconds))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Resolves `path` beneath an upstream base such as `https://pixabay.com`.
///
/// The base is treated as a directory, so a path prefix like
/// `https://proxy.example/pixabay` is kept.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    let mut base =
        Url::parse(base_url).with_context(|| format!("Invalid base URL '{}'", base_url))?;

    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }

    base.join(path)
        .with_context(|| format!("Cannot join '{}' onto '{}'", path, base_url))
}

/// Describes a transport or decode error without the request URL.
///
/// Request URLs can carry credentials in their query string.
pub(crate) fn transport_failure(err: reqwest::Error) -> String {
    err.without_url().to_string()
}

/// Describes a non-success response by its status alone.
///
/// A short excerpt of the body goes to the log only; upstream error bodies
/// never reach the caller.
pub(crate) async fn describe_failure(upstream: &str, response: reqwest::Response) -> String {
    const MAX_BODY: usize = 200;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(MAX_BODY).collect();

    warn!(upstream, %status, body = %excerpt, "Upstream rejected the request");

    format!("status {}", status)
}
