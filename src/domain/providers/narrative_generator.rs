//! Provider trait for generating the reading of a draw.

use crate::domain::entities::TarotDraw;
use crate::error::DrawError;
use async_trait::async_trait;

/// Text generation backend interpreting a draw.
///
/// The returned text is free-form and must go through
/// [`crate::domain::extractor::extract_fortune`] before use.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::AnthropicClient`] - Anthropic Messages API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Asks the model to interpret `draw` and returns its raw text.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UpstreamUnavailable`] on transport failure,
    /// non-success status or an undecodable body.
    ///
    /// Returns [`DrawError::EmptyGeneration`] if the reply holds no text.
    async fn narrate(&self, draw: &TarotDraw) -> Result<String, DrawError>;

    /// Returns whether a credential is configured.
    fn is_configured(&self) -> bool;
}
