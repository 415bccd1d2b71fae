//! Provider trait for image search.

use crate::domain::entities::ImageRecord;
use crate::error::DrawError;
use async_trait::async_trait;

/// Source of candidate card images.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::PixabayClient`] - Pixabay search API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Searches for images matching `keyword`.
    ///
    /// Performs exactly one outbound request and never retries.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UpstreamUnavailable`] on transport failure,
    /// non-success status or an undecodable body.
    ///
    /// Returns [`DrawError::InsufficientResults`] if fewer than three images
    /// come back.
    async fn search(&self, keyword: &str) -> Result<Vec<ImageRecord>, DrawError>;

    /// Returns whether a credential is configured.
    fn is_configured(&self) -> bool;
}
