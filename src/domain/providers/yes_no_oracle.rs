//! Provider trait for the yes/no oracle.

use crate::domain::entities::{ForcedAnswer, YesNoAnswer};
use crate::error::OracleError;
use async_trait::async_trait;

/// Public yes/no oracle.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::YesNoClient`] - yesno.wtf API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YesNoOracle: Send + Sync {
    /// Asks the oracle for an answer, optionally forcing it.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::UpstreamUnavailable`] on transport failure,
    /// non-success status or an undecodable body.
    async fn ask(&self, force: Option<ForcedAnswer>) -> Result<YesNoAnswer, OracleError>;
}
