//! Yes/no oracle consultation service.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::{ForcedAnswer, YesNoAnswer};
use crate::domain::providers::YesNoOracle;
use crate::error::OracleError;

/// Service relaying questions to the yes/no oracle.
pub struct OracleService<O: YesNoOracle> {
    oracle: Arc<O>,
}

impl<O: YesNoOracle> OracleService<O> {
    /// Creates a new oracle service.
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    /// Asks the oracle once, optionally forcing the answer.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::UpstreamUnavailable`] if the oracle cannot be reached.
    pub async fn consult(&self, force: Option<ForcedAnswer>) -> Result<YesNoAnswer, OracleError> {
        match self.oracle.ask(force).await {
            Ok(answer) => {
                info!(answer = ?answer.answer, forced = answer.forced, "Oracle answered");
                Ok(answer)
            }
            Err(e) => {
                error!(error = %e, "Oracle consultation failed");
                Err(e)
            }
        }
    }
}
