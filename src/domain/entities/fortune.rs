//! Fortune entity: the structured interpretation of a draw.

use serde::{Deserialize, Serialize};

/// Interpretation of the three drawn cards plus an overall summary.
///
/// Every field is required. Decoding fails if any of them is missing or is
/// not a string; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    /// Reading for the past card.
    pub card1: String,
    /// Reading for the present card.
    pub card2: String,
    /// Reading for the future card.
    pub card3: String,
    pub summary: String,
}

impl Fortune {
    /// Returns the per-card readings in draw order.
    pub fn card_readings(&self) -> [&str; 3] {
        [&self.card1, &self.card2, &self.card3]
    }
}
