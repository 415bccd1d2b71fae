//! Yes/no oracle entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Possible oracle answers. The public oracle occasionally answers "maybe".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

/// Answer the caller may force the oracle to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForcedAnswer {
    Yes,
    No,
}

impl ForcedAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for ForcedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply from the yes/no oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YesNoAnswer {
    pub answer: Answer,
    pub forced: bool,
    /// URL of a GIF illustrating the answer.
    pub image: String,
}
