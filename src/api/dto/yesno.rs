//! DTOs for the yes/no endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Answer, ForcedAnswer, YesNoAnswer};

/// Query string of `GET /api/yesno`.
///
/// `force` accepts `yes` or `no`; anything else is rejected with 400.
#[derive(Debug, Deserialize)]
pub struct YesNoQuery {
    pub force: Option<ForcedAnswer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct YesNoResponse {
    pub answer: Answer,
    pub forced: bool,
    pub image: String,
}

impl From<YesNoAnswer> for YesNoResponse {
    fn from(answer: YesNoAnswer) -> Self {
        Self {
            answer: answer.answer,
            forced: answer.forced,
            image: answer.image,
        }
    }
}
