//! DTOs for the tarot endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Fortune, ImageRecord, TarotResult};

/// Successful draw: three images in past/present/future order and their fortune.
#[derive(Debug, Serialize, Deserialize)]
pub struct TarotResponse {
    pub images: Vec<CardImage>,
    pub fortune: FortuneBody,
}

/// One drawn card.
#[derive(Debug, Serialize, Deserialize)]
pub struct CardImage {
    pub id: u64,

    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    pub tags: String,
}

/// The four-field reading.
#[derive(Debug, Serialize, Deserialize)]
pub struct FortuneBody {
    pub card1: String,
    pub card2: String,
    pub card3: String,
    pub summary: String,
}

impl From<&ImageRecord> for CardImage {
    fn from(record: &ImageRecord) -> Self {
        Self {
            id: record.id,
            webformat_url: record.webformat_url.clone(),
            tags: record.tags.clone(),
        }
    }
}

impl From<Fortune> for FortuneBody {
    fn from(fortune: Fortune) -> Self {
        Self {
            card1: fortune.card1,
            card2: fortune.card2,
            card3: fortune.card3,
            summary: fortune.summary,
        }
    }
}

impl From<TarotResult> for TarotResponse {
    fn from(result: TarotResult) -> Self {
        Self {
            images: result.images.cards().iter().map(CardImage::from).collect(),
            fortune: result.fortune.into(),
        }
    }
}
