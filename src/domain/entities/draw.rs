//! Tarot draw entities.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Fortune, ImageRecord};

/// Number of cards in a draw.
pub const DRAW_SIZE: usize = 3;

/// Meaning attached to each slot of a draw, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Past,
    Present,
    Future,
}

impl CardPosition {
    pub const ALL: [CardPosition; DRAW_SIZE] = [Self::Past, Self::Present, Self::Future];

    /// Ordinal word used when describing the card to the model.
    pub fn ordinal(&self) -> &'static str {
        match self {
            Self::Past => "First",
            Self::Present => "Second",
            Self::Future => "Third",
        }
    }
}

impl fmt::Display for CardPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Past => write!(f, "past"),
            Self::Present => write!(f, "present"),
            Self::Future => write!(f, "future"),
        }
    }
}

/// Exactly three images assigned to past, present and future.
///
/// Serializes as a plain three-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TarotDraw([ImageRecord; DRAW_SIZE]);

impl TarotDraw {
    pub fn new(past: ImageRecord, present: ImageRecord, future: ImageRecord) -> Self {
        Self([past, present, future])
    }

    pub fn past(&self) -> &ImageRecord {
        &self.0[0]
    }

    pub fn present(&self) -> &ImageRecord {
        &self.0[1]
    }

    pub fn future(&self) -> &ImageRecord {
        &self.0[2]
    }

    pub fn cards(&self) -> &[ImageRecord; DRAW_SIZE] {
        &self.0
    }

    /// Pairs every card with its position.
    pub fn positioned(&self) -> impl Iterator<Item = (CardPosition, &ImageRecord)> {
        CardPosition::ALL.into_iter().zip(self.0.iter())
    }

    pub fn tags(&self) -> [&str; DRAW_SIZE] {
        [&self.0[0].tags, &self.0[1].tags, &self.0[2].tags]
    }

    pub fn ids(&self) -> [u64; DRAW_SIZE] {
        [self.0[0].id, self.0[1].id, self.0[2].id]
    }
}

/// A successful draw: three images and their fortune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotResult {
    pub images: TarotDraw,
    pub fortune: Fortune,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draw() -> TarotDraw {
        TarotDraw::new(
            ImageRecord::new(1, "https://img/1.jpg", "moon"),
            ImageRecord::new(2, "https://img/2.jpg", "stars"),
            ImageRecord::new(3, "https://img/3.jpg", "sun"),
        )
    }

    #[test]
    fn test_positions_follow_draw_order() {
        let draw = sample_draw();

        let positions: Vec<(CardPosition, u64)> =
            draw.positioned().map(|(pos, card)| (pos, card.id)).collect();

        assert_eq!(
            positions,
            vec![
                (CardPosition::Past, 1),
                (CardPosition::Present, 2),
                (CardPosition::Future, 3),
            ]
        );
        assert_eq!(draw.past().tags, "moon");
        assert_eq!(draw.future().tags, "sun");
    }

    #[test]
    fn test_draw_serializes_as_array() {
        let value = serde_json::to_value(sample_draw()).unwrap();

        let images = value.as_array().unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(images[1]["id"], 2);
        assert_eq!(images[1]["webformatURL"], "https://img/2.jpg");
    }
}
