//! Keyword choice and card selection for a draw.
//!
//! Both steps take the random source as a parameter so a seeded RNG makes a
//! draw reproducible.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::entities::{DRAW_SIZE, ImageRecord, TarotDraw};
use crate::error::DrawError;

/// Search keywords used to vary the images between draws.
pub const TAROT_KEYWORDS: &[&str] = &[
    "mystical",
    "tarot",
    "fortune",
    "magic",
    "stars night",
    "moon sky",
    "crystal ball",
    "zodiac",
    "celestial",
    "astrology",
    "spiritual",
    "oracle",
];

/// Picks a search keyword uniformly at random from [`TAROT_KEYWORDS`].
pub fn pick_keyword<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TAROT_KEYWORDS[rng.random_range(0..TAROT_KEYWORDS.len())]
}

/// Draws three cards from `pool`.
///
/// The whole pool is shuffled with a uniform Fisher-Yates permutation and the
/// first three records become past, present and future.
///
/// # Errors
///
/// Returns [`DrawError::InsufficientResults`] if the pool holds fewer than
/// three records.
pub fn select_three<R: Rng + ?Sized>(
    mut pool: Vec<ImageRecord>,
    rng: &mut R,
) -> Result<TarotDraw, DrawError> {
    let found = pool.len();
    if found < DRAW_SIZE {
        return Err(DrawError::InsufficientResults {
            found,
            required: DRAW_SIZE,
        });
    }

    pool.shuffle(rng);
    pool.truncate(DRAW_SIZE);

    let [past, present, future]: [ImageRecord; DRAW_SIZE] =
        pool.try_into().map_err(|_| DrawError::InsufficientResults {
            found,
            required: DRAW_SIZE,
        })?;

    Ok(TarotDraw::new(past, present, future))
}
