//! Tarot draw orchestration.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

use crate::domain::entities::TarotResult;
use crate::domain::extractor::extract_fortune;
use crate::domain::providers::{ImageSource, NarrativeGenerator};
use crate::domain::selection::{pick_keyword, select_three};
use crate::error::DrawError;

/// Service performing a complete tarot draw.
///
/// A draw runs four steps in sequence:
///
/// 1. **FetchImages** - search the image source with a random keyword
/// 2. **SelectThree** - shuffle the hits and keep three
/// 3. **GenerateNarrative** - ask the text generator to read the cards
/// 4. **ExtractFortune** - validate the reply into a [`crate::domain::entities::Fortune`]
///
/// The first failing step ends the draw. Nothing from earlier steps is
/// returned, so callers see either a full [`TarotResult`] or an error.
pub struct TarotService<I: ImageSource, N: NarrativeGenerator> {
    image_source: Arc<I>,
    narrator: Arc<N>,
}

impl<I: ImageSource, N: NarrativeGenerator> TarotService<I, N> {
    /// Creates a new tarot service.
    pub fn new(image_source: Arc<I>, narrator: Arc<N>) -> Self {
        Self {
            image_source,
            narrator,
        }
    }

    /// Performs a draw seeded from the thread-local generator.
    ///
    /// # Errors
    ///
    /// See [`Self::draw_with_rng`].
    pub async fn draw(&self) -> Result<TarotResult, DrawError> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.draw_with_rng(&mut rng).await
    }

    /// Performs a draw using `rng` for keyword choice and card selection.
    ///
    /// With the same upstream responses and an identically seeded `rng`, the
    /// same three images are selected.
    ///
    /// # Errors
    ///
    /// - [`DrawError::UpstreamUnavailable`] if either upstream call fails
    /// - [`DrawError::InsufficientResults`] if fewer than three images are found
    /// - [`DrawError::EmptyGeneration`] if the generator returns no text
    /// - [`DrawError::MalformedFortune`] if the text holds no valid fortune
    pub async fn draw_with_rng<R: Rng + Send + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<TarotResult, DrawError> {
        let result = self.run_steps(rng).await;

        if let Err(e) = &result {
            error!(error = %e, "Tarot draw failed");
        }

        result
    }

    /// Returns whether the image source has a credential.
    pub fn image_source_configured(&self) -> bool {
        self.image_source.is_configured()
    }

    /// Returns whether the narrative generator has a credential.
    pub fn narrator_configured(&self) -> bool {
        self.narrator.is_configured()
    }

    async fn run_steps<R: Rng + Send + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<TarotResult, DrawError> {
        let keyword = pick_keyword(rng);
        info!(
            keyword,
            has_api_key = self.image_source.is_configured(),
            "Step 1: fetching images"
        );

        let pool = self.image_source.search(keyword).await?;
        info!(hits = pool.len(), "Image search returned");

        let draw = select_three(pool, rng)?;
        info!(
            has_api_key = self.narrator.is_configured(),
            selected_tags = ?draw.tags(),
            "Step 2: generating narrative"
        );

        let text = self.narrator.narrate(&draw).await?;
        info!(response_length = text.len(), "Step 3: parsing fortune");

        let fortune = extract_fortune(&text)?;
        info!(ids = ?draw.ids(), "Tarot draw complete");

        Ok(TarotResult {
            images: draw,
            fortune,
        })
    }
}
