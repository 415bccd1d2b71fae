//! Prompt sent to the text generation API for a draw.

use crate::domain::entities::TarotDraw;

/// Builds the single user message asking the model to read the draw.
///
/// The message lists each card's image tags with its position and demands a
/// reply consisting only of a JSON object with `card1`, `card2`, `card3` and
/// `summary`.
pub fn build_fortune_prompt(draw: &TarotDraw, language: &str) -> String {
    let mut prompt = String::from(
        "You are a mysterious tarot reader. Three tarot cards have been drawn.\n\n",
    );

    for (position, card) in draw.positioned() {
        prompt.push_str(&format!(
            "{} card ({}): {}\n",
            position.ordinal(),
            position,
            card.tags
        ));
    }

    prompt.push_str(&format!(
        "\nInterpret each card based on its image tags. Write the reading in {language}.\n\n\
         Respond ONLY with JSON in exactly this format:\n\
         {{\n  \
         \"card1\": \"reading of the first card (1-2 sentences, include emoji)\",\n  \
         \"card2\": \"reading of the second card (1-2 sentences, include emoji)\",\n  \
         \"card3\": \"reading of the third card (1-2 sentences, include emoji)\",\n  \
         \"summary\": \"today's fortune combining all three cards (2-3 sentences, include emoji)\"\n\
         }}"
    ));

    prompt
}
