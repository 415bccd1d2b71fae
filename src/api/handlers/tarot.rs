//! Handler for the tarot draw endpoint.

use axum::{Json, extract::State};

use crate::api::dto::tarot::TarotResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Draws three cards and interprets them.
///
/// # Endpoint
///
/// `GET /api/tarot`
///
/// # Response
///
/// ```json
/// {
///   "images": [
///     { "id": 1, "webformatURL": "https://...", "tags": "moon, night" },
///     { "id": 2, "webformatURL": "https://...", "tags": "crystal, ball" },
///     { "id": 3, "webformatURL": "https://...", "tags": "sunrise" }
///   ],
///   "fortune": {
///     "card1": "...",
///     "card2": "...",
///     "card3": "...",
///     "summary": "..."
///   }
/// }
/// ```
///
/// # Errors
///
/// Any failing step returns 500 with
/// `{ "error": "Failed to draw tarot cards", "detail": "..." }`.
/// `detail` is omitted when `EXPOSE_ERROR_DETAIL` is off.
pub async fn tarot_handler(
    State(state): State<AppState>,
) -> Result<Json<TarotResponse>, AppError> {
    let result = state
        .tarot_service
        .draw()
        .await
        .map_err(|e| AppError::from(e).with_detail_exposed(state.expose_error_detail))?;

    Ok(Json(result.into()))
}
