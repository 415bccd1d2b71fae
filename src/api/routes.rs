//! API route configuration.

use crate::api::handlers::{tarot_handler, yesno_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All JSON API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET /tarot`                 - Draw three cards and their fortune
/// - `GET /yesno?force=yes|no`    - Ask the yes/no oracle
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tarot", get(tarot_handler))
        .route("/yesno", get(yesno_handler))
}
