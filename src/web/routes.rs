//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{tarot_page_handler, yesno_page_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /`      - Tarot page
/// - `GET /yesno` - Yes/no oracle page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tarot_page_handler))
        .route("/yesno", get(yesno_page_handler))
}
