//! Yes/no page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the yes/no page.
///
/// Renders `templates/yesno.html`; `static/yesno.js` calls `/api/yesno`.
#[derive(Template, WebTemplate)]
#[template(path = "yesno.html")]
struct YesNoTemplate {}

/// Renders the yes/no page.
///
/// # Endpoint
///
/// `GET /yesno`
pub async fn yesno_page_handler() -> impl IntoResponse {
    YesNoTemplate {}
}
