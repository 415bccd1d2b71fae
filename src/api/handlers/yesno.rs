//! Handler for the yes/no oracle endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::yesno::{YesNoQuery, YesNoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Asks the yes/no oracle.
///
/// # Endpoint
///
/// `GET /api/yesno?force=yes|no`
///
/// # Response
///
/// ```json
/// { "answer": "yes", "forced": false, "image": "https://yesno.wtf/assets/yes/2.gif" }
/// ```
///
/// # Errors
///
/// Returns 400 if `force` is neither `yes` nor `no`.
/// Returns 500 if the oracle cannot be reached.
pub async fn yesno_handler(
    State(state): State<AppState>,
    query: Result<Query<YesNoQuery>, QueryRejection>,
) -> Result<Json<YesNoResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        AppError::bad_request("Invalid query parameters", Some(e.body_text()))
            .with_detail_exposed(state.expose_error_detail)
    })?;

    let answer = state
        .oracle_service
        .consult(query.force)
        .await
        .map_err(|e| AppError::from(e).with_detail_exposed(state.expose_error_detail))?;

    Ok(Json(answer.into()))
}
