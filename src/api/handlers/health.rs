//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with upstream checks.
///
/// No upstream is contacted; the check only reports whether each client has
/// the credential it needs.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Every upstream is configured
/// - **503 Service Unavailable**: At least one credential is missing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "image_source": { "status": "ok", "message": "API key configured" },
///     "narrative": { "status": "ok", "message": "API key configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let image_source = credential_check(
        state.tarot_service.image_source_configured(),
        "PIXABAY_API_KEY",
    );
    let narrative = credential_check(
        state.tarot_service.narrator_configured(),
        "ANTHROPIC_API_KEY",
    );

    let all_healthy = image_source.is_ok() && narrative.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            image_source,
            narrative,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn credential_check(configured: bool, variable: &str) -> CheckStatus {
    if configured {
        CheckStatus::ok("API key configured")
    } else {
        CheckStatus::error(format!("{} is not set", variable))
    }
}
