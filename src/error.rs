//! Error types for draws, oracle consultations and HTTP responses.
//!
//! Domain failures are typed ([`DrawError`], [`OracleError`]) and collapse into
//! a single [`AppError`] at the HTTP boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// External dependency a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    ImageSearch,
    TextGeneration,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ImageSearch => write!(f, "image search"),
            Self::TextGeneration => write!(f, "text generation"),
        }
    }
}

/// Reasons a tarot draw can fail.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("{upstream} unavailable: {reason}")]
    UpstreamUnavailable { upstream: Upstream, reason: String },

    #[error("Not enough images: got {found}, need {required}")]
    InsufficientResults { found: usize, required: usize },

    #[error("Text generation returned no text")]
    EmptyGeneration,

    #[error("Malformed fortune: {0}")]
    MalformedFortune(String),
}

impl DrawError {
    pub fn upstream(upstream: Upstream, reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            upstream,
            reason: reason.into(),
        }
    }
}

/// Reasons a yes/no consultation can fail.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("yes/no oracle unavailable: {reason}")]
    UpstreamUnavailable { reason: String },
}

/// Body of every error response: `{ "error": "...", "detail": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        detail: Option<String>,
    },
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, detail: Option<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail,
        }
    }

    pub fn internal(message: impl Into<String>, detail: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail,
        }
    }

    /// Drops the diagnostic detail unless `expose` is set.
    pub fn with_detail_exposed(self, expose: bool) -> Self {
        if expose {
            return self;
        }

        match self {
            Self::BadRequest { message, .. } => Self::BadRequest {
                message,
                detail: None,
            },
            Self::Internal { message, .. } => Self::Internal {
                message,
                detail: None,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        let (message, detail) = match self {
            Self::BadRequest { message, detail } | Self::Internal { message, detail } => {
                (message, detail)
            }
        };

        ErrorBody {
            error: message.clone(),
            detail: detail.clone(),
        }
    }
}

impl From<DrawError> for AppError {
    fn from(err: DrawError) -> Self {
        AppError::internal("Failed to draw tarot cards", Some(err.to_string()))
    }
}

impl From<OracleError> for AppError {
    fn from(err: OracleError) -> Self {
        AppError::internal("Failed to consult the oracle", Some(err.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_error_body())).into_response()
    }
}
