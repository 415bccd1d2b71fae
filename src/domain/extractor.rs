//! Extraction of a [`Fortune`] from free-form model output.
//!
//! The model is asked to answer with JSON only, but its output is untrusted:
//! it may wrap the object in prose or code fences, or omit fields. The
//! outermost brace-delimited span is cut out and validated against the
//! four-field schema.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::Fortune;
use crate::error::DrawError;

/// Greedy match from the first `{` to the last `}`, across newlines.
static OUTERMOST_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Returns the span from the first `{` to the last `}` in `text`, if any.
pub fn find_json_object(text: &str) -> Option<&str> {
    OUTERMOST_OBJECT.find(text).map(|m| m.as_str())
}

/// Parses the fortune embedded in `text`.
///
/// # Errors
///
/// Returns [`DrawError::MalformedFortune`] if no brace-delimited span exists,
/// the span is not valid JSON, or any of `card1`, `card2`, `card3`, `summary`
/// is missing or not a string.
pub fn extract_fortune(text: &str) -> Result<Fortune, DrawError> {
    let candidate = find_json_object(text)
        .ok_or_else(|| DrawError::MalformedFortune("no JSON object in generated text".into()))?;

    serde_json::from_str(candidate).map_err(|e| DrawError::MalformedFortune(e.to_string()))
}
