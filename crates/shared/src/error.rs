//! Shared error types including RFC7807 Problem Details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RFC7807 Problem Details (application/problem+json)
///
/// Canonical error envelope for `/api/*` endpoints so clients can surface
/// meaningful validation and upstream errors instead of failing to decode a
/// success response type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies the specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            type_url: "https://scholarqa.dev/problems/bad-request".to_string(),
            title: "Bad Request".to_string(),
            status: 400,
            detail: Some(detail.into()),
            instance: None,
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            type_url: "https://scholarqa.dev/problems/not-found".to_string(),
            title: "Not Found".to_string(),
            status: 404,
            detail: Some(detail.into()),
            instance: None,
        }
    }

    /// An upstream service (retrieval engine or inference model) failed.
    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self {
            type_url: "https://scholarqa.dev/problems/upstream-unavailable".to_string(),
            title: "Bad Gateway".to_string(),
            status: 502,
            detail: Some(detail.into()),
            instance: None,
        }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self {
            type_url: "https://scholarqa.dev/problems/internal-error".to_string(),
            title: "Internal Server Error".to_string(),
            status: 500,
            detail: Some(detail.into()),
            instance: None,
        }
    }
}

/// Attempt to parse an RFC7807 (or RFC7807-ish) JSON body into a user-facing
/// message. Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    if let Some(detail) = parsed.detail {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.title.trim().is_empty() {
        return Some(parsed.title);
    }
    None
}

/// API error type for client-side use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_detail_prefers_detail_over_title() {
        let body = serde_json::to_string(&ProblemDetails::bad_request("question is required"))
            .unwrap();
        assert_eq!(
            try_problem_detail(&body),
            Some("question is required".to_string())
        );
    }

    #[test]
    fn problem_detail_falls_back_to_title() {
        let body = r#"{"type": "about:blank", "title": "Bad Gateway", "status": 502}"#;
        assert_eq!(try_problem_detail(body), Some("Bad Gateway".to_string()));
    }

    #[test]
    fn problem_detail_rejects_non_problem_bodies() {
        assert_eq!(try_problem_detail("upstream exploded"), None);
        assert_eq!(try_problem_detail(r#"{"answer": "Paris"}"#), None);
    }

    #[test]
    fn api_error_display_includes_status() {
        let err = ApiError::Http {
            status: 502,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: upstream unavailable");
    }
}
