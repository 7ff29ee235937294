//! Problem+json rejections for API handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use scholarqa_shared::ProblemDetails;

/// Handler rejection carrying an RFC7807 body.
#[derive(Debug)]
pub struct ApiRejection(pub ProblemDetails);

impl From<ProblemDetails> for ApiRejection {
    fn from(problem: ProblemDetails) -> Self {
        Self(problem)
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self.0),
        )
            .into_response()
    }
}
