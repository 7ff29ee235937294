//! HTTP client for the ScholarQA API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use scholarqa_shared::{ApiError, AskRequest, AskResponse, CorpusStatistics};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for same-origin requests (the usual case: the server hosts the
    /// built frontend and the API behind one origin).
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Point the client at an explicit API origin, e.g. during development
    /// when the frontend dev server and the API run on different ports.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(resp).await
    }

    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(resp).await
    }

    async fn decode<TRes: DeserializeOwned>(resp: reqwest::Response) -> Result<TRes, ApiError> {
        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        // Void endpoints answer with an empty body
        if text.is_empty() {
            serde_json::from_str("null").map_err(|e| ApiError::Deserialize(e.to_string()))
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
        }
    }

    /// Ask a question. The server retrieves candidate passages, runs the
    /// extractor over them, and pairs each answer with its source DOI.
    pub async fn ask(&self, question: &str, limit: Option<u32>) -> Result<AskResponse, ApiError> {
        self.post_json(
            "/api/qa/ask",
            &AskRequest {
                question: question.to_string(),
                limit,
            },
        )
        .await
    }

    /// Corpus counts from the retrieval engine.
    pub async fn statistics(&self) -> Result<CorpusStatistics, ApiError> {
        self.get_json("/api/qa/statistics").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_stay_relative_without_a_base() {
        let client = ApiClient::new();
        assert_eq!(client.url("/api/qa/ask"), "/api/qa/ask");
        assert_eq!(client.url("api/qa/ask"), "/api/qa/ask");
    }

    #[test]
    fn base_url_joins_without_double_slashes() {
        let client = ApiClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(client.url("/api/qa/ask"), "http://localhost:8080/api/qa/ask");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let client = ApiClient::new().with_base_url("http://localhost:8080");
        assert_eq!(
            client.url("https://example.org/api/qa/statistics"),
            "https://example.org/api/qa/statistics"
        );
    }
}
