//! Client for the QA inference service.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Extract the answer to `query` from one candidate passage. The service
    /// answers with the extracted span as plain text; an empty body means no
    /// span was found.
    pub async fn infer(&self, query: &str, candidate: &str) -> anyhow::Result<String> {
        let url = format!(
            "{}/query?query={}&candidate={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(candidate)
        );

        self.http
            .get(&url)
            .send()
            .await
            .context("inference service unreachable")?
            .error_for_status()
            .context("inference service returned an error")?
            .text()
            .await
            .context("failed to read inference response")
    }
}
