//! Application state shared across request handlers.

use crate::config::ServerConfig;
use crate::upstream::{InferenceClient, RetrievalClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub retrieval: RetrievalClient,
    pub inference: InferenceClient,
    pub max_candidates: u32,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        // One connection pool shared by both upstream clients
        let http = reqwest::Client::new();

        Self {
            retrieval: RetrievalClient::new(http.clone(), &config.retrieval_url),
            inference: InferenceClient::new(http, &config.inference_url),
            max_candidates: config.max_candidates,
        }
    }
}
