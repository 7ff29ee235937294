//! Question-answering routes.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use scholarqa_shared::{
    Answer, AskRequest, AskResponse, CorpusStatistics, ProblemDetails, QueryResponse,
};

use crate::error::ApiRejection;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CandidateQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub candidate: String,
}

/// Extract an answer from one caller-supplied passage.
pub async fn query_candidate(
    State(state): State<AppState>,
    Query(params): Query<CandidateQuery>,
) -> Result<Json<QueryResponse>, ApiRejection> {
    if params.query.trim().is_empty() || params.candidate.trim().is_empty() {
        return Err(ProblemDetails::bad_request("query and candidate are both required").into());
    }

    let answer = state
        .inference
        .infer(&params.query, &params.candidate)
        .await
        .map_err(|e| {
            tracing::error!("inference failed: {e:#}");
            ApiRejection::from(ProblemDetails::bad_gateway("inference service unavailable"))
        })?;

    Ok(Json(QueryResponse { answer }))
}

/// Answer a question from the corpus: retrieve candidate passages, run
/// extraction over each, and pair every answer with its source DOI.
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiRejection> {
    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return Err(ProblemDetails::bad_request("question is required").into());
    }

    let limit = effective_limit(payload.limit, state.max_candidates);
    let candidates = state.retrieval.search(&question, limit).await.map_err(|e| {
        tracing::error!("retrieval failed: {e:#}");
        ApiRejection::from(ProblemDetails::bad_gateway("retrieval engine unavailable"))
    })?;

    tracing::debug!("running extraction over {} candidates", candidates.len());

    let mut answers = Vec::new();
    for candidate in &candidates {
        // One bad candidate shouldn't sink the whole question
        match state.inference.infer(&question, &candidate.content).await {
            Ok(answer) if !answer.trim().is_empty() => {
                answers.push(Answer {
                    answer,
                    doi: candidate.doi.clone(),
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("skipping candidate from {}: {e:#}", candidate.pdf_name);
            }
        }
    }

    Ok(Json(AskResponse { question, answers }))
}

/// Corpus statistics pass-through.
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<CorpusStatistics>, ApiRejection> {
    let stats = state.retrieval.statistics().await.map_err(|e| {
        tracing::error!("statistics fetch failed: {e:#}");
        ApiRejection::from(ProblemDetails::bad_gateway("retrieval engine unavailable"))
    })?;

    Ok(Json(stats))
}

/// Requested limit clamped to the configured cap; the cap doubles as the
/// default when the request names none.
fn effective_limit(requested: Option<u32>, cap: u32) -> u32 {
    match requested {
        Some(n) if n > 0 => n.min(cap),
        _ => cap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_the_cap() {
        assert_eq!(effective_limit(None, 5), 5);
        assert_eq!(effective_limit(Some(0), 5), 5);
    }

    #[test]
    fn limit_is_clamped_to_the_cap() {
        assert_eq!(effective_limit(Some(50), 5), 5);
        assert_eq!(effective_limit(Some(3), 5), 3);
    }
}
