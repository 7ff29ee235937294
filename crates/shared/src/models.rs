//! Shared wire models for the ScholarQA API.

use serde::{Deserialize, Serialize};

// --- Answers ---

/// A single extracted answer paired with the DOI of its source document.
///
/// Both fields are opaque text: the answer is whatever span the inference
/// service extracted, and the DOI is carried through from the bibliographic
/// record without parsing or validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub answer: String,
    /// Absent when the source document's bibliographic record has no DOI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

// --- Ask Request/Response Types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub question: String,
    /// Cap on the number of candidate passages to run inference over.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub question: String,
    pub answers: Vec<Answer>,
}

// --- Single-candidate extraction ---

/// Result of running the extractor over one caller-supplied passage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub answer: String,
}

// --- Corpus statistics ---

/// Counts reported by the retrieval engine. Field names match the engine's
/// wire format, which is snake_case unlike the rest of the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusStatistics {
    pub n_pages: u64,
    pub n_objects: u64,
    pub n_pdfs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_without_doi_omits_the_field() {
        let answer = Answer {
            answer: "Paris".to_string(),
            doi: None,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json, serde_json::json!({ "answer": "Paris" }));
    }

    #[test]
    fn answer_deserializes_with_missing_doi() {
        let answer: Answer = serde_json::from_str(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(answer.answer, "42");
        assert_eq!(answer.doi, None);
    }

    #[test]
    fn ask_request_limit_defaults_to_none() {
        let req: AskRequest = serde_json::from_str(r#"{"question": "what is ACE2?"}"#).unwrap();
        assert_eq!(req.question, "what is ACE2?");
        assert_eq!(req.limit, None);
    }

    #[test]
    fn statistics_use_engine_field_names() {
        let stats: CorpusStatistics =
            serde_json::from_str(r#"{"n_pages": 10, "n_objects": 250, "n_pdfs": 3}"#).unwrap();
        assert_eq!(stats.n_objects, 250);
    }
}
