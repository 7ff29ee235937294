//! Client for the extraction-search engine.
//!
//! The engine indexes objects extracted from ingested documents. A search
//! answers with pages of objects, each grouping child passages under a header
//! together with the document's bibliographic record (`bibjson`), which is
//! where DOIs come from.

use anyhow::Context;
use scholarqa_shared::CorpusStatistics;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RetrievalClient {
    http: reqwest::Client,
    base_url: String,
}

/// One passage eligible for answer extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Text content of the extracted object.
    pub content: String,
    /// Source document filename.
    pub pdf_name: String,
    /// DOI from the document's bibliographic record, when it has one.
    pub doi: Option<String>,
}

impl RetrievalClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search the corpus for passages mentioning the query terms, in search
    /// rank order. At most `limit` candidates are returned.
    pub async fn search(&self, query: &str, limit: u32) -> anyhow::Result<Vec<Candidate>> {
        let url = format!(
            "{}/search?query={}&ignore_bytes=true",
            self.base_url,
            urlencoding::encode(query)
        );

        let body: Value = self
            .http
            .get(&url)
            .send()
            .await
            .context("retrieval engine unreachable")?
            .error_for_status()
            .context("retrieval engine returned an error")?
            .json()
            .await
            .context("retrieval response was not JSON")?;

        Ok(candidates_from_response(&body, limit as usize))
    }

    /// Corpus counts.
    pub async fn statistics(&self) -> anyhow::Result<CorpusStatistics> {
        let url = format!("{}/statistics", self.base_url);

        self.http
            .get(&url)
            .send()
            .await
            .context("retrieval engine unreachable")?
            .error_for_status()
            .context("retrieval engine returned an error")?
            .json()
            .await
            .context("statistics response did not match the expected shape")
    }
}

/// Flatten a search response into candidate passages, preserving result
/// order. Children without text content are skipped.
fn candidates_from_response(body: &Value, limit: usize) -> Vec<Candidate> {
    let objects = body.get("objects").and_then(Value::as_array);

    let mut out = Vec::new();
    for object in objects.into_iter().flatten() {
        let pdf_name = object
            .get("pdf_name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let doi = doi_from_bibjson(object.get("bibjson"));

        for child in object
            .get("children")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            let Some(content) = child.get("content").and_then(Value::as_str) else {
                continue;
            };
            if content.trim().is_empty() {
                continue;
            }

            out.push(Candidate {
                content: content.to_string(),
                pdf_name: pdf_name.clone(),
                doi: doi.clone(),
            });
            if out.len() == limit {
                return out;
            }
        }
    }

    out
}

/// Pull the DOI out of a bibjson record: `identifier` is a list of
/// `{type, id}` pairs and the DOI is the entry typed "doi".
fn doi_from_bibjson(bibjson: Option<&Value>) -> Option<String> {
    let identifiers = bibjson?.get("identifier")?.as_array()?;

    identifiers.iter().find_map(|ident| {
        let kind = ident.get("type")?.as_str()?;
        if !kind.eq_ignore_ascii_case("doi") {
            return None;
        }
        let id = ident.get("id")?.as_str()?;
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_response() -> Value {
        json!({
            "v": "v2_beta",
            "total": 2,
            "page": 0,
            "objects": [
                {
                    "pdf_name": "covid_receptors.pdf",
                    "bibjson": {
                        "title": "Receptor usage of coronaviruses",
                        "identifier": [
                            { "type": "doi", "id": "10.1000/xyz123" }
                        ]
                    },
                    "children": [
                        { "content": "ACE2 is the entry receptor.", "page_number": 3 },
                        { "content": "   ", "page_number": 4 },
                        { "content": "TMPRSS2 primes the spike protein.", "page_number": 5 }
                    ]
                },
                {
                    "pdf_name": "untracked_preprint.pdf",
                    "bibjson": null,
                    "children": [
                        { "content": "Binding affinity varies by lineage." }
                    ]
                }
            ]
        })
    }

    #[test]
    fn candidates_flatten_in_result_order() {
        let candidates = candidates_from_response(&search_response(), 10);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].content, "ACE2 is the entry receptor.");
        assert_eq!(candidates[0].doi.as_deref(), Some("10.1000/xyz123"));
        assert_eq!(candidates[1].content, "TMPRSS2 primes the spike protein.");
        assert_eq!(candidates[2].pdf_name, "untracked_preprint.pdf");
        assert_eq!(candidates[2].doi, None);
    }

    #[test]
    fn candidate_limit_is_honored() {
        let candidates = candidates_from_response(&search_response(), 2);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn empty_and_malformed_responses_yield_no_candidates() {
        assert!(candidates_from_response(&json!({ "objects": [] }), 5).is_empty());
        assert!(candidates_from_response(&json!({ "page": 0 }), 5).is_empty());
        assert!(candidates_from_response(&json!("not an object"), 5).is_empty());
    }

    #[test]
    fn doi_lookup_ignores_other_identifier_types() {
        let bibjson = json!({
            "identifier": [
                { "type": "issn", "id": "1234-5678" },
                { "type": "DOI", "id": "10.5555/abc" }
            ]
        });
        assert_eq!(
            doi_from_bibjson(Some(&bibjson)),
            Some("10.5555/abc".to_string())
        );
    }

    #[test]
    fn doi_lookup_tolerates_missing_records() {
        assert_eq!(doi_from_bibjson(None), None);
        assert_eq!(doi_from_bibjson(Some(&Value::Null)), None);
        assert_eq!(doi_from_bibjson(Some(&json!({ "identifier": [] }))), None);
        assert_eq!(
            doi_from_bibjson(Some(&json!({ "identifier": [{ "type": "doi", "id": "" }] }))),
            None
        );
    }
}
