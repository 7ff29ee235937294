//! Recent-question history, persisted across sessions.

use serde::{Deserialize, Serialize};

use crate::storage;

const STORAGE_KEY: &str = "scholarqa.recent_questions";

/// Entries kept before the oldest fall off.
const MAX_ENTRIES: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentQuestion {
    pub id: String,
    pub question: String,
    pub asked_at: String,
}

/// Bounded, most-recent-first list of questions the user has asked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuestionHistory {
    entries: Vec<RecentQuestion>,
}

impl QuestionHistory {
    /// The saved history, or an empty one.
    pub fn load() -> Self {
        storage::load(STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        storage::save(STORAGE_KEY, self);
    }

    /// Drop the saved history from storage.
    pub fn erase() {
        storage::remove(STORAGE_KEY);
    }

    pub fn entries(&self) -> &[RecentQuestion] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a question at the front of the list. Re-asking an existing
    /// question moves it to the front instead of duplicating it. Blank
    /// questions are ignored.
    pub fn record(&mut self, question: &str) {
        let question = question.trim();
        if question.is_empty() {
            return;
        }

        self.entries.retain(|e| e.question != question);
        self.entries.insert(
            0,
            RecentQuestion {
                id: uuid::Uuid::new_v4().to_string(),
                question: question.to_string(),
                asked_at: chrono::Utc::now().to_rfc3339(),
            },
        );
        self.entries.truncate(MAX_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut history = QuestionHistory::default();
        history.record("first");
        history.record("second");

        let questions: Vec<_> = history.entries().iter().map(|e| &e.question).collect();
        assert_eq!(questions, ["second", "first"]);
    }

    #[test]
    fn re_asking_moves_the_entry_to_the_front() {
        let mut history = QuestionHistory::default();
        history.record("first");
        history.record("second");
        history.record("first");

        let questions: Vec<_> = history.entries().iter().map(|e| &e.question).collect();
        assert_eq!(questions, ["first", "second"]);
    }

    #[test]
    fn history_is_bounded() {
        let mut history = QuestionHistory::default();
        for i in 0..(MAX_ENTRIES + 5) {
            history.record(&format!("question {i}"));
        }

        assert_eq!(history.entries().len(), MAX_ENTRIES);
        // The oldest entries are the ones discarded
        assert_eq!(history.entries()[0].question, "question 24");
        assert_eq!(
            history.entries()[MAX_ENTRIES - 1].question,
            "question 5"
        );
    }

    #[test]
    fn blank_questions_are_ignored() {
        let mut history = QuestionHistory::default();
        history.record("   ");
        history.record("");
        assert!(history.is_empty());
    }

    #[test]
    fn questions_are_trimmed_before_recording() {
        let mut history = QuestionHistory::default();
        history.record("  what is ACE2?  ");
        assert_eq!(history.entries()[0].question, "what is ACE2?");
    }
}
