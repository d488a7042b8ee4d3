use serde::{Deserialize, Serialize};

use crate::error::PracticeError;

/// A vocabulary entry as delivered by the word-list store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItem {
    pub id: String,
    pub word: String,
    pub translation: String,
    /// Example sentence; the reference a learner reads aloud in practice mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WordItem {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            translation: translation.into(),
            example: None,
            notes: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The trimmed example sentence, or `None` if it is missing or blank.
    pub fn example_sentence(&self) -> Option<&str> {
        self.example
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse a JSON array of word records.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, PracticeError> {
        Ok(serde_json::from_str(json)?)
    }
}
