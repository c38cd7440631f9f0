//! Note records consumed and produced by the curation pipeline
//!
//! Notes arrive from an external extraction step as a JSON array. They are
//! immutable once parsed; every pipeline stage reads them and clones the
//! survivors into its output.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// An extracted text note tagged to its source lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note title
    pub title: String,
    /// Free-text body
    pub content: String,
    /// Title of the source lesson/document
    pub lesson_title: String,
    /// Identifier of the source lesson/document
    pub lesson_id: String,
}

impl Note {
    /// Create a note from owned or borrowed strings
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        lesson_title: impl Into<String>,
        lesson_id: impl Into<String>,
    ) -> Self {
        Note {
            title: title.into(),
            content: content.into(),
            lesson_title: lesson_title.into(),
            lesson_id: lesson_id.into(),
        }
    }

    /// Content length in characters, not bytes
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Parse a JSON array of notes
pub fn parse_notes(json: &str) -> Result<Vec<Note>> {
    serde_json::from_str(json).map_err(|e| SiftError::InvalidInput {
        reason: e.to_string(),
    })
}
