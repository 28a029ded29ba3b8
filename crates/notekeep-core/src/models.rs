//! Core data models for notekeep.
//!
//! These types mirror the JSON documents exchanged with the notes backend:
//! [`Note`] is what the backend returns, [`NoteDraft`] is what the client
//! sends for create and update.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::error::{Error, Result};

/// Backend-assigned note identifier.
pub type NoteId = i64;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A note as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Set once by the backend at creation.
    pub created_at: NaiveDateTime,
    /// Bumped by the backend on every mutation, archive toggles included.
    pub last_modified_at: NaiveDateTime,
    pub archived: bool,
}

impl Note {
    /// Editable subset of this note, used to pre-populate an edit form.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// The collection this note currently belongs to.
    pub fn collection(&self) -> Collection {
        Collection::of(self)
    }

    /// Content truncated to `max_chars` characters, with an ellipsis when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}{}", &self.content[..cut], defaults::PREVIEW_ELLIPSIS),
            None => self.content.clone(),
        }
    }

    /// Human-readable archive status.
    pub fn status_label(&self) -> &'static str {
        self.collection().label()
    }
}

/// Request body for creating or updating a note.
///
/// Carries no archive flag: archiving only happens through the dedicated
/// archive/unarchive endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check the required fields. Anything beyond that is the backend's call.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput("title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(Error::InvalidInput("content is required".to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// COLLECTIONS
// =============================================================================

/// The two disjoint partitions of all notes, decided by the archive flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    #[default]
    Active,
    Archived,
}

impl Collection {
    pub fn of(note: &Note) -> Self {
        if note.archived {
            Self::Archived
        } else {
            Self::Active
        }
    }

    /// Whether notes in this collection carry `archived = true`.
    pub fn is_archived(self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Path segment under the notes resource (`/api/notes/{segment}`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(Error::InvalidInput(format!("unknown collection: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": 7,
            "title": "Groceries",
            "content": "eggs, milk",
            "createdAt": "2024-05-01T10:15:30.123456",
            "lastModifiedAt": "2024-05-02T08:00:00",
            "archived": false
        })
    }

    #[test]
    fn test_note_deserializes_backend_shape() {
        let note: Note = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.title, "Groceries");
        assert!(!note.archived);
        assert_eq!(note.created_at.to_string(), "2024-05-01 10:15:30.123456");
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note: Note = serde_json::from_value(sample_json()).unwrap();
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("lastModifiedAt").is_some());
        assert!(value.get("last_modified_at").is_none());
    }

    #[test]
    fn test_note_missing_field_is_rejected() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("archived");
        assert!(serde_json::from_value::<Note>(value).is_err());
    }

    #[test]
    fn test_draft_has_no_archive_flag() {
        let draft = NoteDraft::new("t", "c");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, json!({"title": "t", "content": "c"}));
    }

    #[test]
    fn test_draft_from_note_copies_title_and_content_only() {
        let note: Note = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(note.draft(), NoteDraft::new("Groceries", "eggs, milk"));
    }

    #[test]
    fn test_draft_validation() {
        assert!(NoteDraft::new("title", "body").validate().is_ok());
        assert!(matches!(
            NoteDraft::new("  ", "body").validate(),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            NoteDraft::new("title", "").validate(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_collection_follows_archive_flag() {
        let mut note: Note = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(note.collection(), Collection::Active);
        assert_eq!(note.status_label(), "Active");

        note.archived = true;
        assert_eq!(note.collection(), Collection::Archived);
        assert_eq!(note.status_label(), "Archived");
    }

    #[test]
    fn test_collection_parse_and_display() {
        assert_eq!("Archived".parse::<Collection>().unwrap(), Collection::Archived);
        assert_eq!(Collection::Active.to_string(), "active");
        assert!("trash".parse::<Collection>().is_err());
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let mut note: Note = serde_json::from_value(sample_json()).unwrap();
        note.content = "a".repeat(150);
        let preview = note.preview(defaults::PREVIEW_LENGTH);
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_keeps_short_content_and_char_boundaries() {
        let mut note: Note = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(note.preview(100), "eggs, milk");

        note.content = "ñandú".to_string();
        assert_eq!(note.preview(5), "ñandú");
        assert_eq!(note.preview(2), "ña...");
    }
}
