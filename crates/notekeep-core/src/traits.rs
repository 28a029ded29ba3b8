//! Core traits for notekeep abstractions.
//!
//! [`NotesApi`] is the seam between the view controllers and the backend:
//! the HTTP client implements it, tests substitute an in-memory version.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTES API
// =============================================================================

/// One method per backend notes operation.
///
/// Operations addressing a single note by id report a missing note as
/// `Ok(None)` (or `Ok(false)` for delete). `Err` is reserved for transport
/// failures, unexpected statuses and malformed responses.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// Create a note. The backend always creates it active.
    async fn create(&self, draft: &NoteDraft) -> Result<Note>;

    /// Fetch a note by id.
    async fn get(&self, id: NoteId) -> Result<Option<Note>>;

    /// List notes with `archived = false`, in backend order.
    async fn list_active(&self) -> Result<Vec<Note>>;

    /// List notes with `archived = true`, in backend order.
    async fn list_archived(&self) -> Result<Vec<Note>>;

    /// Replace title and content. Never touches the archive flag.
    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>>;

    /// Move a note to the archived collection.
    async fn archive(&self, id: NoteId) -> Result<Option<Note>>;

    /// Move a note back to the active collection.
    async fn unarchive(&self, id: NoteId) -> Result<Option<Note>>;

    /// Permanently delete a note. `Ok(false)` when it did not exist.
    async fn delete(&self, id: NoteId) -> Result<bool>;

    /// List the given collection.
    async fn list(&self, collection: Collection) -> Result<Vec<Note>> {
        match collection {
            Collection::Active => self.list_active().await,
            Collection::Archived => self.list_archived().await,
        }
    }

    /// Archive or unarchive depending on the requested flag.
    async fn set_archived(&self, id: NoteId, archived: bool) -> Result<Option<Note>> {
        if archived {
            self.archive(id).await
        } else {
            self.unarchive(id).await
        }
    }
}
