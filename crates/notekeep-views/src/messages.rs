//! User-facing messages surfaced by the controllers.

use notekeep_core::Collection;

pub const LOAD_NOTES_FAILED: &str = "Failed to load notes. Please try again later.";
pub const LOAD_ARCHIVED_FAILED: &str = "Failed to load archived notes. Please try again later.";
pub const LOAD_NOTE_FAILED: &str = "Failed to load note. Please try again later.";

pub const NOTE_NOT_FOUND: &str = "Note not found.";
pub const UPDATE_NOT_FOUND: &str = "Note not found or could not be updated.";
pub const STATUS_NOT_FOUND: &str = "Note not found or could not update archive status.";
pub const DELETE_NOT_FOUND: &str = "Note not found or could not be deleted.";

pub const UPDATE_FAILED: &str = "Failed to update note. Please try again.";
pub const STATUS_FAILED: &str = "Failed to update note status. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete note. Please try again.";
pub const CREATE_FAILED: &str = "Failed to create note. Please try again.";

pub const REQUIRED_FIELDS: &str = "Title and content are required.";

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this note?";
pub const CONFIRM_DELETE_PERMANENT: &str =
    "Are you sure you want to delete this note permanently?";

pub const EMPTY_ACTIVE: &str = "No active notes found. Why not create one?";
pub const EMPTY_ARCHIVED: &str = "No archived notes found.";

/// Message shown when the initial fetch of a collection fails.
pub fn load_failed(collection: Collection) -> &'static str {
    match collection {
        Collection::Active => LOAD_NOTES_FAILED,
        Collection::Archived => LOAD_ARCHIVED_FAILED,
    }
}

/// Message shown for a collection with no notes.
pub fn empty_state(collection: Collection) -> &'static str {
    match collection {
        Collection::Active => EMPTY_ACTIVE,
        Collection::Archived => EMPTY_ARCHIVED,
    }
}
