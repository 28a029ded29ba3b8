//! Single-note screen with view and edit modes.

use std::mem;
use std::sync::Arc;
use tracing::{debug, error, info};

use notekeep_core::{Note, NoteDraft, NoteId, NotesApi};

use crate::messages;
use crate::route::{Route, Transition};

/// Lifecycle of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Viewing(Note),
    /// `note` is the last server copy; `draft` holds the unsaved edits.
    Editing { note: Note, draft: NoteDraft },
    NotFound,
    Error(String),
}

/// Controller for the note detail screen.
pub struct DetailController {
    api: Arc<dyn NotesApi>,
    id: NoteId,
    state: DetailState,
    notice: Option<String>,
    confirming_delete: bool,
}

impl DetailController {
    pub fn new(api: Arc<dyn NotesApi>, id: NoteId) -> Self {
        Self {
            api,
            id,
            state: DetailState::Loading,
            notice: None,
            confirming_delete: false,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The held server copy, in view or edit mode.
    pub fn note(&self) -> Option<&Note> {
        match &self.state {
            DetailState::Viewing(note) | DetailState::Editing { note, .. } => Some(note),
            _ => None,
        }
    }

    /// Inline message left by the last failed action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, DetailState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&NoteDraft> {
        match &self.state {
            DetailState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut NoteDraft> {
        match &mut self.state {
            DetailState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Fetch the note. Called on mount.
    pub async fn load(&mut self) {
        self.state = DetailState::Loading;
        self.notice = None;
        self.confirming_delete = false;
        debug!(note_id = self.id, "Loading note");

        self.state = match self.api.get(self.id).await {
            Ok(Some(note)) => DetailState::Viewing(note),
            Ok(None) => {
                debug!(note_id = self.id, "Note not found");
                DetailState::NotFound
            }
            Err(e) => {
                error!(note_id = self.id, error = %e, "Failed to load note");
                DetailState::Error(messages::LOAD_NOTE_FAILED.to_string())
            }
        };
    }

    /// Switch to another note id and fetch it.
    pub async fn show(&mut self, id: NoteId) {
        self.id = id;
        self.load().await;
    }

    /// Re-issue the fetch after a failure.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Enter edit mode with a draft copied from the held note.
    pub fn begin_edit(&mut self) -> bool {
        match mem::replace(&mut self.state, DetailState::Loading) {
            DetailState::Viewing(note) => {
                let draft = note.draft();
                self.state = DetailState::Editing { note, draft };
                self.notice = None;
                self.confirming_delete = false;
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Leave edit mode, discarding the draft.
    pub fn cancel_edit(&mut self) {
        match mem::replace(&mut self.state, DetailState::Loading) {
            DetailState::Editing { note, .. } => {
                self.state = DetailState::Viewing(note);
                self.notice = None;
            }
            other => self.state = other,
        }
    }

    /// Submit the draft.
    ///
    /// Success replaces the held note with the server's copy and returns to
    /// view mode. A failed request keeps the draft in edit mode.
    pub async fn save(&mut self) {
        let result = match &self.state {
            DetailState::Editing { draft, .. } => {
                if draft.validate().is_err() {
                    self.notice = Some(messages::REQUIRED_FIELDS.to_string());
                    return;
                }
                self.notice = None;
                self.api.update(self.id, draft).await
            }
            _ => return,
        };

        match result {
            Ok(Some(note)) => {
                info!(note_id = self.id, "Note saved");
                self.state = DetailState::Viewing(note);
            }
            Ok(None) => {
                debug!(note_id = self.id, "Note vanished before save");
                self.state = DetailState::NotFound;
                self.notice = Some(messages::UPDATE_NOT_FOUND.to_string());
            }
            Err(e) => {
                error!(note_id = self.id, error = %e, "Failed to save note");
                self.notice = Some(messages::UPDATE_FAILED.to_string());
            }
        }
    }

    /// Archive or unarchive the held note in place. View mode only.
    pub async fn toggle_archive(&mut self) {
        let archived = match &self.state {
            DetailState::Viewing(note) => note.archived,
            _ => return,
        };
        self.notice = None;

        match self.api.set_archived(self.id, !archived).await {
            Ok(Some(note)) => {
                info!(note_id = self.id, archived = note.archived, "Archive status changed");
                self.state = DetailState::Viewing(note);
            }
            Ok(None) => {
                debug!(note_id = self.id, "Note vanished before archive toggle");
                self.notice = Some(messages::STATUS_NOT_FOUND.to_string());
            }
            Err(e) => {
                error!(note_id = self.id, error = %e, "Failed to toggle archive status");
                self.notice = Some(messages::STATUS_FAILED.to_string());
            }
        }
    }

    /// First step of a delete. View mode only.
    pub fn request_delete(&mut self) -> bool {
        if !matches!(self.state, DetailState::Viewing(_)) {
            return false;
        }
        self.notice = None;
        self.confirming_delete = true;
        true
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Prompt to show while a delete is pending.
    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        self.confirming_delete.then_some(messages::CONFIRM_DELETE_PERMANENT)
    }

    /// Second step of a delete.
    ///
    /// On success the note no longer exists, so the screen navigates back to
    /// the active list.
    pub async fn confirm_delete(&mut self) -> Transition {
        if !mem::take(&mut self.confirming_delete) {
            return Transition::Stay;
        }

        match self.api.delete(self.id).await {
            Ok(true) => {
                info!(note_id = self.id, "Note deleted");
                self.state = DetailState::NotFound;
                Transition::Navigate(Route::ActiveNotes)
            }
            Ok(false) => {
                debug!(note_id = self.id, "Note already gone");
                self.notice = Some(messages::DELETE_NOT_FOUND.to_string());
                Transition::Stay
            }
            Err(e) => {
                error!(note_id = self.id, error = %e, "Failed to delete note");
                self.notice = Some(messages::DELETE_FAILED.to_string());
                Transition::Stay
            }
        }
    }
}
