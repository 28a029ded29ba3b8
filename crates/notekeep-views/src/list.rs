//! Active and archived note lists.
//!
//! A [`ListController`] shows one [`Collection`]. The displayed notes are a
//! local copy of the last fetch; mutations that change a note's membership
//! remove it from that copy instead of refetching.

use std::sync::Arc;
use tracing::{debug, error, info};

use notekeep_core::{Collection, Note, NoteId, NotesApi};

use crate::messages;

/// Lifecycle of a list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Ready(ListView),
    /// Initial fetch failed; offer a retry.
    Error(String),
}

/// Contents of a loaded list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    notes: Vec<Note>,
    notice: Option<String>,
    pending_delete: Option<NoteId>,
}

impl ListView {
    fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// Notes in backend order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Inline message left by the last failed action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Note awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<NoteId> {
        self.pending_delete
    }

    fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    fn remove(&mut self, id: NoteId) {
        self.notes.retain(|n| n.id != id);
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
    }
}

/// Controller for one note collection.
pub struct ListController {
    api: Arc<dyn NotesApi>,
    collection: Collection,
    state: ListState,
}

impl ListController {
    pub fn new(api: Arc<dyn NotesApi>, collection: Collection) -> Self {
        Self {
            api,
            collection,
            state: ListState::Loading,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Displayed notes; empty unless the list is ready.
    pub fn notes(&self) -> &[Note] {
        match &self.state {
            ListState::Ready(view) => view.notes(),
            _ => &[],
        }
    }

    /// Empty-state message, only for a ready list with no notes.
    pub fn empty_message(&self) -> Option<&'static str> {
        match &self.state {
            ListState::Ready(view) if view.is_empty() => {
                Some(messages::empty_state(self.collection))
            }
            _ => None,
        }
    }

    /// Fetch the collection. Called on mount.
    pub async fn load(&mut self) {
        self.state = ListState::Loading;
        debug!(collection = %self.collection, "Loading note list");

        self.state = match self.api.list(self.collection).await {
            Ok(notes) => {
                debug!(
                    collection = %self.collection,
                    result_count = notes.len(),
                    "Note list ready"
                );
                ListState::Ready(ListView::new(notes))
            }
            Err(e) => {
                error!(collection = %self.collection, error = %e, "Failed to load notes");
                ListState::Error(messages::load_failed(self.collection).to_string())
            }
        };
    }

    /// Re-issue the fetch after a failure.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Archive an active note or unarchive an archived one.
    ///
    /// On success the note leaves this list, since it now belongs to the
    /// other collection. Failures leave the list untouched and set a notice.
    pub async fn toggle_archive(&mut self, id: NoteId) {
        let ListState::Ready(view) = &mut self.state else {
            return;
        };
        let Some(archived) = view.find(id).map(|n| n.archived) else {
            debug!(note_id = id, "Archive toggle for a note not in this list");
            return;
        };
        view.notice = None;

        match self.api.set_archived(id, !archived).await {
            Ok(Some(_)) => {
                info!(note_id = id, archived = !archived, "Archive status changed");
                view.remove(id);
            }
            Ok(None) => {
                debug!(note_id = id, "Note vanished before archive toggle");
                view.notice = Some(messages::UPDATE_NOT_FOUND.to_string());
            }
            Err(e) => {
                error!(note_id = id, error = %e, "Failed to toggle archive status");
                view.notice = Some(messages::STATUS_FAILED.to_string());
            }
        }
    }

    /// First step of a delete: remember which note to delete.
    ///
    /// Returns `false` when the note is not displayed.
    pub fn request_delete(&mut self, id: NoteId) -> bool {
        let ListState::Ready(view) = &mut self.state else {
            return false;
        };
        if view.find(id).is_none() {
            return false;
        }
        view.notice = None;
        view.pending_delete = Some(id);
        true
    }

    pub fn cancel_delete(&mut self) {
        if let ListState::Ready(view) = &mut self.state {
            view.pending_delete = None;
        }
    }

    /// Prompt to show while a delete is pending.
    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        match &self.state {
            ListState::Ready(view) if view.pending_delete.is_some() => {
                Some(messages::CONFIRM_DELETE)
            }
            _ => None,
        }
    }

    /// Second step of a delete. Does nothing without a pending request.
    pub async fn confirm_delete(&mut self) {
        let ListState::Ready(view) = &mut self.state else {
            return;
        };
        let Some(id) = view.pending_delete.take() else {
            return;
        };

        match self.api.delete(id).await {
            Ok(true) => {
                info!(note_id = id, "Note deleted from list");
                view.remove(id);
            }
            Ok(false) => {
                debug!(note_id = id, "Note already gone");
                view.notice = Some(messages::DELETE_NOT_FOUND.to_string());
            }
            Err(e) => {
                error!(note_id = id, error = %e, "Failed to delete note");
                view.notice = Some(messages::DELETE_FAILED.to_string());
            }
        }
    }
}
