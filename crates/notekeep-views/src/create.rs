//! New-note form.

use std::sync::Arc;
use tracing::{error, info};

use notekeep_core::{Note, NoteDraft, NotesApi};

use crate::messages;
use crate::route::{Route, Transition};

/// Controller for the create-note form.
pub struct CreateController {
    api: Arc<dyn NotesApi>,
    draft: NoteDraft,
    notice: Option<String>,
    created: Option<Note>,
}

impl CreateController {
    pub fn new(api: Arc<dyn NotesApi>) -> Self {
        Self {
            api,
            draft: NoteDraft::default(),
            notice: None,
            created: None,
        }
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Note returned by the last successful submit.
    pub fn created(&self) -> Option<&Note> {
        self.created.as_ref()
    }

    /// Create the note and go to the active list, where it will show up.
    ///
    /// On failure the form stays as typed.
    pub async fn submit(&mut self) -> Transition {
        if self.draft.validate().is_err() {
            self.notice = Some(messages::REQUIRED_FIELDS.to_string());
            return Transition::Stay;
        }
        self.notice = None;

        match self.api.create(&self.draft).await {
            Ok(note) => {
                info!(note_id = note.id, "Note created");
                self.draft = NoteDraft::default();
                self.created = Some(note);
                Transition::Navigate(Route::ActiveNotes)
            }
            Err(e) => {
                error!(error = %e, "Failed to create note");
                self.notice = Some(messages::CREATE_FAILED.to_string());
                Transition::Stay
            }
        }
    }

    /// Leave the form without submitting.
    pub fn cancel(&mut self) -> Transition {
        self.draft = NoteDraft::default();
        self.notice = None;
        Transition::Navigate(Route::ActiveNotes)
    }
}
