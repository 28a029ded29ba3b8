//! In-memory notes backend for controller tests.
//!
//! Behaves like the real backend (ids, timestamps, archive flag, 404s) and
//! records every call so tests can assert what was, or was not, sent.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let api = MockNotesApi::new()
//!     .with_note("first", "body", false)
//!     .failing("archive");
//! ```

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use std::sync::Mutex;

use notekeep_core::{Error, Note, NoteDraft, NoteId, NotesApi, Result};

#[derive(Debug, Default)]
struct MockStore {
    notes: Vec<Note>,
    next_id: NoteId,
    clock: i64,
}

impl MockStore {
    fn tick(&mut self) -> NaiveDateTime {
        self.clock += 1;
        base_time() + Duration::seconds(self.clock)
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

/// Mock notes backend for testing.
#[derive(Debug, Default)]
pub struct MockNotesApi {
    store: Mutex<MockStore>,
    failing: Mutex<HashSet<&'static str>>,
    call_log: Mutex<Vec<String>>,
}

impl MockNotesApi {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(MockStore {
                next_id: 1,
                ..MockStore::default()
            }),
            ..Self::default()
        }
    }

    /// Seed a note. Ids are assigned in insertion order starting at 1.
    pub fn with_note(self, title: &str, content: &str, archived: bool) -> Self {
        {
            let mut store = self.store.lock().unwrap();
            let now = store.tick();
            let id = store.next_id;
            store.next_id += 1;
            store.notes.push(Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: now,
                last_modified_at: now,
                archived,
            });
        }
        self
    }

    /// Make every call to `operation` fail with a transport error.
    pub fn failing(self, operation: &'static str) -> Self {
        self.set_failing(operation, true);
        self
    }

    pub fn set_failing(&self, operation: &'static str, failing: bool) {
        let mut ops = self.failing.lock().unwrap();
        if failing {
            ops.insert(operation);
        } else {
            ops.remove(operation);
        }
    }

    /// Remove a note behind the controllers' back.
    pub fn remove(&self, id: NoteId) {
        self.store.lock().unwrap().notes.retain(|n| n.id != id);
    }

    pub fn stored(&self, id: NoteId) -> Option<Note> {
        self.store
            .lock()
            .unwrap()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    /// Calls made so far, formatted as `op` or `op:id`.
    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(':').next() == Some(operation))
            .count()
    }

    fn enter(&self, operation: &'static str, id: Option<NoteId>) -> Result<()> {
        let entry = match id {
            Some(id) => format!("{}:{}", operation, id),
            None => operation.to_string(),
        };
        self.call_log.lock().unwrap().push(entry);

        if self.failing.lock().unwrap().contains(operation) {
            return Err(Error::Request(format!("mock failure in {}", operation)));
        }
        Ok(())
    }

    fn modify<F>(&self, id: NoteId, f: F) -> Option<Note>
    where
        F: FnOnce(&mut Note),
    {
        let mut store = self.store.lock().unwrap();
        let now = store.tick();
        let note = store.notes.iter_mut().find(|n| n.id == id)?;
        f(note);
        note.last_modified_at = now;
        Some(note.clone())
    }

    fn filtered(&self, archived: bool) -> Vec<Note> {
        self.store
            .lock()
            .unwrap()
            .notes
            .iter()
            .filter(|n| n.archived == archived)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotesApi for MockNotesApi {
    async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        self.enter("create", None)?;
        let mut store = self.store.lock().unwrap();
        let now = store.tick();
        let note = Note {
            id: store.next_id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: now,
            last_modified_at: now,
            archived: false,
        };
        store.next_id += 1;
        store.notes.push(note.clone());
        Ok(note)
    }

    async fn get(&self, id: NoteId) -> Result<Option<Note>> {
        self.enter("get", Some(id))?;
        Ok(self.stored(id))
    }

    async fn list_active(&self) -> Result<Vec<Note>> {
        self.enter("list_active", None)?;
        Ok(self.filtered(false))
    }

    async fn list_archived(&self) -> Result<Vec<Note>> {
        self.enter("list_archived", None)?;
        Ok(self.filtered(true))
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>> {
        self.enter("update", Some(id))?;
        Ok(self.modify(id, |note| {
            note.title = draft.title.clone();
            note.content = draft.content.clone();
        }))
    }

    async fn archive(&self, id: NoteId) -> Result<Option<Note>> {
        self.enter("archive", Some(id))?;
        Ok(self.modify(id, |note| note.archived = true))
    }

    async fn unarchive(&self, id: NoteId) -> Result<Option<Note>> {
        self.enter("unarchive", Some(id))?;
        Ok(self.modify(id, |note| note.archived = false))
    }

    async fn delete(&self, id: NoteId) -> Result<bool> {
        self.enter("delete", Some(id))?;
        let mut store = self.store.lock().unwrap();
        let before = store.notes.len();
        store.notes.retain(|n| n.id != id);
        Ok(store.notes.len() != before)
    }
}
