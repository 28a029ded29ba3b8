//! Notes REST client.
//!
//! Maps each [`NotesApi`] operation onto one request against
//! `{base_url}/api/notes`. A 404 on an id-addressed operation becomes the
//! absent sentinel; every other non-success status is an [`Error::Status`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use notekeep_core::{Collection, Error, Note, NoteDraft, NoteId, NotesApi, Result};

use crate::config::ClientConfig;

/// HTTP client for the notes backend.
#[derive(Debug, Clone)]
pub struct NotesClient {
    client: Client,
    notes_url: String,
}

impl NotesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let notes_url = config.notes_url();
        info!(url = %notes_url, timeout_secs = config.timeout_secs, "Initializing notes client");

        Ok(Self { client, notes_url })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/{}", self.notes_url, id)
    }

    /// Send a request, turning transport failures into [`Error::Request`].
    async fn send(&self, op: &'static str, request: RequestBuilder) -> Result<Response> {
        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!(op, error = %e, "Request to notes backend failed");
            Error::Request(format!("Request failed: {}", e))
        })?;
        debug!(
            op,
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Notes backend responded"
        );
        Ok(response)
    }

    /// Decode a successful response body or map the status to an error.
    async fn read_body<T: DeserializeOwned>(op: &'static str, response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::status_error(op, response).await);
        }
        response.json::<T>().await.map_err(|e| {
            warn!(op, error = %e, "Malformed response from notes backend");
            Error::Serialization(format!("Failed to parse response: {}", e))
        })
    }

    /// Like [`Self::read_body`], with 404 mapped to `None`.
    async fn read_optional_note(
        op: &'static str,
        id: NoteId,
        response: Response,
    ) -> Result<Option<Note>> {
        if response.status() == StatusCode::NOT_FOUND {
            debug!(op, note_id = id, "Note not found");
            return Ok(None);
        }
        Self::read_body(op, response).await.map(Some)
    }

    async fn status_error(op: &'static str, response: Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(op, status = status.as_u16(), error = %message, "Unexpected status from notes backend");
        Error::Status {
            status: status.as_u16(),
            message,
        }
    }

    async fn fetch_list(&self, collection: Collection) -> Result<Vec<Note>> {
        let url = format!("{}/{}", self.notes_url, collection.as_str());
        debug!(op = "list", collection = %collection, "Listing notes");

        let response = self.send("list", self.client.get(&url)).await?;
        let notes: Vec<Note> = Self::read_body("list", response).await?;

        debug!(
            op = "list",
            collection = %collection,
            result_count = notes.len(),
            "Listed notes"
        );
        Ok(notes)
    }
}

/// Best human-readable message for a failed response.
///
/// Spring-style error bodies carry `message` and `error` fields; anything
/// else falls back to the raw body, then the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[async_trait]
impl NotesApi for NotesClient {
    async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        debug!(op = "create", title_len = draft.title.len(), "Creating note");

        let request = self.client.post(&self.notes_url).json(draft);
        let response = self.send("create", request).await?;
        let note: Note = Self::read_body("create", response).await?;

        info!(op = "create", note_id = note.id, "Note created");
        Ok(note)
    }

    async fn get(&self, id: NoteId) -> Result<Option<Note>> {
        debug!(op = "get", note_id = id, "Fetching note");

        let response = self.send("get", self.client.get(self.note_url(id))).await?;
        Self::read_optional_note("get", id, response).await
    }

    async fn list_active(&self) -> Result<Vec<Note>> {
        self.fetch_list(Collection::Active).await
    }

    async fn list_archived(&self) -> Result<Vec<Note>> {
        self.fetch_list(Collection::Archived).await
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>> {
        debug!(op = "update", note_id = id, "Updating note");

        let request = self.client.put(self.note_url(id)).json(draft);
        let response = self.send("update", request).await?;
        let note = Self::read_optional_note("update", id, response).await?;

        if note.is_some() {
            info!(op = "update", note_id = id, "Note updated");
        }
        Ok(note)
    }

    async fn archive(&self, id: NoteId) -> Result<Option<Note>> {
        debug!(op = "archive", note_id = id, "Archiving note");

        let url = format!("{}/archive", self.note_url(id));
        let response = self.send("archive", self.client.put(url)).await?;
        let note = Self::read_optional_note("archive", id, response).await?;

        if note.is_some() {
            info!(op = "archive", note_id = id, "Note archived");
        }
        Ok(note)
    }

    async fn unarchive(&self, id: NoteId) -> Result<Option<Note>> {
        debug!(op = "unarchive", note_id = id, "Unarchiving note");

        let url = format!("{}/unarchive", self.note_url(id));
        let response = self.send("unarchive", self.client.put(url)).await?;
        let note = Self::read_optional_note("unarchive", id, response).await?;

        if note.is_some() {
            info!(op = "unarchive", note_id = id, "Note unarchived");
        }
        Ok(note)
    }

    async fn delete(&self, id: NoteId) -> Result<bool> {
        debug!(op = "delete", note_id = id, "Deleting note");

        let response = self
            .send("delete", self.client.delete(self.note_url(id)))
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(op = "delete", note_id = id, "Note not found");
            return Ok(false);
        }
        if !status.is_success() {
            return Err(Self::status_error("delete", response).await);
        }

        info!(op = "delete", note_id = id, "Note deleted");
        Ok(true)
    }
}
