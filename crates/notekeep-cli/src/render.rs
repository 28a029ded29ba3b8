//! Text and JSON output for controller state.
//!
//! Results go to stdout. Failure messages go to stderr in text mode and
//! to stdout as a `{"state", "message"}` document in JSON mode.

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;

use notekeep_core::{defaults, Note, NoteId};
use notekeep_views::messages;
use notekeep_views::{
    CreateController, DetailController, DetailState, ListController, ListState, Route,
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const INCOMPLETE: &str = "Request did not complete.";

/// How a command ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

pub struct Renderer {
    json: bool,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn list(&self, list: &ListController) -> Result<Outcome> {
        let view = match list.state() {
            ListState::Ready(view) => view,
            ListState::Error(message) => return self.failure("error", message),
            ListState::Loading => return self.failure("loading", INCOMPLETE),
        };

        if self.json {
            self.print_json(&json!({
                "collection": list.collection().as_str(),
                "notes": view.notes(),
                "notice": view.notice(),
            }))?;
        } else if let Some(message) = list.empty_message() {
            println!("{}", message);
        } else {
            let cards: Vec<String> = view.notes().iter().map(card).collect();
            println!("{}", cards.join("\n\n"));
        }

        match view.notice() {
            Some(notice) if !self.json => {
                eprintln!("{}", notice);
                Ok(Outcome::Failure)
            }
            Some(_) => Ok(Outcome::Failure),
            None => Ok(Outcome::Success),
        }
    }

    pub fn detail(&self, detail: &DetailController) -> Result<Outcome> {
        if let Some(notice) = detail.notice() {
            return self.failure("notice", notice);
        }
        match detail.state() {
            DetailState::Viewing(note) | DetailState::Editing { note, .. } => {
                self.note(note)?;
                Ok(Outcome::Success)
            }
            DetailState::NotFound => self.failure("not_found", messages::NOTE_NOT_FOUND),
            DetailState::Error(message) => self.failure("error", message),
            DetailState::Loading => self.failure("loading", INCOMPLETE),
        }
    }

    pub fn created(&self, create: &CreateController, next: Route) -> Result<Outcome> {
        let Some(note) = create.created() else {
            return self.failure(
                "notice",
                create.notice().unwrap_or(messages::CREATE_FAILED),
            );
        };

        if self.json {
            self.print_json(&json!({ "created": note, "navigate": next }))?;
        } else {
            println!("Created note #{}.\n\n{}", note.id, card(note));
        }
        Ok(Outcome::Success)
    }

    pub fn deleted(&self, id: NoteId, next: Route) -> Result<Outcome> {
        if self.json {
            self.print_json(&json!({ "deleted": id, "navigate": next }))?;
        } else {
            println!("Deleted note #{}.", id);
        }
        Ok(Outcome::Success)
    }

    pub fn delete_cancelled(&self, id: NoteId) -> Result<Outcome> {
        if self.json {
            self.print_json(&json!({ "cancelled": id }))?;
        } else {
            println!("Kept note #{}.", id);
        }
        Ok(Outcome::Success)
    }

    pub fn route(&self, input: &str, route: Route) -> Result<Outcome> {
        if self.json {
            self.print_json(&json!({
                "input": input,
                "resolved": route,
                "path": route.path(),
            }))?;
        } else {
            println!("{} -> {}", input, route);
        }
        Ok(match route {
            Route::NotFound => Outcome::Failure,
            _ => Outcome::Success,
        })
    }

    fn note(&self, note: &Note) -> Result<()> {
        if self.json {
            self.print_json(note)
        } else {
            println!("{}", full(note));
            Ok(())
        }
    }

    fn failure(&self, state: &str, message: &str) -> Result<Outcome> {
        if self.json {
            self.print_json(&json!({ "state": state, "message": message }))?;
        } else {
            eprintln!("{}", message);
        }
        Ok(Outcome::Failure)
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

fn timestamp(at: &NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// List entry: title, status, a content preview and both timestamps.
fn card(note: &Note) -> String {
    format!(
        "#{} {} [{}]\n    {}\n    Created: {}  Modified: {}",
        note.id,
        note.title,
        note.status_label(),
        note.preview(defaults::PREVIEW_LENGTH),
        timestamp(&note.created_at),
        timestamp(&note.last_modified_at),
    )
}

fn full(note: &Note) -> String {
    format!(
        "#{} {}\nStatus: {}\nCreated: {}\nModified: {}\n\n{}",
        note.id,
        note.title,
        note.status_label(),
        timestamp(&note.created_at),
        timestamp(&note.last_modified_at),
        note.content,
    )
}
