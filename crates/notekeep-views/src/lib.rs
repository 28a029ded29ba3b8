//! # notekeep-views
//!
//! Headless view controllers for the notes client.
//!
//! Each controller owns the state of one screen and keeps it in step with
//! the backend through a shared [`NotesApi`](notekeep_core::NotesApi):
//! - [`ListController`]: the active or archived collection
//! - [`DetailController`]: a single note, with in-place editing
//! - [`CreateController`]: the new-note form
//!
//! Controllers never return errors. Failures become a state (`Error`,
//! `NotFound`) or an inline notice carrying one of the strings in
//! [`messages`]; the underlying error is logged.

pub mod create;
pub mod detail;
pub mod list;
pub mod messages;
pub mod route;

#[cfg(test)]
pub mod mock;

pub use create::CreateController;
pub use detail::{DetailController, DetailState};
pub use list::{ListController, ListState, ListView};
pub use route::{Route, Transition};
