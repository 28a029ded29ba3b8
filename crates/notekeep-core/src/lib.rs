//! # notekeep-core
//!
//! Core types, traits, and abstractions for the notekeep client.
//!
//! This crate provides the note transfer models, the error type, and the
//! [`NotesApi`] trait that the HTTP client implements and the view
//! controllers consume.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
