//! # notekeep-client
//!
//! HTTP implementation of [`notekeep_core::NotesApi`].
//!
//! # Example
//!
//! ```rust,no_run
//! use notekeep_client::{ClientConfig, NotesClient};
//! use notekeep_core::NotesApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = NotesClient::new(ClientConfig::from_env()).unwrap();
//!     let notes = client.list_active().await.unwrap();
//!     println!("{} active notes", notes.len());
//! }
//! ```

pub mod client;
pub mod config;

pub use client::NotesClient;
pub use config::{ClientConfig, ConfigError};
