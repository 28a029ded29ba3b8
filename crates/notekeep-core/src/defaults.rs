//! Centralized default constants for notekeep.
//!
//! All crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// BACKEND
// =============================================================================

/// Default backend base URL.
pub const SERVER_URL: &str = "http://127.0.0.1:8080";

/// Fixed path of the notes resource, relative to the base URL.
pub const NOTES_PATH: &str = "/api/notes";

/// Timeout for backend requests in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("notekeep/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// PRESENTATION
// =============================================================================

/// Characters of content shown on a note card before truncation.
pub const PREVIEW_LENGTH: usize = 100;

/// Suffix appended to truncated previews.
pub const PREVIEW_ELLIPSIS: &str = "...";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Environment variable overriding [`SERVER_URL`].
pub const ENV_URL: &str = "NOTEKEEP_URL";

/// Environment variable overriding [`REQUEST_TIMEOUT_SECS`].
pub const ENV_TIMEOUT_SECS: &str = "NOTEKEEP_TIMEOUT_SECS";
