//! Navigation targets.

use notekeep_core::NoteId;
use serde::Serialize;
use std::fmt;

/// A screen the front end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    ActiveNotes,
    ArchivedNotes,
    NewNote,
    Note(NoteId),
    NotFound,
}

impl Route {
    /// Resolve a path. Unknown paths resolve to [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" | "/notes/active" => Self::ActiveNotes,
            "/notes/archived" => Self::ArchivedNotes,
            "/notes/new" => Self::NewNote,
            _ => trimmed
                .strip_prefix("/notes/")
                .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|id| id.parse().ok())
                .map(Self::Note)
                .unwrap_or(Self::NotFound),
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::ActiveNotes => "/notes/active".to_string(),
            Self::ArchivedNotes => "/notes/archived".to_string(),
            Self::NewNote => "/notes/new".to_string(),
            Self::Note(id) => format!("/notes/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What the front end should do after a controller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Navigate(Route),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::ActiveNotes);
        assert_eq!(Route::parse("/notes/active"), Route::ActiveNotes);
        assert_eq!(Route::parse("/notes/archived/"), Route::ArchivedNotes);
        assert_eq!(Route::parse("/notes/new"), Route::NewNote);
        assert_eq!(Route::parse("/notes/42"), Route::Note(42));
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/notes/abc"), Route::NotFound);
        assert_eq!(Route::parse("/notes/-1"), Route::NotFound);
        assert_eq!(Route::parse("/notes/"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
        assert_eq!(Route::parse("/notes/1/archive"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        for route in [
            Route::ActiveNotes,
            Route::ArchivedNotes,
            Route::NewNote,
            Route::Note(7),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::NotFound.to_string(), "/404");
    }
}
