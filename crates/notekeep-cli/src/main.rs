//! notekeep: command-line client for the notes REST backend.
//!
//! Each subcommand drives one of the view controllers against the backend
//! and renders the resulting state as text or JSON.

mod logging;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::debug;

use notekeep_client::{ClientConfig, NotesClient};
use notekeep_core::{Collection, NoteId, NotesApi};
use notekeep_views::{
    CreateController, DetailController, DetailState, ListController, Route, Transition,
};

use render::{Outcome, Renderer};

#[derive(Parser)]
#[command(name = "notekeep")]
#[command(author, version, about = "Command-line client for a notes service")]
#[command(propagate_version = true)]
struct Cli {
    /// Backend base URL (overrides NOTEKEEP_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (overrides NOTEKEEP_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active notes, or archived ones with --archived
    List {
        #[arg(long)]
        archived: bool,
    },

    /// Show a single note
    Show { id: NoteId },

    /// Create a note
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Change the title and/or content of a note
    Edit {
        id: NoteId,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// Move a note to the archived collection
    Archive { id: NoteId },

    /// Move a note back to the active collection
    Unarchive { id: NoteId },

    /// Permanently delete a note
    Delete {
        id: NoteId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show which screen a path resolves to
    Route { path: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let _log_guard = logging::init();

    match run(cli).await {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let Cli {
        url,
        timeout,
        json,
        command,
    } = cli;
    let renderer = Renderer::new(json);

    match command {
        Commands::Route { path } => renderer.route(&path, Route::parse(&path)),
        Commands::List { archived } => {
            let collection = if archived {
                Collection::Archived
            } else {
                Collection::Active
            };
            let mut list = ListController::new(connect(url, timeout)?, collection);
            list.load().await;
            renderer.list(&list)
        }
        Commands::Show { id } => {
            let detail = loaded_detail(connect(url, timeout)?, id).await;
            renderer.detail(&detail)
        }
        Commands::Create { title, content } => {
            let mut create = CreateController::new(connect(url, timeout)?);
            let draft = create.draft_mut();
            draft.title = title;
            draft.content = content;
            let next = match create.submit().await {
                Transition::Navigate(route) => route,
                Transition::Stay => Route::NewNote,
            };
            renderer.created(&create, next)
        }
        Commands::Edit { id, title, content } => {
            cmd_edit(&renderer, connect(url, timeout)?, id, title, content).await
        }
        Commands::Archive { id } => {
            cmd_set_archived(&renderer, connect(url, timeout)?, id, true).await
        }
        Commands::Unarchive { id } => {
            cmd_set_archived(&renderer, connect(url, timeout)?, id, false).await
        }
        Commands::Delete { id, yes } => {
            cmd_delete(&renderer, connect(url, timeout)?, id, yes).await
        }
    }
}

fn connect(url: Option<String>, timeout: Option<u64>) -> anyhow::Result<Arc<dyn NotesApi>> {
    let config = client_config(url, timeout);
    debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Client configured");
    let client = NotesClient::new(config).context("invalid client configuration")?;
    Ok(Arc::new(client))
}

/// Environment config with command-line overrides applied.
fn client_config(url: Option<String>, timeout: Option<u64>) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = url {
        config.base_url = url;
    }
    if let Some(timeout) = timeout {
        config.timeout_secs = timeout;
    }
    config
}

async fn loaded_detail(api: Arc<dyn NotesApi>, id: NoteId) -> DetailController {
    let mut detail = DetailController::new(api, id);
    detail.load().await;
    detail
}

async fn cmd_edit(
    renderer: &Renderer,
    api: Arc<dyn NotesApi>,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
) -> anyhow::Result<Outcome> {
    if title.is_none() && content.is_none() {
        bail!("nothing to change: pass --title and/or --content");
    }

    let mut detail = loaded_detail(api, id).await;
    if !detail.begin_edit() {
        return renderer.detail(&detail);
    }
    if let Some(draft) = detail.draft_mut() {
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(content) = content {
            draft.content = content;
        }
    }
    detail.save().await;
    renderer.detail(&detail)
}

async fn cmd_set_archived(
    renderer: &Renderer,
    api: Arc<dyn NotesApi>,
    id: NoteId,
    archived: bool,
) -> anyhow::Result<Outcome> {
    let mut detail = loaded_detail(api, id).await;
    let current = match detail.state() {
        DetailState::Viewing(note) => note.archived,
        _ => return renderer.detail(&detail),
    };
    if current != archived {
        detail.toggle_archive().await;
    } else {
        debug!(note_id = id, archived, "Archive status already set");
    }
    renderer.detail(&detail)
}

async fn cmd_delete(
    renderer: &Renderer,
    api: Arc<dyn NotesApi>,
    id: NoteId,
    yes: bool,
) -> anyhow::Result<Outcome> {
    let mut detail = loaded_detail(api, id).await;
    if !detail.request_delete() {
        return renderer.detail(&detail);
    }

    let confirmed = match detail.confirmation_prompt() {
        Some(_) if yes => true,
        Some(prompt) => ask(prompt).context("failed to read confirmation")?,
        None => false,
    };
    if !confirmed {
        detail.cancel_delete();
        return renderer.delete_cancelled(id);
    }

    match detail.confirm_delete().await {
        Transition::Navigate(next) => renderer.deleted(id, next),
        Transition::Stay => renderer.detail(&detail),
    }
}

/// Ask a yes/no question on stderr; anything but "y" or "yes" is a no.
fn ask(prompt: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", prompt)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
