// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};
use url::Url;

use crate::application::{
    NoteAdder, NoteDeleter, NoteEditor, NoteViewer, Notifier, SubmitFlow,
};
use crate::cli::args::{Args, Command};
use crate::domain::{DomainError, ImageAttachment, NoteDraft};
use crate::infrastructure::config::Config;
use crate::infrastructure::renderer::PageRenderer;
use crate::infrastructure::{media, HttpNoteRepository, HttpPageReloader};
use crate::ports::{HtmlPresenter, TerminalNotifier};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notectl with arguments");

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(find_config_path()?)?,
    };
    let base_url = resolve_server_url(&args, &config)?;
    debug!(%base_url, "Resolved server URL");

    let repository = HttpNoteRepository::new(base_url.clone())?;
    let mut notifier = TerminalNotifier::new();

    match args.command {
        Command::Add {
            title,
            content,
            image,
        } => {
            info!(%title, "Adding note");
            let mut flow = submit_flow(&repository, &config)?;
            let outcome = prepare_attachment(image.as_deref()).and_then(|attachment| {
                let mut draft = NoteDraft::new(title, content);
                draft.image = attachment;
                NoteAdder::new(repository).add_note(&draft)
            });
            flow.complete(outcome);
        }

        Command::Edit {
            note_id,
            title,
            content,
            image,
        } => {
            info!(note_id, "Editing note");
            let mut flow = submit_flow(&repository, &config)?;
            let mut editor = NoteEditor::new(repository);
            let outcome = prepare_attachment(image.as_deref()).and_then(|attachment| {
                let mut draft = editor.draft_for_edit(note_id, title, content)?;
                draft.image = attachment;
                editor.edit_note(note_id, &draft)
            });
            flow.complete(outcome);
        }

        Command::View { note_id, json } => {
            info!(note_id, "Viewing note");
            let mut viewer = NoteViewer::new(repository);
            match viewer.view_note(note_id) {
                Ok(note) if json => println!("{}", serde_json::to_string_pretty(&note)?),
                Ok(note) => {
                    let presenter = HtmlPresenter::new(base_url.clone());
                    let html = presenter.render(&note);
                    let mut renderer = PageRenderer::new();
                    let temp_path = renderer.create_temp_file(&html, "note.html")?;
                    renderer.open_in_browser(&temp_path)?;
                }
                Err(err) => notifier.notify(err.severity(), &err.to_string()),
            }
        }

        Command::Delete { note_id, yes } => {
            if !yes && !confirm_delete(note_id)? {
                info!(note_id, "Deletion cancelled");
                return Ok(());
            }
            info!(note_id, "Deleting note");
            let mut flow = submit_flow(&repository, &config)?;
            flow.complete(NoteDeleter::new(repository).delete_note(note_id));
        }

        Command::Preview { path } => match media::load_attachment(&path) {
            Ok(image) => {
                let presenter = HtmlPresenter::new(base_url.clone());
                let html = presenter.render_preview(&image);
                let mut renderer = PageRenderer::new();
                let temp_path = renderer.create_temp_file(&html, "preview.html")?;
                renderer.open_in_browser(&temp_path)?;
            }
            Err(err) => notifier.notify(err.severity(), &err.to_string()),
        },
    }

    Ok(())
}

fn submit_flow(
    repository: &HttpNoteRepository,
    config: &Config,
) -> Result<SubmitFlow<TerminalNotifier, HttpPageReloader>> {
    let reloader = repository.page_reloader()?;
    Ok(SubmitFlow::new(
        TerminalNotifier::new(),
        reloader,
        Duration::from_millis(config.refresh.delay_ms),
    ))
}

/// Run the selection-time checks on the image, if any. A validation
/// failure here aborts the action before a draft even exists.
fn prepare_attachment(path: Option<&Path>) -> Result<Option<ImageAttachment>, DomainError> {
    path.map(media::load_attachment).transpose()
}

pub fn find_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(dir.join("notectl").join("config.toml"))
}

fn resolve_server_url(args: &Args, config: &Config) -> Result<Url> {
    match &args.server {
        Some(url) => Ok(url.clone()),
        None => config
            .server
            .url
            .parse()
            .with_context(|| format!("Invalid server URL in config: {}", config.server.url)),
    }
}

fn confirm_delete(note_id: i64) -> Result<bool> {
    eprint!("Delete note {note_id}? This action cannot be undone. [y/N] ");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read confirmation")?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
