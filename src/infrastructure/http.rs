// src/infrastructure/http.rs
use crate::application::{NoteRepository, PageReloader};
use crate::domain::{DomainError, Note, NoteDraft};
use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

/// Envelope returned by every mutating endpoint.
#[derive(Debug, Deserialize)]
struct ActionOutcome {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

fn transport(err: reqwest::Error) -> DomainError {
    DomainError::Transport(err.to_string())
}

/// The live implementation of `NoteRepository`, one fixed endpoint per
/// method. No retries and no request timeout, matching how the web UI
/// talks to the same endpoints.
pub struct HttpNoteRepository {
    client: Client,
    base_url: Url,
}

impl HttpNoteRepository {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;
        debug!(%base_url, "Created HTTP note repository");
        Ok(Self { client, base_url })
    }

    /// A reloader sharing this repository's connection pool.
    pub fn page_reloader(&self) -> Result<HttpPageReloader, DomainError> {
        HttpPageReloader::with_client(self.client.clone(), &self.base_url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, DomainError> {
        self.base_url
            .join(path)
            .map_err(|e| DomainError::Transport(e.to_string()))
    }

    fn multipart_form(draft: &NoteDraft) -> Result<multipart::Form, DomainError> {
        let mut form = multipart::Form::new()
            .text("title", draft.title.clone())
            .text("content", draft.content.clone());

        if let Some(image) = &draft.image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(image.mime)
                .map_err(transport)?;
            form = form.part("image", part);
        }

        Ok(form)
    }

    /// Unwrap the `{success, message}` envelope. The server's message is
    /// surfaced verbatim when present; the defaults cover an empty one.
    fn read_outcome(
        response: Response,
        ok_default: &str,
        err_default: &str,
    ) -> Result<String, DomainError> {
        let outcome: ActionOutcome = response.json().map_err(transport)?;
        if outcome.success {
            Ok(outcome.message.unwrap_or_else(|| ok_default.to_string()))
        } else {
            Err(DomainError::Rejected(
                outcome.message.unwrap_or_else(|| err_default.to_string()),
            ))
        }
    }

    fn submit(
        &self,
        url: Url,
        form: multipart::Form,
        ok_default: &str,
        err_default: &str,
    ) -> Result<String, DomainError> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(transport)?;
        debug!(status = %response.status(), "Received submit response");
        Self::read_outcome(response, ok_default, err_default)
    }
}

impl NoteRepository for HttpNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        let url = self.endpoint(&format!("/get_note/{id}"))?;
        let response = self.client.get(url).send().map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NoteNotFound(id));
        }
        let response = response.error_for_status().map_err(transport)?;
        response.json().map_err(transport)
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    fn add_note(&mut self, draft: &NoteDraft) -> Result<String, DomainError> {
        let url = self.endpoint("/add_note")?;
        let form = Self::multipart_form(draft)?;
        self.submit(url, form, "Note added successfully", "Failed to add note")
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    fn edit_note(&mut self, id: i64, draft: &NoteDraft) -> Result<String, DomainError> {
        let url = self.endpoint(&format!("/edit_note/{id}"))?;
        let form = Self::multipart_form(draft)?;
        self.submit(
            url,
            form,
            "Note updated successfully",
            "Failed to update note",
        )
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<String, DomainError> {
        let url = self.endpoint(&format!("/delete_note/{id}"))?;
        let response = self.client.post(url).send().map_err(transport)?;
        Self::read_outcome(
            response,
            "Note deleted successfully",
            "Failed to delete note",
        )
    }
}

/// Re-requests the notes listing page and discards the body, the
/// client-side equivalent of `location.reload()`.
pub struct HttpPageReloader {
    client: Client,
    url: Url,
}

impl HttpPageReloader {
    pub fn new(base_url: &Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, base_url)?)
    }

    fn with_client(client: Client, base_url: &Url) -> Result<Self, DomainError> {
        let url = base_url
            .join("/notes")
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        Ok(Self { client, url })
    }
}

impl PageReloader for HttpPageReloader {
    #[instrument(level = "debug", skip(self))]
    fn reload(&mut self) -> Result<(), DomainError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(transport)?;
        response.error_for_status().map_err(transport)?;
        debug!("Reloaded notes page");
        Ok(())
    }
}
