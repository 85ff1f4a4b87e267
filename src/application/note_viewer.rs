// src/application/note_viewer.rs
use crate::domain::{DomainError, Note, NoteDraft};
use anyhow::Result;

/// The wire-facing seam of the controller. One method per endpoint; every
/// call issues at most one HTTP request. Mutating methods return the
/// server's success message; a `success: false` envelope arrives here as
/// `DomainError::Rejected`.
pub trait NoteRepository {
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    fn add_note(&mut self, draft: &NoteDraft) -> Result<String, DomainError>;

    fn edit_note(&mut self, id: i64, draft: &NoteDraft) -> Result<String, DomainError>;

    fn delete_note(&mut self, id: i64) -> Result<String, DomainError>;
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, note_id: i64) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}
