// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return the server's confirmation message.
    /// Confirmation with the user happens before this is called.
    pub fn delete_note(&mut self, note_id: i64) -> Result<String, DomainError> {
        self.repository.delete_note(note_id)
    }
}
